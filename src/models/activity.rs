use serde::{Deserialize, Serialize};

/// One extracurricular offering. The activity name is the catalog key and is
/// not repeated inside the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}
