use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::Activity;

/// Mapping from activity name to its record.
pub type Catalog = BTreeMap<String, Activity>;

/// Catalog handle injected into request handlers. One lock guards the whole
/// catalog; mutations to the same activity serialize on the write lock.
pub type SharedCatalog = Arc<RwLock<Catalog>>;

fn activity(
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The fixed catalog the service starts with. Only `participants` ever
/// changes after this; activities are not created or deleted at runtime.
pub fn seed() -> Catalog {
    Catalog::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Club".to_string(),
            activity(
                "Practice drills and play friendly matches in the school gym",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Science Olympiad".to_string(),
            activity(
                "Prepare for regional science competitions in teams",
                "Saturdays, 10:00 AM - 12:00 PM",
                18,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_string(),
            activity(
                "Explore painting, drawing, and mixed media projects",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            activity(
                "Act, direct, and produce the spring school play",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club".to_string(),
            activity(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ])
}

/// Fresh shared catalog seeded with the fixed activity set. `main` builds one
/// per process; tests build one per case.
pub fn seed_shared() -> SharedCatalog {
    Arc::new(RwLock::new(seed()))
}
