use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::catalog::SharedCatalog;
use crate::services::directory_service::{self, DirectoryError};

#[derive(Debug, Deserialize)]
pub struct StudentParams {
    pub email: String,
}

fn rejection(err: DirectoryError) -> (StatusCode, Json<Value>) {
    (
        err.status(),
        Json(serde_json::json!({ "detail": err.to_string() })),
    )
}

/// POST /activities/:activity_name/signup?email=...
///
/// The activity name arrives percent-encoded in the path; the `Path`
/// extractor decodes it before the catalog lookup.
pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(params): Query<StudentParams>,
    State(catalog): State<SharedCatalog>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match directory_service::signup(&catalog, &activity_name, &params.email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %params.email, "signup accepted");
            Ok(Json(serde_json::json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %params.email, "signup rejected: {e}");
            Err(rejection(e))
        }
    }
}

/// POST /activities/:activity_name/unregister?email=...
pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(params): Query<StudentParams>,
    State(catalog): State<SharedCatalog>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match directory_service::unregister(&catalog, &activity_name, &params.email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %params.email, "unregister accepted");
            Ok(Json(serde_json::json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %params.email, "unregister rejected: {e}");
            Err(rejection(e))
        }
    }
}
