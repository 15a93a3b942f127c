use axum::{extract::State, Json};

use crate::catalog::{Catalog, SharedCatalog};
use crate::services::directory_service;

/// GET /activities — the whole catalog, keyed by activity name.
pub async fn activities_handler(State(catalog): State<SharedCatalog>) -> Json<Catalog> {
    Json(directory_service::list_activities(&catalog))
}
