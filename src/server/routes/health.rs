use axum::{extract::State, Json};
use serde::Serialize;

use crate::listings::catalog::{self, StorageTypeDetails};
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    backend: &'static str,
}

/// Liveness check; does not touch the listing backend
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        backend: state.store.backend_name(),
    })
}

/// `GET /storage-types`
pub async fn storage_types() -> Json<Vec<StorageTypeDetails>> {
    Json(catalog::all())
}
