//! Application setup and router configuration.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    create_driver_application, create_listing, health_handler, list_listings, search_listings,
    show_listing, storage_types,
};
use crate::store::ListingStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListingStore>,
}

/// Build the Axum application router around an already chosen store
pub fn build_app(store: Arc<dyn ListingStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/listings", get(list_listings).post(create_listing))
        .route("/listings/search", get(search_listings))
        .route("/listings/:id", get(show_listing))
        .route("/drivers", post(create_driver_application))
        .route("/storage-types", get(storage_types))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
