pub mod app;
pub mod model;
pub mod routes;

pub use app::{build_app, AppState};
