pub mod config;
pub mod drivers;
pub mod error;
pub mod listings;
pub mod models;
pub mod server;
pub mod store;

pub use config::Config;
