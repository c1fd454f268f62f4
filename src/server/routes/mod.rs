// HTTP routes
pub mod drivers;
pub mod health;
pub mod listings;

pub use drivers::*;
pub use health::*;
pub use listings::*;
