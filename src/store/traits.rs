use crate::models::{DriverApplication, Listing};
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for listing backings
///
/// The backing is chosen once at startup and shared by every request.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Every listing, in insertion order
    async fn get_all(&self) -> Result<Vec<Listing>>;

    /// One listing by id
    async fn get(&self, id: &str) -> Result<Option<Listing>> {
        Ok(self.get_all().await?.into_iter().find(|l| l.id == id))
    }

    /// Append a validated listing and return its id
    async fn append(&self, listing: Listing) -> Result<String>;

    /// Keep a driver application (or at least log it)
    async fn record_driver_application(&self, application: DriverApplication) -> Result<()>;

    /// Get the name of the backing
    fn backend_name(&self) -> &'static str;
}
