use crate::listings::seed::demo_listings;
use crate::models::{DriverApplication, Listing};
use crate::store::traits::ListingStore;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Process-lifetime listing store
///
/// Append-only; everything is lost on restart.
#[derive(Clone, Default)]
pub struct MemoryStore {
    listings: Arc<RwLock<Vec<Listing>>>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demonstration listings
    pub fn seeded() -> Self {
        let listings = demo_listings();
        info!("📋 Seeding in-memory store with {} demo listings", listings.len());
        Self {
            listings: Arc::new(RwLock::new(listings)),
        }
    }

    pub async fn len(&self) -> usize {
        self.listings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.listings.read().await.is_empty()
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn get_all(&self) -> Result<Vec<Listing>> {
        let listings = self.listings.read().await;
        debug!("Read {} listings from memory", listings.len());
        Ok(listings.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Listing>> {
        let listings = self.listings.read().await;
        Ok(listings.iter().find(|l| l.id == id).cloned())
    }

    async fn append(&self, listing: Listing) -> Result<String> {
        let id = listing.id.clone();
        self.listings.write().await.push(listing);
        Ok(id)
    }

    async fn record_driver_application(&self, application: DriverApplication) -> Result<()> {
        info!(
            full_name = %application.full_name,
            vehicle_type = %application.vehicle_type,
            areas_served = %application.areas_served,
            submitted_at = %application.submitted_at,
            "Driver application received"
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::validate::normalize_listing;
    use crate::listings::validate::tests::valid_submission;
    use chrono::Utc;

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seeded_store_has_demo_listings() {
        let store = MemoryStore::seeded();
        assert_eq!(store.len().await, 8);
        let listing = store.get("5").await.unwrap().unwrap();
        assert_eq!(listing.county, "Machakos");
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_keeps_insertion_order() {
        let store = MemoryStore::seeded();
        let listing = normalize_listing(&valid_submission(), "new-1".into(), Utc::now()).unwrap();

        let id = store.append(listing.clone()).await.unwrap();
        assert_eq!(id, "new-1");

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 9);
        assert_eq!(all.last(), Some(&listing));
    }

    #[tokio::test]
    async fn test_clones_share_the_collection() {
        let store = MemoryStore::new();
        let handle = store.clone();
        let listing = normalize_listing(&valid_submission(), "shared".into(), Utc::now()).unwrap();
        handle.append(listing).await.unwrap();
        assert_eq!(store.len().await, 1);
    }
}
