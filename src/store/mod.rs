pub mod memory;
pub mod supabase;
pub mod traits;

pub use memory::MemoryStore;
pub use supabase::SupabaseStore;
pub use traits::ListingStore;

use crate::config::{Backing, Config};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Pick the listing backing once, at startup
pub fn from_config(config: &Config) -> Result<Arc<dyn ListingStore>> {
    let store: Arc<dyn ListingStore> = match config.backing() {
        Backing::Durable { url, service_key } => {
            info!(url = %url, timeout = ?config.store_timeout, "Using Supabase listing store");
            Arc::new(SupabaseStore::new(&url, &service_key, config.store_timeout)?)
        }
        Backing::Transient => {
            info!("Using in-memory listing store");
            Arc::new(MemoryStore::seeded())
        }
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_env_selects_seeded_memory() {
        let config = Config::from_lookup(|_| None).unwrap();
        let store = from_config(&config).unwrap();
        assert_eq!(store.backend_name(), "memory");
        assert_eq!(store.get_all().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_supabase_env_selects_durable() {
        let config = Config::from_lookup(|key| match key {
            "SUPABASE_URL" => Some("http://127.0.0.1:54321".to_string()),
            "SUPABASE_SERVICE_ROLE_KEY" => Some("key".to_string()),
            _ => None,
        })
        .unwrap();
        let store = from_config(&config).unwrap();
        assert_eq!(store.backend_name(), "supabase");
    }
}
