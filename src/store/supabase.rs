use crate::models::{DriverApplication, Listing};
use crate::store::memory::MemoryStore;
use crate::store::traits::ListingStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const LISTINGS_TABLE: &str = "listings";
const DRIVERS_TABLE: &str = "driver_applications";

/// Listing store backed by a hosted PostgREST endpoint (Supabase)
///
/// Writes that fail land in an in-memory fallback so the submission is not
/// lost for the lifetime of the process; reads never hide a failure.
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    service_key: String,
    fallback: MemoryStore,
}

impl SupabaseStore {
    /// Create a store for `base_url` with one bounded timeout for every call
    pub fn new(base_url: &str, service_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
            fallback: MemoryStore::new(),
        })
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        self.client
            .request(method, url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn select_listings(&self, filter: Option<(&str, String)>) -> Result<Vec<Listing>> {
        let mut request = self
            .request(Method::GET, LISTINGS_TABLE)
            .query(&[("select", "*"), ("order", "created_at.asc")]);
        if let Some(filter) = filter {
            request = request.query(&[filter]);
        }

        let response = request
            .send()
            .await
            .context("Failed to reach listing backend")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Listing backend returned status: {}", status);
        }

        let rows: Vec<Listing> = response
            .json()
            .await
            .context("Failed to decode listing rows")?;
        debug!("Fetched {} listings from backend", rows.len());
        Ok(rows)
    }

    async fn insert<T: Serialize + Sync>(&self, table: &str, row: &T) -> Result<()> {
        let response = self
            .request(Method::POST, table)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .with_context(|| format!("Failed to reach backend for insert into {table}"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Insert into {} returned status: {}", table, status);
        }
        Ok(())
    }
}

#[async_trait]
impl ListingStore for SupabaseStore {
    async fn get_all(&self) -> Result<Vec<Listing>> {
        let mut listings = self.select_listings(None).await?;
        listings.extend(self.fallback.get_all().await?);
        Ok(listings)
    }

    async fn get(&self, id: &str) -> Result<Option<Listing>> {
        let found = self
            .select_listings(Some(("id", format!("eq.{id}"))))
            .await?
            .into_iter()
            .next();

        match found {
            Some(listing) => Ok(Some(listing)),
            None => self.fallback.get(id).await,
        }
    }

    async fn append(&self, listing: Listing) -> Result<String> {
        match self.insert(LISTINGS_TABLE, &listing).await {
            Ok(()) => Ok(listing.id),
            Err(e) => {
                warn!(
                    error = %format!("{e:#}"),
                    listing_id = %listing.id,
                    "Listing write failed, keeping it in memory"
                );
                self.fallback.append(listing).await
            }
        }
    }

    async fn record_driver_application(&self, application: DriverApplication) -> Result<()> {
        match self.insert(DRIVERS_TABLE, &application).await {
            Ok(()) => info!(vehicle_type = %application.vehicle_type, "Driver application stored"),
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Driver application write failed, logging it instead");
                self.fallback.record_driver_application(application).await?;
            }
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "supabase"
    }
}
