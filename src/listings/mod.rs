pub mod catalog;
pub mod form;
pub mod search;
pub mod seed;
pub mod types;
pub mod validate;

pub use form::{FormError, FormState, ListingForm};
pub use search::{filter_listings, format_price};
pub use types::{Duration, PriceBand, SearchCriteria};
pub use validate::{validate_listing, RawSubmission};

use anyhow::Result;
use tracing::info;

use crate::error::ValidationError;
use crate::store::ListingStore;

/// Outcome of a listing submission
#[derive(Debug)]
pub enum Submission {
    Accepted { id: String },
    Rejected(ValidationError),
}

/// Validate a raw submission and append it to the store
///
/// Rejected submissions never reach the store; accepted ones are appended
/// exactly once.
pub async fn submit_listing(store: &dyn ListingStore, raw: &RawSubmission) -> Result<Submission> {
    let listing = match validate_listing(raw) {
        Ok(listing) => listing,
        Err(reason) => return Ok(Submission::Rejected(reason)),
    };

    let title = listing.title.clone();
    let id = store.append(listing).await?;
    info!(listing_id = %id, title = %title, backend = store.backend_name(), "Listing received");

    Ok(Submission::Accepted { id })
}
