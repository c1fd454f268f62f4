use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::listings::{format_price, Duration, PriceBand, SearchCriteria};
use crate::models::{Listing, ParcelDetails, SizeUnit, StorageType};

/// Listing as shown in result lists; parcel detail is left out
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    pub id: String,
    pub title: String,
    pub storage_type: StorageType,
    pub city: String,
    pub county: String,
    pub size: f64,
    pub size_unit: SizeUnit,
    pub price_per_day: Option<f64>,
    pub price_per_week: Option<f64>,
    pub price_per_month: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
    pub security: Vec<String>,
    pub parcel_drop_off: bool,
}

impl From<&Listing> for ListingSummary {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            storage_type: listing.storage_type,
            city: listing.city.clone(),
            county: listing.county.clone(),
            size: listing.size.unwrap_or(0.0),
            size_unit: listing.size_unit,
            price_per_day: listing.price_per_day,
            price_per_week: listing.price_per_week,
            price_per_month: listing.price_per_month,
            rating: listing.rating_or_default(),
            review_count: listing.review_count_or_default(),
            security: listing
                .security_labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            parcel_drop_off: listing.parcel_drop_off,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParcelView {
    pub max_size: Option<String>,
    pub operating_hours: Option<String>,
    pub notify_by_sms: bool,
    pub notify_by_app: bool,
    pub notify_by_email: bool,
    pub id_required_at_pickup: bool,
    pub max_per_day: Option<f64>,
    pub fee_per_day: Option<f64>,
}

impl From<&ParcelDetails> for ParcelView {
    fn from(parcel: &ParcelDetails) -> Self {
        Self {
            max_size: parcel.max_size.clone(),
            operating_hours: parcel.operating_hours.clone(),
            notify_by_sms: parcel.notification.sms,
            notify_by_app: parcel.notification.app,
            notify_by_email: parcel.notification.email,
            id_required_at_pickup: parcel.id_required_at_pickup,
            max_per_day: parcel.max_per_day,
            fee_per_day: parcel.fee_per_day,
        }
    }
}

/// Full listing for the detail page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetail {
    #[serde(flatten)]
    pub summary: ListingSummary,
    pub description: String,
    pub access_hours: Option<String>,
    pub rental_min_days: Option<f64>,
    pub rental_max_days: Option<f64>,
    pub security_deposit: Option<f64>,
    pub long_term_discount: bool,
    pub address: String,
    pub map_pin: Option<String>,
    pub parcel: Option<ParcelView>,
    pub created_at: DateTime<Utc>,
}

impl From<&Listing> for ListingDetail {
    fn from(listing: &Listing) -> Self {
        Self {
            summary: ListingSummary::from(listing),
            description: listing.description.clone(),
            access_hours: listing.access_hours.clone(),
            rental_min_days: listing.rental_min_days,
            rental_max_days: listing.rental_max_days,
            security_deposit: listing.security_deposit,
            long_term_discount: listing.long_term_discount,
            address: listing.address.clone(),
            map_pin: listing.map_pin.clone(),
            parcel: listing.parcel.as_ref().map(ParcelView::from),
            created_at: listing.created_at,
        }
    }
}

/// Search result row with the price rendered for the chosen duration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(flatten)]
    pub summary: ListingSummary,
    pub display_price: String,
}

impl SearchHit {
    pub fn new(listing: &Listing, duration: Duration) -> Self {
        Self {
            summary: ListingSummary::from(listing),
            display_price: format_price(listing, duration),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub count: usize,
    pub duration: Duration,
    pub listings: Vec<SearchHit>,
}

/// Query string of `GET /listings/search`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub location: Option<String>,
    #[serde(rename = "type", alias = "storageType")]
    pub storage_type: Option<String>,
    pub price_band: Option<String>,
    pub parcel_only: Option<String>,
    pub duration: Option<String>,
}

impl SearchQuery {
    /// Blank values mean "no constraint"; unknown values are rejected
    pub fn into_criteria(self) -> Result<(SearchCriteria, Duration), ApiError> {
        let mut criteria = SearchCriteria::default();

        if let Some(location) = self.location {
            criteria = criteria.with_location(location);
        }
        if let Some(storage_type) = non_blank(self.storage_type) {
            let storage_type = storage_type
                .parse::<StorageType>()
                .map_err(|t| ApiError::InvalidQuery(format!("Unknown storage type: {t}")))?;
            criteria = criteria.with_storage_type(storage_type);
        }
        if let Some(band) = non_blank(self.price_band) {
            criteria = criteria.with_price_band(band.parse::<PriceBand>().map_err(ApiError::InvalidQuery)?);
        }
        if non_blank(self.parcel_only).is_some_and(|v| matches!(v.as_str(), "true" | "1" | "on")) {
            criteria = criteria.parcel_only();
        }

        let duration = match non_blank(self.duration) {
            Some(d) => d.parse::<Duration>().map_err(ApiError::InvalidQuery)?,
            None => Duration::default(),
        };

        Ok((criteria, duration))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::seed::demo_listings;

    #[test]
    fn test_summary_defaults_rating_and_review_count() {
        let mut listing = demo_listings().remove(5);
        listing.rating = None;
        listing.review_count = None;
        listing.size = None;

        let summary = ListingSummary::from(&listing);
        assert_eq!(summary.rating, 4.8);
        assert_eq!(summary.review_count, 1);
        assert_eq!(summary.size, 0.0);
        assert_eq!(summary.security, vec!["CCTV", "Guard", "Locked Unit"]);
    }

    #[test]
    fn test_summary_json_shape() {
        let listing = demo_listings().remove(0);
        let json = serde_json::to_value(ListingSummary::from(&listing)).unwrap();
        assert_eq!(json["storageType"], "Warehouse Storage");
        assert_eq!(json["pricePerMonth"], 18000.0);
        assert_eq!(json["parcelDropOff"], true);
        assert!(json.get("parcel").is_none());
    }

    #[test]
    fn test_query_into_criteria() {
        let query = SearchQuery {
            location: Some(" Nairobi ".into()),
            storage_type: Some("warehouse".into()),
            price_band: Some("10k-20k".into()),
            parcel_only: Some("true".into()),
            duration: Some("week".into()),
        };
        let (criteria, duration) = query.into_criteria().unwrap();
        assert_eq!(criteria.location.as_deref(), Some("Nairobi"));
        assert_eq!(criteria.storage_type, Some(StorageType::Warehouse));
        assert_eq!(criteria.price_band, Some(PriceBand::From10kTo20k));
        assert!(criteria.parcel_only);
        assert_eq!(duration, Duration::Week);
    }

    #[test]
    fn test_blank_query_is_unconstrained() {
        let query = SearchQuery {
            location: Some(String::new()),
            storage_type: Some(String::new()),
            price_band: Some(" ".into()),
            parcel_only: Some("false".into()),
            duration: None,
        };
        let (criteria, duration) = query.into_criteria().unwrap();
        assert_eq!(criteria, SearchCriteria::default());
        assert_eq!(duration, Duration::Month);
    }

    #[test]
    fn test_unknown_band_rejected() {
        let query = SearchQuery {
            price_band: Some("free".into()),
            ..Default::default()
        };
        assert!(matches!(
            query.into_criteria(),
            Err(ApiError::InvalidQuery(_))
        ));
    }
}
