use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::StorageType;

/// Coarse monthly-price bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriceBand {
    #[serde(rename = "lt10k")]
    Below10k,
    #[serde(rename = "10k-20k")]
    From10kTo20k,
    #[serde(rename = "20k-30k")]
    From20kTo30k,
    #[serde(rename = "gt30k")]
    Above30k,
}

impl PriceBand {
    /// Whether a monthly price falls inside the band
    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceBand::Below10k => price < 10_000.0,
            PriceBand::From10kTo20k => (10_000.0..=20_000.0).contains(&price),
            PriceBand::From20kTo30k => price > 20_000.0 && price <= 30_000.0,
            PriceBand::Above30k => price > 30_000.0,
        }
    }
}

impl FromStr for PriceBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lt10k" => Ok(PriceBand::Below10k),
            "10k-20k" => Ok(PriceBand::From10kTo20k),
            "20k-30k" => Ok(PriceBand::From20kTo30k),
            "gt30k" => Ok(PriceBand::Above30k),
            other => Err(format!("Unknown price band: {other}")),
        }
    }
}

/// Rental period a price is displayed for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Day,
    Week,
    #[default]
    Month,
}

impl Duration {
    pub fn suffix(self) -> &'static str {
        match self {
            Duration::Day => "/day",
            Duration::Week => "/wk",
            Duration::Month => "/mo",
        }
    }
}

impl FromStr for Duration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Duration::Day),
            "week" => Ok(Duration::Week),
            "month" => Ok(Duration::Month),
            other => Err(format!("Unknown duration: {other}")),
        }
    }
}

/// Filters applied to the listing collection; all of them must hold
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Matched case-insensitively against city or county
    pub location: Option<String>,
    pub storage_type: Option<StorageType>,
    /// Always evaluated against the monthly price
    pub price_band: Option<PriceBand>,
    pub parcel_only: bool,
}

impl SearchCriteria {
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        let location = location.into();
        let trimmed = location.trim();
        self.location = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_storage_type(mut self, storage_type: StorageType) -> Self {
        self.storage_type = Some(storage_type);
        self
    }

    pub fn with_price_band(mut self, price_band: PriceBand) -> Self {
        self.price_band = Some(price_band);
        self
    }

    pub fn parcel_only(mut self) -> Self {
        self.parcel_only = true;
        self
    }
}
