mod driver;

pub use driver::DriverApplication;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of space offered by a host
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StorageType {
    #[serde(rename = "Residential Storage")]
    Residential,
    #[serde(rename = "Commercial Storage")]
    Commercial,
    #[serde(rename = "Warehouse Storage")]
    Warehouse,
    #[serde(rename = "Open Yard Storage")]
    OpenYard,
    #[serde(rename = "Shelf Storage")]
    Shelf,
    #[serde(rename = "Budget Units")]
    Budget,
    #[serde(rename = "Parcel Drop-Off Points")]
    ParcelDropOff,
}

impl StorageType {
    pub const ALL: [StorageType; 7] = [
        StorageType::Residential,
        StorageType::Commercial,
        StorageType::Warehouse,
        StorageType::OpenYard,
        StorageType::Shelf,
        StorageType::Budget,
        StorageType::ParcelDropOff,
    ];

    /// Canonical label, the value stored and matched by search
    pub fn label(self) -> &'static str {
        match self {
            StorageType::Residential => "Residential Storage",
            StorageType::Commercial => "Commercial Storage",
            StorageType::Warehouse => "Warehouse Storage",
            StorageType::OpenYard => "Open Yard Storage",
            StorageType::Shelf => "Shelf Storage",
            StorageType::Budget => "Budget Units",
            StorageType::ParcelDropOff => "Parcel Drop-Off Points",
        }
    }

    /// Short name used in menus
    pub fn short_name(self) -> &'static str {
        match self {
            StorageType::Residential => "Residential",
            StorageType::Commercial => "Commercial",
            StorageType::Warehouse => "Warehouse",
            StorageType::OpenYard => "Open Yard",
            StorageType::Shelf => "Shelf",
            StorageType::Budget => "Budget",
            StorageType::ParcelDropOff => "Parcel Drop-Off",
        }
    }

    /// URL slug, e.g. `/listings/search?type=yard`
    pub fn slug(self) -> &'static str {
        match self {
            StorageType::Residential => "residential",
            StorageType::Commercial => "commercial",
            StorageType::Warehouse => "warehouse",
            StorageType::OpenYard => "yard",
            StorageType::Shelf => "shelf",
            StorageType::Budget => "budget",
            StorageType::ParcelDropOff => "parcel",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StorageType {
    type Err = String;

    /// Accepts the label, the short name or the slug, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        StorageType::ALL
            .into_iter()
            .find(|t| {
                [t.label(), t.short_name(), t.slug()]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| s.to_string())
    }
}

/// Unit for the `size` of a space
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    #[default]
    Sqft,
    Sqm,
}

impl SizeUnit {
    /// Anything other than `sqm` collapses to the default
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("sqm") => SizeUnit::Sqm,
            _ => SizeUnit::Sqft,
        }
    }
}

/// Security feature advertised by a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SecurityFeature {
    #[serde(rename = "CCTV")]
    Cctv,
    #[serde(rename = "Guard")]
    Guard,
    #[serde(rename = "Locked Unit")]
    LockedUnit,
    #[serde(rename = "Gated Area")]
    GatedArea,
    #[serde(rename = "Alarm")]
    Alarm,
}

impl SecurityFeature {
    /// Submission flag and feature, in display order
    pub const FLAGS: [(&'static str, SecurityFeature); 5] = [
        ("securityCCTV", SecurityFeature::Cctv),
        ("securityGuard", SecurityFeature::Guard),
        ("securityLockedUnit", SecurityFeature::LockedUnit),
        ("securityGatedArea", SecurityFeature::GatedArea),
        ("securityAlarm", SecurityFeature::Alarm),
    ];

    pub fn label(self) -> &'static str {
        match self {
            SecurityFeature::Cctv => "CCTV",
            SecurityFeature::Guard => "Guard",
            SecurityFeature::LockedUnit => "Locked Unit",
            SecurityFeature::GatedArea => "Gated Area",
            SecurityFeature::Alarm => "Alarm",
        }
    }
}

/// How a host wants to be told about parcel arrivals
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationChannels {
    pub sms: bool,
    pub app: bool,
    pub email: bool,
}

/// Parcel drop-off terms, present only when the host offers drop-off
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParcelDetails {
    pub max_size: Option<String>,
    pub operating_hours: Option<String>,
    pub notification: NotificationChannels,
    pub id_required_at_pickup: bool,
    pub max_per_day: Option<f64>,
    pub fee_per_day: Option<f64>,
}

/// Core listing record
///
/// Field names double as the column names of the hosted `listings` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub storage_type: StorageType,
    pub description: String,
    pub size: Option<f64>,
    #[serde(default)]
    pub size_unit: SizeUnit,
    pub access_hours: Option<String>,
    #[serde(default)]
    pub security: Vec<SecurityFeature>,
    pub rental_min_days: Option<f64>,
    pub rental_max_days: Option<f64>,
    pub price_per_day: Option<f64>,
    pub price_per_week: Option<f64>,
    pub price_per_month: Option<f64>,
    pub security_deposit: Option<f64>,
    #[serde(default)]
    pub long_term_discount: bool,
    pub address: String,
    pub city: String,
    pub county: String,
    pub map_pin: Option<String>,
    #[serde(default)]
    pub parcel_drop_off: bool,
    pub parcel: Option<ParcelDetails>,
    pub photo_count: Option<u32>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    pub const DEFAULT_RATING: f64 = 4.8;
    pub const DEFAULT_REVIEW_COUNT: u32 = 1;

    pub fn rating_or_default(&self) -> f64 {
        self.rating.unwrap_or(Self::DEFAULT_RATING)
    }

    pub fn review_count_or_default(&self) -> u32 {
        self.review_count.unwrap_or(Self::DEFAULT_REVIEW_COUNT)
    }

    /// Human-readable security labels
    pub fn security_labels(&self) -> Vec<&'static str> {
        self.security.iter().map(|s| s.label()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_parses_label_slug_and_short_name() {
        assert_eq!("Warehouse Storage".parse(), Ok(StorageType::Warehouse));
        assert_eq!("yard".parse(), Ok(StorageType::OpenYard));
        assert_eq!("open yard".parse(), Ok(StorageType::OpenYard));
        assert_eq!("PARCEL".parse(), Ok(StorageType::ParcelDropOff));
        assert!("Cold Room".parse::<StorageType>().is_err());
    }

    #[test]
    fn test_storage_type_serializes_as_label() {
        let json = serde_json::to_string(&StorageType::Budget).unwrap();
        assert_eq!(json, "\"Budget Units\"");
    }

    #[test]
    fn test_size_unit_normalization() {
        assert_eq!(SizeUnit::normalize(Some("sqm")), SizeUnit::Sqm);
        assert_eq!(SizeUnit::normalize(Some("SQM")), SizeUnit::Sqft);
        assert_eq!(SizeUnit::normalize(Some("acres")), SizeUnit::Sqft);
        assert_eq!(SizeUnit::normalize(None), SizeUnit::Sqft);
    }
}
