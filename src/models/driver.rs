use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application from someone who wants to deliver parcels
///
/// Write-only: stored or logged, never read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub id_type: String,
    pub id_number: String,
    pub vehicle_type: String,
    pub license_plate: String,
    pub areas_served: String,
    pub availability: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl DriverApplication {
    pub const DEFAULT_ID_TYPE: &'static str = "National ID";
}
