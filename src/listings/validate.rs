use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::{
    Listing, NotificationChannels, ParcelDetails, SecurityFeature, SizeUnit, StorageType,
};

/// Submission as received: arbitrary JSON keyed by form field name
pub type RawSubmission = Map<String, Value>;

pub const REQUIRED_LISTING_FIELDS: [&str; 6] =
    ["title", "storageType", "description", "address", "city", "county"];

pub const MAX_TITLE_CHARS: usize = 60;
pub const MIN_DESCRIPTION_WORDS: usize = 100;

/// Loose truthiness: `false`, `0`, `""`, `null` and absent are false
pub fn truthy(raw: &RawSubmission, key: &str) -> bool {
    match raw.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Trimmed, non-empty text; numbers are accepted as their decimal form
pub fn text(raw: &RawSubmission, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Text exactly as submitted, surrounding whitespace included
pub fn raw_text(raw: &RawSubmission, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Optional non-negative number; absent and blank stay `None`, never 0
pub fn number(raw: &RawSubmission, key: &'static str) -> Result<Option<f64>, ValidationError> {
    let value = match raw.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Number(n)) => n.as_f64(),
        Some(_) => None,
    };

    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(ValidationError::InvalidNumber(key)),
    }
}

/// Optional whole count, e.g. a number of photos
pub fn count(raw: &RawSubmission, key: &'static str) -> Result<Option<u32>, ValidationError> {
    match number(raw, key)? {
        None => Ok(None),
        Some(v) if v.fract() == 0.0 && v <= f64::from(u32::MAX) => Ok(Some(v as u32)),
        Some(_) => Err(ValidationError::InvalidNumber(key)),
    }
}

/// Whitespace-delimited word count, empty tokens ignored
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Fields from `fields` that are absent or blank, in the given order
pub fn missing_fields(raw: &RawSubmission, fields: &[&'static str]) -> Vec<&'static str> {
    fields
        .iter()
        .copied()
        .filter(|field| text(raw, field).is_none())
        .collect()
}

/// Validate a raw submission and normalize it into a new listing
pub fn validate_listing(raw: &RawSubmission) -> Result<Listing, ValidationError> {
    normalize_listing(raw, Uuid::new_v4().to_string(), Utc::now())
}

/// Validation and normalization with the id and timestamp supplied
pub fn normalize_listing(
    raw: &RawSubmission,
    id: String,
    created_at: DateTime<Utc>,
) -> Result<Listing, ValidationError> {
    let missing = missing_fields(raw, &REQUIRED_LISTING_FIELDS);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    check_title(&raw_text(raw, "title"))?;
    let title = text(raw, "title").unwrap_or_default();

    let description = text(raw, "description").unwrap_or_default();
    check_description(&description)?;

    let storage_type = parse_storage_type(raw)?;

    let security = SecurityFeature::FLAGS
        .iter()
        .filter(|(flag, _)| truthy(raw, flag))
        .map(|(_, feature)| *feature)
        .collect();

    let parcel_drop_off = truthy(raw, "offerParcelDropOff");
    let parcel = if parcel_drop_off {
        Some(parcel_details(raw)?)
    } else {
        None
    };

    Ok(Listing {
        id,
        title,
        storage_type,
        description,
        size: number(raw, "size")?,
        size_unit: SizeUnit::normalize(raw.get("sizeUnit").and_then(Value::as_str)),
        access_hours: text(raw, "accessHours"),
        security,
        rental_min_days: number(raw, "rentalMinDays")?,
        rental_max_days: number(raw, "rentalMaxDays")?,
        price_per_day: number(raw, "pricePerDay")?,
        price_per_week: number(raw, "pricePerWeek")?,
        price_per_month: number(raw, "pricePerMonth")?,
        security_deposit: number(raw, "securityDeposit")?,
        long_term_discount: truthy(raw, "longTermDiscount"),
        address: text(raw, "address").unwrap_or_default(),
        city: text(raw, "city").unwrap_or_default(),
        county: text(raw, "county").unwrap_or_default(),
        map_pin: text(raw, "mapPin"),
        parcel_drop_off,
        parcel,
        photo_count: count(raw, "photoCount")?,
        rating: None,
        review_count: None,
        created_at,
    })
}

pub(crate) fn check_title(title: &str) -> Result<(), ValidationError> {
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

pub(crate) fn check_description(description: &str) -> Result<(), ValidationError> {
    if word_count(description) < MIN_DESCRIPTION_WORDS {
        return Err(ValidationError::DescriptionTooShort);
    }
    Ok(())
}

pub(crate) fn parse_storage_type(raw: &RawSubmission) -> Result<StorageType, ValidationError> {
    let value = text(raw, "storageType").unwrap_or_default();
    value
        .parse()
        .map_err(ValidationError::InvalidStorageType)
}

fn parcel_details(raw: &RawSubmission) -> Result<ParcelDetails, ValidationError> {
    Ok(ParcelDetails {
        max_size: text(raw, "parcelMaxSize"),
        operating_hours: text(raw, "parcelOperatingHours"),
        notification: NotificationChannels {
            sms: truthy(raw, "parcelNotificationSms"),
            app: truthy(raw, "parcelNotificationApp"),
            email: truthy(raw, "parcelNotificationEmail"),
        },
        id_required_at_pickup: truthy(raw, "parcelIdRequired"),
        max_per_day: number(raw, "parcelMaxPerDay")?,
        fee_per_day: number(raw, "parcelFeePerDay")?,
    })
}
