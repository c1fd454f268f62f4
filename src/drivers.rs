use chrono::Utc;

use crate::error::ValidationError;
use crate::listings::validate::{missing_fields, text, RawSubmission};
use crate::models::DriverApplication;

pub const REQUIRED_DRIVER_FIELDS: [&str; 8] = [
    "fullName",
    "email",
    "phone",
    "idNumber",
    "vehicleType",
    "licensePlate",
    "areasServed",
    "availability",
];

/// Validate a driver application and fill in defaults
pub fn validate_driver_application(
    raw: &RawSubmission,
) -> Result<DriverApplication, ValidationError> {
    let missing = missing_fields(raw, &REQUIRED_DRIVER_FIELDS);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let required = |key: &str| text(raw, key).unwrap_or_default();

    Ok(DriverApplication {
        full_name: required("fullName"),
        email: required("email"),
        phone: required("phone"),
        id_type: text(raw, "idType")
            .unwrap_or_else(|| DriverApplication::DEFAULT_ID_TYPE.to_string()),
        id_number: required("idNumber"),
        vehicle_type: required("vehicleType"),
        license_plate: required("licensePlate"),
        areas_served: required("areasServed"),
        availability: required("availability"),
        message: text(raw, "message").unwrap_or_default(),
        submitted_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn application() -> RawSubmission {
        match json!({
            "fullName": "Achieng Otieno",
            "email": "achieng@example.com",
            "phone": "+254700000000",
            "idNumber": "12345678",
            "vehicleType": "Motorbike",
            "licensePlate": "KMDA 123X",
            "areasServed": "Westlands, Kilimani",
            "availability": "Weekdays",
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_defaults_applied() {
        let app = validate_driver_application(&application()).unwrap();
        assert_eq!(app.id_type, "National ID");
        assert_eq!(app.message, "");
        assert_eq!(app.license_plate, "KMDA 123X");
    }

    #[test]
    fn test_missing_fields_named() {
        let mut raw = application();
        raw.remove("email");
        raw.insert("availability".into(), json!(""));
        let err = validate_driver_application(&raw).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["email", "availability"])
        );
    }

    #[test]
    fn test_id_type_kept_when_given() {
        let mut raw = application();
        raw.insert("idType".into(), json!("Passport"));
        raw.insert("message".into(), json!("I know the CBD well"));
        let app = validate_driver_application(&raw).unwrap();
        assert_eq!(app.id_type, "Passport");
        assert_eq!(app.message, "I know the CBD well");
    }
}
