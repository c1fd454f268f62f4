use serde_json::Value;
use thiserror::Error;

use crate::error::ValidationError;
use crate::listings::validate::{
    check_description, check_title, count, missing_fields, number, parse_storage_type, raw_text,
    text, truthy, validate_listing, RawSubmission,
};
use crate::models::Listing;

pub const STEP_TITLES: [&str; 6] = [
    "Basic Information",
    "Space Details",
    "Pricing",
    "Photos",
    "Location",
    "Parcel Drop-Off (Optional)",
];

pub const MIN_PHOTOS: u32 = 3;

/// Where the host is in the listing wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// 1-based step number
    Step(usize),
    Submitted,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Listing was already submitted")]
    AlreadySubmitted,

    #[error("Step {step} is the last step; submit instead")]
    NoNextStep { step: usize },

    #[error("Only the last step can be submitted (on step {step} of {total})")]
    NotOnFinalStep { step: usize, total: usize },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Multi-step listing wizard
///
/// The draft uses the same keys as the `POST /listings` body, so a finished
/// draft goes through the regular validator on submit.
#[derive(Debug, Clone)]
pub struct ListingForm {
    draft: RawSubmission,
    state: FormState,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingForm {
    pub fn new() -> Self {
        Self {
            draft: RawSubmission::new(),
            state: FormState::Step(1),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &RawSubmission {
        &self.draft
    }

    pub fn offers_parcel_drop_off(&self) -> bool {
        truthy(&self.draft, "offerParcelDropOff")
    }

    /// 6 steps with parcel drop-off, 5 without
    pub fn total_steps(&self) -> usize {
        if self.offers_parcel_drop_off() {
            6
        } else {
            5
        }
    }

    pub fn step_title(&self) -> Option<&'static str> {
        match self.state {
            FormState::Step(step) => STEP_TITLES.get(step - 1).copied(),
            FormState::Submitted => None,
        }
    }

    /// Update one draft field
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<(), FormError> {
        if self.state == FormState::Submitted {
            return Err(FormError::AlreadySubmitted);
        }

        self.draft.insert(key.to_string(), value.into());

        // Dropping parcel drop-off removes the parcel step
        if let FormState::Step(step) = self.state {
            if step > self.total_steps() {
                self.state = FormState::Step(self.total_steps());
            }
        }
        Ok(())
    }

    /// Check the fields owned by one step
    pub fn validate_step(&self, step: usize) -> Result<(), ValidationError> {
        let draft = &self.draft;
        match step {
            1 => {
                require(draft, &["title", "storageType", "description"])?;
                check_title(&raw_text(draft, "title"))?;
                check_description(&field(draft, "description"))?;
                parse_storage_type(draft)?;
            }
            2 => {
                require(draft, &["size", "accessHours"])?;
                if number(draft, "size")?.unwrap_or(0.0) < 1.0 {
                    return Err(ValidationError::IncompleteStep(
                        "Size must be at least 1".to_string(),
                    ));
                }
                number(draft, "rentalMinDays")?;
                number(draft, "rentalMaxDays")?;
            }
            3 => {
                for key in ["pricePerDay", "pricePerWeek", "pricePerMonth", "securityDeposit"] {
                    number(draft, key)?;
                }
            }
            4 => {
                if count(draft, "photoCount")?.unwrap_or(0) < MIN_PHOTOS {
                    return Err(ValidationError::IncompleteStep(
                        "Upload at least 3 photos".to_string(),
                    ));
                }
            }
            5 => require(draft, &["address", "city", "county"])?,
            6 => {
                number(draft, "parcelMaxPerDay")?;
                number(draft, "parcelFeePerDay")?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Move forward if the current step is complete
    pub fn next(&mut self) -> Result<FormState, FormError> {
        let step = self.current_step()?;
        if step >= self.total_steps() {
            return Err(FormError::NoNextStep { step });
        }

        self.validate_step(step)?;
        self.state = FormState::Step(step + 1);
        Ok(self.state)
    }

    /// Move back one step; stays put on step 1
    pub fn previous(&mut self) -> Result<FormState, FormError> {
        let step = self.current_step()?;
        self.state = FormState::Step(step.saturating_sub(1).max(1));
        Ok(self.state)
    }

    /// Validate the whole draft from the last step and finish the wizard
    pub fn submit(&mut self) -> Result<Listing, FormError> {
        let step = self.current_step()?;
        let total = self.total_steps();
        if step != total {
            return Err(FormError::NotOnFinalStep { step, total });
        }

        self.validate_step(step)?;
        let listing = validate_listing(&self.draft)?;
        self.state = FormState::Submitted;
        Ok(listing)
    }

    fn current_step(&self) -> Result<usize, FormError> {
        match self.state {
            FormState::Step(step) => Ok(step),
            FormState::Submitted => Err(FormError::AlreadySubmitted),
        }
    }
}

fn require(draft: &RawSubmission, fields: &[&'static str]) -> Result<(), ValidationError> {
    let missing = missing_fields(draft, fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

fn field(draft: &RawSubmission, key: &str) -> String {
    text(draft, key).unwrap_or_default()
}
