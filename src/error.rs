use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Reasons a listing or driver submission is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Storage title must be 60 characters or less")]
    TitleTooLong,

    #[error("Description must be at least 100 words")]
    DescriptionTooShort,

    #[error("Unknown storage type: {0}")]
    InvalidStorageType(String),

    #[error("{0} must be a non-negative number")]
    InvalidNumber(&'static str),

    #[error("{0}")]
    IncompleteStep(String),
}

/// Errors surfaced at the HTTP boundary
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body")]
    MalformedBody,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    InvalidQuery(String),

    #[error("Listing not found")]
    NotFound,

    #[error("Listings are temporarily unavailable")]
    StoreUnavailable(#[source] anyhow::Error),

    #[error("Your application could not be saved. Please try again shortly")]
    ApplicationNotRecorded(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody | ApiError::Validation(_) | ApiError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable(_) | ApiError::ApplicationNotRecorded(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::StoreUnavailable(cause) => {
                tracing::error!(error = %format!("{cause:#}"), "Listing store read failed");
            }
            ApiError::ApplicationNotRecorded(cause) => {
                tracing::error!(error = %format!("{cause:#}"), "Driver application not recorded");
            }
            _ => {}
        }

        (self.status(), Json(json!({ "message": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
