use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::drivers::validate_driver_application;
use crate::error::{ApiError, ApiResult};
use crate::server::app::AppState;
use crate::server::model::CreatedResponse;
use crate::server::routes::listings::object_body;

/// `POST /drivers`
pub async fn create_driver_application(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let raw = object_body(&body)?;
    let application = validate_driver_application(&raw)?;

    state
        .store
        .record_driver_application(application)
        .await
        .map_err(ApiError::ApplicationNotRecorded)?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            message: "Application received. We'll be in touch shortly.".to_string(),
            id: None,
        }),
    ))
}
