use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::listings::{filter_listings, submit_listing, RawSubmission, Submission};
use crate::server::app::AppState;
use crate::server::model::{
    CreatedResponse, ListingDetail, ListingSummary, SearchHit, SearchQuery, SearchResponse,
};

/// Parse a body that must be a JSON object, whatever its content type
pub(crate) fn object_body(body: &[u8]) -> ApiResult<RawSubmission> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::MalformedBody),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected request body");
            Err(ApiError::MalformedBody)
        }
    }
}

/// `POST /listings`
pub async fn create_listing(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let raw = object_body(&body)?;

    match submit_listing(state.store.as_ref(), &raw)
        .await
        .map_err(ApiError::StoreUnavailable)?
    {
        Submission::Accepted { id } => Ok((
            StatusCode::CREATED,
            Json(CreatedResponse {
                success: true,
                message: "Listing submitted. It will be reviewed and go live shortly.".to_string(),
                id: Some(id),
            }),
        )),
        Submission::Rejected(reason) => Err(reason.into()),
    }
}

/// `GET /listings`
pub async fn list_listings(State(state): State<AppState>) -> ApiResult<Json<Vec<ListingSummary>>> {
    let listings = state
        .store
        .get_all()
        .await
        .map_err(ApiError::StoreUnavailable)?;

    Ok(Json(listings.iter().map(ListingSummary::from).collect()))
}

/// `GET /listings/search`
pub async fn search_listings(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let (criteria, duration) = query.into_criteria()?;

    let listings = state
        .store
        .get_all()
        .await
        .map_err(ApiError::StoreUnavailable)?;
    let found = filter_listings(&listings, &criteria);

    Ok(Json(SearchResponse {
        count: found.len(),
        duration,
        listings: found.iter().map(|l| SearchHit::new(l, duration)).collect(),
    }))
}

/// `GET /listings/:id`
pub async fn show_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ListingDetail>> {
    state
        .store
        .get(&id)
        .await
        .map_err(ApiError::StoreUnavailable)?
        .map(|listing| Json(ListingDetail::from(&listing)))
        .ok_or(ApiError::NotFound)
}
