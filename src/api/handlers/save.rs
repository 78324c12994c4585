//! Handler for alias creation endpoint.

use axum::{Json, body::Bytes, extract::State};
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::response::validation_message;
use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::domain::MappingError;
use crate::error::AppError;
use crate::state::AppState;

/// Maps a URL to a requested or generated alias.
///
/// # Endpoint
///
/// `POST /url` (Basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "ex" }
/// ```
///
/// `alias` may be omitted or empty, in which case one is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex" }
/// ```
///
/// # Errors
///
/// - 400 `empty request` when the body is empty
/// - 400 `failed to decode request` when the body is not the expected JSON
/// - 400 with field messages when validation fails
/// - 409 `alias already exists` when the alias is taken
/// - 500 `failed to add url` on storage failure
pub async fn save_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveResponse>, AppError> {
    if body.is_empty() {
        error!("Request body is empty");
        return Err(AppError::bad_request("empty request"));
    }

    let payload: SaveRequest = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "Failed to decode request body");
        AppError::bad_request("failed to decode request")
    })?;

    if let Err(errors) = payload.validate() {
        error!(error = %errors, "Invalid request");
        return Err(AppError::bad_request(validation_message(&errors)));
    }

    let mapping = state
        .mapping_service
        .create(payload.url, payload.alias)
        .await
        .map_err(|e| match e {
            MappingError::Store(_) => AppError::internal("failed to add url"),
            other => AppError::from(other),
        })?;

    info!(alias = %mapping.alias, id = mapping.id, "Url added");

    Ok(Json(SaveResponse::ok().with_alias(mapping.alias)))
}
