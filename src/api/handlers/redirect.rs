//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds `302 Found` with the stored URL in `Location`. The stored value
/// is sent as-is.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
/// Returns 500 Internal Server Error on storage failure, or if the stored
/// URL cannot be sent as a header.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.mapping_service.resolve(&alias).await?;

    let location = HeaderValue::from_str(&url).map_err(|e| {
        tracing::error!(%alias, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("internal error")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
