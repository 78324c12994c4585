//! Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(<user>:<password>)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Header is not valid Basic credentials
/// - User or password does not match the configured pair
///
/// Adds `WWW-Authenticate: Basic` header to 401 responses per RFC 7617.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/url", post(save_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("unauthorized"))?;

    if !st.credentials.matches(&user, password.as_deref()) {
        tracing::warn!(user = %user, "Rejected basic auth credentials");
        return Err(AppError::unauthorized("unauthorized"));
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
