//! API route configuration.
//!
//! Creation endpoints require Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::save_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes protected by Basic authentication.
///
/// # Endpoints
///
/// - `POST /url` - Map a URL to a requested or generated alias
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/url", post(save_handler))
}
