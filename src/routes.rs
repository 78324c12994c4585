//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /url`     - Create a mapping (Basic auth required)
//! - `GET  /{alias}` - Redirect to the stored URL (public)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` generated when absent and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become `500` responses
//! - **Timeout** - Requests exceeding the configured timeout are cut off
//! - **Authentication** - Basic auth on creation
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::http::{HeaderName, StatusCode};
use axum::routing::get;
use axum::{Router, middleware};
use tower::{Layer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

/// Routes and authentication without the outer middleware stack.
///
/// Integration tests drive this directly.
pub fn router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::layer,
    ));

    Router::new()
        .merge(api_router)
        .route("/{alias}", get(redirect_handler))
        .with_state(state)
}

/// Wraps `router` in the request id, tracing, panic recovery and timeout layers.
///
/// Requests running past `request_timeout` get `408 Request Timeout`; panics
/// in handlers become `500 Internal Server Error`.
pub fn with_middleware(router: Router, request_timeout: Duration) -> Router {
    let request_id = HeaderName::from_static(tracing::REQUEST_ID_HEADER);

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(tracing::layer())
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(CatchPanicLayer::new())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            )),
    )
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on handling a single request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = with_middleware(router(state), request_timeout);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
