mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use axum::Router;
use axum::routing::get;
use url_alias_service::routes::{app_router, with_middleware};

async fn app() -> (
    tower_http::normalize_path::NormalizePath<axum::Router>,
    sqlx::SqlitePool,
) {
    let store = common::memory_store().await;
    let pool = store.pool().clone();
    let state = common::create_test_state(store);
    (app_router(state, Duration::from_secs(4)), pool)
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (app, pool) = app().await;
    common::insert_mapping(&pool, "slash", "https://example.com/slash").await;

    let response = app
        .oneshot(Request::builder().uri("/slash/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/slash"
    );
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let (app, _pool) = app().await;

    let response = app
        .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let id = response.headers().get("x-request-id").unwrap();
    assert!(!id.is_empty());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let (app, _pool) = app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/missing")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_creation_requires_auth_through_full_stack() {
    let (app, _pool) = app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/url")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"url":"https://example.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
}

async fn panicking_handler() -> &'static str {
    panic!("handler blew up")
}

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "too late"
}

fn instrumented(timeout: Duration) -> Router {
    let router = Router::new()
        .route("/panic", get(panicking_handler))
        .route("/slow", get(slow_handler));
    with_middleware(router, timeout)
}

#[tokio::test]
async fn test_handler_panic_becomes_server_error() {
    let app = instrumented(Duration::from_secs(4));

    let response = app
        .oneshot(Request::builder().uri("/panic").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_slow_request_times_out() {
    let app = instrumented(Duration::from_millis(50));

    let response = app
        .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}
