use super::*;

use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_returns_ok() {
    let app: Router = health_routes();
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let app: Router = health_routes();
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app: Router = health_routes();
    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
