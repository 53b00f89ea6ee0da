//! Router-level tests for the liveness endpoint.
//!
//! Requests are driven through the full router (middleware included) with
//! `tower::ServiceExt::oneshot`, no socket involved.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use tower::ServiceExt;
use uuid::Uuid;

use healthz_server::create_router;

async fn send(method: Method, uri: &str) -> Response {
    create_router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn healthz_ok() {
    let response = send(Method::GET, "/healthz").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await.trim(), "healthy");
}

#[tokio::test]
async fn healthz_headers() {
    let response = send(Method::GET, "/healthz").await;

    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));

    let cache_control = response.headers().get(header::CACHE_CONTROL).unwrap();
    assert_eq!(cache_control, "no-store");
}

#[tokio::test]
async fn healthz_head_has_no_body() {
    let response = send(Method::HEAD, "/healthz").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn healthz_rejects_other_methods() {
    let response = send(Method::POST, "/healthz").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = send(Method::GET, "/health").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "not found");
}

#[tokio::test]
async fn request_id_is_unique_uuid() {
    let first = send(Method::GET, "/healthz").await;
    let second = send(Method::GET, "/healthz").await;

    let id = |r: &Response| {
        let value = r.headers().get("x-request-id").unwrap().to_str().unwrap();
        Uuid::parse_str(value).unwrap()
    };

    assert_ne!(id(&first), id(&second));
}

#[tokio::test]
async fn request_id_on_not_found() {
    let response = send(Method::GET, "/missing").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn concurrent_requests_get_identical_answers() {
    let router = create_router();

    let tasks: Vec<_> = (0..32)
        .map(|_| {
            let router = router.clone();
            tokio::spawn(async move {
                let response = router
                    .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
                    .await
                    .unwrap();
                (response.status(), body_string(response).await)
            })
        })
        .collect();

    for task in tasks {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "healthy");
    }
}
