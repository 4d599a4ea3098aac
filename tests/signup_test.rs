use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use propdoc_backend::config::ServerConfig;
use propdoc_backend::services::provisioner::StubProvisioner;
use propdoc_backend::{AppState, create_app};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let state = AppState {
        provisioner: Arc::new(StubProvisioner::new()),
        config: ServerConfig::development(),
    };
    create_app(state)
}

fn signup_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/signup")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_signup_with_empty_email_is_rejected_before_the_provider() {
    let app = test_app();

    let response = app
        .oneshot(signup_request(r#"{"email": "", "password": "x"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Email and password are required");
}

#[tokio::test]
async fn test_signup_with_empty_password_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(signup_request(
            r#"{"email": "user@example.com", "password": ""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Email and password are required");
}

#[tokio::test]
async fn test_signup_with_fresh_email_returns_the_issued_id() {
    let app = test_app();

    let response = app
        .oneshot(signup_request(
            r#"{"email": "fresh@example.com", "password": "password123"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = json_body(response).await;
    let message = json["message"].as_str().unwrap();
    let user_id = message
        .strip_prefix("Successfully created new user: ")
        .unwrap();
    assert!(!user_id.is_empty());
}

#[tokio::test]
async fn test_duplicate_email_surfaces_the_provider_message_verbatim() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(signup_request(
            r#"{"email": "taken@example.com", "password": "password123"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(signup_request(
            r#"{"email": "taken@example.com", "password": "password123"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "EMAIL_EXISTS");
}

#[tokio::test]
async fn test_weak_password_surfaces_the_provider_message_verbatim() {
    let app = test_app();

    let response = app
        .oneshot(signup_request(
            r#"{"email": "weak@example.com", "password": "abc"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .starts_with("WEAK_PASSWORD")
    );
}

#[tokio::test]
async fn test_cors_is_open_to_all_origins() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/signup")
                .header("Content-Type", "application/json")
                .header("Origin", "http://localhost:5173")
                .body(Body::from(
                    r#"{"email": "cors@example.com", "password": "password123"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_request_id_is_echoed_back() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/signup")
                .header("Content-Type", "application/json")
                .header("x-request-id", "test-request-42")
                .body(Body::from(
                    r#"{"email": "rid@example.com", "password": "password123"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-42"
    );
}

#[tokio::test]
async fn test_request_id_is_minted_when_absent() {
    let app = test_app();

    let response = app
        .oneshot(signup_request(
            r#"{"email": "minted@example.com", "password": "password123"}"#,
        ))
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
