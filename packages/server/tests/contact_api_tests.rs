//! Integration tests for the contact submission endpoint.
//!
//! Tests the full request path through the router: validation ordering,
//! the exact wire messages, and the decoupling of delivery failures from
//! the visitor-facing response.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use server_core::config::{ContactSettings, DEFAULT_CONFIRMATION_MESSAGE};
use server_core::kernel::MockMailer;
use server_core::server::build_app;

fn settings(require_phone: bool) -> ContactSettings {
    ContactSettings {
        from_address: "noreply@tigerhilltransport.com".to_string(),
        to_addresses: vec!["staff@tigerhilltransport.com".to_string()],
        require_phone,
        confirmation_message: DEFAULT_CONFIRMATION_MESSAGE.to_string(),
    }
}

/// POST a JSON value to /api/contact and return (status, parsed body)
async fn post_contact(mailer: Arc<MockMailer>, require_phone: bool, body: String) -> (StatusCode, Value) {
    let app = build_app(mailer, settings(require_phone));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn valid_submission() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "message": "Hello"
    })
}

// =============================================================================
// Validation: required fields
// =============================================================================

/// Missing any required field yields 400 and no delivery attempt
#[tokio::test]
async fn missing_fields_return_400_without_sending() {
    let bodies = vec![
        json!({}),
        json!({"email": "jane@example.com", "message": "Hello"}),
        json!({"name": "Jane Doe", "message": "Hello"}),
        json!({"name": "Jane Doe", "email": "jane@example.com"}),
        json!({"name": "", "email": "jane@example.com", "message": "Hello"}),
    ];

    for body in bodies {
        let mailer = Arc::new(MockMailer::new());
        let (status, response) = post_contact(mailer.clone(), false, body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "All fields are required");
        assert_eq!(mailer.send_count(), 0);
    }
}

/// With the phone flag on, a submission without a phone is incomplete
#[tokio::test]
async fn missing_phone_rejected_when_required() {
    let mailer = Arc::new(MockMailer::new());
    let (status, response) =
        post_contact(mailer.clone(), true, valid_submission().to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "All fields are required");
    assert_eq!(mailer.send_count(), 0);
}

// =============================================================================
// Validation: email and phone shape
// =============================================================================

#[tokio::test]
async fn malformed_emails_return_400() {
    for email in ["foo", "foo@bar", "@bar.com"] {
        let mailer = Arc::new(MockMailer::new());
        let body = json!({
            "name": "Jane Doe",
            "email": email,
            "message": "Hello"
        });
        let (status, response) = post_contact(mailer.clone(), false, body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "email {email:?}");
        assert_eq!(response["error"], "Invalid email format");
        assert_eq!(mailer.send_count(), 0);
    }
}

#[tokio::test]
async fn phone_shapes_validated_after_stripping_punctuation() {
    for phone in ["555-123-4567", "+15551234567"] {
        let mailer = Arc::new(MockMailer::new());
        let body = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": phone,
            "message": "Hello"
        });
        let (status, _) = post_contact(mailer, false, body.to_string()).await;
        assert_eq!(status, StatusCode::OK, "phone {phone:?} should pass");
    }

    for phone in ["abc", "0123"] {
        let mailer = Arc::new(MockMailer::new());
        let body = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": phone,
            "message": "Hello"
        });
        let (status, response) = post_contact(mailer.clone(), false, body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "phone {phone:?} should fail");
        assert_eq!(response["error"], "Invalid phone number format");
        assert_eq!(mailer.send_count(), 0);
    }
}

// =============================================================================
// Happy path and delivery decoupling
// =============================================================================

/// A valid submission gets a confirmation and exactly one delivery attempt
#[tokio::test]
async fn valid_submission_returns_confirmation_and_sends_email() {
    let mailer = Arc::new(MockMailer::new());
    let (status, response) =
        post_contact(mailer.clone(), false, valid_submission().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    assert!(response["message"].as_str().unwrap().contains("Thank you"));

    let sent = mailer.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New Contact Form Submission from Jane Doe");
    assert_eq!(sent[0].from, "noreply@tigerhilltransport.com");
    assert_eq!(sent[0].to, vec!["staff@tigerhilltransport.com".to_string()]);
    assert!(sent[0].html.contains("jane@example.com"));
    assert!(sent[0].html.contains("Hello"));
}

/// Delivery failure is swallowed: the visitor still sees success
#[tokio::test]
async fn delivery_failure_still_returns_200() {
    let mailer = Arc::new(MockMailer::failing("Resend returned an error"));
    let (status, response) =
        post_contact(mailer.clone(), false, valid_submission().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    assert!(response["message"].as_str().unwrap().contains("Thank you"));
    // The attempt was made, even though it failed
    assert_eq!(mailer.send_count(), 1);
}

// =============================================================================
// Processing failures
// =============================================================================

/// A body that isn't JSON is a processing failure, not a validation failure
#[tokio::test]
async fn malformed_json_returns_500() {
    let mailer = Arc::new(MockMailer::new());
    let (status, response) =
        post_contact(mailer.clone(), false, "this is not json".to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["error"], "Internal server error");
    assert_eq!(mailer.send_count(), 0);
}

// =============================================================================
// Ambient routes
// =============================================================================

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = build_app(Arc::new(MockMailer::new()), settings(false));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["status"], "healthy");
}

/// Unknown paths fall through to the embedded site shell
#[tokio::test]
async fn site_fallback_serves_index() {
    let app = build_app(Arc::new(MockMailer::new()), settings(false));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
}
