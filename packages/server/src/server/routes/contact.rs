use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::domains::contact::{
    deliver, notification_email, validate_submission, DeliveryResult, Submission,
};
use crate::server::app::AppState;

/// JSON envelope for every contact-endpoint response
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ContactResponse {
    Success { success: bool, message: String },
    Error { error: String },
}

impl ContactResponse {
    fn success(message: impl Into<String>) -> Self {
        Self::Success {
            success: true,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}

/// Contact form submission endpoint
///
/// Validates the payload in fixed order (presence, email shape, phone
/// shape), then forwards the submission to staff by email. Delivery is
/// best-effort: once validation has passed the response is a 200 whether
/// or not the email goes out.
pub async fn contact_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    // A body that doesn't parse as JSON is a processing failure, not a
    // validation failure
    let Json(submission) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::error!(error = %rejection, "Failed to read contact request body");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::error("Internal server error")),
            );
        }
    };

    if let Err(reason) = validate_submission(&submission, state.contact.require_phone) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse::error(reason.to_string())),
        );
    }

    info!(
        name = %submission.name,
        email = %submission.email,
        phone = %submission.phone,
        message = %submission.message,
        "Contact form submission received"
    );

    let email = notification_email(&submission, &state.contact);
    match deliver(state.mailer.as_ref(), &email).await {
        DeliveryResult::Delivered => {
            info!(to = ?email.to, "Contact notification email sent");
        }
        DeliveryResult::Failed(reason) => {
            // Logged and swallowed: the visitor still gets a confirmation
            tracing::error!(reason = %reason, "Contact notification email failed to send");
        }
    }

    (
        StatusCode::OK,
        Json(ContactResponse::success(
            state.contact.confirmation_message.clone(),
        )),
    )
}
