//! HTTP client for the contact endpoint

use gloo_net::http::Request;

use crate::types::{ContactError, ContactRequest, ContactSuccess};

const CONTACT_ENDPOINT: &str = "/api/contact";

/// Fallback copy when the server returns a failure without a usable body
const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Error type for contact submission
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Network error. Please try again.")]
    Network,

    /// The server rejected the submission with the given message
    #[error("{0}")]
    Api(String),
}

/// Submit the contact form. Returns the server's confirmation message on
/// success. No retry is attempted; the visitor resubmits manually.
pub async fn submit_contact(request: &ContactRequest) -> Result<String, ClientError> {
    let response = Request::post(CONTACT_ENDPOINT)
        .json(request)
        .map_err(|_| ClientError::Network)?
        .send()
        .await
        .map_err(|_| ClientError::Network)?;

    if response.ok() {
        let body: ContactSuccess = response.json().await.map_err(|_| ClientError::Network)?;
        Ok(body.message)
    } else {
        // Prefer the server's error text, fall back to generic copy
        let message = response
            .json::<ContactError>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| GENERIC_ERROR.to_string());
        Err(ClientError::Api(message))
    }
}
