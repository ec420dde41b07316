//! Wire types shared with the contact endpoint

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/contact`
#[derive(Debug, Clone, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    /// Serialized as an empty string when the visitor leaves it blank, so
    /// one request shape covers deployments with and without the field
    pub phone: String,
    pub message: String,
}

/// Success envelope returned with HTTP 200
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSuccess {
    pub success: bool,
    pub message: String,
}

/// Error envelope returned with HTTP 400/500
#[derive(Debug, Clone, Deserialize)]
pub struct ContactError {
    pub error: String,
}
