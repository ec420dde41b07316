use serde::Deserialize;

/// One contact-form submission.
///
/// Lives for the duration of a single request and is never persisted.
/// Fields absent from the JSON body deserialize to empty strings, so a
/// missing field fails the presence check rather than deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Optional in some deployments, required in others (see
    /// `ContactSettings::require_phone`)
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl Submission {
    /// Whether the visitor entered a phone number at all
    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }
}

/// Outcome of handing a submission to the email capability.
///
/// Delivery is best-effort: a `Failed` result is logged by the caller and
/// never fails the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryResult {
    Delivered,
    Failed(String),
}
