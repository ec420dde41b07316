//! Form state management

/// Submission lifecycle for the contact form.
///
/// An explicit state value rather than an ambient boolean: the submit
/// handler refuses to dispatch while `Submitting`, and both outcome arms
/// leave that state unconditionally, so the form always returns to a
/// submittable state.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmitStatus {
    /// Whether a submission is currently outstanding
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    /// The status line to show under the form, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
            SubmitStatus::Succeeded(message) | SubmitStatus::Failed(message) => Some(message),
        }
    }
}

/// How the contact form treats the phone field. Deployments disagree on
/// whether to collect it, so the template takes it as an option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PhoneField {
    Hidden,
    #[default]
    Optional,
    Required,
}

impl PhoneField {
    pub fn is_shown(&self) -> bool {
        !matches!(self, PhoneField::Hidden)
    }

    pub fn is_required(&self) -> bool {
        matches!(self, PhoneField::Required)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PhoneField::Required => "Phone",
            _ => "Phone (optional)",
        }
    }
}
