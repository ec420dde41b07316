use lazy_static::lazy_static;
use regex::Regex;

use super::models::Submission;

lazy_static! {
    // Email pattern - local@domain.tld shape, no whitespace or extra @
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$"
    ).unwrap();

    // Phone pattern - loose international digits, no leading zero,
    // applied after stripping spaces, hyphens and parentheses
    static ref PHONE_REGEX: Regex = Regex::new(
        r"^[+]?[1-9][0-9]{0,15}$"
    ).unwrap();
}

/// Why a submission was rejected. The `Display` strings are the exact
/// messages returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone number format")]
    InvalidPhone,
}

/// Validate a submission in fixed order, short-circuiting on the first
/// failure: presence, then email shape, then phone shape.
///
/// The phone shape check runs whenever a phone value is present, whether
/// or not the field is required.
pub fn validate_submission(
    submission: &Submission,
    require_phone: bool,
) -> Result<(), ValidationError> {
    let missing = submission.name.trim().is_empty()
        || submission.email.trim().is_empty()
        || submission.message.trim().is_empty()
        || (require_phone && !submission.has_phone());

    if missing {
        return Err(ValidationError::MissingFields);
    }

    if !EMAIL_REGEX.is_match(submission.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }

    if submission.has_phone() {
        let digits = submission.phone.trim().replace([' ', '-', '(', ')'], "");
        if !PHONE_REGEX.is_match(&digits) {
            return Err(ValidationError::InvalidPhone);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, phone: &str, message: &str) -> Submission {
        Submission {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        let s = submission("Jane Doe", "jane@example.com", "", "Hello");
        assert_eq!(validate_submission(&s, false), Ok(()));
    }

    #[test]
    fn test_missing_fields_rejected() {
        for s in [
            submission("", "jane@example.com", "", "Hello"),
            submission("Jane Doe", "", "", "Hello"),
            submission("Jane Doe", "jane@example.com", "", ""),
            submission("   ", "jane@example.com", "", "Hello"),
        ] {
            assert_eq!(
                validate_submission(&s, false),
                Err(ValidationError::MissingFields)
            );
        }
    }

    #[test]
    fn test_phone_presence_enforced_only_when_required() {
        let s = submission("Jane Doe", "jane@example.com", "", "Hello");
        assert_eq!(validate_submission(&s, false), Ok(()));
        assert_eq!(
            validate_submission(&s, true),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_presence_checked_before_email_shape() {
        // Both name and email are bad; presence wins
        let s = submission("", "not-an-email", "", "Hello");
        assert_eq!(
            validate_submission(&s, false),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_malformed_emails_rejected() {
        for email in ["foo", "foo@bar", "@bar.com", "foo @bar.com", "foo@@bar.com"] {
            let s = submission("Jane Doe", email, "", "Hello");
            assert_eq!(
                validate_submission(&s, false),
                Err(ValidationError::InvalidEmail),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_common_phone_formats_accepted() {
        for phone in ["555-123-4567", "+15551234567", "(555) 123-4567", "+44 20 7946 0958"] {
            let s = submission("Jane Doe", "jane@example.com", phone, "Hello");
            assert_eq!(
                validate_submission(&s, true),
                Ok(()),
                "expected {phone:?} to pass"
            );
        }
    }

    #[test]
    fn test_bad_phones_rejected() {
        // "abc" has no digits; "0123" has a leading zero
        for phone in ["abc", "0123", "+0155512345", "555-123-4567x89"] {
            let s = submission("Jane Doe", "jane@example.com", phone, "Hello");
            assert_eq!(
                validate_submission(&s, false),
                Err(ValidationError::InvalidPhone),
                "expected {phone:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_optional_phone_still_shape_checked_when_present() {
        let s = submission("Jane Doe", "jane@example.com", "abc", "Hello");
        assert_eq!(
            validate_submission(&s, false),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn test_error_messages_match_wire_text() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "All fields are required"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email format"
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Invalid phone number format"
        );
    }
}
