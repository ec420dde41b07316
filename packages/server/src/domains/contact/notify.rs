//! Notification email composition and best-effort delivery.

use chrono::Utc;

use super::models::{DeliveryResult, Submission};
use crate::config::ContactSettings;
use crate::kernel::{BaseMailer, OutboundEmail};

/// Build the staff notification email for a validated submission.
///
/// Subject is templated with the sender's name; the HTML body embeds all
/// submitted fields and a server-generated timestamp.
pub fn notification_email(submission: &Submission, settings: &ContactSettings) -> OutboundEmail {
    let received_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    let phone_row = if submission.has_phone() {
        format!("<p><strong>Phone:</strong> {}</p>", submission.phone.trim())
    } else {
        String::new()
    };

    let html = format!(
        "<h2>New Contact Form Submission</h2>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         {phone_row}\
         <p><strong>Message:</strong></p>\
         <p>{message}</p>\
         <hr>\
         <p><em>Received {received_at}</em></p>",
        name = submission.name.trim(),
        email = submission.email.trim(),
        message = submission.message.trim(),
    );

    OutboundEmail {
        from: settings.from_address.clone(),
        to: settings.to_addresses.clone(),
        subject: format!(
            "New Contact Form Submission from {}",
            submission.name.trim()
        ),
        html,
    }
}

/// Hand the email to the delivery capability and fold the outcome into an
/// explicit result. Never retries; the caller logs a `Failed` and moves on.
pub async fn deliver(mailer: &dyn BaseMailer, email: &OutboundEmail) -> DeliveryResult {
    match mailer.send_email(email).await {
        Ok(()) => DeliveryResult::Delivered,
        Err(e) => DeliveryResult::Failed(e.to_string()),
    }
}
