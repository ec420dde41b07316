use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub resend_api_key: String,
    pub contact: ContactSettings,
}

/// Settings for the contact-form pipeline, carried in app state
#[derive(Debug, Clone)]
pub struct ContactSettings {
    /// Sender address for notification emails
    pub from_address: String,
    /// Staff addresses that receive submissions
    pub to_addresses: Vec<String>,
    /// Whether the phone field is required (deployments disagree, so this
    /// is a flag rather than a hard-coded rule)
    pub require_phone: bool,
    /// Copy shown to the visitor after a successful submission
    pub confirmation_message: String,
}

pub const DEFAULT_CONFIRMATION_MESSAGE: &str =
    "Thank you for your message! We'll get back to you soon.";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            resend_api_key: env::var("RESEND_API_KEY")
                .context("RESEND_API_KEY must be set")?,
            contact: ContactSettings {
                from_address: env::var("CONTACT_FROM_ADDRESS")
                    .unwrap_or_else(|_| "noreply@tigerhilltransport.com".to_string()),
                to_addresses: env::var("CONTACT_TO_ADDRESSES")
                    .unwrap_or_else(|_| "tigerhilltransport@gmail.com".to_string())
                    .split(',')
                    .map(|address| address.trim().to_string())
                    .filter(|address| !address.is_empty())
                    .collect(),
                require_phone: env::var("CONTACT_REQUIRE_PHONE")
                    .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
                confirmation_message: env::var("CONTACT_CONFIRMATION_MESSAGE")
                    .unwrap_or_else(|_| DEFAULT_CONFIRMATION_MESSAGE.to_string()),
            },
        })
    }
}
