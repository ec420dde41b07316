// Tiger Hill Transport - Site Core
//
// This crate provides the backend for the marketing site: it serves the
// embedded web frontend and handles contact-form submissions, forwarding
// them to company staff via the Resend email API.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
