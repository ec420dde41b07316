//! Contact-form submission domain: the transient Submission record, the
//! fixed-order validator, and notification delivery.

pub mod models;
pub mod notify;
pub mod validation;

pub use models::*;
pub use notify::*;
pub use validation::*;
