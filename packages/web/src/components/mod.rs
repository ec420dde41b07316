//! Reusable UI components

mod contact_form;
mod credential_card;

pub use contact_form::*;
pub use credential_card::*;
