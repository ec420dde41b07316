//! Tiger Hill Transport - Marketing Site
//!
//! Single-page marketing site with a contact form, built with Dioxus.
//! The production build is embedded and served by `packages/server`.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve
//! ```
//!
//! Production build (output embedded by the server):
//! ```bash
//! dx build --release
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod content;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    dioxus::launch(app::App);
}
