//! Whop Intel - Dioxus Fullstack Web Application
//!
//! A single-page market-intelligence dashboard: type a Whop product name
//! or URL, get back an AI-extracted listing card with pricing, sentiment,
//! competitors, and grounding sources.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;

fn main() {
    // Server-side env (GEMINI_API_KEY); a no-op on the client
    #[cfg(feature = "server")]
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
