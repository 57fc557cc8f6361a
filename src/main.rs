//! BiblioTec - Dioxus web frontend for the library-management backend
//!
//! Single-page client: public catalog, login/register, a user dashboard for
//! loans, and an admin panel with CRUD screens for books, genres, shelves,
//! loans, reviews, users and activity logs. Every screen is a thin view over
//! the REST API.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod config;
mod pages;
mod routes;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    if let Some(url) = option_env!("BIBLIOTEC_API_URL") {
        config::init_api_url(url.to_string());
    }

    dioxus::launch(app::App);
}
