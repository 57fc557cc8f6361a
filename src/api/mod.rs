//! REST client for communicating with the BiblioTec backend

pub mod activity;
pub mod auth;
pub mod books;
pub mod client;
pub mod dashboard;
pub mod genres;
pub mod loans;
pub mod reviews;
pub mod shelves;
pub mod users;

pub use client::{browser_client, client_with, ApiClient, ApiError};
