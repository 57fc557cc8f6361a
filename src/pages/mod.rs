//! Application pages

pub mod admin;
mod dashboard;
pub mod public;
pub mod user;

pub use dashboard::*;
