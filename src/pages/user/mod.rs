//! Authenticated user pages

mod dashboard;

pub use dashboard::*;
