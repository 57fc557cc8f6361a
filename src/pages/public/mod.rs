//! Public-facing pages

mod catalog;
mod home;
mod login;
mod not_found;
mod register;

pub use catalog::*;
pub use home::*;
pub use login::*;
pub use not_found::*;
pub use register::*;
