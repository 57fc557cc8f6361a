//! Reusable UI components

mod admin_layout;
mod admin_nav;
mod book_card;
mod confirm_dialog;
mod loading;
mod navbar;
mod protected;
mod redirect;

pub use admin_layout::*;
pub use admin_nav::*;
pub use book_card::*;
pub use confirm_dialog::*;
pub use loading::*;
pub use navbar::*;
pub use protected::*;
pub use redirect::*;
