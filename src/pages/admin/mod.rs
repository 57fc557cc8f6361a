//! Admin panel pages, all rendered inside [`crate::components::AdminLayout`]

mod activity;
mod books;
mod dashboard;
mod genres;
mod loans;
mod reviews;
mod shelves;
mod users;

pub use activity::*;
pub use books::*;
pub use dashboard::*;
pub use genres::*;
pub use loans::*;
pub use reviews::*;
pub use shelves::*;
pub use users::*;
