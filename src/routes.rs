//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::pages::admin::{
    AdminActivity, AdminBooks, AdminDashboard, AdminGenres, AdminHome, AdminLoans, AdminReviews,
    AdminShelves, AdminUsers,
};
use crate::pages::public::{Catalog, Home, Login, NotFound, Register};
use crate::pages::user::{UserDashboard, UserHome};
use crate::pages::Dashboard;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/catalog")]
    Catalog {},

    // Post-login landing dispatcher
    #[route("/dashboard")]
    Dashboard {},

    // User routes
    #[route("/user-dashboard")]
    UserDashboard {},

    #[route("/user")]
    UserHome {},

    // Admin routes (guarded by the layout)
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/")]
            AdminHome {},

            #[route("/dashboard")]
            AdminDashboard {},

            #[route("/books")]
            AdminBooks {},

            #[route("/genres")]
            AdminGenres {},

            #[route("/shelves")]
            AdminShelves {},

            #[route("/loans")]
            AdminLoans {},

            #[route("/reviews")]
            AdminReviews {},

            #[route("/users")]
            AdminUsers {},

            #[route("/activity")]
            AdminActivity {},
        #[end_layout]
    #[end_nest]

    // Unmatched paths land on the not-found view
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
