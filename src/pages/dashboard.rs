//! Post-login landing dispatcher
//!
//! `/dashboard` is where the login/register flows drop the user. Nobody
//! picked a destination yet, so the admin-tier policy decides: admins land
//! on the admin panel, everyone else on the user dashboard.

use dioxus::prelude::*;

use crate::auth::{landing_for, use_session, LandingDecision};
use crate::components::{Redirect, SplashScreen};
use crate::routes::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let restoring = *session.restoring.read();
    let identity = session.identity.read();

    match landing_for(restoring, identity.as_ref(), session.policy()) {
        LandingDecision::Pending => rsx! {
            SplashScreen { message: "Redirigiendo..." }
        },
        LandingDecision::RequireLogin => rsx! {
            Redirect { to: Route::Login {} }
        },
        LandingDecision::Admin => rsx! {
            Redirect { to: Route::AdminHome {} }
        },
        LandingDecision::User => rsx! {
            Redirect { to: Route::UserDashboard {} }
        },
    }
}
