//! Admin layout wrapper with auth protection

use dioxus::prelude::*;

use crate::auth::{check_access, use_session, AccessDecision};
use crate::routes::Route;

use super::{AdminNav, Redirect, SplashScreen};

/// Admin layout component that provides navigation and admin-tier protection
/// for every route nested under `/admin`.
#[component]
pub fn AdminLayout() -> Element {
    let session = use_session();
    let restoring = *session.restoring.read();
    let identity = session.identity.read();

    match check_access(restoring, identity.as_ref(), true, session.policy()) {
        AccessDecision::Pending => {
            return rsx! {
                SplashScreen { message: "Verificando acceso..." }
            };
        }
        AccessDecision::RequireLogin => {
            return rsx! {
                Redirect { to: Route::Login {} }
            };
        }
        AccessDecision::Forbidden => {
            return rsx! {
                Redirect { to: Route::UserDashboard {} }
            };
        }
        AccessDecision::Granted => {}
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            AdminNav {}

            main {
                class: "p-6",
                Outlet::<Route> {}
            }
        }
    }
}
