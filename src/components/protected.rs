//! Route guard component

use dioxus::prelude::*;

use crate::auth::{check_access, use_session, AccessDecision};
use crate::routes::Route;

use super::{Redirect, SplashScreen};

/// Gate a view behind authentication, optionally requiring admin-tier.
///
/// While the session restore is pending this renders a neutral splash; after
/// that it either renders the child, redirects to login, or bounces a
/// non-admin off to the user dashboard.
#[component]
pub fn Protected(children: Element, #[props(default = false)] require_admin: bool) -> Element {
    let session = use_session();
    let restoring = *session.restoring.read();
    let identity = session.identity.read();

    match check_access(restoring, identity.as_ref(), require_admin, session.policy()) {
        AccessDecision::Pending => rsx! {
            SplashScreen { message: "Verificando acceso..." }
        },
        AccessDecision::RequireLogin => rsx! {
            Redirect { to: Route::Login {} }
        },
        AccessDecision::Forbidden => rsx! {
            Redirect { to: Route::UserDashboard {} }
        },
        AccessDecision::Granted => children,
    }
}
