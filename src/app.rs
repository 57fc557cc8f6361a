//! Root application component

use dioxus::prelude::*;

use crate::auth::SessionProvider;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Session context provider wraps the entire app
        SessionProvider {
            Router::<Route> {}
        }
    }
}
