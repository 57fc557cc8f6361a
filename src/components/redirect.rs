//! Declarative redirect
//!
//! Renders nothing and replaces the current history entry with the target
//! route once mounted. Replacement (rather than push) keeps the abandoned
//! view out of the back stack, so backing up from the target does not bounce
//! through the guard again.

use dioxus::prelude::*;

use crate::routes::Route;

#[derive(Props, Clone, PartialEq, Debug)]
pub struct RedirectProps {
    pub to: Route,
}

#[component]
pub fn Redirect(props: RedirectProps) -> Element {
    let navigator = use_navigator();
    let to = props.to.clone();

    use_effect(move || {
        if navigator.replace(to.clone()).is_some() {
            tracing::warn!("redirect target could not be resolved");
        }
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    // The props carry a route value and memoize on it; the component itself
    // only becomes reachable through the guard and dispatcher views.
    #[test]
    fn props_memoize_on_the_target_route() {
        let login = RedirectProps { to: Route::Login {} };
        assert_eq!(login, RedirectProps { to: Route::Login {} });
        assert_ne!(login, RedirectProps { to: Route::Catalog {} });
    }
}
