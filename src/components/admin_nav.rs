//! Admin navigation component

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::routes::Route;

/// Admin navigation bar
#[component]
pub fn AdminNav() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let logout_session = session.clone();
    let handle_logout = move |_| {
        logout_session.logout();
        navigator.push(Route::Login {});
    };

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between",

                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::AdminHome {},
                        class: "text-xl font-bold text-indigo-700",
                        "BiblioTec Admin"
                    }

                    div {
                        class: "hidden md:flex items-center gap-1",
                        NavLink { to: Route::AdminDashboard {}, label: "Dashboard" }
                        NavLink { to: Route::AdminBooks {}, label: "Libros" }
                        NavLink { to: Route::AdminGenres {}, label: "Géneros" }
                        NavLink { to: Route::AdminShelves {}, label: "Estanterías" }
                        NavLink { to: Route::AdminLoans {}, label: "Préstamos" }
                        NavLink { to: Route::AdminReviews {}, label: "Reseñas" }
                        NavLink { to: Route::AdminUsers {}, label: "Usuarios" }
                        NavLink { to: Route::AdminActivity {}, label: "Actividad" }
                    }
                }

                div {
                    class: "flex items-center gap-4",
                    if let Some(identity) = session.identity.read().as_ref() {
                        span {
                            class: "text-sm text-gray-600",
                            "{identity.display_name}"
                        }
                    }
                    button {
                        class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                        onclick: handle_logout,
                        "Cerrar sesión"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-indigo-100 text-indigo-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
