//! Public navigation bar

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let logout_session = session.clone();
    let handle_logout = move |_| {
        logout_session.logout();
        navigator.push(Route::Home {});
    };

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "max-w-6xl mx-auto flex items-center justify-between",

                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::Home {},
                        class: "text-xl font-bold text-indigo-700",
                        "\u{1F4DA} BiblioTec"
                    }
                    Link {
                        to: Route::Catalog {},
                        class: "text-sm font-medium text-gray-600 hover:text-gray-900",
                        "Catálogo"
                    }
                }

                div {
                    class: "flex items-center gap-3",
                    if session.is_authenticated() {
                        Link {
                            to: Route::Dashboard {},
                            class: "text-sm font-medium text-indigo-600 hover:text-indigo-800",
                            if session.is_admin() { "Panel de administración" } else { "Mi panel" }
                        }
                        button {
                            class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                            onclick: handle_logout,
                            "Cerrar sesión"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "text-sm font-medium text-gray-600 hover:text-gray-900",
                            "Iniciar sesión"
                        }
                        Link {
                            to: Route::Register {},
                            class: "text-sm font-medium bg-indigo-600 text-white px-3 py-1.5 rounded hover:bg-indigo-700",
                            "Registrarse"
                        }
                    }
                }
            }
        }
    }
}
