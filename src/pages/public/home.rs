//! Landing page

use dioxus::prelude::*;

use crate::components::Navbar;
use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-blue-50 via-white to-purple-50",
            Navbar {}

            main {
                class: "max-w-4xl mx-auto px-6 py-20 text-center",
                div { class: "text-7xl mb-6", "\u{1F4DA}" }
                h1 {
                    class: "text-5xl font-bold text-gray-900 mb-4",
                    "BiblioTec"
                }
                p {
                    class: "text-xl text-gray-600 mb-10",
                    "Explora el catálogo, gestiona tus préstamos y descubre tu próxima lectura."
                }
                div {
                    class: "flex justify-center gap-4",
                    Link {
                        to: Route::Catalog {},
                        class: "px-6 py-3 bg-indigo-600 text-white rounded-md font-medium hover:bg-indigo-700",
                        "Ver catálogo"
                    }
                    Link {
                        to: Route::Login {},
                        class: "px-6 py-3 bg-white text-indigo-700 border border-indigo-200 rounded-md font-medium hover:bg-indigo-50",
                        "Iniciar sesión"
                    }
                }
            }
        }
    }
}
