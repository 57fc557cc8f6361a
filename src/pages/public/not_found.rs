//! Catch-all 404 view

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex items-center justify-center px-4",
            div {
                class: "text-center",
                p { class: "text-6xl font-bold text-gray-300 mb-4", "404" }
                h1 { class: "text-2xl font-semibold text-gray-900 mb-2", "Página no encontrada" }
                p { class: "text-gray-500 mb-6", "No existe la ruta /{path}" }
                Link {
                    to: Route::Home {},
                    class: "px-5 py-2 bg-indigo-600 text-white rounded-md font-medium hover:bg-indigo-700",
                    "Volver al inicio"
                }
            }
        }
    }
}
