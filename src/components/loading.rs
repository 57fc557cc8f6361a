//! Loading components

use dioxus::prelude::*;

/// Inline loading spinner
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-indigo-400 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-indigo-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-indigo-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "Cargando..." }
        }
    }
}

/// Full-page splash shown while the session restore is still pending, so a
/// guarded view never flash-redirects before the restore resolves.
#[component]
pub fn SplashScreen(message: String) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-blue-50 via-white to-purple-50 flex items-center justify-center",
            div {
                class: "text-center",
                div { class: "text-8xl mb-6 animate-bounce", "\u{1F4DA}" }
                h2 { class: "text-4xl font-bold text-gray-800 mb-4", "BiblioTec" }
                p { class: "text-xl text-gray-600 mb-8", "{message}" }
                div {
                    class: "flex justify-center space-x-2",
                    div { class: "w-4 h-4 bg-blue-500 rounded-full animate-pulse" }
                    div { class: "w-4 h-4 bg-purple-500 rounded-full animate-pulse", style: "animation-delay: 0.2s" }
                    div { class: "w-4 h-4 bg-pink-500 rounded-full animate-pulse", style: "animation-delay: 0.4s" }
                }
            }
        }
    }
}
