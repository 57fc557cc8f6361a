//! Confirmation dialog for destructive actions

use dioxus::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/40 flex items-center justify-center z-50",
            div {
                class: "bg-white rounded-lg shadow-lg p-6 max-w-sm w-full mx-4",
                h3 { class: "text-lg font-semibold text-gray-900 mb-2", "{title}" }
                p { class: "text-sm text-gray-600 mb-6", "{message}" }
                div {
                    class: "flex justify-end gap-2",
                    button {
                        class: "px-4 py-2 text-sm rounded-md bg-gray-100 text-gray-700 hover:bg-gray-200",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "px-4 py-2 text-sm rounded-md bg-red-600 text-white hover:bg-red-700",
                        onclick: move |_| on_confirm.call(()),
                        "Eliminar"
                    }
                }
            }
        }
    }
}
