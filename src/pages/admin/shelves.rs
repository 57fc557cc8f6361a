//! Shelf administration

use dioxus::prelude::*;

use crate::api::{self, client_with};
use crate::auth::use_session;
use crate::components::{ConfirmDialog, LoadingSpinner};
use crate::types::{Shelf, ShelfForm};

#[component]
pub fn AdminShelves() -> Element {
    let session = use_session();
    let token = session.token();

    let list_token = token.clone();
    let mut shelves = use_resource(move || {
        let token = list_token.clone();
        async move {
            let client = client_with(token);
            api::shelves::list(&client).await
        }
    });

    let mut code = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut capacity = use_signal(String::new);
    let mut section = use_signal(String::new);
    let mut floor = use_signal(String::new);
    let mut edit_id = use_signal(|| None::<String>);
    let mut show_form = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut pending_delete = use_signal(|| None::<String>);

    let submit_token = token.clone();
    let handle_submit = move |_| {
        let form = ShelfForm {
            code: code().trim().to_string(),
            location: location().trim().to_string(),
            description: Some(description().trim().to_string()).filter(|s| !s.is_empty()),
            capacity: capacity().trim().parse().unwrap_or(0),
            section: Some(section().trim().to_string()).filter(|s| !s.is_empty()),
            floor: floor().trim().parse().ok(),
        };
        if form.code.is_empty() || form.location.is_empty() {
            error.set(Some("Código y ubicación son obligatorios".to_string()));
            return;
        }

        let token = submit_token.clone();
        let editing = edit_id();
        spawn(async move {
            let client = client_with(token);
            let result = match editing.as_deref() {
                Some(id) => api::shelves::update(&client, id, &form).await,
                None => api::shelves::create(&client, &form).await,
            };
            match result {
                Ok(()) => {
                    error.set(None);
                    code.set(String::new());
                    location.set(String::new());
                    description.set(String::new());
                    capacity.set(String::new());
                    section.set(String::new());
                    floor.set(String::new());
                    edit_id.set(None);
                    show_form.set(false);
                    shelves.restart();
                }
                Err(_) => error.set(Some("No se pudo guardar la estantería.".to_string())),
            }
        });
    };

    let delete_token = token.clone();
    let handle_delete = move |_| {
        let Some(id) = pending_delete() else { return };
        let token = delete_token.clone();
        spawn(async move {
            let client = client_with(token);
            match api::shelves::remove(&client, &id).await {
                Ok(()) => {
                    error.set(None);
                    shelves.restart();
                }
                Err(_) => error.set(Some("No se pudo eliminar la estantería.".to_string())),
            }
            pending_delete.set(None);
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Estanterías" }
                button {
                    class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                    onclick: move |_| {
                        if show_form() {
                            edit_id.set(None);
                        }
                        show_form.toggle();
                    },
                    if show_form() { "Cerrar" } else { "Nueva estantería" }
                }
            }

            if let Some(err) = error() {
                div {
                    class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                    "{err}"
                }
            }

            if show_form() {
                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-5 mb-6 grid grid-cols-1 sm:grid-cols-3 gap-4",
                    onsubmit: handle_submit,
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Código" }
                        input {
                            r#type: "text",
                            value: "{code}",
                            oninput: move |e| code.set(e.value()),
                            placeholder: "EST-A1",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Ubicación" }
                        input {
                            r#type: "text",
                            value: "{location}",
                            oninput: move |e| location.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Capacidad" }
                        input {
                            r#type: "number",
                            value: "{capacity}",
                            oninput: move |e| capacity.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Sección" }
                        input {
                            r#type: "text",
                            value: "{section}",
                            oninput: move |e| section.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Piso" }
                        input {
                            r#type: "number",
                            value: "{floor}",
                            oninput: move |e| floor.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Descripción" }
                        input {
                            r#type: "text",
                            value: "{description}",
                            oninput: move |e| description.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        class: "sm:col-span-3",
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                            if edit_id().is_some() { "Guardar cambios" } else { "Crear estantería" }
                        }
                    }
                }
            }

            match shelves.read().as_ref() {
                None => rsx! {
                    LoadingSpinner {}
                },
                Some(Err(_)) => rsx! {
                    div {
                        class: "p-4 bg-orange-50 border border-orange-200 text-orange-800 rounded",
                        "No se pudieron cargar las estanterías."
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-gray-500 text-center py-12", "No hay estanterías registradas." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                        for shelf in list.iter() {
                            ShelfCard {
                                key: "{shelf.id}",
                                shelf: shelf.clone(),
                                on_edit: move |shelf: Shelf| {
                                    code.set(shelf.code);
                                    location.set(shelf.location);
                                    description.set(shelf.description.unwrap_or_default());
                                    capacity.set(shelf.capacity.to_string());
                                    section.set(shelf.section.unwrap_or_default());
                                    floor.set(shelf.floor.map(|f| f.to_string()).unwrap_or_default());
                                    edit_id.set(Some(shelf.id));
                                    show_form.set(true);
                                },
                                on_delete: move |id: String| pending_delete.set(Some(id)),
                            }
                        }
                    }
                },
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    title: "Eliminar estantería",
                    message: "Esta acción no se puede deshacer.",
                    on_confirm: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ShelfCardProps {
    shelf: Shelf,
    on_edit: EventHandler<Shelf>,
    on_delete: EventHandler<String>,
}

#[component]
fn ShelfCard(props: ShelfCardProps) -> Element {
    let ShelfCardProps {
        shelf,
        on_edit,
        on_delete,
    } = props;
    let edit_shelf = shelf.clone();
    let delete_id = shelf.id.clone();

    let occupancy = if shelf.capacity > 0 {
        ((shelf.current_books * 100) / shelf.capacity).min(100)
    } else {
        0
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",
            div {
                class: "flex items-start justify-between mb-1",
                h3 { class: "font-semibold text-gray-900", "{shelf.code}" }
                span {
                    class: "px-2 py-0.5 rounded text-xs bg-gray-100 text-gray-600",
                    "{shelf.current_books}/{shelf.capacity}"
                }
            }
            p { class: "text-sm text-gray-500 mb-2", "{shelf.location}" }
            div {
                class: "w-full bg-gray-100 rounded-full h-1.5 mb-3",
                div {
                    class: "bg-indigo-500 h-1.5 rounded-full",
                    style: "width: {occupancy}%",
                }
            }
            div {
                class: "flex gap-2",
                button {
                    class: "px-3 py-1 text-sm bg-gray-100 text-gray-700 rounded hover:bg-gray-200",
                    onclick: move |_| on_edit.call(edit_shelf.clone()),
                    "Editar"
                }
                button {
                    class: "px-3 py-1 text-sm bg-red-50 text-red-700 rounded hover:bg-red-100",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Eliminar"
                }
            }
        }
    }
}
