//! Genre administration

use dioxus::prelude::*;

use crate::api::{self, client_with};
use crate::auth::use_session;
use crate::components::{ConfirmDialog, LoadingSpinner};
use crate::types::{Genre, GenreForm};

#[component]
pub fn AdminGenres() -> Element {
    let session = use_session();
    let token = session.token();

    let list_token = token.clone();
    let mut genres = use_resource(move || {
        let token = list_token.clone();
        async move {
            let client = client_with(token);
            api::genres::list(&client).await
        }
    });

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut icon = use_signal(String::new);
    let mut color = use_signal(String::new);
    let mut edit_id = use_signal(|| None::<String>);
    let mut show_form = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut pending_delete = use_signal(|| None::<String>);

    let submit_token = token.clone();
    let handle_submit = move |_| {
        let form = GenreForm {
            name: name().trim().to_string(),
            description: description().trim().to_string(),
            icon: Some(icon().trim().to_string()).filter(|s| !s.is_empty()),
            color: Some(color().trim().to_string()).filter(|s| !s.is_empty()),
        };
        if form.name.is_empty() {
            error.set(Some("El nombre es obligatorio".to_string()));
            return;
        }

        let token = submit_token.clone();
        let editing = edit_id();
        spawn(async move {
            let client = client_with(token);
            let result = match editing.as_deref() {
                Some(id) => api::genres::update(&client, id, &form).await,
                None => api::genres::create(&client, &form).await,
            };
            match result {
                Ok(()) => {
                    error.set(None);
                    name.set(String::new());
                    description.set(String::new());
                    icon.set(String::new());
                    color.set(String::new());
                    edit_id.set(None);
                    show_form.set(false);
                    genres.restart();
                }
                Err(_) => error.set(Some("No se pudo guardar el género.".to_string())),
            }
        });
    };

    let delete_token = token.clone();
    let handle_delete = move |_| {
        let Some(id) = pending_delete() else { return };
        let token = delete_token.clone();
        spawn(async move {
            let client = client_with(token);
            match api::genres::remove(&client, &id).await {
                Ok(()) => {
                    error.set(None);
                    genres.restart();
                }
                Err(_) => error.set(Some("No se pudo eliminar el género.".to_string())),
            }
            pending_delete.set(None);
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Géneros" }
                button {
                    class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                    onclick: move |_| {
                        if show_form() {
                            edit_id.set(None);
                        }
                        show_form.toggle();
                    },
                    if show_form() { "Cerrar" } else { "Nuevo género" }
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
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-5 mb-6 grid grid-cols-1 sm:grid-cols-2 gap-4",
                    onsubmit: handle_submit,
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Nombre" }
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
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
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Icono" }
                        input {
                            r#type: "text",
                            value: "{icon}",
                            oninput: move |e| icon.set(e.value()),
                            placeholder: "\u{1F4D6}",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Color" }
                        input {
                            r#type: "text",
                            value: "{color}",
                            oninput: move |e| color.set(e.value()),
                            placeholder: "#6366f1",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        class: "sm:col-span-2",
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                            if edit_id().is_some() { "Guardar cambios" } else { "Crear género" }
                        }
                    }
                }
            }

            match genres.read().as_ref() {
                None => rsx! {
                    LoadingSpinner {}
                },
                Some(Err(_)) => rsx! {
                    div {
                        class: "p-4 bg-orange-50 border border-orange-200 text-orange-800 rounded",
                        "No se pudieron cargar los géneros."
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-gray-500 text-center py-12", "No hay géneros registrados." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                        for genre in list.iter() {
                            GenreCard {
                                key: "{genre.id}",
                                genre: genre.clone(),
                                on_edit: move |genre: Genre| {
                                    name.set(genre.name);
                                    description.set(genre.description);
                                    icon.set(genre.icon.unwrap_or_default());
                                    color.set(genre.color.unwrap_or_default());
                                    edit_id.set(Some(genre.id));
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
                    title: "Eliminar género",
                    message: "Esta acción no se puede deshacer.",
                    on_confirm: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct GenreCardProps {
    genre: Genre,
    on_edit: EventHandler<Genre>,
    on_delete: EventHandler<String>,
}

#[component]
fn GenreCard(props: GenreCardProps) -> Element {
    let GenreCardProps {
        genre,
        on_edit,
        on_delete,
    } = props;
    let edit_genre = genre.clone();
    let delete_id = genre.id.clone();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",
            div {
                class: "flex items-start justify-between mb-2",
                div {
                    class: "flex items-center gap-2",
                    if let Some(icon) = genre.icon.as_ref() {
                        span { class: "text-xl", "{icon}" }
                    }
                    h3 { class: "font-semibold text-gray-900", "{genre.name}" }
                }
                if let Some(total) = genre.total_books {
                    span {
                        class: "px-2 py-0.5 rounded text-xs bg-indigo-50 text-indigo-700",
                        "{total} libros"
                    }
                }
            }
            if !genre.description.is_empty() {
                p { class: "text-sm text-gray-500 mb-3", "{genre.description}" }
            }
            div {
                class: "flex gap-2",
                button {
                    class: "px-3 py-1 text-sm bg-gray-100 text-gray-700 rounded hover:bg-gray-200",
                    onclick: move |_| on_edit.call(edit_genre.clone()),
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
