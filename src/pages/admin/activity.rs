//! User-activity log

use dioxus::prelude::*;

use crate::api::{self, client_with};
use crate::auth::use_session;
use crate::components::{ConfirmDialog, LoadingSpinner};
use crate::types::ActivityForm;

#[component]
pub fn AdminActivity() -> Element {
    let session = use_session();
    let token = session.token();

    let list_token = token.clone();
    let mut activity = use_resource(move || {
        let token = list_token.clone();
        async move {
            let client = client_with(token);
            api::activity::list(&client).await
        }
    });

    let mut user = use_signal(String::new);
    let mut action = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut edit_id = use_signal(|| None::<String>);
    let mut show_form = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut pending_delete = use_signal(|| None::<String>);

    let submit_token = token.clone();
    let handle_submit = move |_| {
        let form = ActivityForm {
            user: user().trim().to_string(),
            action: action().trim().to_string(),
            occurred_at: date().trim().to_string(),
        };
        if form.user.is_empty() || form.action.is_empty() {
            error.set(Some("Usuario y acción son obligatorios".to_string()));
            return;
        }

        let token = submit_token.clone();
        let editing = edit_id();
        spawn(async move {
            let client = client_with(token);
            let result = match editing.as_deref() {
                Some(event_id) => {
                    api::activity::update_event(&client, &form.user, event_id, &form).await
                }
                None => api::activity::record(&client, &form.user, &form).await,
            };
            match result {
                Ok(()) => {
                    error.set(None);
                    user.set(String::new());
                    action.set(String::new());
                    date.set(String::new());
                    edit_id.set(None);
                    show_form.set(false);
                    activity.restart();
                }
                Err(_) => error.set(Some("No se pudo guardar el registro.".to_string())),
            }
        });
    };

    let delete_token = token.clone();
    let handle_delete = move |_| {
        let Some(id) = pending_delete() else { return };
        let token = delete_token.clone();
        spawn(async move {
            let client = client_with(token);
            match api::activity::remove(&client, &id).await {
                Ok(()) => {
                    error.set(None);
                    activity.restart();
                }
                Err(_) => error.set(Some("No se pudo eliminar el registro.".to_string())),
            }
            pending_delete.set(None);
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Actividad" }
                button {
                    class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                    onclick: move |_| {
                        if show_form() {
                            edit_id.set(None);
                        }
                        show_form.toggle();
                    },
                    if show_form() { "Cerrar" } else { "Registrar actividad" }
                }
            }

            if show_form() {
                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-5 mb-6 grid grid-cols-1 sm:grid-cols-3 gap-4",
                    onsubmit: handle_submit,
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Usuario" }
                        input {
                            r#type: "text",
                            value: "{user}",
                            oninput: move |e| user.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Acción" }
                        input {
                            r#type: "text",
                            value: "{action}",
                            oninput: move |e| action.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Fecha" }
                        input {
                            r#type: "date",
                            value: "{date}",
                            oninput: move |e| date.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        class: "sm:col-span-3",
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                            if edit_id().is_some() { "Actualizar" } else { "Agregar" }
                        }
                    }
                }
            }

            if let Some(err) = error() {
                div {
                    class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                    "{err}"
                }
            }

            match activity.read().as_ref() {
                None => rsx! {
                    LoadingSpinner {}
                },
                Some(Err(_)) => rsx! {
                    div {
                        class: "p-4 bg-orange-50 border border-orange-200 text-orange-800 rounded",
                        "No se pudo cargar el registro de actividad."
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-gray-500 text-center py-12", "No hay actividad registrada." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-100",
                        for entry in list.iter() {
                            {
                                let user_name = entry
                                    .user
                                    .as_ref()
                                    .map(|user| user.name.clone())
                                    .unwrap_or_else(|| entry.user_id.clone());
                                let entry_id = entry.id.clone();
                                let kind = entry.kind.clone();
                                let description = entry.description.clone();
                                let occurred_at = entry.occurred_at.clone();
                                let edit_event = entry.id.clone();
                                let edit_user = entry.user_id.clone();
                                let edit_action = entry.description.clone();
                                let edit_date = entry.occurred_at.clone();
                                rsx! {
                                    div {
                                        key: "{entry.id}",
                                        class: "p-4 flex items-center justify-between gap-4",
                                        div {
                                            p {
                                                class: "text-sm text-gray-900",
                                                span { class: "font-medium", "{user_name}" }
                                                " · {description}"
                                            }
                                            p {
                                                class: "text-xs text-gray-400",
                                                "{kind} · {occurred_at}"
                                            }
                                        }
                                        div {
                                            class: "flex gap-2",
                                            button {
                                                class: "px-3 py-1 text-sm bg-gray-100 text-gray-700 rounded hover:bg-gray-200",
                                                onclick: move |_| {
                                                    user.set(edit_user.clone());
                                                    action.set(edit_action.clone());
                                                    date.set(edit_date.clone());
                                                    edit_id.set(Some(edit_event.clone()));
                                                    show_form.set(true);
                                                },
                                                "Editar"
                                            }
                                            button {
                                                class: "px-3 py-1 text-sm bg-red-50 text-red-700 rounded hover:bg-red-100",
                                                onclick: move |_| pending_delete.set(Some(entry_id.clone())),
                                                "Eliminar"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    title: "Eliminar registro",
                    message: "El registro de actividad se eliminará permanentemente.",
                    on_confirm: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
