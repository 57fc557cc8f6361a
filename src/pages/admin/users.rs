//! User account administration

use dioxus::prelude::*;

use crate::api::{self, client_with};
use crate::auth::use_session;
use crate::components::{ConfirmDialog, LoadingSpinner};
use crate::types::{Role, User, UserForm};

#[component]
pub fn AdminUsers() -> Element {
    let session = use_session();
    let token = session.token();

    let list_token = token.clone();
    let mut users = use_resource(move || {
        let token = list_token.clone();
        async move {
            let client = client_with(token);
            api::users::list(&client).await
        }
    });

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut role = use_signal(|| Role::Estudiante);
    let mut edit_id = use_signal(|| None::<String>);
    let mut show_form = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut pending_delete = use_signal(|| None::<String>);

    let submit_token = token.clone();
    let handle_submit = move |_| {
        let form = UserForm {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            // Blank password on edit means "keep the current one"
            password: Some(password()).filter(|p| !p.is_empty()),
            phone: Some(phone().trim().to_string()).filter(|p| !p.is_empty()),
            role: role(),
        };
        if form.name.is_empty() || form.email.is_empty() {
            error.set(Some("Nombre y correo son obligatorios".to_string()));
            return;
        }
        if edit_id().is_none() && form.password.is_none() {
            error.set(Some("La contraseña es obligatoria para cuentas nuevas".to_string()));
            return;
        }

        let token = submit_token.clone();
        let editing = edit_id();
        spawn(async move {
            let client = client_with(token);
            let result = match editing.as_deref() {
                Some(id) => api::users::update(&client, id, &form).await,
                None => api::users::create(&client, &form).await,
            };
            match result {
                Ok(()) => {
                    error.set(None);
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    phone.set(String::new());
                    role.set(Role::Estudiante);
                    edit_id.set(None);
                    show_form.set(false);
                    users.restart();
                }
                Err(_) => error.set(Some("No se pudo guardar el usuario.".to_string())),
            }
        });
    };

    let toggle_token = token.clone();
    let handle_toggle = use_callback(move |id: String| {
        let token = toggle_token.clone();
        spawn(async move {
            let client = client_with(token);
            match api::users::toggle_status(&client, &id).await {
                Ok(()) => {
                    error.set(None);
                    users.restart();
                }
                Err(_) => error.set(Some("No se pudo cambiar el estado de la cuenta.".to_string())),
            }
        });
    });

    let delete_token = token.clone();
    let handle_delete = move |_| {
        let Some(id) = pending_delete() else { return };
        let token = delete_token.clone();
        spawn(async move {
            let client = client_with(token);
            match api::users::remove(&client, &id).await {
                Ok(()) => {
                    error.set(None);
                    users.restart();
                }
                Err(_) => error.set(Some("No se pudo eliminar el usuario.".to_string())),
            }
            pending_delete.set(None);
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Usuarios" }
                button {
                    class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                    onclick: move |_| {
                        if show_form() {
                            edit_id.set(None);
                        }
                        show_form.toggle();
                    },
                    if show_form() { "Cerrar" } else { "Nuevo usuario" }
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
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Correo" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Contraseña" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            placeholder: if edit_id().is_some() { "Dejar en blanco para no cambiarla" } else { "" },
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Teléfono" }
                        input {
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Tipo" }
                        select {
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                            value: "{role().as_str()}",
                            onchange: move |e| role.set(Role::parse(&e.value())),
                            option { value: "estudiante", "Estudiante" }
                            option { value: "profesor", "Profesor" }
                            option { value: "bibliotecario", "Bibliotecario" }
                            option { value: "admin", "Administrador" }
                        }
                    }
                    div {
                        class: "sm:col-span-2",
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                            if edit_id().is_some() { "Guardar cambios" } else { "Crear usuario" }
                        }
                    }
                }
            }

            match users.read().as_ref() {
                None => rsx! {
                    LoadingSpinner {}
                },
                Some(Err(_)) => rsx! {
                    div {
                        class: "p-4 bg-orange-50 border border-orange-200 text-orange-800 rounded",
                        "No se pudieron cargar los usuarios."
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-gray-500 text-center py-12", "No hay usuarios registrados." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-x-auto",
                        table {
                            class: "min-w-full text-sm",
                            thead {
                                tr {
                                    class: "border-b border-gray-200 text-left text-gray-500",
                                    th { class: "px-4 py-3 font-medium", "Nombre" }
                                    th { class: "px-4 py-3 font-medium", "Correo" }
                                    th { class: "px-4 py-3 font-medium", "Tipo" }
                                    th { class: "px-4 py-3 font-medium", "Estado" }
                                    th { class: "px-4 py-3" }
                                }
                            }
                            tbody {
                                for user in list.iter() {
                                    UserRow {
                                        key: "{user.id}",
                                        user: user.clone(),
                                        on_edit: move |user: User| {
                                            name.set(user.name);
                                            email.set(user.email);
                                            password.set(String::new());
                                            phone.set(user.phone.unwrap_or_default());
                                            role.set(user.role);
                                            edit_id.set(Some(user.id));
                                            show_form.set(true);
                                        },
                                        on_toggle: handle_toggle,
                                        on_delete: move |id: String| pending_delete.set(Some(id)),
                                    }
                                }
                            }
                        }
                    }
                },
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    title: "Eliminar usuario",
                    message: "La cuenta y su historial se perderán. Esta acción no se puede deshacer.",
                    on_confirm: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct UserRowProps {
    user: User,
    on_edit: EventHandler<User>,
    on_toggle: EventHandler<String>,
    on_delete: EventHandler<String>,
}

#[component]
fn UserRow(props: UserRowProps) -> Element {
    let UserRowProps {
        user,
        on_edit,
        on_toggle,
        on_delete,
    } = props;
    let edit_user = user.clone();
    let toggle_id = user.id.clone();
    let delete_id = user.id.clone();

    let (status_label, status_class) = if user.active {
        ("Activa", "bg-green-100 text-green-700")
    } else {
        ("Desactivada", "bg-gray-100 text-gray-600")
    };

    rsx! {
        tr {
            class: "border-b border-gray-100 last:border-0",
            td { class: "px-4 py-3 font-medium text-gray-900", "{user.name}" }
            td { class: "px-4 py-3 text-gray-600", "{user.email}" }
            td {
                class: "px-4 py-3",
                span {
                    class: "px-2 py-0.5 rounded text-xs bg-indigo-50 text-indigo-700",
                    {user.role.label()}
                }
            }
            td {
                class: "px-4 py-3",
                span {
                    class: "px-2 py-0.5 rounded text-xs font-medium {status_class}",
                    "{status_label}"
                }
            }
            td {
                class: "px-4 py-3 text-right whitespace-nowrap",
                button {
                    class: "px-3 py-1 text-sm bg-gray-100 text-gray-700 rounded hover:bg-gray-200 mr-2",
                    onclick: move |_| on_edit.call(edit_user.clone()),
                    "Editar"
                }
                button {
                    class: "px-3 py-1 text-sm bg-gray-100 text-gray-700 rounded hover:bg-gray-200 mr-2",
                    onclick: move |_| on_toggle.call(toggle_id.clone()),
                    if user.active { "Desactivar" } else { "Activar" }
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
