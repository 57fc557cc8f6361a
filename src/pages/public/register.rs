//! Registration page

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::components::Redirect;
use crate::routes::Route;
use crate::types::{RegisterData, Role};

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut role = use_signal(|| Role::Estudiante);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    if !*session.restoring.read() && session.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Dashboard {} }
        };
    }

    let submit_session = session.clone();
    let handle_submit = move |_| {
        let data = RegisterData {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            phone: Some(phone().trim().to_string()).filter(|p| !p.is_empty()),
            role: role(),
            username: None,
        };
        if data.name.is_empty() || data.email.is_empty() || data.password.is_empty() {
            error.set(Some("Completa nombre, correo y contraseña".to_string()));
            return;
        }

        let session = submit_session.clone();
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            if session.register(data).await {
                navigator.push(Route::Dashboard {});
            } else {
                error.set(Some("No se pudo completar el registro.".to_string()));
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4 py-10",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Crear cuenta" }
                    p { class: "text-gray-600 text-sm", "BiblioTec" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Nombre completo" }
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-4",
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Correo electrónico" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-4",
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Contraseña" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-4",
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Teléfono (opcional)" }
                        input {
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Tipo de cuenta" }
                        select {
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            value: "{role().as_str()}",
                            onchange: move |e| role.set(Role::parse(&e.value())),
                            option { value: "estudiante", "Estudiante" }
                            option { value: "profesor", "Profesor" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-indigo-600 text-white py-2 px-4 rounded-md hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Creando cuenta..." } else { "Registrarse" }
                    }
                }

                p {
                    class: "mt-6 text-center text-sm text-gray-600",
                    "¿Ya tienes cuenta? "
                    Link {
                        to: Route::Login {},
                        class: "text-indigo-600 hover:text-indigo-800 font-medium",
                        "Inicia sesión"
                    }
                }
            }
        }
    }
}
