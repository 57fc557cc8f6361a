//! Login page

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::components::Redirect;
use crate::routes::Route;
use crate::types::LoginCredentials;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Already signed in: let the dispatcher pick the landing view
    if !*session.restoring.read() && session.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Dashboard {} }
        };
    }

    let submit_session = session.clone();
    let handle_submit = move |_| {
        let user = username().trim().to_string();
        let pass = password();
        if user.is_empty() || pass.is_empty() {
            error.set(Some("Ingresa tu correo y contraseña".to_string()));
            return;
        }

        let session = submit_session.clone();
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            let ok = session
                .login(LoginCredentials {
                    username: user,
                    password: pass,
                })
                .await;

            if ok {
                navigator.push(Route::Dashboard {});
            } else {
                error.set(Some(
                    "No se pudo iniciar sesión. Verifica tus credenciales.".to_string(),
                ));
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    div { class: "text-5xl mb-2", "\u{1F4DA}" }
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Iniciar sesión" }
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
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Correo electrónico"
                        }
                        input {
                            r#type: "text",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                            placeholder: "usuario@test.com",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Contraseña"
                        }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-indigo-600 text-white py-2 px-4 rounded-md hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Entrando..." } else { "Entrar" }
                    }
                }

                p {
                    class: "mt-6 text-center text-sm text-gray-600",
                    "¿No tienes cuenta? "
                    Link {
                        to: Route::Register {},
                        class: "text-indigo-600 hover:text-indigo-800 font-medium",
                        "Regístrate"
                    }
                }
            }
        }
    }
}
