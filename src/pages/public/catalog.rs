//! Public catalog with search and category filter

use dioxus::prelude::*;

use crate::api::{self, browser_client, client_with};
use crate::auth::use_session;
use crate::components::{BookCard, LoadingSpinner, Navbar};
use crate::types::CatalogQuery;

#[component]
pub fn Catalog() -> Element {
    let session = use_session();
    let mut search = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut notice = use_signal(|| None::<(bool, String)>);

    let books = use_resource(move || {
        let query = CatalogQuery {
            search: Some(search()).filter(|s| !s.is_empty()),
            category: Some(category()).filter(|c| !c.is_empty()),
            page: None,
            limit: None,
        };
        async move {
            let client = browser_client();
            api::books::public_catalog(&client, &query).await
        }
    });

    let categories = use_resource(|| async {
        let client = browser_client();
        api::books::public_categories(&client).await
    });

    let borrow_token = session.token();
    let handle_borrow = use_callback(move |book_id: String| {
        let token = borrow_token.clone();
        spawn(async move {
            let client = client_with(token);
            match api::loans::borrow(&client, &book_id).await {
                Ok(()) => notice.set(Some((true, "Préstamo solicitado.".to_string()))),
                Err(_) => notice.set(Some((false, "No se pudo solicitar el préstamo.".to_string()))),
            }
        });
    });
    let on_borrow = session.is_authenticated().then_some(handle_borrow);

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Navbar {}

            main {
                class: "max-w-6xl mx-auto px-6 py-8",
                h1 { class: "text-3xl font-bold text-gray-900 mb-6", "Catálogo" }

                if let Some((ok, message)) = notice() {
                    div {
                        class: if ok {
                            "mb-4 p-3 bg-green-50 border border-green-200 text-green-800 rounded text-sm"
                        } else {
                            "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm"
                        },
                        "{message}"
                    }
                }

                div {
                    class: "flex flex-col sm:flex-row gap-3 mb-8",
                    input {
                        r#type: "search",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                        placeholder: "Buscar por título o autor...",
                        class: "flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500"
                    }
                    select {
                        class: "px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                        value: "{category}",
                        onchange: move |e| category.set(e.value()),
                        option { value: "", "Todas las categorías" }
                        if let Some(Ok(genres)) = categories.read().as_ref() {
                            for genre in genres.iter() {
                                option {
                                    key: "{genre.id}",
                                    value: "{genre.name}",
                                    "{genre.name}"
                                }
                            }
                        }
                    }
                }

                match books.read().as_ref() {
                    None => rsx! {
                        LoadingSpinner {}
                    },
                    Some(Err(_)) => rsx! {
                        div {
                            class: "p-4 bg-orange-50 border border-orange-200 text-orange-800 rounded",
                            "No se pudo cargar el catálogo. Intenta de nuevo más tarde."
                        }
                    },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p {
                            class: "text-gray-500 text-center py-12",
                            "No se encontraron libros."
                        }
                    },
                    Some(Ok(list)) => rsx! {
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                            for book in list.iter() {
                                BookCard { key: "{book.id}", book: book.clone(), on_borrow }
                            }
                        }
                    },
                }
            }
        }
    }
}
