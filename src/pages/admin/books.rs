//! Book administration

use dioxus::prelude::*;

use crate::api::{self, client_with};
use crate::auth::use_session;
use crate::components::{ConfirmDialog, LoadingSpinner};
use crate::types::{Book, BookForm};

#[component]
pub fn AdminBooks() -> Element {
    let session = use_session();
    let token = session.token();

    let list_token = token.clone();
    let mut books = use_resource(move || {
        let token = list_token.clone();
        async move {
            let client = client_with(token);
            api::books::list(&client).await
        }
    });

    let genres_token = token.clone();
    let genres = use_resource(move || {
        let token = genres_token.clone();
        async move {
            let client = client_with(token);
            api::genres::list(&client).await
        }
    });

    let shelves_token = token.clone();
    let shelves = use_resource(move || {
        let token = shelves_token.clone();
        async move {
            let client = client_with(token);
            api::shelves::list(&client).await
        }
    });

    let mut title = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut isbn = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut published_at = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut stock = use_signal(String::new);
    let mut shelf_id = use_signal(String::new);
    let mut genre_id = use_signal(String::new);
    let mut edit_id = use_signal(|| None::<String>);
    let mut show_form = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut pending_delete = use_signal(|| None::<String>);

    let submit_token = token.clone();
    let handle_submit = move |_| {
        let form = BookForm {
            title: title().trim().to_string(),
            author: author().trim().to_string(),
            isbn: isbn().trim().to_string(),
            category: category().trim().to_string(),
            location: location().trim().to_string(),
            published_at: published_at().trim().to_string(),
            description: description().trim().to_string(),
            stock: stock().trim().parse().unwrap_or(0),
            shelf_id: Some(shelf_id()).filter(|s| !s.is_empty()),
            genre_id: Some(genre_id()).filter(|s| !s.is_empty()),
        };
        if form.title.is_empty() || form.author.is_empty() {
            error.set(Some("Título y autor son obligatorios".to_string()));
            return;
        }

        let token = submit_token.clone();
        let editing = edit_id();
        spawn(async move {
            let client = client_with(token);
            let result = match editing.as_deref() {
                Some(id) => api::books::update(&client, id, &form).await,
                None => api::books::create(&client, &form).await,
            };
            match result {
                Ok(()) => {
                    error.set(None);
                    title.set(String::new());
                    author.set(String::new());
                    isbn.set(String::new());
                    category.set(String::new());
                    location.set(String::new());
                    published_at.set(String::new());
                    description.set(String::new());
                    stock.set(String::new());
                    shelf_id.set(String::new());
                    genre_id.set(String::new());
                    edit_id.set(None);
                    show_form.set(false);
                    books.restart();
                }
                Err(_) => error.set(Some("No se pudo guardar el libro.".to_string())),
            }
        });
    };

    let delete_token = token.clone();
    let handle_delete = move |_| {
        let Some(id) = pending_delete() else { return };
        let token = delete_token.clone();
        spawn(async move {
            let client = client_with(token);
            match api::books::remove(&client, &id).await {
                Ok(()) => {
                    error.set(None);
                    books.restart();
                }
                Err(_) => error.set(Some("No se pudo eliminar el libro.".to_string())),
            }
            pending_delete.set(None);
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Libros" }
                button {
                    class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                    onclick: move |_| {
                        if show_form() {
                            edit_id.set(None);
                        }
                        show_form.toggle();
                    },
                    if show_form() { "Cerrar" } else { "Nuevo libro" }
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
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-5 mb-6 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                    onsubmit: handle_submit,
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Título" }
                        input {
                            r#type: "text",
                            value: "{title}",
                            oninput: move |e| title.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Autor" }
                        input {
                            r#type: "text",
                            value: "{author}",
                            oninput: move |e| author.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "ISBN" }
                        input {
                            r#type: "text",
                            value: "{isbn}",
                            oninput: move |e| isbn.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Categoría" }
                        input {
                            r#type: "text",
                            value: "{category}",
                            oninput: move |e| category.set(e.value()),
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
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Fecha de publicación" }
                        input {
                            r#type: "date",
                            value: "{published_at}",
                            oninput: move |e| published_at.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Stock" }
                        input {
                            r#type: "number",
                            value: "{stock}",
                            oninput: move |e| stock.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Género" }
                        select {
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                            value: "{genre_id}",
                            onchange: move |e| genre_id.set(e.value()),
                            option { value: "", "Sin género" }
                            if let Some(Ok(list)) = genres.read().as_ref() {
                                for genre in list.iter() {
                                    option { key: "{genre.id}", value: "{genre.id}", "{genre.name}" }
                                }
                            }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Estantería" }
                        select {
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                            value: "{shelf_id}",
                            onchange: move |e| shelf_id.set(e.value()),
                            option { value: "", "Sin estantería" }
                            if let Some(Ok(list)) = shelves.read().as_ref() {
                                for shelf in list.iter() {
                                    option { key: "{shelf.id}", value: "{shelf.id}", "{shelf.code}" }
                                }
                            }
                        }
                    }
                    div {
                        class: "sm:col-span-2 lg:col-span-3",
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Descripción" }
                        textarea {
                            value: "{description}",
                            oninput: move |e| description.set(e.value()),
                            rows: "3",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        class: "sm:col-span-2 lg:col-span-3",
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                            if edit_id().is_some() { "Guardar cambios" } else { "Crear libro" }
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
                        "No se pudieron cargar los libros."
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-gray-500 text-center py-12", "No hay libros registrados." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-x-auto",
                        table {
                            class: "min-w-full text-sm",
                            thead {
                                tr {
                                    class: "border-b border-gray-200 text-left text-gray-500",
                                    th { class: "px-4 py-3 font-medium", "Título" }
                                    th { class: "px-4 py-3 font-medium", "Autor" }
                                    th { class: "px-4 py-3 font-medium", "Categoría" }
                                    th { class: "px-4 py-3 font-medium", "Stock" }
                                    th { class: "px-4 py-3 font-medium", "Estado" }
                                    th { class: "px-4 py-3" }
                                }
                            }
                            tbody {
                                for book in list.iter() {
                                    BookRow {
                                        key: "{book.id}",
                                        book: book.clone(),
                                        on_edit: move |book: Book| {
                                            title.set(book.title);
                                            author.set(book.author);
                                            isbn.set(book.isbn);
                                            category.set(book.category);
                                            location.set(book.location);
                                            published_at.set(book.published_at);
                                            description.set(book.description);
                                            stock.set(book.stock.to_string());
                                            shelf_id.set(book.shelf_id.unwrap_or_default());
                                            genre_id.set(book.genre_id.unwrap_or_default());
                                            edit_id.set(Some(book.id));
                                            show_form.set(true);
                                        },
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
                    title: "Eliminar libro",
                    message: "El libro se quitará del catálogo. Esta acción no se puede deshacer.",
                    on_confirm: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BookRowProps {
    book: Book,
    on_edit: EventHandler<Book>,
    on_delete: EventHandler<String>,
}

#[component]
fn BookRow(props: BookRowProps) -> Element {
    let BookRowProps {
        book,
        on_edit,
        on_delete,
    } = props;
    let edit_book = book.clone();
    let delete_id = book.id.clone();

    let (badge_label, badge_class) = if book.available && book.stock_available > 0 {
        ("Disponible", "bg-green-100 text-green-700")
    } else {
        ("Agotado", "bg-red-100 text-red-700")
    };

    rsx! {
        tr {
            class: "border-b border-gray-100 last:border-0",
            td { class: "px-4 py-3 font-medium text-gray-900", "{book.title}" }
            td { class: "px-4 py-3 text-gray-600", "{book.author}" }
            td { class: "px-4 py-3 text-gray-600", "{book.category}" }
            td { class: "px-4 py-3 text-gray-600", "{book.stock_available}/{book.stock}" }
            td {
                class: "px-4 py-3",
                span {
                    class: "px-2 py-0.5 rounded text-xs font-medium {badge_class}",
                    "{badge_label}"
                }
            }
            td {
                class: "px-4 py-3 text-right whitespace-nowrap",
                button {
                    class: "px-3 py-1 text-sm bg-gray-100 text-gray-700 rounded hover:bg-gray-200 mr-2",
                    onclick: move |_| on_edit.call(edit_book.clone()),
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
