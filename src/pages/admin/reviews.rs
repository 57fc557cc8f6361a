//! Review moderation

use dioxus::prelude::*;

use crate::api::{self, client_with};
use crate::auth::use_session;
use crate::components::{ConfirmDialog, LoadingSpinner};
use crate::types::{Review, ReviewForm};

#[component]
pub fn AdminReviews() -> Element {
    let session = use_session();
    let token = session.token();

    let list_token = token.clone();
    let mut reviews = use_resource(move || {
        let token = list_token.clone();
        async move {
            let client = client_with(token);
            api::reviews::list(&client).await
        }
    });

    let books_token = token.clone();
    let books = use_resource(move || {
        let token = books_token.clone();
        async move {
            let client = client_with(token);
            api::books::list(&client).await
        }
    });

    let mut book_id = use_signal(String::new);
    let mut rating = use_signal(|| "5".to_string());
    let mut comment = use_signal(String::new);
    let mut show_form = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut pending_delete = use_signal(|| None::<String>);

    let submit_token = token.clone();
    let handle_submit = move |_| {
        let form = ReviewForm {
            book_id: book_id(),
            rating: rating().parse().unwrap_or(5),
            comment: comment().trim().to_string(),
        };
        if form.book_id.is_empty() {
            error.set(Some("Selecciona un libro".to_string()));
            return;
        }

        let token = submit_token.clone();
        spawn(async move {
            let client = client_with(token);
            match api::reviews::create(&client, &form).await {
                Ok(()) => {
                    error.set(None);
                    book_id.set(String::new());
                    rating.set("5".to_string());
                    comment.set(String::new());
                    show_form.set(false);
                    reviews.restart();
                }
                Err(_) => error.set(Some("No se pudo guardar la reseña.".to_string())),
            }
        });
    };

    let approve_token = token.clone();
    let handle_approve = use_callback(move |(id, approved): (String, bool)| {
        let token = approve_token.clone();
        spawn(async move {
            let client = client_with(token);
            match api::reviews::set_approved(&client, &id, approved).await {
                Ok(()) => {
                    error.set(None);
                    reviews.restart();
                }
                Err(_) => error.set(Some("No se pudo actualizar la reseña.".to_string())),
            }
        });
    });

    let delete_token = token.clone();
    let handle_delete = move |_| {
        let Some(id) = pending_delete() else { return };
        let token = delete_token.clone();
        spawn(async move {
            let client = client_with(token);
            match api::reviews::remove(&client, &id).await {
                Ok(()) => {
                    error.set(None);
                    reviews.restart();
                }
                Err(_) => error.set(Some("No se pudo eliminar la reseña.".to_string())),
            }
            pending_delete.set(None);
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Reseñas" }
                button {
                    class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                    onclick: move |_| show_form.toggle(),
                    if show_form() { "Cerrar" } else { "Nueva reseña" }
                }
            }

            if show_form() {
                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-5 mb-6 grid grid-cols-1 sm:grid-cols-3 gap-4",
                    onsubmit: handle_submit,
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Libro" }
                        select {
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                            value: "{book_id}",
                            onchange: move |e| book_id.set(e.value()),
                            option { value: "", "Selecciona un libro" }
                            if let Some(Ok(list)) = books.read().as_ref() {
                                for book in list.iter() {
                                    option { key: "{book.id}", value: "{book.id}", "{book.title}" }
                                }
                            }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Calificación" }
                        select {
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                            value: "{rating}",
                            onchange: move |e| rating.set(e.value()),
                            option { value: "5", "5 \u{2605}" }
                            option { value: "4", "4 \u{2605}" }
                            option { value: "3", "3 \u{2605}" }
                            option { value: "2", "2 \u{2605}" }
                            option { value: "1", "1 \u{2605}" }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Comentario" }
                        input {
                            r#type: "text",
                            value: "{comment}",
                            oninput: move |e| comment.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md"
                        }
                    }
                    div {
                        class: "sm:col-span-3",
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-indigo-600 text-white rounded-md text-sm font-medium hover:bg-indigo-700",
                            "Agregar reseña"
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

            match reviews.read().as_ref() {
                None => rsx! {
                    LoadingSpinner {}
                },
                Some(Err(_)) => rsx! {
                    div {
                        class: "p-4 bg-orange-50 border border-orange-200 text-orange-800 rounded",
                        "No se pudieron cargar las reseñas."
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-gray-500 text-center py-12", "No hay reseñas registradas." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "space-y-3",
                        for review in list.iter() {
                            ReviewCard {
                                key: "{review.id}",
                                review: review.clone(),
                                on_approve: handle_approve,
                                on_delete: move |id: String| pending_delete.set(Some(id)),
                            }
                        }
                    }
                },
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    title: "Eliminar reseña",
                    message: "Esta acción no se puede deshacer.",
                    on_confirm: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ReviewCardProps {
    review: Review,
    on_approve: EventHandler<(String, bool)>,
    on_delete: EventHandler<String>,
}

#[component]
fn ReviewCard(props: ReviewCardProps) -> Element {
    let ReviewCardProps {
        review,
        on_approve,
        on_delete,
    } = props;

    let book_title = review
        .book
        .as_ref()
        .map(|book| book.title.clone())
        .unwrap_or_else(|| review.book_id.clone());
    let user_name = review
        .user
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_else(|| review.user_id.clone());

    let stars = "\u{2605}".repeat(review.rating.clamp(0, 5) as usize);
    let approve_id = review.id.clone();
    let delete_id = review.id.clone();
    let approved = review.approved;

    let (badge_label, badge_class) = if approved {
        ("Aprobada", "bg-green-100 text-green-700")
    } else {
        ("Pendiente", "bg-yellow-100 text-yellow-700")
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",
            div {
                class: "flex items-start justify-between mb-2",
                div {
                    h3 { class: "font-medium text-gray-900", "{book_title}" }
                    p { class: "text-sm text-gray-500", "{user_name} · {review.reviewed_at}" }
                }
                div {
                    class: "flex items-center gap-2",
                    span { class: "text-amber-500 text-sm", "{stars}" }
                    span {
                        class: "px-2 py-0.5 rounded text-xs font-medium {badge_class}",
                        "{badge_label}"
                    }
                }
            }
            if !review.comment.is_empty() {
                p { class: "text-sm text-gray-600 mb-3", "{review.comment}" }
            }
            div {
                class: "flex gap-2",
                button {
                    class: "px-3 py-1 text-sm bg-gray-100 text-gray-700 rounded hover:bg-gray-200",
                    onclick: move |_| on_approve.call((approve_id.clone(), !approved)),
                    if approved { "Retirar aprobación" } else { "Aprobar" }
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
