//! Catalog book card

use dioxus::prelude::*;

use crate::routes::Route;
use crate::types::Book;

#[derive(Props, Clone, PartialEq)]
pub struct BookCardProps {
    pub book: Book,
    /// Borrow action for signed-in visitors. When absent the card shows a
    /// login prompt instead, as the catalog is also browsable anonymously.
    #[props(!optional, default)]
    pub on_borrow: Option<EventHandler<String>>,
}

#[component]
pub fn BookCard(props: BookCardProps) -> Element {
    let book = &props.book;
    let borrowable = book.available && book.stock_available > 0;
    let book_id = book.id.clone();
    let on_borrow = props.on_borrow;

    let (badge_label, badge_class) = if borrowable {
        ("Disponible", "bg-green-100 text-green-700")
    } else {
        ("No disponible", "bg-red-100 text-red-700")
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 flex flex-col",
            div {
                class: "flex items-start justify-between mb-2",
                h3 { class: "text-base font-semibold text-gray-900", "{book.title}" }
                span {
                    class: "px-2 py-0.5 rounded text-xs font-medium {badge_class}",
                    "{badge_label}"
                }
            }
            p { class: "text-sm text-gray-600", "{book.author}" }
            if !book.category.is_empty() {
                span {
                    class: "mt-2 self-start px-2 py-0.5 rounded text-xs bg-indigo-50 text-indigo-700",
                    "{book.category}"
                }
            }
            if !book.description.is_empty() {
                p { class: "mt-2 text-sm text-gray-500 line-clamp-3", "{book.description}" }
            }
            if let Some(rating) = book.rating {
                p { class: "mt-auto pt-2 text-sm text-amber-600", "\u{2605} {rating:.1}" }
            }
            div {
                class: "mt-3 pt-3 border-t border-gray-100",
                match on_borrow {
                    Some(on_borrow) => rsx! {
                        button {
                            class: if borrowable {
                                "w-full px-4 py-2 rounded-md text-sm font-medium bg-indigo-600 text-white hover:bg-indigo-700"
                            } else {
                                "w-full px-4 py-2 rounded-md text-sm font-medium bg-gray-200 text-gray-500 cursor-not-allowed"
                            },
                            disabled: !borrowable,
                            onclick: move |_| on_borrow.call(book_id.clone()),
                            if borrowable { "Solicitar préstamo" } else { "No disponible" }
                        }
                    },
                    None => rsx! {
                        Link {
                            to: Route::Login {},
                            class: "block w-full text-center px-4 py-2 rounded-md text-sm font-medium bg-indigo-600 text-white hover:bg-indigo-700",
                            "Inicia sesión para solicitar"
                        }
                    },
                }
            }
        }
    }
}
