//! Loan administration: full circulation list with return/renew actions

use chrono::{Duration, Utc};
use dioxus::prelude::*;

use crate::api::{self, client_with};
use crate::auth::use_session;
use crate::components::LoadingSpinner;
use crate::types::{Loan, LoanStatus, RenewLoanForm, ReturnLoanForm};

#[component]
pub fn AdminLoans() -> Element {
    let session = use_session();
    let token = session.token();

    let list_token = token.clone();
    let mut loans = use_resource(move || {
        let token = list_token.clone();
        async move {
            let client = client_with(token);
            api::loans::list_all(&client).await
        }
    });

    let mut error = use_signal(|| None::<String>);

    let return_token = token.clone();
    let handle_return = use_callback(move |loan_id: String| {
        let token = return_token.clone();
        spawn(async move {
            let client = client_with(token);
            let form = ReturnLoanForm {
                returned_at: Utc::now().format("%Y-%m-%d").to_string(),
                notes: None,
            };
            match api::loans::return_loan(&client, &loan_id, &form).await {
                Ok(()) => {
                    error.set(None);
                    loans.restart();
                }
                Err(_) => error.set(Some("No se pudo registrar la devolución.".to_string())),
            }
        });
    });

    let renew_token = token.clone();
    let handle_renew = use_callback(move |loan_id: String| {
        let token = renew_token.clone();
        spawn(async move {
            let client = client_with(token);
            let form = RenewLoanForm {
                due_at: (Utc::now() + Duration::days(14)).format("%Y-%m-%d").to_string(),
                notes: None,
            };
            match api::loans::renew(&client, &loan_id, &form).await {
                Ok(()) => {
                    error.set(None);
                    loans.restart();
                }
                Err(_) => error.set(Some("No se pudo renovar el préstamo.".to_string())),
            }
        });
    });

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Préstamos" }

            if let Some(err) = error() {
                div {
                    class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                    "{err}"
                }
            }

            match loans.read().as_ref() {
                None => rsx! {
                    LoadingSpinner {}
                },
                Some(Err(_)) => rsx! {
                    div {
                        class: "p-4 bg-orange-50 border border-orange-200 text-orange-800 rounded",
                        "No se pudieron cargar los préstamos."
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-gray-500 text-center py-12", "No hay préstamos registrados." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-x-auto",
                        table {
                            class: "min-w-full text-sm",
                            thead {
                                tr {
                                    class: "border-b border-gray-200 text-left text-gray-500",
                                    th { class: "px-4 py-3 font-medium", "Libro" }
                                    th { class: "px-4 py-3 font-medium", "Usuario" }
                                    th { class: "px-4 py-3 font-medium", "Prestado" }
                                    th { class: "px-4 py-3 font-medium", "Vence" }
                                    th { class: "px-4 py-3 font-medium", "Estado" }
                                    th { class: "px-4 py-3" }
                                }
                            }
                            tbody {
                                for loan in list.iter() {
                                    AdminLoanRow {
                                        key: "{loan.id}",
                                        loan: loan.clone(),
                                        on_return: handle_return,
                                        on_renew: handle_renew,
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AdminLoanRowProps {
    loan: Loan,
    on_return: EventHandler<String>,
    on_renew: EventHandler<String>,
}

#[component]
fn AdminLoanRow(props: AdminLoanRowProps) -> Element {
    let AdminLoanRowProps {
        loan,
        on_return,
        on_renew,
    } = props;

    let book_title = loan
        .book
        .as_ref()
        .map(|book| book.title.clone())
        .unwrap_or_else(|| loan.book_id.clone());
    let user_name = loan
        .user
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_else(|| loan.user_id.clone());

    let badge_class = match loan.status {
        LoanStatus::Active => "bg-blue-100 text-blue-700",
        LoanStatus::Returned => "bg-green-100 text-green-700",
        LoanStatus::Overdue => "bg-red-100 text-red-700",
    };
    let actionable = matches!(loan.status, LoanStatus::Active | LoanStatus::Overdue);
    let return_id = loan.id.clone();
    let renew_id = loan.id.clone();

    rsx! {
        tr {
            class: "border-b border-gray-100 last:border-0",
            td { class: "px-4 py-3 font-medium text-gray-900", "{book_title}" }
            td { class: "px-4 py-3 text-gray-600", "{user_name}" }
            td { class: "px-4 py-3 text-gray-600", "{loan.loaned_at}" }
            td { class: "px-4 py-3 text-gray-600", "{loan.due_at}" }
            td {
                class: "px-4 py-3",
                span {
                    class: "px-2 py-0.5 rounded text-xs font-medium {badge_class}",
                    {loan.status.label()}
                }
            }
            td {
                class: "px-4 py-3 text-right whitespace-nowrap",
                if actionable {
                    button {
                        class: "px-3 py-1 text-sm bg-indigo-600 text-white rounded hover:bg-indigo-700 mr-2",
                        onclick: move |_| on_return.call(return_id.clone()),
                        "Devolver"
                    }
                    button {
                        class: "px-3 py-1 text-sm bg-white text-indigo-700 border border-indigo-200 rounded hover:bg-indigo-50",
                        onclick: move |_| on_renew.call(renew_id.clone()),
                        "Renovar"
                    }
                }
            }
        }
    }
}
