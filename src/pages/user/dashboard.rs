//! User dashboard: profile summary plus the user's own loans

use chrono::{Duration, Utc};
use dioxus::prelude::*;

use crate::api::{self, client_with};
use crate::auth::use_session;
use crate::components::{LoadingSpinner, Navbar, Protected};
use crate::types::{Loan, LoanStatus, RenewLoanForm, ReturnLoanForm};

/// `/user` alias kept for bookmarked links.
#[component]
pub fn UserHome() -> Element {
    rsx! {
        UserDashboard {}
    }
}

#[component]
pub fn UserDashboard() -> Element {
    rsx! {
        Protected {
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let session = use_session();
    let token = session.token();

    let loans_token = token.clone();
    let mut loans = use_resource(move || {
        let token = loans_token.clone();
        async move {
            let client = client_with(token);
            api::loans::my_loans(&client).await
        }
    });

    let mut action_error = use_signal(|| None::<String>);

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
                    action_error.set(None);
                    loans.restart();
                }
                Err(_) => action_error.set(Some("No se pudo registrar la devolución.".to_string())),
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
                    action_error.set(None);
                    loans.restart();
                }
                Err(_) => action_error.set(Some("No se pudo renovar el préstamo.".to_string())),
            }
        });
    });

    let identity = session.current();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Navbar {}

            main {
                class: "max-w-5xl mx-auto px-6 py-8",

                if let Some(identity) = identity {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-8 flex items-center gap-4",
                        div {
                            class: "w-14 h-14 rounded-full bg-indigo-100 text-indigo-700 flex items-center justify-center text-xl font-bold",
                            {identity.display_name.chars().next().unwrap_or('?').to_string()}
                        }
                        div {
                            h1 { class: "text-xl font-semibold text-gray-900", "{identity.display_name}" }
                            p { class: "text-sm text-gray-500", "{identity.email}" }
                            span {
                                class: "inline-block mt-1 px-2 py-0.5 rounded text-xs bg-indigo-50 text-indigo-700",
                                "{identity.role.label()}"
                            }
                        }
                    }
                }

                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Mis préstamos" }

                if let Some(err) = action_error() {
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
                            "No se pudieron cargar tus préstamos."
                        }
                    },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p {
                            class: "text-gray-500 text-center py-12",
                            "No tienes préstamos registrados."
                        }
                    },
                    Some(Ok(list)) => rsx! {
                        div {
                            class: "space-y-3",
                            for loan in list.iter() {
                                LoanRow {
                                    key: "{loan.id}",
                                    loan: loan.clone(),
                                    on_return: handle_return,
                                    on_renew: handle_renew,
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LoanRowProps {
    loan: Loan,
    on_return: EventHandler<String>,
    on_renew: EventHandler<String>,
}

#[component]
fn LoanRow(props: LoanRowProps) -> Element {
    let LoanRowProps {
        loan,
        on_return,
        on_renew,
    } = props;
    let title = loan
        .book
        .as_ref()
        .map(|book| book.title.clone())
        .unwrap_or_else(|| loan.book_id.clone());

    let badge_class = match loan.status {
        LoanStatus::Active => "bg-blue-100 text-blue-700",
        LoanStatus::Returned => "bg-green-100 text-green-700",
        LoanStatus::Overdue => "bg-red-100 text-red-700",
    };
    let actionable = matches!(loan.status, LoanStatus::Active | LoanStatus::Overdue);
    let loan_id = loan.id.clone();
    let renew_id = loan.id.clone();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 flex items-center justify-between gap-4",
            div {
                h3 { class: "font-medium text-gray-900", "{title}" }
                p {
                    class: "text-sm text-gray-500",
                    "Prestado: {loan.loaned_at} · Vence: {loan.due_at}"
                }
                if loan.renewals > 0 {
                    p { class: "text-xs text-gray-400", "Renovaciones: {loan.renewals}" }
                }
            }
            div {
                class: "flex items-center gap-2",
                span {
                    class: "px-2 py-0.5 rounded text-xs font-medium {badge_class}",
                    {loan.status.label()}
                }
                if actionable {
                    button {
                        class: "px-3 py-1 text-sm bg-indigo-600 text-white rounded hover:bg-indigo-700",
                        onclick: move |_| on_return.call(loan_id.clone()),
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
