//! Admin dashboard: aggregate counters plus shortcuts into each section

use dioxus::prelude::*;

use crate::api::{self, client_with};
use crate::auth::use_session;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::types::AdminStats;

/// `/admin` lands on the dashboard.
#[component]
pub fn AdminHome() -> Element {
    rsx! {
        AdminDashboard {}
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let session = use_session();
    let token = session.token();

    let stats = use_resource(move || {
        let token = token.clone();
        async move {
            let client = client_with(token);
            api::dashboard::stats(&client).await
        }
    });

    let loaded = stats.read().as_ref().map(|result| match result {
        Ok(stats) => (stats.clone(), false),
        // A failed aggregate endpoint should not take the panel down
        Err(_) => (AdminStats::default(), true),
    });

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Panel de administración" }

            match loaded {
                None => rsx! {
                    LoadingSpinner {}
                },
                Some((stats, degraded)) => rsx! {
                    if degraded {
                        div {
                            class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                            "No se pudieron cargar las estadísticas."
                        }
                    }
                    div {
                        class: "grid grid-cols-2 lg:grid-cols-4 gap-4 mb-10",
                        StatCard { label: "Libros", value: stats.total_books, icon: "\u{1F4DA}" }
                        StatCard { label: "Usuarios", value: stats.total_users, icon: "\u{1F465}" }
                        StatCard { label: "Préstamos activos", value: stats.active_loans, icon: "\u{1F4D6}" }
                        StatCard { label: "Reseñas", value: stats.total_reviews, icon: "\u{2B50}" }
                    }
                },
            }

            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Gestión" }
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                SectionLink { to: Route::AdminBooks {}, label: "Libros", description: "Alta, edición y baja del catálogo" }
                SectionLink { to: Route::AdminGenres {}, label: "Géneros", description: "Categorías del catálogo" }
                SectionLink { to: Route::AdminShelves {}, label: "Estanterías", description: "Ubicaciones físicas" }
                SectionLink { to: Route::AdminLoans {}, label: "Préstamos", description: "Circulación y devoluciones" }
                SectionLink { to: Route::AdminReviews {}, label: "Reseñas", description: "Moderación de reseñas" }
                SectionLink { to: Route::AdminUsers {}, label: "Usuarios", description: "Cuentas y permisos" }
                SectionLink { to: Route::AdminActivity {}, label: "Actividad", description: "Registro de acciones" }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: i64, icon: &'static str) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-5",
            div { class: "text-2xl mb-1", "{icon}" }
            p { class: "text-3xl font-bold text-gray-900", "{value}" }
            p { class: "text-sm text-gray-500", "{label}" }
        }
    }
}

#[component]
fn SectionLink(to: Route, label: &'static str, description: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-white rounded-lg shadow-sm border border-gray-200 p-5 hover:border-indigo-300 hover:shadow transition",
            h3 { class: "font-semibold text-gray-900 mb-1", "{label}" }
            p { class: "text-sm text-gray-500", "{description}" }
        }
    }
}
