//! User-activity log endpoints (`/actividad-usuarios`), admin-tier only

use crate::types::{Activity, ActivityForm};

use super::client::{ensure_success, extract_list, ApiClient, ApiError};

pub async fn list(client: &ApiClient) -> Result<Vec<Activity>, ApiError> {
    let payload = client.get("/actividad-usuarios").await?;
    Ok(extract_list(&payload))
}

/// Record an event against a user.
pub async fn record(
    client: &ApiClient,
    user_id: &str,
    form: &ActivityForm,
) -> Result<(), ApiError> {
    let payload = client
        .post(&format!("/actividad-usuarios/{user_id}"), form)
        .await?;
    ensure_success(&payload)
}

/// Edit a previously recorded event.
pub async fn update_event(
    client: &ApiClient,
    user_id: &str,
    event_id: &str,
    form: &ActivityForm,
) -> Result<(), ApiError> {
    let payload = client
        .put(
            &format!("/actividad-usuarios/usuario/{user_id}/evento/{event_id}"),
            form,
        )
        .await?;
    ensure_success(&payload)
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let payload = client.delete(&format!("/actividad-usuarios/{id}")).await?;
    ensure_success(&payload)
}
