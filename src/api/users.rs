//! User administration endpoints (`/usuarios`), admin-tier only

use crate::types::{User, UserForm};

use super::client::{ensure_success, extract_list, ApiClient, ApiError};

pub async fn list(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    let payload = client.get("/usuarios").await?;
    Ok(extract_list(&payload))
}

pub async fn create(client: &ApiClient, form: &UserForm) -> Result<(), ApiError> {
    let payload = client.post("/usuarios", form).await?;
    ensure_success(&payload)
}

pub async fn update(client: &ApiClient, id: &str, form: &UserForm) -> Result<(), ApiError> {
    let payload = client.put(&format!("/usuarios/{id}"), form).await?;
    ensure_success(&payload)
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let payload = client.delete(&format!("/usuarios/{id}")).await?;
    ensure_success(&payload)
}

/// Enable/disable an account.
pub async fn toggle_status(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let payload = client
        .put_empty(&format!("/usuarios/{id}/toggle-status"))
        .await?;
    ensure_success(&payload)
}
