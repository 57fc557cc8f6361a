//! Shelf endpoints (`/estanterias`); list payload nests under `data.items`

use crate::types::{Shelf, ShelfForm};

use super::client::{ensure_success, extract_list, ApiClient, ApiError};

pub async fn list(client: &ApiClient) -> Result<Vec<Shelf>, ApiError> {
    let payload = client.get("/estanterias").await?;
    Ok(extract_list(&payload))
}

pub async fn create(client: &ApiClient, form: &ShelfForm) -> Result<(), ApiError> {
    let payload = client.post("/estanterias", form).await?;
    ensure_success(&payload)
}

pub async fn update(client: &ApiClient, id: &str, form: &ShelfForm) -> Result<(), ApiError> {
    let payload = client.put(&format!("/estanterias/{id}"), form).await?;
    ensure_success(&payload)
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let payload = client.delete(&format!("/estanterias/{id}")).await?;
    ensure_success(&payload)
}
