//! Genre endpoints (`/generos`)
//!
//! The list payload arrives double-nested (`data.data`); `extract_list`
//! absorbs that.

use crate::types::{Genre, GenreForm};

use super::client::{ensure_success, extract_list, ApiClient, ApiError};

pub async fn list(client: &ApiClient) -> Result<Vec<Genre>, ApiError> {
    let payload = client.get("/generos").await?;
    Ok(extract_list(&payload))
}

pub async fn create(client: &ApiClient, form: &GenreForm) -> Result<(), ApiError> {
    let payload = client.post("/generos", form).await?;
    ensure_success(&payload)
}

pub async fn update(client: &ApiClient, id: &str, form: &GenreForm) -> Result<(), ApiError> {
    let payload = client.put(&format!("/generos/{id}"), form).await?;
    ensure_success(&payload)
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let payload = client.delete(&format!("/generos/{id}")).await?;
    ensure_success(&payload)
}
