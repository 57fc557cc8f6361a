//! Review endpoints (`/resenas`)

use serde_json::json;

use crate::types::{Review, ReviewForm};

use super::client::{ensure_success, extract_list, ApiClient, ApiError};

pub async fn list(client: &ApiClient) -> Result<Vec<Review>, ApiError> {
    let payload = client.get("/resenas").await?;
    Ok(extract_list(&payload))
}

pub async fn create(client: &ApiClient, form: &ReviewForm) -> Result<(), ApiError> {
    let payload = client.post("/resenas", form).await?;
    ensure_success(&payload)
}

/// Moderation: flip the `aprobada` flag.
pub async fn set_approved(client: &ApiClient, id: &str, approved: bool) -> Result<(), ApiError> {
    let payload = client
        .put(&format!("/resenas/{id}"), &json!({ "aprobada": approved }))
        .await?;
    ensure_success(&payload)
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let payload = client.delete(&format!("/resenas/{id}")).await?;
    ensure_success(&payload)
}
