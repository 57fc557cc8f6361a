//! Auth endpoints: profile restore, login, registration
//!
//! These return the raw payload; shape normalization lives in
//! `auth::normalize` because the backend varies where it puts the token and
//! the user record.

use serde_json::Value;

use crate::types::{LoginCredentials, RegisterData};

use super::client::{ApiClient, ApiError};

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /auth/profile` with the persisted credential as bearer token.
    pub async fn profile(&self, token: &str) -> Result<Value, ApiError> {
        let payload = self
            .client
            .clone()
            .with_token(token)
            .get("/auth/profile")
            .await?;
        require_success(&payload)?;
        Ok(payload)
    }

    /// `POST /auth/login`.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Value, ApiError> {
        let payload = self.client.post("/auth/login", credentials).await?;
        require_success(&payload)?;
        Ok(payload)
    }

    /// `POST /auth/register`.
    pub async fn register(&self, data: &RegisterData) -> Result<Value, ApiError> {
        let payload = self.client.post("/auth/register", data).await?;
        require_success(&payload)?;
        Ok(payload)
    }
}

/// Auth payloads must carry an explicit `success: true`; a missing flag is a
/// failure here, unlike the resource endpoints.
fn require_success(payload: &Value) -> Result<(), ApiError> {
    if payload.get("success").and_then(Value::as_bool) != Some(true) {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("authentication failed")
            .to_string();
        return Err(ApiError::Rejected(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_success_flag_is_a_failure() {
        assert!(require_success(&json!({ "data": {} })).is_err());
        assert!(require_success(&json!({ "success": false, "message": "bad" })).is_err());
        assert!(require_success(&json!({ "success": true })).is_ok());
    }
}
