//! HTTP client and response-envelope plumbing
//!
//! Every backend endpoint wraps its payload in `{ success, message, data }`,
//! but the nesting below `data` varies per resource. The typed helpers here
//! normalize that: [`ApiClient`] handles transport, bearer auth and status
//! checking; [`extract_list`] digs a record array out of whichever nesting
//! the endpoint chose.

use reqwest::Method;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::config;

/// Standard response envelope used by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Error type for REST operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("backend rejected the request: {0}")]
    Rejected(String),

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// REST client with a base URL and an optional bearer credential.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach a bearer credential to every request this client sends.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn get_query(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.get(&url).query(params);
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        let response = req.send().await?;
        Self::decode(response).await
    }

    pub async fn post(&self, path: &str, body: &impl Serialize) -> Result<Value, ApiError> {
        self.request(Method::POST, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn put(&self, path: &str, body: &impl Serialize) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn put_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, None).await
    }

    pub async fn patch(&self, path: &str, body: &impl Serialize) -> Result<Value, ApiError> {
        self.request(Method::PATCH, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::DELETE, path, None).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url);

        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        let response = req.send().await?;
        Self::decode(response).await
    }

    async fn decode(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        // Error bodies still carry a useful `message`; decode best-effort.
        let payload: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("request failed")
                .to_string();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(payload)
    }
}

/// Client for browser-side requests against the configured backend.
pub fn browser_client() -> ApiClient {
    ApiClient::new(config::api_url())
}

/// Browser client carrying the session credential, if there is one.
pub fn client_with(token: Option<String>) -> ApiClient {
    match token {
        Some(token) => browser_client().with_token(token),
        None => browser_client(),
    }
}

/// Fail if the envelope carries an explicit `success: false`.
///
/// A missing flag is treated as success since the HTTP status already passed.
pub fn ensure_success(payload: &Value) -> Result<(), ApiError> {
    if payload.get("success").and_then(Value::as_bool) == Some(false) {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("operation failed")
            .to_string();
        return Err(ApiError::Rejected(message));
    }
    Ok(())
}

/// Decode the envelope, require the success flag, and return `data`.
pub fn expect_data<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    let envelope: ApiEnvelope<Value> = serde_json::from_value(payload)?;
    if !envelope.success {
        return Err(ApiError::Rejected(
            envelope.message.unwrap_or_else(|| "operation failed".into()),
        ));
    }
    Ok(serde_json::from_value(
        envelope.data.unwrap_or(Value::Null),
    )?)
}

/// Pull a list of records out of whichever nesting the backend chose.
///
/// Accepted shapes, checked in order: a bare array, `{data: [...]}`,
/// `{items: [...]}`, `{data: {items: [...]}}` (shelves) and
/// `{data: {data: [...]}}` (genres). Records that fail to decode are skipped
/// rather than poisoning the whole list.
pub fn extract_list<T: DeserializeOwned>(payload: &Value) -> Vec<T> {
    let candidates = [
        Some(payload),
        payload.get("data"),
        payload.get("items"),
        payload.get("data").and_then(|d| d.get("items")),
        payload.get("data").and_then(|d| d.get("data")),
    ];

    let Some(array) = candidates
        .into_iter()
        .flatten()
        .find_map(Value::as_array)
    else {
        return Vec::new();
    };

    array
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::debug!(error = %err, "skipping undecodable record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Genre;
    use serde_json::json;

    fn genre(id: &str) -> Value {
        json!({ "id": id, "nombre": format!("genre-{id}") })
    }

    #[test]
    fn extract_list_handles_bare_array() {
        let payload = json!([genre("1"), genre("2")]);
        let genres: Vec<Genre> = extract_list(&payload);
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[0].name, "genre-1");
    }

    #[test]
    fn extract_list_handles_data_wrapper() {
        let payload = json!({ "success": true, "data": [genre("1")] });
        let genres: Vec<Genre> = extract_list(&payload);
        assert_eq!(genres.len(), 1);
    }

    #[test]
    fn extract_list_handles_nested_items() {
        // Shelves endpoint shape
        let payload = json!({ "success": true, "data": { "items": [genre("1"), genre("2")] } });
        let genres: Vec<Genre> = extract_list(&payload);
        assert_eq!(genres.len(), 2);
    }

    #[test]
    fn extract_list_handles_double_nested_data() {
        // Genres endpoint shape
        let payload = json!({ "success": true, "data": { "message": "ok", "data": [genre("1")] } });
        let genres: Vec<Genre> = extract_list(&payload);
        assert_eq!(genres.len(), 1);
    }

    #[test]
    fn extract_list_skips_broken_records() {
        let payload = json!([genre("1"), { "nombre": "missing id" }, genre("3")]);
        let genres: Vec<Genre> = extract_list(&payload);
        assert_eq!(genres.len(), 2);
    }

    #[test]
    fn extract_list_returns_empty_on_unknown_shape() {
        let payload = json!({ "success": true, "data": { "total": 0 } });
        let genres: Vec<Genre> = extract_list(&payload);
        assert!(genres.is_empty());
    }

    #[test]
    fn ensure_success_rejects_explicit_failure() {
        let payload = json!({ "success": false, "message": "nope" });
        let err = ensure_success(&payload).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(m) if m == "nope"));
    }

    #[test]
    fn ensure_success_tolerates_missing_flag() {
        assert!(ensure_success(&json!({ "data": [] })).is_ok());
    }

    #[test]
    fn expect_data_decodes_envelope() {
        let payload = json!({ "success": true, "data": genre("7") });
        let genre: Genre = expect_data(payload).unwrap();
        assert_eq!(genre.id, "7");
    }
}
