//! Canonical identity mapping for unstable auth payloads
//!
//! The backend has been observed to put the token at `data.access_token`,
//! `access_token` or `token`, and the user record at `data`, `user` or the
//! top level. Role may arrive as `role`, as `tipo`, or not at all. All of
//! that is absorbed here, in one place, instead of at every call site.

use serde_json::Value;

use crate::types::{Identity, Role};

/// Map a login/register response into an [`Identity`].
///
/// Returns `None` when no token can be found; the session store treats that
/// as a failed operation.
pub fn normalize_auth_payload(payload: &Value) -> Option<Identity> {
    let token = payload
        .pointer("/data/access_token")
        .or_else(|| payload.get("access_token"))
        .or_else(|| payload.get("token"))
        .and_then(Value::as_str)?
        .to_string();

    let record = user_record(payload);
    Some(build_identity(record, token))
}

/// Map a `GET /auth/profile` response into an [`Identity`], re-attaching the
/// credential the profile was fetched with.
pub fn normalize_profile_payload(payload: &Value, token: &str) -> Option<Identity> {
    let record = payload.get("data").filter(|d| d.is_object())?;
    // A profile without an email is useless for role classification
    record.get("email").and_then(Value::as_str)?;
    Some(build_identity(record, token.to_string()))
}

/// Pick the object that actually carries the user fields.
fn user_record(payload: &Value) -> &Value {
    payload
        .get("data")
        .filter(|d| d.is_object())
        .or_else(|| payload.get("user").filter(|u| u.is_object()))
        .unwrap_or(payload)
}

fn build_identity(record: &Value, token: String) -> Identity {
    let email = field_str(record, "email").unwrap_or_default();
    let role = resolve_role(record, &email);
    let display_name = field_str(record, "nombre")
        .or_else(|| field_str(record, "name"))
        .or_else(|| field_str(record, "username"))
        .unwrap_or_else(|| email.clone());

    Identity {
        id: id_string(record),
        display_name,
        email,
        role,
        avatar: field_str(record, "avatar"),
        credential: token,
    }
}

/// Fallback chain: explicit `role` field, then `tipo`, then an email
/// heuristic, then the default role.
fn resolve_role(record: &Value, email: &str) -> Role {
    if let Some(role) = field_str(record, "role") {
        return Role::parse(&role);
    }
    if let Some(tipo) = field_str(record, "tipo") {
        return Role::parse(&tipo);
    }
    if email == "admin2@bibliotec.com" || email.contains("admin") {
        return Role::Admin;
    }
    Role::Estudiante
}

fn field_str(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Ids arrive as strings or numbers depending on the endpoint.
fn id_string(record: &Value) -> String {
    match record.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_token_under_data() {
        let identity = normalize_auth_payload(&json!({
            "success": true,
            "data": {
                "id": 7,
                "email": "maria@uni.edu",
                "role": "profesor",
                "access_token": "abc"
            }
        }))
        .unwrap();
        assert_eq!(identity.credential, "abc");
        assert_eq!(identity.id, "7");
        assert_eq!(identity.role, Role::Profesor);
        // No name fields: falls back to the email
        assert_eq!(identity.display_name, "maria@uni.edu");
    }

    #[test]
    fn login_token_at_top_level() {
        let identity = normalize_auth_payload(&json!({
            "success": true,
            "token": "xyz",
            "user": { "id": "2", "email": "x@test.com", "nombre": "X", "tipo": "bibliotecario" }
        }))
        .unwrap();
        assert_eq!(identity.credential, "xyz");
        assert_eq!(identity.display_name, "X");
        assert_eq!(identity.role, Role::Bibliotecario);
    }

    #[test]
    fn login_without_token_fails() {
        assert!(normalize_auth_payload(&json!({
            "success": true,
            "data": { "id": "1", "email": "a@test.com" }
        }))
        .is_none());
    }

    #[test]
    fn role_falls_back_to_tipo_then_email() {
        // `tipo` wins when `role` is absent
        let identity = normalize_auth_payload(&json!({
            "access_token": "t",
            "data": { "id": "1", "email": "p@test.com", "tipo": "profesor" }
        }))
        .unwrap();
        assert_eq!(identity.role, Role::Profesor);

        // Email heuristic when both are absent
        let identity = normalize_auth_payload(&json!({
            "access_token": "t",
            "data": { "id": "1", "email": "admin2@bibliotec.com" }
        }))
        .unwrap();
        assert_eq!(identity.role, Role::Admin);

        // Plain address defaults to estudiante
        let identity = normalize_auth_payload(&json!({
            "access_token": "t",
            "data": { "id": "1", "email": "someone@test.com" }
        }))
        .unwrap();
        assert_eq!(identity.role, Role::Estudiante);
    }

    #[test]
    fn explicit_role_beats_tipo() {
        let identity = normalize_auth_payload(&json!({
            "access_token": "t",
            "data": { "id": "1", "email": "e@test.com", "role": "admin", "tipo": "estudiante" }
        }))
        .unwrap();
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn profile_payload_reattaches_token() {
        let identity = normalize_profile_payload(
            &json!({
                "success": true,
                "data": { "id": "9", "email": "l@test.com", "role": "bibliotecario", "nombre": "Lu" }
            }),
            "persisted-token",
        )
        .unwrap();
        assert_eq!(identity.credential, "persisted-token");
        assert_eq!(identity.role, Role::Bibliotecario);
    }

    #[test]
    fn profile_without_user_record_fails() {
        assert!(normalize_profile_payload(&json!({ "success": true }), "t").is_none());
        assert!(normalize_profile_payload(&json!({ "success": true, "data": {} }), "t").is_none());
    }
}
