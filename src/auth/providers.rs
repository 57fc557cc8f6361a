//! Authentication providers
//!
//! Login is a chain of providers tried in order; the first one to produce an
//! identity wins. The static table serves the fixed test accounts without a
//! network round-trip; the remote provider is the real backend.

use async_trait::async_trait;
use uuid::Uuid;

use crate::api::auth::AuthApi;
use crate::api::ApiError;
use crate::auth::normalize::normalize_auth_payload;
use crate::types::{Identity, LoginCredentials, Role};

#[async_trait(?Send)]
pub trait AuthProvider {
    fn name(&self) -> &'static str;

    /// `Ok(None)` means "these credentials are not mine" and the chain moves
    /// on; `Err` is a hard failure that ends the whole login attempt.
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Identity>, ApiError>;
}

struct TestAccount {
    email: &'static str,
    password: &'static str,
    role: Role,
    display_name: &'static str,
}

const TEST_ACCOUNTS: &[TestAccount] = &[
    TestAccount {
        email: "admin2@bibliotec.com",
        password: "admin123",
        role: Role::Admin,
        display_name: "Administrador Principal",
    },
    TestAccount {
        email: "usuario@test.com",
        password: "user123",
        role: Role::Estudiante,
        display_name: "Usuario de Prueba",
    },
    TestAccount {
        email: "admin@test.com",
        password: "admin123",
        role: Role::Admin,
        display_name: "Admin Test",
    },
];

/// Offline test accounts for demos and backend-less development.
pub struct StaticTableProvider;

#[async_trait(?Send)]
impl AuthProvider for StaticTableProvider {
    fn name(&self) -> &'static str {
        "static-table"
    }

    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Identity>, ApiError> {
        let Some(account) = TEST_ACCOUNTS.iter().find(|account| {
            account.email == credentials.username && account.password == credentials.password
        }) else {
            return Ok(None);
        };

        Ok(Some(Identity {
            id: Uuid::new_v4().to_string(),
            display_name: account.display_name.to_string(),
            email: account.email.to_string(),
            role: account.role,
            avatar: None,
            credential: format!("test-token-{}", Uuid::new_v4().simple()),
        }))
    }
}

/// The real backend (`POST /auth/login`).
pub struct RemoteProvider {
    api: AuthApi,
}

impl RemoteProvider {
    pub fn new(api: AuthApi) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl AuthProvider for RemoteProvider {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Identity>, ApiError> {
        let payload = self.api.login(credentials).await?;
        normalize_auth_payload(&payload)
            .map(Some)
            .ok_or_else(|| ApiError::Rejected("login response carried no token".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(username: &str, password: &str) -> LoginCredentials {
        LoginCredentials {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn static_table_matches_admin_fixture() {
        let identity = StaticTableProvider
            .authenticate(&credentials("admin2@bibliotec.com", "admin123"))
            .await
            .unwrap()
            .expect("fixture account should match");
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.display_name, "Administrador Principal");
        assert!(identity.credential.starts_with("test-token-"));
    }

    #[tokio::test]
    async fn static_table_matches_student_fixture() {
        let identity = StaticTableProvider
            .authenticate(&credentials("usuario@test.com", "user123"))
            .await
            .unwrap()
            .expect("fixture account should match");
        assert_eq!(identity.role, Role::Estudiante);
    }

    #[tokio::test]
    async fn static_table_requires_exact_password() {
        let result = StaticTableProvider
            .authenticate(&credentials("admin2@bibliotec.com", "wrong"))
            .await
            .unwrap();
        assert!(result.is_none(), "wrong password must fall through");
    }

    #[tokio::test]
    async fn static_table_ignores_unknown_accounts() {
        let result = StaticTableProvider
            .authenticate(&credentials("nobody@test.com", "pw"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn static_tokens_are_unique_per_login() {
        let creds = credentials("admin@test.com", "admin123");
        let first = StaticTableProvider
            .authenticate(&creds)
            .await
            .unwrap()
            .unwrap();
        let second = StaticTableProvider
            .authenticate(&creds)
            .await
            .unwrap()
            .unwrap();
        assert_ne!(first.credential, second.credential);
    }
}
