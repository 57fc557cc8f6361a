//! Session store: the single source of truth for "who is logged in"
//!
//! Failure policy (deliberate): nothing in here propagates a transport error
//! to callers. `login`/`register` answer with an identity or `None`;
//! `restore` quietly ends up with no identity. Callers own the user-visible
//! messaging.

use crate::api::auth::AuthApi;
use crate::api::ApiClient;
use crate::auth::normalize::{normalize_auth_payload, normalize_profile_payload};
use crate::auth::policy::AdminPolicy;
use crate::auth::providers::{AuthProvider, RemoteProvider, StaticTableProvider};
use crate::auth::vault::Vault;
use crate::types::{Identity, LoginCredentials, RegisterData};

pub struct SessionStore {
    providers: Vec<Box<dyn AuthProvider>>,
    auth: AuthApi,
    vault: Vault,
    policy: AdminPolicy,
}

impl SessionStore {
    /// Production wiring: static test accounts first, then the backend.
    pub fn new(base_url: &str) -> Self {
        let auth = AuthApi::new(ApiClient::new(base_url));
        Self {
            providers: vec![
                Box::new(StaticTableProvider),
                Box::new(RemoteProvider::new(auth.clone())),
            ],
            auth,
            vault: Vault::default_for_platform(),
            policy: AdminPolicy::default(),
        }
    }

    /// Custom wiring, used by tests to substitute providers and storage.
    pub fn with_parts(
        providers: Vec<Box<dyn AuthProvider>>,
        auth: AuthApi,
        vault: Vault,
        policy: AdminPolicy,
    ) -> Self {
        Self {
            providers,
            auth,
            vault,
            policy,
        }
    }

    pub fn policy(&self) -> &AdminPolicy {
        &self.policy
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Startup restore: validate the persisted credential against
    /// `/auth/profile`. Any failure clears the vault and yields no identity.
    pub async fn restore(&self) -> Option<Identity> {
        let token = self.vault.token()?;

        match self.auth.profile(&token).await {
            Ok(payload) => match normalize_profile_payload(&payload, &token) {
                Some(identity) => {
                    self.vault.save(&identity);
                    Some(identity)
                }
                None => {
                    tracing::warn!("profile response carried no identity fields");
                    self.vault.clear();
                    None
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "session restore failed");
                self.vault.clear();
                None
            }
        }
    }

    /// Try each provider in order; first success wins and is persisted.
    /// A hard provider failure ends the attempt with nothing persisted.
    pub async fn login(&self, credentials: &LoginCredentials) -> Option<Identity> {
        for provider in &self.providers {
            match provider.authenticate(credentials).await {
                Ok(Some(identity)) => {
                    tracing::debug!(provider = provider.name(), "login accepted");
                    self.vault.save(&identity);
                    return Some(identity);
                }
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(provider = provider.name(), error = %err, "login failed");
                    return None;
                }
            }
        }
        None
    }

    pub async fn register(&self, data: &RegisterData) -> Option<Identity> {
        match self.auth.register(data).await {
            Ok(payload) => match normalize_auth_payload(&payload) {
                Some(identity) => {
                    self.vault.save(&identity);
                    Some(identity)
                }
                None => {
                    tracing::warn!("register response carried no token");
                    None
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "registration failed");
                None
            }
        }
    }

    /// Synchronous, unconditional, idempotent.
    pub fn logout(&self) {
        self.vault.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::types::Role;
    use async_trait::async_trait;

    // A backend address that refuses connections immediately
    const DEAD_BACKEND: &str = "http://127.0.0.1:9";

    struct AlwaysFailingProvider;

    #[async_trait(?Send)]
    impl AuthProvider for AlwaysFailingProvider {
        fn name(&self) -> &'static str {
            "always-failing"
        }

        async fn authenticate(
            &self,
            _credentials: &LoginCredentials,
        ) -> Result<Option<Identity>, ApiError> {
            Err(ApiError::Status {
                status: 401,
                message: "Credenciales inválidas".into(),
            })
        }
    }

    fn store_with(providers: Vec<Box<dyn AuthProvider>>) -> SessionStore {
        SessionStore::with_parts(
            providers,
            AuthApi::new(ApiClient::new(DEAD_BACKEND)),
            Vault::memory(),
            AdminPolicy::default(),
        )
    }

    fn credentials(username: &str, password: &str) -> LoginCredentials {
        LoginCredentials {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn restore_without_credential_is_a_quiet_noop() {
        let store = store_with(vec![Box::new(StaticTableProvider)]);
        assert!(store.restore().await.is_none());
        assert!(store.vault().token().is_none());
    }

    #[tokio::test]
    async fn restore_with_unreachable_backend_clears_the_vault() {
        let store = store_with(vec![Box::new(StaticTableProvider)]);
        // Simulate a stale credential from a previous run
        store
            .login(&credentials("usuario@test.com", "user123"))
            .await
            .expect("fixture login");
        assert!(store.vault().token().is_some());

        assert!(store.restore().await.is_none());
        assert!(store.vault().token().is_none());
        assert!(store.vault().identity().is_none());
    }

    #[tokio::test]
    async fn static_login_persists_identity_and_token_together() {
        let store = store_with(vec![Box::new(StaticTableProvider)]);
        let identity = store
            .login(&credentials("admin2@bibliotec.com", "admin123"))
            .await
            .expect("fixture login must succeed offline");

        assert_eq!(identity.role, Role::Admin);
        assert_eq!(store.vault().token(), Some(identity.credential.clone()));
        // Role classification survives the vault round-trip
        let persisted = store.vault().identity().unwrap();
        assert_eq!(
            store.policy().is_admin_tier(&persisted),
            store.policy().is_admin_tier(&identity)
        );
    }

    #[tokio::test]
    async fn rejected_login_leaves_no_persisted_state() {
        let store = store_with(vec![
            Box::new(StaticTableProvider),
            Box::new(AlwaysFailingProvider),
        ]);
        let result = store.login(&credentials("nobody@test.com", "wrong")).await;
        assert!(result.is_none());
        assert!(store.vault().token().is_none());
        assert!(store.vault().identity().is_none());
    }

    #[tokio::test]
    async fn exhausted_chain_is_a_failure() {
        let store = store_with(vec![Box::new(StaticTableProvider)]);
        assert!(store
            .login(&credentials("nobody@test.com", "pw"))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let store = store_with(vec![Box::new(StaticTableProvider)]);
        store
            .login(&credentials("usuario@test.com", "user123"))
            .await
            .expect("fixture login");

        store.logout();
        assert!(store.vault().token().is_none());
        assert!(store.vault().identity().is_none());

        store.logout();
        assert!(store.vault().token().is_none());
        assert!(store.vault().identity().is_none());
    }
}
