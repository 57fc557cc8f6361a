//! Session context provider
//!
//! Thin Dioxus layer over [`SessionStore`]: two signals (current identity,
//! restore-in-progress) provided to the whole view tree, plus async wrappers
//! that keep the signals and the store in lockstep.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::auth::policy::AdminPolicy;
use crate::auth::store::SessionStore;
use crate::config;
use crate::types::{Identity, LoginCredentials, RegisterData};

/// Session context that provides auth state to the entire app
#[derive(Clone)]
pub struct SessionContext {
    /// Current authenticated identity (if any)
    pub identity: Signal<Option<Identity>>,
    /// True from startup until the initial credential restore completes.
    /// Transitions to false exactly once and never back.
    pub restoring: Signal<bool>,
    store: Rc<SessionStore>,
}

impl SessionContext {
    /// Check if a user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.identity.read().is_some()
    }

    /// Check if the current user is admin-tier
    pub fn is_admin(&self) -> bool {
        self.identity
            .read()
            .as_ref()
            .map(|identity| self.store.policy().is_admin_tier(identity))
            .unwrap_or(false)
    }

    pub fn policy(&self) -> &AdminPolicy {
        self.store.policy()
    }

    /// Cloned snapshot of the current identity.
    pub fn current(&self) -> Option<Identity> {
        self.identity.read().clone()
    }

    /// The bearer credential of the active session, for API calls.
    pub fn token(&self) -> Option<String> {
        self.identity
            .read()
            .as_ref()
            .map(|identity| identity.credential.clone())
    }

    /// Startup restore. Runs once, from the provider effect.
    pub async fn restore(&self) {
        let restored = self.store.restore().await;
        let mut identity = self.identity;
        identity.set(restored);
        let mut restoring = self.restoring;
        restoring.set(false);
    }

    /// Returns true on success. On failure nothing changes; the caller owns
    /// the error message.
    pub async fn login(&self, credentials: LoginCredentials) -> bool {
        match self.store.login(&credentials).await {
            Some(logged_in) => {
                let mut identity = self.identity;
                identity.set(Some(logged_in));
                true
            }
            None => false,
        }
    }

    pub async fn register(&self, data: RegisterData) -> bool {
        match self.store.register(&data).await {
            Some(registered) => {
                let mut identity = self.identity;
                identity.set(Some(registered));
                true
            }
            None => false,
        }
    }

    /// Clear the session. Synchronous, cannot fail.
    pub fn logout(&self) {
        self.store.logout();
        let mut identity = self.identity;
        identity.set(None);
    }
}

/// Session provider component that wraps the app
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let identity = use_signal(|| None::<Identity>);
    let restoring = use_signal(|| true);
    let store = use_hook(|| Rc::new(SessionStore::new(config::api_url())));

    let session = SessionContext {
        identity,
        restoring,
        store,
    };

    use_context_provider(|| session.clone());

    // Attempt the one-shot credential restore
    use_effect(move || {
        let session = session.clone();
        spawn(async move {
            session.restore().await;
        });
    });

    children
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
