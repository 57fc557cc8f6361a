//! Persisted credential storage
//!
//! The vault holds exactly two values, written and removed together: the
//! bearer token and the serialized identity. The browser variant lives in
//! localStorage under the same keys the backend's other clients use; the
//! in-memory variant exists so the session store is testable off-browser.

use std::cell::RefCell;

use crate::types::Identity;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

#[derive(Debug)]
pub enum Vault {
    #[cfg(feature = "web")]
    Browser,
    Memory(RefCell<MemoryCell>),
}

#[derive(Debug, Default)]
pub struct MemoryCell {
    token: Option<String>,
    user: Option<String>,
}

impl Vault {
    /// localStorage-backed vault for browser builds, in-memory otherwise.
    pub fn default_for_platform() -> Self {
        #[cfg(feature = "web")]
        {
            Vault::Browser
        }
        #[cfg(not(feature = "web"))]
        {
            Vault::memory()
        }
    }

    pub fn memory() -> Self {
        Vault::Memory(RefCell::new(MemoryCell::default()))
    }

    /// The persisted bearer credential, if any.
    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    /// The persisted identity, if any. Undecodable leftovers read as absent.
    pub fn identity(&self) -> Option<Identity> {
        let raw = self.read(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Persist token and identity together. Success paths only.
    pub fn save(&self, identity: &Identity) {
        let serialized = match serde_json::to_string(identity) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "could not serialize identity");
                return;
            }
        };
        self.write(TOKEN_KEY, &identity.credential);
        self.write(USER_KEY, &serialized);
    }

    /// Remove both values. Safe to call with nothing persisted.
    pub fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
    }

    fn read(&self, key: &str) -> Option<String> {
        match self {
            #[cfg(feature = "web")]
            Vault::Browser => local_storage()?.get_item(key).ok().flatten(),
            Vault::Memory(cell) => {
                let cell = cell.borrow();
                match key {
                    TOKEN_KEY => cell.token.clone(),
                    _ => cell.user.clone(),
                }
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        match self {
            #[cfg(feature = "web")]
            Vault::Browser => {
                if let Some(storage) = local_storage() {
                    storage.set_item(key, value).ok();
                }
            }
            Vault::Memory(cell) => {
                let mut cell = cell.borrow_mut();
                match key {
                    TOKEN_KEY => cell.token = Some(value.to_string()),
                    _ => cell.user = Some(value.to_string()),
                }
            }
        }
    }

    fn remove(&self, key: &str) {
        match self {
            #[cfg(feature = "web")]
            Vault::Browser => {
                if let Some(storage) = local_storage() {
                    storage.remove_item(key).ok();
                }
            }
            Vault::Memory(cell) => {
                let mut cell = cell.borrow_mut();
                match key {
                    TOKEN_KEY => cell.token = None,
                    _ => cell.user = None,
                }
            }
        }
    }
}

#[cfg(feature = "web")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn identity() -> Identity {
        Identity {
            id: "1".into(),
            display_name: "Test".into(),
            email: "t@test.com".into(),
            role: Role::Admin,
            avatar: None,
            credential: "tok-123".into(),
        }
    }

    #[test]
    fn save_then_read_back() {
        let vault = Vault::memory();
        assert!(vault.token().is_none());

        vault.save(&identity());
        assert_eq!(vault.token().as_deref(), Some("tok-123"));
        let stored = vault.identity().unwrap();
        assert_eq!(stored.role, Role::Admin);
        assert_eq!(stored.credential, "tok-123");
    }

    #[test]
    fn clear_removes_both_and_is_idempotent() {
        let vault = Vault::memory();
        vault.save(&identity());

        vault.clear();
        assert!(vault.token().is_none());
        assert!(vault.identity().is_none());

        // Second clear is a no-op
        vault.clear();
        assert!(vault.token().is_none());
    }
}
