//! Admin-tier classification
//!
//! Both the route guard and the post-login dispatcher consult this one
//! predicate, so the two can never disagree about who is admin-tier.

use crate::types::Identity;

/// The production account that must land on the admin views even when the
/// backend reports it with a non-admin role. Kept as an explicit exception
/// list rather than an inline literal; see DESIGN.md for the history.
const DEFAULT_OVERRIDE_EMAILS: &[&str] = &["admin2@bibliotec.com"];

#[derive(Debug, Clone)]
pub struct AdminPolicy {
    override_emails: Vec<String>,
}

impl Default for AdminPolicy {
    fn default() -> Self {
        Self {
            override_emails: DEFAULT_OVERRIDE_EMAILS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl AdminPolicy {
    /// Policy with a custom exception list (empty to disable overrides).
    pub fn with_overrides(emails: impl IntoIterator<Item = String>) -> Self {
        Self {
            override_emails: emails.into_iter().collect(),
        }
    }

    /// True if the identity may access management views: its role is
    /// admin-tier, or its email is on the override list.
    pub fn is_admin_tier(&self, identity: &Identity) -> bool {
        identity.role.is_admin_tier()
            || self
                .override_emails
                .iter()
                .any(|email| email.eq_ignore_ascii_case(&identity.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn identity(email: &str, role: Role) -> Identity {
        Identity {
            id: "1".into(),
            display_name: "T".into(),
            email: email.into(),
            role,
            avatar: None,
            credential: "t".into(),
        }
    }

    #[test]
    fn admin_tier_by_role() {
        let policy = AdminPolicy::default();
        assert!(policy.is_admin_tier(&identity("a@test.com", Role::Admin)));
        assert!(policy.is_admin_tier(&identity("b@test.com", Role::Bibliotecario)));
        assert!(!policy.is_admin_tier(&identity("c@test.com", Role::Estudiante)));
    }

    #[test]
    fn override_email_wins_over_role() {
        let policy = AdminPolicy::default();
        assert!(policy.is_admin_tier(&identity("admin2@bibliotec.com", Role::Estudiante)));
        // Case-insensitive match
        assert!(policy.is_admin_tier(&identity("Admin2@Bibliotec.com", Role::Estudiante)));
    }

    #[test]
    fn empty_override_list_disables_the_exception() {
        let policy = AdminPolicy::with_overrides([]);
        assert!(!policy.is_admin_tier(&identity("admin2@bibliotec.com", Role::Estudiante)));
        assert!(policy.is_admin_tier(&identity("admin2@bibliotec.com", Role::Admin)));
    }
}
