//! Pure route-guard decisions
//!
//! The `Protected` component, the admin layout and the `/dashboard`
//! dispatcher all render whatever these functions decide; keeping the
//! decisions out of the view tree makes them testable without a browser.

use crate::auth::policy::AdminPolicy;
use crate::types::Identity;

/// Outcome for a guarded view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session restore has not finished; render a neutral loading state so
    /// the user is not flash-redirected before the restore resolves.
    Pending,
    /// No identity: send to the login view.
    RequireLogin,
    /// Authenticated but not admin-tier for an admin-only view: send to the
    /// user landing view.
    Forbidden,
    /// Render the protected child.
    Granted,
}

pub fn check_access(
    restoring: bool,
    identity: Option<&Identity>,
    require_admin: bool,
    policy: &AdminPolicy,
) -> AccessDecision {
    if restoring {
        return AccessDecision::Pending;
    }
    let Some(identity) = identity else {
        return AccessDecision::RequireLogin;
    };
    if require_admin && !policy.is_admin_tier(identity) {
        return AccessDecision::Forbidden;
    }
    AccessDecision::Granted
}

/// Outcome for the bare `/dashboard` entry point, where the user has not
/// picked a destination yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingDecision {
    Pending,
    RequireLogin,
    /// Admin-tier: land on the admin panel.
    Admin,
    /// Everyone else: land on the user dashboard.
    User,
}

pub fn landing_for(
    restoring: bool,
    identity: Option<&Identity>,
    policy: &AdminPolicy,
) -> LandingDecision {
    if restoring {
        return LandingDecision::Pending;
    }
    let Some(identity) = identity else {
        return LandingDecision::RequireLogin;
    };
    if policy.is_admin_tier(identity) {
        LandingDecision::Admin
    } else {
        LandingDecision::User
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
    fn restoring_always_waits() {
        let policy = AdminPolicy::default();
        let admin = identity("a@test.com", Role::Admin);
        assert_eq!(
            check_access(true, None, false, &policy),
            AccessDecision::Pending
        );
        assert_eq!(
            check_access(true, Some(&admin), true, &policy),
            AccessDecision::Pending
        );
        assert_eq!(
            landing_for(true, Some(&admin), &policy),
            LandingDecision::Pending
        );
    }

    #[test]
    fn anonymous_goes_to_login() {
        let policy = AdminPolicy::default();
        assert_eq!(
            check_access(false, None, false, &policy),
            AccessDecision::RequireLogin
        );
        assert_eq!(
            check_access(false, None, true, &policy),
            AccessDecision::RequireLogin
        );
        assert_eq!(landing_for(false, None, &policy), LandingDecision::RequireLogin);
    }

    #[test]
    fn student_is_forbidden_from_admin_views() {
        let policy = AdminPolicy::default();
        let student = identity("s@test.com", Role::Estudiante);
        assert_eq!(
            check_access(false, Some(&student), true, &policy),
            AccessDecision::Forbidden
        );
        // The same identity passes a non-admin guard
        assert_eq!(
            check_access(false, Some(&student), false, &policy),
            AccessDecision::Granted
        );
    }

    #[test]
    fn librarian_passes_the_admin_guard() {
        let policy = AdminPolicy::default();
        let librarian = identity("l@test.com", Role::Bibliotecario);
        assert_eq!(
            check_access(false, Some(&librarian), true, &policy),
            AccessDecision::Granted
        );
    }

    #[test]
    fn landing_splits_on_admin_tier() {
        let policy = AdminPolicy::default();
        let admin = identity("a@test.com", Role::Admin);
        let student = identity("s@test.com", Role::Estudiante);
        assert_eq!(landing_for(false, Some(&admin), &policy), LandingDecision::Admin);
        assert_eq!(landing_for(false, Some(&student), &policy), LandingDecision::User);
    }

    #[test]
    fn override_email_lands_on_admin_despite_student_role() {
        let policy = AdminPolicy::default();
        let overridden = identity("admin2@bibliotec.com", Role::Estudiante);
        assert_eq!(
            landing_for(false, Some(&overridden), &policy),
            LandingDecision::Admin
        );
        // And the guard agrees, because both consult the same policy
        assert_eq!(
            check_access(false, Some(&overridden), true, &policy),
            AccessDecision::Granted
        );
    }
}
