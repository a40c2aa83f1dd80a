//! Navigation guard for the admin section.
//!
//! One pure decision per navigation attempt: paths under the restricted
//! prefix require the admin role; everything else passes through. The HTTP
//! layer turns a denial into a history-replacing redirect.

use crate::core::roles::RoleSet;

/// Path prefix that requires the admin role.
pub const RESTRICTED_PREFIX: &str = "/admin";

/// Where denied navigations are sent, with the error indicator attached.
pub const UNAUTHORIZED_REDIRECT: &str = "/?error=unauthorized";

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation proceeds unmodified
    Allowed,
    /// Navigation is replaced with a redirect to the given location
    Denied {
        /// Redirect target carrying the error indicator
        redirect: String,
    },
}

/// Decides whether a navigation to `path` may proceed for the given roles.
///
/// The decision uses whatever role snapshot the caller has at evaluation
/// time; an unresolved identity shows up here as the empty set and is
/// denied like any other non-admin.
#[must_use]
pub fn evaluate_navigation(path: &str, roles: &RoleSet) -> GuardDecision {
    if path.starts_with(RESTRICTED_PREFIX) && !roles.is_admin() {
        return GuardDecision::Denied {
            redirect: UNAUTHORIZED_REDIRECT.to_string(),
        };
    }
    GuardDecision::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Role;

    #[test]
    fn test_public_paths_are_always_allowed() {
        let nobody = RoleSet::default();
        assert_eq!(evaluate_navigation("/", &nobody), GuardDecision::Allowed);
        assert_eq!(
            evaluate_navigation("/api/items", &nobody),
            GuardDecision::Allowed
        );
    }

    #[test]
    fn test_admin_prefix_denied_without_admin_role() {
        let member = RoleSet::from_roles([Role::Member, Role::Host]);
        let decision = evaluate_navigation("/admin/dashboard", &member);
        assert_eq!(
            decision,
            GuardDecision::Denied {
                redirect: UNAUTHORIZED_REDIRECT.to_string(),
            }
        );
    }

    #[test]
    fn test_admin_prefix_allowed_with_admin_role() {
        let admin = RoleSet::from_roles([Role::Admin]);
        assert_eq!(
            evaluate_navigation("/admin/dashboard", &admin),
            GuardDecision::Allowed
        );
        assert_eq!(evaluate_navigation("/admin", &admin), GuardDecision::Allowed);
    }

    #[test]
    fn test_empty_role_set_is_denied_like_any_other() {
        // Roles may simply not have resolved yet; the guard decides from
        // the snapshot it is given either way
        let decision = evaluate_navigation("/admin", &RoleSet::default());
        assert!(matches!(decision, GuardDecision::Denied { .. }));
    }
}
