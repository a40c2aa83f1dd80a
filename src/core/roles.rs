//! Role resolution and capability flags.
//!
//! The authenticated identity is an explicit input here, not ambient state:
//! callers pass whatever the identity boundary gave them (a user id, or
//! nothing). An absent identity resolves to the empty role set, never to an
//! error.

use std::collections::HashSet;

use crate::{
    entities::{Role, UserRole, user_role},
    errors::Result,
};
use sea_orm::prelude::*;
use serde::Serialize;

/// The set of roles held by one user, with the capability flags the rest of
/// the application consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet {
    roles: HashSet<Role>,
}

impl RoleSet {
    /// Builds a role set from any iterator of roles (mainly for tests and
    /// seeding; production sets come from [`get_user_roles`]).
    pub fn from_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    /// Whether the user holds the given role.
    #[must_use]
    pub fn has(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether no roles are held at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// The held roles in a stable order.
    #[must_use]
    pub fn roles(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self.roles.iter().copied().collect();
        roles.sort_unstable();
        roles
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has(Role::Admin)
    }

    #[must_use]
    pub fn is_member(&self) -> bool {
        self.has(Role::Member)
    }

    #[must_use]
    pub fn is_host(&self) -> bool {
        self.has(Role::Host)
    }

    /// Admins and members may change the fridge.
    #[must_use]
    pub fn can_edit_fridge(&self) -> bool {
        self.is_admin() || self.is_member()
    }

    /// Admins, members, and hosts may see the fridge.
    #[must_use]
    pub fn can_view_fridge(&self) -> bool {
        self.is_admin() || self.is_member() || self.is_host()
    }
}

/// Capability flags in wire form, derived from a [`RoleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub is_admin: bool,
    pub is_member: bool,
    pub is_host: bool,
    pub can_edit_fridge: bool,
    pub can_view_fridge: bool,
}

impl From<&RoleSet> for Capabilities {
    fn from(roles: &RoleSet) -> Self {
        Self {
            is_admin: roles.is_admin(),
            is_member: roles.is_member(),
            is_host: roles.is_host(),
            can_edit_fridge: roles.can_edit_fridge(),
            can_view_fridge: roles.can_view_fridge(),
        }
    }
}

/// Resolves the role set for the given identity.
///
/// No identity means no roles - an empty set, not an error. Role changes
/// take effect on the next resolution; callers re-resolve whenever the
/// identity changes.
pub async fn get_user_roles(db: &DatabaseConnection, user_id: Option<&str>) -> Result<RoleSet> {
    let Some(user_id) = user_id else {
        return Ok(RoleSet::default());
    };

    let assignments = UserRole::find()
        .filter(user_role::Column::UserId.eq(user_id))
        .all(db)
        .await?;

    Ok(RoleSet::from_roles(
        assignments.into_iter().map(|assignment| assignment.role),
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_absent_identity_resolves_to_empty_set() -> Result<()> {
        let db = setup_test_db().await?;

        let roles = get_user_roles(&db, None).await?;
        assert!(roles.is_empty());
        assert!(!roles.is_admin());
        assert!(!roles.is_member());
        assert!(!roles.is_host());
        assert!(!roles.can_edit_fridge());
        assert!(!roles.can_view_fridge());

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_identity_resolves_to_empty_set() -> Result<()> {
        let db = setup_test_db().await?;

        let roles = get_user_roles(&db, Some("stranger")).await?;
        assert!(roles.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_roles_resolve_for_assigned_user() -> Result<()> {
        let db = setup_test_db().await?;

        grant_role(&db, "alex", Role::Member).await?;

        let roles = get_user_roles(&db, Some("alex")).await?;
        assert!(roles.has(Role::Member));
        assert!(!roles.has(Role::Admin));
        assert!(roles.can_edit_fridge());
        assert!(roles.can_view_fridge());

        Ok(())
    }

    #[tokio::test]
    async fn test_multiple_roles_are_not_exclusive() -> Result<()> {
        let db = setup_test_db().await?;

        grant_role(&db, "alex", Role::Admin).await?;
        grant_role(&db, "alex", Role::Host).await?;

        let roles = get_user_roles(&db, Some("alex")).await?;
        assert!(roles.is_admin());
        assert!(roles.is_host());
        assert!(!roles.is_member());
        assert!(roles.can_edit_fridge());
        assert!(roles.can_view_fridge());

        Ok(())
    }

    #[tokio::test]
    async fn test_host_can_view_but_not_edit() -> Result<()> {
        let db = setup_test_db().await?;

        grant_role(&db, "guest", Role::Host).await?;

        let roles = get_user_roles(&db, Some("guest")).await?;
        assert!(roles.can_view_fridge());
        assert!(!roles.can_edit_fridge());

        Ok(())
    }

    #[test]
    fn test_capabilities_wire_form() {
        let roles = RoleSet::from_roles([Role::Admin, Role::Host]);
        let capabilities = Capabilities::from(&roles);

        assert!(capabilities.is_admin);
        assert!(capabilities.is_host);
        assert!(!capabilities.is_member);
        assert!(capabilities.can_edit_fridge);
        assert!(capabilities.can_view_fridge);
    }
}
