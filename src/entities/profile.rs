//! Profile entity - the local mirror of an externally authenticated user.
//!
//! Authentication itself happens outside this application; profiles only
//! carry the identity string the auth layer hands us plus display fields.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Profile database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    /// Identity string assigned by the external auth provider
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Email address, if the provider shared one
    pub email: Option<String>,
    /// Display name, if the provider shared one
    pub name: Option<String>,
    /// When the profile was first seen
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Profile and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One profile holds zero or more role assignments
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRoles,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
