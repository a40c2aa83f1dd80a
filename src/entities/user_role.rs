//! Role assignment entity.
//!
//! A row grants one [`Role`] to one user. A user may hold any number of
//! roles at once; admin, member, and host are not mutually exclusive.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A named capability grant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full control, including the admin section
    #[sea_orm(string_value = "admin")]
    Admin,
    /// Household member; can view and edit the fridge
    #[sea_orm(string_value = "member")]
    Member,
    /// Guest; can view the fridge but not change it
    #[sea_orm(string_value = "host")]
    Host,
}

impl Role {
    /// The wire/database spelling of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Host => "host",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role assignment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_roles")]
pub struct Model {
    /// Unique identifier for the assignment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Identity string of the user holding the role
    pub user_id: String,
    /// The granted role
    pub role: Role,
    /// When the role was granted
    pub created_at: DateTimeUtc,
}

/// Defines relationships between the assignment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each assignment belongs to one profile
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::UserId",
        to = "super::profile::Column::Id"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
