//! Tag entity - a free-form label on inventory items.
//!
//! Tags are the second classification axis next to categories, typically used
//! for cross-cutting labels ("gluten-free", "bought-in-bulk"). Items relate
//! to tags many-to-many through `item_tags`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tag database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    /// Unique identifier for the tag
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name (e.g., "gluten-free")
    pub name: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Optional display color for the UI
    pub color: Option<String>,
    /// Identity of the user who created the tag, if known
    pub created_by: Option<String>,
    /// When the tag was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Tag and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One tag has many item join rows
    #[sea_orm(has_many = "super::item_tag::Entity")]
    ItemTags,
}

impl Related<super::item_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemTags.def()
    }
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        super::item_tag::Relation::Item.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::item_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
