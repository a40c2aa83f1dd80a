//! Category entity - a classification axis for inventory items.
//!
//! Categories group items for display (e.g., "Dairy", "Baking"). Name
//! uniqueness is a convention of the household, not enforced at this layer.
//! Items relate to categories many-to-many through `item_categories`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name (e.g., "Dairy")
    pub name: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Optional display color for the UI
    pub color: Option<String>,
    /// Optional display icon for the UI
    pub icon: Option<String>,
    /// Identity of the user who created the category, if known
    pub created_by: Option<String>,
    /// When the category was created
    pub created_at: DateTimeUtc,
    /// When the category was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category has many item join rows
    #[sea_orm(has_many = "super::item_category::Entity")]
    ItemCategories,
}

impl Related<super::item_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemCategories.def()
    }
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        super::item_category::Relation::Item.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::item_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
