//! Item entity - a tracked inventory unit (a fridge or pantry good).
//!
//! Each item carries free-form stock bookkeeping (`quantity`, `min_quantity`,
//! `unit`), a stored [`ItemStatus`], optional expiration/purchase dates, and
//! timestamps. Items relate many-to-many to categories and tags through the
//! `item_categories` and `item_tags` join entities.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stock status of an item.
///
/// The status is stored independently of the `quantity`/`min_quantity` pair
/// and the two are allowed to disagree; the view layer treats them as
/// separate signals.
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
pub enum ItemStatus {
    /// Stocked at a comfortable level
    #[sea_orm(string_value = "in_stock")]
    InStock,
    /// Running low, should be restocked soon
    #[sea_orm(string_value = "low_stock")]
    LowStock,
    /// Completely out
    #[sea_orm(string_value = "out_of_stock")]
    OutOfStock,
    /// Past its expiration date
    #[sea_orm(string_value = "expired")]
    Expired,
}

impl ItemStatus {
    /// The wire/database spelling of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the item (e.g., "Milk", "Flour")
    pub name: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Current quantity on hand, in `unit`s; None when untracked
    pub quantity: Option<f64>,
    /// Restock threshold the household wants to stay above; None when untracked
    pub min_quantity: Option<f64>,
    /// Stored stock status; independent of the quantity bookkeeping
    pub status: ItemStatus,
    /// Measurement unit ("pieces", "kilogram", "liter", ...)
    pub unit: Option<String>,
    /// Date the item expires, if it expires at all
    pub expiration_date: Option<Date>,
    /// Date the item was bought
    pub purchase_date: Option<Date>,
    /// Optional image reference for the UI
    pub image_url: Option<String>,
    /// Free-form household notes
    pub notes: Option<String>,
    /// Identity of the user who created the item, if known
    pub created_by: Option<String>,
    /// When the item was created
    pub created_at: DateTimeUtc,
    /// When the item was last modified; listings order by this, newest first
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Item and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One item has many category join rows
    #[sea_orm(has_many = "super::item_category::Entity")]
    ItemCategories,
    /// One item has many tag join rows
    #[sea_orm(has_many = "super::item_tag::Entity")]
    ItemTags,
}

impl Related<super::item_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemCategories.def()
    }
}

impl Related<super::item_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemTags.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::item_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::item_category::Relation::Item.def().rev())
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::item_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::item_tag::Relation::Item.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
