//! Item-category join entity.
//!
//! Pure association row linking an item to a category; no payload beyond the
//! created timestamp. Join rows have no lifecycle of their own - deleting an
//! item or category removes its joins.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item-category association model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item_categories")]
pub struct Model {
    /// Unique identifier for the join row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The item side of the association
    pub item_id: i64,
    /// The category side of the association
    pub category_id: i64,
    /// When the association was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between the join row and its endpoints
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each join row references one item
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id"
    )]
    Item,
    /// Each join row references one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
