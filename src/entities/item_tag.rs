//! Item-tag join entity.
//!
//! Pure association row linking an item to a tag, mirroring
//! [`item_category`](super::item_category).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item-tag association model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item_tags")]
pub struct Model {
    /// Unique identifier for the join row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The item side of the association
    pub item_id: i64,
    /// The tag side of the association
    pub tag_id: i64,
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
    /// Each join row references one tag
    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagId",
        to = "super::tag::Column::Id"
    )]
    Tag,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
