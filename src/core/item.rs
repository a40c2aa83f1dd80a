//! Item business logic - data access for inventory items and their
//! category/tag associations.
//!
//! Provides CRUD functions for items plus association management. Listings
//! embed the related categories and tags the way the UI consumes them. All
//! functions are async, take the database connection explicitly, and return
//! Result types for error handling.

use crate::{
    entities::{Category, Item, ItemCategory, ItemTag, Tag, category, item, item_category, item_tag, tag},
    errors::{Error, Result},
};
use sea_orm::{
    Condition, LoaderTrait, QueryOrder, Set, TransactionTrait,
    prelude::*,
    sea_query::{Expr, Func, Query},
};

/// An item together with its category and tag associations, as consumed by
/// listings and the derived-view layer.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ItemWithRelations {
    /// The item row itself
    #[serde(flatten)]
    pub item: item::Model,
    /// Categories the item is joined to (possibly empty)
    pub categories: Vec<category::Model>,
    /// Tags the item is joined to (possibly empty)
    pub tags: Vec<tag::Model>,
}

/// Server-side filters for [`list_items`]. All fields are conjunctive; a
/// `None` leaves that dimension unfiltered.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ListItemFilters {
    /// Exact status match
    pub status: Option<item::ItemStatus>,
    /// Items joined to this category id
    pub category: Option<i64>,
    /// Items joined to this tag id
    pub tag: Option<i64>,
    /// Case-insensitive substring match on name OR description
    pub search: Option<String>,
}

/// Fields for creating an item. Only the name is required; the status
/// defaults to `in_stock`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CreateItem {
    /// Required display name
    pub name: String,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub min_quantity: Option<f64>,
    pub status: Option<item::ItemStatus>,
    pub unit: Option<String>,
    pub expiration_date: Option<Date>,
    pub purchase_date: Option<Date>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

/// Partial update for an item; fields left as `None` keep their value.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub min_quantity: Option<f64>,
    pub status: Option<item::ItemStatus>,
    pub unit: Option<String>,
    pub expiration_date: Option<Date>,
    pub purchase_date: Option<Date>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
}

/// Attaches category and tag associations to a batch of item rows.
///
/// Issues one query per association kind for the whole batch and keeps the
/// input order.
async fn load_relations(
    db: &DatabaseConnection,
    items: Vec<item::Model>,
) -> Result<Vec<ItemWithRelations>> {
    let categories = items.load_many_to_many(Category, ItemCategory, db).await?;
    let tags = items.load_many_to_many(Tag, ItemTag, db).await?;

    Ok(items
        .into_iter()
        .zip(categories)
        .zip(tags)
        .map(|((item, categories), tags)| ItemWithRelations {
            item,
            categories,
            tags,
        })
        .collect())
}

/// Retrieves all items with their categories and tags embedded, ordered by
/// most-recently-updated first.
///
/// `status` restricts to an exact match, `search` performs a
/// case-insensitive substring match against name or description, and
/// `category`/`tag` restrict to items holding a join row for the given id.
/// All filters are applied in the query itself.
pub async fn list_items(
    db: &DatabaseConnection,
    filters: &ListItemFilters,
) -> Result<Vec<ItemWithRelations>> {
    let mut query = Item::find().order_by_desc(item::Column::UpdatedAt);

    if let Some(status) = filters.status {
        query = query.filter(item::Column::Status.eq(status));
    }
    if let Some(search) = filters.search.as_deref() {
        let pattern = format!("%{}%", search.to_lowercase());
        query = query.filter(
            Condition::any()
                .add(
                    Expr::expr(Func::lower(Expr::col((Item, item::Column::Name))))
                        .like(pattern.as_str()),
                )
                .add(
                    Expr::expr(Func::lower(Expr::col((Item, item::Column::Description))))
                        .like(pattern.as_str()),
                ),
        );
    }
    if let Some(category_id) = filters.category {
        let joined = Query::select()
            .column(item_category::Column::ItemId)
            .from(ItemCategory)
            .and_where(Expr::col(item_category::Column::CategoryId).eq(category_id))
            .to_owned();
        query = query.filter(item::Column::Id.in_subquery(joined));
    }
    if let Some(tag_id) = filters.tag {
        let joined = Query::select()
            .column(item_tag::Column::ItemId)
            .from(ItemTag)
            .and_where(Expr::col(item_tag::Column::TagId).eq(tag_id))
            .to_owned();
        query = query.filter(item::Column::Id.in_subquery(joined));
    }

    let items = query.all(db).await?;
    load_relations(db, items).await
}

/// Retrieves a single item with its associations.
pub async fn get_item(db: &DatabaseConnection, item_id: i64) -> Result<ItemWithRelations> {
    let item = Item::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("item", item_id))?;

    let mut with_relations = load_relations(db, vec![item]).await?;
    // load_relations preserves length; exactly one element for one input row
    with_relations
        .pop()
        .ok_or_else(|| Error::not_found("item", item_id))
}

/// Creates a new item, performing input validation.
///
/// The name must be non-empty after trimming. The status defaults to
/// `in_stock` and the server assigns id and timestamps.
pub async fn create_item(db: &DatabaseConnection, draft: CreateItem) -> Result<item::Model> {
    if draft.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Item name cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let model = item::ActiveModel {
        name: Set(draft.name.trim().to_string()),
        description: Set(draft.description),
        quantity: Set(draft.quantity),
        min_quantity: Set(draft.min_quantity),
        status: Set(draft.status.unwrap_or(item::ItemStatus::InStock)),
        unit: Set(draft.unit),
        expiration_date: Set(draft.expiration_date),
        purchase_date: Set(draft.purchase_date),
        image_url: Set(draft.image_url),
        notes: Set(draft.notes),
        created_by: Set(draft.created_by),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Applies a partial update to an existing item and bumps `updated_at`.
pub async fn update_item(
    db: &DatabaseConnection,
    item_id: i64,
    patch: UpdateItem,
) -> Result<item::Model> {
    let existing = Item::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("item", item_id))?;

    let mut model: item::ActiveModel = existing.into();

    if let Some(name) = patch.name {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Item name cannot be empty".to_string(),
            });
        }
        model.name = Set(name.trim().to_string());
    }
    if let Some(description) = patch.description {
        model.description = Set(Some(description));
    }
    if let Some(quantity) = patch.quantity {
        model.quantity = Set(Some(quantity));
    }
    if let Some(min_quantity) = patch.min_quantity {
        model.min_quantity = Set(Some(min_quantity));
    }
    if let Some(status) = patch.status {
        model.status = Set(status);
    }
    if let Some(unit) = patch.unit {
        model.unit = Set(Some(unit));
    }
    if let Some(expiration_date) = patch.expiration_date {
        model.expiration_date = Set(Some(expiration_date));
    }
    if let Some(purchase_date) = patch.purchase_date {
        model.purchase_date = Set(Some(purchase_date));
    }
    if let Some(image_url) = patch.image_url {
        model.image_url = Set(Some(image_url));
    }
    if let Some(notes) = patch.notes {
        model.notes = Set(Some(notes));
    }
    model.updated_at = Set(chrono::Utc::now());

    let result = model.update(db).await?;
    Ok(result)
}

/// Deletes an item and its category/tag join rows in one transaction.
pub async fn delete_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    ItemCategory::delete_many()
        .filter(item_category::Column::ItemId.eq(item_id))
        .exec(&txn)
        .await?;
    ItemTag::delete_many()
        .filter(item_tag::Column::ItemId.eq(item_id))
        .exec(&txn)
        .await?;

    let result = Item::delete_by_id(item_id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("item", item_id));
    }

    txn.commit().await?;
    Ok(())
}

/// Ensures an item row exists on the given connection.
async fn ensure_item_exists<C>(db: &C, item_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    Item::find_by_id(item_id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| Error::not_found("item", item_id))
}

/// Associates an item with a category.
///
/// Both sides must exist; the join row is created with a fresh timestamp.
pub async fn add_item_to_category(
    db: &DatabaseConnection,
    item_id: i64,
    category_id: i64,
) -> Result<item_category::Model> {
    ensure_item_exists(db, item_id).await?;
    Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("category", category_id))?;

    let join = item_category::ActiveModel {
        item_id: Set(item_id),
        category_id: Set(category_id),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let result = join.insert(db).await?;
    Ok(result)
}

/// Removes the association between an item and a category.
///
/// Removing an association that does not exist is a no-op, matching the
/// delete-by-compound-key semantics of the store.
pub async fn remove_item_from_category(
    db: &DatabaseConnection,
    item_id: i64,
    category_id: i64,
) -> Result<()> {
    ItemCategory::delete_many()
        .filter(item_category::Column::ItemId.eq(item_id))
        .filter(item_category::Column::CategoryId.eq(category_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Associates an item with a tag.
pub async fn add_tag_to_item(
    db: &DatabaseConnection,
    item_id: i64,
    tag_id: i64,
) -> Result<item_tag::Model> {
    ensure_item_exists(db, item_id).await?;
    Tag::find_by_id(tag_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("tag", tag_id))?;

    let join = item_tag::ActiveModel {
        item_id: Set(item_id),
        tag_id: Set(tag_id),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let result = join.insert(db).await?;
    Ok(result)
}

/// Removes the association between an item and a tag. No-op when absent.
pub async fn remove_tag_from_item(
    db: &DatabaseConnection,
    item_id: i64,
    tag_id: i64,
) -> Result<()> {
    ItemTag::delete_many()
        .filter(item_tag::Column::ItemId.eq(item_id))
        .filter(item_tag::Column::TagId.eq(tag_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Removes every category association of an item.
pub async fn remove_all_categories_from_item(
    db: &DatabaseConnection,
    item_id: i64,
) -> Result<()> {
    ItemCategory::delete_many()
        .filter(item_category::Column::ItemId.eq(item_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Removes every tag association of an item.
pub async fn remove_all_tags_from_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    ItemTag::delete_many()
        .filter(item_tag::Column::ItemId.eq(item_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Replaces an item's full category set in one transaction.
///
/// The previous delete-all-then-reinsert steps commit together, so a failure
/// can never leave the item with a half-replaced association set.
pub async fn set_item_categories(
    db: &DatabaseConnection,
    item_id: i64,
    category_ids: &[i64],
) -> Result<()> {
    let txn = db.begin().await?;

    ensure_item_exists(&txn, item_id).await?;
    ItemCategory::delete_many()
        .filter(item_category::Column::ItemId.eq(item_id))
        .exec(&txn)
        .await?;

    let now = chrono::Utc::now();
    for &category_id in category_ids {
        Category::find_by_id(category_id)
            .one(&txn)
            .await?
            .ok_or_else(|| Error::not_found("category", category_id))?;

        let join = item_category::ActiveModel {
            item_id: Set(item_id),
            category_id: Set(category_id),
            created_at: Set(now),
            ..Default::default()
        };
        join.insert(&txn).await?;
    }

    txn.commit().await?;
    Ok(())
}

/// Replaces an item's full tag set in one transaction.
pub async fn set_item_tags(db: &DatabaseConnection, item_id: i64, tag_ids: &[i64]) -> Result<()> {
    let txn = db.begin().await?;

    ensure_item_exists(&txn, item_id).await?;
    ItemTag::delete_many()
        .filter(item_tag::Column::ItemId.eq(item_id))
        .exec(&txn)
        .await?;

    let now = chrono::Utc::now();
    for &tag_id in tag_ids {
        Tag::find_by_id(tag_id)
            .one(&txn)
            .await?
            .ok_or_else(|| Error::not_found("tag", tag_id))?;

        let join = item_tag::ActiveModel {
            item_id: Set(item_id),
            tag_id: Set(tag_id),
            created_at: Set(now),
            ..Default::default()
        };
        join.insert(&txn).await?;
    }

    txn.commit().await?;
    Ok(())
}
