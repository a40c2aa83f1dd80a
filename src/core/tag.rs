//! Tag business logic - CRUD for the tag classification axis.
//!
//! Mirrors [`crate::core::category`]; tags have no icon and no update
//! timestamp, matching the entity shape.

use crate::{
    entities::{ItemTag, Tag, item_tag, tag},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Fields for creating a tag. Only the name is required.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CreateTag {
    /// Required display name
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_by: Option<String>,
}

/// Partial update for a tag; fields left as `None` keep their value.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateTag {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Retrieves all tags ordered alphabetically by name.
pub async fn list_tags(db: &DatabaseConnection) -> Result<Vec<tag::Model>> {
    Tag::find()
        .order_by_asc(tag::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a single tag by id.
pub async fn get_tag(db: &DatabaseConnection, tag_id: i64) -> Result<tag::Model> {
    Tag::find_by_id(tag_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("tag", tag_id))
}

/// Creates a new tag, performing input validation.
pub async fn create_tag(db: &DatabaseConnection, draft: CreateTag) -> Result<tag::Model> {
    if draft.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Tag name cannot be empty".to_string(),
        });
    }

    let model = tag::ActiveModel {
        name: Set(draft.name.trim().to_string()),
        description: Set(draft.description),
        color: Set(draft.color),
        created_by: Set(draft.created_by),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Applies a partial update to an existing tag.
pub async fn update_tag(
    db: &DatabaseConnection,
    tag_id: i64,
    patch: UpdateTag,
) -> Result<tag::Model> {
    let existing = Tag::find_by_id(tag_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("tag", tag_id))?;

    let mut model: tag::ActiveModel = existing.into();

    if let Some(name) = patch.name {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Tag name cannot be empty".to_string(),
            });
        }
        model.name = Set(name.trim().to_string());
    }
    if let Some(description) = patch.description {
        model.description = Set(Some(description));
    }
    if let Some(color) = patch.color {
        model.color = Set(Some(color));
    }

    let result = model.update(db).await?;
    Ok(result)
}

/// Deletes a tag and its item join rows in one transaction.
pub async fn delete_tag(db: &DatabaseConnection, tag_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    ItemTag::delete_many()
        .filter(item_tag::Column::TagId.eq(tag_id))
        .exec(&txn)
        .await?;

    let result = Tag::delete_by_id(tag_id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("tag", tag_id));
    }

    txn.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::item::{add_tag_to_item, get_item};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_tag_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_tag(
            &db,
            CreateTag {
                name: String::new(),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_tags_ordered_by_name() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_tag(&db, "organic").await?;
        create_test_tag(&db, "bulk").await?;

        let tags = list_tags(&db).await?;
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["bulk", "organic"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_tag_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_tag(&db, 999, UpdateTag::default()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "tag", .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_tag_cascades_joins_only() -> Result<()> {
        let db = setup_test_db().await?;

        let item = create_test_item(&db, "Milk").await?;
        let organic = create_test_tag(&db, "organic").await?;
        add_tag_to_item(&db, item.id, organic.id).await?;

        delete_tag(&db, organic.id).await?;

        let fetched = get_item(&db, item.id).await?;
        assert!(fetched.tags.is_empty());

        let result = get_tag(&db, organic.id).await;
        assert!(result.is_err());

        Ok(())
    }
}
