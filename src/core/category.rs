//! Category business logic - CRUD for the category classification axis.
//!
//! Categories are plain rows; their item associations live in the
//! `item_categories` join and are managed from [`crate::core::item`].

use crate::{
    entities::{Category, ItemCategory, category, item_category},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Fields for creating a category. Only the name is required.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CreateCategory {
    /// Required display name
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub created_by: Option<String>,
}

/// Partial update for a category; fields left as `None` keep their value.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Retrieves all categories ordered alphabetically by name.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a single category by id.
pub async fn get_category(db: &DatabaseConnection, category_id: i64) -> Result<category::Model> {
    Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("category", category_id))
}

/// Creates a new category, performing input validation.
pub async fn create_category(
    db: &DatabaseConnection,
    draft: CreateCategory,
) -> Result<category::Model> {
    if draft.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Category name cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let model = category::ActiveModel {
        name: Set(draft.name.trim().to_string()),
        description: Set(draft.description),
        color: Set(draft.color),
        icon: Set(draft.icon),
        created_by: Set(draft.created_by),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Applies a partial update to an existing category and bumps `updated_at`.
pub async fn update_category(
    db: &DatabaseConnection,
    category_id: i64,
    patch: UpdateCategory,
) -> Result<category::Model> {
    let existing = Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("category", category_id))?;

    let mut model: category::ActiveModel = existing.into();

    if let Some(name) = patch.name {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Category name cannot be empty".to_string(),
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
    if let Some(icon) = patch.icon {
        model.icon = Set(Some(icon));
    }
    model.updated_at = Set(chrono::Utc::now());

    let result = model.update(db).await?;
    Ok(result)
}

/// Deletes a category and its item join rows in one transaction.
///
/// Items themselves are untouched; ones whose last category association goes
/// away simply become uncategorized.
pub async fn delete_category(db: &DatabaseConnection, category_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    ItemCategory::delete_many()
        .filter(item_category::Column::CategoryId.eq(category_id))
        .exec(&txn)
        .await?;

    let result = Category::delete_by_id(category_id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("category", category_id));
    }

    txn.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::item::{add_item_to_category, get_item};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_category_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_category(
            &db,
            CreateCategory {
                name: "  ".to_string(),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_categories_ordered_by_name() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_category(&db, "Snacks").await?;
        create_test_category(&db, "Dairy").await?;
        create_test_category(&db, "Produce").await?;

        let categories = list_categories(&db).await?;
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Dairy", "Produce", "Snacks"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_category() -> Result<()> {
        let db = setup_test_db().await?;

        let category = create_test_category(&db, "Dairy").await?;
        let updated = update_category(
            &db,
            category.id,
            UpdateCategory {
                color: Some("#88ccff".to_string()),
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(updated.name, "Dairy");
        assert_eq!(updated.color.as_deref(), Some("#88ccff"));
        assert!(updated.updated_at > category.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_category_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_category(&db, 999, UpdateCategory::default()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "category",
                ..
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_cascades_joins_only() -> Result<()> {
        let db = setup_test_db().await?;

        let item = create_test_item(&db, "Milk").await?;
        let dairy = create_test_category(&db, "Dairy").await?;
        add_item_to_category(&db, item.id, dairy.id).await?;

        delete_category(&db, dairy.id).await?;

        // The item survives, now uncategorized
        let fetched = get_item(&db, item.id).await?;
        assert!(fetched.categories.is_empty());

        let result = get_category(&db, dairy.id).await;
        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = delete_category(&db, 999).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "category",
                ..
            }
        ));

        Ok(())
    }
}
