//! Shared test utilities for `Homer`.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.

use crate::{
    config,
    core::{category, item, tag},
    entities::{self, ItemStatus, Profile, Role, profile, user_role},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test item with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `name` - Item name
///
/// # Defaults
/// * `status`: `in_stock`
/// * everything else unset
pub async fn create_test_item(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::item::Model> {
    item::create_item(
        db,
        item::CreateItem {
            name: name.to_string(),
            ..Default::default()
        },
    )
    .await
}

/// Creates a test item with a specific status and quantity bookkeeping.
/// Use this when a test needs the status and quantity signals to diverge.
pub async fn create_custom_item(
    db: &DatabaseConnection,
    name: &str,
    status: ItemStatus,
    quantity: Option<f64>,
    min_quantity: Option<f64>,
) -> Result<entities::item::Model> {
    item::create_item(
        db,
        item::CreateItem {
            name: name.to_string(),
            status: Some(status),
            quantity,
            min_quantity,
            ..Default::default()
        },
    )
    .await
}

/// Creates a test category with just a name.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    category::create_category(
        db,
        category::CreateCategory {
            name: name.to_string(),
            ..Default::default()
        },
    )
    .await
}

/// Creates a test tag with just a name.
pub async fn create_test_tag(db: &DatabaseConnection, name: &str) -> Result<entities::tag::Model> {
    tag::create_tag(
        db,
        tag::CreateTag {
            name: name.to_string(),
            ..Default::default()
        },
    )
    .await
}

/// Grants a role to a user, creating the profile row on first use.
pub async fn grant_role(
    db: &DatabaseConnection,
    user_id: &str,
    role: Role,
) -> Result<entities::user_role::Model> {
    let now = chrono::Utc::now();

    if Profile::find_by_id(user_id.to_string()).one(db).await?.is_none() {
        let profile = profile::ActiveModel {
            id: Set(user_id.to_string()),
            email: Set(None),
            name: Set(None),
            created_at: Set(now),
        };
        profile.insert(db).await?;
    }

    let assignment = user_role::ActiveModel {
        user_id: Set(user_id.to_string()),
        role: Set(role),
        created_at: Set(now),
        ..Default::default()
    };
    let result = assignment.insert(db).await?;
    Ok(result)
}
