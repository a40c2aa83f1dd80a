//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Table
//! creation uses `Schema::create_table_from_entity`, so the database schema
//! always matches the entity definitions without hand-written SQL.

use crate::entities::{Category, Item, ItemCategory, ItemTag, Profile, Tag, UserRole};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection using the `DATABASE_URL` environment variable.
///
/// Falls back to a local `SQLite` file when the variable is not set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/homer.sqlite?mode=rwc".to_string());

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let item_table = schema.create_table_from_entity(Item);
    let category_table = schema.create_table_from_entity(Category);
    let tag_table = schema.create_table_from_entity(Tag);
    let item_category_table = schema.create_table_from_entity(ItemCategory);
    let item_tag_table = schema.create_table_from_entity(ItemTag);
    let profile_table = schema.create_table_from_entity(Profile);
    let user_role_table = schema.create_table_from_entity(UserRole);

    db.execute(builder.build(&item_table)).await?;
    db.execute(builder.build(&category_table)).await?;
    db.execute(builder.build(&tag_table)).await?;
    db.execute(builder.build(&item_category_table)).await?;
    db.execute(builder.build(&item_tag_table)).await?;
    db.execute(builder.build(&profile_table)).await?;
    db.execute(builder.build(&user_role_table)).await?;

    Ok(())
}
