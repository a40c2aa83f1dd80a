//! Default classification loading from config.toml.
//!
//! The categories and tags defined in config.toml are used to seed the
//! database on first run or when they are missing, so a fresh household
//! starts with a usable classification instead of an empty one. Seeding is
//! idempotent: existing names are left alone.

use crate::{
    core::{category, tag},
    entities::{Category, CategoryColumn, Tag, TagColumn},
    errors::{Error, Result},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// Categories to seed
    #[serde(default)]
    pub categories: Vec<CategorySeed>,
    /// Tags to seed
    #[serde(default)]
    pub tags: Vec<TagSeed>,
}

/// Configuration for a single default category
#[derive(Debug, Deserialize, Clone)]
pub struct CategorySeed {
    /// Name of the category
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional display color
    pub color: Option<String>,
    /// Optional display icon
    pub icon: Option<String>,
}

/// Configuration for a single default tag
#[derive(Debug, Deserialize, Clone)]
pub struct TagSeed {
    /// Name of the tag
    pub name: String,
    /// Optional display color
    pub color: Option<String>,
}

/// Loads the seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Seeds the default categories and tags, skipping names that already exist.
pub async fn seed_defaults(db: &DatabaseConnection, config: &SeedConfig) -> Result<()> {
    let mut created = 0usize;

    for seed in &config.categories {
        let exists = Category::find()
            .filter(CategoryColumn::Name.eq(seed.name.as_str()))
            .one(db)
            .await?
            .is_some();
        if exists {
            continue;
        }

        category::create_category(
            db,
            category::CreateCategory {
                name: seed.name.clone(),
                description: seed.description.clone(),
                color: seed.color.clone(),
                icon: seed.icon.clone(),
                created_by: None,
            },
        )
        .await?;
        created += 1;
    }

    for seed in &config.tags {
        let exists = Tag::find()
            .filter(TagColumn::Name.eq(seed.name.as_str()))
            .one(db)
            .await?
            .is_some();
        if exists {
            continue;
        }

        tag::create_tag(
            db,
            tag::CreateTag {
                name: seed.name.clone(),
                description: None,
                color: seed.color.clone(),
                created_by: None,
            },
        )
        .await?;
        created += 1;
    }

    info!("Seeded {created} default categories/tags");
    Ok(())
}
