/// Database configuration and connection management
pub mod database;

/// Default category/tag seeding from config.toml
pub mod seed;

/// Application settings from environment variables
pub mod settings;
