//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. Data-access
//! failures propagate immediately to the caller; the only default
//! substitution anywhere is the empty role set for an absent identity.

use thiserror::Error;

/// Crate-wide error taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    /// A single-row lookup, update, or delete matched no record.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind the lookup was against ("item", "category", ...)
        entity: &'static str,
        /// The identifier that failed to match
        id: String,
    },

    /// A create request was missing or violated a required field.
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// An upstream provider (the weather API) reported failure.
    #[error("Upstream error: {message}")]
    Upstream {
        /// Provider-reported failure detail
        message: String,
    },

    /// The database itself reported failure (connectivity, constraint, SQL).
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Outbound HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for the [`Error::NotFound`] variant used throughout the
    /// data-access layer.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
