//! Error types for dataset generation.

use thiserror::Error;

use crate::catalog::Category;

#[derive(Debug, Error)]
pub enum SeedError {
    /// The catalog, condition table, status table or counts are unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A record needed an image but its category has no candidates.
    #[error("No images available for category '{}'", .category.as_str())]
    ResourceUnavailable { category: Category },

    /// Offsetting the generation time left the representable date range.
    #[error("Timestamp {days_ago} days before {now} is out of range")]
    TimestampRange {
        now: time::OffsetDateTime,
        days_ago: i64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timestamp formatting error: {0}")]
    Timestamp(#[from] time::error::Format),
}

impl SeedError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
