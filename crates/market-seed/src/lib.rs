//! Demo data generation for the secondhand marketplace.
//!
//! This crate synthesizes users, listed items and buyer demands whose fields
//! agree with each other: prices follow category and condition, images come
//! from the item's category without repeats, and statuses follow a realistic
//! mix. The result is rendered as insert statements for the `users`, `items`
//! and `demands` tables.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use market_seed::prelude::*;
//!
//! let config = SeedConfig::default().with_seed(12345);
//! let generator = DatasetGenerator::from_config(&config)?;
//! let pools = ImageDirectory::new("public/demo-assets/real", "/demo-assets/real").scan()?;
//!
//! let output = generator.run(&pools, OffsetDateTime::now_utc(), &mut config.rng())?;
//! println!("{}", output.sql);
//! ```

pub mod assets;
pub mod builders;
pub mod catalog;
pub mod condition;
pub mod config;
pub mod errors;
pub mod generators;
pub mod random;
pub mod sql;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::assets::ImageDirectory;
    pub use crate::builders::{
        Dataset, DatasetGenerator, DatasetMetrics, Phase, PhaseTiming, SeedOutput,
    };
    pub use crate::catalog::{Category, CategoryCatalog, PriceRange, ProductTemplate};
    pub use crate::condition::{Condition, ConditionModel};
    pub use crate::config::{OutputConfig, SeedConfig};
    pub use crate::errors::SeedError;
    pub use crate::generators::{
        GeneratedDemand, GeneratedItem, GeneratedUser, ImageAssigner, ImagePools, ItemStatus,
        Price, PriceSynthesizer, StatusSampler, TimestampDeriver,
    };
    pub use crate::random::{RandomSource, ScriptedSource};
    pub use crate::sql::{SqlRecord, SqlRenderer, TimestampStyle, escape_literal, unescape_literal};
    pub use time::OffsetDateTime;
}
