//! Configuration types for dataset generation.

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogConfig;
use crate::condition::ConditionConfig;
use crate::errors::SeedError;
use crate::generators::{DemandGenConfig, StatusConfig, TimestampConfig, UserGenConfig};
use crate::sql::TimestampStyle;

/// Output-side settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Public URL prefix under which the image directory is served.
    pub image_url_prefix: String,
    pub timestamp_style: TimestampStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image_url_prefix: "/demo-assets/real".to_string(),
            timestamp_style: TimestampStyle::Absolute,
        }
    }
}

/// Configuration for a generation run.
///
/// Every field has a default, so a JSON file only needs the keys it
/// overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of users to generate.
    pub user_count: u32,

    /// Number of items to generate.
    pub item_count: usize,

    /// Number of demands to generate.
    pub demand_count: usize,

    /// Random seed. `None` draws fresh entropy, so runs differ.
    pub seed: Option<u64>,

    pub users: UserGenConfig,
    pub demands: DemandGenConfig,
    pub timestamps: TimestampConfig,

    /// Category → templates and price range.
    pub catalog: CatalogConfig,

    /// Condition → price multiplier.
    pub conditions: ConditionConfig,

    /// Item status → probability, in boundary order.
    pub item_statuses: StatusConfig,

    pub output: OutputConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_count: 40,
            item_count: 130,
            demand_count: 15,
            seed: None,
            users: UserGenConfig::default(),
            demands: DemandGenConfig::default(),
            timestamps: TimestampConfig::default(),
            catalog: CatalogConfig::default(),
            conditions: ConditionConfig::default(),
            item_statuses: StatusConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SeedConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the random source for a run: seeded when `seed` is set,
    /// otherwise from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
