//! Item lifecycle status sampling.

use serde::{Deserialize, Serialize};

use crate::errors::SeedError;
use crate::random::RandomSource;

/// Item status options matching the `items.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Active,
    Off,
    Deleted,
    Draft,
    Pending,
}

impl ItemStatus {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Off => "off",
            ItemStatus::Deleted => "deleted",
            ItemStatus::Draft => "draft",
            ItemStatus::Pending => "pending",
        }
    }
}

/// Demand status; demands are always generated as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemandStatus {
    Active,
}

impl DemandStatus {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandStatus::Active => "active",
        }
    }
}

/// Ordered status weights. Order defines the cumulative boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusConfig(pub Vec<(ItemStatus, f64)>);

impl Default for StatusConfig {
    fn default() -> Self {
        // 60% listed, 15% taken down, 10% deleted, 5% drafts, 10% awaiting review
        Self(vec![
            (ItemStatus::Active, 0.60),
            (ItemStatus::Off, 0.15),
            (ItemStatus::Deleted, 0.10),
            (ItemStatus::Draft, 0.05),
            (ItemStatus::Pending, 0.10),
        ])
    }
}

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Maps a unit draw onto statuses through fixed cumulative boundaries.
#[derive(Debug, Clone)]
pub struct StatusSampler {
    /// Upper boundary (exclusive) of each status' slice of `[0, 1)`.
    boundaries: Vec<(ItemStatus, f64)>,
}

impl StatusSampler {
    /// Validates the weights: non-empty, each in `[0, 1]`, summing to 1.
    pub fn new(config: &StatusConfig) -> Result<Self, SeedError> {
        if config.0.is_empty() {
            return Err(SeedError::config("item status distribution is empty"));
        }

        let mut cumulative = 0.0;
        let mut boundaries = Vec::with_capacity(config.0.len());

        for &(status, weight) in &config.0 {
            if !(0.0..=1.0).contains(&weight) {
                return Err(SeedError::config(format!(
                    "status '{}' probability {weight} is outside [0, 1]",
                    status.as_str()
                )));
            }
            if boundaries.iter().any(|(seen, _)| *seen == status) {
                return Err(SeedError::config(format!(
                    "status '{}' appears more than once",
                    status.as_str()
                )));
            }
            cumulative += weight;
            boundaries.push((status, cumulative));
        }

        if (cumulative - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(SeedError::config(format!(
                "item status probabilities sum to {cumulative}, expected 1"
            )));
        }

        // Close the last slice exactly so every draw in [0, 1) maps somewhere
        if let Some(last) = boundaries.last_mut() {
            last.1 = 1.0;
        }

        Ok(Self { boundaries })
    }

    /// Maps `u` in `[0, 1)` to a status.
    pub fn status_for(&self, u: f64) -> ItemStatus {
        self.boundaries
            .iter()
            .find(|(_, upper)| u < *upper)
            .or(self.boundaries.last())
            .map(|(status, _)| *status)
            .unwrap_or(ItemStatus::Active)
    }

    pub fn sample_item_status(&self, rng: &mut impl RandomSource) -> ItemStatus {
        self.status_for(rng.next_unit())
    }
}

impl Default for StatusSampler {
    fn default() -> Self {
        Self {
            boundaries: vec![
                (ItemStatus::Active, 0.60),
                (ItemStatus::Off, 0.75),
                (ItemStatus::Deleted, 0.85),
                (ItemStatus::Draft, 0.90),
                (ItemStatus::Pending, 1.0),
            ],
        }
    }
}
