//! Item condition grades and their price multipliers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::SeedError;
use crate::random::RandomSource;

/// Physical condition of a listed item, best first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like_new",
            Condition::Good => "good",
            Condition::Fair => "fair",
        }
    }
}

/// Raw condition → multiplier table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionConfig(pub BTreeMap<Condition, f64>);

impl Default for ConditionConfig {
    fn default() -> Self {
        Self(BTreeMap::from([
            (Condition::New, 1.0),
            (Condition::LikeNew, 0.85),
            (Condition::Good, 0.65),
            (Condition::Fair, 0.45),
        ]))
    }
}

/// Validated multiplier table.
///
/// Every condition has a multiplier in `(0, 1]`, strictly decreasing from
/// `new` to `fair`.
#[derive(Debug, Clone)]
pub struct ConditionModel {
    multipliers: [f64; 4],
}

impl ConditionModel {
    pub fn new(config: &ConditionConfig) -> Result<Self, SeedError> {
        let mut multipliers = [0.0; 4];

        for (slot, condition) in Condition::ALL.iter().enumerate() {
            let Some(&multiplier) = config.0.get(condition) else {
                return Err(SeedError::config(format!(
                    "condition '{}' has no price multiplier",
                    condition.as_str()
                )));
            };

            if !(multiplier > 0.0 && multiplier <= 1.0) {
                return Err(SeedError::config(format!(
                    "condition '{}' multiplier {multiplier} is outside (0, 1]",
                    condition.as_str()
                )));
            }

            if slot > 0 && multiplier >= multipliers[slot - 1] {
                return Err(SeedError::config(format!(
                    "condition '{}' multiplier {multiplier} must be lower than '{}'",
                    condition.as_str(),
                    Condition::ALL[slot - 1].as_str()
                )));
            }

            multipliers[slot] = multiplier;
        }

        Ok(Self { multipliers })
    }

    pub fn multiplier_for(&self, condition: Condition) -> f64 {
        self.multipliers[condition as usize]
    }

    /// Draws a condition uniformly.
    pub fn sample_condition(&self, rng: &mut impl RandomSource) -> Condition {
        Condition::ALL[rng.pick_index(Condition::ALL.len())]
    }
}

impl Default for ConditionModel {
    fn default() -> Self {
        Self {
            multipliers: [1.0, 0.85, 0.65, 0.45],
        }
    }
}
