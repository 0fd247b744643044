//! Category- and condition-coherent price synthesis.

use std::fmt;

use crate::catalog::{Category, CategoryCatalog};
use crate::condition::{Condition, ConditionModel};
use crate::errors::SeedError;
use crate::random::RandomSource;

/// A price with two decimal places, stored as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: i64,
}

impl Price {
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn as_f64(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Whole-cent bounds inside `[low, high]`, or `None` when no cent fits.
    pub(crate) fn cent_bounds(low: f64, high: f64) -> Option<(i64, i64)> {
        let floor = (low * 100.0).ceil() as i64;
        let ceiling = (high * 100.0).floor() as i64;
        (floor <= ceiling).then_some((floor, ceiling))
    }

    /// Rounds `value` to the nearest cent, kept inside `[low, high]`. The
    /// range must hold at least one whole cent.
    fn round_within(value: f64, low: f64, high: f64) -> Self {
        let cents = (value * 100.0).round() as i64;
        match Self::cent_bounds(low, high) {
            Some((floor, ceiling)) => Self {
                cents: cents.clamp(floor, ceiling),
            },
            None => Self {
                cents: (low * 100.0).floor() as i64,
            },
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Derives bounded prices from the category catalog and condition table.
#[derive(Debug, Clone)]
pub struct PriceSynthesizer {
    catalog: CategoryCatalog,
    conditions: ConditionModel,
    demand_price_cap: f64,
}

impl PriceSynthesizer {
    /// Creates a synthesizer. `demand_price_cap` scales each category's
    /// maximum to give the ceiling for buyer demands; every category's
    /// minimum must stay at or below that ceiling.
    pub fn new(
        catalog: CategoryCatalog,
        conditions: ConditionModel,
        demand_price_cap: f64,
    ) -> Result<Self, SeedError> {
        if !(demand_price_cap > 0.0 && demand_price_cap <= 1.0) {
            return Err(SeedError::config(format!(
                "demand price cap {demand_price_cap} is outside (0, 1]"
            )));
        }

        let prices = Self {
            catalog,
            conditions,
            demand_price_cap,
        };

        for category in Category::ALL {
            let min = prices.catalog.price_range_for(category).min;

            for condition in Condition::ALL {
                let max = prices.effective_max(category, condition);
                if Price::cent_bounds(min, max).is_none() {
                    return Err(SeedError::config(format!(
                        "category '{}' in condition '{}' has no whole-cent price between {} and {}",
                        category.as_str(),
                        condition.as_str(),
                        min,
                        max
                    )));
                }
            }

            let demand_max = prices.demand_max(category);
            if Price::cent_bounds(min, demand_max).is_none() {
                return Err(SeedError::config(format!(
                    "category '{}' minimum {} exceeds demand ceiling {}",
                    category.as_str(),
                    min,
                    demand_max
                )));
            }
        }

        Ok(prices)
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn conditions(&self) -> &ConditionModel {
        &self.conditions
    }

    /// Condition-adjusted upper bound for an item price.
    pub fn effective_max(&self, category: Category, condition: Condition) -> f64 {
        let range = self.catalog.price_range_for(category);
        range.min + (range.max - range.min) * self.conditions.multiplier_for(condition)
    }

    /// Upper bound for a buyer's expected price.
    pub fn demand_max(&self, category: Category) -> f64 {
        self.catalog.price_range_for(category).max * self.demand_price_cap
    }

    /// Samples an item price in `[min, effective_max]`.
    pub fn synthesize_item_price(
        &self,
        category: Category,
        condition: Condition,
        rng: &mut impl RandomSource,
    ) -> Price {
        let min = self.catalog.price_range_for(category).min;
        let max = self.effective_max(category, condition);
        Price::round_within(rng.uniform_f64(min, max), min, max)
    }

    /// Samples a demand's expected price in `[min, max * cap]`.
    pub fn synthesize_demand_price(&self, category: Category, rng: &mut impl RandomSource) -> Price {
        let min = self.catalog.price_range_for(category).min;
        let max = self.demand_max(category);
        Price::round_within(rng.uniform_f64(min, max), min, max)
    }
}

impl Default for PriceSynthesizer {
    fn default() -> Self {
        Self {
            catalog: CategoryCatalog::default(),
            conditions: ConditionModel::default(),
            demand_price_cap: 0.7,
        }
    }
}
