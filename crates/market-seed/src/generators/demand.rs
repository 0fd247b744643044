//! Buyer demand generation.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::price::{Price, PriceSynthesizer};
use super::status::DemandStatus;
use super::timestamp::{DerivedTimestamps, TimestampDeriver};
use crate::catalog::Category;
use crate::errors::SeedError;
use crate::random::RandomSource;

/// Generated demand data ready for serialization.
#[derive(Debug, Clone)]
pub struct GeneratedDemand {
    /// References a generated user (1-based).
    pub buyer_id: u32,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub expected_price: Price,
    pub status: DemandStatus,
    pub timestamps: DerivedTimestamps,
}

/// Configuration for demand generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandGenConfig {
    /// Prepended to the template title.
    pub title_prefix: String,
    /// `{price}` is replaced with the expected price.
    pub description_template: String,
    /// Fraction of the category maximum a buyer will offer at most.
    pub price_cap: f64,
}

impl Default for DemandGenConfig {
    fn default() -> Self {
        Self {
            title_prefix: "Wanted: ".to_string(),
            description_template:
                "Serious buyer, ideally with the original box and receipt. Looking to pay around {price}."
                    .to_string(),
            price_cap: 0.7,
        }
    }
}

/// Generates buyer demands modelled on catalog products.
#[derive(Debug, Clone)]
pub struct DemandGenerator {
    config: DemandGenConfig,
    prices: PriceSynthesizer,
    timestamps: TimestampDeriver,
}

impl DemandGenerator {
    pub fn new(
        config: DemandGenConfig,
        prices: PriceSynthesizer,
        timestamps: TimestampDeriver,
    ) -> Self {
        Self {
            config,
            prices,
            timestamps,
        }
    }

    /// Generates a single demand posted by one of `user_count` users.
    pub fn generate(
        &self,
        user_count: u32,
        now: OffsetDateTime,
        rng: &mut impl RandomSource,
    ) -> Result<GeneratedDemand, SeedError> {
        let buyer_id = rng.uniform_int(1, i64::from(user_count)) as u32;

        let catalog = self.prices.catalog();
        let category = catalog.sample_category(rng);
        let template = catalog.sample_template(category, rng);

        let expected_price = self.prices.synthesize_demand_price(category, rng);
        let timestamps = self.timestamps.derive_timestamps(now, rng)?;

        Ok(GeneratedDemand {
            buyer_id,
            category,
            title: format!("{}{}", self.config.title_prefix, template.title),
            description: self
                .config
                .description_template
                .replace("{price}", &expected_price.to_string()),
            expected_price,
            status: DemandStatus::Active,
            timestamps,
        })
    }

    /// Generates `count` demands.
    pub fn generate_batch(
        &self,
        count: usize,
        user_count: u32,
        now: OffsetDateTime,
        rng: &mut impl RandomSource,
    ) -> Result<Vec<GeneratedDemand>, SeedError> {
        (0..count)
            .map(|_| self.generate(user_count, now, rng))
            .collect()
    }
}

impl Default for DemandGenerator {
    fn default() -> Self {
        Self {
            config: DemandGenConfig::default(),
            prices: PriceSynthesizer::default(),
            timestamps: TimestampDeriver::for_demands(),
        }
    }
}
