//! Marketplace item generation.

use time::OffsetDateTime;

use super::image::ImageAssigner;
use super::price::{Price, PriceSynthesizer};
use super::status::{ItemStatus, StatusSampler};
use super::timestamp::{DerivedTimestamps, TimestampDeriver};
use crate::catalog::Category;
use crate::condition::Condition;
use crate::errors::SeedError;
use crate::random::RandomSource;

/// Generated item data ready for serialization.
#[derive(Debug, Clone)]
pub struct GeneratedItem {
    /// References a generated user (1-based).
    pub seller_id: u32,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub condition: Condition,
    pub status: ItemStatus,
    pub image_url: String,
    pub timestamps: DerivedTimestamps,
}

/// Generates listed items whose price, condition, status and image agree
/// with their category.
#[derive(Debug, Clone)]
pub struct ItemGenerator {
    prices: PriceSynthesizer,
    statuses: StatusSampler,
    timestamps: TimestampDeriver,
}

impl ItemGenerator {
    pub fn new(
        prices: PriceSynthesizer,
        statuses: StatusSampler,
        timestamps: TimestampDeriver,
    ) -> Self {
        Self {
            prices,
            statuses,
            timestamps,
        }
    }

    /// Generates a single item sold by one of `user_count` users.
    pub fn generate(
        &self,
        user_count: u32,
        now: OffsetDateTime,
        images: &mut ImageAssigner,
        rng: &mut impl RandomSource,
    ) -> Result<GeneratedItem, SeedError> {
        let seller_id = rng.uniform_int(1, i64::from(user_count)) as u32;

        let catalog = self.prices.catalog();
        let category = catalog.sample_category(rng);
        let condition = self.prices.conditions().sample_condition(rng);
        let template = catalog.sample_template(category, rng);

        let price = self.prices.synthesize_item_price(category, condition, rng);
        let status = self.statuses.sample_item_status(rng);
        let timestamps = self.timestamps.derive_timestamps(now, rng)?;
        let image_url = images.assign(category, rng)?;

        Ok(GeneratedItem {
            seller_id,
            category,
            title: template.title.clone(),
            description: template.description.clone(),
            price,
            condition,
            status,
            image_url,
            timestamps,
        })
    }

    /// Generates `count` items. Fails on the first item whose category has
    /// no images.
    pub fn generate_batch(
        &self,
        count: usize,
        user_count: u32,
        now: OffsetDateTime,
        images: &mut ImageAssigner,
        rng: &mut impl RandomSource,
    ) -> Result<Vec<GeneratedItem>, SeedError> {
        (0..count)
            .map(|_| self.generate(user_count, now, images, rng))
            .collect()
    }
}

impl Default for ItemGenerator {
    fn default() -> Self {
        Self {
            prices: PriceSynthesizer::default(),
            statuses: StatusSampler::default(),
            timestamps: TimestampDeriver::for_items(),
        }
    }
}
