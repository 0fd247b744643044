//! Category registry: product templates and price bounds per category.
//!
//! The set of categories is closed ([`Category`]); a [`CategoryCatalog`] can
//! only be built when every category has at least one template and a valid
//! price range, so lookups after construction never fail.

mod templates;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::SeedError;
use crate::random::RandomSource;

/// Marketplace item category, matching the `category` column values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Books,
    Furniture,
    Clothing,
    Beauty,
    Appliance,
    Sports,
    Others,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Category; 8] = [
        Category::Electronics,
        Category::Books,
        Category::Furniture,
        Category::Clothing,
        Category::Beauty,
        Category::Appliance,
        Category::Sports,
        Category::Others,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Books => "books",
            Category::Furniture => "furniture",
            Category::Clothing => "clothing",
            Category::Beauty => "beauty",
            Category::Appliance => "appliance",
            Category::Sports => "sports",
            Category::Others => "others",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// A curated (title, description) pair for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTemplate {
    pub title: String,
    pub description: String,
}

impl ProductTemplate {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Price bounds for a category, in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Finite, `0 <= min < max`, with at least one whole cent in between.
    fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min >= 0.0
            && self.min < self.max
            && (self.min * 100.0).ceil() <= (self.max * 100.0).floor()
    }
}

/// Templates and price range for one category, as configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub price_range: PriceRange,
    pub templates: Vec<ProductTemplate>,
}

/// Raw category table; validated into a [`CategoryCatalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogConfig(pub BTreeMap<Category, CategoryConfig>);

impl Default for CatalogConfig {
    fn default() -> Self {
        Self(templates::default_catalog())
    }
}

#[derive(Debug, Clone)]
struct CategoryEntry {
    price_range: PriceRange,
    templates: Vec<ProductTemplate>,
}

/// Validated category registry.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    entries: Vec<CategoryEntry>,
}

impl CategoryCatalog {
    /// Builds a catalog, rejecting any category without templates or with a
    /// missing or malformed price range.
    pub fn new(config: &CatalogConfig) -> Result<Self, SeedError> {
        let mut entries = Vec::with_capacity(Category::ALL.len());

        for category in Category::ALL {
            let Some(entry) = config.0.get(&category) else {
                return Err(SeedError::config(format!(
                    "category '{}' has no catalog entry",
                    category.as_str()
                )));
            };

            if entry.templates.is_empty() {
                return Err(SeedError::config(format!(
                    "category '{}' has no product templates",
                    category.as_str()
                )));
            }

            if !entry.price_range.is_valid() {
                return Err(SeedError::config(format!(
                    "category '{}' has invalid price range ({}, {}); expected 0 <= min < max with a whole cent between",
                    category.as_str(),
                    entry.price_range.min,
                    entry.price_range.max
                )));
            }

            entries.push(CategoryEntry {
                price_range: entry.price_range,
                templates: entry.templates.clone(),
            });
        }

        Ok(Self { entries })
    }

    /// Templates for a category; never empty.
    pub fn templates_for(&self, category: Category) -> &[ProductTemplate] {
        &self.entries[category.index()].templates
    }

    pub fn price_range_for(&self, category: Category) -> PriceRange {
        self.entries[category.index()].price_range
    }

    /// Draws a category uniformly.
    pub fn sample_category(&self, rng: &mut impl RandomSource) -> Category {
        Category::ALL[rng.pick_index(Category::ALL.len())]
    }

    /// Draws one of the category's templates uniformly.
    pub fn sample_template(
        &self,
        category: Category,
        rng: &mut impl RandomSource,
    ) -> &ProductTemplate {
        let templates = self.templates_for(category);
        &templates[rng.pick_index(templates.len())]
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        let entries = Category::ALL
            .iter()
            .map(|category| {
                let (price_range, templates) = templates::builtin_entry(*category);
                CategoryEntry {
                    price_range,
                    templates,
                }
            })
            .collect();
        Self { entries }
    }
}
