//! Category-scoped image allocation.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::catalog::Category;
use crate::errors::SeedError;
use crate::random::RandomSource;

/// Candidate image URLs per category.
#[derive(Debug, Clone, Default)]
pub struct ImagePools {
    pools: BTreeMap<Category, Vec<String>>,
}

impl ImagePools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds pools from a flat file listing. A file belongs to every
    /// category whose name prefixes the file name; each pool is sorted and
    /// mapped to `{url_prefix}/{file}`.
    pub fn from_file_names<I, S>(names: I, url_prefix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        names.sort();

        let prefix = url_prefix.trim_end_matches('/');
        let mut pools = Self::new();

        for category in Category::ALL {
            let urls = names
                .iter()
                .filter(|name| name.starts_with(category.as_str()))
                .map(|name| format!("{prefix}/{name}"));
            pools.insert(category, urls);
        }

        pools
    }

    /// Adds URLs to a category's pool, skipping duplicates.
    pub fn insert(&mut self, category: Category, urls: impl IntoIterator<Item = String>) {
        let pool = self.pools.entry(category).or_default();
        for url in urls {
            if !pool.contains(&url) {
                pool.push(url);
            }
        }
    }

    /// Candidates for a category; empty when none were supplied.
    pub fn pool(&self, category: Category) -> &[String] {
        self.pools.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of candidates across all categories.
    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-run image allocator.
///
/// Within a category no URL is handed out twice until the whole pool has
/// been used; after that the pool is drawn from again without restriction.
/// The used set is shared across categories and lives only as long as the
/// assigner.
#[derive(Debug)]
pub struct ImageAssigner {
    pools: ImagePools,
    used: HashSet<String>,
}

impl ImageAssigner {
    pub fn new(pools: ImagePools) -> Self {
        Self {
            pools,
            used: HashSet::new(),
        }
    }

    /// Picks an image URL for a record in `category`.
    pub fn assign(
        &mut self,
        category: Category,
        rng: &mut impl RandomSource,
    ) -> Result<String, SeedError> {
        let pool = self.pools.pool(category);
        if pool.is_empty() {
            return Err(SeedError::ResourceUnavailable { category });
        }

        let mut available: Vec<&String> =
            pool.iter().filter(|url| !self.used.contains(*url)).collect();

        if available.is_empty() {
            debug!(
                category = category.as_str(),
                pool_size = pool.len(),
                "Image pool exhausted, reusing images"
            );
            available = pool.iter().collect();
        }

        let url = available[rng.pick_index(available.len())].clone();
        self.used.insert(url.clone());
        Ok(url)
    }

    /// Number of distinct URLs handed out so far.
    pub fn used_count(&self) -> usize {
        self.used.len()
    }
}
