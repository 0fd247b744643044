//! Example: Preview a small, reproducible dataset.
//!
//! Generates a handful of records against an in-memory image listing and
//! prints the resulting statements plus a price summary per category.
//!
//! Run with:
//! ```
//! cargo run --example preview_dataset
//! ```

use std::collections::BTreeMap;

use market_seed::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig {
        user_count: 8,
        item_count: 20,
        demand_count: 4,
        ..Default::default()
    }
    .with_seed(54321);

    let file_names: Vec<String> = Category::ALL
        .iter()
        .flat_map(|c| (1..=3).map(move |i| format!("{}_{i:02}.jpg", c.as_str())))
        .collect();
    let pools = ImagePools::from_file_names(&file_names, &config.output.image_url_prefix);

    let generator = DatasetGenerator::from_config(&config)?;
    let output = generator.run(&pools, OffsetDateTime::now_utc(), &mut config.rng())?;

    println!("{}", output.sql);

    // Price spread per category
    let mut by_category: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for item in &output.dataset.items {
        by_category
            .entry(item.category.as_str())
            .or_default()
            .push(item.price.as_f64());
    }

    tracing::info!("Item prices by category:");
    for (category, prices) in by_category {
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        tracing::info!("  {category}: {} items, {min:.2} - {max:.2}", prices.len());
    }

    Ok(())
}
