//! Default seed script - writes the demo data migration
//!
//! Run with:
//! ```
//! SEED_ASSET_DIR=frontend/public/demo-assets/real \
//! SEED_OUTPUT=backend/src/main/resources/db/migration/V9__seed_demo_data.sql \
//!     cargo run -p market-seed --bin seed
//! ```
//!
//! Environment:
//! - `SEED_CONFIG`: optional JSON config file (see `SeedConfig`)
//! - `SEED_ASSET_DIR`: directory of category-prefixed images
//! - `SEED_OUTPUT`: output file, or `-` for stdout
//! - `SEED_RNG_SEED`: optional seed overriding the config

use std::io::Write;

use anyhow::Context;
use market_seed::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match std::env::var("SEED_CONFIG") {
        Ok(path) => SeedConfig::from_json_file(&path)
            .with_context(|| format!("Failed to load config from {path}"))?,
        Err(_) => SeedConfig::default(),
    };

    if let Ok(seed) = std::env::var("SEED_RNG_SEED") {
        let seed: u64 = seed
            .parse()
            .with_context(|| format!("SEED_RNG_SEED is not a valid u64: {seed}"))?;
        config = config.with_seed(seed);
    }

    let asset_dir = std::env::var("SEED_ASSET_DIR")
        .unwrap_or_else(|_| "frontend/public/demo-assets/real".to_string());
    let output_path =
        std::env::var("SEED_OUTPUT").unwrap_or_else(|_| "V9__seed_demo_data.sql".to_string());

    let generator = DatasetGenerator::from_config(&config)?;
    let pools = ImageDirectory::new(&asset_dir, config.output.image_url_prefix.clone())
        .scan()
        .with_context(|| format!("Failed to read image directory {asset_dir}"))?;

    let mut rng = config.rng();
    let output = generator.run(&pools, OffsetDateTime::now_utc(), &mut rng)?;

    // Only touch the destination once the whole script has rendered
    if output_path == "-" {
        std::io::stdout().write_all(output.sql.as_bytes())?;
    } else {
        std::fs::write(&output_path, &output.sql)
            .with_context(|| format!("Failed to write {output_path}"))?;
        tracing::info!("Wrote {}", output_path);
    }

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Users: {}", output.dataset.users.len());
    tracing::info!("  Items: {}", output.dataset.items.len());
    tracing::info!("  Demands: {}", output.dataset.demands.len());
    tracing::info!("  Distinct images: {}", output.dataset.metrics.distinct_images);

    Ok(())
}
