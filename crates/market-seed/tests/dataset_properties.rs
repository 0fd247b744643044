//! End-to-end checks on generated datasets.
//!
//! Every run here uses a seeded `StdRng` and an in-memory image listing, so
//! the tests need no filesystem or database and can run in parallel.

use std::collections::{HashMap, HashSet};

use market_seed::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn pools(per_category: usize) -> ImagePools {
    let names: Vec<String> = Category::ALL
        .iter()
        .flat_map(|c| (1..=per_category).map(move |i| format!("{}_{i:02}.jpg", c.as_str())))
        .collect();
    ImagePools::from_file_names(names, "/demo-assets/real")
}

fn run(config: &SeedConfig, images: &ImagePools) -> SeedOutput {
    let generator = DatasetGenerator::from_config(config).unwrap();
    generator
        .run(images, OffsetDateTime::now_utc(), &mut config.rng())
        .unwrap()
}

#[test]
fn test_forty_users_one_hundred_thirty_items() {
    let config = SeedConfig {
        user_count: 40,
        item_count: 130,
        ..Default::default()
    }
    .with_seed(2024);

    let output = run(&config, &pools(10));

    assert_eq!(output.dataset.users.len(), 40);
    assert_eq!(output.dataset.items.len(), 130);
    for item in &output.dataset.items {
        assert!((1..=40).contains(&item.seller_id));
    }
    for demand in &output.dataset.demands {
        assert!((1..=40).contains(&demand.buyer_id));
    }

    // One row per record in each insert
    let items_section = output
        .sql
        .split("-- Items (130)\n")
        .nth(1)
        .and_then(|rest| rest.split(";\n").next())
        .unwrap();
    assert_eq!(items_section.lines().count(), 131);
}

#[test]
fn test_item_prices_respect_category_and_condition() {
    let config = SeedConfig {
        item_count: 2000,
        ..Default::default()
    }
    .with_seed(7);
    let prices = PriceSynthesizer::default();

    let output = run(&config, &pools(5));

    for item in &output.dataset.items {
        let range = prices.catalog().price_range_for(item.category);
        let effective_max = prices.effective_max(item.category, item.condition);
        let price = item.price.as_f64();

        assert!(price >= range.min, "{price} < {}", range.min);
        assert!(price <= effective_max + 1e-9, "{price} > {effective_max}");
        assert!(price <= range.max);
    }
}

#[test]
fn test_demand_prices_are_capped() {
    let config = SeedConfig {
        demand_count: 2000,
        ..Default::default()
    }
    .with_seed(8);
    let prices = PriceSynthesizer::default();

    let output = run(&config, &pools(5));

    for demand in &output.dataset.demands {
        let range = prices.catalog().price_range_for(demand.category);
        let price = demand.expected_price.as_f64();
        assert!(price >= range.min);
        assert!(price <= range.max * 0.7 + 1e-9);
        assert_eq!(demand.status.as_str(), "active");
    }
}

#[test]
fn test_item_status_frequencies() {
    let config = SeedConfig {
        item_count: 10_000,
        ..Default::default()
    }
    .with_seed(31337);

    let output = run(&config, &pools(5));
    let n = output.dataset.items.len() as f64;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in &output.dataset.items {
        *counts.entry(item.status.as_str()).or_default() += 1;
    }

    let expected = [
        ("active", 0.60),
        ("off", 0.15),
        ("deleted", 0.10),
        ("draft", 0.05),
        ("pending", 0.10),
    ];
    for (status, p) in expected {
        let observed = counts.get(status).copied().unwrap_or(0) as f64 / n;
        assert!(
            (observed - p).abs() < 0.02,
            "{status}: observed {observed:.4}, expected {p}"
        );
    }
}

#[test]
fn test_images_match_category_and_cycle_freshly() {
    let config = SeedConfig {
        item_count: 400,
        ..Default::default()
    }
    .with_seed(55);
    let per_category = 6;

    let output = run(&config, &pools(per_category));

    let mut seen: HashMap<Category, Vec<&str>> = HashMap::new();
    for item in &output.dataset.items {
        let expected_prefix = format!("/demo-assets/real/{}_", item.category.as_str());
        assert!(item.image_url.starts_with(&expected_prefix));
        seen.entry(item.category).or_default().push(&item.image_url);
    }

    for (category, urls) in seen {
        let first_cycle: HashSet<&str> = urls.iter().take(per_category).copied().collect();
        assert_eq!(
            first_cycle.len(),
            urls.len().min(per_category),
            "{} repeated an image before exhausting its pool",
            category.as_str()
        );
    }
}

#[test]
fn test_pool_reuse_after_exhaustion() {
    let images = pools(3);
    let mut assigner = ImageAssigner::new(images.clone());
    let mut rng = StdRng::seed_from_u64(4);

    let first: Vec<String> = (0..3)
        .map(|_| assigner.assign(Category::Furniture, &mut rng).unwrap())
        .collect();
    let distinct: HashSet<&String> = first.iter().collect();
    assert_eq!(distinct.len(), 3);

    // Fourth draw must come from the same pool even though all are used
    let fourth = assigner.assign(Category::Furniture, &mut rng).unwrap();
    assert!(images.pool(Category::Furniture).contains(&fourth));
}

#[test]
fn test_independent_runs_do_not_share_used_images() {
    let config = SeedConfig {
        user_count: 2,
        item_count: 12,
        demand_count: 0,
        ..Default::default()
    };
    let generator = DatasetGenerator::from_config(&config).unwrap();
    let images = pools(3);
    let now = OffsetDateTime::now_utc();

    // A used-set surviving between runs would steer the second run away
    // from the first run's images.
    let a = generator
        .generate(&images, now, &mut StdRng::seed_from_u64(1))
        .unwrap();
    let b = generator
        .generate(&images, now, &mut StdRng::seed_from_u64(1))
        .unwrap();

    let urls = |dataset: &Dataset| -> Vec<String> {
        dataset.items.iter().map(|i| i.image_url.clone()).collect()
    };
    assert_eq!(urls(&a), urls(&b));
}

#[test]
fn test_escaping_survives_into_statements() {
    assert_eq!(escape_literal("Arc'teryx"), "Arc''teryx");
    assert_eq!(unescape_literal(&escape_literal("Arc'teryx")), "Arc'teryx");

    let config = SeedConfig {
        item_count: 3000,
        ..Default::default()
    }
    .with_seed(3);
    let output = run(&config, &pools(5));

    assert!(
        output
            .dataset
            .items
            .iter()
            .any(|item| item.title == "Arc'teryx fleece jacket")
    );
    assert!(output.sql.contains("'Arc''teryx fleece jacket'"));
    assert!(!output.sql.contains("'Arc'teryx"));
}

#[test]
fn test_relative_timestamps() {
    let mut config = SeedConfig {
        user_count: 3,
        item_count: 5,
        demand_count: 2,
        ..Default::default()
    }
    .with_seed(9);
    config.output.timestamp_style = TimestampStyle::RelativeToNow;

    let output = run(&config, &pools(2));

    assert!(output.sql.contains("now() - INTERVAL '"));
    assert!(!output.sql.contains("TIMESTAMP WITH TIME ZONE"));
}

#[test]
fn test_invalid_configuration_is_rejected_before_running() {
    let mut config = SeedConfig::default();
    config.item_statuses.0.pop();

    assert!(matches!(
        DatasetGenerator::from_config(&config),
        Err(SeedError::Configuration(_))
    ));
}

#[test]
fn test_missing_category_images_abort_without_output() {
    let config = SeedConfig::default().with_seed(10);
    let generator = DatasetGenerator::from_config(&config).unwrap();

    let mut images = ImagePools::new();
    images.insert(Category::Books, ["/demo-assets/real/books_01.jpg".to_string()]);

    let result = generator.run(&images, OffsetDateTime::now_utc(), &mut config.rng());
    assert!(matches!(result, Err(SeedError::ResourceUnavailable { .. })));
}
