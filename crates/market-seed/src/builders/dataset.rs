//! Dataset generation run: users, then items, then demands, then statements.

use std::time::Instant;

use time::OffsetDateTime;
use tracing::info;

use crate::catalog::CategoryCatalog;
use crate::condition::ConditionModel;
use crate::config::SeedConfig;
use crate::errors::SeedError;
use crate::generators::{
    DemandGenerator, GeneratedDemand, GeneratedItem, GeneratedUser, ImageAssigner, ImagePools,
    ItemGenerator, PriceSynthesizer, StatusSampler, TimestampDeriver, UserGenerator,
};
use crate::random::RandomSource;
use crate::sql::SqlRenderer;

/// Sequential phases of a run. Each phase finishes before the next starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    GenerateUsers,
    GenerateItems,
    GenerateDemands,
    Serialize,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::GenerateUsers => "generate_users",
            Phase::GenerateItems => "generate_items",
            Phase::GenerateDemands => "generate_demands",
            Phase::Serialize => "serialize",
        }
    }
}

/// A completed phase and how long it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTiming {
    pub phase: Phase,
    pub elapsed_ms: u64,
}

impl PhaseTiming {
    fn since(phase: Phase, start: Instant) -> Self {
        Self {
            phase,
            elapsed_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Metrics from a generation run.
#[derive(Debug, Clone)]
pub struct DatasetMetrics {
    /// Time spent generating records (milliseconds).
    pub generation_time_ms: u64,
    /// Distinct image URLs assigned to items.
    pub distinct_images: usize,
    /// Phases completed so far, in execution order.
    pub phases: Vec<PhaseTiming>,
}

/// One self-consistent set of generated records.
#[derive(Debug)]
pub struct Dataset {
    pub users: Vec<GeneratedUser>,
    pub items: Vec<GeneratedItem>,
    pub demands: Vec<GeneratedDemand>,
    /// Instant all timestamps are relative to.
    pub generated_at: OffsetDateTime,
    pub metrics: DatasetMetrics,
}

impl Dataset {
    /// Renders the dataset as a statement script: one insert per non-empty
    /// table, each preceded by a comment with its row count.
    pub fn to_sql(&self, renderer: &SqlRenderer) -> Result<String, SeedError> {
        let mut sections = vec!["-- Demo marketplace data: users, items, demands".to_string()];

        let inserts = [
            ("Users", self.users.len(), renderer.render_insert(&self.users)?),
            ("Items", self.items.len(), renderer.render_insert(&self.items)?),
            ("Demands", self.demands.len(), renderer.render_insert(&self.demands)?),
        ];

        for (label, count, statement) in inserts {
            if let Some(statement) = statement {
                sections.push(format!("-- {label} ({count})\n{statement}"));
            }
        }

        Ok(sections.join("\n\n") + "\n")
    }
}

/// A finished run: the records and their rendered statements.
#[derive(Debug)]
pub struct SeedOutput {
    pub dataset: Dataset,
    pub sql: String,
}

/// Produces datasets from a validated configuration.
///
/// All lookup tables are checked when the generator is built. Each call to
/// [`generate`](Self::generate) owns a fresh [`ImageAssigner`], so runs never
/// share state.
///
/// # Example
///
/// ```rust,ignore
/// let config = SeedConfig::default().with_seed(12345);
/// let generator = DatasetGenerator::from_config(&config)?;
/// let pools = ImageDirectory::new("public/demo-assets/real", "/demo-assets/real").scan()?;
/// let output = generator.run(&pools, OffsetDateTime::now_utc(), &mut config.rng())?;
/// std::fs::write("V9__seed_demo_data.sql", output.sql)?;
/// ```
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    user_count: u32,
    item_count: usize,
    demand_count: usize,
    users: UserGenerator,
    items: ItemGenerator,
    demands: DemandGenerator,
    renderer: SqlRenderer,
}

impl DatasetGenerator {
    /// Validates `config` and builds the generator.
    pub fn from_config(config: &SeedConfig) -> Result<Self, SeedError> {
        if config.user_count == 0 && (config.item_count > 0 || config.demand_count > 0) {
            return Err(SeedError::config(
                "items and demands need at least one user to reference",
            ));
        }

        let catalog = CategoryCatalog::new(&config.catalog)?;
        let conditions = ConditionModel::new(&config.conditions)?;
        let prices = PriceSynthesizer::new(catalog, conditions, config.demands.price_cap)?;
        let statuses = StatusSampler::new(&config.item_statuses)?;
        let item_times = TimestampDeriver::new(config.timestamps.items)?;
        let demand_times = TimestampDeriver::new(config.timestamps.demands)?;

        Ok(Self {
            user_count: config.user_count,
            item_count: config.item_count,
            demand_count: config.demand_count,
            users: UserGenerator::with_config(config.users.clone()),
            items: ItemGenerator::new(prices.clone(), statuses, item_times),
            demands: DemandGenerator::new(config.demands.clone(), prices, demand_times),
            renderer: SqlRenderer::new(config.output.timestamp_style),
        })
    }

    pub fn renderer(&self) -> &SqlRenderer {
        &self.renderer
    }

    /// Generates users, items and demands. Any failure aborts the run and no
    /// records are returned.
    pub fn generate(
        &self,
        images: &ImagePools,
        now: OffsetDateTime,
        rng: &mut impl RandomSource,
    ) -> Result<Dataset, SeedError> {
        let start = Instant::now();
        let mut assigner = ImageAssigner::new(images.clone());
        let mut phases = Vec::with_capacity(4);

        info!("Phase {}: {} users", Phase::GenerateUsers.as_str(), self.user_count);
        let phase_start = Instant::now();
        let users = self.users.generate_batch(self.user_count);
        phases.push(PhaseTiming::since(Phase::GenerateUsers, phase_start));

        info!("Phase {}: {} items", Phase::GenerateItems.as_str(), self.item_count);
        let phase_start = Instant::now();
        let items = self.items.generate_batch(
            self.item_count,
            self.user_count,
            now,
            &mut assigner,
            rng,
        )?;
        phases.push(PhaseTiming::since(Phase::GenerateItems, phase_start));

        info!(
            "Phase {}: {} demands",
            Phase::GenerateDemands.as_str(),
            self.demand_count
        );
        let phase_start = Instant::now();
        let demands = self
            .demands
            .generate_batch(self.demand_count, self.user_count, now, rng)?;
        phases.push(PhaseTiming::since(Phase::GenerateDemands, phase_start));

        let metrics = DatasetMetrics {
            generation_time_ms: start.elapsed().as_millis() as u64,
            distinct_images: assigner.used_count(),
            phases,
        };
        info!(
            "Generated {} users, {} items, {} demands in {}ms ({} distinct images)",
            users.len(),
            items.len(),
            demands.len(),
            metrics.generation_time_ms,
            metrics.distinct_images
        );

        Ok(Dataset {
            users,
            items,
            demands,
            generated_at: now,
            metrics,
        })
    }

    /// Generates a dataset and renders it with the configured renderer.
    pub fn run(
        &self,
        images: &ImagePools,
        now: OffsetDateTime,
        rng: &mut impl RandomSource,
    ) -> Result<SeedOutput, SeedError> {
        let mut dataset = self.generate(images, now, rng)?;

        info!("Phase {}", Phase::Serialize.as_str());
        let phase_start = Instant::now();
        let sql = dataset.to_sql(&self.renderer)?;
        dataset
            .metrics
            .phases
            .push(PhaseTiming::since(Phase::Serialize, phase_start));

        Ok(SeedOutput { dataset, sql })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pools() -> ImagePools {
        let names: Vec<String> = Category::ALL
            .iter()
            .flat_map(|c| (1..=4).map(move |i| format!("{}_{i}.jpg", c.as_str())))
            .collect();
        ImagePools::from_file_names(names, "/demo-assets/real")
    }

    #[test]
    fn test_default_run_counts() {
        let config = SeedConfig::default().with_seed(12345);
        let generator = DatasetGenerator::from_config(&config).unwrap();
        let mut rng = config.rng();

        let output = generator
            .run(&pools(), OffsetDateTime::now_utc(), &mut rng)
            .unwrap();

        assert_eq!(output.dataset.users.len(), 40);
        assert_eq!(output.dataset.items.len(), 130);
        assert_eq!(output.dataset.demands.len(), 15);
        assert!(output.sql.contains("-- Users (40)"));
        assert!(output.sql.contains("-- Items (130)"));
        assert!(output.sql.contains("-- Demands (15)"));
        assert_eq!(output.sql.matches("INSERT INTO").count(), 3);
        assert_eq!(output.dataset.metrics.distinct_images, 32);

        let phases: Vec<Phase> = output
            .dataset
            .metrics
            .phases
            .iter()
            .map(|timing| timing.phase)
            .collect();
        assert_eq!(
            phases,
            [
                Phase::GenerateUsers,
                Phase::GenerateItems,
                Phase::GenerateDemands,
                Phase::Serialize,
            ]
        );
    }

    #[test]
    fn test_generate_stops_before_serialize() {
        let config = SeedConfig::default().with_seed(5);
        let generator = DatasetGenerator::from_config(&config).unwrap();

        let dataset = generator
            .generate(&pools(), OffsetDateTime::now_utc(), &mut config.rng())
            .unwrap();
        let last = dataset.metrics.phases.last().map(|timing| timing.phase);
        assert_eq!(last, Some(Phase::GenerateDemands));
    }

    #[test]
    fn test_oversized_age_window_is_configuration_error() {
        let mut config = SeedConfig::default();
        config.timestamps.items.max_days_ago = 10_000_000;

        assert!(matches!(
            DatasetGenerator::from_config(&config),
            Err(SeedError::Configuration(_))
        ));
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let config = SeedConfig::default().with_seed(99);
        let generator = DatasetGenerator::from_config(&config).unwrap();
        let now = OffsetDateTime::now_utc();

        let a = generator.run(&pools(), now, &mut config.rng()).unwrap();
        let b = generator.run(&pools(), now, &mut config.rng()).unwrap();
        assert_eq!(a.sql, b.sql);
    }

    #[test]
    fn test_missing_images_abort_run() {
        let config = SeedConfig::default();
        let generator = DatasetGenerator::from_config(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let result = generator.run(&ImagePools::new(), OffsetDateTime::now_utc(), &mut rng);
        assert!(matches!(result, Err(SeedError::ResourceUnavailable { .. })));
    }

    #[test]
    fn test_zero_users_with_items_is_configuration_error() {
        let config = SeedConfig {
            user_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            DatasetGenerator::from_config(&config),
            Err(SeedError::Configuration(_))
        ));
    }

    #[test]
    fn test_empty_tables_are_skipped() {
        let config = SeedConfig {
            user_count: 5,
            item_count: 0,
            demand_count: 0,
            ..Default::default()
        };
        let generator = DatasetGenerator::from_config(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        let output = generator
            .run(&ImagePools::new(), OffsetDateTime::now_utc(), &mut rng)
            .unwrap();
        assert_eq!(output.sql.matches("INSERT INTO").count(), 1);
        assert!(!output.sql.contains("-- Items"));
    }
}
