//! Orchestration of a full generation run.
//!
//! The [`DatasetGenerator`] validates a [`SeedConfig`](crate::config::SeedConfig)
//! once and then produces complete datasets of users, items and demands.

mod dataset;

pub use dataset::{Dataset, DatasetGenerator, DatasetMetrics, Phase, PhaseTiming, SeedOutput};
