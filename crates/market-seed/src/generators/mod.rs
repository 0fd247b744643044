//! Entity generators and the samplers they draw from.
//!
//! - [`UserGenerator`]: Generate user accounts
//! - [`ItemGenerator`]: Generate listed items with coherent price, status and image
//! - [`DemandGenerator`]: Generate buyer demands
//! - [`PriceSynthesizer`]: Category- and condition-bounded prices
//! - [`ImageAssigner`]: Non-repeating image allocation per category
//! - [`StatusSampler`]: Item status distribution
//! - [`TimestampDeriver`]: Creation/update timestamps

pub mod demand;
pub mod image;
pub mod item;
pub mod price;
pub mod status;
pub mod timestamp;
pub mod user;

pub use demand::{DemandGenConfig, DemandGenerator, GeneratedDemand};
pub use image::{ImageAssigner, ImagePools};
pub use item::{GeneratedItem, ItemGenerator};
pub use price::{Price, PriceSynthesizer};
pub use status::{DemandStatus, ItemStatus, StatusConfig, StatusSampler};
pub use timestamp::{AgeWindow, DerivedTimestamps, RecordAge, TimestampConfig, TimestampDeriver};
pub use user::{GeneratedUser, UserGenConfig, UserGenerator, UserRole, UserStatus};
