//! ecocounts - per-category actor counts from the circular-economy actors CSV
//!
//! Reads the "Que faire de mes objets/déchets" actors export and writes a JSON
//! document with, for each application category, the number of locations and
//! two estimated auxiliary counts.

pub mod aggregator;
pub mod categories;
pub mod config;
pub mod data;
pub mod logging;
pub mod report;
pub mod stats;

pub use aggregator::{Aggregation, Aggregator, AggregatorError};
pub use config::RunConfig;
