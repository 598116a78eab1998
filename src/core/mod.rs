//! Core functionality for interval-related EDA analysis.
//!
//! This module contains:
//! - NaN-tolerant aggregation primitives
//! - Per-interval feature computation and the analysis entry point
//! - Result record and result table types

pub mod interval;
pub mod record;
pub mod stats;

// Re-export commonly used items
pub use interval::{analyze_intervals, compute_interval_features, DEFAULT_SAMPLING_RATE};
pub use record::{IntervalFeatures, ResultTable};
pub use stats::{nan_mean, nan_std, nan_sum};
