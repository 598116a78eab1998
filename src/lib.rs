//! EDA Intervals - interval-related feature aggregation for electrodermal
//! activity signals.
//!
//! This library summarizes longer stretches of pre-processed EDA data
//! (typically > 10 seconds, such as resting-state recordings) into a small
//! set of interval-level features: SCR peak count, mean peak amplitude,
//! tonic variability, and whatever sympathetic-activity features an external
//! analyzer provides.
//!
//! It is a feature-aggregation layer, not a signal-processing engine:
//! cleaning, peak detection, and the sympathetic index itself are upstream
//! or external concerns.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        eda-intervals                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐      │
//! │  │ IntervalData │──▶│  NaN-safe    │──▶│ ResultTable  │      │
//! │  │ (1..n tables)│   │ aggregation  │   │ (1 row each) │      │
//! │  └──────────────┘   └──────────────┘   └──────────────┘      │
//! │                            │                                 │
//! │                            ▼                                 │
//! │                 ┌─────────────────────┐                      │
//! │                 │ SympatheticAnalyzer │  (external seam)     │
//! │                 └─────────────────────┘                      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use eda_intervals::{
//!     analyze_intervals, IntervalTable, NoSympathetic, DEFAULT_SAMPLING_RATE,
//! };
//! use eda_intervals::table::{SCR_AMPLITUDE, SCR_PEAKS};
//!
//! let table = IntervalTable::from_channels([
//!     (SCR_PEAKS, vec![1.0, 0.0, 1.0]),
//!     (SCR_AMPLITUDE, vec![0.4, f64::NAN, 0.6]),
//! ])
//! .expect("channels share one length");
//!
//! let result = analyze_intervals(table, DEFAULT_SAMPLING_RATE, &NoSympathetic);
//! assert_eq!(result.records()[0].scr_peaks_n, 2.0);
//! ```

pub mod core;
pub mod sympathetic;
pub mod table;

// Re-export key types at crate root for convenience
pub use crate::core::{
    analyze_intervals, compute_interval_features, nan_mean, nan_std, nan_sum, IntervalFeatures,
    ResultTable, DEFAULT_SAMPLING_RATE,
};
pub use sympathetic::{NoSympathetic, SympatheticAnalyzer};
pub use table::{IntervalData, IntervalTable, TableError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
