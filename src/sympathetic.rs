//! Sympathetic-activity analysis seam.
//!
//! The sympathetic index itself is computed by an external collaborator
//! (e.g. a frequency-band analysis of the conductance signal); this crate
//! only defines the call contract and merges whatever named features the
//! collaborator returns into the result record.

use std::collections::BTreeMap;

/// External analyzer producing named sympathetic-activity features from a
/// conductance signal span.
///
/// Implementations receive the preferred signal channel (`EDA_Clean` when
/// present, otherwise `EDA_Raw`) together with its sampling rate in samples
/// per second, and return a flat mapping of feature name to value. No
/// further structure is assumed, and the contract has no error channel: an
/// analyzer that cannot produce features for a span returns an empty map.
pub trait SympatheticAnalyzer {
    fn analyze(&self, signal: &[f64], sampling_rate: f64) -> BTreeMap<String, f64>;
}

/// Analyzer that produces no sympathetic features.
///
/// Use this when no external collaborator is available; result records then
/// carry only the peak and tonic features.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSympathetic;

impl SympatheticAnalyzer for NoSympathetic {
    fn analyze(&self, _signal: &[f64], _sampling_rate: f64) -> BTreeMap<String, f64> {
        BTreeMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sympathetic_returns_empty() {
        let analyzer = NoSympathetic;
        let features = analyzer.analyze(&[0.1, 0.2, 0.3], 1000.0);
        assert!(features.is_empty());
    }
}
