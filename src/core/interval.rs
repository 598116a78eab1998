//! Interval-related feature aggregation.
//!
//! This is the analysis entry point: it normalizes the two input shapes
//! (one table, or a labeled collection) into a sequence of per-interval
//! computations, each of which produces one result record.
//!
//! Missing expected channels never abort the analysis. Each one emits a
//! structured warning and records NaN for the affected feature, so a partial
//! upstream pipeline still yields a usable (if sparse) result table.

use crate::core::record::{IntervalFeatures, ResultTable};
use crate::core::stats::{nan_mean, nan_std, nan_sum};
use crate::sympathetic::SympatheticAnalyzer;
use crate::table::{
    IntervalData, IntervalTable, EDA_CLEAN, EDA_RAW, EDA_TONIC, SCR_AMPLITUDE, SCR_PEAKS,
};
use tracing::{debug, warn};

/// Default sampling rate in samples per second.
pub const DEFAULT_SAMPLING_RATE: f64 = 1000.0;

/// Analyze one interval table or a labeled collection of them.
///
/// For single-table input the result has exactly one record and no label.
/// For collection input the result has one record per entry, in entry
/// order, each carrying its interval label. `sampling_rate` is forwarded to
/// the sympathetic analyzer; it does not affect the peak and tonic features.
pub fn analyze_intervals(
    data: impl Into<IntervalData>,
    sampling_rate: f64,
    analyzer: &dyn SympatheticAnalyzer,
) -> ResultTable {
    match data.into() {
        IntervalData::Single(table) => {
            debug!(intervals = 1, "Analyzing single interval");
            let record = compute_interval_features(&table, sampling_rate, analyzer, None);
            ResultTable::from_records(vec![record])
        }
        IntervalData::Collection(entries) => {
            debug!(intervals = entries.len(), "Analyzing interval collection");
            let records = entries
                .iter()
                .map(|(key, table)| {
                    // The table's own label wins; the collection key is the
                    // fallback so every collection row carries a label.
                    let label = table.label().unwrap_or(key).to_string();
                    compute_interval_features(table, sampling_rate, analyzer, Some(label))
                })
                .collect();
            ResultTable::from_records(records)
        }
    }
}

/// Compute the summary features for one interval.
pub fn compute_interval_features(
    table: &IntervalTable,
    sampling_rate: f64,
    analyzer: &dyn SympatheticAnalyzer,
    label: Option<String>,
) -> IntervalFeatures {
    let mut record = IntervalFeatures {
        label,
        ..Default::default()
    };

    // SCR peak count
    if let Some(peaks) = table.channel(SCR_PEAKS) {
        record.scr_peaks_n = nan_sum(peaks);
    } else {
        warn!(
            label = record.label.as_deref(),
            channel = SCR_PEAKS,
            feature = "SCR_Peaks_N",
            "No `SCR_Peaks` channel found, recording NaN for the peak count"
        );
        record.scr_peaks_n = f64::NAN;
    }

    // Mean peak amplitude. An all-NaN channel yields NaN from the empty
    // effective sample, which is distinct from the missing-channel case
    // only in that no warning is emitted.
    if let Some(amplitudes) = table.channel(SCR_AMPLITUDE) {
        record.scr_peaks_amplitude_mean = nan_mean(amplitudes);
    } else {
        warn!(
            label = record.label.as_deref(),
            channel = SCR_AMPLITUDE,
            feature = "SCR_Peaks_Amplitude_Mean",
            "No `SCR_Amplitude` channel found, recording NaN for the mean amplitude"
        );
        record.scr_peaks_amplitude_mean = f64::NAN;
    }

    // Tonic variability, omitted (not marked missing) without the channel
    if let Some(tonic) = table.channel(EDA_TONIC) {
        record.eda_tonic_sd = Some(nan_std(tonic));
    }

    // Sympathetic features from the cleaned signal, falling back to raw.
    // With neither channel present this feature group is silently skipped.
    let sympathetic_signal = table
        .channel(EDA_CLEAN)
        .or_else(|| table.channel(EDA_RAW));
    if let Some(signal) = sympathetic_signal {
        record
            .sympathetic
            .extend(analyzer.analyze(signal, sampling_rate));
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sympathetic::NoSympathetic;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// Records the signal it was handed, so tests can assert on channel
    /// selection.
    struct RecordingAnalyzer {
        seen: RefCell<Vec<Vec<f64>>>,
    }

    impl RecordingAnalyzer {
        fn new() -> Self {
            Self {
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl SympatheticAnalyzer for RecordingAnalyzer {
        fn analyze(&self, signal: &[f64], sampling_rate: f64) -> BTreeMap<String, f64> {
            self.seen.borrow_mut().push(signal.to_vec());
            BTreeMap::from([
                ("EDA_Sympathetic".to_string(), 0.05),
                ("EDA_SympatheticN".to_string(), sampling_rate),
            ])
        }
    }

    fn peaks_table() -> IntervalTable {
        IntervalTable::from_channels([
            (SCR_PEAKS, vec![1.0, 0.0, 1.0, f64::NAN, 1.0]),
            (SCR_AMPLITUDE, vec![f64::NAN, 2.0, 4.0, 0.0, f64::NAN]),
        ])
        .unwrap()
    }

    #[test]
    fn test_peak_count_is_nan_tolerant_sum() {
        let record = compute_interval_features(&peaks_table(), 1000.0, &NoSympathetic, None);
        assert_eq!(record.scr_peaks_n, 3.0);
    }

    #[test]
    fn test_amplitude_mean_excludes_nan() {
        let table =
            IntervalTable::from_channels([(SCR_AMPLITUDE, vec![f64::NAN, 2.0, 4.0])]).unwrap();
        let record = compute_interval_features(&table, 1000.0, &NoSympathetic, None);
        assert!((record.scr_peaks_amplitude_mean - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_channels_record_nan() {
        let record =
            compute_interval_features(&IntervalTable::new(), 1000.0, &NoSympathetic, None);
        assert!(record.scr_peaks_n.is_nan());
        assert!(record.scr_peaks_amplitude_mean.is_nan());
    }

    #[test]
    fn test_all_nan_amplitude_yields_nan_not_missing() {
        let table =
            IntervalTable::from_channels([(SCR_AMPLITUDE, vec![f64::NAN, f64::NAN])]).unwrap();
        let record = compute_interval_features(&table, 1000.0, &NoSympathetic, None);
        assert!(record.scr_peaks_amplitude_mean.is_nan());
    }

    #[test]
    fn test_tonic_sd_omitted_without_channel() {
        let record = compute_interval_features(&peaks_table(), 1000.0, &NoSympathetic, None);
        assert_eq!(record.eda_tonic_sd, None);
    }

    #[test]
    fn test_tonic_sd_present_with_channel() {
        let table = IntervalTable::from_channels([(
            EDA_TONIC,
            vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0],
        )])
        .unwrap();
        let record = compute_interval_features(&table, 1000.0, &NoSympathetic, None);
        assert!((record.eda_tonic_sd.unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_clean_signal_preferred_over_raw() {
        let table = IntervalTable::from_channels([
            (EDA_CLEAN, vec![0.1, 0.2, 0.3]),
            (EDA_RAW, vec![9.0, 9.0, 9.0]),
        ])
        .unwrap();
        let analyzer = RecordingAnalyzer::new();

        let record = compute_interval_features(&table, 100.0, &analyzer, None);
        assert_eq!(analyzer.seen.borrow().as_slice(), &[vec![0.1, 0.2, 0.3]]);
        assert_eq!(record.sympathetic["EDA_Sympathetic"], 0.05);
        assert_eq!(record.sympathetic["EDA_SympatheticN"], 100.0);
    }

    #[test]
    fn test_raw_signal_used_as_fallback() {
        let table = IntervalTable::from_channels([(EDA_RAW, vec![9.0, 9.0, 9.0])]).unwrap();
        let analyzer = RecordingAnalyzer::new();

        compute_interval_features(&table, 1000.0, &analyzer, None);
        assert_eq!(analyzer.seen.borrow().as_slice(), &[vec![9.0, 9.0, 9.0]]);
    }

    #[test]
    fn test_no_signal_channel_skips_sympathetic() {
        let analyzer = RecordingAnalyzer::new();
        let record =
            compute_interval_features(&peaks_table(), 1000.0, &analyzer, None);
        assert!(analyzer.seen.borrow().is_empty());
        assert!(record.sympathetic.is_empty());
    }

    #[test]
    fn test_single_input_has_one_unlabeled_row() {
        let result = analyze_intervals(peaks_table(), DEFAULT_SAMPLING_RATE, &NoSympathetic);
        assert_eq!(result.len(), 1);
        assert_eq!(result.records()[0].label, None);
    }

    #[test]
    fn test_collection_preserves_order_and_labels() {
        let data: IntervalData = vec![
            ("A".to_string(), peaks_table().with_label("Baseline")),
            ("B".to_string(), peaks_table()),
        ]
        .into();

        let result = analyze_intervals(data, DEFAULT_SAMPLING_RATE, &NoSympathetic);
        assert_eq!(result.len(), 2);
        // Table label when set, collection key otherwise
        assert_eq!(result.records()[0].label.as_deref(), Some("Baseline"));
        assert_eq!(result.records()[1].label.as_deref(), Some("B"));
    }
}
