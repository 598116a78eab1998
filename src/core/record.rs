//! Result records for interval-related EDA features.
//!
//! One [`IntervalFeatures`] record is produced per analyzed interval. The
//! fixed peak/tonic features use their canonical column names when
//! serialized; sympathetic features are flattened in under whatever names
//! the external analyzer returned.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary features for one analyzed interval.
///
/// `scr_peaks_n` and `scr_peaks_amplitude_mean` use NaN as the missing-value
/// marker when their source channel is absent. `eda_tonic_sd` is omitted
/// entirely (not marked missing) when the table has no tonic channel.
/// Records are value objects: created fresh per call and never mutated after
/// being added to a result table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalFeatures {
    /// Interval label, present only for collection input
    #[serde(rename = "Label", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Number of detected SCR peaks (NaN-tolerant sum of the indicator)
    #[serde(rename = "SCR_Peaks_N")]
    pub scr_peaks_n: f64,
    /// Mean SCR peak amplitude (NaN entries excluded)
    #[serde(rename = "SCR_Peaks_Amplitude_Mean")]
    pub scr_peaks_amplitude_mean: f64,
    /// Standard deviation of the tonic component, when present
    #[serde(rename = "EDA_Tonic_SD", skip_serializing_if = "Option::is_none")]
    pub eda_tonic_sd: Option<f64>,
    /// Features returned by the sympathetic analyzer, keyed by its names
    #[serde(flatten)]
    pub sympathetic: BTreeMap<String, f64>,
}

/// Result of an interval analysis: one record per interval, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable(Vec<IntervalFeatures>);

impl ResultTable {
    /// Create a result table from records in their final order.
    pub fn from_records(records: Vec<IntervalFeatures>) -> Self {
        Self(records)
    }

    /// The records, in analysis order.
    pub fn records(&self) -> &[IntervalFeatures] {
        &self.0
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, IntervalFeatures> {
        self.0.iter()
    }

    /// Render the table as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl IntoIterator for ResultTable {
    type Item = IntervalFeatures;
    type IntoIter = std::vec::IntoIter<IntervalFeatures>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a IntervalFeatures;
    type IntoIter = std::slice::Iter<'a, IntervalFeatures>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
