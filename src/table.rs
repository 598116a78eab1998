//! Interval table types for processed EDA signal data.
//!
//! An [`IntervalTable`] holds the named numeric channels of one processed
//! signal interval (typically the output of an upstream EDA processing
//! pipeline). Tables are rectangular: every channel carries the same number
//! of samples, enforced at construction time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Binary indicator channel marking detected SCR peaks.
pub const SCR_PEAKS: &str = "SCR_Peaks";
/// Per-sample SCR amplitude channel (meaningful mainly at peak samples).
pub const SCR_AMPLITUDE: &str = "SCR_Amplitude";
/// Slow-varying tonic component of the EDA signal.
pub const EDA_TONIC: &str = "EDA_Tonic";
/// Cleaned full EDA signal (preferred input for sympathetic analysis).
pub const EDA_CLEAN: &str = "EDA_Clean";
/// Raw full EDA signal (fallback when no cleaned signal is present).
pub const EDA_RAW: &str = "EDA_Raw";

/// One interval's worth of time-aligned signal channels.
///
/// Channels are optional; feature computation checks for presence by name
/// and degrades gracefully when an expected channel is missing. The optional
/// label identifies the interval when tables are analyzed as a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalTable {
    /// Named sample sequences, all of equal length
    channels: BTreeMap<String, Vec<f64>>,
    /// Interval label, carried into the result record for collection input
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl IntervalTable {
    /// Create an empty table with no channels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from an iterator of `(name, samples)` pairs.
    pub fn from_channels<I, N>(channels: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (N, Vec<f64>)>,
        N: Into<String>,
    {
        let mut table = Self::new();
        for (name, samples) in channels {
            table.insert_channel(name, samples)?;
        }
        Ok(table)
    }

    /// Insert a channel, rejecting lengths that disagree with channels
    /// already present.
    pub fn insert_channel<N: Into<String>>(
        &mut self,
        name: N,
        samples: Vec<f64>,
    ) -> Result<(), TableError> {
        let name = name.into();
        if let Some(expected) = self.channels.values().map(Vec::len).next() {
            if samples.len() != expected {
                return Err(TableError::LengthMismatch {
                    channel: name,
                    expected,
                    actual: samples.len(),
                });
            }
        }
        self.channels.insert(name, samples);
        Ok(())
    }

    /// Set the interval label, builder-style.
    pub fn with_label<L: Into<String>>(mut self, label: L) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get a channel's samples by name.
    pub fn channel(&self, name: &str) -> Option<&[f64]> {
        self.channels.get(name).map(Vec::as_slice)
    }

    /// Check whether a channel is present.
    pub fn has_channel(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Iterate over the names of all channels present.
    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }

    /// Number of samples per channel (0 for a table with no channels).
    pub fn len(&self) -> usize {
        self.channels.values().map(Vec::len).next().unwrap_or(0)
    }

    /// Check if the table has no channels.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// The interval label, if one was set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Input to interval analysis: one table, or an ordered labeled collection.
///
/// Both variants funnel into the same per-interval computation; the result
/// table has one row for a single table and one row per entry (in entry
/// order) for a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IntervalData {
    /// A single processed interval.
    Single(IntervalTable),
    /// Labeled intervals, analyzed in order.
    Collection(Vec<(String, IntervalTable)>),
}

impl From<IntervalTable> for IntervalData {
    fn from(table: IntervalTable) -> Self {
        IntervalData::Single(table)
    }
}

impl From<Vec<(String, IntervalTable)>> for IntervalData {
    fn from(entries: Vec<(String, IntervalTable)>) -> Self {
        IntervalData::Collection(entries)
    }
}

impl FromIterator<(String, IntervalTable)> for IntervalData {
    fn from_iter<I: IntoIterator<Item = (String, IntervalTable)>>(iter: I) -> Self {
        IntervalData::Collection(iter.into_iter().collect())
    }
}

/// Errors that can occur while building an interval table.
#[derive(Debug)]
pub enum TableError {
    /// A channel's length disagrees with the channels already inserted.
    LengthMismatch {
        channel: String,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::LengthMismatch {
                channel,
                expected,
                actual,
            } => write!(
                f,
                "Channel `{channel}` has {actual} samples, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for TableError {}
