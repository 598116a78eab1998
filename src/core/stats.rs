//! NaN-tolerant aggregation primitives.
//!
//! Processed signal tables routinely carry NaN entries (e.g. amplitude
//! channels that are only defined at peak samples). These reductions exclude
//! NaN entries from the computation instead of propagating them.

/// Sum of all non-NaN entries. NaN entries contribute zero, so an empty or
/// all-NaN slice sums to 0.0.
pub fn nan_sum(values: &[f64]) -> f64 {
    values.iter().filter(|v| !v.is_nan()).sum()
}

/// Mean of all non-NaN entries.
///
/// NaN entries are excluded from both the numerator and the count. A slice
/// with zero non-NaN entries yields NaN, the mean of an empty effective
/// sample.
pub fn nan_mean(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in values {
        if !v.is_nan() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        return f64::NAN;
    }
    sum / count as f64
}

/// Population standard deviation of all non-NaN entries.
///
/// Yields NaN for zero non-NaN entries and 0.0 for a single entry.
pub fn nan_std(values: &[f64]) -> f64 {
    let mean = nan_mean(values);
    if mean.is_nan() {
        return f64::NAN;
    }

    let mut m2 = 0.0;
    let mut count = 0usize;
    for &v in values {
        if !v.is_nan() {
            let d = v - mean;
            m2 += d * d;
            count += 1;
        }
    }
    (m2 / count as f64).sqrt()
}
