//! Numeric summary statistics used by imputation and scaling actions.

use serde::{Deserialize, Serialize};

/// Statistics over the present values of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    /// Number of present values.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator); zero for a single value.
    pub std: f64,
}

impl NumericStatistics {
    /// Compute statistics for a set of values. Returns `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        // Running mean: a plain sum overflows for large finite values.
        let mean = values.iter().enumerate().fold(0.0, |mean, (i, &v)| {
            let k = (i + 1) as f64;
            mean - mean / k + v / k
        });
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let mid = count / 2;
        let median = if count % 2 == 0 {
            sorted[mid - 1] / 2.0 + sorted[mid] / 2.0
        } else {
            sorted[mid]
        };

        let std = if count > 1 {
            let variance =
                values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            std,
        })
    }

    /// Width of the value range. Infinite when `max - min` overflows.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check if min-max scaling is defined: a finite, non-zero range.
    pub fn has_usable_range(&self) -> bool {
        let range = self.range();
        range.is_finite() && range > 0.0
    }

    /// Check if z-scores are defined: a finite, non-zero spread.
    pub fn has_usable_std(&self) -> bool {
        self.std.is_finite() && self.std > 0.0
    }

    /// Min-max scale a value into `[0, 1]`.
    ///
    /// `None` if the range is zero or overflows, or the result is not finite.
    pub fn min_max(&self, value: f64) -> Option<f64> {
        if !self.has_usable_range() {
            return None;
        }
        Some((value - self.min) / self.range()).filter(|x| x.is_finite())
    }

    /// Calculate the z-score for a value.
    ///
    /// `None` if the spread is zero or overflows, or the result is not finite.
    pub fn z_score(&self, value: f64) -> Option<f64> {
        if !self.has_usable_std() {
            return None;
        }
        Some((value - self.mean) / self.std).filter(|x| x.is_finite())
    }
}
