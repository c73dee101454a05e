//! Series Types Module
//! Throughput series paired with a shared batch-size axis, plus validation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("series '{label}' has {actual} values but the batch axis has {expected}")]
    LengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },
    #[error("series '{label}' value {value} at index {index} is not positive and finite")]
    NonPositiveThroughput {
        label: String,
        index: usize,
        value: f64,
    },
    #[error("batch axis is empty")]
    EmptyBatchAxis,
    #[error("batch axis is not strictly increasing at index {index}")]
    BatchAxisNotIncreasing { index: usize },
    #[error("batch size {value} at index {index} is not a power of two")]
    BatchSizeNotPowerOfTwo { index: usize, value: u32 },
}

/// One named sequence of throughput measurements (tokens/second).
#[derive(Debug, Clone)]
pub struct ThroughputSeries {
    pub label: String,
    pub tokens_per_second: Vec<f64>,
}

impl ThroughputSeries {
    pub fn new(label: impl Into<String>, tokens_per_second: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            tokens_per_second,
        }
    }
}

/// The shared batch-size axis and the series plotted against it.
///
/// Built once, validated, rendered, discarded. No mutation after assembly
/// beyond `add_series`.
#[derive(Debug, Clone)]
pub struct ScalingData {
    pub batch_sizes: Vec<u32>,
    pub series: Vec<ThroughputSeries>,
}

impl ScalingData {
    pub fn new(batch_sizes: Vec<u32>) -> Self {
        Self {
            batch_sizes,
            series: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: ThroughputSeries) {
        self.series.push(series);
    }

    /// Series labels in insertion order (the legend order).
    pub fn labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }

    /// Check every precondition the log-log renderer relies on and report
    /// the first violation.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.batch_sizes.is_empty() {
            return Err(DataError::EmptyBatchAxis);
        }

        for (i, &b) in self.batch_sizes.iter().enumerate() {
            if !b.is_power_of_two() {
                return Err(DataError::BatchSizeNotPowerOfTwo { index: i, value: b });
            }
            if i > 0 && b <= self.batch_sizes[i - 1] {
                return Err(DataError::BatchAxisNotIncreasing { index: i });
            }
        }

        for series in &self.series {
            if series.tokens_per_second.len() != self.batch_sizes.len() {
                return Err(DataError::LengthMismatch {
                    label: series.label.clone(),
                    expected: self.batch_sizes.len(),
                    actual: series.tokens_per_second.len(),
                });
            }
            for (i, &v) in series.tokens_per_second.iter().enumerate() {
                if !v.is_finite() || v <= 0.0 {
                    return Err(DataError::NonPositiveThroughput {
                        label: series.label.clone(),
                        index: i,
                        value: v,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ScalingData {
        let mut data = ScalingData::new(vec![1, 2, 4, 8]);
        data.add_series(ThroughputSeries::new("a", vec![1.0, 2.0, 3.0, 4.0]));
        data
    }

    #[test]
    fn valid_data_passes() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn empty_axis_rejected() {
        let data = ScalingData::new(vec![]);
        assert!(matches!(data.validate(), Err(DataError::EmptyBatchAxis)));
    }

    #[test]
    fn length_mismatch_rejected() {
        let mut data = base();
        data.add_series(ThroughputSeries::new("short", vec![1.0, 2.0]));
        assert!(matches!(
            data.validate(),
            Err(DataError::LengthMismatch { actual: 2, expected: 4, .. })
        ));
    }

    #[test]
    fn non_positive_value_rejected() {
        let mut data = base();
        data.add_series(ThroughputSeries::new("zero", vec![1.0, 0.0, 3.0, 4.0]));
        assert!(matches!(
            data.validate(),
            Err(DataError::NonPositiveThroughput { index: 1, .. })
        ));
    }

    #[test]
    fn nan_value_rejected() {
        let mut data = base();
        data.add_series(ThroughputSeries::new("nan", vec![1.0, 2.0, f64::NAN, 4.0]));
        assert!(matches!(
            data.validate(),
            Err(DataError::NonPositiveThroughput { index: 2, .. })
        ));
    }

    #[test]
    fn non_power_of_two_batch_rejected() {
        let data = ScalingData::new(vec![1, 2, 3, 8]);
        assert!(matches!(
            data.validate(),
            Err(DataError::BatchSizeNotPowerOfTwo { index: 2, value: 3 })
        ));
    }

    #[test]
    fn non_increasing_axis_rejected() {
        let data = ScalingData::new(vec![1, 4, 2, 8]);
        assert!(matches!(
            data.validate(),
            Err(DataError::BatchAxisNotIncreasing { index: 2 })
        ));
    }

    #[test]
    fn labels_preserve_insertion_order() {
        let mut data = base();
        data.add_series(ThroughputSeries::new("b", vec![1.0, 1.0, 1.0, 1.0]));
        assert_eq!(data.labels(), vec!["a", "b"]);
    }
}
