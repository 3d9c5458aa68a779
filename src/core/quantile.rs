use crate::error::{ChartError, ChartResult};

/// Quantile color bucketing over a sample of values.
///
/// Thresholds follow the R-7 quantile definition (linear interpolation
/// between closest ranks), so `n` buckets produce `n - 1` thresholds.
/// A value falls in the bucket equal to the number of thresholds `<=` it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileScale {
    thresholds: Vec<f64>,
    bucket_count: usize,
}

impl QuantileScale {
    pub fn new(values: &[f64], bucket_count: usize) -> ChartResult<Self> {
        if bucket_count == 0 {
            return Err(ChartError::InvalidData(
                "quantile scale needs at least one bucket".to_owned(),
            ));
        }

        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        sorted.sort_by(f64::total_cmp);

        let thresholds = if sorted.is_empty() {
            Vec::new()
        } else {
            (1..bucket_count)
                .map(|index| quantile_sorted(&sorted, index as f64 / bucket_count as f64))
                .collect()
        };

        Ok(Self {
            thresholds,
            bucket_count,
        })
    }

    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Bucket index in `0..bucket_count` for `value`.
    #[must_use]
    pub fn bucket(&self, value: f64) -> usize {
        if self.thresholds.is_empty() || value.is_nan() {
            return 0;
        }
        self.thresholds
            .partition_point(|threshold| *threshold <= value)
            .min(self.bucket_count - 1)
    }
}

fn quantile_sorted(sorted: &[f64], probability: f64) -> f64 {
    let last = sorted.len() - 1;
    let position = last as f64 * probability;
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(last);
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
