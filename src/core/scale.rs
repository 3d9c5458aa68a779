use crate::error::{ChartError, ChartResult};

const TICK_E10: f64 = 7.071_067_811_865_476;
const TICK_E5: f64 = 3.162_277_660_168_379_5;
const TICK_E2: f64 = 1.414_213_562_373_095_1;

/// Continuous linear mapping from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale covering `values`, widening degenerate extents.
    ///
    /// Non-finite samples are ignored. An empty sample set yields `[0, 1]`.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> ChartResult<Self> {
        let mut extent: Option<(f64, f64)> = None;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            extent = Some(match extent {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }

        match extent {
            None => Self::new(0.0, 1.0),
            Some((min, max)) if min == max => Self::new(min - 1.0, max + 1.0),
            Some((min, max)) => Self::new(min, max),
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Extends the domain outwards to round tick boundaries.
    #[must_use]
    pub fn nice(self, tick_count: usize) -> Self {
        let (mut start, mut end) = self.domain();
        let reversed = end < start;
        if reversed {
            std::mem::swap(&mut start, &mut end);
        }

        // Two passes settle the step once the domain has been widened.
        for _ in 0..2 {
            let step = tick_step(start, end, tick_count);
            if !step.is_finite() || step <= 0.0 {
                break;
            }
            start = (start / step).floor() * step;
            end = (end / step).ceil() * step;
        }

        if reversed {
            std::mem::swap(&mut start, &mut end);
        }
        Self {
            domain_start: start,
            domain_end: end,
        }
    }

    /// Returns round tick values inside the domain.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        let (start, end) = self.domain();
        let (min, max) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        let step = tick_step(min, max, tick_count);
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }

        let first = (min / step).ceil() as i64;
        let last = (max / step).floor() as i64;
        (first..=last).map(|index| index as f64 * step).collect()
    }

    /// Decimal places needed to print this scale's ticks without noise.
    #[must_use]
    pub fn tick_precision(self, tick_count: usize) -> usize {
        let (start, end) = self.domain();
        let step = tick_step(start.min(end), start.max(end), tick_count);
        if !step.is_finite() || step <= 0.0 || step >= 1.0 {
            return 0;
        }
        (-step.log10().floor()) as usize
    }

    /// Maps `value` onto the `[range_start, range_end]` pixel interval.
    pub fn map(self, value: f64, range_start: f64, range_end: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(range_start + normalized * (range_end - range_start))
    }

    /// Inverse of [`LinearScale::map`].
    pub fn invert(self, pixel: f64, range_start: f64, range_end: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let range_span = range_end - range_start;
        if !range_span.is_finite() || range_span == 0.0 {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        let normalized = (pixel - range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

fn tick_step(min: f64, max: f64, tick_count: usize) -> f64 {
    let raw_step = (max - min) / tick_count.max(1) as f64;
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return f64::NAN;
    }

    let power = 10_f64.powf(raw_step.log10().floor());
    let error = raw_step / power;
    let factor = if error >= TICK_E10 {
        10.0
    } else if error >= TICK_E5 {
        5.0
    } else if error >= TICK_E2 {
        2.0
    } else {
        1.0
    };
    factor * power
}
