use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::config::Layout;
use crate::constants::MONTHS_PER_YEAR;
use crate::dataset::Dataset;
use crate::error::HeatmapResult;

/// Continuous `[domain_min, domain_max] -> [range_min, range_max]` map.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain_min: f64,
    pub domain_max: f64,
    pub range_min: f64,
    pub range_max: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    /// Maps a domain value to a pixel. A collapsed domain maps everything
    /// to the middle of the range.
    pub fn apply<T: ToPrimitive>(&self, value: T) -> f64 {
        let value = value.to_f64().unwrap_or(f64::NAN);
        let span = self.domain_max - self.domain_min;
        let t = if span == 0.0 {
            0.5
        } else if span.is_finite() {
            (value - self.domain_min) / span
        } else {
            // halving is exact, and keeps domains wider than f64::MAX finite
            (value / 2.0 - self.domain_min / 2.0) / (self.domain_max / 2.0 - self.domain_min / 2.0)
        };
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Pixel length of one domain unit.
    pub fn unit_width(&self) -> f64 {
        self.apply(1.0) - self.apply(0.0)
    }

    /// Round tick values inside the domain, stepping by 1, 2 or 5 times a
    /// power of ten so that roughly `count` ticks come out.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = if self.domain_min <= self.domain_max {
            (self.domain_min, self.domain_max)
        } else {
            (self.domain_max, self.domain_min)
        };

        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }

        let raw_step = (stop - start) / count as f64;
        let power = raw_step.log10().floor();
        let error = raw_step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        // Negative powers divide by an integer inverse to keep 0.1 * 3 == 0.3.
        if power >= 0.0 {
            let step = factor * 10f64.powf(power);
            let first = (start / step).ceil() as i64;
            let last = (stop / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        } else {
            let inverse = 10f64.powf(-power) / factor;
            let first = (start * inverse).ceil() as i64;
            let last = (stop * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        }
    }
}

/// Splits `[range_min, range_max]` into `count` equal contiguous bands.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub range_min: f64,
    pub range_max: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64)) -> Self {
        BandScale { count, range_min: range.0, range_max: range.1 }
    }

    pub fn bandwidth(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.range_max - self.range_min) / self.count as f64
    }

    /// Starting pixel of band `index`, `None` outside the domain.
    pub fn apply(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.range_min + index as f64 * self.bandwidth())
    }

    pub fn center(&self, index: usize) -> Option<f64> {
        self.apply(index).map(|start| start + self.bandwidth() / 2.0)
    }
}

/// Year -> x and month -> y scales for the heatmap grid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AxisScales {
    pub year_scale: LinearScale,
    pub month_scale: BandScale,
    pub bar_width: f64,
    pub bar_height: f64,
}

impl AxisScales {
    /// The year domain is padded by one year on each side so no cell
    /// touches the plot edge.
    pub fn build(dataset: &Dataset, layout: &Layout) -> HeatmapResult<Self> {
        let (min_year, max_year) = dataset.year_extent()?;
        let domain = (min_year as f64 - 1.0, max_year as f64 + 1.0);

        let year_scale = LinearScale::new(domain, (layout.padding, layout.width - layout.padding));
        let month_scale = BandScale::new(
            MONTHS_PER_YEAR,
            (layout.padding, layout.height - layout.padding_bottom),
        );

        let bar_width = year_scale.unit_width();
        let bar_height = month_scale.bandwidth();

        debug!(
            "year domain {}..{}, bar {:.3}x{:.3}px",
            domain.0,
            domain.1,
            bar_width,
            bar_height
        );

        Ok(AxisScales { year_scale, month_scale, bar_width, bar_height })
    }
}
