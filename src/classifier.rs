use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::color::{Color, Palette};
use crate::dataset::extent;
use crate::error::{HeatmapError, HeatmapResult};

/// Equal-width temperature buckets over the observed range, one per palette
/// color.
///
/// `boundaries[i]` is the lower edge of bucket `i`; buckets count cold to
/// warm while the palette runs warm to cold, so bucket `i` is painted with
/// `palette[len - 1 - i]`. A temperature equal to a boundary stays in the
/// bucket below it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    boundaries: Vec<f64>,
    palette: Palette,
    min_temp: f64,
    max_temp: f64,
    step: f64,
}

impl ThresholdTable {
    pub fn new<I>(base_temperature: f64, variances: I, palette: &Palette) -> HeatmapResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min_variance, max_variance) = extent(variances).ok_or(HeatmapError::EmptyDataset)?;
        Self::from_extent(base_temperature + min_variance, base_temperature + max_variance, palette)
    }

    /// Table over an already known `(min, max)` temperature range.
    pub fn from_extent(min_temp: f64, max_temp: f64, palette: &Palette) -> HeatmapResult<Self> {
        if palette.is_empty() {
            return Err(HeatmapError::EmptyPalette);
        }

        let buckets = palette.len() as f64;
        let span = max_temp - min_temp;
        let step = if span.is_finite() {
            span / buckets
        } else {
            max_temp / buckets - min_temp / buckets
        };
        let boundaries: Vec<f64> = (0..palette.len())
            .map(|i| lower_edge(min_temp, step, i))
            .collect();

        if boundaries.len() != palette.len() {
            return Err(HeatmapError::MismatchedThresholdPalette {
                boundaries: boundaries.len(),
                colors: palette.len(),
            });
        }

        debug!(
            "thresholds {:.3}..{:.3}C in {} buckets of {:.3}C",
            min_temp,
            max_temp,
            palette.len(),
            step
        );

        Ok(ThresholdTable {
            boundaries,
            palette: palette.clone(),
            min_temp,
            max_temp,
            step,
        })
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn min_temp(&self) -> f64 {
        self.min_temp
    }

    pub fn max_temp(&self) -> f64 {
        self.max_temp
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Largest `i >= 1` with `t > boundaries[i]`, else 0.
    pub fn bucket(&self, temperature: f64) -> usize {
        self.boundaries
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, boundary)| temperature > **boundary)
            .map(|(i, _)| i)
            .last()
            .unwrap_or(0)
    }

    /// Paint color of a bucket.
    pub fn bucket_color(&self, bucket: usize) -> HeatmapResult<Color> {
        self.palette
            .for_bucket(bucket)
            .ok_or(HeatmapError::MismatchedThresholdPalette {
                boundaries: self.boundaries.len(),
                colors: self.palette.len(),
            })
    }

    pub fn classify(&self, temperature: f64) -> HeatmapResult<Color> {
        self.bucket_color(self.bucket(temperature))
    }
}

/// `min + step * i`, computed in halves when the product overflows.
fn lower_edge(min_temp: f64, step: f64, i: usize) -> f64 {
    if i == 0 {
        return min_temp;
    }
    let offset = step * i as f64;
    if offset.is_finite() {
        min_temp + offset
    } else {
        (min_temp / 2.0 + step / 2.0 * i as f64) * 2.0
    }
}
