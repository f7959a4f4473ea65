use thiserror::Error;

pub type HeatmapResult<T> = Result<T, HeatmapError>;

#[derive(Error, Debug)]
pub enum HeatmapError {
    /// No observations: year and variance extrema are undefined.
    #[error("dataset has no observations")]
    EmptyDataset,

    #[error("observation {index} ({year}) has month {month}, expected 1..=12")]
    OutOfRangeMonth { index: usize, year: i32, month: u32 },

    #[error("observation {index} ({year}-{month:02}) has a non-finite variance")]
    NonFiniteVariance { index: usize, year: i32, month: u32 },

    /// Base plus variance overflows, or the base itself is not finite.
    #[error("observation {index} ({year}-{month:02}) has a non-finite temperature")]
    NonFiniteTemperature { index: usize, year: i32, month: u32 },

    #[error("threshold table has {boundaries} boundaries for {colors} colors")]
    MismatchedThresholdPalette { boundaries: usize, colors: usize },

    #[error("palette has no colors")]
    EmptyPalette,

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
