pub mod constants;
pub mod error;
pub mod color;
pub mod config;
pub mod dataset;
pub mod scale;
pub mod classifier;
pub mod legend;
pub mod axis;
pub mod grid;
pub mod interaction;
pub mod scene;
pub mod heatmap;
pub mod png_exporter;

pub use crate::color::{Color, Palette};
pub use crate::config::{HeatmapConfig, Layout, MonthLabels};
pub use crate::dataset::{Dataset, Observation};
pub use crate::error::{HeatmapError, HeatmapResult};
pub use crate::heatmap::Heatmap;
pub use crate::interaction::{HoverState, Interaction, TooltipContent};
pub use crate::scene::{DrawPrimitive, HeatmapScene, RenderTarget};
