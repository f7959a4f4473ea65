use std::time::Duration;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use crate::color::Palette;
use crate::constants::{
    AXIS_TICK_SIZE, DEFAULT_PALETTE, FADE_DURATION_MS, HEIGHT, LEGEND_TICK_SIZE, LEGEND_WIDTH,
    PADDING, PADDING_BOTTOM, TICK_PADDING, TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y, TOOLTIP_OPACITY,
    WIDTH,
};
use crate::error::HeatmapResult;

/// Pixel geometry of the chart. The defaults reproduce the published chart.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub padding_bottom: f64,
    pub legend_width: f64,
    pub legend_tick_size: f64,
    pub axis_tick_size: f64,
    pub tick_padding: f64,
    pub tooltip_offset: DVec2,
}

impl Layout {
    /// Baseline of the legend axis.
    pub fn legend_bottom(&self) -> f64 {
        self.height - self.padding / 2.0
    }

    /// Baseline of the year axis.
    pub fn plot_bottom(&self) -> f64 {
        self.height - self.padding_bottom
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            padding_bottom: PADDING_BOTTOM,
            legend_width: LEGEND_WIDTH,
            legend_tick_size: LEGEND_TICK_SIZE,
            axis_tick_size: AXIS_TICK_SIZE,
            tick_padding: TICK_PADDING,
            tooltip_offset: DVec2::new(TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y),
        }
    }
}

/// Month tick labels. `Legacy` keeps the "Fec" typo of the published
/// chart for output parity.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MonthLabels {
    #[default]
    Standard,
    Legacy,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HeatmapConfig {
    pub layout: Layout,
    pub palette: Palette,
    pub month_labels: MonthLabels,
    pub fade_duration_ms: u64,
    pub tooltip_opacity: f64,
}

impl HeatmapConfig {
    /// Reads a config document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> HeatmapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        HeatmapConfig {
            layout: Layout::default(),
            palette: DEFAULT_PALETTE.clone(),
            month_labels: MonthLabels::Standard,
            fade_duration_ms: FADE_DURATION_MS,
            tooltip_opacity: TOOLTIP_OPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_defaults_match_published_chart() {
        let config = HeatmapConfig::default();
        assert_eq!(config.layout.width, 1100.0);
        assert_eq!(config.layout.height, 600.0);
        assert_eq!(config.layout.padding, 50.0);
        assert_eq!(config.layout.padding_bottom, 100.0);
        assert_eq!(config.layout.legend_width, 400.0);
        assert_eq!(config.layout.legend_tick_size, 10.0);
        assert_eq!(config.layout.legend_bottom(), 575.0);
        assert_eq!(config.layout.plot_bottom(), 500.0);
        assert_eq!(config.fade_duration(), Duration::from_millis(200));
        assert_eq!(config.palette.len(), 11);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = HeatmapConfig::from_json_str(
            r##"{
                "layout": {"width": 800, "tooltipOffset": [10, 2]},
                "palette": ["#ff0000", "#0000ff"],
                "monthLabels": "legacy"
            }"##,
        )
        .unwrap();

        assert_eq!(config.layout.width, 800.0);
        assert_eq!(config.layout.height, 600.0);
        assert_eq!(config.layout.tooltip_offset, DVec2::new(10.0, 2.0));
        assert_eq!(config.palette.colors(), &[Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)]);
        assert_eq!(config.month_labels, MonthLabels::Legacy);
        assert_eq!(config.fade_duration_ms, 200);
    }

    #[test]
    fn test_bad_palette_color_fails_to_load() {
        let result = HeatmapConfig::from_json_str(r#"{"palette": ["blue"]}"#);
        assert!(result.is_err());
    }
}
