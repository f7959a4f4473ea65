use serde::{Deserialize, Serialize};
use crate::config::{Layout, MonthLabels};
use crate::constants::{CELSIUS_GLYPH, MONTHS_PER_YEAR, YEAR_TICK_COUNT};
use crate::scale::{AxisScales, BandScale, LinearScale};

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const LEGACY_MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fec", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Integer year label, no grouping.
pub fn format_year(year: f64) -> String {
    format!("{}", year.round() as i64)
}

/// Three-letter month label for a 0-based month index.
pub fn format_month(index: usize, labels: MonthLabels) -> Option<&'static str> {
    match labels {
        MonthLabels::Standard => MONTH_ABBREVIATIONS.get(index).copied(),
        MonthLabels::Legacy => LEGACY_MONTH_ABBREVIATIONS.get(index).copied(),
    }
}

/// Full English month name for a 0-based month index.
pub fn month_name(index: usize) -> Option<&'static str> {
    MONTH_NAMES.get(index).copied()
}

/// One decimal digit, no unit. Used for legend ticks.
pub fn format_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

/// One decimal digit followed by the Celsius glyph.
pub fn format_temperature(celsius: f64) -> String {
    format!("{:.1}{}", celsius, CELSIUS_GLYPH)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    /// Pixel offset along the axis.
    pub position: f64,
    pub label: String,
}

/// A straight axis line with outward ticks. `offset` is the cross-axis pixel
/// coordinate of the line: y for bottom axes, x for left axes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    pub offset: f64,
    pub range: (f64, f64),
    pub tick_size: f64,
    pub tick_padding: f64,
    pub ticks: Vec<AxisTick>,
}

impl Axis {
    /// Distance from the axis line to the tick labels.
    pub fn label_spacing(&self) -> f64 {
        self.tick_size.max(0.0) + self.tick_padding
    }

    /// Year axis along the bottom of the plot.
    pub fn years(scales: &AxisScales, layout: &Layout) -> Self {
        let scale = &scales.year_scale;
        let ticks = scale
            .ticks(YEAR_TICK_COUNT)
            .into_iter()
            .map(|year| AxisTick { value: year, position: scale.apply(year), label: format_year(year) })
            .collect();

        Axis {
            orientation: Orientation::Bottom,
            offset: layout.plot_bottom(),
            range: (scale.range_min, scale.range_max),
            tick_size: layout.axis_tick_size,
            tick_padding: layout.tick_padding,
            ticks,
        }
    }

    /// Month axis down the left edge, one tick per band center.
    pub fn months(scales: &AxisScales, layout: &Layout, labels: MonthLabels) -> Self {
        let bands: &BandScale = &scales.month_scale;
        let ticks = (0..MONTHS_PER_YEAR)
            .filter_map(|index| {
                let position = bands.center(index)?;
                let label = format_month(index, labels)?;
                Some(AxisTick { value: index as f64, position, label: label.to_string() })
            })
            .collect();

        Axis {
            orientation: Orientation::Left,
            offset: layout.padding,
            range: (bands.range_min, bands.range_max),
            tick_size: layout.axis_tick_size,
            tick_padding: layout.tick_padding,
            ticks,
        }
    }

    /// Legend axis with explicit tick values.
    pub fn legend(scale: &LinearScale, values: &[f64], layout: &Layout) -> Self {
        let ticks = values
            .iter()
            .map(|&value| AxisTick { value, position: scale.apply(value), label: format_decimal(value) })
            .collect();

        Axis {
            orientation: Orientation::Bottom,
            offset: layout.legend_bottom(),
            range: (scale.range_min, scale.range_max),
            tick_size: layout.legend_tick_size,
            tick_padding: layout.tick_padding,
            ticks,
        }
    }
}
