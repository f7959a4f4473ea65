use glam::DVec2;
use serde::{Deserialize, Serialize};
use crate::axis::{format_temperature, month_name};
use crate::classifier::ThresholdTable;
use crate::color::Color;
use crate::dataset::{Dataset, Observation};
use crate::error::{HeatmapError, HeatmapResult};
use crate::scale::AxisScales;

/// One colored rectangle of the heatmap, tied to the observation it shows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Cell {
    pub observation: Observation,
    pub temperature: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    /// e.g. "1753 - January"
    pub tooltip_date: String,
    /// e.g. "8.7℃"
    pub tooltip_temperature: String,
}

impl Cell {
    pub fn top_left(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn key(&self) -> (i32, u32) {
        (self.observation.year, self.observation.month)
    }
}

/// Lays out one cell per observation, in dataset order.
///
/// Duplicate (year, month) pairs produce overlapping cells; the later one is
/// painted last and wins hit tests.
pub fn render_cells(
    dataset: &Dataset,
    scales: &AxisScales,
    table: &ThresholdTable,
) -> HeatmapResult<Vec<Cell>> {
    dataset
        .observations()
        .iter()
        .enumerate()
        .map(|(index, obs)| {
            let temperature = dataset.temperature_of(obs);
            let out_of_range = || HeatmapError::OutOfRangeMonth { index, year: obs.year, month: obs.month };
            let month_index = obs.month_index().ok_or_else(out_of_range)?;
            let y = scales.month_scale.apply(month_index).ok_or_else(out_of_range)?;
            let month = month_name(month_index).unwrap_or_default();

            Ok(Cell {
                observation: *obs,
                temperature,
                x: scales.year_scale.apply(obs.year),
                y,
                width: scales.bar_width,
                height: scales.bar_height,
                color: table.classify(temperature)?,
                tooltip_date: format!("{} - {}", obs.year, month),
                tooltip_temperature: format_temperature(temperature),
            })
        })
        .collect()
}

/// Topmost cell under `point`.
pub fn hit_test(cells: &[Cell], point: DVec2) -> Option<&Cell> {
    cells.iter().rev().find(|cell| cell.contains(point))
}
