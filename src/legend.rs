use serde::{Deserialize, Serialize};
use crate::axis::Axis;
use crate::classifier::ThresholdTable;
use crate::color::Color;
use crate::config::Layout;
use crate::error::HeatmapResult;
use crate::scale::LinearScale;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LegendSwatch {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

/// Color key under the plot: one square swatch per bucket, coldest on the
/// left, above an axis ticked at the bucket boundaries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LegendLayout {
    pub scale: LinearScale,
    pub rect_width: f64,
    pub swatches: Vec<LegendSwatch>,
    pub axis: Axis,
}

impl LegendLayout {
    pub fn new(table: &ThresholdTable, layout: &Layout) -> HeatmapResult<Self> {
        let scale = LinearScale::new(
            (table.min_temp(), table.max_temp()),
            (0.0, layout.legend_width),
        );
        // one step's worth of legend scale, taken over the whole range so a
        // step too wide for f64 arithmetic still divides evenly
        let rect_width = (scale.apply(table.max_temp()) - scale.apply(table.min_temp())) / table.len() as f64;
        let base_x = scale.apply(table.min_temp());
        let rect_y = layout.legend_bottom() - rect_width;

        let swatches = (0..table.len())
            .map(|i| {
                Ok(LegendSwatch {
                    x: base_x + i as f64 * rect_width,
                    y: rect_y,
                    width: rect_width,
                    height: rect_width,
                    color: table.bucket_color(i)?,
                })
            })
            .collect::<HeatmapResult<Vec<_>>>()?;

        let axis = Axis::legend(&scale, table.boundaries(), layout);

        Ok(LegendLayout { scale, rect_width, swatches, axis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;
    use crate::constants::DEFAULT_PALETTE;

    #[test]
    fn test_two_color_legend() {
        let cold = Color::rgb(0, 0, 255);
        let warm = Color::rgb(255, 0, 0);
        let table = ThresholdTable::new(8.0, [-2.0, 3.0], &Palette::from(vec![warm, cold])).unwrap();
        let legend = LegendLayout::new(&table, &Layout::default()).unwrap();

        // 400px over 5 degrees
        assert_eq!(legend.rect_width, 200.0);
        assert_eq!(legend.swatches.len(), 2);
        assert_eq!(legend.swatches[0].x, 0.0);
        assert_eq!(legend.swatches[1].x, 200.0);
        assert_eq!(legend.swatches[0].y, 375.0);
        assert_eq!(legend.swatches[0].color, cold);
        assert_eq!(legend.swatches[1].color, warm);

        let labels: Vec<_> = legend.axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["6.0", "8.5"]);
        assert_eq!(legend.axis.ticks[1].position, 200.0);
        assert_eq!(legend.axis.offset, 575.0);
        assert_eq!(legend.axis.tick_size, 10.0);
    }

    #[test]
    fn test_swatches_match_classifier() {
        let table = ThresholdTable::new(8.66, [-6.976, 5.228], &DEFAULT_PALETTE).unwrap();
        let legend = LegendLayout::new(&table, &Layout::default()).unwrap();

        assert_eq!(legend.swatches.len(), 11);
        for (i, swatch) in legend.swatches.iter().enumerate() {
            let inside = table.boundaries()[i] + table.step() / 2.0;
            assert_eq!(swatch.color, table.classify(inside).unwrap(), "swatch {}", i);
            assert_eq!(swatch.width, swatch.height);
        }
        assert_eq!(legend.swatches[0].color.to_hex(), "#053061");
        assert_eq!(legend.swatches[10].color.to_hex(), "#67001f");

        let right_edge = legend.swatches[10].x + legend.rect_width;
        assert!((right_edge - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_range_keeps_swatches_finite() {
        let table = ThresholdTable::new(8.0, [-1e308, 1e308, 0.0], &DEFAULT_PALETTE).unwrap();
        let legend = LegendLayout::new(&table, &Layout::default()).unwrap();

        assert!((legend.rect_width - 400.0 / 11.0).abs() < 1e-9);
        assert_eq!(legend.swatches[0].x, 0.0);
        for swatch in &legend.swatches {
            assert!(swatch.x.is_finite() && swatch.y.is_finite());
            assert_eq!(swatch.width, legend.rect_width);
        }
        assert!(legend.axis.ticks.iter().all(|t| t.position.is_finite()));
    }

    #[test]
    fn test_collapsed_range_has_zero_width_swatches() {
        let table = ThresholdTable::new(8.0, [0.5, 0.5], &DEFAULT_PALETTE).unwrap();
        let legend = LegendLayout::new(&table, &Layout::default()).unwrap();

        assert_eq!(legend.rect_width, 0.0);
        assert!(legend.swatches.iter().all(|s| s.x == 200.0));
    }
}
