use tracing::info;
use crate::axis::Axis;
use crate::classifier::ThresholdTable;
use crate::config::HeatmapConfig;
use crate::dataset::Dataset;
use crate::error::HeatmapResult;
use crate::grid::render_cells;
use crate::interaction::Interaction;
use crate::legend::LegendLayout;
use crate::scale::AxisScales;
use crate::scene::HeatmapScene;

/// Monthly temperature heatmap over a read-only dataset.
pub struct Heatmap {
    dataset: Dataset,
    config: HeatmapConfig,
}

impl Heatmap {
    pub fn new(dataset: Dataset, config: HeatmapConfig) -> Self {
        Heatmap { dataset, config }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    pub fn scales(&self) -> HeatmapResult<AxisScales> {
        AxisScales::build(&self.dataset, &self.config.layout)
    }

    pub fn thresholds(&self) -> HeatmapResult<ThresholdTable> {
        let (min_temp, max_temp) = self.dataset.temperature_extent()?;
        ThresholdTable::from_extent(min_temp, max_temp, &self.config.palette)
    }

    /// One full synchronous pass. Nothing is cached between calls, so two
    /// renders of the same heatmap are identical.
    pub fn render(&self) -> HeatmapResult<HeatmapScene> {
        let layout = &self.config.layout;
        let scales = self.scales()?;
        let table = self.thresholds()?;

        let legend = LegendLayout::new(&table, layout)?;
        let cells = render_cells(&self.dataset, &scales, &table)?;

        info!(
            "rendered {} cells, {} legend swatches",
            cells.len(),
            legend.swatches.len()
        );

        Ok(HeatmapScene {
            width: layout.width,
            height: layout.height,
            x_axis: Axis::years(&scales, layout),
            y_axis: Axis::months(&scales, layout, self.config.month_labels),
            legend,
            cells,
        })
    }

    /// Fresh hover state for a rendered scene.
    pub fn interaction(&self) -> Interaction {
        Interaction::new(&self.config)
    }
}
