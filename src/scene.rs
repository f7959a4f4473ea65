use std::path::Path;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::axis::{Axis, Orientation};
use crate::color::Color;
use crate::error::HeatmapResult;
use crate::grid::Cell;
use crate::legend::LegendLayout;

pub const INK: Color = Color::rgb(0, 0, 0);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    Hanging,
    Middle,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawPrimitive {
    Rect { x: f64, y: f64, width: f64, height: f64, fill: Color },
    Line { from: DVec2, to: DVec2, stroke: Color },
    Text { at: DVec2, text: String, anchor: TextAnchor, baseline: Baseline },
}

/// A drawing surface. Passed explicitly to [`HeatmapScene::draw`].
pub trait RenderTarget {
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Color);
    fn draw_line(&mut self, from: DVec2, to: DVec2, stroke: Color);
    fn draw_text(&mut self, at: DVec2, text: &str, anchor: TextAnchor, baseline: Baseline);

    fn draw_primitive(&mut self, primitive: &DrawPrimitive) {
        match primitive {
            DrawPrimitive::Rect { x, y, width, height, fill } => {
                self.draw_rect(*x, *y, *width, *height, *fill)
            }
            DrawPrimitive::Line { from, to, stroke } => self.draw_line(*from, *to, *stroke),
            DrawPrimitive::Text { at, text, anchor, baseline } => {
                self.draw_text(*at, text, *anchor, *baseline)
            }
        }
    }
}

/// Collects primitives in paint order.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveRecorder {
    pub primitives: Vec<DrawPrimitive>,
}

impl RenderTarget for PrimitiveRecorder {
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Color) {
        self.primitives.push(DrawPrimitive::Rect { x, y, width, height, fill });
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, stroke: Color) {
        self.primitives.push(DrawPrimitive::Line { from, to, stroke });
    }

    fn draw_text(&mut self, at: DVec2, text: &str, anchor: TextAnchor, baseline: Baseline) {
        self.primitives.push(DrawPrimitive::Text { at, text: text.to_string(), anchor, baseline });
    }
}

/// Everything one render pass produces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeatmapScene {
    pub width: f64,
    pub height: f64,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: LegendLayout,
    pub cells: Vec<Cell>,
}

impl HeatmapScene {
    /// Paints axes, then the legend, then the grid.
    pub fn draw<T: RenderTarget>(&self, target: &mut T) {
        draw_axis(&self.x_axis, target);
        draw_axis(&self.y_axis, target);
        draw_axis(&self.legend.axis, target);

        for swatch in &self.legend.swatches {
            target.draw_rect(swatch.x, swatch.y, swatch.width, swatch.height, swatch.color);
        }
        for cell in &self.cells {
            target.draw_rect(cell.x, cell.y, cell.width, cell.height, cell.color);
        }
    }

    pub fn primitives(&self) -> Vec<DrawPrimitive> {
        let mut recorder = PrimitiveRecorder::default();
        self.draw(&mut recorder);
        recorder.primitives
    }

    pub fn to_json(&self) -> HeatmapResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> HeatmapResult<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.to_json()?)?;
        info!("wrote scene json to {}", path.as_ref().display());
        Ok(())
    }
}

fn draw_axis<T: RenderTarget>(axis: &Axis, target: &mut T) {
    let (start, end) = axis.range;
    let spacing = axis.label_spacing();

    match axis.orientation {
        Orientation::Bottom => {
            let y = axis.offset;
            target.draw_line(DVec2::new(start, y), DVec2::new(end, y), INK);
            for tick in &axis.ticks {
                let x = tick.position;
                target.draw_line(DVec2::new(x, y), DVec2::new(x, y + axis.tick_size), INK);
                target.draw_text(DVec2::new(x, y + spacing), &tick.label, TextAnchor::Middle, Baseline::Hanging);
            }
        }
        Orientation::Left => {
            let x = axis.offset;
            target.draw_line(DVec2::new(x, start), DVec2::new(x, end), INK);
            for tick in &axis.ticks {
                let y = tick.position;
                target.draw_line(DVec2::new(x, y), DVec2::new(x - axis.tick_size, y), INK);
                target.draw_text(DVec2::new(x - spacing, y), &tick.label, TextAnchor::End, Baseline::Middle);
            }
        }
    }
}
