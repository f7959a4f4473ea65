use image::{ImageBuffer, Rgb, RgbImage};
use glam::DVec2;
use std::path::Path;
use tracing::{debug, info};
use crate::color::Color;
use crate::error::HeatmapResult;
use crate::scene::{Baseline, HeatmapScene, RenderTarget, TextAnchor};

/// Rasterizes a scene into an RGB image. Rects and lines only; labels are
/// left to vector surfaces.
pub struct PngExporter {
    width: u32,
    height: u32,
    image: RgbImage,
    skipped_labels: usize,
}

impl PngExporter {
    pub fn new(width: u32, height: u32) -> Self {
        let mut image = ImageBuffer::new(width, height);

        // White background
        for pixel in image.pixels_mut() {
            *pixel = Rgb([255, 255, 255]);
        }

        Self { width, height, image, skipped_labels: 0 }
    }

    pub fn for_scene(scene: &HeatmapScene) -> Self {
        Self::new(scene.width.round().max(0.0) as u32, scene.height.round().max(0.0) as u32)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Render `scene` and write it as a PNG file.
    pub fn export_scene<P: AsRef<Path>>(scene: &HeatmapScene, output_path: P) -> HeatmapResult<()> {
        if let Some(parent) = output_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut exporter = Self::for_scene(scene);
        scene.draw(&mut exporter);
        if exporter.skipped_labels > 0 {
            debug!("{} text labels not rasterized", exporter.skipped_labels);
        }

        exporter.image.save(output_path.as_ref())?;
        info!("wrote heatmap png to {}", output_path.as_ref().display());
        Ok(())
    }

    /// Pixel span covering `[start, start + length)`, clipped to `limit`.
    fn span(start: f64, length: f64, limit: u32) -> std::ops::Range<u32> {
        let lo = start.round().clamp(0.0, limit as f64) as u32;
        let hi = (start + length).round().clamp(0.0, limit as f64) as u32;
        lo..hi.max(lo)
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64 {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }
}

impl RenderTarget for PngExporter {
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Color) {
        let color = fill.to_rgb();
        for py in Self::span(y, height, self.height) {
            for px in Self::span(x, width, self.width) {
                self.image.put_pixel(px, py, color);
            }
        }
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, stroke: Color) {
        let color = stroke.to_rgb();
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as i64;

        for i in 0..=steps {
            let point = from + delta * (i as f64 / steps as f64);
            self.put(point.x.floor() as i64, point.y.floor() as i64, color);
        }
    }

    fn draw_text(&mut self, _at: DVec2, _text: &str, _anchor: TextAnchor, _baseline: Baseline) {
        self.skipped_labels += 1;
    }
}
