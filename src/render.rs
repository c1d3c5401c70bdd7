use image::{ImageBuffer, RgbImage};

use super::palette::*;

#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig { width: 512, height: 64 }
    }
}

impl Palette {
    /// Draw the palette as a horizontal gradient, dark end on the left for
    /// an unreversed palette. Each column samples the continuous lookup.
    pub fn render_image(&self, cfg: RenderConfig) -> RgbImage {
        let span = cfg.width.saturating_sub(1).max(1) as f64;
        let columns: Vec<[u8; 3]> = (0 .. cfg.width)
            .map(|x| self.interpolate(x as f64 / span).to_rgb8())
            .collect();

        ImageBuffer::from_fn(cfg.width, cfg.height, |x, _| image::Rgb(columns[x as usize]))
    }
}
