//! Raster output, painting trees into an in-memory image that can be saved as a PNG

use crate::palette::{rgba, Color};
use crate::surface::Surface;
use crate::{Float, Point};

use eyre::Context;
use image::ImageBuffer;
use imageproc::drawing;
use std::path::Path;

/// Type alias to represent a number of pixels. This is only provided so that the meaning behind
/// types can be more clear.
pub type PixelCount = u32;

/// Helper type alias
type ImageCanvas = ImageBuffer<Color, Vec<u8>>;

/// A [`Surface`] backed by an RGBA image buffer
///
/// One surface unit is one pixel, with the origin in the top-left corner.
pub struct ImageSurface {
    // Drawing overwrites pixels instead of blending them. Later shapes end up on top.
    canvas: ImageCanvas,
}

impl ImageSurface {
    /// Creates a fully transparent image of the given size
    pub fn new(width: PixelCount, height: PixelCount) -> Self {
        ImageSurface {
            canvas: ImageBuffer::from_pixel(width, height, rgba(0x00000000)),
        }
    }

    #[cfg(test)]
    pub fn image(&self) -> &ImageBuffer<Color, Vec<u8>> {
        &self.canvas
    }

    /// Writes the image to `path`. The format is picked from the file extension
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        self.canvas
            .save(path)
            .wrap_err_with(|| format!("failed to write image to {:?}", path.to_string_lossy()))
    }
}

/// Converts a point to its corresponding pixel in the image
///
/// The values returned are signed because it's possible for points outside the image to still
/// matter (e.g. as the far end of a line that crosses into view).
fn point_to_coords(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

impl Surface for ImageSurface {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let start = (from.x as f32, from.y as f32);
        let end = (to.x as f32, to.y as f32);
        drawing::draw_line_segment_mut(&mut self.canvas, start, end, color);
    }

    fn fill_circle(&mut self, center: Point, diameter: Float, color: Color) {
        let radius_px = (diameter / 2.0).round() as i32;
        if radius_px <= 0 {
            let (x, y) = point_to_coords(center);
            let (w, h) = self.canvas.dimensions();
            if (0..w as i32).contains(&x) && (0..h as i32).contains(&y) {
                self.canvas.put_pixel(x as u32, y as u32, color);
            }
            return;
        }

        drawing::draw_filled_circle_mut(&mut self.canvas, point_to_coords(center), radius_px, color);
    }

    fn fill_background(&mut self, color: Color) {
        for px in self.canvas.pixels_mut() {
            *px = color;
        }
    }
}
