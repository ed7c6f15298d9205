//! Vector output, writing trees as SVG documents

use crate::img::PixelCount;
use crate::palette::{to_hex, Color};
use crate::surface::Surface;
use crate::{Float, Point};

use eyre::Context;
use image::Rgba;
use std::path::Path;
use svg::node::element::{Circle, Line, Rectangle};
use svg::{Document, Node};

/// A [`Surface`] that collects shapes into an SVG document
pub struct SvgSurface {
    width: PixelCount,
    height: PixelCount,
    document: Document,
}

impl SvgSurface {
    pub fn new(width: PixelCount, height: PixelCount) -> Self {
        SvgSurface {
            width,
            height,
            document: Self::blank(width, height),
        }
    }

    fn blank(width: PixelCount, height: PixelCount) -> Document {
        Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {} {}", width, height))
    }

    #[cfg(test)]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        svg::save(path, &self.document)
            .wrap_err_with(|| format!("failed to write SVG to {:?}", path.to_string_lossy()))
    }
}

/// Returns the alpha channel of the color in `0.0..=1.0`
fn opacity(color: Color) -> Float {
    let Rgba([_, _, _, a]) = color;
    a as Float / 255.0
}

impl Surface for SvgSurface {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let line = Line::new()
            .set("x1", from.x)
            .set("y1", from.y)
            .set("x2", to.x)
            .set("y2", to.y)
            .set("stroke", to_hex(color))
            .set("stroke-opacity", opacity(color))
            .set("stroke-width", 1);

        self.document.append(line);
    }

    fn fill_circle(&mut self, center: Point, diameter: Float, color: Color) {
        let circle = Circle::new()
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", (diameter / 2.0).max(0.0))
            .set("fill", to_hex(color))
            .set("fill-opacity", opacity(color));

        self.document.append(circle);
    }

    fn fill_background(&mut self, color: Color) {
        // Everything drawn so far would be hidden anyway
        self.document = Self::blank(self.width, self.height);

        let background = Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", to_hex(color))
            .set("fill-opacity", opacity(color));

        self.document.append(background);
    }
}
