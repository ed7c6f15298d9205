//! The drawing surface abstraction that every backend implements

use crate::gen::DrawCommand;
use crate::palette::Color;
use crate::{Float, Point};

/// Anything that a tree can be painted onto
///
/// Coordinates are in surface units with the origin at the top-left, matching pointer events.
pub trait Surface {
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Fills a circle of the given diameter, centered at `center`
    fn fill_circle(&mut self, center: Point, diameter: Float, color: Color);

    /// Covers the entire surface with a single color, wiping anything drawn before
    fn fill_background(&mut self, color: Color);

    /// Executes a command produced by the generator
    fn execute(&mut self, cmd: &DrawCommand) {
        match *cmd {
            DrawCommand::Line { from, to, color } => self.draw_line(from, to, color),
            DrawCommand::Dot {
                at,
                diameter,
                color,
            } => self.fill_circle(at, diameter, color),
        }
    }
}

/// A single call made against a [`Recorder`]
#[cfg(test)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Line { from: Point, to: Point, color: Color },
    Circle {
        center: Point,
        diameter: Float,
        color: Color,
    },
    Background(Color),
}

/// A headless surface that just remembers what it was asked to draw
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub calls: Vec<SurfaceCall>,
}

#[cfg(test)]
impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of lines and circles drawn, as `(lines, circles)`
    pub fn shape_counts(&self) -> (usize, usize) {
        self.calls.iter().fold((0, 0), |(l, c), call| match call {
            SurfaceCall::Line { .. } => (l + 1, c),
            SurfaceCall::Circle { .. } => (l, c + 1),
            SurfaceCall::Background(_) => (l, c),
        })
    }

    /// Returns every point referenced by the recorded calls
    pub fn points(&self) -> impl '_ + Iterator<Item = Point> {
        self.calls
            .iter()
            .flat_map(|call| match *call {
                SurfaceCall::Line { from, to, .. } => vec![from, to],
                SurfaceCall::Circle { center, .. } => vec![center],
                SurfaceCall::Background(_) => Vec::new(),
            })
    }
}

#[cfg(test)]
impl Surface for Recorder {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.calls.push(SurfaceCall::Line { from, to, color });
    }

    fn fill_circle(&mut self, center: Point, diameter: Float, color: Color) {
        self.calls.push(SurfaceCall::Circle {
            center,
            diameter,
            color,
        });
    }

    fn fill_background(&mut self, color: Color) {
        self.calls.push(SurfaceCall::Background(color));
    }
}
