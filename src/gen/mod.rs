//! The branch generator: turns a trunk into the full list of things to draw
//!
//! Nothing here builds a tree structure. Geometry is computed on the fly by recursing from the
//! trunk's tip, and each branch is emitted as a [`DrawCommand`] the moment it's known.

use crate::palette::{Color, Palette};
use crate::{float, Float, Point};
use image::Rgba;
use serde::Deserialize;

mod random;

pub use random::{RandomSource, RngSource};

#[cfg(test)]
pub use random::Replay;

/// Parameters controlling the shape of the generated tree
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrowthConfig {
    /// The number of levels of branches to grow from the trunk's tip. Zero gives a single blossom
    pub generations: u32,
    /// The number of children every non-terminal branch splits into
    pub children: u32,
    /// The divisor applied to a branch's length to get its children's length
    pub decay_factor: Float,
    /// How far a child may turn away from its parent, in radians
    ///
    /// Children are sampled from a π-wide cone starting at `angle - half_angle`, so with the
    /// default of π/2 the cone is centered on the parent's direction.
    pub half_angle: Float,
    /// Diameter of each blossom, in surface units
    pub blossom_diameter: Float,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        GrowthConfig {
            generations: 8,
            children: 3,
            decay_factor: float::GOLDEN_RATIO,
            half_angle: float::FRAC_PI_2,
            blossom_diameter: 4.0,
        }
    }
}

impl GrowthConfig {
    /// Returns the number of `(lines, dots)` that [`generate`] will produce with this config
    ///
    /// Saturates at `usize::MAX` instead of overflowing.
    pub fn expected_counts(&self) -> (usize, usize) {
        let c = self.children as usize;

        match c {
            0 => return (0, (self.generations == 0) as usize),
            1 => return (self.generations as usize, 1),
            _ => (),
        }

        let mut level = 1_usize;
        let mut lines = 0_usize;
        for _ in 0..self.generations {
            level = level.saturating_mul(c);
            lines = lines.saturating_add(level);

            if level == usize::MAX {
                return (usize::MAX, usize::MAX);
            }
        }

        (lines, level)
    }
}

/// A single drawing primitive produced by the generator
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A branch, from its parent's tip to its own
    Line { from: Point, to: Point, color: Color },
    /// A blossom at the tip of a terminal branch
    Dot {
        at: Point,
        diameter: Float,
        color: Color,
    },
}

/// Generates every branch and blossom of a tree rooted at `origin`
///
/// `length` and `angle` describe the branch that ends at `origin` (normally the trunk). The
/// returned commands are in depth-first order: each branch's line is immediately followed by
/// everything grown from it.
///
/// This never fails. Non-positive lengths give a tree collapsed onto `origin`, and zero children
/// leave the tree without any blossoms.
pub fn generate(
    origin: Point,
    length: Float,
    angle: Float,
    config: &GrowthConfig,
    palette: &Palette,
    rng: &mut impl RandomSource,
) -> Vec<DrawCommand> {
    // Recursive helper function. `generation` is the number of levels still to grow below
    // `origin`.
    fn grow(
        out: &mut Vec<DrawCommand>,
        origin: Point,
        length: Float,
        angle: Float,
        generation: u32,
        config: &GrowthConfig,
        palette: &Palette,
        rng: &mut impl RandomSource,
    ) {
        if generation == 0 {
            out.push(DrawCommand::Dot {
                at: origin,
                diameter: config.blossom_diameter,
                color: blossom_color(rng),
            });
            return;
        }

        // Clamped so that non-positive or NaN lengths stay collapsed onto `origin`
        let child_length = (length / config.decay_factor).max(0.0);

        for _ in 0..config.children {
            // Uniform over [angle - half_angle, angle - half_angle + π)
            let child_angle = angle - config.half_angle + rng.next_unit() * float::PI;
            let tip = origin.project(child_length, child_angle);

            out.push(DrawCommand::Line {
                from: origin,
                to: tip,
                color: palette.branch,
            });

            grow(
                out,
                tip,
                child_length,
                child_angle,
                generation - 1,
                config,
                palette,
                rng,
            );
        }
    }

    let (lines, dots) = config.expected_counts();
    let mut out = Vec::with_capacity(lines.saturating_add(dots).min(1 << 20));

    grow(
        &mut out,
        origin,
        length,
        angle,
        config.generations,
        config,
        palette,
        rng,
    );

    out
}

/// Samples a fully opaque color, using one value from `rng` for each channel
fn blossom_color(rng: &mut impl RandomSource) -> Color {
    let mut channel = || (rng.next_unit() * 256.0).min(255.0) as u8;

    let r = channel();
    let g = channel();
    let b = channel();
    Rgba([r, g, b, 0xff])
}
