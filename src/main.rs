//! Recursive fractal tree painter
//!
//! A tree is painted from a single gesture: the pointer is pressed where the trunk starts and
//! released where it ends. Branches then grow recursively from the trunk's tip, each one a random
//! turn away from its parent and shorter by the golden ratio, until the final generation ends in
//! a blossom.
//!
//! The main entrypoint is actually in [`cli::run`] ('src/cli.rs'), which parses the arguments and
//! calls the `run` method on [`AppSettings`].

use std::path::PathBuf;

mod canvas;
mod cli;
mod config;
mod float;
mod gen;
mod img;
mod palette;
mod point;
mod surface;
mod svg_out;

use canvas::{PointerEvent, TreeCanvas};
use cli::OutputFormat;
use float::Float;
use gen::{GrowthConfig, RngSource};
use img::{ImageSurface, PixelCount};
use palette::Palette;
use point::Point;
use surface::Surface;
use svg_out::SvgSurface;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Everything needed to paint a single tree, as filled out by the `cli` module
#[derive(Debug)]
struct AppSettings {
    width: PixelCount,
    height: PixelCount,
    /// Where the simulated pointer is pressed
    press: Point,
    /// Where the simulated pointer is released
    release: Point,
    /// If absent, a seed is picked at random (and logged, so the tree can be painted again)
    seed: Option<u64>,
    growth: GrowthConfig,
    palette: Palette,
    output: PathBuf,
    format: OutputFormat,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Internally calls `AppSettings::run`
    cli::run()
}

impl AppSettings {
    /// Replays the gesture onto a fresh canvas and writes out the painting
    fn run(&self) -> eyre::Result<()> {
        let mut canvas = TreeCanvas::new(self.growth, self.palette);

        let gesture = [
            PointerEvent::Entered,
            PointerEvent::Down(self.press),
            PointerEvent::Moved(self.release),
            PointerEvent::Up(self.release),
            PointerEvent::Exited,
        ];
        for event in gesture.iter() {
            canvas.handle(*event);
        }

        if !canvas.take_redraw_request() {
            tracing::warn!(
                gesture = ?canvas.gesture(),
                "gesture didn't produce a tree; painting background only"
            );
        }

        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        tracing::info!(seed, "growing tree");
        let mut rng = RngSource(StdRng::seed_from_u64(seed));

        match self.format {
            OutputFormat::Png => {
                let mut surface = ImageSurface::new(self.width, self.height);
                paint(&canvas, &mut surface, &mut rng);
                surface.save(&self.output)?;
            }
            OutputFormat::Svg => {
                let mut surface = SvgSurface::new(self.width, self.height);
                paint(&canvas, &mut surface, &mut rng);
                surface.save(&self.output)?;
            }
        }

        tracing::info!(path = %self.output.display(), "wrote painting");
        Ok(())
    }
}

fn paint(canvas: &TreeCanvas, surface: &mut impl Surface, rng: &mut RngSource<StdRng>) {
    let n = canvas.render(surface, rng);
    if let Some(trunk) = canvas.trunk() {
        tracing::debug!(
            commands = n,
            trunk_length = trunk.length(),
            "painted trunk and branches"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(format: OutputFormat, output: PathBuf) -> AppSettings {
        AppSettings {
            width: 120,
            height: 160,
            press: Point::new(60.0, 150.0),
            release: Point::new(60.0, 110.0),
            seed: Some(3),
            growth: GrowthConfig {
                generations: 4,
                ..GrowthConfig::default()
            },
            palette: Palette::default(),
            output,
            format,
        }
    }

    #[test]
    fn writes_png_and_svg() {
        let dir = std::env::temp_dir().join(format!("fractal-tree-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let png = dir.join("tree.png");
        settings(OutputFormat::Png, png.clone()).run().unwrap();
        let painted = image::open(&png).unwrap().to_rgba8();
        assert_eq!(painted.dimensions(), (120, 160));
        // Near the base of the trunk, out of reach of any branch
        assert_eq!(*painted.get_pixel(60, 148), Palette::default().trunk);

        let svg = dir.join("tree.svg");
        settings(OutputFormat::Svg, svg.clone()).run().unwrap();
        let text = std::fs::read_to_string(&svg).unwrap();
        let (lines, dots) = GrowthConfig {
            generations: 4,
            ..GrowthConfig::default()
        }
        .expected_counts();
        assert_eq!(text.matches("<line").count(), lines + 1);
        assert_eq!(text.matches("<circle").count(), dots);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
