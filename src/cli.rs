//! Command-line argument handling
//!
//! Everything here just fills out an [`AppSettings`] and hands it off to [`AppSettings::run`].

use crate::config::{self, TreeConfig};
use crate::gen::GrowthConfig;
use crate::img::PixelCount;
use crate::palette::Palette;
use crate::{AppSettings, Float, Point};

use clap::{App, Arg, ArgMatches};
use eyre::{eyre, Context};
use std::path::{Path, PathBuf};
use std::process::exit;
use std::str::FromStr;

/// Default canvas size, matching a single-tree painting window
const DEFAULT_WIDTH: &str = "400";
const DEFAULT_HEIGHT: &str = "500";

/// The format that the painted tree gets written in
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    /// Picks the format from the file extension, falling back to PNG
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Png,
        }
    }
}

/// Parses the command-line arguments and runs the app, exiting on failure
pub fn run() {
    let matches = app().get_matches();

    let settings = settings_from_matches(&matches).unwrap_or_else(|e| {
        eprintln!("{:?}", e.wrap_err("invalid arguments"));
        exit(1)
    });

    if let Err(e) = settings.run() {
        eprintln!("{:?}", e.wrap_err("failed to paint tree"));
        exit(1)
    }
}

fn app() -> App<'static, 'static> {
    App::new("fractal-tree")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Paints a random fractal tree. The trunk is given by a pointer press and release; \
             branches grow recursively from its tip.",
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .default_value("tree.png")
                .help("Where to write the painting. A `.svg` extension writes SVG, anything else PNG"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("PIXELS")
                .default_value(DEFAULT_WIDTH)
                .help("Width of the canvas"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("PIXELS")
                .default_value(DEFAULT_HEIGHT)
                .help("Height of the canvas"),
        )
        .arg(
            Arg::with_name("press")
                .long("press")
                .value_name("X,Y")
                .requires("release")
                .help("Where the pointer is pressed, starting the trunk [default: bottom center]"),
        )
        .arg(
            Arg::with_name("release")
                .long("release")
                .value_name("X,Y")
                .requires("press")
                .help("Where the pointer is released, ending the trunk"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("N")
                .help("Seed for the random branch angles and blossom colors"),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("JSON file with growth and palette settings"),
        )
        .arg(
            Arg::with_name("generations")
                .short("g")
                .long("generations")
                .value_name("N")
                .help("Number of branch levels to grow, overriding the config"),
        )
        .arg(
            Arg::with_name("children")
                .long("children")
                .value_name("N")
                .help("Number of children per branch, overriding the config"),
        )
}

fn settings_from_matches(matches: &ArgMatches) -> eyre::Result<AppSettings> {
    let width: PixelCount = parse_value(matches, "width")?;
    let height: PixelCount = parse_value(matches, "height")?;
    if width == 0 || height == 0 {
        return Err(eyre!("canvas must be at least 1x1 (got {}x{})", width, height));
    }

    // Layer the config: defaults, then the file, then individual flags
    let (mut growth, palette) = match matches.value_of("config") {
        Some(file) => {
            let cfg = TreeConfig::from_file(Path::new(file))?;
            (cfg.growth, cfg.palette.resolve()?)
        }
        None => (GrowthConfig::default(), Palette::default()),
    };

    if matches.is_present("generations") {
        growth.generations = parse_value(matches, "generations")?;
    }
    if matches.is_present("children") {
        growth.children = parse_value(matches, "children")?;
    }
    config::validate_growth(&growth)?;

    let (press, release) = match (matches.value_of("press"), matches.value_of("release")) {
        (Some(p), Some(r)) => (
            parse_point(p).wrap_err("bad value for --press")?,
            parse_point(r).wrap_err("bad value for --release")?,
        ),
        _ => default_gesture(width, height),
    };

    let seed = if matches.is_present("seed") {
        Some(parse_value(matches, "seed")?)
    } else {
        None
    };

    let output = PathBuf::from(matches.value_of("output").unwrap_or("tree.png"));

    Ok(AppSettings {
        width,
        height,
        press,
        release,
        seed,
        growth,
        palette,
        format: OutputFormat::from_path(&output),
        output,
    })
}

/// A vertical drag from the bottom center upwards, covering a fifth of the canvas height
fn default_gesture(width: PixelCount, height: PixelCount) -> (Point, Point) {
    let x = width as Float / 2.0;
    let bottom = height as Float;

    (Point::new(x, bottom), Point::new(x, bottom * 0.8))
}

fn parse_value<T>(matches: &ArgMatches, name: &str) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = matches
        .value_of(name)
        .ok_or_else(|| eyre!("missing value for --{}", name))?;

    raw.parse::<T>()
        .wrap_err_with(|| format!("bad value for --{}: {:?}", name, raw))
}

/// Parses a point written as `X,Y`
fn parse_point(s: &str) -> eyre::Result<Point> {
    let mut parts = s.split(',').map(str::trim);

    let (x, y) = match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => (x, y),
        _ => return Err(eyre!("expected a point like `X,Y`, got {:?}", s)),
    };

    let x: Float = x.parse().wrap_err_with(|| format!("bad X coordinate {:?}", x))?;
    let y: Float = y.parse().wrap_err_with(|| format!("bad Y coordinate {:?}", y))?;

    if !x.is_finite() || !y.is_finite() {
        return Err(eyre!("coordinates must be finite, got {:?}", s));
    }

    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(args: &[&str]) -> eyre::Result<AppSettings> {
        let argv = std::iter::once("fractal-tree").chain(args.iter().copied());
        let matches = app().get_matches_from_safe(argv).map_err(|e| eyre!("{}", e))?;
        settings_from_matches(&matches)
    }

    #[test]
    fn points() {
        assert_eq!(parse_point("10,110").unwrap(), Point::new(10.0, 110.0));
        assert_eq!(parse_point(" 2.5 , -3 ").unwrap(), Point::new(2.5, -3.0));
        assert!(parse_point("10").is_err());
        assert!(parse_point("1,2,3").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("inf,0").is_err());
    }

    #[test]
    fn defaults() {
        let s = settings(&[]).unwrap();

        assert_eq!((s.width, s.height), (400, 500));
        assert_eq!(s.press, Point::new(200.0, 500.0));
        assert_eq!(s.release, Point::new(200.0, 400.0));
        assert_eq!(s.growth, GrowthConfig::default());
        assert_eq!(s.format, OutputFormat::Png);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn flags_override_defaults() {
        let s = settings(&[
            "--press",
            "10,10",
            "--release",
            "10,110",
            "-g",
            "4",
            "--children",
            "2",
            "--seed",
            "17",
            "-o",
            "out/tree.SVG",
        ])
        .unwrap();

        assert_eq!(s.press, Point::new(10.0, 10.0));
        assert_eq!(s.release, Point::new(10.0, 110.0));
        assert_eq!((s.growth.generations, s.growth.children), (4, 2));
        assert_eq!(s.seed, Some(17));
        assert_eq!(s.format, OutputFormat::Svg);
    }

    #[test]
    fn bad_flags() {
        assert!(settings(&["--press", "1,1"]).is_err());
        assert!(settings(&["--width", "0"]).is_err());
        assert!(settings(&["--generations", "many"]).is_err());
        assert!(settings(&["--generations", "99"]).is_err());
        assert!(settings(&["--config", "/nonexistent/tree.json"]).is_err());
    }
}
