//! Wrapper module for the JSON config file, rooted at [`TreeConfig`]
//!
//! Every field is optional; anything left out keeps its built-in default. A complete file looks
//! like:
//!
//! ```json
//! {
//!     "growth": {
//!         "generations": 8,
//!         "children": 3,
//!         "decay_factor": 1.618,
//!         "half_angle": 1.5707963,
//!         "blossom_diameter": 4.0
//!     },
//!     "palette": {
//!         "background": "#000000",
//!         "trunk": "#663300",
//!         "branch": "#006600"
//!     }
//! }
//! ```

use crate::gen::GrowthConfig;
use crate::palette::{self, Color, Palette};

use eyre::{eyre, Context};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The maximum number of generations we'll accept. Together with [`MAX_CHILDREN`], this keeps the
/// number of generated branches within something that can actually be drawn.
pub const MAX_GENERATIONS: u32 = 16;

/// The maximum number of children per branch
pub const MAX_CHILDREN: u32 = 16;

/// The maximum total number of branches and blossoms in a single tree
pub const MAX_COMMANDS: usize = 5_000_000;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    pub growth: GrowthConfig,
    pub palette: PaletteConfig,
}

/// Palette overrides, each given as a `#rrggbb` or `#rrggbbaa` string
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub background: Option<String>,
    pub trunk: Option<String>,
    pub branch: Option<String>,
}

impl TreeConfig {
    /// Reads and validates the config at the given path
    pub fn from_file(file: &Path) -> eyre::Result<Self> {
        let file_content = fs::read_to_string(file)
            .wrap_err_with(|| format!("failed to read file at {:?}", file.to_string_lossy()))?;

        Self::from_json(&file_content)
    }

    pub fn from_json(s: &str) -> eyre::Result<Self> {
        let parsed: TreeConfig =
            serde_json::from_str(s).wrap_err("could not deserialize JSON structure")?;

        validate_growth(&parsed.growth)?;
        // Check the colors now, so that errors show up before anything is drawn
        parsed.palette.resolve()?;

        Ok(parsed)
    }
}

impl PaletteConfig {
    /// Applies the overrides on top of the default palette
    pub fn resolve(&self) -> eyre::Result<Palette> {
        fn pick(name: &str, value: &Option<String>, default: Color) -> eyre::Result<Color> {
            match value {
                None => Ok(default),
                Some(s) => palette::parse_hex(s)
                    .ok_or_else(|| eyre!("palette `{}`: {:?} is not a #rrggbb color", name, s)),
            }
        }

        let default = Palette::default();
        Ok(Palette {
            background: pick("background", &self.background, default.background)?,
            trunk: pick("trunk", &self.trunk, default.trunk)?,
            branch: pick("branch", &self.branch, default.branch)?,
        })
    }
}

/// Checks that the growth parameters describe a tree that we can reasonably draw
///
/// The generator itself accepts anything, but a config file asking for a decay factor below one
/// (branches that grow) or millions of branches is almost certainly a mistake.
pub fn validate_growth(growth: &GrowthConfig) -> eyre::Result<()> {
    if growth.generations > MAX_GENERATIONS {
        return Err(eyre!(
            "`generations` must be at most {} (got {})",
            MAX_GENERATIONS,
            growth.generations
        ));
    }

    if growth.children > MAX_CHILDREN {
        return Err(eyre!(
            "`children` must be at most {} (got {})",
            MAX_CHILDREN,
            growth.children
        ));
    }

    let (lines, dots) = growth.expected_counts();
    if lines.saturating_add(dots) > MAX_COMMANDS {
        return Err(eyre!(
            "{} children over {} generations would make too many branches (limit: {})",
            growth.children,
            growth.generations,
            MAX_COMMANDS
        ));
    }

    if !growth.decay_factor.is_finite() || growth.decay_factor <= 1.0 {
        return Err(eyre!(
            "`decay_factor` must be a finite number greater than 1 (got {})",
            growth.decay_factor
        ));
    }

    if !growth.half_angle.is_finite() {
        return Err(eyre!("`half_angle` must be finite"));
    }

    if !growth.blossom_diameter.is_finite() || growth.blossom_diameter < 0.0 {
        return Err(eyre!(
            "`blossom_diameter` must be >= 0 (got {})",
            growth.blossom_diameter
        ));
    }

    Ok(())
}
