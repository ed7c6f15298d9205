//! Wrapper module to allow switching the float type globally.
//!
//! The constants from `f32`/`f64` are glob imported into this module, so that they can be used
//! elsewhere.

/// Type alias for the selected global float type
///
/// Branch lengths shrink geometrically with depth, so we want the extra precision of `f64` when
/// checking them against the trunk.
pub type Float = f64;

// import the float constants
pub use std::f64::consts::*;

/// The golden ratio, used as the default length decay between a branch and its children
pub const GOLDEN_RATIO: Float = 1.618;
