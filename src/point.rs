//! Wrapper module around the `Point` type

use crate::Float;
use std::ops::*;

/// A point on the drawing surface, used for the trunk endpoints and every branch tip
///
/// Coordinates are in screen units: positive X is to the right and positive Y is *down*, the same
/// as the pointer events we receive. An angle of π/2 therefore points straight down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: Float,
    pub y: Float,
}

impl Point {
    pub const fn new(x: Float, y: Float) -> Self {
        Point { x, y }
    }

    /// Returns the Euclidean distance between the two points
    pub fn distance_to(self, other: Point) -> Float {
        let delta = other - self;
        delta.x.hypot(delta.y)
    }

    /// Returns the direction from `self` towards `other`, in radians
    ///
    /// This is `atan2(dy, dx)`, so the result is always within -π..=π. Two equal points give an
    /// angle of zero.
    pub fn angle_to(self, other: Point) -> Float {
        let delta = other - self;
        delta.y.atan2(delta.x)
    }

    /// Returns the point that is `length` away from `self` in the direction given by `angle`
    pub fn project(self, length: Float, angle: Float) -> Point {
        Point {
            // x + L*cos(θ)
            x: self.x + length * angle.cos(),
            // y + L*sin(θ)
            y: self.y + length * angle.sin(),
        }
    }
}

impl Add<Point> for Point {
    type Output = Self;

    fn add(self, other: Point) -> Self {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub<Point> for Point {
    type Output = Self;

    fn sub(self, other: Point) -> Self {
        self + -1.0 * other
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<Point> for Float {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        point * self
    }
}

impl Mul<Float> for Point {
    type Output = Self;

    fn mul(self, scale: Float) -> Self {
        Point {
            x: scale * self.x,
            y: scale * self.y,
        }
    }
}
