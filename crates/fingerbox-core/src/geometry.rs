//! Planar geometry primitives
//!
//! Everything the cut plan produces lives in one shared 2D drawing space
//! with the Y axis pointing down, as in an SVG document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point (or displacement) in drawing space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise minimum
    pub fn min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    pub fn max(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Axis-aligned travel direction of a panel edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    PosX,
    PosY,
    NegX,
    NegY,
}

impl Direction {
    /// Unit travel vector
    pub fn unit(self) -> Point {
        match self {
            Direction::PosX => Point::new(1.0, 0.0),
            Direction::PosY => Point::new(0.0, 1.0),
            Direction::NegX => Point::new(-1.0, 0.0),
            Direction::NegY => Point::new(0.0, -1.0),
        }
    }

    /// Positive unit vector of the axis perpendicular to travel.
    ///
    /// The sign of a tab step is carried by the tab height, not by the
    /// direction, so this is `+Y` for both X directions and `+X` for both
    /// Y directions.
    pub fn across(self) -> Point {
        if self.is_horizontal() {
            Point::new(0.0, 1.0)
        } else {
            Point::new(1.0, 0.0)
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::PosX | Direction::NegX)
    }

    /// Keep the perpendicular component of `point` and replace the
    /// travel-axis component with the one from `anchor`.
    pub fn align_to(self, point: Point, anchor: Point) -> Point {
        if self.is_horizontal() {
            Point::new(anchor.x, point.y)
        } else {
            Point::new(point.x, anchor.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -4.0);
        assert_eq!(a + b, Point::new(4.0, -2.0));
        assert_eq!(a - b, Point::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!(a.min(b), Point::new(1.0, -4.0));
        assert_eq!(a.max(b), Point::new(3.0, 2.0));
    }

    #[test]
    fn test_direction_vectors() {
        assert_eq!(Direction::PosX.unit(), Point::new(1.0, 0.0));
        assert_eq!(Direction::NegY.unit(), Point::new(0.0, -1.0));
        assert_eq!(Direction::NegX.across(), Point::new(0.0, 1.0));
        assert_eq!(Direction::NegY.across(), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_align_to_resets_travel_axis() {
        let p = Point::new(13.0, 20.0);
        let anchor = Point::new(10.0, 0.0);
        assert_eq!(Direction::PosX.align_to(p, anchor), Point::new(10.0, 20.0));
        assert_eq!(Direction::NegY.align_to(p, anchor), Point::new(13.0, 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "1.5,-2");
    }
}
