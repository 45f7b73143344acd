//! 2D point type with exact coordinates.

use super::number::{exact, exact_from_f64, half, to_f64, ExactNumber};
use super::vec2::Vec2;
use crate::error::{GeometryError, GeometryResult};
use std::fmt;
use std::ops::{Add, Sub};

/// A 2D point with exact rational coordinates.
///
/// Points are ordered lexicographically (by x, then by y). Along any line
/// this order is monotone, which the overlay code relies on when sorting
/// collinear points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: ExactNumber,
    pub y: ExactNumber,
}

impl Point2 {
    /// Creates a new point.
    #[inline]
    pub fn new(x: ExactNumber, y: ExactNumber) -> Self {
        Self { x, y }
    }

    /// Creates a point from integer coordinates.
    #[inline]
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self {
            x: exact(x),
            y: exact(y),
        }
    }

    /// Creates a point from floating-point coordinates.
    ///
    /// The conversion is exact. Fails with [`GeometryError::InvalidCoordinate`]
    /// if either coordinate is NaN or infinite.
    pub fn from_f64(x: f64, y: f64) -> GeometryResult<Self> {
        match (exact_from_f64(x), exact_from_f64(y)) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => Err(GeometryError::InvalidCoordinate),
        }
    }

    /// Rounds the coordinates to `f64` for display.
    pub fn to_f64(&self) -> (f64, f64) {
        (to_f64(&self.x), to_f64(&self.y))
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> ExactNumber {
        (other - self).magnitude_squared()
    }

    /// Returns the midpoint between this point and another.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        let h = half();
        Self {
            x: (&self.x + &other.x) * &h,
            y: (&self.y + &other.y) * &h,
        }
    }

    /// Linearly interpolates towards `other`.
    ///
    /// `t = 0` returns `self`, `t = 1` returns `other`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: &ExactNumber) -> Self {
        self + &(&(other - self) * t)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point2 {
    fn from((x, y): (i64, i64)) -> Self {
        Self::from_ints(x, y)
    }
}

impl Sub for &Point2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: &Point2) -> Vec2 {
        Vec2::new(&self.x - &other.x, &self.y - &other.y)
    }
}

impl Add<&Vec2> for &Point2 {
    type Output = Point2;

    #[inline]
    fn add(self, offset: &Vec2) -> Point2 {
        Point2::new(&self.x + &offset.x, &self.y + &offset.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::number::exact_ratio;

    #[test]
    fn test_from_ints() {
        let p = Point2::from_ints(3, -4);
        assert_eq!(p.x, exact(3));
        assert_eq!(p.y, exact(-4));
        assert_eq!(Point2::from((3, -4)), p);
    }

    #[test]
    fn test_from_f64() {
        let p = Point2::from_f64(0.5, -2.25).unwrap();
        assert_eq!(p.x, exact_ratio(1, 2).unwrap());
        assert_eq!(p.y, exact_ratio(-9, 4).unwrap());
        assert_eq!(p.to_f64(), (0.5, -2.25));
    }

    #[test]
    fn test_from_f64_rejects_nan() {
        assert_eq!(
            Point2::from_f64(f64::NAN, 0.0),
            Err(GeometryError::InvalidCoordinate)
        );
    }

    #[test]
    fn test_midpoint_is_exact() {
        let m = Point2::from_ints(0, 0).midpoint(&Point2::from_ints(1, 3));
        assert_eq!(m.x, exact_ratio(1, 2).unwrap());
        assert_eq!(m.y, exact_ratio(3, 2).unwrap());
    }

    #[test]
    fn test_lerp() {
        let a = Point2::from_ints(0, 0);
        let b = Point2::from_ints(9, 3);
        let t = exact_ratio(1, 3).unwrap();
        assert_eq!(a.lerp(&b, &t), Point2::from_ints(3, 1));
    }

    #[test]
    fn test_lexicographic_order() {
        let a = Point2::from_ints(0, 5);
        let b = Point2::from_ints(1, 0);
        let c = Point2::from_ints(1, 2);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_distance_squared() {
        let a = Point2::from_ints(1, 1);
        let b = Point2::from_ints(4, 5);
        assert_eq!(a.distance_squared(&b), exact(25));
    }

    #[test]
    fn test_display() {
        let p = Point2::new(exact_ratio(1, 2).unwrap(), exact(3));
        assert_eq!(p.to_string(), "(1/2, 3)");
    }
}
