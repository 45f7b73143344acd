//! 2D line segment type.

use super::number::ExactNumber;
use super::{Point2, Vec2};

/// A 2D line segment defined by two endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a segment from integer coordinate pairs.
    #[inline]
    pub fn from_coords(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self {
            start: Point2::from_ints(x1, y1),
            end: Point2::from_ints(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        &self.end - &self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(&self) -> ExactNumber {
        self.start.distance_squared(&self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Point2 {
        self.start.midpoint(&self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    /// - Values outside [0, 1] extrapolate beyond the segment
    #[inline]
    pub fn point_at(&self, t: &ExactNumber) -> Point2 {
        self.start.lerp(&self.end, t)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
        }
    }

    /// Returns true if both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns the endpoints ordered lexicographically.
    #[inline]
    pub fn sorted_endpoints(&self) -> (&Point2, &Point2) {
        if self.start <= self.end {
            (&self.start, &self.end)
        } else {
            (&self.end, &self.start)
        }
    }
}
