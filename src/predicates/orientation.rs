use crate::primitives::{ExactNumber, Point2, Vec2};
use num_traits::{Signed, Zero};
use std::cmp::Ordering;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear.
    Collinear,
}

impl Orientation {
    /// Returns the orientation with the turn direction flipped.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
            Self::Collinear => Self::Collinear,
        }
    }

    #[inline]
    pub(crate) fn from_sign(value: &ExactNumber) -> Self {
        if value.is_positive() {
            Self::CounterClockwise
        } else if value.is_negative() {
            Self::Clockwise
        } else {
            Self::Collinear
        }
    }
}

/// Twice the signed area of the triangle `a`, `b`, `c`.
///
/// This is the cross product `(b - a) × (c - a)`.
#[inline]
pub fn cross(a: &Point2, b: &Point2, c: &Point2) -> ExactNumber {
    (b - a).cross(&(c - a))
}

/// Computes the exact orientation of three points.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if `c` is on the line
///
/// The sign of the cross product is evaluated in exact arithmetic, so there
/// is no tolerance and no misclassification near the line.
///
/// # Example
///
/// ```
/// use planum::{orient2d, Orientation, Point2};
///
/// let a = Point2::from_ints(0, 0);
/// let b = Point2::from_ints(4, 0);
/// assert_eq!(orient2d(&a, &b, &Point2::from_ints(1, 1)), Orientation::CounterClockwise);
/// assert_eq!(orient2d(&a, &b, &Point2::from_ints(9, 0)), Orientation::Collinear);
/// ```
#[inline]
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    Orientation::from_sign(&cross(a, b, c))
}

/// Orders two non-zero directions by angle, counter-clockwise from the
/// positive x axis. The positive x axis itself comes first.
pub fn compare_directions(u: &Vec2, v: &Vec2) -> Ordering {
    let upper = |w: &Vec2| w.y.is_positive() || (w.y.is_zero() && w.x.is_positive());
    match (upper(u), upper(v)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => {
            let c = u.cross(v);
            if c.is_positive() {
                Ordering::Less
            } else if c.is_negative() {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }
}
