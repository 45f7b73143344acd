use super::intersect::point_on_segment;
use super::orientation::{orient2d, Orientation};
use crate::primitives::{Point2, Segment2};

/// Where a point lies relative to a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointLocation {
    /// Strictly outside.
    Outside,
    /// Strictly inside.
    Inside,
    /// On one of the ring's edges or vertices.
    OnBoundary,
}

impl PointLocation {
    /// Closed-region membership: inside or on the boundary.
    #[inline]
    pub fn is_inside_or_on(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// Locates a point relative to a simple ring of vertices.
///
/// The ring is implicitly closed. Boundary points are detected first; the
/// remaining cases use an exact winding count, so the result does not depend
/// on the ring's orientation.
///
/// # Arguments
///
/// * `p` - The point to locate
/// * `ring` - Vertices of a simple polygon, in either orientation
///
/// # Returns
///
/// `OnBoundary` if `p` lies on an edge, otherwise `Inside` or `Outside`.
pub fn locate_point(p: &Point2, ring: &[Point2]) -> PointLocation {
    let n = ring.len();
    if n == 0 {
        return PointLocation::Outside;
    }

    let mut winding: i64 = 0;
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        if point_on_segment(p, &Segment2::new(a.clone(), b.clone())) {
            return PointLocation::OnBoundary;
        }
        if a.y <= p.y {
            if b.y > p.y && orient2d(a, b, p) == Orientation::CounterClockwise {
                winding += 1;
            }
        } else if b.y <= p.y && orient2d(a, b, p) == Orientation::Clockwise {
            winding -= 1;
        }
    }

    if winding != 0 {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::exact_ratio;

    fn ring(coords: &[(i64, i64)]) -> Vec<Point2> {
        coords.iter().map(|&c| Point2::from(c)).collect()
    }

    #[test]
    fn test_locate_in_square() {
        let sq = ring(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        assert_eq!(locate_point(&Point2::from_ints(2, 2), &sq), PointLocation::Inside);
        assert_eq!(locate_point(&Point2::from_ints(5, 2), &sq), PointLocation::Outside);
        assert_eq!(locate_point(&Point2::from_ints(4, 2), &sq), PointLocation::OnBoundary);
        assert_eq!(locate_point(&Point2::from_ints(0, 0), &sq), PointLocation::OnBoundary);
    }

    #[test]
    fn test_locate_ignores_orientation() {
        let mut sq = ring(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        sq.reverse();
        assert_eq!(locate_point(&Point2::from_ints(1, 3), &sq), PointLocation::Inside);
        assert_eq!(locate_point(&Point2::from_ints(-1, 3), &sq), PointLocation::Outside);
    }

    #[test]
    fn test_locate_ray_through_vertex() {
        // The horizontal through (2, 2) passes exactly through the reflex vertex.
        let notch = ring(&[(0, 0), (4, 0), (4, 4), (2, 2), (0, 4)]);
        assert_eq!(locate_point(&Point2::from_ints(1, 2), &notch), PointLocation::Inside);
        assert_eq!(locate_point(&Point2::from_ints(3, 2), &notch), PointLocation::Inside);
        assert_eq!(locate_point(&Point2::from_ints(2, 3), &notch), PointLocation::Outside);
        assert_eq!(locate_point(&Point2::from_ints(5, 2), &notch), PointLocation::Outside);
    }

    #[test]
    fn test_locate_rational_point_near_edge() {
        let tri = ring(&[(0, 0), (3, 0), (0, 3)]);
        let just_inside = Point2::new(
            exact_ratio(3, 2).unwrap(),
            exact_ratio(1_499_999, 1_000_000).unwrap(),
        );
        let on_edge = Point2::new(exact_ratio(3, 2).unwrap(), exact_ratio(3, 2).unwrap());
        assert_eq!(locate_point(&just_inside, &tri), PointLocation::Inside);
        assert_eq!(locate_point(&on_edge, &tri), PointLocation::OnBoundary);
    }

    #[test]
    fn test_closed_membership() {
        assert!(PointLocation::OnBoundary.is_inside_or_on());
        assert!(PointLocation::Inside.is_inside_or_on());
        assert!(!PointLocation::Outside.is_inside_or_on());
    }
}
