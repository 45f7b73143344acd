use super::orientation::{orient2d, Orientation};
use crate::primitives::{Point2, Segment2};

/// Result of a segment intersection test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentIntersection {
    /// Segments do not intersect.
    None,
    /// Segments meet in exactly one point (crossing or touching).
    Point(Point2),
    /// Segments are collinear and share a sub-segment of positive length.
    Overlapping {
        /// Lexicographically smaller end of the shared part.
        start: Point2,
        /// Lexicographically larger end of the shared part.
        end: Point2,
    },
}

impl SegmentIntersection {
    /// Returns true unless the result is `None`.
    #[inline]
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Checks if a point lies on a closed line segment.
///
/// A degenerate segment contains only its single point.
#[inline]
pub fn point_on_segment(p: &Point2, segment: &Segment2) -> bool {
    let (lo, hi) = segment.sorted_endpoints();
    if orient2d(&segment.start, &segment.end, p) != Orientation::Collinear {
        return false;
    }
    let (min_y, max_y) = if lo.y <= hi.y {
        (&lo.y, &hi.y)
    } else {
        (&hi.y, &lo.y)
    };
    &lo.x <= &p.x && p.x <= hi.x && min_y <= &p.y && &p.y <= max_y
}

/// Tests if two closed line segments intersect.
///
/// Returns information about the intersection:
/// - `None` if segments don't intersect
/// - `Point` if they cross or touch at a single point
/// - `Overlapping` if they are collinear and share a piece of positive length
///
/// Zero-length segments are treated as points.
///
/// # Example
///
/// ```
/// use planum::{segments_intersect, Point2, Segment2, SegmentIntersection};
///
/// let s1 = Segment2::from_coords(0, 0, 2, 2);
/// let s2 = Segment2::from_coords(0, 2, 2, 0);
/// assert_eq!(
///     segments_intersect(&s1, &s2),
///     SegmentIntersection::Point(Point2::from_ints(1, 1))
/// );
/// ```
pub fn segments_intersect(s1: &Segment2, s2: &Segment2) -> SegmentIntersection {
    if s1.is_degenerate() {
        return if point_on_segment(&s1.start, s2) {
            SegmentIntersection::Point(s1.start.clone())
        } else {
            SegmentIntersection::None
        };
    }
    if s2.is_degenerate() {
        return if point_on_segment(&s2.start, s1) {
            SegmentIntersection::Point(s2.start.clone())
        } else {
            SegmentIntersection::None
        };
    }

    let (a, b) = (&s1.start, &s1.end);
    let (c, d) = (&s2.start, &s2.end);
    let o1 = orient2d(a, b, c);
    let o2 = orient2d(a, b, d);

    if o1 == Orientation::Collinear && o2 == Orientation::Collinear {
        // All four points on one line; overlap the lexicographic ranges.
        let (p_lo, p_hi) = s1.sorted_endpoints();
        let (q_lo, q_hi) = s2.sorted_endpoints();
        let lo = p_lo.max(q_lo);
        let hi = p_hi.min(q_hi);
        return match lo.cmp(hi) {
            std::cmp::Ordering::Greater => SegmentIntersection::None,
            std::cmp::Ordering::Equal => SegmentIntersection::Point(lo.clone()),
            std::cmp::Ordering::Less => SegmentIntersection::Overlapping {
                start: lo.clone(),
                end: hi.clone(),
            },
        };
    }

    let o3 = orient2d(c, d, a);
    let o4 = orient2d(c, d, b);

    let proper = o1 != Orientation::Collinear
        && o2 != Orientation::Collinear
        && o3 != Orientation::Collinear
        && o4 != Orientation::Collinear
        && o1 != o2
        && o3 != o4;
    if proper {
        // a + t (b - a) with t = (c - a) × (d - c) / (b - a) × (d - c)
        let dc = d - c;
        let t = (c - a).cross(&dc) / (b - a).cross(&dc);
        return SegmentIntersection::Point(s1.point_at(&t));
    }

    // Touching configurations: some endpoint lies on the other segment.
    if o1 == Orientation::Collinear && point_on_segment(c, s1) {
        return SegmentIntersection::Point(c.clone());
    }
    if o2 == Orientation::Collinear && point_on_segment(d, s1) {
        return SegmentIntersection::Point(d.clone());
    }
    if o3 == Orientation::Collinear && point_on_segment(a, s2) {
        return SegmentIntersection::Point(a.clone());
    }
    if o4 == Orientation::Collinear && point_on_segment(b, s2) {
        return SegmentIntersection::Point(b.clone());
    }
    SegmentIntersection::None
}

/// Splits a segment at the given points.
///
/// Every cut is expected to lie on the segment. Returns the distinct points
/// ordered from `segment.start` to `segment.end`, both endpoints included.
pub(crate) fn split_segment<'a, I>(segment: &Segment2, cuts: I) -> Vec<Point2>
where
    I: IntoIterator<Item = &'a Point2>,
{
    let dir = segment.direction();
    let mut points: Vec<Point2> = vec![segment.start.clone(), segment.end.clone()];
    points.extend(cuts.into_iter().cloned());
    points.sort_by_cached_key(|p| (p - &segment.start).dot(&dir));
    points.dedup();
    points
}

/// True if `p` lies strictly between the endpoints of the segment.
#[inline]
pub(crate) fn point_in_segment_interior(p: &Point2, segment: &Segment2) -> bool {
    p != &segment.start && p != &segment.end && point_on_segment(p, segment)
}
