//! Visibility polygon computation.
//!
//! Computes the set of points of a region visible from a viewpoint: every
//! point whose sight line to the viewpoint stays inside the closed region.
//! Sight lines may graze walls and pass through reflex vertices.
//!
//! # Algorithm
//!
//! [`VisibilityMethod::TriangularExpansion`] triangulates the region, makes
//! the viewpoint a vertex, and expands a view cone from each triangle of
//! its fan across non-wall edges, splitting the cone at every vertex that
//! falls inside it. Cones that reach a wall emit the wall's two hit points.
//!
//! [`VisibilityMethod::RotationalSweep`] casts one exact ray per distinct
//! vertex direction and records, for each ray, the first wall on its
//! clockwise and counter-clockwise sides.
//!
//! # Example
//!
//! ```
//! use planum::polygon::{compute_visibility, PlanarRegion, Polygon, VisibilityMethod};
//! use planum::primitives::exact;
//! use planum::Point2;
//!
//! // An L-shaped room
//! let room = PlanarRegion::new(Polygon::from_coords(&[
//!     (0, 0), (4, 0), (4, 2), (2, 2), (2, 4), (0, 4),
//! ]))
//! .unwrap();
//!
//! let visible = compute_visibility(
//!     VisibilityMethod::TriangularExpansion,
//!     &Point2::from_ints(3, 1),
//!     &room,
//! )
//! .unwrap();
//! // The reflex corner hides part of the upper arm.
//! assert_eq!(visible.area(), exact(10));
//! ```

use super::core::{Polygon, PolygonOrientation};
use super::region::PlanarRegion;
use super::triangulate::{triangulate_region, RegionTriangulation};
use crate::error::{GeometryError, GeometryResult};
use crate::predicates::{
    compare_directions, orient2d, segments_intersect, split_segment, Orientation, PointLocation,
    SegmentIntersection,
};
use crate::primitives::{ExactNumber, Point2, Segment2, Vec2};
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, debug_span};

/// Algorithm used by [`compute_visibility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityMethod {
    /// Cone expansion through a triangulation. Handles boundary viewpoints.
    #[default]
    TriangularExpansion,
    /// Angular ray sweep. Viewpoints must be strictly inside the region.
    RotationalSweep,
}

impl VisibilityMethod {
    /// Both methods.
    pub const ALL: [VisibilityMethod; 2] = [Self::TriangularExpansion, Self::RotationalSweep];

    /// Human-readable name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::TriangularExpansion => "triangular expansion",
            Self::RotationalSweep => "rotational sweep",
        }
    }
}

impl fmt::Display for VisibilityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The region visible from a viewpoint.
///
/// The region has no holes and its boundary is counter-clockwise. The
/// viewpoint lies in its closure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityRegion {
    region: PlanarRegion,
    viewpoint: Point2,
}

impl VisibilityRegion {
    /// The visible set as a region.
    #[inline]
    pub fn region(&self) -> &PlanarRegion {
        &self.region
    }

    /// The point the region is seen from.
    #[inline]
    pub fn viewpoint(&self) -> &Point2 {
        &self.viewpoint
    }

    /// The visible set's boundary.
    #[inline]
    pub fn polygon(&self) -> &Polygon {
        self.region.boundary()
    }

    /// Exact area of the visible set.
    pub fn area(&self) -> ExactNumber {
        self.region.area()
    }

    /// Closed containment in the visible set.
    pub fn contains(&self, point: &Point2) -> bool {
        self.region.contains(point)
    }

    /// Unwraps the visible set.
    pub fn into_region(self) -> PlanarRegion {
        self.region
    }

    /// Boundary vertices rounded to `f64`.
    pub fn to_f64(&self) -> Vec<(f64, f64)> {
        self.polygon().to_f64()
    }
}

/// Computes the region visible from `query` inside `region`.
///
/// # Arguments
///
/// * `method` - Which algorithm to run
/// * `query` - The viewpoint; may lie on the boundary for triangular expansion
/// * `region` - The region to look around in
///
/// # Errors
///
/// - [`GeometryError::PointOutsideRegion`] if `query` is outside the closed
///   region (including strictly inside a hole).
/// - [`GeometryError::UnsupportedOperation`] if `query` is a vertex where
///   rings touch, if the rotational sweep is given a boundary point, or if
///   the visible set is not a simple polygon.
pub fn compute_visibility(
    method: VisibilityMethod,
    query: &Point2,
    region: &PlanarRegion,
) -> GeometryResult<VisibilityRegion> {
    let span = debug_span!("visibility", %method, holes = region.hole_count());
    let _enter = span.enter();

    let location = region.locate(query);
    if location == PointLocation::Outside {
        return Err(GeometryError::PointOutsideRegion);
    }

    let outline = match method {
        VisibilityMethod::TriangularExpansion => triangular_expansion(region, query)?,
        VisibilityMethod::RotationalSweep => {
            if location == PointLocation::OnBoundary {
                return Err(GeometryError::unsupported(
                    "rotational sweep",
                    "viewpoint on the boundary",
                ));
            }
            rotational_sweep(region, query)?
        }
    };

    let polygon = Polygon::new(tidy(outline));
    if !polygon.is_simple() || polygon.orientation() != PolygonOrientation::CounterClockwise {
        return Err(GeometryError::unsupported(
            "visibility",
            "visible set is not a simple polygon",
        ));
    }
    debug!(vertices = polygon.len(), "visibility polygon computed");

    Ok(VisibilityRegion {
        region: PlanarRegion::from_parts(polygon, Vec::new()),
        viewpoint: query.clone(),
    })
}

/// True if the closed segment from `viewpoint` to `target` lies in the
/// closed region.
pub fn is_visible(region: &PlanarRegion, viewpoint: &Point2, target: &Point2) -> bool {
    if !region.contains(viewpoint) || !region.contains(target) {
        return false;
    }
    let sight = Segment2::new(viewpoint.clone(), target.clone());
    let mut cuts = Vec::new();
    for wall in region.edges() {
        match segments_intersect(&sight, &wall) {
            SegmentIntersection::None => {}
            SegmentIntersection::Point(p) => cuts.push(p),
            SegmentIntersection::Overlapping { start, end } => {
                cuts.push(start);
                cuts.push(end);
            }
        }
    }
    split_segment(&sight, &cuts)
        .windows(2)
        .all(|w| region.contains(&w[0].midpoint(&w[1])))
}

/// Drops repeated and collinear vertices from a closed outline.
fn tidy(outline: Vec<Point2>) -> Vec<Point2> {
    let mut ring: Vec<Point2> = Vec::with_capacity(outline.len());
    for p in outline {
        if ring.last() != Some(&p) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }

    let mut i = 0;
    let mut stable = 0;
    while ring.len() >= 3 && stable < ring.len() {
        let n = ring.len();
        let (prev, next) = ((i + n - 1) % n, (i + 1) % n);
        if orient2d(&ring[prev], &ring[i], &ring[next]) == Orientation::Collinear {
            ring.remove(i);
            stable = 0;
            i = if i == 0 { 0 } else { i - 1 };
        } else {
            stable += 1;
            i = (i + 1) % n;
        }
        if i >= ring.len() {
            i = 0;
        }
    }
    ring
}

/// Where the ray from `q` through `through` meets the line of `x`–`y`.
fn ray_hit(q: &Point2, through: &Point2, x: &Point2, y: &Point2) -> GeometryResult<Point2> {
    let d = through - q;
    let e = y - x;
    let denom = d.cross(&e);
    if denom.is_zero() {
        return Err(GeometryError::unsupported(
            "triangular expansion",
            "view ray parallel to a wall",
        ));
    }
    let t = (x - q).cross(&e) / denom;
    Ok(q + &(&d * &t))
}

fn triangular_expansion(region: &PlanarRegion, query: &Point2) -> GeometryResult<Vec<Point2>> {
    let mut triangulation = triangulate_region(region)?;
    let q = triangulation
        .insert_vertex(query)
        .ok_or(GeometryError::PointOutsideRegion)?;

    // Fan triangles rotated to start at q, keyed by their first spoke.
    let mut fan: HashMap<usize, [usize; 3]> = HashMap::new();
    for &[a, b, c] in triangulation.triangles() {
        let rotated = if a == q {
            [a, b, c]
        } else if b == q {
            [b, c, a]
        } else if c == q {
            [c, a, b]
        } else {
            continue;
        };
        fan.insert(rotated[1], rotated);
    }

    let starts: Vec<usize> = fan
        .keys()
        .copied()
        .filter(|&a| triangulation.triangle_with_edge(a, q).is_none())
        .collect();
    let (first, open) = match starts[..] {
        [] => (fan.keys().copied().min(), false),
        [a] => (Some(a), true),
        _ => {
            return Err(GeometryError::unsupported(
                "triangular expansion",
                "viewpoint joins separate parts of the region",
            ))
        }
    };
    let first = first.ok_or(GeometryError::PointOutsideRegion)?;

    let mut order = Vec::with_capacity(fan.len());
    let mut spoke = first;
    while let Some(&triangle) = fan.get(&spoke) {
        order.push(triangle);
        spoke = triangle[2];
        if spoke == first || order.len() > fan.len() {
            break;
        }
    }
    if order.len() != fan.len() {
        return Err(GeometryError::unsupported(
            "triangular expansion",
            "viewpoint fan is not connected",
        ));
    }

    let points = triangulation.points();
    let mut outline = Vec::new();
    if open {
        outline.push(query.clone());
    }
    for [_, a, b] in order {
        expand(&triangulation, query, a, b, &points[a], &points[b], &mut outline)?;
    }
    debug!(fan = fan.len(), open, "view cones expanded");
    Ok(outline)
}

/// Expands the cone between the rays through `right` and `left` across the
/// edge `x → y`, where `x` is clockwise of `y` as seen from `q`.
fn expand(
    triangulation: &RegionTriangulation,
    q: &Point2,
    x: usize,
    y: usize,
    right: &Point2,
    left: &Point2,
    outline: &mut Vec<Point2>,
) -> GeometryResult<()> {
    let points = triangulation.points();
    let Some(t) = triangulation.neighbour(x, y) else {
        outline.push(ray_hit(q, right, &points[x], &points[y])?);
        outline.push(ray_hit(q, left, &points[x], &points[y])?);
        return Ok(());
    };

    let c = triangulation.triangles()[t]
        .into_iter()
        .find(|&v| v != x && v != y)
        .ok_or_else(|| {
            GeometryError::unsupported("triangular expansion", "degenerate triangle")
        })?;
    let apex = &points[c];

    if orient2d(q, right, apex) != Orientation::CounterClockwise {
        expand(triangulation, q, c, y, right, left, outline)
    } else if orient2d(q, left, apex) != Orientation::Clockwise {
        expand(triangulation, q, x, c, right, left, outline)
    } else {
        expand(triangulation, q, x, c, right, apex, outline)?;
        expand(triangulation, q, c, y, apex, left, outline)
    }
}

fn rotational_sweep(region: &PlanarRegion, query: &Point2) -> GeometryResult<Vec<Point2>> {
    let walls: Vec<Segment2> = region.edges().collect();

    let mut directions: Vec<Vec2> = region
        .rings()
        .flat_map(|ring| ring.vertices())
        .map(|v| v - query)
        .collect();
    directions.sort_by(compare_directions);
    directions.dedup_by(|a, b| compare_directions(a, b) == Ordering::Equal);

    let mut outline = Vec::with_capacity(directions.len() * 2);
    for direction in &directions {
        let (right, left) = cast_ray(query, direction, &walls).ok_or_else(|| {
            GeometryError::unsupported("rotational sweep", "ray escaped the region")
        })?;
        outline.push(right);
        outline.push(left);
    }
    debug!(rays = directions.len(), "rays cast");
    Ok(outline)
}

fn keep_nearest(slot: &mut Option<ExactNumber>, t: ExactNumber) {
    if slot.as_ref().map_or(true, |best| t < *best) {
        *slot = Some(t);
    }
}

/// Parameter of `p` along the ray `q + t·d`, if it lies ahead of `q`.
fn ahead(q: &Point2, d: &Vec2, p: &Point2) -> Option<ExactNumber> {
    let t = (p - q).dot(d) / d.magnitude_squared();
    t.is_positive().then_some(t)
}

/// Casts the ray `q + t·d` and returns the first wall hits just clockwise
/// and just counter-clockwise of it.
fn cast_ray(q: &Point2, d: &Vec2, walls: &[Segment2]) -> Option<(Point2, Point2)> {
    let through = q + d;
    let mut right: Option<ExactNumber> = None;
    let mut left: Option<ExactNumber> = None;

    for wall in walls {
        let start_side = orient2d(q, &through, &wall.start);
        let end_side = orient2d(q, &through, &wall.end);
        let (touch, side) = match (start_side, end_side) {
            (Orientation::Collinear, Orientation::Collinear) => continue,
            (Orientation::Collinear, side) => (&wall.start, side),
            (side, Orientation::Collinear) => (&wall.end, side),
            (s, e) if s == e => continue,
            _ => {
                let e = wall.direction();
                let t = (&wall.start - q).cross(&e) / d.cross(&e);
                if t.is_positive() {
                    keep_nearest(&mut right, t.clone());
                    keep_nearest(&mut left, t);
                }
                continue;
            }
        };
        // A wall ending on the ray blocks only the side it extends into.
        if let Some(t) = ahead(q, d, touch) {
            match side {
                Orientation::Clockwise => keep_nearest(&mut right, t),
                _ => keep_nearest(&mut left, t),
            }
        }
    }

    let at = |t: ExactNumber| q + &(d * &t);
    Some((at(right?), at(left?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{exact, exact_ratio};

    fn room(coords: &[(i64, i64)]) -> PlanarRegion {
        PlanarRegion::new(Polygon::from_coords(coords)).unwrap()
    }

    fn square_with_hole() -> PlanarRegion {
        room(&[(0, 0), (10, 0), (10, 10), (0, 10)])
            .with_hole(Polygon::from_coords(&[(4, 4), (6, 4), (6, 6), (4, 6)]))
            .unwrap()
    }

    fn l_room() -> PlanarRegion {
        room(&[(0, 0), (4, 0), (4, 2), (2, 2), (2, 4), (0, 4)])
    }

    fn assert_star_shaped(visible: &VisibilityRegion, region: &PlanarRegion) {
        let outline = visible.polygon().vertices();
        for (i, v) in outline.iter().enumerate() {
            let next = &outline[(i + 1) % outline.len()];
            assert!(region.contains(v), "vertex {v} outside region");
            assert!(region.contains(&v.midpoint(next)));
            assert!(is_visible(visible.region(), visible.viewpoint(), v));
        }
        assert!(visible.contains(visible.viewpoint()));
        assert!(visible.area() <= region.area());
    }

    #[test]
    fn test_convex_room_is_fully_visible() {
        let r = room(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        for method in VisibilityMethod::ALL {
            let visible = compute_visibility(method, &Point2::from_ints(5, 5), &r).unwrap();
            assert_eq!(visible.area(), exact(100));
            assert_eq!(visible.polygon().len(), 4);
        }
    }

    #[test]
    fn test_l_room_corner_hides_arm() {
        let r = l_room();
        for method in VisibilityMethod::ALL {
            let visible = compute_visibility(method, &Point2::from_ints(3, 1), &r).unwrap();
            assert_eq!(visible.area(), exact(10), "{method}");
            let expected = Polygon::from_coords(&[(0, 0), (4, 0), (4, 2), (2, 2), (0, 4)]);
            assert!(visible.polygon().is_rotation_of(&expected));
            assert_star_shaped(&visible, &r);
        }
    }

    #[test]
    fn test_l_room_whole_from_corner_square() {
        let visible =
            compute_visibility(VisibilityMethod::default(), &Point2::from_ints(1, 1), &l_room())
                .unwrap();
        assert_eq!(visible.area(), exact(12));
    }

    #[test]
    fn test_hole_casts_shadow() {
        let r = square_with_hole();
        let q = Point2::from_ints(1, 1);
        let expansion = compute_visibility(VisibilityMethod::TriangularExpansion, &q, &r).unwrap();
        let sweep = compute_visibility(VisibilityMethod::RotationalSweep, &q, &r).unwrap();

        assert_eq!(expansion.area(), sweep.area());
        assert!(expansion.area() < exact(96));
        assert!(!expansion.contains(&Point2::from_ints(5, 5)));
        assert!(!expansion.contains(&Point2::from_ints(9, 9)));
        assert!(expansion.contains(&Point2::from_ints(9, 1)));
        assert_star_shaped(&expansion, &r);
        assert_star_shaped(&sweep, &r);
    }

    #[test]
    fn test_fractional_viewpoint() {
        let r = square_with_hole();
        let q = Point2::new(exact_ratio(15, 2).unwrap(), exact_ratio(1, 3).unwrap());
        let expansion = compute_visibility(VisibilityMethod::TriangularExpansion, &q, &r).unwrap();
        let sweep = compute_visibility(VisibilityMethod::RotationalSweep, &q, &r).unwrap();
        assert_eq!(expansion.area(), sweep.area());
        assert_star_shaped(&expansion, &r);
    }

    #[test]
    fn test_boundary_viewpoint() {
        let r = square_with_hole();
        let q = Point2::from_ints(5, 0);
        let visible = compute_visibility(VisibilityMethod::TriangularExpansion, &q, &r).unwrap();
        assert!(visible.contains(&q));
        assert!(!visible.contains(&Point2::from_ints(5, 9)));
        assert_star_shaped(&visible, &r);

        assert!(matches!(
            compute_visibility(VisibilityMethod::RotationalSweep, &q, &r),
            Err(GeometryError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_corner_viewpoint() {
        let r = room(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let visible =
            compute_visibility(VisibilityMethod::TriangularExpansion, &Point2::from_ints(0, 0), &r)
                .unwrap();
        assert_eq!(visible.area(), exact(100));
    }

    #[test]
    fn test_viewpoint_outside() {
        let r = square_with_hole();
        for method in VisibilityMethod::ALL {
            assert_eq!(
                compute_visibility(method, &Point2::from_ints(20, 20), &r),
                Err(GeometryError::PointOutsideRegion)
            );
            assert_eq!(
                compute_visibility(method, &Point2::from_ints(5, 5), &r),
                Err(GeometryError::PointOutsideRegion)
            );
        }
    }

    #[test]
    fn test_hole_touching_opposite_edges() {
        let r = room(&[(0, 0), (10, 0), (10, 10), (0, 10)])
            .with_hole(Polygon::from_coords(&[(5, 0), (7, 5), (5, 10), (3, 5)]))
            .unwrap();
        let q = Point2::from_ints(1, 1);
        let expansion = compute_visibility(VisibilityMethod::TriangularExpansion, &q, &r).unwrap();
        let sweep = compute_visibility(VisibilityMethod::RotationalSweep, &q, &r).unwrap();
        assert_eq!(expansion.area(), sweep.area());
        assert!(!expansion.contains(&Point2::from_ints(8, 5)));
        assert!(expansion.area() <= exact(40));
        assert_star_shaped(&expansion, &r);
    }

    #[test]
    fn test_diamond_hole_leaves_corner_rooms() {
        let r = room(&[(0, 0), (10, 0), (10, 10), (0, 10)])
            .with_hole(Polygon::from_coords(&[(5, 0), (10, 5), (5, 10), (0, 5)]))
            .unwrap();
        for method in VisibilityMethod::ALL {
            let visible = compute_visibility(method, &Point2::from_ints(8, 1), &r).unwrap();
            // The bottom-right corner triangle is convex.
            assert_eq!(visible.area(), exact_ratio(25, 2).unwrap());
            assert_star_shaped(&visible, &r);
        }
    }

    #[test]
    fn test_pinch_viewpoint_is_unsupported() {
        let r = room(&[(0, 0), (10, 0), (10, 10), (0, 10)])
            .with_hole(Polygon::from_coords(&[(0, 5), (2, 4), (2, 6)]))
            .unwrap();
        assert!(matches!(
            compute_visibility(VisibilityMethod::TriangularExpansion, &Point2::from_ints(0, 5), &r),
            Err(GeometryError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_is_visible() {
        let r = square_with_hole();
        let p = Point2::from_ints;
        assert!(is_visible(&r, &p(1, 1), &p(9, 1)));
        assert!(!is_visible(&r, &p(1, 1), &p(9, 9)));
        // Grazing along a hole edge is allowed.
        assert!(is_visible(&r, &p(2, 4), &p(8, 4)));
        assert!(is_visible(&r, &p(1, 1), &p(1, 1)));
        assert!(!is_visible(&r, &p(1, 1), &p(5, 5)));
    }

    #[test]
    fn test_tidy_drops_repeats_and_straight_vertices() {
        let p = Point2::from_ints;
        let ring = tidy(vec![p(0, 0), p(1, 0), p(1, 0), p(2, 0), p(2, 2), p(0, 2), p(0, 0)]);
        assert_eq!(ring, vec![p(0, 0), p(2, 0), p(2, 2), p(0, 2)]);
    }
}
