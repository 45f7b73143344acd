//! Core polygon type and exact metrics.

use crate::error::PolygonDefect;
use crate::predicates::{
    cross, locate_point, segments_intersect, PointLocation, SegmentIntersection,
};
use crate::primitives::{exact, half, to_f64, ExactNumber, Point2, Segment2};
use num_traits::{Signed, Zero};
use std::collections::BTreeSet;

/// Winding direction of a polygon's vertex sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolygonOrientation {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero signed area (or fewer than three vertices).
    Degenerate,
}

/// A polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Simplicity and orientation are derived from the vertices when the polygon
/// is built and cannot be set independently. A `Polygon` may be non-simple;
/// [`PlanarRegion`](super::PlanarRegion) only accepts simple ones.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Point2>", into = "Vec<Point2>")
)]
pub struct Polygon {
    vertices: Vec<Point2>,
    simple: bool,
    orientation: PolygonOrientation,
    signed_area: ExactNumber,
}

impl Polygon {
    /// Creates a polygon from vertices.
    ///
    /// Never fails: a self-intersecting input simply reports
    /// `is_simple() == false`.
    pub fn new(vertices: Vec<Point2>) -> Self {
        let simple = find_defect(&vertices).is_none();
        let signed_area = polygon_signed_area(&vertices);
        let orientation = orientation_of(&signed_area);
        Self {
            vertices,
            simple,
            orientation,
            signed_area,
        }
    }

    /// Creates a polygon from integer coordinate pairs.
    pub fn from_coords(coords: &[(i64, i64)]) -> Self {
        Self::new(coords.iter().map(|&c| Point2::from(c)).collect())
    }

    /// The vertices in stored order.
    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the polygon has at least three vertices, no repeated vertex,
    /// and its edges meet only at shared endpoints of adjacent edges.
    #[inline]
    pub fn is_simple(&self) -> bool {
        self.simple
    }

    /// The winding direction, from the sign of the signed area.
    #[inline]
    pub fn orientation(&self) -> PolygonOrientation {
        self.orientation
    }

    /// Returns the signed area (shoelace formula).
    ///
    /// Positive for CCW winding, negative for CW winding.
    #[inline]
    pub fn signed_area(&self) -> &ExactNumber {
        &self.signed_area
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> ExactNumber {
        self.signed_area.abs()
    }

    /// Returns the centroid (center of mass) of the polygon.
    pub fn centroid(&self) -> Option<Point2> {
        polygon_centroid(&self.vertices)
    }

    /// Tests if the polygon is convex.
    pub fn is_convex(&self) -> bool {
        polygon_is_convex(&self.vertices)
    }

    /// Locates a point relative to this polygon.
    pub fn locate(&self, point: &Point2) -> PointLocation {
        locate_point(point, &self.vertices)
    }

    /// Closed containment: true for interior and boundary points.
    pub fn contains(&self, point: &Point2) -> bool {
        self.locate(point).is_inside_or_on()
    }

    /// Iterates over the edges; edge `i` runs from vertex `i` to `i + 1`.
    pub fn edges(&self) -> impl Iterator<Item = Segment2> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            Segment2::new(self.vertices[i].clone(), self.vertices[(i + 1) % n].clone())
        })
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2, Point2)> {
        bounding_box(&self.vertices)
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self {
            vertices,
            simple: self.simple,
            orientation: match self.orientation {
                PolygonOrientation::CounterClockwise => PolygonOrientation::Clockwise,
                PolygonOrientation::Clockwise => PolygonOrientation::CounterClockwise,
                PolygonOrientation::Degenerate => PolygonOrientation::Degenerate,
            },
            signed_area: -&self.signed_area,
        }
    }

    /// True if both polygons list the same vertex cycle, possibly starting
    /// at a different vertex. Direction matters.
    pub fn is_rotation_of(&self, other: &Polygon) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        (0..n).any(|shift| (0..n).all(|i| self.vertices[(i + shift) % n] == other.vertices[i]))
    }

    /// Rounds the vertices to `f64` pairs for rendering.
    pub fn to_f64(&self) -> Vec<(f64, f64)> {
        self.vertices.iter().map(Point2::to_f64).collect()
    }

    /// Signed area rounded to `f64`.
    pub fn signed_area_f64(&self) -> f64 {
        to_f64(&self.signed_area)
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(vertices: Vec<Point2>) -> Self {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Point2> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

fn orientation_of(signed_area: &ExactNumber) -> PolygonOrientation {
    if signed_area.is_positive() {
        PolygonOrientation::CounterClockwise
    } else if signed_area.is_negative() {
        PolygonOrientation::Clockwise
    } else {
        PolygonOrientation::Degenerate
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area(vertices: &[Point2]) -> ExactNumber {
    if vertices.len() < 3 {
        return ExactNumber::zero();
    }

    let n = vertices.len();
    let mut area = ExactNumber::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        area += &vertices[i].x * &vertices[j].y;
        area -= &vertices[j].x * &vertices[i].y;
    }

    area * half()
}

/// Computes the absolute area of a polygon.
pub fn polygon_area(vertices: &[Point2]) -> ExactNumber {
    polygon_signed_area(vertices).abs()
}

/// Computes the centroid of a polygon.
///
/// Returns None for degenerate polygons (fewer than 3 vertices or zero area).
pub fn polygon_centroid(vertices: &[Point2]) -> Option<Point2> {
    if vertices.len() < 3 {
        return None;
    }

    let area = polygon_signed_area(vertices);
    if area.is_zero() {
        return None;
    }

    let mut cx = ExactNumber::zero();
    let mut cy = ExactNumber::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        let c = &vertices[i].x * &vertices[j].y - &vertices[j].x * &vertices[i].y;
        cx += (&vertices[i].x + &vertices[j].x) * &c;
        cy += (&vertices[i].y + &vertices[j].y) * &c;
    }

    let six_area = exact(6) * area;
    Some(Point2::new(cx / &six_area, cy / six_area))
}

/// Tests if a polygon is convex.
///
/// Returns true if all non-zero turns have the same sign. Straight vertices
/// are ignored.
pub fn polygon_is_convex(vertices: &[Point2]) -> bool {
    if vertices.len() < 3 {
        return true;
    }

    let n = vertices.len();
    let mut sign: Option<bool> = None;

    for i in 0..n {
        let turn = cross(&vertices[i], &vertices[(i + 1) % n], &vertices[(i + 2) % n]);
        if !turn.is_zero() {
            let is_positive = turn.is_positive();
            match sign {
                None => sign = Some(is_positive),
                Some(s) if s != is_positive => return false,
                _ => {}
            }
        }
    }

    true
}

/// Tests if a vertex sequence forms a simple polygon.
///
/// Pairwise O(n²) edge test: adjacent edges may only share their common
/// vertex, non-adjacent edges may not meet at all.
pub fn polygon_is_simple(vertices: &[Point2]) -> bool {
    find_defect(vertices).is_none()
}

/// Returns the first reason the vertex sequence is not a simple polygon.
pub(crate) fn find_defect(vertices: &[Point2]) -> Option<PolygonDefect> {
    let distinct: BTreeSet<&Point2> = vertices.iter().collect();
    if distinct.len() < 3 {
        return Some(PolygonDefect::TooFewVertices {
            distinct: distinct.len(),
        });
    }

    let mut seen = BTreeSet::new();
    for (index, v) in vertices.iter().enumerate() {
        if !seen.insert(v) {
            return Some(PolygonDefect::RepeatedVertex { index });
        }
    }

    let n = vertices.len();
    let edge = |i: usize| Segment2::new(vertices[i].clone(), vertices[(i + 1) % n].clone());
    for i in 0..n {
        let ei = edge(i);
        for j in (i + 1)..n {
            let shared = if j == i + 1 {
                Some(&vertices[j])
            } else if i == 0 && j == n - 1 {
                Some(&vertices[0])
            } else {
                None
            };
            let ok = match (segments_intersect(&ei, &edge(j)), shared) {
                (SegmentIntersection::None, _) => true,
                (SegmentIntersection::Point(p), Some(s)) => &p == s,
                _ => false,
            };
            if !ok {
                return Some(PolygonDefect::SelfIntersection {
                    first: i,
                    second: j,
                });
            }
        }
    }

    if polygon_signed_area(vertices).is_zero() {
        return Some(PolygonDefect::ZeroArea);
    }
    None
}

pub(crate) fn bounding_box(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = first.clone();
    let mut max = first.clone();

    for v in &points[1..] {
        if v.x < min.x {
            min.x = v.x.clone();
        }
        if v.y < min.y {
            min.y = v.y.clone();
        }
        if v.x > max.x {
            max.x = v.x.clone();
        }
        if v.y > max.y {
            max.y = v.y.clone();
        }
    }

    Some((min, max))
}

/// True if the closed boxes overlap (touching counts).
pub(crate) fn boxes_overlap(a: &(Point2, Point2), b: &(Point2, Point2)) -> bool {
    a.0.x <= b.1.x && b.0.x <= a.1.x && a.0.y <= b.1.y && b.0.y <= a.1.y
}
