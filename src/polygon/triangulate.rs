//! Triangulation of planar regions with holes.
//!
//! Converts a region into triangles that exactly cover it, using only exact
//! predicates.
//!
//! # Algorithm
//!
//! 1. Ring vertices that touch another ring's edge are inserted into that
//!    edge, so every contact between rings is vertex-to-vertex.
//! 2. Holes are merged into the boundary one at a time, rightmost first. A
//!    hole that shares a vertex with the merged ring is spliced in at that
//!    vertex; otherwise it is joined by a two-way bridge from its rightmost
//!    vertex to the nearest visible vertex of the merged ring.
//! 3. A hole touching the boundary more than once cuts the region into
//!    pieces. The merged ring is split at each repeated vertex whose two
//!    sides both enclose positive area.
//! 4. Each loop is ear clipped. An ear is a strictly convex corner
//!    whose closed triangle holds no other vertex and whose diagonal meets
//!    the ring only at its endpoints.
//!
//! # Complexity
//!
//! - Time: O(n³) for n vertices, which is fine at interactive sizes
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use planum::polygon::{triangulate_region, PlanarRegion, Polygon};
//!
//! let region = PlanarRegion::new(Polygon::from_coords(&[(0, 0), (10, 0), (10, 10), (0, 10)]))
//!     .unwrap()
//!     .with_hole(Polygon::from_coords(&[(4, 4), (6, 4), (6, 6), (4, 6)]))
//!     .unwrap();
//!
//! let triangulation = triangulate_region(&region).unwrap();
//! // 8 vertices and one hole: 8 + 2 - 2 triangles
//! assert_eq!(triangulation.len(), 8);
//! assert_eq!(triangulation.area(), region.area());
//! ```

use super::region::PlanarRegion;
use crate::error::{GeometryError, GeometryResult};
use crate::predicates::{
    cross, orient2d, point_in_segment_interior, segments_intersect, split_segment, Orientation,
    SegmentIntersection,
};
use crate::primitives::{half, ExactNumber, Point2, Segment2};
use num_traits::Signed;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// A triangulation of a region.
///
/// Triangles are counter-clockwise index triples into [`points`](Self::points).
/// A directed edge `a → b` belongs to at most one triangle; an edge whose
/// reverse belongs to no triangle is a wall (part of a ring).
#[derive(Debug, Clone)]
pub struct RegionTriangulation {
    points: Vec<Point2>,
    triangles: Vec<[usize; 3]>,
    edges: HashMap<(usize, usize), usize>,
}

impl RegionTriangulation {
    fn new(points: Vec<Point2>, triangles: Vec<[usize; 3]>) -> Self {
        let mut triangulation = Self {
            points,
            triangles,
            edges: HashMap::new(),
        };
        triangulation.index_edges();
        triangulation
    }

    fn index_edges(&mut self) {
        self.edges.clear();
        for (t, &[a, b, c]) in self.triangles.iter().enumerate() {
            self.edges.insert((a, b), t);
            self.edges.insert((b, c), t);
            self.edges.insert((c, a), t);
        }
    }

    /// The vertex positions.
    #[inline]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The triangles as counter-clockwise index triples.
    #[inline]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The corner positions of triangle `t`.
    pub fn triangle_points(&self, t: usize) -> [&Point2; 3] {
        self.triangles[t].map(|i| &self.points[i])
    }

    /// Total area of all triangles.
    pub fn area(&self) -> ExactNumber {
        let twice: ExactNumber = self
            .triangles
            .iter()
            .map(|&[a, b, c]| cross(&self.points[a], &self.points[b], &self.points[c]))
            .sum();
        twice * half()
    }

    /// The triangle that contains the directed edge `a → b`.
    #[inline]
    pub fn triangle_with_edge(&self, a: usize, b: usize) -> Option<usize> {
        self.edges.get(&(a, b)).copied()
    }

    /// The triangle across the directed edge `a → b`, if it is not a wall.
    #[inline]
    pub fn neighbour(&self, a: usize, b: usize) -> Option<usize> {
        self.triangle_with_edge(b, a)
    }

    /// Number of wall edges (edges with a triangle on one side only).
    pub fn wall_count(&self) -> usize {
        self.edges
            .keys()
            .filter(|&&(a, b)| !self.edges.contains_key(&(b, a)))
            .count()
    }

    /// Makes `p` a vertex of the triangulation and returns its index.
    ///
    /// A point inside a triangle splits it in three; a point on an edge
    /// splits the triangles on both sides. Returns `None` if `p` is not
    /// covered by any triangle.
    pub(crate) fn insert_vertex(&mut self, p: &Point2) -> Option<usize> {
        if let Some(existing) = self.points.iter().position(|v| v == p) {
            return Some(existing);
        }

        for t in 0..self.triangles.len() {
            let [a, b, c] = self.triangles[t];
            let sides = [
                orient2d(&self.points[a], &self.points[b], p),
                orient2d(&self.points[b], &self.points[c], p),
                orient2d(&self.points[c], &self.points[a], p),
            ];
            if sides.contains(&Orientation::Clockwise) {
                continue;
            }

            let q = self.points.len();
            match sides.iter().position(|&s| s == Orientation::Collinear) {
                None => {
                    self.points.push(p.clone());
                    self.triangles[t] = [a, b, q];
                    self.triangles.push([b, c, q]);
                    self.triangles.push([c, a, q]);
                }
                Some(k) => {
                    let [u, v, w] = rotate_to(self.triangles[t], [a, b, c][k]);
                    let across = self.triangle_with_edge(v, u);
                    self.points.push(p.clone());
                    self.triangles[t] = [u, q, w];
                    self.triangles.push([q, v, w]);
                    if let Some(t2) = across {
                        let [_, _, x] = rotate_to(self.triangles[t2], v);
                        self.triangles[t2] = [v, q, x];
                        self.triangles.push([q, u, x]);
                    }
                }
            }
            self.index_edges();
            return Some(q);
        }
        None
    }
}

fn rotate_to(triangle: [usize; 3], first: usize) -> [usize; 3] {
    let [a, b, c] = triangle;
    if b == first {
        [b, c, a]
    } else if c == first {
        [c, a, b]
    } else {
        [a, b, c]
    }
}

/// Triangulates a region, respecting its holes.
///
/// # Errors
///
/// [`GeometryError::UnsupportedOperation`] if a hole cannot be bridged or no
/// ear can be found, which only happens for rings touching in ways the
/// merge step does not resolve.
pub fn triangulate_region(region: &PlanarRegion) -> GeometryResult<RegionTriangulation> {
    let rings = refine_rings(region);

    let mut index: BTreeMap<Point2, usize> = BTreeMap::new();
    let mut points: Vec<Point2> = Vec::new();
    let ring_ids: Vec<Vec<usize>> = rings
        .iter()
        .map(|ring| {
            ring.iter()
                .map(|p| {
                    *index.entry(p.clone()).or_insert_with(|| {
                        points.push(p.clone());
                        points.len() - 1
                    })
                })
                .collect()
        })
        .collect();

    let Some((boundary, holes)) = ring_ids.split_first() else {
        return Ok(RegionTriangulation::new(points, Vec::new()));
    };

    let mut holes: Vec<Vec<usize>> = holes.to_vec();
    holes.sort_by(|h, k| max_vertex(&points, k).cmp(&max_vertex(&points, h)));

    let mut merged = boundary.clone();
    for n in 0..holes.len() {
        merged = merge_hole(&points, merged, &holes[n], &holes[n + 1..])?;
    }

    let loops = split_pinches(&points, merged);
    let mut triangles = Vec::new();
    for ring in &loops {
        triangles.extend(clip_ears(&points, ring.clone())?);
    }
    debug!(
        triangles = triangles.len(),
        loops = loops.len(),
        holes = region.hole_count(),
        "region triangulated"
    );
    Ok(RegionTriangulation::new(points, triangles))
}

/// Inserts into each ring the vertices of other rings lying inside its edges.
fn refine_rings(region: &PlanarRegion) -> Vec<Vec<Point2>> {
    let rings: Vec<&[Point2]> = region.rings().map(|r| r.vertices()).collect();
    rings
        .iter()
        .enumerate()
        .map(|(k, ring)| {
            let n = ring.len();
            let mut refined = Vec::with_capacity(n);
            for i in 0..n {
                let edge = Segment2::new(ring[i].clone(), ring[(i + 1) % n].clone());
                let touching: Vec<&Point2> = rings
                    .iter()
                    .enumerate()
                    .filter(|&(m, _)| m != k)
                    .flat_map(|(_, other)| other.iter())
                    .filter(|v| point_in_segment_interior(v, &edge))
                    .collect();
                let mut pieces = split_segment(&edge, touching);
                pieces.pop();
                refined.extend(pieces);
            }
            refined
        })
        .collect()
}

fn max_vertex<'a>(points: &'a [Point2], ring: &[usize]) -> Option<&'a Point2> {
    ring.iter().map(|&i| &points[i]).max()
}

/// True if `t` lies strictly inside the interior wedge at `b` of a ring
/// passing `a → b → c` with its interior on the left.
fn locally_inside(a: &Point2, b: &Point2, c: &Point2, t: &Point2) -> bool {
    let left_of_ab = orient2d(a, b, t) == Orientation::CounterClockwise;
    let left_of_bc = orient2d(b, c, t) == Orientation::CounterClockwise;
    match orient2d(a, b, c) {
        Orientation::CounterClockwise => left_of_ab && left_of_bc,
        Orientation::Clockwise => left_of_ab || left_of_bc,
        Orientation::Collinear => {
            if (b - a).dot(&(c - b)).is_positive() {
                left_of_ab
            } else {
                // The ring doubles back; only the ray towards `a` is outside.
                orient2d(a, b, t) != Orientation::Collinear || (t - b).dot(&(a - b)).is_negative()
            }
        }
    }
}

fn ring_edges<'a>(points: &'a [Point2], ring: &[usize]) -> impl Iterator<Item = Segment2> + 'a {
    let n = ring.len();
    let ring = ring.to_vec();
    (0..n).map(move |i| Segment2::new(points[ring[i]].clone(), points[ring[(i + 1) % n]].clone()))
}

fn neighbours(ring: &[usize], i: usize) -> (usize, usize) {
    let n = ring.len();
    (ring[(i + n - 1) % n], ring[(i + 1) % n])
}

/// Splices `hole` into the merged ring.
fn merge_hole(
    points: &[Point2],
    merged: Vec<usize>,
    hole: &[usize],
    pending: &[Vec<usize>],
) -> GeometryResult<Vec<usize>> {
    // Shared vertex: a zero-length splice keeps every contact vertex-to-vertex.
    for (j, &s) in hole.iter().enumerate() {
        let (hole_prev, hole_next) = neighbours(hole, j);
        for i in (0..merged.len()).filter(|&i| merged[i] == s) {
            let (prev, next) = neighbours(&merged, i);
            let (a, b, c) = (&points[prev], &points[s], &points[next]);
            if locally_inside(a, b, c, &points[hole_next])
                && locally_inside(a, b, c, &points[hole_prev])
            {
                let mut out = merged[..=i].to_vec();
                out.extend_from_slice(&hole[j + 1..]);
                out.extend_from_slice(&hole[..j]);
                out.push(s);
                out.extend_from_slice(&merged[i + 1..]);
                return Ok(out);
            }
        }
    }

    let j = (0..hole.len())
        .max_by(|&x, &y| points[hole[x]].cmp(&points[hole[y]]))
        .ok_or_else(|| GeometryError::unsupported("triangulation", "empty hole"))?;
    let h = &points[hole[j]];
    let (hole_prev, hole_next) = neighbours(hole, j);

    let walls: Vec<Segment2> = ring_edges(points, &merged)
        .chain(ring_edges(points, hole))
        .chain(pending.iter().flat_map(|p| ring_edges(points, p)))
        .collect();

    let mut best: Option<(ExactNumber, usize)> = None;
    for i in 0..merged.len() {
        let p = &points[merged[i]];
        let distance = h.distance_squared(p);
        if matches!(&best, Some((d, _)) if &distance >= d) {
            continue;
        }
        let (prev, next) = neighbours(&merged, i);
        if !locally_inside(&points[prev], p, &points[next], h)
            || !locally_inside(&points[hole_prev], h, &points[hole_next], p)
        {
            continue;
        }
        let bridge = Segment2::new(p.clone(), h.clone());
        let blocked = walls.iter().any(|wall| match segments_intersect(&bridge, wall) {
            SegmentIntersection::None => false,
            SegmentIntersection::Point(x) => &x != p && &x != h,
            SegmentIntersection::Overlapping { .. } => true,
        });
        if !blocked {
            best = Some((distance, i));
        }
    }

    let (_, i) = best.ok_or_else(|| {
        GeometryError::unsupported("triangulation", "no bridge from hole to boundary")
    })?;
    let mut out = merged[..=i].to_vec();
    out.extend_from_slice(&hole[j..]);
    out.extend_from_slice(&hole[..=j]);
    out.push(merged[i]);
    out.extend_from_slice(&merged[i + 1..]);
    Ok(out)
}

fn in_closed_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    orient2d(a, b, p) != Orientation::Clockwise
        && orient2d(b, c, p) != Orientation::Clockwise
        && orient2d(c, a, p) != Orientation::Clockwise
}

/// Checks if the corner at `ring[i]` can be clipped.
fn is_ear(points: &[Point2], ring: &[usize], i: usize) -> bool {
    let (ia, ic) = neighbours(ring, i);
    let ib = ring[i];
    let (a, b, c) = (&points[ia], &points[ib], &points[ic]);

    if orient2d(a, b, c) != Orientation::CounterClockwise {
        return false;
    }

    if ring
        .iter()
        .filter(|&&v| v != ia && v != ib && v != ic)
        .any(|&v| in_closed_triangle(&points[v], a, b, c))
    {
        return false;
    }

    let diagonal = Segment2::new(a.clone(), c.clone());
    ring_edges(points, ring).all(|edge| match segments_intersect(&diagonal, &edge) {
        SegmentIntersection::None => true,
        SegmentIntersection::Point(x) => &x == a || &x == c,
        SegmentIntersection::Overlapping { .. } => false,
    })
}

fn twice_signed_area(points: &[Point2], ring: &[usize]) -> ExactNumber {
    let Some(&first) = ring.first() else {
        return ExactNumber::default();
    };
    ring.windows(2)
        .map(|w| cross(&points[first], &points[w[0]], &points[w[1]]))
        .sum()
}

/// Finds a repeated vertex whose two sub-loops both enclose positive area.
///
/// Bridges and single touches repeat vertices too, but one of their
/// sub-loops is a hole with negative area.
fn find_pinch(points: &[Point2], ring: &[usize]) -> Option<(usize, usize)> {
    for i in 0..ring.len() {
        for j in (i + 1)..ring.len() {
            if ring[i] != ring[j] {
                continue;
            }
            let mut rest = ring[..i].to_vec();
            rest.extend_from_slice(&ring[j..]);
            if twice_signed_area(points, &ring[i..j]).is_positive()
                && twice_signed_area(points, &rest).is_positive()
            {
                return Some((i, j));
            }
        }
    }
    None
}

/// Splits a merged ring into loops where a hole touching the boundary more
/// than once cuts the region apart.
fn split_pinches(points: &[Point2], ring: Vec<usize>) -> Vec<Vec<usize>> {
    let mut pending = vec![ring];
    let mut loops = Vec::new();
    while let Some(ring) = pending.pop() {
        match find_pinch(points, &ring) {
            Some((i, j)) => {
                let mut rest = ring[..i].to_vec();
                rest.extend_from_slice(&ring[j..]);
                pending.push(ring[i..j].to_vec());
                pending.push(rest);
            }
            None => loops.push(ring),
        }
    }
    loops
}

fn clip_ears(points: &[Point2], mut ring: Vec<usize>) -> GeometryResult<Vec<[usize; 3]>> {
    let mut triangles = Vec::with_capacity(ring.len().saturating_sub(2));
    let mut start = 0;

    while ring.len() > 3 {
        let m = ring.len();
        let ear = (0..m)
            .map(|k| (start + k) % m)
            .find(|&i| is_ear(points, &ring, i))
            .ok_or_else(|| GeometryError::unsupported("triangulation", "no ear found"))?;
        let (prev, next) = neighbours(&ring, ear);
        triangles.push([prev, ring[ear], next]);
        ring.remove(ear);
        start = ear.saturating_sub(1);
    }

    if let [a, b, c] = ring[..] {
        if !cross(&points[a], &points[b], &points[c]).is_positive() {
            return Err(GeometryError::unsupported(
                "triangulation",
                "last triangle is degenerate",
            ));
        }
        triangles.push([a, b, c]);
    }
    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use crate::primitives::{exact, exact_ratio};

    fn region(coords: &[(i64, i64)]) -> PlanarRegion {
        PlanarRegion::new(Polygon::from_coords(coords)).unwrap()
    }

    fn square_with_hole() -> PlanarRegion {
        region(&[(0, 0), (10, 0), (10, 10), (0, 10)])
            .with_hole(Polygon::from_coords(&[(4, 4), (6, 4), (6, 6), (4, 6)]))
            .unwrap()
    }

    fn assert_valid(triangulation: &RegionTriangulation, region: &PlanarRegion) {
        assert_eq!(triangulation.area(), region.area());
        for t in 0..triangulation.len() {
            let [a, b, c] = triangulation.triangle_points(t);
            assert_eq!(orient2d(a, b, c), Orientation::CounterClockwise);
        }
    }

    #[test]
    fn test_triangulate_square() {
        let r = region(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        let t = triangulate_region(&r).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.area(), exact(16));
        assert_eq!(t.wall_count(), 4);
    }

    #[test]
    fn test_triangulate_l_shape() {
        let r = region(&[(0, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2)]);
        let t = triangulate_region(&r).unwrap();
        assert_eq!(t.len(), 4);
        assert_valid(&t, &r);
    }

    #[test]
    fn test_triangulate_star() {
        let r = region(&[
            (0, -6),
            (2, -2),
            (6, 0),
            (2, 2),
            (0, 6),
            (-2, 2),
            (-6, 0),
            (-2, -2),
        ]);
        let t = triangulate_region(&r).unwrap();
        assert_eq!(t.len(), 6);
        assert_valid(&t, &r);
    }

    #[test]
    fn test_triangulate_with_hole() {
        let r = square_with_hole();
        let t = triangulate_region(&r).unwrap();
        assert_eq!(t.len(), 8);
        assert_eq!(t.area(), exact(96));
        assert_eq!(t.wall_count(), 8);
        assert_valid(&t, &r);
    }

    #[test]
    fn test_triangulate_two_holes() {
        let r = square_with_hole()
            .with_hole(Polygon::from_coords(&[(1, 7), (3, 7), (2, 9)]))
            .unwrap();
        let t = triangulate_region(&r).unwrap();
        // 11 vertices and two holes
        assert_eq!(t.len(), 11 + 4 - 2);
        assert_valid(&t, &r);
    }

    #[test]
    fn test_triangulate_hole_touching_boundary() {
        let r = region(&[(0, 0), (10, 0), (10, 10), (0, 10)])
            .with_hole(Polygon::from_coords(&[(0, 5), (2, 4), (2, 6)]))
            .unwrap();
        let t = triangulate_region(&r).unwrap();
        assert_eq!(r.area(), exact(98));
        assert_valid(&t, &r);
        // The touching vertex splits the left boundary edge.
        assert_eq!(t.wall_count(), 8);
    }

    #[test]
    fn test_triangulate_hole_touching_opposite_edges() {
        // The hole cuts the square into a left and a right piece.
        let r = region(&[(0, 0), (10, 0), (10, 10), (0, 10)])
            .with_hole(Polygon::from_coords(&[(5, 0), (7, 5), (5, 10), (3, 5)]))
            .unwrap();
        let t = triangulate_region(&r).unwrap();
        assert_eq!(r.area(), exact(80));
        assert_eq!(t.len(), 6);
        assert_valid(&t, &r);
    }

    #[test]
    fn test_triangulate_hole_cutting_off_corner() {
        let r = region(&[(0, 0), (10, 0), (10, 10), (0, 10)])
            .with_hole(Polygon::from_coords(&[(5, 0), (10, 5), (6, 6)]))
            .unwrap();
        let t = triangulate_region(&r).unwrap();
        assert_valid(&t, &r);
    }

    #[test]
    fn test_triangulate_diamond_hole() {
        // Four corner triangles remain.
        let r = region(&[(0, 0), (10, 0), (10, 10), (0, 10)])
            .with_hole(Polygon::from_coords(&[(5, 0), (10, 5), (5, 10), (0, 5)]))
            .unwrap();
        let t = triangulate_region(&r).unwrap();
        assert_eq!(t.len(), 4);
        assert_eq!(t.area(), exact(50));
        assert_valid(&t, &r);
    }

    #[test]
    fn test_split_pinches_keeps_bridges() {
        let p = |x, y| Point2::from_ints(x, y);
        let points = vec![p(0, 0), p(4, 0), p(4, 4), p(0, 4), p(2, 1), p(2, 2), p(1, 2)];
        // Square joined to a clockwise hole by the bridge 2 <-> 5.
        let ring = vec![0, 1, 2, 5, 4, 6, 5, 2, 3];
        assert_eq!(split_pinches(&points, ring.clone()), vec![ring]);
    }

    #[test]
    fn test_triangulate_touching_holes() {
        let r = square_with_hole()
            .with_hole(Polygon::from_coords(&[(6, 6), (8, 6), (8, 8)]))
            .unwrap();
        let t = triangulate_region(&r).unwrap();
        assert_valid(&t, &r);
    }

    #[test]
    fn test_insert_vertex_inside() {
        let r = region(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        let mut t = triangulate_region(&r).unwrap();
        let p = Point2::new(exact_ratio(1, 3).unwrap(), exact(3));
        let q = t.insert_vertex(&p).unwrap();
        assert_eq!(t.points()[q], p);
        assert_eq!(t.len(), 4);
        assert_eq!(t.area(), exact(16));
    }

    #[test]
    fn test_insert_vertex_on_diagonal_and_wall() {
        let r = region(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        let mut t = triangulate_region(&r).unwrap();
        // The centre lies on the square's only diagonal.
        t.insert_vertex(&Point2::from_ints(2, 2)).unwrap();
        assert_eq!(t.len(), 4);
        // A wall point splits a single triangle.
        t.insert_vertex(&Point2::from_ints(1, 0)).unwrap();
        assert_eq!(t.len(), 5);
        assert_eq!(t.area(), exact(16));
        assert_eq!(t.wall_count(), 5);
    }

    #[test]
    fn test_insert_existing_and_outside() {
        let r = region(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        let mut t = triangulate_region(&r).unwrap();
        let before = t.len();
        let corner = t.insert_vertex(&Point2::from_ints(4, 4)).unwrap();
        assert_eq!(t.points()[corner], Point2::from_ints(4, 4));
        assert_eq!(t.len(), before);
        assert_eq!(t.insert_vertex(&Point2::from_ints(5, 5)), None);
    }

    #[test]
    fn test_neighbours_are_symmetric() {
        let t = triangulate_region(&square_with_hole()).unwrap();
        for (i, &[a, b, c]) in t.triangles().iter().enumerate() {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                if let Some(other) = t.neighbour(u, v) {
                    assert_ne!(other, i);
                    assert_eq!(t.neighbour(v, u), Some(i));
                }
            }
        }
    }

    #[test]
    fn test_locally_inside() {
        let p = |x, y| Point2::from_ints(x, y);
        // Convex corner at the origin, interior in the first quadrant.
        assert!(locally_inside(&p(1, 0), &p(0, 0), &p(0, 1), &p(1, 1)));
        assert!(!locally_inside(&p(1, 0), &p(0, 0), &p(0, 1), &p(-1, 1)));
        // Reflex corner: everything except the third quadrant.
        assert!(locally_inside(&p(-1, 0), &p(0, 0), &p(0, -1), &p(-1, 1)));
        assert!(!locally_inside(&p(-1, 0), &p(0, 0), &p(0, -1), &p(-1, -1)));
    }
}
