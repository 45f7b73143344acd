//! Planar arrangement of two sets of directed ring edges.
//!
//! Input edges are split at every pairwise intersection and overlap endpoint,
//! coincident pieces are merged, and the result is stored as a half-edge
//! structure: edge `e` owns half-edges `2e` (from → to) and `2e + 1`
//! (to → from). Outgoing half-edges at each vertex are kept in
//! counter-clockwise angular order, which is all face tracing needs.

use super::core::boxes_overlap;
use crate::predicates::{compare_directions, segments_intersect, split_segment, SegmentIntersection};
use crate::primitives::{Point2, Segment2, Vec2};
use std::collections::BTreeMap;

/// Which input an edge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    A,
    B,
}

#[derive(Debug, Clone, Copy)]
struct EdgeSource {
    operand: Operand,
    /// True if the input edge ran from `from` to `to`.
    forward: bool,
}

#[derive(Debug, Clone)]
struct Edge {
    from: usize,
    to: usize,
    sources: Vec<EdgeSource>,
}

pub(crate) struct Arrangement {
    points: Vec<Point2>,
    original: Vec<bool>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<usize>>,
    position: Vec<usize>,
}

impl Arrangement {
    /// Builds the arrangement of directed edges tagged with their operand.
    ///
    /// Every input edge must have its operand's interior on the left.
    pub(crate) fn build(input: Vec<(Operand, Segment2)>) -> Self {
        let boxes: Vec<(Point2, Point2)> = input
            .iter()
            .map(|(_, s)| {
                let (lo, hi) = s.sorted_endpoints();
                let (min_y, max_y) = if lo.y <= hi.y {
                    (lo.y.clone(), hi.y.clone())
                } else {
                    (hi.y.clone(), lo.y.clone())
                };
                (
                    Point2::new(lo.x.clone(), min_y),
                    Point2::new(hi.x.clone(), max_y),
                )
            })
            .collect();

        let mut cuts: Vec<Vec<Point2>> = vec![Vec::new(); input.len()];
        for i in 0..input.len() {
            for j in (i + 1)..input.len() {
                if !boxes_overlap(&boxes[i], &boxes[j]) {
                    continue;
                }
                match segments_intersect(&input[i].1, &input[j].1) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Point(p) => {
                        cuts[i].push(p.clone());
                        cuts[j].push(p);
                    }
                    SegmentIntersection::Overlapping { start, end } => {
                        cuts[i].push(start.clone());
                        cuts[i].push(end.clone());
                        cuts[j].push(start);
                        cuts[j].push(end);
                    }
                }
            }
        }

        let mut index: BTreeMap<Point2, usize> = BTreeMap::new();
        let mut points = Vec::new();
        let mut original = Vec::new();
        let mut intern = |p: &Point2, is_original: bool| -> usize {
            let id = *index.entry(p.clone()).or_insert_with(|| {
                points.push(p.clone());
                original.push(false);
                points.len() - 1
            });
            if is_original {
                original[id] = true;
            }
            id
        };

        let mut edge_ids: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        let mut edges: Vec<Edge> = Vec::new();
        for ((operand, segment), segment_cuts) in input.iter().zip(&cuts) {
            if segment.is_degenerate() {
                continue;
            }
            let start = intern(&segment.start, true);
            let end = intern(&segment.end, true);
            let pieces: Vec<usize> = split_segment(segment, segment_cuts)
                .iter()
                .map(|p| {
                    if p == &segment.start {
                        start
                    } else if p == &segment.end {
                        end
                    } else {
                        intern(p, false)
                    }
                })
                .collect();
            for w in pieces.windows(2) {
                let (u, v) = (w[0], w[1]);
                let key = (u.min(v), u.max(v));
                let source = EdgeSource {
                    operand: *operand,
                    forward: u < v,
                };
                let id = *edge_ids.entry(key).or_insert_with(|| {
                    edges.push(Edge {
                        from: key.0,
                        to: key.1,
                        sources: Vec::new(),
                    });
                    edges.len() - 1
                });
                edges[id].sources.push(source);
            }
        }

        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); points.len()];
        for (e, edge) in edges.iter().enumerate() {
            outgoing[edge.from].push(2 * e);
            outgoing[edge.to].push(2 * e + 1);
        }

        let mut arrangement = Self {
            points,
            original,
            edges,
            outgoing: Vec::new(),
            position: Vec::new(),
        };
        for list in &mut outgoing {
            list.sort_by(|&h, &k| {
                compare_directions(&arrangement.direction(h), &arrangement.direction(k))
            });
        }
        let mut position = vec![0; arrangement.edges.len() * 2];
        for list in &outgoing {
            for (i, &h) in list.iter().enumerate() {
                position[h] = i;
            }
        }
        arrangement.outgoing = outgoing;
        arrangement.position = position;
        arrangement
    }

    #[inline]
    pub(crate) fn half_edge_count(&self) -> usize {
        self.edges.len() * 2
    }

    #[inline]
    pub(crate) fn point(&self, vertex: usize) -> &Point2 {
        &self.points[vertex]
    }

    /// True if the vertex is an endpoint of some input edge.
    #[inline]
    pub(crate) fn is_original(&self, vertex: usize) -> bool {
        self.original[vertex]
    }

    #[inline]
    pub(crate) fn origin(&self, h: usize) -> usize {
        let edge = &self.edges[h / 2];
        if h % 2 == 0 {
            edge.from
        } else {
            edge.to
        }
    }

    #[inline]
    pub(crate) fn target(&self, h: usize) -> usize {
        self.origin(h ^ 1)
    }

    fn direction(&self, h: usize) -> Vec2 {
        &self.points[self.target(h)] - &self.points[self.origin(h)]
    }

    pub(crate) fn midpoint(&self, h: usize) -> Point2 {
        self.points[self.origin(h)].midpoint(&self.points[self.target(h)])
    }

    /// The next half-edge around the face to the left of `h`.
    pub(crate) fn next_in_face(&self, h: usize) -> usize {
        let twin = h ^ 1;
        let list = &self.outgoing[self.origin(twin)];
        let deg = list.len();
        list[(self.position[twin] + deg - 1) % deg]
    }

    /// Rotates clockwise around the target of `h`, starting from its twin,
    /// and returns the first outgoing half-edge accepted by `accept`.
    pub(crate) fn next_matching<F>(&self, h: usize, accept: F) -> Option<usize>
    where
        F: Fn(usize) -> bool,
    {
        let twin = h ^ 1;
        let list = &self.outgoing[self.origin(twin)];
        let deg = list.len();
        (1..=deg)
            .map(|step| list[(self.position[twin] + deg - step) % deg])
            .find(|&k| accept(k))
    }

    /// Labels every half-edge with the face on its left.
    ///
    /// Returns the face id of each half-edge and the half-edges of each face.
    pub(crate) fn faces(&self) -> (Vec<usize>, Vec<Vec<usize>>) {
        let mut face_of = vec![usize::MAX; self.half_edge_count()];
        let mut cycles = Vec::new();
        for start in 0..self.half_edge_count() {
            if face_of[start] != usize::MAX {
                continue;
            }
            let id = cycles.len();
            let mut cycle = Vec::new();
            let mut h = start;
            while face_of[h] == usize::MAX {
                face_of[h] = id;
                cycle.push(h);
                h = self.next_in_face(h);
            }
            cycles.push(cycle);
        }
        (face_of, cycles)
    }

    /// Whether `h` carries an edge of `operand`, and if so whether it runs
    /// the same way as one of them (operand interior on the left of `h`).
    pub(crate) fn side_of(&self, h: usize, operand: Operand) -> Option<bool> {
        let forward = h % 2 == 0;
        let mut found = None;
        for source in &self.edges[h / 2].sources {
            if source.operand != operand {
                continue;
            }
            if source.forward == forward {
                return Some(true);
            }
            found = Some(false);
        }
        found
    }

    /// True if some vertex lies on edges of both operands.
    pub(crate) fn boundaries_meet(&self) -> bool {
        let mut touched = vec![(false, false); self.points.len()];
        for edge in &self.edges {
            for source in &edge.sources {
                for v in [edge.from, edge.to] {
                    match source.operand {
                        Operand::A => touched[v].0 = true,
                        Operand::B => touched[v].1 = true,
                    }
                }
            }
        }
        touched.iter().any(|&(a, b)| a && b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use crate::predicates::{orient2d, Orientation};
    use crate::primitives::exact_ratio;

    fn ring(operand: Operand, coords: &[(i64, i64)]) -> Vec<(Operand, Segment2)> {
        Polygon::from_coords(coords)
            .edges()
            .map(|e| (operand, e))
            .collect()
    }

    fn overlapping_squares() -> Arrangement {
        let mut input = ring(Operand::A, &[(0, 0), (2, 0), (2, 2), (0, 2)]);
        input.extend(ring(Operand::B, &[(1, 1), (3, 1), (3, 3), (1, 3)]));
        Arrangement::build(input)
    }

    #[test]
    fn test_crossing_squares_are_split() {
        let arr = overlapping_squares();
        // 8 input corners plus 2 crossings.
        assert_eq!(arr.points.len(), 10);
        // Each square gains two split points.
        assert_eq!(arr.edges.len(), 12);
        let crossing = arr.points.iter().position(|p| *p == Point2::from_ints(2, 1)).unwrap();
        assert!(!arr.is_original(crossing));
        assert!(arr.is_original(0));
        assert!(arr.boundaries_meet());
    }

    #[test]
    fn test_face_count_matches_euler() {
        let arr = overlapping_squares();
        let (_, cycles) = arr.faces();
        // V - E + F = 2 for a connected planar graph.
        assert_eq!(arr.points.len() + cycles.len(), arr.edges.len() + 2);
    }

    #[test]
    fn test_shared_edges_are_merged() {
        let mut input = ring(Operand::A, &[(0, 0), (2, 0), (2, 2), (0, 2)]);
        input.extend(ring(Operand::B, &[(0, 0), (4, 0), (4, 2), (0, 2)]));
        let arr = Arrangement::build(input);
        let merged = arr.edges.iter().filter(|e| e.sources.len() == 2).count();
        // (0,0)-(2,0), (0,2)-(2,2) shared; (0,2)-(0,0) shared.
        assert_eq!(merged, 3);
    }

    #[test]
    fn test_side_of_follows_direction() {
        let arr = Arrangement::build(ring(Operand::A, &[(0, 0), (2, 0), (2, 2)]));
        let inside = Point2::new(exact_ratio(3, 2).unwrap(), exact_ratio(1, 2).unwrap());
        for h in 0..arr.half_edge_count() {
            let inside_on_left = orient2d(arr.point(arr.origin(h)), arr.point(arr.target(h)), &inside)
                == Orientation::CounterClockwise;
            assert_eq!(arr.side_of(h, Operand::A), Some(inside_on_left));
            assert_eq!(arr.side_of(h, Operand::B), None);
        }
    }

    #[test]
    fn test_next_in_face_walks_triangle() {
        let arr = Arrangement::build(ring(Operand::A, &[(0, 0), (2, 0), (2, 2)]));
        let (face_of, cycles) = arr.faces();
        assert_eq!(cycles.len(), 2);
        assert!(cycles.iter().all(|c| c.len() == 3));
        assert_ne!(face_of[0], face_of[1]);
    }
}
