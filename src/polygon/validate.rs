//! Polygon validation, orientation normalization and hole checks.
//!
//! # Example
//!
//! ```
//! use planum::polygon::{is_valid_hole, normalize_hole, validate, PlanarRegion, Polygon};
//!
//! // A figure-8 polygon that crosses itself
//! let figure8 = Polygon::from_coords(&[(0, 0), (2, 2), (2, 0), (0, 2)]);
//! assert!(!validate(&figure8).is_valid());
//!
//! let region = PlanarRegion::new(Polygon::from_coords(&[(0, 0), (10, 0), (10, 10), (0, 10)])).unwrap();
//! let hole = normalize_hole(Polygon::from_coords(&[(4, 4), (6, 4), (6, 6), (4, 6)])).unwrap();
//! assert!(is_valid_hole(&region, &hole));
//! ```

use super::core::{find_defect, Polygon, PolygonOrientation};
use super::region::PlanarRegion;
use crate::error::{GeometryError, GeometryResult, PolygonDefect};
use crate::predicates::{
    locate_point, segments_intersect, split_segment, PointLocation, SegmentIntersection,
};
use crate::primitives::{Point2, Segment2};
use std::collections::BTreeSet;

/// Result of polygon validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of distinct vertices.
    pub distinct_vertices: usize,
    /// The first defect found, if any.
    pub defect: Option<PolygonDefect>,
    /// Orientation derived from the signed area.
    pub orientation: PolygonOrientation,
}

impl ValidationReport {
    /// Whether the polygon is simple.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.defect.is_none()
    }
}

/// Validates a polygon and reports the first defect.
pub fn validate(polygon: &Polygon) -> ValidationReport {
    let distinct: BTreeSet<&Point2> = polygon.vertices().iter().collect();
    ValidationReport {
        distinct_vertices: distinct.len(),
        defect: find_defect(polygon.vertices()),
        orientation: polygon.orientation(),
    }
}

fn require_simple(polygon: &Polygon) -> GeometryResult<()> {
    if polygon.is_simple() {
        return Ok(());
    }
    let defect = find_defect(polygon.vertices()).unwrap_or(PolygonDefect::ZeroArea);
    Err(GeometryError::InvalidPolygon(defect))
}

/// Checks simplicity and returns the polygon in counter-clockwise order.
///
/// # Errors
///
/// [`GeometryError::InvalidPolygon`] if the polygon is not simple or has
/// fewer than three distinct vertices.
pub fn normalize_boundary(polygon: Polygon) -> GeometryResult<Polygon> {
    require_simple(&polygon)?;
    Ok(match polygon.orientation() {
        PolygonOrientation::Clockwise => polygon.reversed(),
        _ => polygon,
    })
}

/// Checks simplicity and returns the polygon in clockwise order.
///
/// # Errors
///
/// [`GeometryError::InvalidPolygon`] under the same conditions as
/// [`normalize_boundary`].
pub fn normalize_hole(polygon: Polygon) -> GeometryResult<Polygon> {
    require_simple(&polygon)?;
    Ok(match polygon.orientation() {
        PolygonOrientation::CounterClockwise => polygon.reversed(),
        _ => polygon,
    })
}

/// Tests whether `candidate` can be added to `region` as a hole.
///
/// The candidate must be simple and lie inside the region: no vertex or
/// edge outside the boundary or inside an existing hole, no edge overlap
/// with any ring, and no existing hole enclosed by the candidate. Touching
/// at isolated points is allowed. The orientation of `candidate` is
/// irrelevant.
///
/// # Arguments
///
/// * `region` - The region that would receive the hole
/// * `candidate` - The proposed hole
///
/// # Returns
///
/// `true` if [`PlanarRegion::with_hole`] would accept the candidate.
pub fn is_valid_hole(region: &PlanarRegion, candidate: &Polygon) -> bool {
    if !candidate.is_simple() {
        return false;
    }

    if candidate
        .vertices()
        .iter()
        .any(|v| region.locate(v) == PointLocation::Outside)
    {
        return false;
    }

    let candidate_edges: Vec<Segment2> = candidate.edges().collect();
    let ring_edges: Vec<Segment2> = region.edges().collect();
    let mut candidate_cuts: Vec<Vec<Point2>> = vec![Vec::new(); candidate_edges.len()];
    let mut ring_cuts: Vec<Vec<Point2>> = vec![Vec::new(); ring_edges.len()];

    for (i, e) in candidate_edges.iter().enumerate() {
        for (j, f) in ring_edges.iter().enumerate() {
            match segments_intersect(e, f) {
                SegmentIntersection::None => {}
                SegmentIntersection::Point(p) => {
                    candidate_cuts[i].push(p.clone());
                    ring_cuts[j].push(p);
                }
                SegmentIntersection::Overlapping { .. } => return false,
            }
        }
    }

    // Between contact points, every piece of a candidate edge must run
    // through the region's interior.
    for (e, cuts) in candidate_edges.iter().zip(&candidate_cuts) {
        let pieces = split_segment(e, cuts);
        for w in pieces.windows(2) {
            if region.locate(&w[0].midpoint(&w[1])) != PointLocation::Inside {
                return false;
            }
        }
    }

    // No piece of an existing hole may end up inside the candidate.
    let boundary_edges = region.boundary().len();
    for (f, cuts) in ring_edges.iter().zip(&ring_cuts).skip(boundary_edges) {
        let pieces = split_segment(f, cuts);
        for w in pieces.windows(2) {
            let mid = w[0].midpoint(&w[1]);
            if locate_point(&mid, candidate.vertices()) == PointLocation::Inside {
                return false;
            }
        }
    }

    true
}
