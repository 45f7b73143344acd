//! Entry points for callers that work with raw vertex lists.
//!
//! These wrap the [`polygon`](crate::polygon) engines, take ownership of
//! their inputs and log rejected input at `warn` level. Every function is
//! pure: inputs are never modified and failures leave earlier values intact.

use crate::error::GeometryResult;
use crate::polygon::{
    self, boolean_op, boolean_op_regions, normalize_boundary, OperatorKind, PlanarRegion,
    Polygon, VisibilityMethod, VisibilityRegion,
};
use crate::primitives::Point2;
use tracing::warn;

pub use crate::polygon::fold_boolean;

/// Validates a boundary and returns it in counter-clockwise order.
///
/// # Example
///
/// ```
/// use planum::{create_boundary, Point2};
/// use planum::polygon::PolygonOrientation;
///
/// let clockwise = vec![
///     Point2::from_ints(0, 0),
///     Point2::from_ints(0, 4),
///     Point2::from_ints(4, 4),
///     Point2::from_ints(4, 0),
/// ];
/// let boundary = create_boundary(clockwise).unwrap();
/// assert_eq!(boundary.orientation(), PolygonOrientation::CounterClockwise);
/// ```
pub fn create_boundary(points: Vec<Point2>) -> GeometryResult<Polygon> {
    normalize_boundary(Polygon::new(points)).inspect_err(|e| {
        warn!(error = %e, "boundary rejected");
    })
}

/// Builds a hole-free region from a boundary vertex list.
pub fn create_region(points: Vec<Point2>) -> GeometryResult<PlanarRegion> {
    PlanarRegion::new(Polygon::new(points)).inspect_err(|e| {
        warn!(error = %e, "region rejected");
    })
}

/// Returns a copy of `region` with one more hole.
///
/// # Errors
///
/// [`GeometryError::InvalidHole`](crate::GeometryError::InvalidHole) if the
/// hole is not simple or does not fit inside the region.
pub fn add_hole(region: &PlanarRegion, points: Vec<Point2>) -> GeometryResult<PlanarRegion> {
    region.with_hole(Polygon::new(points)).inspect_err(|e| {
        warn!(error = %e, holes = region.hole_count(), "hole rejected");
    })
}

/// Applies a Boolean operation to a polygon and a region.
pub fn compute_boolean(
    op: OperatorKind,
    operand: &Polygon,
    region: &PlanarRegion,
) -> GeometryResult<Vec<PlanarRegion>> {
    boolean_op(op, operand, region).inspect_err(|e| {
        warn!(op = %op, error = %e, "boolean operation failed");
    })
}

/// Applies a Boolean operation to two regions.
pub fn compute_boolean_regions(
    op: OperatorKind,
    a: &PlanarRegion,
    b: &PlanarRegion,
) -> GeometryResult<Vec<PlanarRegion>> {
    boolean_op_regions(op, a, b).inspect_err(|e| {
        warn!(op = %op, error = %e, "boolean operation failed");
    })
}

/// Computes the region visible from `query`.
///
/// See [`polygon::compute_visibility`] for the methods and failure cases.
pub fn compute_visibility(
    method: VisibilityMethod,
    query: &Point2,
    region: &PlanarRegion,
) -> GeometryResult<VisibilityRegion> {
    polygon::compute_visibility(method, query, region).inspect_err(|e| {
        warn!(%method, query = %query, error = %e, "visibility query failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, PolygonDefect};
    use crate::primitives::exact;
    use approx::assert_relative_eq;

    fn points(coords: &[(i64, i64)]) -> Vec<Point2> {
        coords.iter().map(|&c| Point2::from(c)).collect()
    }

    fn scenario() -> PlanarRegion {
        let region = create_region(points(&[(0, 0), (10, 0), (10, 10), (0, 10)])).unwrap();
        add_hole(&region, points(&[(4, 4), (6, 4), (6, 6), (4, 6)])).unwrap()
    }

    #[test]
    fn test_create_boundary_rejects_too_few_vertices() {
        assert_eq!(
            create_boundary(points(&[(0, 0), (1, 0), (0, 0)])),
            Err(GeometryError::InvalidPolygon(PolygonDefect::TooFewVertices {
                distinct: 2
            }))
        );
    }

    #[test]
    fn test_add_hole_leaves_region_untouched() {
        let region = scenario();
        assert_eq!(
            add_hole(&region, points(&[(8, 8), (12, 8), (9, 9)])),
            Err(GeometryError::InvalidHole)
        );
        assert_eq!(region.hole_count(), 1);
    }

    #[test]
    fn test_union_with_itself() {
        let region = scenario();
        let operand = create_boundary(points(&[(0, 0), (10, 0), (10, 10), (0, 10)])).unwrap();
        let union = compute_boolean(OperatorKind::Union, &operand, &region).unwrap();
        assert_eq!(union.len(), 1);
        assert_eq!(union[0].area(), exact(100));

        let same = compute_boolean_regions(OperatorKind::Union, &region, &region).unwrap();
        assert_eq!(same.len(), 1);
        assert_eq!(same[0].hole_count(), 1);
        assert_relative_eq!(same[0].area_f64(), 96.0);
        assert!(same[0].boundary().is_rotation_of(region.boundary()));
    }

    #[test]
    fn test_difference_plus_intersection_is_whole() {
        let region = scenario();
        let operand = create_boundary(points(&[(-3, -2), (7, 3), (2, 12)])).unwrap();
        let a = create_region(operand.vertices().to_vec()).unwrap();
        let diff = compute_boolean_regions(OperatorKind::Difference, &a, &region).unwrap();
        let inter = compute_boolean(OperatorKind::Intersection, &operand, &region).unwrap();
        let total: crate::primitives::ExactNumber =
            diff.iter().chain(&inter).map(PlanarRegion::area).sum();
        assert_eq!(total, a.area());
    }

    #[test]
    fn test_visibility_from_corner_of_scenario() {
        let region = scenario();
        let visible = compute_visibility(
            VisibilityMethod::TriangularExpansion,
            &Point2::from_ints(1, 1),
            &region,
        )
        .unwrap();
        assert!(visible.contains(&Point2::from_ints(1, 1)));
        assert!(visible.area() < exact(96));
        assert_eq!(
            compute_visibility(
                VisibilityMethod::TriangularExpansion,
                &Point2::from_ints(5, 5),
                &region
            ),
            Err(GeometryError::PointOutsideRegion)
        );
    }
}
