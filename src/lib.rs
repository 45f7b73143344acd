//! planum - Exact planar regions
//!
//! Polygons with holes, Boolean set algebra and visibility polygons, computed
//! with exact rational arithmetic. There are no tolerances: every predicate
//! gives the true answer, including on degenerate input.
//!
//! # Example
//!
//! ```
//! use planum::{compute_boolean, OperatorKind, PlanarRegion, Polygon};
//! use planum::primitives::exact;
//!
//! let region = PlanarRegion::new(Polygon::from_coords(&[(0, 0), (10, 0), (10, 10), (0, 10)]))
//!     .unwrap()
//!     .with_hole(Polygon::from_coords(&[(4, 4), (6, 4), (6, 6), (4, 6)]))
//!     .unwrap();
//!
//! let cut = Polygon::from_coords(&[(0, 0), (5, 0), (5, 10), (0, 10)]);
//! let left = compute_boolean(OperatorKind::Intersection, &cut, &region).unwrap();
//! assert_eq!(left.len(), 1);
//! assert_eq!(left[0].area(), exact(48));
//! ```

pub mod error;
pub mod ops;
pub mod polygon;
pub mod predicates;
pub mod primitives;

pub use error::{GeometryError, GeometryResult, PolygonDefect};
pub use ops::{
    add_hole, compute_boolean, compute_boolean_regions, compute_visibility, create_boundary,
    create_region, fold_boolean,
};
pub use polygon::{
    OperatorKind, PlanarRegion, Polygon, PolygonOrientation, VisibilityMethod, VisibilityRegion,
};
pub use predicates::{
    orient2d, point_on_segment, segments_intersect, Orientation, PointLocation,
    SegmentIntersection,
};
pub use primitives::{ExactNumber, Point2, Segment2, Vec2};
