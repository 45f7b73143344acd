//! Polygons, planar regions and the operations on them.
//!
//! This module provides:
//! - Exact area, centroid, convexity and point location for polygons
//! - Validation and orientation normalization of boundaries and holes
//! - Boolean operations on regions (union, intersection, difference, XOR)
//! - Triangulation of regions with holes
//! - Visibility polygons
//!
//! # Example
//!
//! ```
//! use planum::polygon::{boolean_op, OperatorKind, PlanarRegion, Polygon};
//! use planum::primitives::exact;
//!
//! // Two overlapping squares
//! let square1 = Polygon::from_coords(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
//! let square2 = PlanarRegion::new(Polygon::from_coords(&[(1, 1), (3, 1), (3, 3), (1, 3)])).unwrap();
//!
//! let union = boolean_op(OperatorKind::Union, &square1, &square2).unwrap();
//! assert_eq!(union.len(), 1);
//! assert_eq!(union[0].area(), exact(7));
//! ```

mod arrangement;
mod boolean;
mod core;
mod region;
mod triangulate;
mod validate;
mod visibility;

pub use boolean::{
    boolean_op, boolean_op_regions, fold_boolean, BooleanFold, FoldFailure, OperatorKind,
};
pub use core::{
    polygon_area, polygon_centroid, polygon_is_convex, polygon_is_simple, polygon_signed_area,
    Polygon, PolygonOrientation,
};
pub use region::PlanarRegion;
pub use triangulate::{triangulate_region, RegionTriangulation};
pub use validate::{
    is_valid_hole, normalize_boundary, normalize_hole, validate, ValidationReport,
};
pub use visibility::{compute_visibility, is_visible, VisibilityMethod, VisibilityRegion};
