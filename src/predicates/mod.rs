//! Exact geometric predicates.
//!
//! Every predicate evaluates its sign in exact rational arithmetic. There are
//! no tolerance parameters and no hidden epsilons: collinear means collinear.

mod containment;
mod intersect;
mod orientation;

pub use containment::{locate_point, PointLocation};
pub(crate) use intersect::{point_in_segment_interior, split_segment};
pub use intersect::{point_on_segment, segments_intersect, SegmentIntersection};
pub use orientation::{compare_directions, cross, orient2d, Orientation};
