//! Exact geometric primitives.

mod number;
mod point2;
mod segment2;
mod vec2;

pub(crate) use number::half;
pub use number::{exact, exact_from_f64, exact_ratio, to_f64, ExactNumber};
pub use point2::Point2;
pub use segment2::Segment2;
pub use vec2::Vec2;
