//! Planar regions: a simple boundary with zero or more holes.

use super::core::{bounding_box, Polygon};
use super::validate::{is_valid_hole, normalize_boundary, normalize_hole};
use crate::error::{GeometryError, GeometryResult};
use crate::predicates::PointLocation;
use crate::primitives::{to_f64, ExactNumber, Point2, Segment2};

/// A simple polygon boundary plus disjoint, contained holes.
///
/// Invariants, upheld by every constructor:
/// - the boundary is simple and counter-clockwise;
/// - every hole is simple, clockwise and lies inside the boundary;
/// - holes meet the boundary and each other only at isolated points.
///
/// Regions are values. [`with_hole`](Self::with_hole) returns a new region
/// and leaves `self` untouched, whether it succeeds or not.
///
/// # Example
///
/// ```
/// use planum::{PlanarRegion, Polygon};
/// use planum::primitives::exact;
///
/// let region = PlanarRegion::new(Polygon::from_coords(&[(0, 0), (10, 0), (10, 10), (0, 10)]))
///     .unwrap()
///     .with_hole(Polygon::from_coords(&[(4, 4), (6, 4), (6, 6), (4, 6)]))
///     .unwrap();
/// assert_eq!(region.area(), exact(96));
/// assert_eq!(region.hole_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RegionParts", into = "RegionParts")
)]
pub struct PlanarRegion {
    boundary: Polygon,
    holes: Vec<Polygon>,
}

impl PlanarRegion {
    /// Creates a hole-free region, normalizing the boundary to CCW.
    pub fn new(boundary: Polygon) -> GeometryResult<Self> {
        Ok(Self {
            boundary: normalize_boundary(boundary)?,
            holes: Vec::new(),
        })
    }

    /// Returns a new region with `hole` added.
    ///
    /// The hole is normalized to CW and must pass
    /// [`is_valid_hole`](super::is_valid_hole); otherwise
    /// [`GeometryError::InvalidHole`] is returned.
    pub fn with_hole(&self, hole: Polygon) -> GeometryResult<Self> {
        let hole = normalize_hole(hole).map_err(|_| GeometryError::InvalidHole)?;
        if !is_valid_hole(self, &hole) {
            return Err(GeometryError::InvalidHole);
        }
        let mut holes = self.holes.clone();
        holes.push(hole);
        Ok(Self {
            boundary: self.boundary.clone(),
            holes,
        })
    }

    /// Assembles a region from rings already known to satisfy the invariants.
    pub(crate) fn from_parts(boundary: Polygon, holes: Vec<Polygon>) -> Self {
        Self { boundary, holes }
    }

    /// The counter-clockwise outer boundary.
    #[inline]
    pub fn boundary(&self) -> &Polygon {
        &self.boundary
    }

    /// The clockwise holes, in insertion order.
    #[inline]
    pub fn holes(&self) -> &[Polygon] {
        &self.holes
    }

    /// Number of holes.
    #[inline]
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// The boundary followed by the holes.
    pub fn rings(&self) -> impl Iterator<Item = &Polygon> {
        std::iter::once(&self.boundary).chain(self.holes.iter())
    }

    /// All ring edges. The region's interior lies to the left of each.
    pub fn edges(&self) -> impl Iterator<Item = Segment2> + '_ {
        self.rings().flat_map(Polygon::edges)
    }

    /// Boundary area minus hole areas.
    pub fn area(&self) -> ExactNumber {
        // Holes are clockwise, so their signed areas are negative.
        self.rings().map(|r| r.signed_area()).sum()
    }

    /// Area rounded to `f64`.
    pub fn area_f64(&self) -> f64 {
        to_f64(&self.area())
    }

    /// Locates a point with closed-region semantics.
    ///
    /// Points strictly inside a hole are `Outside`; points on the boundary or
    /// on a hole's boundary are `OnBoundary`.
    pub fn locate(&self, point: &Point2) -> PointLocation {
        match self.boundary.locate(point) {
            PointLocation::Outside => return PointLocation::Outside,
            PointLocation::OnBoundary => return PointLocation::OnBoundary,
            PointLocation::Inside => {}
        }
        for hole in &self.holes {
            match hole.locate(point) {
                PointLocation::Inside => return PointLocation::Outside,
                PointLocation::OnBoundary => return PointLocation::OnBoundary,
                PointLocation::Outside => {}
            }
        }
        PointLocation::Inside
    }

    /// Closed containment: interior or boundary.
    pub fn contains(&self, point: &Point2) -> bool {
        self.locate(point).is_inside_or_on()
    }

    /// Bounding box of the outer boundary.
    pub fn bounding_box(&self) -> Option<(Point2, Point2)> {
        bounding_box(self.boundary.vertices())
    }

    /// True if the boundary is convex and there are no holes.
    pub fn is_convex(&self) -> bool {
        self.holes.is_empty() && self.boundary.is_convex()
    }

    /// Rounds every ring to `f64` pairs: the boundary first, then the holes.
    pub fn to_f64(&self) -> Vec<Vec<(f64, f64)>> {
        self.rings().map(Polygon::to_f64).collect()
    }
}

impl TryFrom<Polygon> for PlanarRegion {
    type Error = GeometryError;

    fn try_from(boundary: Polygon) -> GeometryResult<Self> {
        Self::new(boundary)
    }
}

/// Plain ring lists used as the serialized form of a region.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RegionParts {
    boundary: Vec<Point2>,
    holes: Vec<Vec<Point2>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RegionParts> for PlanarRegion {
    type Error = GeometryError;

    fn try_from(parts: RegionParts) -> GeometryResult<Self> {
        parts
            .holes
            .into_iter()
            .try_fold(Self::new(Polygon::new(parts.boundary))?, |region, hole| {
                region.with_hole(Polygon::new(hole))
            })
    }
}

#[cfg(feature = "serde")]
impl From<PlanarRegion> for RegionParts {
    fn from(region: PlanarRegion) -> Self {
        Self {
            boundary: region.boundary.into(),
            holes: region.holes.into_iter().map(Into::into).collect(),
        }
    }
}
