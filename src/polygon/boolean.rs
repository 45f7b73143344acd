//! Boolean set operations on planar regions.
//!
//! Union, intersection, difference and symmetric difference are computed on
//! the exact planar arrangement of both operands' edges. Every arrangement
//! face is classified by membership in each operand, the operator decides
//! which faces are kept, and the edges separating kept from discarded faces
//! are traced back into boundaries and holes.
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
//! let result = boolean_op(OperatorKind::Intersection, &square1, &square2).unwrap();
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].area(), exact(1));
//! ```

use super::arrangement::{Arrangement, Operand};
use super::core::{bounding_box, boxes_overlap, Polygon, PolygonOrientation};
use super::region::PlanarRegion;
use crate::error::{GeometryError, GeometryResult};
use crate::predicates::{orient2d, Orientation, PointLocation};
use crate::primitives::{to_f64, Point2};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, debug_span, warn};

/// Which Boolean set operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatorKind {
    /// Points in either operand.
    Union,
    /// Points in both operands.
    Intersection,
    /// Points in the first operand but not the second.
    Difference,
    /// Points in exactly one operand.
    SymmetricDifference,
}

impl OperatorKind {
    /// Every operator, in cycling order.
    pub const ALL: [OperatorKind; 4] = [
        OperatorKind::Union,
        OperatorKind::Intersection,
        OperatorKind::Difference,
        OperatorKind::SymmetricDifference,
    ];

    /// Whether a face with the given memberships belongs to the result.
    #[inline]
    pub fn includes(self, in_a: bool, in_b: bool) -> bool {
        match self {
            OperatorKind::Union => in_a || in_b,
            OperatorKind::Intersection => in_a && in_b,
            OperatorKind::Difference => in_a && !in_b,
            OperatorKind::SymmetricDifference => in_a != in_b,
        }
    }

    /// The following operator in [`ALL`](Self::ALL), wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Lower-case operator name, used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            OperatorKind::Union => "union",
            OperatorKind::Intersection => "intersection",
            OperatorKind::Difference => "difference",
            OperatorKind::SymmetricDifference => "symmetric difference",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Combines a polygon with a region.
///
/// The polygon is normalized to counter-clockwise order first.
///
/// # Arguments
///
/// * `kind` - The set operation
/// * `a` - First operand, a simple polygon
/// * `b` - Second operand, a region that may have holes
///
/// # Returns
///
/// The result regions, with pairwise disjoint interiors. Empty if nothing
/// remains (for example, the intersection of disjoint operands).
///
/// # Errors
///
/// - [`GeometryError::InvalidPolygon`] if `a` is not simple.
/// - [`GeometryError::UnsupportedOperation`] for a symmetric difference of
///   operands that touch without overlapping, or if the result cannot be
///   assembled into valid regions.
pub fn boolean_op(
    kind: OperatorKind,
    a: &Polygon,
    b: &PlanarRegion,
) -> GeometryResult<Vec<PlanarRegion>> {
    let a = PlanarRegion::new(a.clone())?;
    boolean_op_regions(kind, &a, b)
}

/// Combines two regions; both operands may have holes.
pub fn boolean_op_regions(
    kind: OperatorKind,
    a: &PlanarRegion,
    b: &PlanarRegion,
) -> GeometryResult<Vec<PlanarRegion>> {
    overlay(kind, std::slice::from_ref(a), std::slice::from_ref(b))
}

/// Overlay of two operands, each given as a list of regions with pairwise
/// disjoint interiors.
pub(crate) fn overlay(
    kind: OperatorKind,
    a: &[PlanarRegion],
    b: &[PlanarRegion],
) -> GeometryResult<Vec<PlanarRegion>> {
    let span = debug_span!("overlay", op = %kind, a_regions = a.len(), b_regions = b.len());
    let _enter = span.enter();

    let disjoint = match (combined_box(a), combined_box(b)) {
        (Some(box_a), Some(box_b)) => !boxes_overlap(&box_a, &box_b),
        _ => true,
    };
    if disjoint {
        debug!("operands are disjoint");
        return Ok(match kind {
            OperatorKind::Union | OperatorKind::SymmetricDifference => {
                a.iter().chain(b.iter()).cloned().collect()
            }
            OperatorKind::Intersection => Vec::new(),
            OperatorKind::Difference => a.to_vec(),
        });
    }

    let mut input = Vec::new();
    for region in a {
        input.extend(region.edges().map(|e| (Operand::A, e)));
    }
    for region in b {
        input.extend(region.edges().map(|e| (Operand::B, e)));
    }
    let arrangement = Arrangement::build(input);
    let (face_of, cycles) = arrangement.faces();

    let membership: Vec<(bool, bool)> = cycles
        .iter()
        .map(|cycle| {
            (
                cycle_inside(&arrangement, cycle, Operand::A, a),
                cycle_inside(&arrangement, cycle, Operand::B, b),
            )
        })
        .collect();
    debug!(faces = cycles.len(), "arrangement built");

    if kind == OperatorKind::SymmetricDifference
        && !membership.iter().any(|&(in_a, in_b)| in_a && in_b)
        && arrangement.boundaries_meet()
    {
        return Err(GeometryError::unsupported(
            "symmetric difference",
            "operands touch without overlapping",
        ));
    }

    let included: Vec<bool> = membership
        .iter()
        .map(|&(in_a, in_b)| kind.includes(in_a, in_b))
        .collect();
    let is_result = |h: usize| included[face_of[h]] && !included[face_of[h ^ 1]];

    let mut loops = Vec::new();
    let mut used = vec![false; arrangement.half_edge_count()];
    for start in 0..arrangement.half_edge_count() {
        if used[start] || !is_result(start) {
            continue;
        }
        let mut walk = Vec::new();
        let mut h = start;
        loop {
            used[h] = true;
            walk.push(arrangement.origin(h));
            h = arrangement
                .next_matching(h, is_result)
                .ok_or_else(trace_error)?;
            if h == start {
                break;
            }
            if used[h] {
                return Err(trace_error());
            }
        }
        loops.extend(split_at_repeats(walk));
    }

    let regions = assemble(&arrangement, loops)?;
    debug!(
        regions = regions.len(),
        area = regions.iter().map(PlanarRegion::area_f64).sum::<f64>(),
        "overlay complete"
    );
    Ok(regions)
}

fn trace_error() -> GeometryError {
    GeometryError::unsupported("boolean operation", "result boundary could not be traced")
}

fn combined_box(regions: &[PlanarRegion]) -> Option<(Point2, Point2)> {
    let corners: Vec<Point2> = regions
        .iter()
        .filter_map(PlanarRegion::bounding_box)
        .flat_map(|(lo, hi)| [lo, hi])
        .collect();
    bounding_box(&corners)
}

/// Decides whether the face to the left of `cycle` lies inside `operand`.
fn cycle_inside(
    arrangement: &Arrangement,
    cycle: &[usize],
    operand: Operand,
    regions: &[PlanarRegion],
) -> bool {
    let mut free_edge = None;
    for &h in cycle {
        match arrangement.side_of(h, operand) {
            Some(true) => return true,
            Some(false) => {}
            None => {
                free_edge.get_or_insert(h);
            }
        }
    }
    // A half-edge carrying no edge of the operand touches its rings at most
    // at its endpoints, so its midpoint is strictly inside or outside.
    match free_edge {
        Some(h) => {
            let probe = arrangement.midpoint(h);
            regions
                .iter()
                .any(|r| r.locate(&probe) == PointLocation::Inside)
        }
        None => false,
    }
}

/// Splits a closed walk into loops without repeated vertices.
fn split_at_repeats(walk: Vec<usize>) -> Vec<Vec<usize>> {
    let mut loops = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut position: HashMap<usize, usize> = HashMap::new();
    for v in walk {
        if let Some(&i) = position.get(&v) {
            let closed: Vec<usize> = stack.drain(i..).collect();
            for u in &closed {
                position.remove(u);
            }
            loops.push(closed);
        }
        position.insert(v, stack.len());
        stack.push(v);
    }
    if !stack.is_empty() {
        loops.push(stack);
    }
    loops
}

/// Removes straight vertices introduced by edge splitting.
fn drop_split_vertices(arrangement: &Arrangement, mut ring: Vec<usize>) -> Vec<usize> {
    loop {
        let n = ring.len();
        if n <= 3 {
            return ring;
        }
        let straight = (0..n).find(|&i| {
            let v = ring[i];
            !arrangement.is_original(v)
                && orient2d(
                    arrangement.point(ring[(i + n - 1) % n]),
                    arrangement.point(v),
                    arrangement.point(ring[(i + 1) % n]),
                ) == Orientation::Collinear
        });
        match straight {
            Some(i) => {
                ring.remove(i);
            }
            None => return ring,
        }
    }
}

/// Turns traced loops into regions: counter-clockwise loops are boundaries,
/// clockwise loops become holes of the smallest boundary containing them.
fn assemble(arrangement: &Arrangement, loops: Vec<Vec<usize>>) -> GeometryResult<Vec<PlanarRegion>> {
    let mut outers: Vec<Polygon> = Vec::new();
    let mut holes: Vec<Polygon> = Vec::new();
    for ring in loops {
        let ring = drop_split_vertices(arrangement, ring);
        let polygon = Polygon::new(
            ring.iter()
                .map(|&v| arrangement.point(v).clone())
                .collect(),
        );
        match polygon.orientation() {
            PolygonOrientation::Degenerate => continue,
            _ if !polygon.is_simple() => {
                return Err(GeometryError::unsupported(
                    "boolean operation",
                    "result contour is not simple",
                ));
            }
            PolygonOrientation::CounterClockwise => outers.push(polygon),
            PolygonOrientation::Clockwise => holes.push(polygon),
        }
    }

    let mut by_area: Vec<usize> = (0..outers.len()).collect();
    by_area.sort_by_cached_key(|&i| outers[i].area());

    let mut assigned: Vec<Vec<Polygon>> = vec![Vec::new(); outers.len()];
    for hole in holes {
        let owner = by_area.iter().copied().find(|&i| {
            hole.edges()
                .map(|e| outers[i].locate(&e.midpoint()))
                .find(|&location| location != PointLocation::OnBoundary)
                == Some(PointLocation::Inside)
        });
        match owner {
            Some(i) => assigned[i].push(hole),
            None => {
                return Err(GeometryError::unsupported(
                    "boolean operation",
                    "hole lies outside every result boundary",
                ));
            }
        }
    }

    Ok(outers
        .into_iter()
        .zip(assigned)
        .map(|(boundary, holes)| PlanarRegion::from_parts(boundary, holes))
        .collect())
}

/// Step that stopped a [`fold_boolean`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldFailure {
    /// Index into the step list.
    pub step: usize,
    /// Why the step failed.
    pub error: GeometryError,
}

/// Outcome of [`fold_boolean`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanFold {
    /// Regions after the last successful step.
    pub regions: Vec<PlanarRegion>,
    /// Number of steps applied.
    pub applied: usize,
    /// The failing step, if the fold stopped early.
    pub failure: Option<FoldFailure>,
}

impl BooleanFold {
    /// True if every step was applied.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Total area of the accumulated regions.
    pub fn area_f64(&self) -> f64 {
        self.regions.iter().map(|r| to_f64(&r.area())).sum()
    }
}

/// Applies a sequence of operations against a growing list of regions.
///
/// Each step combines its polygon (first operand) with the whole current
/// list (second operand, the union of its members). Steps are atomic: when
/// one fails, the list from the previous step is returned with the failing
/// step reported, and later steps are not attempted.
///
/// # Example
///
/// ```
/// use planum::polygon::{fold_boolean, OperatorKind, Polygon};
/// use planum::primitives::exact;
///
/// let steps = vec![
///     (OperatorKind::Union, Polygon::from_coords(&[(0, 0), (2, 0), (2, 2), (0, 2)])),
///     (OperatorKind::Union, Polygon::from_coords(&[(1, 1), (3, 1), (3, 3), (1, 3)])),
/// ];
/// let fold = fold_boolean(&[], &steps);
/// assert!(fold.is_complete());
/// assert_eq!(fold.regions.len(), 1);
/// assert_eq!(fold.regions[0].area(), exact(7));
/// ```
pub fn fold_boolean(initial: &[PlanarRegion], steps: &[(OperatorKind, Polygon)]) -> BooleanFold {
    let mut regions = initial.to_vec();
    for (step, (kind, operand)) in steps.iter().enumerate() {
        let result = PlanarRegion::new(operand.clone())
            .and_then(|a| overlay(*kind, std::slice::from_ref(&a), &regions));
        match result {
            Ok(next) => regions = next,
            Err(error) => {
                warn!(step, op = %kind, error = %error, "boolean fold stopped");
                return BooleanFold {
                    regions,
                    applied: step,
                    failure: Some(FoldFailure { step, error }),
                };
            }
        }
    }
    BooleanFold {
        regions,
        applied: steps.len(),
        failure: None,
    }
}
