//! Incremental hull refinement: fold interior points into the boundary.
//!
//! Model
//! - Stage every (edge, interior point) distance in a min-heap and repeatedly
//!   take the globally closest pair. A popped candidate only acts if its edge
//!   is still in the cycle, its point is still interior, and the split keeps
//!   the polygon simple; otherwise it is a tombstone and is dropped.
//! - A successful split retires one edge and adds two, so fresh distances are
//!   staged for the two new edges against every remaining interior point.
//!
//! Ordering insertions by nearest-edge distance biases the result toward
//! compact perturbations of the hull rather than arbitrary jagged shapes.
//! The heap only ever shrinks by one per iteration and grows only on
//! successful insertion, so the loop drains without an external budget;
//! worst-case work is O(edges * interior) intersection re-checks.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use super::hull::convex_hull;
use super::polygon::Polygon;
use super::types::{Edge, Point};
use super::util::dist_point_segment;
use super::GenerateError;

/// Result of the generation pipeline.
///
/// `vertices` is the final CCW simple polygon. `residual` holds interior
/// points that admitted no valid insertion; it is empty on full completion.
#[derive(Clone, Debug)]
pub struct GeneratedPolygon {
    pub vertices: Vec<Point>,
    pub residual: Vec<Point>,
}

impl GeneratedPolygon {
    /// True when every interior point was absorbed into the boundary.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.residual.is_empty()
    }
}

/// A staged (distance, edge, point) insertion candidate.
///
/// Ordered by distance (`f64::total_cmp`), ties broken by ascending staging
/// sequence, so equal-distance candidates resolve in the order they were
/// staged. Candidates are never keyed by the raw distance value; two distinct
/// pairs at the same distance both survive.
struct Candidate {
    dist: f64,
    seq: u64,
    edge: Edge,
    point: Point,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Full pipeline: quickhull, then refinement over the interior points.
///
/// Residual interior points are reported, not silently dropped; see
/// [`GeneratedPolygon`].
pub fn generate_polygon(points: &[Point]) -> Result<GeneratedPolygon, GenerateError> {
    let hull = convex_hull(points)?;
    let hull_set: HashSet<Point> = hull.iter().copied().collect();
    let interior: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| !hull_set.contains(p))
        .collect();
    let polygon = Polygon::from_hull(hull);
    let (polygon, residual) = refine_hull(polygon, interior);
    Ok(GeneratedPolygon {
        vertices: polygon.into_vertices(),
        residual,
    })
}

/// Refine `polygon` by absorbing points from `interior`, nearest edge first.
///
/// Returns the refined polygon and the points that could not be absorbed.
/// The polygon stays simple after every step.
pub fn refine_hull(mut polygon: Polygon, mut interior: Vec<Point>) -> (Polygon, Vec<Point>) {
    let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    for &edge in polygon.edges() {
        for &point in &interior {
            heap.push(Reverse(Candidate {
                dist: dist_point_segment(point, edge.begin, edge.end),
                seq,
                edge,
                point,
            }));
            seq += 1;
        }
    }

    let mut absorbed = 0usize;
    while !interior.is_empty() {
        let Some(Reverse(cand)) = heap.pop() else {
            break;
        };
        // Lazy tombstoning: the edge may have been split away, or the point
        // absorbed, since this candidate was staged.
        let Some(i) = polygon.position_of(cand.edge) else {
            continue;
        };
        let Some(pool_idx) = interior.iter().position(|&p| p == cand.point) else {
            continue;
        };
        if !cand.edge.splits_simple(&polygon, cand.point) {
            tracing::debug!(dist = cand.dist, "candidate split would self-intersect");
            continue;
        }

        let (e1, e2) = cand.edge.split(cand.point);
        polygon.split_edge_at(i, cand.point);
        interior.remove(pool_idx);
        absorbed += 1;
        tracing::debug!(
            dist = cand.dist,
            vertices = polygon.len(),
            remaining = interior.len(),
            "absorbed interior point"
        );

        for &point in &interior {
            for edge in [e1, e2] {
                heap.push(Reverse(Candidate {
                    dist: dist_point_segment(point, edge.begin, edge.end),
                    seq,
                    edge,
                    point,
                }));
                seq += 1;
            }
        }
    }

    tracing::debug!(absorbed, residual = interior.len(), "refinement finished");
    (polygon, interior)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_distances_resolve_in_staging_order() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        let first = Candidate {
            dist: 2.5,
            seq: 0,
            edge: Edge::new(a, b),
            point: c,
        };
        let second = Candidate {
            dist: 2.5,
            seq: 1,
            edge: Edge::new(b, c),
            point: a,
        };
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(second));
        heap.push(Reverse(first));
        assert_eq!(heap.pop().unwrap().0.seq, 0);
        assert_eq!(heap.pop().unwrap().0.seq, 1);
    }

    #[test]
    fn closer_candidate_pops_first() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let near = Candidate {
            dist: 0.5,
            seq: 1,
            edge: Edge::new(a, b),
            point: a,
        };
        let far = Candidate {
            dist: 1.5,
            seq: 0,
            edge: Edge::new(a, b),
            point: b,
        };
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(far));
        heap.push(Reverse(near));
        assert_eq!(heap.pop().unwrap().0.seq, 1);
    }

    #[test]
    fn absorbs_square_center() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        let polygon = Polygon::from_hull(square);
        let center = Point::new(50.0, 50.0);
        let (refined, residual) = refine_hull(polygon, vec![center]);
        assert!(residual.is_empty());
        assert_eq!(refined.len(), 5);
        assert!(refined.is_simple());
        assert!(refined.vertices().contains(&center));
    }

    #[test]
    fn empty_interior_is_a_no_op() {
        let hull = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 3.0),
        ];
        let polygon = Polygon::from_hull(hull.clone());
        let (refined, residual) = refine_hull(polygon, Vec::new());
        assert!(residual.is_empty());
        assert_eq!(refined.vertices(), hull.as_slice());
    }
}
