//! Closed polygon as a vertex sequence plus parallel edge cycle.
//!
//! Why both sequences
//! - The refinement loop looks edges up by value (stale-candidate detection)
//!   and splices replacements in place; keeping the cycle explicit makes the
//!   self-intersection query and the splice O(n) with no index arithmetic at
//!   call sites.

use super::types::{Edge, Point};
use super::util::segments_intersect;

/// Ordered vertex sequence `v[0..n]` with edge cycle
/// `edges[i] = (v[(i + n - 1) % n], v[i])`.
///
/// Invariants:
/// - The cycle is closed: each edge's end is the next edge's begin, cyclically.
/// - After every successful [`Polygon::split_edge_at`], the polygon is simple
///   (no two non-adjacent edges intersect); callers gate splits through
///   [`Edge::splits_simple`].
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Edge>,
}

impl Polygon {
    /// Build the edge cycle over a CCW hull vertex sequence.
    pub fn from_hull(vertices: Vec<Point>) -> Self {
        let n = vertices.len();
        let edges = (0..n)
            .map(|i| Edge::new(vertices[(i + n - 1) % n], vertices[i]))
            .collect();
        Self { vertices, edges }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Hand the boundary to the caller as a plain vertex list.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Whether `query` crosses the boundary.
    ///
    /// Edges sharing an endpoint with `query` are skipped: a split edge always
    /// touches its two neighbors at a vertex, and that contact is not a
    /// crossing.
    pub fn intersects(&self, query: Edge) -> bool {
        self.edges.iter().any(|&e| {
            e.begin != query.begin
                && e.begin != query.end
                && e.end != query.begin
                && e.end != query.end
                && segments_intersect(e.begin, e.end, query.begin, query.end)
        })
    }

    /// Position of `edge` in the current cycle, if still present.
    #[inline]
    pub fn position_of(&self, edge: Edge) -> Option<usize> {
        self.edges.iter().position(|&e| e == edge)
    }

    /// Replace `edges[i]` by its two halves split at `point` and insert the
    /// vertex at the matching position, preserving the parallel-cycle layout.
    pub fn split_edge_at(&mut self, i: usize, point: Point) {
        let (e1, e2) = self.edges[i].split(point);
        self.vertices.insert(i, point);
        self.edges[i] = e1;
        self.edges.insert(i + 1, e2);
    }

    /// Exhaustive pairwise check that no two non-adjacent edges intersect.
    pub fn is_simple(&self) -> bool {
        for (i, &a) in self.edges.iter().enumerate() {
            for &b in &self.edges[i + 1..] {
                let shares_endpoint = a.begin == b.begin
                    || a.begin == b.end
                    || a.end == b.begin
                    || a.end == b.end;
                if !shares_endpoint && segments_intersect(a.begin, a.end, b.begin, b.end) {
                    return false;
                }
            }
        }
        true
    }
}
