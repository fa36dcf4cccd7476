//! Basic value types for the 2D boundary structure.
//!
//! - `Point`: immutable coordinate pair with bit-exact equality and hashing.
//! - `Edge`: directed boundary segment; recreated, never mutated, on change.

use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use super::polygon::Polygon;

/// Immutable 2D point.
///
/// Equality and hashing are bit-exact (`f64::to_bits`), not approximate:
/// `-0.0 != 0.0`, `NaN == NaN`, and near-duplicate coordinates are distinct
/// points. This is the contract the interior-pool removal and hull-vertex
/// de-duplication rely on.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates as a nalgebra vector, for arithmetic.
    #[inline]
    pub fn coords(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.x.to_bits());
        state.write_u64(self.y.to_bits());
    }
}

/// Directed polygon boundary segment from `begin` to `end`.
///
/// Equality is endpoint-pair equality: `(a, b) != (b, a)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub begin: Point,
    pub end: Point,
}

impl Edge {
    #[inline]
    pub fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }

    /// The two edges produced by splitting this edge at `point`.
    #[inline]
    pub fn split(self, point: Point) -> (Edge, Edge) {
        (Edge::new(self.begin, point), Edge::new(point, self.end))
    }

    /// Whether splitting this edge at `point` keeps `polygon` simple.
    ///
    /// The split is valid iff neither half crosses a boundary edge that does
    /// not already share an endpoint with it (adjacent edges always share one;
    /// that is what allows insertion at all).
    pub fn splits_simple(&self, polygon: &Polygon, point: Point) -> bool {
        let (e1, e2) = self.split(point);
        !polygon.intersects(e1) && !polygon.intersects(e2)
    }
}
