//! 2D polygon generation (quickhull + incremental hull refinement).
//!
//! Purpose
//! - Provide a small, deterministic generator of simple (non-self-intersecting)
//!   polygons: convex hull of a scatter, then greedy nearest-edge insertion of
//!   the interior points with a per-step simplicity check.
//!
//! Why this design
//! - The hull gives a simple starting boundary for free; refinement only ever
//!   splits live edges, so simplicity is a local check against the current
//!   edge cycle rather than a global repair pass.
//! - Exact (non-epsilon) predicates keep boundary-case behavior reproducible;
//!   see `types::Point` for the bit-exact equality contract.
//!
//! Code cross-refs: `types::{Point, Edge}`, `polygon::Polygon`,
//! `hull::convex_hull`, `refine::generate_polygon`, `rand::PolygonSource`.

pub mod rand;

mod hull;
mod polygon;
mod refine;
mod types;
mod util;

pub use hull::convex_hull;
pub use polygon::Polygon;
pub use refine::{generate_polygon, refine_hull, GeneratedPolygon};
pub use types::{Edge, Point};
pub use util::{dist_point_segment, point_on_segment, segments_intersect, signed_area};

use std::fmt;

/// Error type shared by the hull, the pipeline, and the generator sources.
#[derive(Debug)]
pub enum GenerateError {
    InvalidParams { reason: String },
    InvalidInput { reason: String },
    Degenerate { reason: String },
}

impl GenerateError {
    pub(crate) fn invalid_params(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::InvalidInput { reason } => write!(f, "invalid input point set: {reason}"),
            Self::Degenerate { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for GenerateError {}
