//! Random simple polygons from scattered point sets.
//!
//! Pipeline
//! - Scatter points uniformly in a box, compute their convex hull (quickhull),
//!   then fold the remaining interior points into the boundary one edge split
//!   at a time, keeping the polygon simple after every step.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//!   Breaking changes are fine when they improve the design.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_polygon_scatter, scatter_points, ClippedHullSource, PolygonSample, PolygonSource,
        ReplayToken, ScatterCfg, VertexCount,
    };
    pub use crate::geom2::{
        convex_hull, generate_polygon, Edge, GenerateError, GeneratedPolygon, Point, Polygon,
    };
}
