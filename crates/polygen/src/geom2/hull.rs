//! Quickhull convex hull in 2D.
//!
//! Divide-and-conquer: seed with the extreme-x points, partition the rest by
//! side of the seed line, then recursively keep the furthest point (largest
//! unsigned area) per baseline. Collinear points never enter a recursion, so
//! only extreme points survive.
//!
//! Each recursion works on the points strictly right of its baseline and
//! emits `a` before descending towards `b`, so the two seed calls
//! `(p_min, p_max)` then `(p_max, p_min)` walk the lower chain west to east
//! and the upper chain back, giving counterclockwise order overall.

use super::util::signed_area;
use super::{GenerateError, Point};

/// Convex hull vertices of `points` in counterclockwise order.
///
/// Collinear boundary points are excluded. Fails with
/// [`GenerateError::InvalidInput`] on fewer than 3 points, non-finite
/// coordinates, or an all-collinear set; no partial hull is returned.
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>, GenerateError> {
    if points.len() < 3 {
        return Err(GenerateError::invalid_input(format!(
            "need at least 3 points, got {}",
            points.len()
        )));
    }
    if let Some(p) = points.iter().find(|p| !p.is_finite()) {
        return Err(GenerateError::invalid_input(format!(
            "non-finite coordinate in ({}, {})",
            p.x, p.y
        )));
    }

    // Extreme-x seeds; strict comparisons keep the first point encountered on
    // ties.
    let mut p_min = points[0];
    let mut p_max = points[0];
    for &p in &points[1..] {
        if p.x < p_min.x {
            p_min = p;
        }
        if p.x > p_max.x {
            p_max = p;
        }
    }

    // Split by side of the seed line; points exactly on it are never hull
    // vertices besides the seeds themselves.
    let mut below = Vec::new();
    let mut above = Vec::new();
    for &p in points {
        let side = signed_area(p_min, p_max, p);
        if side < 0.0 {
            below.push(p);
        } else if side > 0.0 {
            above.push(p);
        }
    }

    let mut hull = Vec::with_capacity(points.len());
    hull_side(p_min, p_max, &below, &mut hull);
    hull_side(p_max, p_min, &above, &mut hull);

    if hull.len() < 3 {
        return Err(GenerateError::invalid_input(
            "all points are collinear".to_string(),
        ));
    }
    tracing::trace!(input = points.len(), hull = hull.len(), "quickhull");
    Ok(hull)
}

/// Hull vertices strictly right of baseline `a -> b`, appended to `out` in
/// order from `a` (inclusive) towards `b` (exclusive).
fn hull_side(a: Point, b: Point, points: &[Point], out: &mut Vec<Point>) {
    let mut furthest: Option<Point> = None;
    let mut min_side = 0.0;
    let mut outside = Vec::with_capacity(points.len());
    for &p in points {
        let side = signed_area(a, b, p);
        if side < 0.0 {
            outside.push(p);
            if side < min_side {
                min_side = side;
                furthest = Some(p);
            }
        }
    }
    match furthest {
        // Nothing beyond the baseline: `a` is a confirmed hull vertex.
        None => out.push(a),
        Some(f) => {
            hull_side(a, f, &outside, out);
            hull_side(f, b, &outside, out);
        }
    }
}
