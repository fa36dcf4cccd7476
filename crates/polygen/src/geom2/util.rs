use nalgebra::Vector2;

use super::types::Point;

/// Twice the signed area of triangle `a, b, c`; positive iff `c` lies strictly
/// left of the directed line `a -> b` (counterclockwise turn).
#[inline]
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Segment intersection test for `ab` vs `cd`, exact comparisons throughout.
///
/// Parallel or collinear segments (zero direction cross product) intersect iff
/// an endpoint of one lies on the other, never otherwise. Non-parallel
/// segments intersect iff the solved parameters `r` (on `ab`) and `s` (on
/// `cd`) both lie in [0, 1]; segments sharing exactly one endpoint therefore
/// report true.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let cross = (d.x - c.x) * (b.y - a.y) - (d.y - c.y) * (b.x - a.x);
    if cross == 0.0 {
        return point_on_segment(a, b, c)
            || point_on_segment(a, b, d)
            || point_on_segment(c, d, a)
            || point_on_segment(c, d, b);
    }
    let r = ((c.y - a.y) * (b.x - a.x) - (c.x - a.x) * (b.y - a.y)) / cross;
    let s = ((c.y - a.y) * (d.x - c.x) - (c.x - a.x) * (d.y - c.y)) / cross;
    (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&s)
}

/// Whether `p` lies on the closed segment `ab`.
///
/// Exact-zero cross product plus dot-product bounds; no division, so the test
/// stays total for degenerate (zero-length) segments.
pub fn point_on_segment(a: Point, b: Point, p: Point) -> bool {
    let cross = (p.y - a.y) * (b.x - a.x) - (p.x - a.x) * (b.y - a.y);
    if cross != 0.0 {
        return false;
    }
    let ab = b.coords() - a.coords();
    let ap: Vector2<f64> = p.coords() - a.coords();
    let dot = ap.dot(&ab);
    dot >= 0.0 && dot <= ab.norm_squared()
}

/// Distance from `p` to the closed segment `start..end` (clamped projection).
///
/// Convention for the degenerate `start == end` segment: the distance to the
/// coincident endpoint.
pub fn dist_point_segment(p: Point, start: Point, end: Point) -> f64 {
    let line = end.coords() - start.coords();
    let to_p = p.coords() - start.coords();
    let len2 = line.norm_squared();
    if len2 == 0.0 {
        return to_p.norm();
    }
    let t = (to_p.dot(&line) / len2).clamp(0.0, 1.0);
    (to_p - line * t).norm()
}
