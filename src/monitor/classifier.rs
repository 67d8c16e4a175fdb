//! Point-in-polygon test and first-match zone classification.

use crate::monitor::zone::{Point, ZoneSet};

/// Even-odd ray-casting containment test.
///
/// Casts a horizontal ray to the left of `point` and counts edge crossings,
/// taking edges pairwise with wraparound. A crossing is counted when the
/// point's y lies in the half-open span (min(y1, y2), max(y1, y2)] and the
/// point's x is at or left of the edge's x-intercept at that y. Horizontal
/// edges contribute no crossing.
///
/// Points exactly on an edge get whatever answer the crossing count gives;
/// boundary membership is implementation-defined, as is usual for this
/// algorithm, but deterministic for a given polygon. Degenerate polygons
/// (fewer than 3 vertices, collinear vertices, zero area) never panic and
/// classify as outside.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    for (i, &p1) in polygon.iter().enumerate() {
        let p2 = polygon[(i + 1) % polygon.len()];
        if p1.y == p2.y {
            continue;
        }
        let span_min = p1.y.min(p2.y);
        let span_max = p1.y.max(p2.y);
        if point.y <= span_min || point.y > span_max || point.x > p1.x.max(p2.x) {
            continue;
        }
        if p1.x == p2.x {
            inside = !inside;
            continue;
        }
        let x_intercept = (point.y - p1.y) as f64 * (p2.x - p1.x) as f64
            / (p2.y - p1.y) as f64
            + p1.x as f64;
        if point.x as f64 <= x_intercept {
            inside = !inside;
        }
    }
    inside
}

/// Resolve `point` to the first zone containing it, in zone insertion order.
///
/// Zones are not guaranteed disjoint; when they overlap the earliest-defined
/// containing zone wins.
pub fn classify<'a>(point: Point, zones: &'a ZoneSet) -> Option<&'a str> {
    zones
        .iter()
        .find(|(_, zone)| point_in_polygon(point, &zone.points))
        .map(|(id, _)| id)
}
