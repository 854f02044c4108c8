//! Uniform Catmull-Rom spline interpolation.
//!
//! Expands a sparse polyline into a smooth dense one that passes through
//! every control point. The parameterization is uniform, not centripetal or
//! chordal: consumers rely on byte-identical rounding for visual regression
//! comparisons, so the blend must not be silently upgraded.

use crate::geometry::Point;

/// Interpolate `segments` samples per span between consecutive control
/// points, duplicating the first and last point as phantom neighbors so the
/// curve needs no out-of-range data at the ends.
///
/// Exactly 2 control points fall back to linear interpolation; fewer than 2
/// are returned unchanged. The output always ends exactly on the last
/// control point.
pub fn interpolate(points: &[Point], segments: usize) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let segments = segments.max(1);

    if points.len() == 2 {
        let (a, b) = (points[0], points[1]);
        return (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64;
                Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
            })
            .collect();
    }

    let mut padded = Vec::with_capacity(points.len() + 2);
    padded.push(points[0]);
    padded.extend_from_slice(points);
    padded.push(points[points.len() - 1]);

    let mut result = Vec::with_capacity((points.len() - 1) * segments + 1);
    for window in padded.windows(4) {
        let [p0, p1, p2, p3] = [window[0], window[1], window[2], window[3]];
        for j in 0..segments {
            let t = j as f64 / segments as f64;
            result.push(catmull_rom(p0, p1, p2, p3, t));
        }
    }
    result.push(points[points.len() - 1]);
    result
}

// Standard Catmull-Rom basis, applied with identical coefficients to both
// channels. `t = 0` lands exactly on `p1`.
fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let blend = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * ((2.0 * b)
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    Point::new(
        blend(p0.x, p1.x, p2.x, p3.x),
        blend(p0.y, p1.y, p2.y, p3.y),
    )
}
