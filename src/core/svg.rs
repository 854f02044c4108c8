//! SVG path encoding and arc-length measurement.
//!
//! Coordinates are formatted to a fixed 2-decimal precision so rendered
//! output is stable across runs.

use crate::geometry::Point;

/// Encode a polyline as an SVG stroke path: move to the first point, line to
/// each subsequent one. An empty polyline encodes as an empty string.
pub fn line_path(points: &[Point]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let coords: Vec<String> = points
        .iter()
        .map(|p| format!("{:.2} {:.2}", p.x, p.y))
        .collect();
    format!("M {}", coords.join(" L "))
}

/// Encode the same polyline closed against a baseline y-value, forming the
/// outline of a filled region under the curve.
pub fn area_path(points: &[Point], baseline: f64) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let last = points[points.len() - 1];

    let mut path = format!(
        "M {:.2} {:.2} L {:.2} {:.2}",
        first.x, baseline, first.x, first.y
    );
    for p in &points[1..] {
        path.push_str(&format!(" L {:.2} {:.2}", p.x, p.y));
    }
    path.push_str(&format!(" L {:.2} {:.2} Z", last.x, baseline));
    path
}

/// Total arc length of the polyline: the sum of consecutive-point distances.
/// Drives the stroke draw-in animation, whose duration scales with length.
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(pair[1]))
        .sum()
}
