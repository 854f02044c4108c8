//! Douglas-Peucker polyline simplification.
//!
//! Bounds the work done by the spline and encoding stages on dense inputs.
//! The output is always a subsequence of the input with the endpoints kept,
//! and every discarded point lies within the tolerance of the segment
//! connecting its retained neighbors.

use crate::geometry::{perpendicular_distance, Point};

/// Reduce `points` to a sparser polyline within `tolerance` perpendicular
/// distance. Inputs of fewer than 3 points are returned unchanged.
pub fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_distance = 0.0;
    let mut index = 0;
    for (i, point) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let d = perpendicular_distance(*point, first, last);
        if d > max_distance {
            max_distance = d;
            index = i;
        }
    }

    if max_distance > tolerance {
        let mut left = simplify(&points[..=index], tolerance);
        let right = simplify(&points[index..], tolerance);
        // The split point ends both halves; keep a single copy.
        left.pop();
        left.extend(right);
        left
    } else {
        vec![first, last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new(i as f64, if i % 2 == 0 { 0.0 } else { 5.0 }))
            .collect()
    }

    fn is_subsequence(sparse: &[Point], dense: &[Point]) -> bool {
        let mut cursor = dense.iter();
        sparse.iter().all(|p| cursor.any(|d| d == p))
    }

    #[test]
    fn short_inputs_are_unchanged() {
        let two = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(simplify(&two, 0.5), two);
        assert!(simplify(&[], 0.5).is_empty());
    }

    #[test]
    fn collinear_points_collapse_to_endpoints() {
        let line: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect();
        let simplified = simplify(&line, 0.0);
        assert_eq!(simplified, vec![line[0], line[9]]);
    }

    #[test]
    fn endpoints_are_always_kept() {
        let points = zigzag(21);
        let simplified = simplify(&points, 1.0);
        assert_eq!(simplified.first(), points.first());
        assert_eq!(simplified.last(), points.last());
    }

    #[test]
    fn output_is_subsequence_of_input() {
        let points = zigzag(21);
        for tolerance in [0.0, 0.5, 2.0, 10.0] {
            let simplified = simplify(&points, tolerance);
            assert!(is_subsequence(&simplified, &points));
        }
    }

    #[test]
    fn sharp_features_survive_small_tolerance() {
        let points = zigzag(9);
        let simplified = simplify(&points, 0.5);
        // Every zigzag vertex is farther than 0.5 from its chord.
        assert_eq!(simplified.len(), points.len());
    }

    #[test]
    fn large_tolerance_flattens_everything() {
        let points = zigzag(9);
        let simplified = simplify(&points, 100.0);
        assert_eq!(simplified.len(), 2);
    }

    #[test]
    fn repeated_identical_points_do_not_panic() {
        let points = vec![Point::new(1.0, 1.0); 5];
        let simplified = simplify(&points, 0.5);
        assert_eq!(simplified, vec![points[0], points[4]]);
    }

    #[test]
    fn simplification_is_idempotent() {
        // A gentle parabola: the first pass discards points, the second is a
        // fixed point at the same tolerance.
        let points: Vec<Point> = (0..=40)
            .map(|i| Point::new(i as f64, (i * i) as f64 / 50.0))
            .collect();
        let once = simplify(&points, 0.5);
        assert!(once.len() < points.len());
        let twice = simplify(&once, 0.5);
        assert_eq!(once, twice);
    }
}
