//! Plotting-space coordinates and the distance math shared by the
//! simplification and encoding stages.

use serde::ser::{Serialize, SerializeTuple, Serializer};

/// A plotting-space coordinate. Not a data value: the y axis grows downward,
/// as in an SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

// Serialized as an `[x, y]` pair so the interaction sample list embeds as a
// compact JSON coordinate array.
impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.x)?;
        tup.serialize_element(&self.y)?;
        tup.end()
    }
}

/// Shortest distance from `point` to the infinite line through `a` and `b`.
///
/// A degenerate chord (`a == b`) has no defined line; such points are treated
/// as distance 0 rather than dividing by zero.
pub fn perpendicular_distance(point: Point, a: Point, b: Point) -> f64 {
    let numerator =
        ((b.y - a.y) * point.x - (b.x - a.x) * point.y + b.x * a.y - b.y * a.x).abs();
    let denominator = ((b.y - a.y).powi(2) + (b.x - a.x).powi(2)).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn perpendicular_distance_to_horizontal_line() {
        let d = perpendicular_distance(
            Point::new(1.0, 2.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn perpendicular_distance_zero_length_chord() {
        let a = Point::new(5.0, 5.0);
        let d = perpendicular_distance(Point::new(1.0, 1.0), a, a);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn point_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(1.5, 2.0)).unwrap();
        assert_eq!(json, "[1.5,2.0]");
    }
}
