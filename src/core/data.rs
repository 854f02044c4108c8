//! Input data points and the sampler that maps them into the drawing frame.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// One record of the input time series. Immutable once read.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPoint {
    pub date: String,
    pub value: f64,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "default".to_string()
}

/// Drawing frame dimensions, matching the component's SVG viewBox.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    /// Percentage of the raw value range added above and below before
    /// normalizing, so extreme points never touch the frame edge.
    pub padding: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 40.0,
            padding: 5.0,
        }
    }
}

/// Decode a JSON array of data points.
pub fn parse_points(json: &str) -> Result<Vec<DataPoint>> {
    let data: Vec<DataPoint> = serde_json::from_str(json)?;
    if data.is_empty() {
        return Err(Error::InvalidData(
            "Data file contains no points".to_string(),
        ));
    }
    Ok(data)
}

/// Map an ordered data series onto normalized plot coordinates.
///
/// X coordinates are spaced evenly across `[0, width]`; y coordinates are an
/// inverted linear mapping of each value into `[0, height]` (plot frames grow
/// downward). The value range is padded outward by `frame.padding` percent on
/// both ends first. An all-equal series is given a minimum range of 1 unit so
/// normalization never divides by zero. An empty series yields an empty
/// polyline.
pub fn normalize(data: &[DataPoint], frame: &Frame) -> Vec<Point> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut v_min = f64::INFINITY;
    let mut v_max = f64::NEG_INFINITY;
    for point in data {
        v_min = v_min.min(point.value);
        v_max = v_max.max(point.value);
    }

    let raw_range = (v_max - v_min).max(1.0);
    let v_min = v_min - raw_range * (frame.padding / 100.0);
    let v_max = v_max + raw_range * (frame.padding / 100.0);
    let v_range = v_max - v_min;

    let x_step = if data.len() > 1 {
        frame.width / (data.len() - 1) as f64
    } else {
        0.0
    };

    data.iter()
        .enumerate()
        .map(|(i, p)| {
            Point::new(
                i as f64 * x_step,
                frame.height - ((p.value - v_min) / v_range * frame.height),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| DataPoint {
                date: format!("2025-01-{:02}", i + 1),
                value,
                category: "default".to_string(),
            })
            .collect()
    }

    #[test]
    fn output_length_matches_input() {
        let points = normalize(&series(&[1.0, 2.0, 3.0, 4.0]), &Frame::default());
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn x_coordinates_span_frame_evenly() {
        let frame = Frame::default();
        let points = normalize(&series(&[1.0, 2.0, 3.0]), &frame);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[1].x, 50.0);
        assert_eq!(points[2].x, 100.0);
    }

    #[test]
    fn y_coordinates_stay_inside_frame() {
        let frame = Frame::default();
        let points = normalize(&series(&[10.0, 10.0, 50.0, 10.0, 10.0]), &frame);
        for p in &points {
            assert!(p.y > 0.0 && p.y < frame.height);
        }
    }

    #[test]
    fn padding_keeps_extremes_off_the_edge() {
        let frame = Frame::default();
        let points = normalize(&series(&[10.0, 10.0, 50.0, 10.0, 10.0]), &frame);
        // Peak value maps to the smallest y (frames grow downward).
        let peak = points
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.y.partial_cmp(&b.1.y).unwrap())
            .unwrap()
            .0;
        assert_eq!(peak, 2);
    }

    #[test]
    fn higher_value_maps_to_smaller_y() {
        let points = normalize(&series(&[0.0, 100.0]), &Frame::default());
        assert!(points[1].y < points[0].y);
    }

    #[test]
    fn all_equal_values_do_not_divide_by_zero() {
        let frame = Frame::default();
        let points = normalize(&series(&[7.0, 7.0, 7.0]), &frame);
        for p in &points {
            assert!(p.y.is_finite());
            assert!(p.y >= 0.0 && p.y <= frame.height);
        }
    }

    #[test]
    fn single_point_maps_to_x_zero() {
        let points = normalize(&series(&[42.0]), &Frame::default());
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 0.0);
    }

    #[test]
    fn empty_series_yields_empty_polyline() {
        assert!(normalize(&[], &Frame::default()).is_empty());
    }

    #[test]
    fn parse_points_accepts_optional_category() {
        let data =
            parse_points(r#"[{"date": "2025-01-01", "value": 12.5}]"#).unwrap();
        assert_eq!(data[0].category, "default");
        assert_eq!(data[0].value, 12.5);
    }

    #[test]
    fn parse_points_rejects_empty_array() {
        assert!(parse_points("[]").is_err());
    }

    #[test]
    fn parse_points_rejects_non_numeric_value() {
        assert!(parse_points(r#"[{"date": "x", "value": "abc"}]"#).is_err());
    }
}
