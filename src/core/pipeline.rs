//! The path-generation pipeline: sampler, conditional simplifier, spline
//! interpolator, and path encoder, composed into the single result structure
//! consumed by the component renderer.

use serde::Serialize;

use crate::color;
use crate::data::{self, DataPoint, Frame};
use crate::geometry::Point;
use crate::simplify;
use crate::spline;
use crate::svg;

/// Pipeline tuning knobs. Defaults mirror the rendered component's viewBox
/// and animation expectations.
#[derive(Debug, Clone, Copy)]
pub struct VizConfig {
    pub frame: Frame,
    /// Simplification only runs when the normalized polyline has more points
    /// than this, to bound the spline and encoding work on dense series.
    pub simplify_threshold: usize,
    pub simplify_tolerance: f64,
    pub segments: usize,
    /// Target size of the decimated sample kept for interactive hit-testing.
    pub sample_count: usize,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            frame: Frame::default(),
            simplify_threshold: 500,
            simplify_tolerance: 0.5,
            segments: 15,
            sample_count: 20,
        }
    }
}

/// Terminal pipeline artifact, serialized for whatever document embeds it.
#[derive(Debug, Clone, Serialize)]
pub struct VizResult {
    pub main_path: String,
    pub area_path: String,
    pub path_length: f64,
    pub color: String,
    pub points: Vec<Point>,
}

/// Pick the contextual color for a series against a benchmark value. Series
/// of fewer than 2 points have nothing to compare and stay neutral.
pub fn series_color(data: &[DataPoint], benchmark: Option<f64>) -> &'static str {
    if data.len() < 2 {
        return color::SLATE_NEUTRAL;
    }
    let latest = data[data.len() - 1].value;
    let benchmark = benchmark.unwrap_or(data[0].value);
    color::contextual_color(latest, benchmark)
}

/// Run the full pipeline: normalize, simplify when dense, interpolate,
/// encode. The area baseline is the frame height and the reported length is
/// rounded to 2 decimals to match the rendered animation attributes.
pub fn generate(data: &[DataPoint], color: &str, config: &VizConfig) -> VizResult {
    let mut points = data::normalize(data, &config.frame);
    if points.len() > config.simplify_threshold {
        points = simplify::simplify(&points, config.simplify_tolerance);
    }
    let smooth = spline::interpolate(&points, config.segments);

    let step = (smooth.len() / config.sample_count.max(1)).max(1);
    let samples: Vec<Point> = smooth.iter().copied().step_by(step).collect();

    VizResult {
        main_path: svg::line_path(&smooth),
        area_path: svg::area_path(&smooth, config.frame.height),
        path_length: round2(svg::path_length(&smooth)),
        color: color.to_string(),
        points: samples,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
