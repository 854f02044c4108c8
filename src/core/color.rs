//! Contextual color selection.
//!
//! Maps a performance ratio (latest value against a benchmark) to one of
//! five HSL palette bands, evaluated in descending order with closed lower
//! bounds.

use regex::Regex;

pub const EMERALD_STRONG: &str = "hsl(145, 67%, 42%)";
pub const TEAL_MILD: &str = "hsl(165, 55%, 48%)";
pub const SLATE_NEUTRAL: &str = "hsl(220, 15%, 55%)";
pub const AMBER_CAUTION: &str = "hsl(38, 65%, 52%)";
pub const CRIMSON_WARNING: &str = "hsl(0, 72%, 42%)";

// Ordered band thresholds; first match wins, anything below the last
// threshold is the strong-negative crimson.
const BANDS: [(f64, &str); 4] = [
    (1.15, EMERALD_STRONG),
    (1.05, TEAL_MILD),
    (0.95, SLATE_NEUTRAL),
    (0.85, AMBER_CAUTION),
];

/// Pick the palette color for `value` measured against `benchmark`. A zero
/// benchmark resolves to a neutral ratio of 1.0.
pub fn contextual_color(value: f64, benchmark: f64) -> &'static str {
    let ratio = if benchmark != 0.0 {
        value / benchmark
    } else {
        1.0
    };
    BANDS
        .iter()
        .find(|(lower, _)| ratio >= *lower)
        .map(|(_, color)| *color)
        .unwrap_or(CRIMSON_WARNING)
}

/// Extract the `(hue, saturation, lightness)` components from an
/// `hsl(h, s%, l%)` string. Unparseable input yields `(0, 0, 0)`.
pub fn parse_hsl(hsl: &str) -> (u16, u16, u16) {
    let Ok(pattern) = Regex::new(r"hsl\((\d+),\s*(\d+)%,\s*(\d+)%\)") else {
        return (0, 0, 0);
    };
    match pattern.captures(hsl) {
        Some(caps) => {
            let component = |i| {
                caps.get(i)
                    .and_then(|m| m.as_str().parse().ok())
                    .unwrap_or(0)
            };
            (component(1), component(2), component(3))
        }
        None => (0, 0, 0),
    }
}
