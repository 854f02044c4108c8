//! Vue single-file-component rendering.
//!
//! The produced component embeds the pipeline output: a glow-filtered
//! animated stroke, a gradient-filled area, and the decimated sample list
//! for pointer interaction. The stroke draw-in uses the measured path length
//! as its dash array, so animation duration tracks curve complexity.

use crate::error::Result;
use crate::pipeline::VizResult;
use crate::utils::template;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    fn background(self) -> &'static str {
        match self {
            Theme::Dark => "#0f172a",
            Theme::Light => "#f8fafc",
        }
    }
}

const COMPONENT_TEMPLATE: &str = r#"<template>
  <div class="pulse-viz">
    <svg viewBox="0 0 {{width}} {{height}}" class="pulse-svg">
      <defs>
        <filter id="glow" x="-20%" y="-20%" width="140%" height="140%">
          <feGaussianBlur stdDeviation="1.2" result="blur"/>
          <feComposite in="SourceGraphic" in2="blur" operator="over"/>
        </filter>
        <linearGradient id="areaGrad" x1="0" y1="0" x2="0" y2="1">
          <stop offset="0%" stop-color="{{color}}" stop-opacity="0.3"/>
          <stop offset="100%" stop-color="{{color}}" stop-opacity="0"/>
        </linearGradient>
      </defs>
      <path d="{{areaPath}}" fill="url(#areaGrad)" />
      <path d="{{mainPath}}" fill="none" stroke="{{color}}" stroke-width="1.8" filter="url(#glow)" class="line-animate"
        :style="{ strokeDasharray: {{pathLength}}, strokeDashoffset: animating ? {{pathLength}} : 0 }" />
    </svg>
  </div>
</template>

<script setup>
import { ref, onMounted } from 'vue'
const animating = ref(true)
const samplePoints = {{points}}
onMounted(() => setTimeout(() => animating.value = false, 100))
</script>

<style scoped>
.pulse-viz { background: {{background}}; border-radius: 12px; padding: 24px; }
.line-animate { transition: stroke-dashoffset 1200ms cubic-bezier(0.4, 0, 0.2, 1); }
</style>
"#;

/// Render the full component for a pipeline result. `width` and `height`
/// must match the frame the paths were generated against.
pub fn render_component(
    viz: &VizResult,
    width: f64,
    height: f64,
    theme: Theme,
) -> Result<String> {
    let points_json = serde_json::to_string(&viz.points)?;
    let path_length = format!("{:.2}", viz.path_length);
    Ok(template::render(
        COMPONENT_TEMPLATE,
        &[
            ("width", &format!("{}", width)),
            ("height", &format!("{}", height)),
            ("color", &viz.color),
            ("areaPath", &viz.area_path),
            ("mainPath", &viz.main_path),
            ("pathLength", &path_length),
            ("points", &points_json),
            ("background", theme.background()),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn sample_result() -> VizResult {
        VizResult {
            main_path: "M 0.00 20.00 L 100.00 20.00".to_string(),
            area_path: "M 0.00 40.00 L 0.00 20.00 L 100.00 20.00 L 100.00 40.00 Z".to_string(),
            path_length: 100.0,
            color: crate::color::EMERALD_STRONG.to_string(),
            points: vec![Point::new(0.0, 20.0), Point::new(100.0, 20.0)],
        }
    }

    #[test]
    fn component_embeds_paths_and_color() {
        let vue = render_component(&sample_result(), 100.0, 40.0, Theme::Dark).unwrap();
        assert!(vue.contains("M 0.00 20.00 L 100.00 20.00"));
        assert!(vue.contains("hsl(145, 67%, 42%)"));
        assert!(vue.contains("viewBox=\"0 0 100 40\""));
        assert!(vue.contains("strokeDasharray: 100.00"));
    }

    #[test]
    fn themes_swap_background() {
        let dark = render_component(&sample_result(), 100.0, 40.0, Theme::Dark).unwrap();
        let light = render_component(&sample_result(), 100.0, 40.0, Theme::Light).unwrap();
        assert!(dark.contains("#0f172a"));
        assert!(light.contains("#f8fafc"));
    }

    #[test]
    fn no_placeholders_survive_rendering() {
        let vue = render_component(&sample_result(), 100.0, 40.0, Theme::Dark).unwrap();
        assert!(!vue.contains("{{"));
    }

    #[test]
    fn sample_points_embed_as_json_pairs() {
        let vue = render_component(&sample_result(), 100.0, 40.0, Theme::Dark).unwrap();
        assert!(vue.contains("const samplePoints = [[0.0,20.0],[100.0,20.0]]"));
    }
}
