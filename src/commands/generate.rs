use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;

use pulseviz::component::{self, Theme};
use pulseviz::data::{self, Frame};
use pulseviz::io;
use pulseviz::log_status;
use pulseviz::pipeline::{self, VizConfig};
use pulseviz::Error;

use super::CmdResult;

const SUPPORTED_CONTEXTS: &[&str] = &["net-worth"];

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the JSON data file (array of {date, value, category?})
    pub data: PathBuf,

    /// Visualization context
    #[arg(long, default_value = "net-worth")]
    pub context: String,

    /// Write the component to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Component color theme
    #[arg(long, value_enum, default_value = "dark")]
    pub theme: ThemeArg,

    /// Benchmark value for color banding (default: first data point)
    #[arg(long)]
    pub benchmark: Option<f64>,

    /// Frame width in viewBox units
    #[arg(long, default_value_t = 100.0)]
    pub width: f64,

    /// Frame height in viewBox units
    #[arg(long, default_value_t = 40.0)]
    pub height: f64,

    /// Value-range padding percentage
    #[arg(long, default_value_t = 5.0)]
    pub padding: f64,

    /// Spline samples per span
    #[arg(long, default_value_t = 15)]
    pub segments: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

#[derive(Serialize)]
pub struct GenerateOutput {
    pub output: String,
    pub context: String,
    pub color: String,
    pub path_length: f64,
    pub sample_points: usize,
}

impl GenerateArgs {
    pub fn config(&self) -> VizConfig {
        VizConfig {
            frame: Frame {
                width: self.width,
                height: self.height,
                padding: self.padding,
            },
            segments: self.segments.max(1),
            ..VizConfig::default()
        }
    }
}

fn validate_context(context: &str) -> pulseviz::Result<()> {
    if SUPPORTED_CONTEXTS.contains(&context) {
        return Ok(());
    }
    Err(Error::UnknownContext(format!(
        "{} (supported: {})",
        context,
        SUPPORTED_CONTEXTS.join(", ")
    )))
}

/// Render the component for `args`, without touching the filesystem output.
pub fn render(args: &GenerateArgs) -> pulseviz::Result<(String, pipeline::VizResult)> {
    validate_context(&args.context)?;

    let json = io::read_file(&args.data)?;
    let points = data::parse_points(&json)?;
    let config = args.config();

    let color = pipeline::series_color(&points, args.benchmark);
    let viz = pipeline::generate(&points, color, &config);
    let vue = component::render_component(
        &viz,
        config.frame.width,
        config.frame.height,
        args.theme.into(),
    )?;
    Ok((vue, viz))
}

/// `generate --output FILE`: write the component, report a JSON envelope.
pub fn run(args: GenerateArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<GenerateOutput> {
    let (vue, viz) = render(&args)?;

    let output = args
        .output
        .as_deref()
        .ok_or_else(|| Error::InvalidData("No output path given".to_string()))?;
    io::write_file_atomic(output, &vue)?;
    log_status!("generate", "Wrote component to {}", output.display());

    Ok((
        GenerateOutput {
            output: output.display().to_string(),
            context: args.context.clone(),
            color: viz.color,
            path_length: viz.path_length,
            sample_points: viz.points.len(),
        },
        0,
    ))
}

/// `generate` without `--output`: the raw component body for stdout.
pub fn run_raw(args: GenerateArgs, _global: &crate::commands::GlobalArgs) -> pulseviz::Result<String> {
    let (vue, _) = render(&args)?;
    Ok(vue)
}
