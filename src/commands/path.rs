use std::path::PathBuf;

use clap::Args;

use pulseviz::data::{self, Frame};
use pulseviz::io;
use pulseviz::pipeline::{self, VizConfig, VizResult};

use super::CmdResult;

#[derive(Args)]
pub struct PathArgs {
    /// Path to the JSON data file (array of {date, value, category?})
    pub data: PathBuf,

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

pub fn run(args: PathArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<VizResult> {
    let json = io::read_file(&args.data)?;
    let points = data::parse_points(&json)?;

    let config = VizConfig {
        frame: Frame {
            width: args.width,
            height: args.height,
            padding: args.padding,
        },
        segments: args.segments.max(1),
        ..VizConfig::default()
    };

    let color = pipeline::series_color(&points, args.benchmark);
    let viz = pipeline::generate(&points, color, &config);
    Ok((viz, 0))
}
