use clap::Args;
use serde::Serialize;

use pulseviz::color::{contextual_color, parse_hsl};

use super::CmdResult;

#[derive(Args)]
pub struct ColorArgs {
    /// Latest observed value
    pub value: f64,

    /// Benchmark value to compare against
    pub benchmark: f64,
}

#[derive(Serialize)]
pub struct ColorOutput {
    pub color: String,
    pub ratio: f64,
    pub hue: u16,
    pub saturation: u16,
    pub lightness: u16,
}

pub fn run(args: ColorArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ColorOutput> {
    let color = contextual_color(args.value, args.benchmark);
    let (hue, saturation, lightness) = parse_hsl(color);
    let ratio = if args.benchmark != 0.0 {
        args.value / args.benchmark
    } else {
        1.0
    };

    Ok((
        ColorOutput {
            color: color.to_string(),
            ratio,
            hue,
            saturation,
            lightness,
        },
        0,
    ))
}
