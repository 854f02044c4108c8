use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;

use commands::{color, generate, path};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw,
}

#[derive(Parser)]
#[command(name = "pulse-viz")]
#[command(version = VERSION)]
#[command(about = "Generate animated SVG financial visualizations as Vue components")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Vue component from a JSON data series
    Generate(generate::GenerateArgs),
    /// Print the raw path pipeline result as JSON
    Path(path::PathArgs),
    /// Look up the contextual color band for a value/benchmark pair
    Color(color::ColorArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        // Without --output the component body itself is the product.
        Commands::Generate(args) if args.output.is_none() => ResponseMode::Raw,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let exit_code = match response_mode(&cli.command) {
        ResponseMode::Raw => {
            let Commands::Generate(args) = cli.command else {
                unreachable!("only generate runs in raw mode");
            };
            match generate::run_raw(args, &global) {
                Ok(content) => {
                    print!("{}", content);
                    0
                }
                Err(err) => output::print_result::<serde_json::Value>(Err(err)),
            }
        }
        ResponseMode::Json => match cli.command {
            Commands::Generate(args) => output::print_result(generate::run(args, &global)),
            Commands::Path(args) => output::print_result(path::run(args, &global)),
            Commands::Color(args) => output::print_result(color::run(args, &global)),
        },
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
