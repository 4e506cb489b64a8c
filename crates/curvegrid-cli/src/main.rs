//! Command‑line entry point for the `curvegrid` tool.
//!
//! Fills square matrices along space‑filling curves and prints the result,
//! the index/coordinate mapping, or the raw walk.

use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use curvegrid::{CurveKind, registry};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, LevelPadding, TermLogger, TerminalMode};

/// CLI command implementations.
mod cmd;

/// Validate a curve name against the registry.
fn parse_curve_name(s: &str) -> Result<CurveKind, String> {
    s.parse::<CurveKind>().map_err(|_| {
        format!(
            "Invalid curve name '{}'. Valid options: {}",
            s,
            registry::CURVE_NAMES.join(", ")
        )
    })
}

#[derive(Parser)]
#[command(name = "curvegrid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, global = true, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `curvegrid` tool.
enum Commands {
    #[command(about = "Number the cells of a matrix along a curve and print the grid")]
    /// Fill a matrix along a curve.
    Fill {
        #[arg(short = 'n', long = "side", default_value_t = 4, help = "Matrix side length (power of two)")]
        /// Matrix side length.
        side: u32,

        #[arg(short = 'c', long = "curve", default_value = "hilbert", value_parser = parse_curve_name,
              help = &format!("Curve name (options: {})", registry::CURVE_NAMES.join(", ")))]
        /// Traversal order.
        curve: CurveKind,

        #[arg(long = "start", default_value_t = 0, allow_negative_numbers = true, help = "Value of the first cell along the curve")]
        /// First value written.
        start: i64,

        #[arg(short = 'w', long = "width", default_value_t = 4, help = "Column width")]
        /// Column width of the printed grid.
        width: usize,

        #[arg(short = 'o', long = "output", help = "Write the grid to a file instead of stdout")]
        /// Optional output file.
        output: Option<PathBuf>,
    },

    #[command(about = "Print the coordinate -> index -> coordinate mapping of every cell")]
    /// Print the transform table.
    Transform {
        #[arg(short = 'n', long = "side", default_value_t = 4, help = "Matrix side length (power of two)")]
        /// Matrix side length.
        side: u32,

        #[arg(short = 'c', long = "curve", default_value = "hilbert", value_parser = parse_curve_name,
              help = &format!("Curve name (options: {})", registry::CURVE_NAMES.join(", ")))]
        /// Traversal order.
        curve: CurveKind,
    },

    #[command(about = "List the coordinates visited by a curve, in order")]
    /// Print the walk.
    Walk {
        #[arg(short = 'n', long = "side", default_value_t = 4, help = "Matrix side length (power of two)")]
        /// Matrix side length.
        side: u32,

        #[arg(short = 'c', long = "curve", default_value = "hilbert", value_parser = parse_curve_name,
              help = &format!("Curve name (options: {})", registry::CURVE_NAMES.join(", ")))]
        /// Traversal order.
        curve: CurveKind,
    },

    #[command(about = "Fill and map a matrix with every curve")]
    /// Run the full walkthrough for every curve.
    Demo {
        #[arg(short = 'n', long = "side", default_value_t = 4, help = "Matrix side length (power of two)")]
        /// Matrix side length.
        side: u32,

        #[arg(short = 'w', long = "width", default_value_t = 4, help = "Column width")]
        /// Column width of the printed grids.
        width: usize,
    },

    #[command(name = "list-curves", about = "List supported curve names and constraints")]
    /// List supported curves and their constraints.
    ListCurves,
}

/// Map the `-v` count onto a log level.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Route `log` output to stderr so stdout carries only command output.
fn init_log(verbosity: u8) {
    let config = ConfigBuilder::default()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_level_padding(LevelPadding::Right)
        .build();

    if let Err(e) = TermLogger::init(
        level_for(verbosity),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logging: {e}");
    }
}

/// Print command output or exit with an error.
fn report(result: Result<String>) {
    match result {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Handle the `fill` subcommand.
fn handle_fill(opts: cmd::FillOptions, output: Option<&Path>) -> Result<String> {
    let grid = cmd::fill(opts)?;
    match output {
        Some(path) => {
            fs::write(path, &grid).with_context(|| format!("cannot write {}", path.display()))?;
            log::info!("wrote grid to {}", path.display());
            Ok(String::new())
        }
        None => Ok(grid),
    }
}

fn main() {
    let cli = Cli::parse();
    init_log(cli.v);

    match cli.command {
        Commands::Fill {
            side,
            curve,
            start,
            width,
            output,
        } => report(
            handle_fill(
                cmd::FillOptions {
                    side,
                    curve,
                    start,
                    width,
                },
                output.as_deref(),
            ),
        ),
        Commands::Transform { side, curve } => report(cmd::transform(side, curve)),
        Commands::Walk { side, curve } => report(cmd::walk(side, curve)),
        Commands::Demo { side, width } => report(cmd::demo(side, width)),
        Commands::ListCurves => print!("{}", cmd::list_curves()),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_curve_names() {
        assert_eq!(parse_curve_name("gray"), Ok(CurveKind::GrayCode));
        assert!(parse_curve_name("zorder").unwrap_err().contains("hilbert, gray"));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
