//! xform - matrix toolbox and headless scene simulator
//!
//! Builds 4x4 transform matrices from the command line and runs the
//! per-frame scene driver without a renderer attached.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use xform_math::EulerOrder;

mod commands;

#[derive(Parser)]
#[command(name = "xform")]
#[command(author, version, about = "4x4 transform matrix toolbox")]
#[command(long_about = "
Build, combine and inspect column-major 4x4 transform matrices, or run the
per-frame scene driver headless.

Examples:
  xform matrix identity
  xform matrix translation 1 2 3
  xform matrix rotation-y 90 --degrees
  xform matrix perspective 70 1.777 0.1 1000 --flat
  xform matrix look-at 0 30 30  0 0 0  0 1 0 --invert
  xform matrix compose 1 2 3  0 1.57 0  2 2 2 --order zyx --normal
  xform matrix raw 1 2 3 4 --transpose
  xform simulate --entities 1000 --frames 600 --seed 7
  xform simulate --config scene.yaml --dump
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a single matrix and print it
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// Run the scene driver for a number of frames
    #[command(visible_alias = "sim")]
    Simulate(SimulateArgs),
}

/// Matrix factory selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MatrixKind {
    /// No values
    Identity,
    /// x y z
    Translation,
    /// angle
    RotationX,
    /// angle
    RotationY,
    /// angle
    RotationZ,
    /// x y z
    Scale,
    /// left right bottom top near far
    Frustum,
    /// fov aspect near far (fov in degrees)
    Perspective,
    /// eye(3) target(3) up(3)
    LookAt,
    /// position(3) rotation(3) scale(3)
    Compose,
    /// Up to 16 values in row-major order, identity for the rest
    Raw,
}

#[derive(Args)]
struct MatrixArgs {
    /// Matrix factory
    #[arg(value_enum)]
    kind: MatrixKind,

    /// Factory arguments
    #[arg(allow_negative_numbers = true)]
    values: Vec<f32>,

    /// Rotation angles are given in degrees
    #[arg(long)]
    degrees: bool,

    /// Euler order for `compose`
    #[arg(long, default_value = "xyz")]
    order: EulerOrder,

    /// Invert the result
    #[arg(short, long)]
    invert: bool,

    /// Replace the result with its normal matrix (inverse transpose)
    #[arg(short, long)]
    normal: bool,

    /// Transpose the result
    #[arg(short, long)]
    transpose: bool,

    /// Print the 16 column-major elements on one line
    #[arg(long)]
    flat: bool,
}

#[derive(Args)]
struct SimulateArgs {
    /// Scene config (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to run
    #[arg(short, long, default_value = "600")]
    frames: u64,

    /// Override entity count
    #[arg(short, long)]
    entities: Option<usize>,

    /// Override RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulated time step in milliseconds
    #[arg(long, default_value = "16.0")]
    dt: f64,

    /// Print the last frame's uniforms
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose)?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Matrix(args) => commands::matrix::run(args, cli.verbose),
        Commands::Simulate(args) => commands::simulate::run(args, cli.verbose),
    }
}
