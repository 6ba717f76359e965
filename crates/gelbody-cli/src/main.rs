//! gelbody CLI: run, validate and inspect soft body simulations.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser)]
#[command(name = "gelbody")]
#[command(version, about = "gelbody: tetrahedral mass-spring soft body simulator")]
struct Cli {
    /// Logging verbosity (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from an input file and print its metrics as JSON.
    Simulate {
        /// Simulation input (TOML or JSON).
        #[arg(short, long, default_value = "simulation.toml")]
        input: PathBuf,

        /// Override the number of fixed updates.
        #[arg(short, long)]
        frames: Option<u32>,

        /// Write the metrics to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a simulation input, a config file or a TetGen mesh.
    Validate {
        /// `.toml`/`.json` document or `.node` file (its `.ele` sibling is read too).
        path: PathBuf,
    },

    /// Print proxy mesh statistics.
    Inspect {
        /// Simulation input or `.node` file.
        path: PathBuf,
    },

    /// Write a subdivided tetrahedral box as a TetGen `.node`/`.ele` pair.
    Generate {
        /// Output path stem; `.node` and `.ele` are appended.
        output: PathBuf,

        /// Cells along X, Y and Z.
        #[arg(short, long, num_args = 3, default_values_t = [2, 2, 2])]
        cells: Vec<usize>,

        /// Edge lengths along X, Y and Z.
        #[arg(short, long, num_args = 3, default_values_t = [1.0, 1.0, 1.0])]
        size: Vec<f32>,
    },
}

fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&cli.log_level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging unavailable: {e}");
    }

    let result = match cli.command {
        Commands::Simulate {
            input,
            frames,
            output,
        } => commands::simulate(&input, frames, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Generate {
            output,
            cells,
            size,
        } => commands::generate(&output, &cells, &size),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
