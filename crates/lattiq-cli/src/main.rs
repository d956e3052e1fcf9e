//! Lattiq Command-Line Interface
//!
//! The main entry point for the `lattiq` tool: floorplan generation,
//! circuit-to-polycube compilation, and job-dataset generation.

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{compile, dataset, floorplan, version};

/// Lattiq - lattice-surgery compilation and slice scheduling
#[derive(Parser)]
#[command(name = "lattiq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a qubit floorplan and print its layout
    Floorplan {
        /// Number of data qubits to place
        #[arg(short, long)]
        qubits: u32,

        /// Tiling pattern (block25, block44, stripe50, stripe66)
        #[arg(short, long, default_value = "block25")]
        pattern: String,

        /// Grid width, frame included (minimal grid if omitted)
        #[arg(long)]
        width: Option<u32>,

        /// Grid height, frame included (derived from width if omitted)
        #[arg(long)]
        height: Option<u32>,

        /// Frame edges, comma separated (top, bottom, left, right)
        #[arg(long, default_value = "bottom,right")]
        frame: String,

        /// Output file for the floorplan JSON (stdout summary only if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Compile an instruction-feed circuit to a polycube
    Compile {
        /// Input circuit file (JSON instruction feed)
        #[arg(short, long)]
        input: String,

        /// Output file for the single-program dataset JSON
        #[arg(short, long)]
        output: Option<String>,

        /// Tiling pattern (block25, block44, stripe50, stripe66)
        #[arg(short, long, default_value = "block25")]
        pattern: String,

        /// Grid width, frame included (minimal grid if omitted)
        #[arg(long)]
        width: Option<u32>,

        /// Grid height, frame included (derived from width if omitted)
        #[arg(long)]
        height: Option<u32>,

        /// Frame edges, comma separated (top, bottom, left, right)
        #[arg(long, default_value = "bottom,right")]
        frame: String,

        /// Route through other data-qubit home cells (legacy behavior)
        #[arg(long)]
        direct_routing: bool,

        /// Idle-fill the final time slice
        #[arg(long)]
        flush_final: bool,
    },

    /// Generate a random-circuit job dataset
    Dataset {
        /// Number of distinct programs
        #[arg(long, default_value = "10")]
        programs: u32,

        /// Qubit count per program (single value or inclusive LO..HI range)
        #[arg(short, long, default_value = "4..8")]
        qubits: String,

        /// Layer depth per program (single value or inclusive LO..HI range)
        #[arg(short, long, default_value = "5..20")]
        depth: String,

        /// Tiling pattern (block25, block44, stripe50, stripe66)
        #[arg(short, long, default_value = "block25")]
        pattern: String,

        /// Job requests per program
        #[arg(short, long, default_value = "1")]
        requests_per_program: u32,

        /// Arrival interval between consecutive requests
        #[arg(long, default_value = "100")]
        interval: u64,

        /// RNG seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Output file
        #[arg(short, long)]
        output: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Floorplan {
            qubits,
            pattern,
            width,
            height,
            frame,
            output,
        } => floorplan::execute(qubits, &pattern, width, height, &frame, output.as_deref()),

        Commands::Compile {
            input,
            output,
            pattern,
            width,
            height,
            frame,
            direct_routing,
            flush_final,
        } => compile::execute(
            &input,
            output.as_deref(),
            &pattern,
            width,
            height,
            &frame,
            direct_routing,
            flush_final,
        ),

        Commands::Dataset {
            programs,
            qubits,
            depth,
            pattern,
            requests_per_program,
            interval,
            seed,
            output,
        } => dataset::execute(
            programs,
            &qubits,
            &depth,
            &pattern,
            requests_per_program,
            interval,
            seed,
            &output,
        ),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
