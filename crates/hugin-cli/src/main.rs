//! Hugin Command-Line Interface
//!
//! The main entry point for the Hugin CLI tool: cloud backend status
//! reporting and the quantum-concepts demo suite.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{demo, status, version};

/// Hugin - quantum backend status reporting and concept demos
#[derive(Parser)]
#[command(name = "hugin")]
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
    /// Show operational cloud backends with qubit and queue counts
    Status {
        /// Emit machine-readable JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Run the quantum-concepts demo suite
    Demo {
        /// Demo to run (unitarity, norm, echo, mixing, thermal, all)
        #[arg(default_value = "all")]
        which: String,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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
        Commands::Status { json } => status::execute(json).await,

        Commands::Demo { which } => demo::execute(&which).await,

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
