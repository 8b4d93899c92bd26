//! Kambo CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration**: command-line flags via `clap`, with
//!    `KAMBO_FORMAT` as an environment fallback for the output format.
//! 2. **Wire observability**: install a `tracing-subscriber` writing to stderr,
//!    filtered by `RUST_LOG` (default `warn`) and switched to JSON lines when
//!    `LOG_FORMAT=json`. All events emitted by `kambo_graph` flow through it.
//! 3. **Run the command**: load the edge list, run the query, print the result
//!    to stdout (see the `commands` module).
//!
//! Any error is printed as `error: <context>: <cause>` and exits with status 1.

mod commands;

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Query graphs stored as plain-text edge lists.
#[derive(Debug, Parser)]
#[command(name = "kambo", version, about)]
pub struct Cli {
    /// Treat every edge as directed (source -> target).
    #[arg(long, global = true)]
    pub directed: bool,

    /// Output format.
    #[arg(
        long,
        global = true,
        value_enum,
        env = "KAMBO_FORMAT",
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// A single JSON document.
    Json,
}

/// The query to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print order, size, density, isolated vertices and component count.
    Stats {
        /// Edge-list file.
        file: PathBuf,
    },

    /// Print the breadth-first visit order from a vertex.
    Bfs {
        /// Edge-list file.
        file: PathBuf,
        /// Vertex to start from.
        start: usize,
    },

    /// Print a shortest path between two vertices.
    Path {
        /// Edge-list file.
        file: PathBuf,
        /// First vertex of the path.
        from: usize,
        /// Last vertex of the path.
        to: usize,
        /// Minimise total edge weight instead of the number of hops.
        #[arg(long)]
        weighted: bool,
    },

    /// Print the connected components, one per line.
    Components {
        /// Edge-list file.
        file: PathBuf,
    },

    /// Print a topological order (requires --directed).
    Toposort {
        /// Edge-list file.
        file: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match commands::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
