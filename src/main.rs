// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Starmap CLI - topic association graphs for starred repositories

use anyhow::Result;
use clap::{Parser, Subcommand};
use starmap::commands;

#[derive(Parser)]
#[command(name = "starmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the global topic-association graph over all repositories
    Graph {
        /// JSON file with the repository records
        #[arg(short, long, env = "STARMAP_INPUT")]
        input: std::path::PathBuf,

        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Build a bounded ego network around one seed repository
    Ego {
        /// Seed repository full name (owner/name)
        seed: String,

        /// JSON file with the repository records
        #[arg(short, long, env = "STARMAP_INPUT")]
        input: std::path::PathBuf,

        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,

        /// Maximum traversal depth
        #[arg(long, default_value_t = 4)]
        max_levels: u32,

        /// Node budget for the traversal
        #[arg(long, default_value_t = 150)]
        max_nodes: usize,
    },

    /// Summarize a record set: repository and topic counts
    Stats {
        /// JSON file with the repository records
        #[arg(short, long, env = "STARMAP_INPUT")]
        input: std::path::PathBuf,

        /// How many of the largest topics to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Logs go to stderr so exports can stream to stdout.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Graph { input, format, output } => {
            commands::graph::run(&input, &format, output)
        }
        Commands::Ego { seed, input, format, output, max_levels, max_nodes } => {
            commands::ego::run(&seed, &input, &format, output, max_levels, max_nodes)
        }
        Commands::Stats { input, top } => {
            commands::stats::run(&input, top)
        }
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
