//! BRACKET CLI - Command-line interface
//!
//! Commands:
//! - generate: Build a bracket from ranked entrants
//! - maze: Rank entrants with a maze run, then build their bracket

mod generate;
mod input;
mod maze_cmd;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bracket")]
#[command(about = "Single-elimination tournament bracket generator")]
#[command(version)]
struct Cli {
    /// Random seed for reproducible maze runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a bracket from "<name> <rank>" entrants
    Generate(generate::GenerateArgs),
    /// Rank entrants by a shared maze run, then build their bracket
    Maze(maze_cmd::MazeArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Maze(args) => maze_cmd::run(args, cli.seed),
    }
}
