//! Maze command - rank entrants by a maze run, then build their bracket
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_names(), rank_in_maze(), build_and_publish()
//! - Level 3: standings_to_entrants()
//! - Level 4: create_rng(), configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

use bracket_core::Entrant;
use bracket_maze::{MazeConfig, MazeRanking, MazeStanding};

use crate::generate::{build_and_publish, BracketArgs};
use crate::input::{parse_name_list, prompt_names, read_names_file};
use crate::output::print_standings;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MazeArgs {
    /// Comma separated entrant names
    #[arg(long, value_name = "A,B,...", conflicts_with = "input")]
    pub names: Option<String>,

    /// File with one entrant name per line (prompts on stdin if neither is given)
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Maze side length
    #[arg(long, default_value = "10")]
    pub size: usize,

    /// Guaranteed start-to-goal routes
    #[arg(long, default_value = "3")]
    pub guide_paths: usize,

    /// Step limit per runner (default: size * size * 2)
    #[arg(long)]
    pub max_steps: Option<usize>,

    #[command(flatten)]
    pub bracket: BracketArgs,
}

impl MazeArgs {
    fn maze_config(&self) -> MazeConfig {
        MazeConfig {
            guide_paths: self.guide_paths,
            max_steps: self.max_steps,
            ..MazeConfig::default()
        }
        .with_size(self.size)
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run maze command
///
/// 1. Collect entrant names
/// 2. Rank them with one shared maze
/// 3. Build, save and report the bracket
pub fn run(args: MazeArgs, seed: Option<u64>) -> Result<()> {
    let names = load_names(&args)?;

    tracing::info!(
        "Ranking {} entrants in a {}x{} maze",
        names.len(),
        args.size,
        args.size
    );

    let standings = rank_in_maze(&names, &args, seed)?;
    if !args.bracket.json {
        print_standings(&standings);
    }

    build_and_publish(standings_to_entrants(&names, &standings), &args.bracket)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_names(args: &MazeArgs) -> Result<Vec<String>> {
    if let Some(list) = &args.names {
        return Ok(parse_name_list(list));
    }
    if let Some(path) = &args.input {
        return read_names_file(path);
    }

    let stdin = std::io::stdin();
    prompt_names(&mut stdin.lock(), &mut std::io::stdout())
}

fn rank_in_maze(names: &[String], args: &MazeArgs, seed: Option<u64>) -> Result<Vec<MazeStanding>> {
    let mut ranking = MazeRanking::new(args.maze_config(), create_rng(seed))
        .context("Invalid maze configuration")?;

    ranking.rank(names).context("Maze ranking failed")
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Entrants in input order, ranked by their standing
fn standings_to_entrants(names: &[String], standings: &[MazeStanding]) -> Vec<Entrant> {
    let ranks: FxHashMap<&str, i32> = standings
        .iter()
        .map(|s| (s.run.name.as_str(), s.rank))
        .collect();

    names
        .iter()
        .filter_map(|name| ranks.get(name.as_str()).map(|&rank| Entrant::new(name.clone(), rank)))
        .collect()
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
