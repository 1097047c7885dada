//! Generate command - build a bracket from ranked entrants
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_entrants(), build_and_publish()
//! - Level 3: apply_results(), write_outputs()
//! - Level 4: argument parsing and configuration

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use bracket_core::{
    generate_bracket, update_match, update_match_at, Bracket, BracketConfig, BracketKind, Entrant,
    MatchPath,
};

use crate::input::{prompt_entrants, read_entrant_file};
use crate::output::{print_json, print_text, write_outputs};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct GenerateArgs {
    /// Entrant file with one "<name> <rank>" per line (prompts on stdin if omitted)
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub bracket: BracketArgs,
}

/// Bracket options shared by every command that ends in a bracket
#[derive(Args, Clone, Debug)]
pub struct BracketArgs {
    /// Pair first against last each round instead of standard seeding
    #[arg(long)]
    pub custom: bool,

    /// Round number shown for the opening round
    #[arg(long, default_value = "1")]
    pub starting_round: u32,

    /// Reject fields where two entrants share a rank
    #[arg(long)]
    pub unique_ranks: bool,

    /// Largest field accepted (default: 1024, or 64 with --custom)
    #[arg(long)]
    pub max_entrants: Option<usize>,

    /// Record a reported winner in the first match they play (repeatable)
    #[arg(long = "winner", value_name = "NAME")]
    pub winners: Vec<String>,

    /// Record a winner at a match path, e.g. root.left=alice (repeatable)
    #[arg(long = "set", value_name = "PATH=NAME", value_parser = parse_path_result)]
    pub results: Vec<(MatchPath, String)>,

    /// Bracket JSON destination (repeatable)
    #[arg(long = "output", short, value_name = "FILE", default_value = "bracket.json")]
    pub outputs: Vec<PathBuf>,

    /// Print the bracket JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl BracketArgs {
    pub fn config(&self) -> BracketConfig {
        let kind = if self.custom {
            BracketKind::Custom
        } else {
            BracketKind::Standard
        };

        let config = BracketConfig::for_kind(kind)
            .with_starting_round(self.starting_round)
            .with_unique_ranks(self.unique_ranks);

        match self.max_entrants {
            Some(max) => config.with_max_entrants(max),
            None => config,
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run generate command
///
/// 1. Load entrants from a file or the terminal
/// 2. Build the bracket, record results, save and report
pub fn run(args: GenerateArgs) -> Result<()> {
    let entrants = load_entrants(&args)?;
    build_and_publish(entrants, &args.bracket)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_entrants(args: &GenerateArgs) -> Result<Vec<Entrant>> {
    match &args.input {
        Some(path) => read_entrant_file(path),
        None => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let entrants = prompt_entrants(&mut stdin.lock(), &mut stdout)?;
            writeln!(stdout)?;
            Ok(entrants)
        }
    }
}

/// Generate the bracket, record reported results, then save and print it.
///
/// Save failures do not suppress the report; they turn into an error once
/// the report is printed.
pub fn build_and_publish(entrants: Vec<Entrant>, args: &BracketArgs) -> Result<()> {
    let mut bracket =
        generate_bracket(entrants, &args.config()).context("Failed to generate bracket")?;

    apply_results(&mut bracket, args)?;

    let failures = write_outputs(&bracket.tree, &args.outputs);

    if args.json {
        print_json(&bracket)?;
    } else {
        print_text(&bracket);
    }

    if !failures.is_empty() {
        bail!(
            "Failed to save bracket to {} of {} destinations",
            failures.len(),
            args.outputs.len()
        );
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Apply `--set` results in order, then `--winner` results in order
pub fn apply_results(bracket: &mut Bracket, args: &BracketArgs) -> Result<()> {
    for (path, name) in &args.results {
        update_match_at(&mut bracket.tree, path, name)
            .with_context(|| format!("Failed to record {} at {}", name, path))?;
    }

    for name in &args.winners {
        if update_match(&mut bracket.tree, name).is_none() {
            tracing::warn!("No match involves {}, result ignored", name);
        }
    }

    if !args.results.is_empty() || !args.winners.is_empty() {
        tracing::info!("Champion after results: {}", bracket.champion().name);
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Parse `PATH=NAME`
fn parse_path_result(value: &str) -> Result<(MatchPath, String), String> {
    let (path, name) = value
        .split_once('=')
        .ok_or_else(|| format!("expected PATH=NAME, got {:?}", value))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing winner name in {:?}", value));
    }

    let path = path.parse::<MatchPath>().map_err(|e| e.to_string())?;
    Ok((path, name.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================
