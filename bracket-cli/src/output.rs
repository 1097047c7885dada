//! Output sinks and console reports
//!
//! Level 4 - I/O and formatting utilities

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use bracket_core::{to_json_string, write_json_file, Bracket, BracketKind, MatchTree};
use bracket_maze::MazeStanding;

/// Write the bracket JSON to every path, creating missing directories.
///
/// Every path is attempted; the ones that failed are returned with their error.
pub fn write_outputs(tree: &MatchTree, paths: &[PathBuf]) -> Vec<(PathBuf, anyhow::Error)> {
    let mut failures = Vec::new();

    for path in paths {
        match write_output(tree, path) {
            Ok(()) => tracing::info!("Saved bracket to {}", path.display()),
            Err(e) => {
                tracing::error!("Failed to save bracket to {}: {:#}", path.display(), e);
                failures.push((path.clone(), e));
            }
        }
    }

    failures
}

fn write_output(tree: &MatchTree, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    write_json_file(tree, path)?;
    Ok(())
}

/// Print the bracket JSON document to stdout
pub fn print_json(bracket: &Bracket) -> Result<()> {
    println!("{}", to_json_string(&bracket.tree)?);
    Ok(())
}

/// Print schedule, bracket layout and champion
pub fn print_text(bracket: &Bracket) {
    print!("{}", format_report(bracket));
}

pub fn format_report(bracket: &Bracket) -> String {
    let policy = match bracket.kind {
        BracketKind::Standard => "Standard Seeding",
        BracketKind::Custom => "First vs Last",
    };

    let mut out = format!("Match Scheduling Order ({}):\n", policy);
    for (i, m) in bracket.schedule().iter().enumerate() {
        out.push_str(&format!(
            "Match {}: {} vs {}\n",
            i + 1,
            m.entrant_a.name,
            m.entrant_b.name
        ));
    }

    out.push_str("\nTournament Bracket Result:\n");
    out.push_str(&bracket.tree.render());

    let champion = bracket.champion();
    out.push_str(&format!(
        "\nTournament Winner: {} (Rank {})\n",
        champion.name, champion.rank
    ));
    out
}

/// Print the maze standings table
pub fn print_standings(standings: &[MazeStanding]) {
    println!("=== Maze Standings ===");
    for s in standings {
        println!(
            "{:>3}. {:<16} reward={:<6} steps={:<5} {}",
            s.rank,
            s.run.name,
            s.run.total_reward,
            s.run.steps,
            if s.run.completed { "finished" } else { "lost" }
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracket_core::{generate_bracket, BracketConfig, Entrant};

    fn bracket() -> Bracket {
        let field = vec![
            Entrant::new("A", 1),
            Entrant::new("B", 2),
            Entrant::new("C", 3),
            Entrant::new("D", 4),
        ];
        generate_bracket(field, &BracketConfig::default()).unwrap()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bracket-cli-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_format_report() {
        let report = format_report(&bracket());
        assert!(report.starts_with("Match Scheduling Order (Standard Seeding):\n"));
        assert!(report.contains("Match 1: A vs D\n"));
        assert!(report.contains("Match 2: B vs C\n"));
        assert!(report.contains("A vs B  Winner: A (Round 2)\n"));
        assert!(report.ends_with("Tournament Winner: A (Rank 1)\n"));
    }

    #[test]
    fn test_write_outputs_creates_directories() {
        let dir = scratch_dir("outputs");
        let paths = vec![dir.join("data").join("bracket.json"), dir.join("bracket.json")];

        let failures = write_outputs(&bracket().tree, &paths);
        assert!(failures.is_empty());

        for path in &paths {
            let text = std::fs::read_to_string(path).unwrap();
            let value: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert_eq!(value["winner"], "A");
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_outputs_reports_failures_and_continues() {
        let dir = scratch_dir("failures");
        std::fs::create_dir_all(&dir).unwrap();
        // A directory cannot be opened as a file
        let paths = vec![dir.clone(), dir.join("ok.json")];

        let failures = write_outputs(&bracket().tree, &paths);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, dir);
        assert!(dir.join("ok.json").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
