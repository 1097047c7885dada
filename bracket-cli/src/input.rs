//! Entrant sources - text files and interactive prompts
//!
//! Level 4 - I/O utilities

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use bracket_core::{parse_count, parse_entrants, parse_rank, Entrant};

/// Read `"<name> <rank>"` lines from a file
pub fn read_entrant_file(path: &Path) -> Result<Vec<Entrant>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read entrant file: {}", path.display()))?;
    let entrants = parse_entrants(&text)
        .with_context(|| format!("Malformed entrant file: {}", path.display()))?;

    tracing::info!("Loaded {} entrants from {}", entrants.len(), path.display());
    Ok(entrants)
}

/// Read one name per line from a file (blank lines and `#` comments skipped)
pub fn read_names_file(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read names file: {}", path.display()))?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Split a comma separated name list
pub fn parse_name_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ask for a player count, then a name and rank per player
pub fn prompt_entrants<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<Entrant>> {
    let count = parse_count(&ask(input, output, "Enter number of players: ")?)?;

    let mut entrants = Vec::with_capacity(count);
    for i in 1..=count {
        let name = ask(input, output, &format!("Enter name of player {}: ", i))?;
        let rank = ask(input, output, &format!("Enter rank of {}: ", name))?;
        entrants.push(Entrant::new(name, parse_rank(i, &rank)?));
    }

    Ok(entrants)
}

/// Ask for a player count, then a name per player
pub fn prompt_names<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<String>> {
    let count = parse_count(&ask(input, output, "Enter number of players: ")?)?;

    (1..=count)
        .map(|i| ask(input, output, &format!("Enter name of player {}: ", i)))
        .collect()
}

/// Print a prompt and read one trimmed line
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read from stdin")? == 0 {
        bail!("Unexpected end of input after prompt {:?}", prompt.trim());
    }
    Ok(line.trim().to_string())
}
