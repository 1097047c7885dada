//! Bracket generation - padding, seeding and balanced tree construction
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: generate_bracket (orchestration)
//! - Level 2: build_balanced, build_custom (phases)
//! - Level 3: pad_field, seed_field, build_range (steps)
//! - Level 4: seeding order, winner rule

use crate::config::{BracketConfig, BracketKind};
use crate::custom::build_custom;
use crate::entrant::Entrant;
use crate::seeding::{padded_size, seeding_order};
use crate::tree::{MatchNode, MatchTree, NodeId, TreeBuilder};
use crate::validate::{validate_entrants, ValidationError};

/// A generated tournament: the match tree plus field sizes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bracket {
    pub tree: MatchTree,
    pub kind: BracketKind,
    /// Real entrants in the field
    pub entrant_count: usize,
    /// Field size after bye padding
    pub padded_size: usize,
}

impl Bracket {
    pub fn champion(&self) -> &Entrant {
        self.tree.champion()
    }

    /// Round number of the final match
    pub fn final_round(&self) -> u32 {
        self.tree.root_node().round
    }

    /// Number of rounds holding at least one real head-to-head contest
    pub fn contested_rounds(&self) -> usize {
        let mut rounds: Vec<u32> = self
            .tree
            .nodes()
            .filter(|(_, n)| n.is_contested())
            .map(|(_, n)| n.round)
            .collect();
        rounds.sort_unstable();
        rounds.dedup();
        rounds.len()
    }

    /// Opening matches in slot order
    pub fn schedule(&self) -> Vec<&MatchNode> {
        self.tree.leaves().collect()
    }

    /// Number of byes added while padding
    pub fn bye_count(&self) -> usize {
        self.padded_size - self.entrant_count
    }
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Validate, sort and build a bracket (Level 1 orchestration)
///
/// Validation runs over the whole field first; on failure no tree is built.
/// Entrants are sorted by rank with a stable sort, so equal ranks keep their
/// input order.
pub fn generate_bracket(
    mut entrants: Vec<Entrant>,
    config: &BracketConfig,
) -> Result<Bracket, ValidationError> {
    validate_entrants(&entrants, config)?;
    entrants.sort_by_key(|e| e.rank);

    tracing::info!(
        "Generating {:?} bracket for {} entrants",
        config.kind,
        entrants.len()
    );

    let bracket = match config.kind {
        BracketKind::Standard => build_balanced(&entrants, config.starting_round),
        BracketKind::Custom => build_custom(&entrants, config.starting_round),
    };

    // Validation guarantees a non-empty field
    bracket.ok_or(ValidationError::Empty)
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Build a balanced single-elimination bracket (Level 2 phase)
///
/// `sorted` must already be ordered by rank and validated. Returns `None`
/// for an empty field.
pub fn build_balanced(sorted: &[Entrant], starting_round: u32) -> Option<Bracket> {
    if sorted.is_empty() {
        return None;
    }

    let padded = pad_field(sorted);
    let seeded = seed_field(padded);
    let size = seeded.len();

    let mut builder = TreeBuilder::with_capacity(size.saturating_sub(1).max(1));
    let root = build_range(&mut builder, &seeded, 0, size - 1, starting_round)?;

    Some(Bracket {
        tree: builder.finish(root),
        kind: BracketKind::Standard,
        entrant_count: sorted.len(),
        padded_size: size,
    })
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Append byes until the field is a power of two (minimum 2)
fn pad_field(sorted: &[Entrant]) -> Vec<Entrant> {
    let size = padded_size(sorted.len());
    let mut padded = Vec::with_capacity(size);
    padded.extend_from_slice(sorted);
    padded.resize_with(size, Entrant::bye);
    padded
}

/// Reorder a padded field into bracket slot order
fn seed_field(padded: Vec<Entrant>) -> Vec<Entrant> {
    let mut slots: Vec<Option<Entrant>> = padded.into_iter().map(Some).collect();
    seeding_order(slots.len())
        .into_iter()
        .filter_map(|seed| slots[seed - 1].take())
        .collect()
}

/// Recursively build the matches for slots `start..=end`
///
/// Both halves are built at `round`; their parent plays at the next round.
fn build_range(
    builder: &mut TreeBuilder,
    seeded: &[Entrant],
    start: usize,
    end: usize,
    round: u32,
) -> Option<NodeId> {
    if start > end {
        return None;
    }
    if start == end {
        return Some(builder.leaf(seeded[start].clone(), Entrant::bye(), round));
    }
    if end == start + 1 {
        return Some(builder.leaf(seeded[start].clone(), seeded[end].clone(), round));
    }

    let mid = (start + end) / 2;
    let left = build_range(builder, seeded, start, mid, round)?;
    let right = build_range(builder, seeded, mid + 1, end, round)?;
    let child_round = builder.get(left).round;

    Some(builder.parent(left, right, child_round + 1))
}

// ============================================================================
// TESTS
// ============================================================================
