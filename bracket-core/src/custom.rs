//! Custom pairing - first remaining winner meets the last
//!
//! Round one gives every entrant a walkover. Each later round pairs the
//! winner of the first match against the winner of the last one and carries
//! everybody in between forward against a bye, so exactly one new contest is
//! introduced per round until a single match remains.

use crate::builder::Bracket;
use crate::config::BracketKind;
use crate::entrant::Entrant;
use crate::tree::{NodeId, TreeBuilder};

/// Build a first-vs-last bracket over `entrants` in the given order
///
/// Returns `None` for an empty field. The tree is linked: a first-vs-last
/// match has the first match as left child and the last as right child; a
/// carried match has its prior match as left child only.
pub fn build_custom(entrants: &[Entrant], starting_round: u32) -> Option<Bracket> {
    if entrants.is_empty() {
        return None;
    }

    let n = entrants.len();
    // n walkovers, then n-1, n-2, ... 1 matches
    let mut builder = TreeBuilder::with_capacity(n * (n + 1) / 2);
    let mut round = starting_round;

    let mut current: Vec<NodeId> = entrants
        .iter()
        .map(|e| builder.leaf(e.clone(), Entrant::bye(), round))
        .collect();

    while current.len() > 1 {
        round += 1;
        current = next_round(&mut builder, &current, round);
    }

    Some(Bracket {
        tree: builder.finish(current[0]),
        kind: BracketKind::Custom,
        entrant_count: n,
        padded_size: n,
    })
}

/// Build one round from the previous round's matches
fn next_round(builder: &mut TreeBuilder, previous: &[NodeId], round: u32) -> Vec<NodeId> {
    let (first, last) = (previous[0], previous[previous.len() - 1]);

    let mut next = Vec::with_capacity(previous.len() - 1);
    next.push(builder.parent(first, last, round));
    for &middle in &previous[1..previous.len() - 1] {
        next.push(builder.carry(middle, round));
    }
    next
}
