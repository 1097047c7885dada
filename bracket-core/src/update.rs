//! Recording reported winners on a built bracket
//!
//! A recorded winner is pushed up the tree: the parent's slot fed by the
//! updated match takes the new winner, and each ancestor keeps its recorded
//! winner while that entrant is still in the match, falling back to the rank
//! rule otherwise. The walk stops at the first ancestor that does not change.

use std::fmt;
use std::str::FromStr;

use crate::entrant::{decide, Side};
use crate::tree::{MatchTree, NodeId};

/// Reasons a path-addressed update can fail
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateError {
    #[error("invalid match path {0:?} (expected root[.left|.right]*)")]
    InvalidPath(String),

    #[error("no match at {0}")]
    NoSuchMatch(MatchPath),

    #[error("{name} is not playing in the match at {path}")]
    NotInMatch { name: String, path: MatchPath },
}

// ============================================================================
// MATCH PATHS
// ============================================================================

/// Branch taken from a match towards one of its children
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
    Left,
    Right,
}

/// Address of a match: `root` followed by `.left` / `.right` steps
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchPath(Vec<Branch>);

impl MatchPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child(mut self, branch: Branch) -> Self {
        self.0.push(branch);
        self
    }

    pub fn branches(&self) -> &[Branch] {
        &self.0
    }

    /// Follow the path from the root of `tree`
    pub fn resolve(&self, tree: &MatchTree) -> Option<NodeId> {
        self.0.iter().try_fold(tree.root(), |id, branch| {
            let node = tree.get(id);
            match branch {
                Branch::Left => node.left,
                Branch::Right => node.right,
            }
        })
    }
}

impl FromStr for MatchPath {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        if parts.next() != Some("root") {
            return Err(UpdateError::InvalidPath(s.to_string()));
        }

        parts
            .map(|part| match part {
                "left" => Ok(Branch::Left),
                "right" => Ok(Branch::Right),
                _ => Err(UpdateError::InvalidPath(s.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(MatchPath)
    }
}

impl fmt::Display for MatchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for branch in &self.0 {
            match branch {
                Branch::Left => f.write_str(".left")?,
                Branch::Right => f.write_str(".right")?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// UPDATES
// ============================================================================

/// Record `winner_name` as the winner of the first match (depth-first, a
/// match before its children, left before right) in which they play.
///
/// Returns the updated match, or `None` (tree untouched) when no match
/// involves that name. Bye placeholders are never matched.
pub fn update_match(tree: &mut MatchTree, winner_name: &str) -> Option<NodeId> {
    let (id, side) = find_match(tree, winner_name)?;
    record(tree, id, side);
    Some(id)
}

/// Record `winner_name` as the winner of the match at `path`
pub fn update_match_at(
    tree: &mut MatchTree,
    path: &MatchPath,
    winner_name: &str,
) -> Result<NodeId, UpdateError> {
    let id = path
        .resolve(tree)
        .ok_or_else(|| UpdateError::NoSuchMatch(path.clone()))?;
    let side = tree
        .get(id)
        .side_of(winner_name)
        .ok_or_else(|| UpdateError::NotInMatch {
            name: winner_name.to_string(),
            path: path.clone(),
        })?;

    record(tree, id, side);
    Ok(id)
}

/// Pre-order search for the first match containing `name`
fn find_match(tree: &MatchTree, name: &str) -> Option<(NodeId, Side)> {
    let mut stack = vec![tree.root()];

    while let Some(id) = stack.pop() {
        let node = tree.get(id);
        if let Some(side) = node.side_of(name) {
            return Some((id, side));
        }
        stack.extend(node.right);
        stack.extend(node.left);
    }

    None
}

/// Set the winner of `id` and carry the change up through its ancestors
fn record(tree: &mut MatchTree, id: NodeId, side: Side) {
    tree.get_mut(id).winner = side;
    tracing::debug!("Recorded result: {}", tree.get(id));

    let mut current = id;
    while let Some((parent, slot)) = tree.slot_in_parent(current) {
        let advancing = tree.get(current).winner().clone();
        let node = tree.get_mut(parent);
        if *node.entrant(slot) == advancing {
            break;
        }

        let previous = node.winner().clone();
        *node.entrant_mut(slot) = advancing;
        node.winner = if node.entrant_a == previous {
            Side::A
        } else if node.entrant_b == previous {
            Side::B
        } else {
            decide(&node.entrant_a, &node.entrant_b)
        };
        tracing::debug!("Re-derived round {} match: {}", node.round, node);

        current = parent;
    }
}

// ============================================================================
// TESTS
// ============================================================================
