//! Match tree - arena-backed bracket nodes and traversal
//!
//! Nodes live in a single arena and refer to each other by [`NodeId`].
//! Children are always pushed before their parent, so the root is the last
//! node and dropping the tree never recurses.
//!
//! ## Architecture
//! - Level 2: tree assembly (leaf, parent and carried matches)
//! - Level 3: node accessors, ancestry, traversal
//! - Level 4: text rendering

use std::fmt;

use crate::entrant::{decide, Entrant, Side};

// ============================================================================
// TYPES
// ============================================================================

/// Node identifier (index into arena). Only a tree hands these out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in build order
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single match in the bracket
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchNode {
    /// Upper slot (left child's winner for internal nodes)
    pub entrant_a: Entrant,
    /// Lower slot (right child's winner for internal nodes)
    pub entrant_b: Entrant,
    /// Which slot won
    pub winner: Side,
    /// Round number, increasing from the leaves towards the root
    pub round: u32,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
}

impl MatchNode {
    /// Create a match and decide it with the rank rule
    pub fn new(entrant_a: Entrant, entrant_b: Entrant, round: u32) -> Self {
        let winner = decide(&entrant_a, &entrant_b);
        Self {
            entrant_a,
            entrant_b,
            winner,
            round,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn entrant(&self, side: Side) -> &Entrant {
        match side {
            Side::A => &self.entrant_a,
            Side::B => &self.entrant_b,
        }
    }

    pub(crate) fn entrant_mut(&mut self, side: Side) -> &mut Entrant {
        match side {
            Side::A => &mut self.entrant_a,
            Side::B => &mut self.entrant_b,
        }
    }

    pub fn winner(&self) -> &Entrant {
        self.entrant(self.winner)
    }

    pub fn loser(&self) -> &Entrant {
        self.entrant(self.winner.other())
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Both slots hold real entrants
    pub fn is_contested(&self) -> bool {
        !self.entrant_a.is_bye() && !self.entrant_b.is_bye()
    }

    /// Slot of the real entrant called `name`, if present. Byes never match.
    pub fn side_of(&self, name: &str) -> Option<Side> {
        if !self.entrant_a.is_bye() && self.entrant_a.name == name {
            Some(Side::A)
        } else if !self.entrant_b.is_bye() && self.entrant_b.name == name {
            Some(Side::B)
        } else {
            None
        }
    }
}

impl fmt::Display for MatchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}  Winner: {} (Round {})",
            self.entrant_a.name,
            self.entrant_b.name,
            self.winner().name,
            self.round
        )
    }
}

// ============================================================================
// MATCH TREE (Level 3 - Accessors)
// ============================================================================

/// Complete bracket tree with arena allocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchTree {
    nodes: Vec<MatchNode>,
    root: NodeId,
}

impl MatchTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Match for an id issued by this tree.
    ///
    /// Panics on an id taken from a larger tree; see [`MatchTree::try_get`].
    pub fn get(&self, id: NodeId) -> &MatchNode {
        &self.nodes[id.0]
    }

    pub fn try_get(&self, id: NodeId) -> Option<&MatchNode> {
        self.nodes.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut MatchNode {
        &mut self.nodes[id.0]
    }

    pub fn root_node(&self) -> &MatchNode {
        self.get(self.root)
    }

    /// Winner of the final match
    pub fn champion(&self) -> &Entrant {
        self.root_node().winner()
    }

    /// Number of matches in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All matches in build order (children before parents)
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &MatchNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Opening matches in build order
    pub fn leaves(&self) -> impl Iterator<Item = &MatchNode> {
        self.nodes.iter().filter(|n| n.is_leaf())
    }

    /// Number of levels on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        self.iter().map(|v| v.depth + 1).max().unwrap_or(0)
    }

    /// Which slot of its parent `id` feeds, if it has a parent
    pub fn slot_in_parent(&self, id: NodeId) -> Option<(NodeId, Side)> {
        let parent = self.try_get(id)?.parent?;
        let node = self.get(parent);
        if node.left == Some(id) {
            Some((parent, Side::A))
        } else if node.right == Some(id) {
            Some((parent, Side::B))
        } else {
            None
        }
    }

    /// Visual-layout traversal: right subtree, node, left subtree.
    ///
    /// Each call starts a fresh walk.
    pub fn iter(&self) -> Traversal<'_> {
        Traversal {
            tree: self,
            stack: Vec::new(),
            pending: Some((self.root, 0)),
        }
    }

    /// Indented text layout, one tab per level below the root
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MatchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in self.iter() {
            for _ in 0..visit.depth {
                f.write_str("\t")?;
            }
            writeln!(f, "{}", visit.node)?;
        }
        Ok(())
    }
}

// ============================================================================
// TRAVERSAL
// ============================================================================

/// A node yielded by [`Traversal`]
#[derive(Clone, Copy, Debug)]
pub struct Visit<'a> {
    pub id: NodeId,
    pub node: &'a MatchNode,
    /// Distance from the root
    pub depth: usize,
}

/// Lazy right/self/left walk over a [`MatchTree`]
pub struct Traversal<'a> {
    tree: &'a MatchTree,
    stack: Vec<(NodeId, usize)>,
    pending: Option<(NodeId, usize)>,
}

impl<'a> Iterator for Traversal<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.pending.take() {
            self.stack.push((id, depth));
            self.pending = self.tree.get(id).right.map(|r| (r, depth + 1));
        }

        let (id, depth) = self.stack.pop()?;
        let node = self.tree.get(id);
        self.pending = node.left.map(|l| (l, depth + 1));

        Some(Visit { id, node, depth })
    }
}

// ============================================================================
// TREE ASSEMBLY (Level 2)
// ============================================================================

/// Arena under construction. Every push returns the id of the new match.
#[derive(Debug, Default)]
pub(crate) struct TreeBuilder {
    nodes: Vec<MatchNode>,
}

impl TreeBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn get(&self, id: NodeId) -> &MatchNode {
        &self.nodes[id.0]
    }

    fn push(&mut self, node: MatchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        tracing::debug!("Round {} match: {}", node.round, node);
        self.nodes.push(node);
        id
    }

    /// Opening match between two entrants
    pub fn leaf(&mut self, a: Entrant, b: Entrant, round: u32) -> NodeId {
        self.push(MatchNode::new(a, b, round))
    }

    /// Match between the winners of `left` and `right`
    pub fn parent(&mut self, left: NodeId, right: NodeId, round: u32) -> NodeId {
        let a = self.get(left).winner().clone();
        let b = self.get(right).winner().clone();
        let mut node = MatchNode::new(a, b, round);
        node.left = Some(left);
        node.right = Some(right);

        let id = self.push(node);
        self.nodes[left.0].parent = Some(id);
        self.nodes[right.0].parent = Some(id);
        id
    }

    /// Walkover carrying the winner of `child` into the next round
    pub fn carry(&mut self, child: NodeId, round: u32) -> NodeId {
        let a = self.get(child).winner().clone();
        let mut node = MatchNode::new(a, Entrant::bye(), round);
        node.left = Some(child);

        let id = self.push(node);
        self.nodes[child.0].parent = Some(id);
        id
    }

    pub fn finish(self, root: NodeId) -> MatchTree {
        MatchTree {
            nodes: self.nodes,
            root,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// A(1) vs D(4), B(2) vs C(3), winners meet in round 2
    fn four_player_tree() -> MatchTree {
        let mut builder = TreeBuilder::with_capacity(3);
        let left = builder.leaf(Entrant::new("A", 1), Entrant::new("D", 4), 1);
        let right = builder.leaf(Entrant::new("B", 2), Entrant::new("C", 3), 1);
        let root = builder.parent(left, right, 2);
        builder.finish(root)
    }

    #[test]
    fn test_tree_assembly() {
        let tree = four_player_tree();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.root(), NodeId(2));
        assert_eq!(tree.champion().name, "A");

        let root = tree.root_node();
        assert_eq!(root.entrant_a.name, "A");
        assert_eq!(root.entrant_b.name, "B");
        assert_eq!(root.round, 2);
        assert_eq!(tree.get(NodeId(0)).parent, Some(NodeId(2)));
        assert_eq!(tree.get(NodeId(1)).parent, Some(NodeId(2)));
        assert_eq!(tree.slot_in_parent(NodeId(0)), Some((NodeId(2), Side::A)));
        assert_eq!(tree.slot_in_parent(NodeId(1)), Some((NodeId(2), Side::B)));
        assert_eq!(tree.slot_in_parent(NodeId(2)), None);
    }

    #[test]
    fn test_traversal_order() {
        let tree = four_player_tree();
        let order: Vec<(usize, usize)> = tree.iter().map(|v| (v.id.0, v.depth)).collect();

        // right subtree, root, left subtree
        assert_eq!(order, vec![(1, 1), (2, 0), (0, 1)]);
    }

    #[test]
    fn test_traversal_restartable() {
        let tree = four_player_tree();
        let first: Vec<NodeId> = tree.iter().map(|v| v.id).collect();
        let second: Vec<NodeId> = tree.iter().map(|v| v.id).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), tree.len());
    }

    #[test]
    fn test_depth() {
        assert_eq!(four_player_tree().depth(), 2);

        let mut builder = TreeBuilder::default();
        let only = builder.leaf(Entrant::new("A", 1), Entrant::bye(), 1);
        assert_eq!(builder.finish(only).depth(), 1);
    }

    #[test]
    fn test_foreign_ids_are_rejected() {
        let big = four_player_tree();
        let mut builder = TreeBuilder::default();
        let only = builder.leaf(Entrant::new("A", 1), Entrant::bye(), 1);
        let small = builder.finish(only);

        // The big tree's root does not exist in the single-match tree
        assert_eq!(big.root().index(), 2);
        assert!(small.try_get(big.root()).is_none());
        assert_eq!(small.slot_in_parent(big.root()), None);
        assert_eq!(small.try_get(small.root()).map(|n| n.round), Some(1));
    }

    #[test]
    fn test_carry() {
        let mut builder = TreeBuilder::default();
        let first = builder.leaf(Entrant::new("A", 1), Entrant::bye(), 1);
        let carried = builder.carry(first, 2);
        let tree = builder.finish(carried);

        let node = tree.root_node();
        assert_eq!(node.entrant_a.name, "A");
        assert!(node.entrant_b.is_bye());
        assert_eq!(node.left, Some(first));
        assert_eq!(node.right, None);
        assert_eq!(tree.champion().name, "A");
        assert!(!node.is_contested());
    }

    #[test]
    fn test_side_of_ignores_byes() {
        let node = MatchNode::new(Entrant::new("A", 1), Entrant::bye(), 1);
        assert_eq!(node.side_of("A"), Some(Side::A));
        assert_eq!(node.side_of("BYE"), None);
        assert_eq!(node.side_of("Z"), None);
    }

    #[test]
    fn test_render() {
        let tree = four_player_tree();
        let text = tree.render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "\tB vs C  Winner: B (Round 1)");
        assert_eq!(lines[1], "A vs B  Winner: A (Round 2)");
        assert_eq!(lines[2], "\tA vs D  Winner: A (Round 1)");
    }
}
