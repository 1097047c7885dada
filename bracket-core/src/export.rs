//! JSON export of a match tree
//!
//! Schema, one object per match:
//!
//! ```text
//! { "player1": "A", "player2": "D", "winner": "A", "round": 1,
//!   "left": <match or null>, "right": <match or null> }
//! ```
//!
//! Export only; nothing reads this document back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::BracketError;
use crate::tree::{MatchTree, NodeId};

/// Serializable view of the subtree rooted at one match
#[derive(Clone, Copy)]
pub struct MatchDocument<'a> {
    tree: &'a MatchTree,
    id: NodeId,
}

impl<'a> MatchDocument<'a> {
    /// Document for the whole tree
    pub fn new(tree: &'a MatchTree) -> Self {
        Self {
            tree,
            id: tree.root(),
        }
    }

    fn child(&self, id: Option<NodeId>) -> Option<MatchDocument<'a>> {
        id.map(|id| MatchDocument { tree: self.tree, id })
    }
}

impl Serialize for MatchDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.tree.get(self.id);
        let mut state = serializer.serialize_struct("Match", 6)?;
        state.serialize_field("player1", &node.entrant_a.name)?;
        state.serialize_field("player2", &node.entrant_b.name)?;
        state.serialize_field("winner", &node.winner().name)?;
        state.serialize_field("round", &node.round)?;
        state.serialize_field("left", &self.child(node.left))?;
        state.serialize_field("right", &self.child(node.right))?;
        state.end()
    }
}

/// Tree as a JSON value
pub fn to_value(tree: &MatchTree) -> Result<serde_json::Value, BracketError> {
    Ok(serde_json::to_value(MatchDocument::new(tree))?)
}

/// Tree as pretty-printed JSON text
pub fn to_json_string(tree: &MatchTree) -> Result<String, BracketError> {
    Ok(serde_json::to_string_pretty(&MatchDocument::new(tree))?)
}

/// Write pretty-printed JSON to any writer
pub fn write_json<W: Write>(tree: &MatchTree, writer: W) -> Result<(), BracketError> {
    serde_json::to_writer_pretty(writer, &MatchDocument::new(tree))?;
    Ok(())
}

/// Write pretty-printed JSON to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_json_file(tree: &MatchTree, path: &Path) -> Result<(), BracketError> {
    let io_error = |source| BracketError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_json(tree, &mut writer)?;
    writer.write_all(b"\n").map_err(io_error)?;
    writer.flush().map_err(io_error)?;
    Ok(())
}
