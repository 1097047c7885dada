//! BRACKET Core - Single-elimination bracket engine
//!
//! This crate turns a ranked field of entrants into a match tree:
//! - Standard seeding order for power-of-two fields
//! - Bye padding and balanced divide-and-conquer tree construction
//! - Alternate first-vs-last pairing policy
//! - Recording reported winners after the tree is built
//! - JSON export of the finished tree
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: generate_bracket (orchestration)
//! - Level 2: build_balanced, build_custom, update_match (phases)
//! - Level 3: padding, seeding, range recursion, ancestor refresh (steps)
//! - Level 4: winner rule, seeding order, configuration

mod builder;
mod config;
mod custom;
mod entrant;
mod error;
mod export;
mod seeding;
mod source;
mod tree;
mod update;
mod validate;

pub use builder::{build_balanced, generate_bracket, Bracket};
pub use config::{BracketConfig, BracketKind, CUSTOM_MAX_ENTRANTS, DEFAULT_MAX_ENTRANTS};
pub use custom::build_custom;
pub use entrant::{decide, Entrant, Side, BYE_NAME, BYE_RANK};
pub use error::BracketError;
pub use export::{to_json_string, to_value, write_json, write_json_file, MatchDocument};
pub use seeding::{padded_size, seeding_order};
pub use source::{parse_count, parse_entrant_line, parse_entrants, parse_rank, ParseError};
pub use tree::{MatchNode, MatchTree, NodeId, Traversal, Visit};
pub use update::{update_match, update_match_at, Branch, MatchPath, UpdateError};
pub use validate::{validate_entrants, ValidationError};
