//! The tree module turns a sequence/structure pair into the contracted tree the codec works on.
//!
//! This happens in two steps:
//! - strict: build a tree with one node per position. Unpaired bases are unary nodes, paired positions
//!   are binary nodes labeled with their pair type, and terminal `e` leaves fill every empty slot.
//! - contract: merge unary chains and runs of stacked pairs into super nodes whose labels are the
//!   concatenated labels of the nodes they replace.
//!
//! The tree itself (node) is an index arena, and stats counts node kinds for reporting.
//!
pub mod contract;
pub mod node;
pub mod stats;
pub mod strict;

pub use contract::contract;
pub use node::{NodeId, Tree};
pub use stats::TreeStats;
pub use strict::build_strict_tree;

use crate::error::Result;

/// Build the strict tree and contract it in one go.
pub fn build_contracted_tree(sequence: &str, structure: &str) -> Result<Tree<String>> {
    Ok(contract(&build_strict_tree(sequence, structure)?))
}
