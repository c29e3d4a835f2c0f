use log::{debug, trace};

use super::node::{NodeId, Tree};
use crate::error::{Result, RnacError};
use crate::rna::{Base, PairType};

/// Label of the root before the first position is read. Only an empty record keeps it.
pub const SENTINEL: char = 'f';
/// Label of the terminal nodes hung below every position.
pub const TERMINAL: char = 'e';

/// Build the strictly ranked tree of a sequence and its dot-bracket structure.
///
/// Every position becomes one node. Unpaired bases are unary (their child is whatever follows),
/// paired positions are binary: the left child holds what is enclosed by the pair, the right child
/// what follows the closing bracket. Empty slots are filled with `TERMINAL` leaves, so unary nodes
/// always have exactly one child and binary nodes exactly two.
///
/// The sequence is read case-insensitively.
pub fn build_strict_tree(sequence: &str, structure: &str) -> Result<Tree<char>> {
    let bases: Vec<char> = sequence.chars().collect();
    let brackets: Vec<char> = structure.chars().collect();
    if bases.len() != brackets.len() {
        return Err(RnacError::MalformedInput(format!(
            "sequence has {} positions but structure has {}",
            bases.len(),
            brackets.len()
        )));
    }

    let mut tree = Tree::new(SENTINEL);
    let mut current: NodeId = 0;
    // How many levels the cursor went down since the innermost open pair (or the start).
    let mut run_length = 0_usize;
    let mut depth_stack: Vec<usize> = Vec::new();
    // Open pairs that still wait for their closing bracket, with their position for error reports.
    let mut pending_pairs: Vec<(NodeId, PairType, usize)> = Vec::new();

    for (i, (&c, &bracket)) in bases.iter().zip(brackets.iter()).enumerate() {
        let base = Base::from_char(c).ok_or_else(|| {
            RnacError::MalformedInput(format!("unknown base '{}' at position {}", c, i))
        })?;
        match bracket {
            '.' => {
                tree.set_key(current, base.label());
                current = tree.add_child(current, TERMINAL);
                run_length += 1;
            }
            '(' => {
                // The +1 counts the step into this pair's right child once it is closed.
                depth_stack.push(run_length + 1);
                run_length = 0;
                let pair = PairType::open(base);
                tree.set_key(current, pair.label());
                pending_pairs.push((current, pair, i));
                current = tree.add_child(current, TERMINAL);
            }
            ')' => {
                let (opener, pair, _) = pending_pairs.pop().ok_or_else(|| {
                    RnacError::MalformedInput(format!("unmatched ')' at position {}", i))
                })?;
                let pair = pair.close(base).ok_or_else(|| {
                    RnacError::MalformedInput(format!(
                        "{} at position {} cannot pair with {}",
                        base,
                        i,
                        pair.bases().0
                    ))
                })?;
                tree.set_key(opener, pair.label());

                current = climb(&tree, current, run_length)?;
                run_length = depth_stack.pop().unwrap_or(0);
                current = climb(&tree, current, 1)?;
                debug_assert_eq!(current, opener);
                current = tree.add_child(current, TERMINAL);
            }
            other => {
                return Err(RnacError::MalformedInput(format!(
                    "unknown structure symbol '{}' at position {}",
                    other, i
                )))
            }
        }
        trace!("{} {} -> node {}", c, bracket, current);
    }

    if let Some((_, _, i)) = pending_pairs.last() {
        return Err(RnacError::MalformedInput(format!(
            "unmatched '(' at position {}",
            i
        )));
    }

    debug!("Strict tree has {} nodes.", tree.size());
    Ok(tree)
}

/// Walk `steps` levels up from `node`.
fn climb(tree: &Tree<char>, mut node: NodeId, steps: usize) -> Result<NodeId> {
    for _ in 0..steps {
        node = tree.parent(node).ok_or_else(|| {
            RnacError::MalformedInput("structure closes above the root".to_string())
        })?;
    }
    Ok(node)
}
