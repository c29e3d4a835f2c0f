use log::debug;

use super::node::{NodeId, Tree};
use super::strict::TERMINAL;

/// Contract a strict tree into super nodes.
///
/// - A chain of unary nodes becomes one unary node whose label is the chain's labels in order.
/// - A binary node swallows its left child for as long as that child is binary too and its right
///   child is a bare terminal (a stacked pair with nothing behind its closing bracket). The right
///   child of the first node in the run is kept as the super node's right child.
/// - Leaves become `"e"`.
///
/// Nothing is lost: every strict label ends up in exactly one super node label, and the dropped
/// terminals are implied by the binary labels.
pub fn contract(strict: &Tree<char>) -> Tree<String> {
    let mut contracted = Tree::default();
    let root = match strict.root() {
        Some(root) => root,
        None => return contracted,
    };

    // (strict node that starts a super node, parent of that super node in the contracted tree)
    let mut work: Vec<(NodeId, Option<NodeId>)> = vec![(root, None)];
    while let Some((mut node, parent)) = work.pop() {
        match strict.arity(node) {
            0 => {
                contracted.attach(parent, TERMINAL.to_string());
            }
            1 => {
                let mut label = String::new();
                while strict.arity(node) == 1 {
                    label.push(*strict.key(node));
                    node = strict.children(node)[0];
                }
                let id = contracted.attach(parent, label);
                work.push((node, Some(id)));
            }
            _ => {
                let right_side = strict.children(node)[1];
                let mut label = String::new();
                loop {
                    label.push(*strict.key(node));
                    node = strict.children(node)[0];
                    if !has_trivial_right(strict, node) {
                        break;
                    }
                }
                let id = contracted.attach(parent, label);
                // LIFO: the left side is attached first, then the remembered right side
                work.push((right_side, Some(id)));
                work.push((node, Some(id)));
            }
        }
    }

    debug!(
        "Contracted {} strict nodes into {}.",
        strict.size(),
        contracted.size()
    );
    contracted
}

/// Binary node whose right child is a terminal leaf.
fn has_trivial_right(strict: &Tree<char>, node: NodeId) -> bool {
    strict.arity(node) == 2
        && strict
            .child(node, 1)
            .map_or(false, |right| {
                strict.arity(right) == 0 && *strict.key(right) == TERMINAL
            })
}
