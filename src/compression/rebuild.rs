use crate::error::{Result, RnacError};
use crate::rna::{Base, PairType, RnaRecord};
use crate::tree::{NodeId, Tree};

/// Work items for the iterative walk. Closing brackets of a binary node have to wait until its left
/// subtree is written, so they are parked on the stack between the two children.
enum Step {
    Visit(NodeId),
    /// Closing bases of one binary node, already in output order.
    Close(Vec<char>),
}

/// Turn a labeled contracted tree back into a sequence and its dot-bracket structure.
///
/// - Unary nodes write their bases in upper case and one '.' per base.
/// - Binary nodes write the opening base and '(' of each of their pairs, then the left subtree, then
///   the closing bases and ')' in reverse pair order, then the right subtree.
/// - Leaves write nothing.
pub fn tree_to_rna(tree: &Tree<String>) -> Result<RnaRecord> {
    let mut rna = RnaRecord::default();
    let mut steps: Vec<Step> = tree.root().map(Step::Visit).into_iter().collect();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(id) => match tree.children(id) {
                [child] => {
                    for c in tree.key(id).chars() {
                        let base = Base::from_char(c).ok_or_else(|| {
                            RnacError::UndecodableBitstream(format!(
                                "'{}' in unary label \"{}\" is not a base",
                                c,
                                tree.key(id)
                            ))
                        })?;
                        rna.sequence.push(base.letter());
                        rna.structure.push('.');
                    }
                    steps.push(Step::Visit(*child));
                }
                [left, right] => {
                    let mut closing = Vec::with_capacity(tree.key(id).len());
                    for c in tree.key(id).chars() {
                        let pair = PairType::from_label(c).ok_or_else(|| {
                            RnacError::UndecodableBitstream(format!(
                                "'{}' in binary label \"{}\" is not a pair type",
                                c,
                                tree.key(id)
                            ))
                        })?;
                        let (open, close) = pair.bases();
                        rna.sequence.push(open.letter());
                        rna.structure.push('(');
                        closing.push(close.letter());
                    }
                    closing.reverse();
                    steps.push(Step::Visit(*right));
                    steps.push(Step::Close(closing));
                    steps.push(Step::Visit(*left));
                }
                _ => {}
            },
            Step::Close(closing) => {
                for letter in closing {
                    rna.sequence.push(letter);
                    rna.structure.push(')');
                }
            }
        }
    }
    Ok(rna)
}
