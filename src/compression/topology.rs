use log::{debug, trace};

use crate::bitstream::{BitReader, Bits};
use crate::error::{Result, RnacError};
use crate::tree::Tree;

/// Encode the shape of a tree (labels are ignored).
///
/// We take the unbalanced bracket string, where binary nodes never close, drop the root's opening
/// bracket (there is always a root) and write 1 for '(' and 0 for ')'. A binary node's close is not
/// needed: once it has two children the decoder knows it is done with it.
pub fn encode_topology<K>(tree: &Tree<K>) -> Bits {
    let bits: Bits = tree
        .bracket_string(false)
        .chars()
        .skip(1)
        .map(|c| c == '(')
        .collect();
    debug!("Topology takes {} bits.", bits.len());
    trace!("Topology: {}", bits);
    bits
}

/// Rebuild an unlabeled tree from the reader's current position. Reading stops as soon as the
/// cursor climbs past the root; the reader is left on the first bit after the topology.
pub fn decode_topology(br: &mut BitReader<'_>) -> Result<Tree<String>> {
    let mut tree = Tree::new(String::new());
    let mut current = tree.root();
    while let Some(node) = current {
        let bit = br.bit().ok_or_else(|| {
            RnacError::UndecodableBitstream(format!(
                "bitstream ended inside the topology after {} nodes",
                tree.size()
            ))
        })?;
        current = if bit {
            Some(tree.add_child(node, String::new()))
        } else {
            tree.parent(node)
        };
        // A node with two children is complete, its close bracket was never written
        while let Some(node) = current {
            if tree.arity(node) != 2 {
                break;
            }
            current = tree.parent(node);
        }
    }
    debug!("Decoded a topology of {} nodes ending at {}.", tree.size(), br.loc());
    Ok(tree)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tree::build_contracted_tree;

    fn roundtrip(tree: &Tree<String>) -> Tree<String> {
        let bits = encode_topology(tree);
        let mut br = BitReader::new(&bits);
        let decoded = decode_topology(&mut br).unwrap();
        assert!(br.is_exhausted());
        decoded
    }

    #[test]
    fn leaf_test() {
        let tree = Tree::new("e".to_string());
        assert_eq!(encode_topology(&tree).to_string(), "0");
        assert_eq!(roundtrip(&tree).size(), 1);
    }

    #[test]
    fn binary_root_test() {
        let tree = build_contracted_tree("AU", "()").unwrap();
        assert_eq!(encode_topology(&tree).to_string(), "1010");
        assert_eq!(roundtrip(&tree).bracket_string(true), "(()())");
    }

    #[test]
    fn unary_root_test() {
        let tree = build_contracted_tree("A", ".").unwrap();
        assert_eq!(encode_topology(&tree).to_string(), "100");
    }

    #[test]
    fn shape_test() {
        // hand made shape with every arity at several depths
        let mut tree = Tree::new(String::new());
        let root = tree.root().unwrap();
        let a = tree.add_child(root, String::new());
        let b = tree.add_child(root, String::new());
        let c = tree.add_child(a, String::new());
        tree.add_child(c, String::new());
        tree.add_child(c, String::new());
        let d = tree.add_child(b, String::new());
        tree.add_child(d, String::new());
        assert_eq!(
            roundtrip(&tree).bracket_string(true),
            tree.bracket_string(true)
        );
    }

    #[test]
    fn example_test() {
        let tree = build_contracted_tree(
            "CGCGCGCGCGCAGGACCCCGGGGCUAUUAGCUCAGUUUGGUUAGAGCGCACCCCUGAUAAGGGUGAGGUCGCUGAUUCGAAUUCAGCAUAGCCCA",
            "()()()()()(.)(.)..()(((((((..((((..........)))).(((((.......))))).....(((((.......)))))))))))).",
        )
        .unwrap();
        assert_eq!(
            roundtrip(&tree).bracket_string(true),
            tree.bracket_string(true)
        );
    }

    #[test]
    fn stops_after_root_test() {
        // trailing bits belong to the next segment and must not be read
        let bits: Bits = "1010111".parse().unwrap();
        let mut br = BitReader::new(&bits);
        let tree = decode_topology(&mut br).unwrap();
        assert_eq!(tree.size(), 3);
        assert_eq!(br.position(), 4);
    }

    #[test]
    fn truncated_test() {
        let bits: Bits = "101".parse().unwrap();
        let mut br = BitReader::new(&bits);
        assert!(matches!(
            decode_topology(&mut br),
            Err(RnacError::UndecodableBitstream(_))
        ));
    }
}
