use log::{debug, trace};

use super::topology::encode_topology;
use super::COUNT_BITS;
use crate::bitstream::Bits;
use crate::error::{Result, RnacError};
use crate::huffman_coding::{book_for, BINARY, UNARY};
use crate::rna::RnaRecord;
use crate::tree::{build_contracted_tree, Tree, TreeStats};

/*
    Both wire formats start from the same contracted tree.

    Standard:    [binary node count, 24 bits][topology][binary labels][unary labels]
    Alternative: for every internal node in preorder:
                 [arity bit: 0 unary, 1 binary][label][one "child is not a leaf" bit per child]

    Labels are always framed by the boundary symbol, so each label decodes on its own.
*/

/// Compress a record with the standard format.
pub fn compress_standard(rna: &RnaRecord) -> Result<Bits> {
    let tree = build_contracted_tree(&rna.sequence, &rna.structure)?;
    encode_standard(&tree)
}

/// Compress a record with the alternative format.
pub fn compress_alternative(rna: &RnaRecord) -> Result<Bits> {
    let tree = build_contracted_tree(&rna.sequence, &rna.structure)?;
    encode_alternative(&tree)
}

/// Standard format: count field, topology, then the binary and unary label streams.
pub fn encode_standard(tree: &Tree<String>) -> Result<Bits> {
    let stats = TreeStats::of(tree);
    if stats.binary >= 1 << COUNT_BITS {
        return Err(RnacError::MalformedInput(format!(
            "{} binary nodes do not fit into the {} bit count field",
            stats.binary, COUNT_BITS
        )));
    }

    let topology = encode_topology(tree);
    let mut binary = Bits::new();
    let mut unary = Bits::new();
    for id in tree.preorder().filter(|&id| tree.arity(id) > 0) {
        let label = tree.key(id);
        let book = book_for(label).ok_or_else(|| {
            RnacError::MalformedInput(format!("\"{}\" is not a node label", label))
        })?;
        debug_assert_eq!(book.name() == BINARY.name(), tree.arity(id) == 2);
        if tree.arity(id) == 2 {
            book.encode_label(label, &mut binary)?;
        } else {
            book.encode_label(label, &mut unary)?;
        }
    }
    debug!(
        "Standard format: {} topology bits, {} binary label bits, {} unary label bits.",
        topology.len(),
        binary.len(),
        unary.len()
    );

    let mut bits =
        Bits::with_capacity(COUNT_BITS as usize + topology.len() + binary.len() + unary.len());
    bits.out24(COUNT_BITS << 24 | stats.binary as u32);
    bits.append(&topology);
    bits.append(&binary);
    bits.append(&unary);
    trace!("Compressed: {}", bits);
    Ok(bits)
}

/// Alternative format: one preorder pass, each internal node announces its arity, its label and
/// which of its children carry a subtree. Leaves write nothing.
pub fn encode_alternative(tree: &Tree<String>) -> Result<Bits> {
    let mut bits = Bits::new();
    for id in tree.preorder() {
        let book = match tree.arity(id) {
            0 => continue,
            1 => &*UNARY,
            _ => &*BINARY,
        };
        bits.push(tree.arity(id) == 2);
        book.encode_label(tree.key(id), &mut bits)?;
        bits.extend(tree.children(id).iter().map(|&child| tree.arity(child) != 0));
    }
    debug!("Alternative format: {} bits.", bits.len());
    trace!("Compressed: {}", bits);
    Ok(bits)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_standard_test() {
        let bits = compress_standard(&RnaRecord::default()).unwrap();
        // zero count and the root's close
        assert_eq!(bits.len(), 25);
        assert_eq!(bits.to_string(), "0".repeat(25));
    }

    #[test]
    fn empty_alternative_test() {
        let bits = compress_alternative(&RnaRecord::default()).unwrap();
        assert!(bits.is_empty());
    }

    #[test]
    fn single_base_standard_test() {
        let bits = compress_standard(&RnaRecord::new("a", ".")).unwrap();
        // count 0, topology 100, unary ;a 10 a; 0
        assert_eq!(bits.to_string(), format!("{}100100", "0".repeat(24)));
    }

    #[test]
    fn single_pair_standard_test() {
        let bits = compress_standard(&RnaRecord::new("GU", "()")).unwrap();
        // count 1, topology 1010, binary ;y 101 y; 100
        assert_eq!(
            bits.to_string(),
            format!("{}11010101100", "0".repeat(23))
        );
    }

    #[test]
    fn single_base_alternative_test() {
        let bits = compress_alternative(&RnaRecord::new("U", ".")).unwrap();
        // unary, ;u 111 u; 00, child is a leaf
        assert_eq!(bits.to_string(), "0111000");
    }

    #[test]
    fn single_pair_alternative_test() {
        let bits = compress_alternative(&RnaRecord::new("ca", "()"));
        assert!(matches!(bits, Err(RnacError::MalformedInput(_))));
        let bits = compress_alternative(&RnaRecord::new("cg", "()")).unwrap();
        // binary, ;r 00 r; 00, both children are leaves
        assert_eq!(bits.to_string(), "1000000");
    }

    #[test]
    fn label_streams_test() {
        // ss(au(e), e)
        let bits = compress_standard(&RnaRecord::new("GGAUCC", "((..))")).unwrap();
        let count = format!("{}1", "0".repeat(23));
        let topology = "110010";
        let binary = "011000"; // ;s 01, ss 10, s; 00
        let unary = "1011000"; // ;a 10, au 110, u; 00
        assert_eq!(
            bits.to_string(),
            format!("{}{}{}{}", count, topology, binary, unary)
        );
    }
}
