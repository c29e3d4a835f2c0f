use log::{debug, trace};

use super::rebuild::tree_to_rna;
use super::topology::decode_topology;
use super::COUNT_BITS;
use crate::bitstream::{BitReader, Bits};
use crate::error::{Result, RnacError};
use crate::huffman_coding::{BINARY, UNARY};
use crate::rna::RnaRecord;
use crate::tree::{NodeId, Tree, TreeStats};

const LEAF: &str = "e";

/// Decompress a bit sequence written by compress_standard.
///
/// Bits after the unary labels are padding and are ignored. A completely empty sequence decodes
/// to the empty record.
pub fn decompress_standard(bits: &Bits) -> Result<RnaRecord> {
    let tree = decode_standard(bits)?;
    tree_to_rna(&tree)
}

/// Decompress a bit sequence written by compress_alternative. Same padding and empty rules as the
/// standard format.
pub fn decompress_alternative(bits: &Bits) -> Result<RnaRecord> {
    let tree = decode_alternative(bits)?;
    tree_to_rna(&tree)
}

/// Rebuild the labeled contracted tree from the standard format.
pub fn decode_standard(bits: &Bits) -> Result<Tree<String>> {
    if bits.is_empty() {
        return Ok(Tree::new(LEAF.to_string()));
    }
    let mut br = BitReader::new(bits);
    let count = br.bint(COUNT_BITS as usize).ok_or_else(|| {
        RnacError::UndecodableBitstream(format!(
            "{} bits are too short for the {} bit count field",
            bits.len(),
            COUNT_BITS
        ))
    })?;
    debug!("Count field: {} binary nodes.", count);

    let mut tree = decode_topology(&mut br)?;
    let stats = TreeStats::of(&tree);
    if stats.binary != count {
        return Err(RnacError::UndecodableBitstream(format!(
            "count field says {} binary nodes but the topology has {}",
            count, stats.binary
        )));
    }

    // Labels come in preorder, first every binary node, then every unary node.
    let binary: Vec<NodeId> = tree.preorder().filter(|&id| tree.arity(id) == 2).collect();
    let unary: Vec<NodeId> = tree.preorder().filter(|&id| tree.arity(id) == 1).collect();
    let leaves: Vec<NodeId> = tree.preorder_leaves().collect();
    for id in binary {
        let label = BINARY.decode_label(&mut br)?;
        tree.set_key(id, label);
    }
    trace!("Binary labels end at {}", br.loc());
    for id in unary {
        let label = UNARY.decode_label(&mut br)?;
        tree.set_key(id, label);
    }
    for id in leaves {
        tree.set_key(id, LEAF.to_string());
    }
    debug!(
        "Decoded {} nodes, {} bits of padding left.",
        tree.size(),
        br.remaining()
    );
    Ok(tree)
}

/// Rebuild the labeled contracted tree from the alternative format.
///
/// Children are created as leaves the moment their parent is read. The ones flagged as internal go
/// on a stack and are filled in when their turn in preorder comes. Decoding stops once nothing is
/// pending; running out of bits while something still is pending is an error.
pub fn decode_alternative(bits: &Bits) -> Result<Tree<String>> {
    let mut tree = Tree::new(LEAF.to_string());
    if bits.is_empty() {
        return Ok(tree);
    }
    let mut br = BitReader::new(bits);
    let mut pending: Vec<NodeId> = tree.root().into_iter().collect();

    while let Some(id) = pending.pop() {
        let binary = br.bit().ok_or_else(|| truncated(&tree, pending.len() + 1))?;
        let (book, arity) = if binary { (&*BINARY, 2) } else { (&*UNARY, 1) };
        let label = book.decode_label(&mut br)?;
        tree.set_key(id, label);

        let mut internal = Vec::with_capacity(arity);
        for _ in 0..arity {
            let nonempty = br.bit().ok_or_else(|| truncated(&tree, pending.len() + 1))?;
            let child = tree.add_child(id, LEAF.to_string());
            if nonempty {
                internal.push(child);
            }
        }
        // left child on top, so its subtree is read first
        pending.extend(internal.into_iter().rev());
    }
    debug!(
        "Decoded {} nodes, {} bits of padding left.",
        tree.size(),
        br.remaining()
    );
    Ok(tree)
}

fn truncated(tree: &Tree<String>, pending: usize) -> RnacError {
    RnacError::UndecodableBitstream(format!(
        "bitstream ended after {} nodes with {} still pending",
        tree.size(),
        pending
    ))
}

#[cfg(test)]
mod test {
    use rand::prelude::*;

    use super::*;
    use crate::compression::compress::{compress_alternative, compress_standard};
    use crate::rna::Base;

    const SEQUENCE: &str = "ACCGUGAGCCAUGUUAGGGA";
    const STRUCTURE: &str = "..((((...)))..(.).).";

    fn both_ways(sequence: &str, structure: &str) {
        let rna = RnaRecord::new(sequence, structure);
        let expected = RnaRecord::new(sequence.to_uppercase(), structure);

        let bits = compress_standard(&rna).unwrap();
        assert_eq!(decompress_standard(&bits).unwrap(), expected);
        // byte padding must not matter
        let padded = Bits::from_bytes(&bits.pack());
        assert_eq!(decompress_standard(&padded).unwrap(), expected);

        let bits = compress_alternative(&rna).unwrap();
        assert_eq!(decompress_alternative(&bits).unwrap(), expected);
        let padded = Bits::from_bytes(&bits.pack());
        assert_eq!(decompress_alternative(&padded).unwrap(), expected);
    }

    #[test]
    fn empty_test() {
        both_ways("", "");
        assert!(decompress_standard(&Bits::new()).unwrap().is_empty());
        assert!(decompress_alternative(&Bits::new()).unwrap().is_empty());
    }

    #[test]
    fn single_positions_test() {
        for base in ["A", "C", "G", "U"] {
            both_ways(base, ".");
        }
        for pair in ["AU", "UA", "CG", "GC", "GU", "UG"] {
            both_ways(pair, "()");
        }
    }

    #[test]
    fn lowercase_test() {
        both_ways("gggaaaccc", "(((...)))");
    }

    #[test]
    fn examples_test() {
        both_ways(SEQUENCE, STRUCTURE);
        both_ways(
            "CGCGCGCGCGCAGGACCCCGGGGCUAUUAGCUCAGUUUGGUUAGAGCGCACCCCUGAUAAGGGUGAGGUCGCUGAUUCGAAUUCAGCAUAGCCCA",
            "()()()()()(.)(.)..()(((((((..((((..........)))).(((((.......))))).....(((((.......)))))))))))).",
        );
    }

    #[test]
    fn known_bits_test() {
        let bits: Bits = "0111000".parse().unwrap();
        assert_eq!(
            decompress_alternative(&bits).unwrap(),
            RnaRecord::new("U", ".")
        );
        let bits: Bits = format!("{}11010101100", "0".repeat(23)).parse().unwrap();
        assert_eq!(
            decompress_standard(&bits).unwrap(),
            RnaRecord::new("GU", "()")
        );
    }

    /// Random well formed records: a base is either left unpaired, opens a pair, or closes the
    /// innermost open pair with a base that can pair with its opener.
    fn random_record(rng: &mut StdRng, len: usize) -> RnaRecord {
        let partners = |open: char| -> &'static [char] {
            match open {
                'A' => &['U'],
                'C' => &['G'],
                'G' => &['C', 'U'],
                _ => &['A', 'G'],
            }
        };
        let mut rna = RnaRecord::default();
        let mut open: Vec<char> = Vec::new();
        while rna.len() < len || !open.is_empty() {
            let roll = rng.gen_range(0..10);
            if roll < 3 && !open.is_empty() {
                let opener = open.pop().unwrap_or('A');
                let choices = partners(opener);
                rna.sequence.push(choices[rng.gen_range(0..choices.len())]);
                rna.structure.push(')');
            } else if roll < 6 && rna.len() < len {
                let base = Base::ALL[rng.gen_range(0..4)].letter();
                open.push(base);
                rna.sequence.push(base);
                rna.structure.push('(');
            } else if rna.len() < len {
                rna.sequence.push(Base::ALL[rng.gen_range(0..4)].letter());
                rna.structure.push('.');
            } else if let Some(opener) = open.pop() {
                rna.sequence.push(partners(opener)[0]);
                rna.structure.push(')');
            }
        }
        rna
    }

    #[test]
    fn random_roundtrip_test() {
        let mut rng = StdRng::seed_from_u64(0x524e41);
        for _ in 0..200 {
            let len = rng.gen_range(0..120);
            let rna = random_record(&mut rng, len);
            both_ways(&rna.sequence, &rna.structure);
        }
    }

    #[test]
    fn truncated_standard_test() {
        let bits = compress_standard(&RnaRecord::new(SEQUENCE, STRUCTURE)).unwrap();
        for cut in [10, 24, 30, bits.len() - 1] {
            let short: Bits = bits.iter().take(cut).collect();
            assert!(
                matches!(
                    decompress_standard(&short),
                    Err(RnacError::UndecodableBitstream(_))
                ),
                "cut at {}",
                cut
            );
        }
    }

    #[test]
    fn truncated_alternative_test() {
        let bits = compress_alternative(&RnaRecord::new(SEQUENCE, STRUCTURE)).unwrap();
        for cut in [1, 5, bits.len() / 2, bits.len() - 1] {
            let short: Bits = bits.iter().take(cut).collect();
            assert!(
                matches!(
                    decompress_alternative(&short),
                    Err(RnacError::UndecodableBitstream(_))
                ),
                "cut at {}",
                cut
            );
        }
    }

    #[test]
    fn wrong_count_test() {
        let mut bits: Bits = format!("{}1", "0".repeat(23)).parse().unwrap();
        // a single leaf has no binary node
        bits.push(false);
        assert!(matches!(
            decompress_standard(&bits),
            Err(RnacError::UndecodableBitstream(_))
        ));
    }
}
