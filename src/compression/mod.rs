//! The compression module holds the two wire formats of the RNA contraction codec.
//!
//! Compression happens in the following steps:
//! - Strict tree: one node per position of the record (see the tree module).
//! - Contraction: unary chains and stacked pairs are merged into labeled super nodes.
//! - Topology: the shape of the contracted tree is written as one bit per bracket, leaving out the
//!   brackets the decoder can infer.
//! - Labels: every super node label is written with an order-1 Huffman code, unpaired bases and pair
//!   types each with their own codebook.
//!
//! The standard format writes the shape first and the labels after it, grouped by codebook. The
//! alternative format interleaves shape and labels in a single preorder pass and needs no count
//! field.
//!
//! Decompression follows the inverse of the compression process and ends in rebuild, which turns the
//! labeled tree back into a sequence and its structure.
//!
use std::fmt::{Display, Formatter};

use crate::bitstream::Bits;
use crate::error::Result;
use crate::rna::RnaRecord;

pub mod compress;
pub mod decompress;
pub mod rebuild;
pub mod topology;

pub use compress::{compress_alternative, compress_standard};
pub use decompress::{decompress_alternative, decompress_standard};
pub use rebuild::tree_to_rna;

/// Width of the binary node count that opens the standard format.
pub const COUNT_BITS: u32 = 24;

/// Which wire format to read or write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Standard,
    Alternative,
}

impl Format {
    /// File extension of compressed files in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Standard => "rnac",
            Format::Alternative => "rnac2",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Standard => write!(f, "standard"),
            Format::Alternative => write!(f, "alternative"),
        }
    }
}

/// Compress a record in the given format.
pub fn compress(rna: &RnaRecord, format: Format) -> Result<Bits> {
    match format {
        Format::Standard => compress_standard(rna),
        Format::Alternative => compress_alternative(rna),
    }
}

/// Decompress a bit sequence in the given format.
pub fn decompress(bits: &Bits, format: Format) -> Result<RnaRecord> {
    match format {
        Format::Standard => decompress_standard(bits),
        Format::Alternative => decompress_alternative(bits),
    }
}
