//! Compression of RNA secondary structures through tree contraction.
//!
//! Version 0.1.0
//!
//! An RNA record is a nucleotide sequence plus its secondary structure in dot-bracket notation. The
//! record is turned into a tree with one node per position, the tree is contracted so that runs of
//! unpaired bases and stacked pairs become single nodes, and the contracted tree is written as a
//! bit sequence: its shape in one bit per bracket and its labels with fixed order-1 Huffman codes.
//! Decompression rebuilds the tree and reads the record back off it.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> rnacontract -c -i trna.txt`
//!
//! This will compress the file and create the file trna.rnac.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod rna;
pub mod tools;
pub mod tree;

pub use compression::{compress, decompress, Format};
pub use error::{Result, RnacError};
pub use rna::RnaRecord;
