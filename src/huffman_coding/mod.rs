//! The huffman_coding module encodes and decodes the labels of contracted tree nodes.
//!
//! Labels come from two small alphabets: unary nodes carry runs of unpaired bases (a, c, g, u) and binary
//! nodes carry runs of pair types (p, q, r, s, x, y). Each alphabet has its own fixed codebook. The codes
//! are conditional (order 1): the code for a symbol depends on the symbol before it, and the label
//! boundary `;` counts as a symbol on both ends. So the label "acg" is written as the codes for
//! (;,a) (a,c) (c,g) (g,;).
//!
//! The tables are hand-tuned and never change, so they are built once per process and shared read-only.
//!
pub mod huffman;
pub mod tables;

pub use huffman::{book_for, CodeBook, BINARY, UNARY};
pub use tables::BOUNDARY;
