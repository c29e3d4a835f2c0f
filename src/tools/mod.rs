//! The tools module provides the glue around the codec for the command line program.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - rna_io: Reading records and bit files, writing text and bit files, default output paths.
//! - report: Human readable sizes and the statistics printout.
//! - xml: XML export of a contracted tree.
//!
pub mod cli;
pub mod report;
pub mod rna_io;
pub mod xml;
