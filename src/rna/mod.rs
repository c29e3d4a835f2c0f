//! The rna module holds the small domain vocabulary shared by every stage of the codec.
//!
//! - alphabet: the four bases and the six pair types used as binary node labels.
//! - record: a sequence plus its dot-bracket structure, the unit we compress.
//!
pub mod alphabet;
pub mod record;

pub use alphabet::{Base, PairType};
pub use record::RnaRecord;
