//! The bitstream module is the bit-level plumbing for the RNA contraction codec.
//!
//! Every codec stage hands bits to the next one as a `Bits` value. Encoders append to it, decoders read it
//! through a `BitReader`, a cursor that walks an immutable `Bits` from the front. Nothing is ever removed
//! from the buffer while decoding, so the same bits can be replayed by a second reader (handy in tests).
//!
//! Only the file glue ever sees bytes. `BitPacker` packs bits MSB-first into bytes and zero-pads the last
//! byte; `Bits::from_bytes` is the inverse (the padding comes back as trailing zero bits).
//!
pub mod bitpacker;
pub mod bitreader;
pub mod bits;

pub use bitreader::BitReader;
pub use bits::Bits;
