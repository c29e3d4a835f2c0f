//! BitReader: a read cursor over an immutable `Bits` sequence.
//!
//! Decoding happens in several stages (count field, topology, binary labels, unary labels). Each stage
//! takes the same reader and moves its cursor forward, so no stage ever needs to slice or drain the
//! underlying buffer.
//!

use super::bits::Bits;

/// Reads a bit sequence front to back.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bits: &'a Bits,
    cursor: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bits: &'a Bits) -> Self {
        Self { bits, cursor: 0 }
    }

    /// Return Option<bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bit(&mut self) -> Option<bool> {
        let bit = self.bits.get(self.cursor)?;
        self.cursor += 1;
        Some(bit)
    }

    /// Return Option<usize> of the next n bits (most significant first), or None if fewer
    /// than n bits are left. Nothing is consumed when None is returned.
    pub fn bint(&mut self, n: usize) -> Option<usize> {
        if self.remaining() < n {
            return None;
        }
        let mut result = 0_usize;
        for _ in 0..n {
            result = result << 1 | self.bit()? as usize;
        }
        Some(result)
    }

    /// Look at the next `len` bits without consuming them. The result uses the BitPacker word
    /// format (length in the top byte, bits right-aligned) so it can be matched against code tables.
    pub fn peek_code(&self, len: u32) -> Option<u32> {
        debug_assert!(len <= 24);
        if self.remaining() < len as usize {
            return None;
        }
        let code = (0..len as usize).fold(0_u32, |acc, i| {
            acc << 1 | self.bits.get(self.cursor + i).unwrap_or(false) as u32
        });
        Some(len << 24 | code)
    }

    /// Move the cursor forward by n bits (clamped at the end of the sequence).
    pub fn skip(&mut self, n: usize) {
        self.cursor = (self.cursor + n).min(self.bits.len());
    }

    /// Number of bits consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Debugging function. Report current position as [byte.bit].
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor / 8, self.cursor % 8)
    }
}
