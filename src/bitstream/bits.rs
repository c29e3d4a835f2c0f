use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::bitpacker::BitPacker;
use crate::error::RnacError;

/// An ordered, growable sequence of bits. This is what every codec stage produces and consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bits {
    bits: Vec<bool>,
}

impl Bits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(size: usize) -> Self {
        Self {
            bits: Vec::with_capacity(size),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append all bits of another sequence.
    pub fn append(&mut self, other: &Bits) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Append 0-24 bits given in the BitPacker word format: bit count in the most significant
    /// byte, data right-aligned in the low 24 bits, most significant data bit written first.
    pub fn out24(&mut self, data: u32) {
        let depth = data >> 24;
        for shift in (0..depth).rev() {
            self.bits.push((data >> shift) & 1 == 1);
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Pack MSB-first into bytes. The last byte is padded with zeros.
    pub fn pack(&self) -> Vec<u8> {
        let mut bp = BitPacker::new(self.bits.len() / 8 + 1);
        bp.out_bits(&self.bits);
        bp.finish()
    }

    /// Unpack bytes MSB-first. Any padding written by pack() comes back as trailing zeros.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes
            .iter()
            .flat_map(|&byte| (0..8).map(move |i| byte & (0x80 >> i) != 0))
            .collect()
    }
}

impl FromIterator<bool> for Bits {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for Bits {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter)
    }
}

/// Human readable form: one '0' or '1' per bit.
impl Display for Bits {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Bits {
    type Err = RnacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(RnacError::UndecodableBitstream(format!(
                    "'{}' is not a bit",
                    other
                ))),
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::Bits;

    #[test]
    fn out24_test() {
        let mut bits = Bits::new();
        bits.out24(0x04_00000e);
        bits.out24(0x01_000000);
        assert_eq!(bits.to_string(), "11100");
        bits.out24((24 << 24) | 5);
        assert_eq!(bits.len(), 29);
        assert_eq!(&bits.to_string()[5..], "000000000000000000000101");
    }

    #[test]
    fn pack_test() {
        let bits: Bits = "0010000110".parse().unwrap();
        assert_eq!(bits.pack(), vec![0b0010_0001, 0b1000_0000]);
        assert!(Bits::new().pack().is_empty());
    }

    #[test]
    fn from_bytes_test() {
        let bits = Bits::from_bytes(&[0b1000_0001, 0xff]);
        assert_eq!(bits.to_string(), "1000000111111111");
        let again: Bits = "101".parse().unwrap();
        assert_eq!(Bits::from_bytes(&again.pack()).to_string(), "10100000");
    }

    #[test]
    fn parse_rejects_garbage_test() {
        assert!("10x1".parse::<Bits>().is_err());
    }

    #[test]
    fn append_test() {
        let mut a: Bits = "11".parse().unwrap();
        let b: Bits = "00".parse().unwrap();
        a.append(&b);
        a.extend([true]);
        assert_eq!(a.to_string(), "11001");
        assert_eq!(a.get(4), Some(true));
        assert_eq!(a.get(5), None);
    }
}
