use log::trace;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::tables::{
    BINARY_ALPHABET, BINARY_CODES, BOUNDARY, UNARY_ALPHABET, UNARY_CODES,
};
use crate::bitstream::{BitReader, Bits};
use crate::error::{Result, RnacError};

/// Codebook for unary node labels (unpaired bases).
pub static UNARY: Lazy<CodeBook> =
    Lazy::new(|| CodeBook::from_table("unary", &UNARY_ALPHABET, &UNARY_CODES));

/// Codebook for binary node labels (pair types).
pub static BINARY: Lazy<CodeBook> =
    Lazy::new(|| CodeBook::from_table("binary", &BINARY_ALPHABET, &BINARY_CODES));

/// An order-1 Huffman code: every code depends on the symbol emitted before it.
#[derive(Debug)]
pub struct CodeBook {
    name: &'static str,
    alphabet: &'static [char],
    /// (previous, next) -> code word
    encode: FxHashMap<(char, char), u32>,
    /// (previous, code word) -> next
    decode: FxHashMap<(char, u32), char>,
    min_len: u32,
    max_len: u32,
}

impl CodeBook {
    /// Build the encode map and its inverse from a table of (previous, next, code) entries.
    pub fn from_table(
        name: &'static str,
        alphabet: &'static [char],
        table: &[(char, char, u32)],
    ) -> Self {
        let mut encode = FxHashMap::default();
        let mut decode = FxHashMap::default();
        for &(previous, next, code) in table {
            encode.insert((previous, next), code);
            decode.insert((previous, code), next);
        }
        let lengths = table.iter().map(|&(_, _, code)| code >> 24);
        Self {
            name,
            alphabet,
            encode,
            decode,
            min_len: lengths.clone().min().unwrap_or(0),
            max_len: lengths.max().unwrap_or(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn alphabet(&self) -> &'static [char] {
        self.alphabet
    }

    /// True if `symbol` belongs to this book's alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// Code word for `next` following `previous`.
    pub fn code(&self, previous: char, next: char) -> Option<u32> {
        self.encode.get(&(previous, next)).copied()
    }

    /// All code words usable in one context, in alphabet order (boundary last).
    pub fn codes_in_context(&self, context: char) -> Vec<u32> {
        self.alphabet
            .iter()
            .chain(std::iter::once(&BOUNDARY))
            .filter_map(|&next| self.code(context, next))
            .collect()
    }

    /// Append the codes of one label: boundary, each symbol in its predecessor's context, boundary.
    pub fn encode_label(&self, label: &str, bits: &mut Bits) -> Result<()> {
        let mut previous = BOUNDARY;
        for next in label.chars().chain(std::iter::once(BOUNDARY)) {
            let code = self.code(previous, next).ok_or_else(|| {
                RnacError::MalformedInput(format!(
                    "no {} code for '{}' after '{}' in label \"{}\"",
                    self.name, next, previous, label
                ))
            })?;
            bits.out24(code);
            previous = next;
        }
        Ok(())
    }

    /// Decode one symbol in the given context. The candidate prefix grows one bit at a time until
    /// it matches; codes are prefix-free within a context, so the first match is the right one.
    pub fn decode_symbol(&self, context: char, br: &mut BitReader<'_>) -> Result<char> {
        for len in self.min_len..=self.max_len {
            let code = br.peek_code(len).ok_or_else(|| {
                RnacError::UndecodableBitstream(format!(
                    "bitstream ended inside a {} code at {}",
                    self.name,
                    br.loc()
                ))
            })?;
            if let Some(&symbol) = self.decode.get(&(context, code)) {
                br.skip(len as usize);
                return Ok(symbol);
            }
        }
        Err(RnacError::UndecodableBitstream(format!(
            "no {} code after '{}' matches the bits at {}",
            self.name,
            context,
            br.loc()
        )))
    }

    /// Decode symbols until the boundary comes back and return them as a label.
    pub fn decode_label(&self, br: &mut BitReader<'_>) -> Result<String> {
        let mut label = String::new();
        let mut context = BOUNDARY;
        loop {
            let symbol = self.decode_symbol(context, br)?;
            if symbol == BOUNDARY {
                break;
            }
            label.push(symbol);
            context = symbol;
        }
        trace!("Decoded {} label {} ending at {}", self.name, label, br.loc());
        Ok(label)
    }
}

/// Pick the codebook for a contracted node label by its first symbol.
pub fn book_for(label: &str) -> Option<&'static CodeBook> {
    let first = label.chars().next()?;
    if UNARY.contains(first) {
        Some(&*UNARY)
    } else if BINARY.contains(first) {
        Some(&*BINARY)
    } else {
        None
    }
}
