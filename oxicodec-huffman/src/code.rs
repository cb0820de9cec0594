//! Variable-length code words.

use oxicodec_core::{OxiCodecError, Result};
use std::fmt;

/// A Huffman code: the bit path from the root to a leaf.
///
/// `false` is a left edge (`0`), `true` a right edge (`1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// The empty code (a single-leaf tree's root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a code from explicit bits.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Parse a textual code of `0`/`1` characters.
    ///
    /// `line` is only used for error reporting.
    pub fn parse(text: &[u8], line: usize) -> Result<Self> {
        let bits = text
            .iter()
            .map(|&c| match c {
                b'0' => Ok(false),
                b'1' => Ok(true),
                other => Err(OxiCodecError::invalid_code_bit(line, other as char)),
            })
            .collect::<Result<Vec<bool>>>()?;
        Ok(Self { bits })
    }

    /// The bits of this code, root first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Code length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether this is the empty code.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// This code extended by one edge.
    pub fn child(&self, bit: bool) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Self { bits }
    }

    /// Whether `self` is a prefix of `other` (equal codes count).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
