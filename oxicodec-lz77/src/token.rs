//! LZ77 token type.

use std::fmt;

/// A token produced by LZ77 compression.
///
/// `offset == 0` means no match: the token carries only its literal.
/// Otherwise `length` bytes are copied from `offset` positions behind the
/// output cursor before the literal (if any) is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lz77Token {
    /// Distance back from the output cursor (0 = literal only).
    pub offset: usize,
    /// Number of bytes to copy.
    pub length: usize,
    /// Byte following the match; `None` when the match ends the input.
    pub literal: Option<u8>,
}

impl Lz77Token {
    /// A literal-only token.
    pub fn literal(byte: u8) -> Self {
        Self {
            offset: 0,
            length: 0,
            literal: Some(byte),
        }
    }

    /// A back-reference token, optionally followed by a literal.
    pub fn reference(offset: usize, length: usize, literal: Option<u8>) -> Self {
        Self {
            offset,
            length,
            literal,
        }
    }

    /// Whether this token copies from earlier output.
    pub fn is_match(&self) -> bool {
        self.offset > 0
    }

    /// Number of output bytes this token produces when decoded.
    pub fn decoded_len(&self) -> usize {
        let copied = if self.is_match() { self.length } else { 0 };
        copied.saturating_add(usize::from(self.literal.is_some()))
    }
}

impl fmt::Display for Lz77Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal {
            Some(byte) => write!(
                f,
                "({},{},{})",
                self.offset,
                self.length,
                char::from(byte).escape_default()
            ),
            None => write!(f, "({},{},#)", self.offset, self.length),
        }
    }
}
