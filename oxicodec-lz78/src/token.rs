//! LZ78 token type.

use std::fmt;

/// A token produced by LZ78 compression.
///
/// Decoding a token yields `dictionary[index]` followed by `literal`; the
/// result also becomes the next dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lz78Token {
    /// Dictionary entry this token extends (0 = empty string).
    pub index: usize,
    /// Byte appended to the referenced entry.
    pub literal: u8,
}

impl Lz78Token {
    /// Create a new token.
    pub fn new(index: usize, literal: u8) -> Self {
        Self { index, literal }
    }
}

impl fmt::Display for Lz78Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})",
            self.index,
            char::from(self.literal).escape_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Lz78Token::new(0, b'A').to_string(), "(0,A)");
        assert_eq!(Lz78Token::new(3, b'\t').to_string(), "(3,\\t)");
    }
}
