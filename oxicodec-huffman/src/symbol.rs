//! Huffman alphabet: every byte value plus the pseudo-EOF marker.

use std::fmt;

/// Byte used for the pseudo-EOF symbol in legacy code tables.
pub const LEGACY_EOF_BYTE: u8 = 129;

/// Number of symbols in the alphabet (256 bytes + pseudo-EOF).
pub const ALPHABET_SIZE: usize = 257;

/// A symbol of the Huffman alphabet.
///
/// The pseudo-EOF is its own variant rather than a reserved byte value, so
/// every byte of the input can be coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// A data byte.
    Byte(u8),
    /// End-of-stream marker, emitted once after the last data byte.
    Eof,
}

impl Symbol {
    /// Dense index in `0..ALPHABET_SIZE` (pseudo-EOF last).
    pub fn index(self) -> usize {
        match self {
            Symbol::Byte(b) => b as usize,
            Symbol::Eof => 256,
        }
    }

    /// Whether this is the pseudo-EOF.
    pub fn is_eof(self) -> bool {
        self == Symbol::Eof
    }
}

impl From<u8> for Symbol {
    fn from(byte: u8) -> Self {
        Symbol::Byte(byte)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Byte(b' ') => f.write_str("Space"),
            Symbol::Byte(b) if b.is_ascii_graphic() => write!(f, "{}", *b as char),
            Symbol::Byte(b) => write!(f, "0x{:02X}", b),
            Symbol::Eof => f.write_str("EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_order_and_index() {
        assert!(Symbol::Byte(255) < Symbol::Eof);
        assert_eq!(Symbol::Byte(0).index(), 0);
        assert_eq!(Symbol::Eof.index(), ALPHABET_SIZE - 1);
        assert!(Symbol::Eof.is_eof());
        assert!(!Symbol::Byte(LEGACY_EOF_BYTE).is_eof());
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::Byte(b'a').to_string(), "a");
        assert_eq!(Symbol::Byte(b' ').to_string(), "Space");
        assert_eq!(Symbol::Byte(b'\n').to_string(), "0x0A");
        assert_eq!(Symbol::Eof.to_string(), "EOF");
    }
}
