//! Error types for OxiCodec operations.
//!
//! Every failure a codec can report is a variant of [`OxiCodecError`]. The
//! variants fall into four broad kinds (see [`ErrorKind`]): I/O failures,
//! token decode failures, malformed code tables or bit streams, and invalid
//! configuration. None of them is recoverable within a single invocation.

use std::io;
use thiserror::Error;

/// Broad classification of an [`OxiCodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input source unavailable or output destination unwritable.
    Io,
    /// A token references data outside the output produced so far.
    Decode,
    /// Malformed code table or a bit stream that does not resolve.
    Format,
    /// Invalid codec parameters.
    Config,
}

/// The main error type for OxiCodec operations.
#[derive(Debug, Error)]
pub enum OxiCodecError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// LZ77 back-reference pointing before the start of the output.
    #[error("Invalid back-reference offset: {offset} exceeds produced output {available}")]
    InvalidOffset {
        /// The offending offset.
        offset: usize,
        /// Number of bytes produced when the token was applied.
        available: usize,
    },

    /// LZ77 back-reference whose copy length cannot be held in memory.
    #[error("Invalid copy length: {length} bytes cannot be appended to {available} bytes of output")]
    InvalidLength {
        /// The offending length.
        length: usize,
        /// Number of bytes produced when the token was applied.
        available: usize,
    },

    /// LZ78 token referencing a dictionary entry that does not exist yet.
    #[error("Invalid dictionary index: {index} (dictionary holds {dictionary_size} entries)")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Dictionary size when the token was applied.
        dictionary_size: usize,
    },

    /// A code in a code table contains a character other than `0` or `1`.
    #[error("Invalid bit character {found:?} in code table at line {line}")]
    InvalidCodeBit {
        /// 1-based record number.
        line: usize,
        /// The offending character.
        found: char,
    },

    /// A code table record could not be parsed.
    #[error("Malformed code table at line {line}: {message}")]
    MalformedTable {
        /// 1-based record number (0 when the table as a whole is invalid).
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Two codes in a code table collide (one is a prefix of the other).
    #[error("Code at line {line} conflicts with a previous code (not prefix-free)")]
    CodeConflict {
        /// 1-based record number of the conflicting code.
        line: usize,
    },

    /// A symbol cannot be written unambiguously in the requested table format.
    #[error("Symbol {symbol:#04x} cannot be represented unambiguously in a legacy code table")]
    AmbiguousSymbol {
        /// The byte value that collides with an escape.
        symbol: u8,
    },

    /// A bit path left the decoding tree.
    #[error("Invalid Huffman code at bit position {bit_position}")]
    InvalidCode {
        /// Bit position where the invalid path was detected.
        bit_position: u64,
    },

    /// The bit stream ended before a complete code was read.
    #[error("Unexpected end of bit stream at bit position {bit_position}")]
    UnexpectedEof {
        /// Number of bits consumed when the stream ran out.
        bit_position: u64,
    },

    /// Codec parameters are out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },
}

/// Result type alias for OxiCodec operations.
pub type Result<T> = std::result::Result<T, OxiCodecError>;

impl OxiCodecError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::InvalidOffset { .. } | Self::InvalidLength { .. } | Self::InvalidIndex { .. } => {
                ErrorKind::Decode
            }
            Self::InvalidCodeBit { .. }
            | Self::MalformedTable { .. }
            | Self::CodeConflict { .. }
            | Self::AmbiguousSymbol { .. }
            | Self::InvalidCode { .. }
            | Self::UnexpectedEof { .. } => ErrorKind::Format,
            Self::InvalidConfig { .. } => ErrorKind::Config,
        }
    }

    /// Create an invalid offset error.
    pub fn invalid_offset(offset: usize, available: usize) -> Self {
        Self::InvalidOffset { offset, available }
    }

    /// Create an invalid copy length error.
    pub fn invalid_length(length: usize, available: usize) -> Self {
        Self::InvalidLength { length, available }
    }

    /// Create an invalid dictionary index error.
    pub fn invalid_index(index: usize, dictionary_size: usize) -> Self {
        Self::InvalidIndex {
            index,
            dictionary_size,
        }
    }

    /// Create an invalid code bit error.
    pub fn invalid_code_bit(line: usize, found: char) -> Self {
        Self::InvalidCodeBit { line, found }
    }

    /// Create a malformed table error.
    pub fn malformed_table(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedTable {
            line,
            message: message.into(),
        }
    }

    /// Create a code conflict error.
    pub fn code_conflict(line: usize) -> Self {
        Self::CodeConflict { line }
    }

    /// Create an ambiguous symbol error.
    pub fn ambiguous_symbol(symbol: u8) -> Self {
        Self::AmbiguousSymbol { symbol }
    }

    /// Create an invalid Huffman code error.
    pub fn invalid_code(bit_position: u64) -> Self {
        Self::InvalidCode { bit_position }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bit_position: u64) -> Self {
        Self::UnexpectedEof { bit_position }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiCodecError::invalid_offset(5, 2);
        assert!(err.to_string().contains("offset: 5"));

        let err = OxiCodecError::invalid_code_bit(3, 'x');
        assert!(err.to_string().contains("'x'"));
        assert!(err.to_string().contains("line 3"));

        let err = OxiCodecError::ambiguous_symbol(b'_');
        assert!(err.to_string().contains("0x5f"));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(OxiCodecError::invalid_index(9, 1).kind(), ErrorKind::Decode);
        assert_eq!(OxiCodecError::invalid_offset(1, 0).kind(), ErrorKind::Decode);
        assert_eq!(
            OxiCodecError::invalid_length(usize::MAX, 1).kind(),
            ErrorKind::Decode
        );
        assert_eq!(OxiCodecError::unexpected_eof(8).kind(), ErrorKind::Format);
        assert_eq!(OxiCodecError::code_conflict(2).kind(), ErrorKind::Format);
        assert_eq!(
            OxiCodecError::invalid_config("window").kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiCodecError = io_err.into();
        assert!(matches!(err, OxiCodecError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
