//! # OxiCodec-LZ77: Sliding-Window Dictionary Coding
//!
//! This crate turns a byte sequence into `(offset, length, literal)` tokens
//! by substituting the longest earlier occurrence within a bounded window,
//! and turns the tokens back into the original bytes.
//!
//! ## Token Semantics
//!
//! - `offset == 0`: no match, the token only appends its literal
//! - `offset > 0`: copy `length` bytes starting `offset` bytes behind the
//!   output cursor, then append the literal if present
//! - Copies may overlap the bytes they produce (`length > offset`)
//! - The match search is a plain left-to-right scan of the window; the
//!   longest match wins and ties keep the earliest start
//!
//! ## Example
//!
//! ```rust
//! use oxicodec_lz77::{compress, decompress};
//!
//! let original = b"ABABABA";
//! let tokens = compress(original, 20).unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!((tokens[2].offset, tokens[2].length), (2, 5));
//!
//! let decompressed = decompress(&tokens).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod encoder;
mod token;

pub use config::{DEFAULT_WINDOW, Lz77Config};
pub use decoder::Lz77Decoder;
pub use encoder::{Lz77Encoder, Match};
pub use oxicodec_core::{OxiCodecError, Result};
pub use token::Lz77Token;

use oxicodec_core::Codec;

/// Compress data into LZ77 tokens with the given window size.
///
/// Fails only when `window` is zero.
pub fn compress(data: &[u8], window: usize) -> Result<Vec<Lz77Token>> {
    let encoder = Lz77Encoder::new(Lz77Config::new(window)?);
    Ok(encoder.encode(data))
}

/// Reconstruct the original bytes from LZ77 tokens.
///
/// Fails with [`OxiCodecError::InvalidOffset`] if a token reaches back
/// before the start of the output.
pub fn decompress(tokens: &[Lz77Token]) -> Result<Vec<u8>> {
    Lz77Decoder::new().decode(tokens)
}

/// [`Codec`] adapter for LZ77.
#[derive(Debug, Clone, Default)]
pub struct Lz77Codec {
    encoder: Lz77Encoder,
}

impl Lz77Codec {
    /// Create a codec with the given configuration.
    pub fn new(config: Lz77Config) -> Self {
        Self {
            encoder: Lz77Encoder::new(config),
        }
    }
}

impl Codec for Lz77Codec {
    type Encoded = Vec<Lz77Token>;

    fn name(&self) -> &'static str {
        "LZ77"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<Lz77Token>> {
        Ok(self.encoder.encode(input))
    }

    fn decode(&self, encoded: &Vec<Lz77Token>) -> Result<Vec<u8>> {
        decompress(encoded)
    }
}
