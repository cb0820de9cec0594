//! # OxiCodec-LZ78: Incremental Dictionary Coding
//!
//! This crate turns a byte sequence into `(index, literal)` tokens against
//! a dictionary that both sides grow one entry per token, and turns the
//! tokens back into the original bytes.
//!
//! ## Dictionary Rules
//!
//! - Entry 0 is the empty phrase and is never transmitted
//! - Every token creates exactly one entry: `dictionary[index] + literal`
//! - A token may only reference entries created by earlier tokens, so the
//!   dictionary is fully reconstructible from the token stream alone
//!
//! ## Example
//!
//! ```rust
//! use oxicodec_lz78::{compress, decompress, Lz78Token};
//!
//! let tokens = compress(b"ABABABA");
//! assert_eq!(tokens[2], Lz78Token::new(1, b'B'));
//!
//! let decompressed = decompress(&tokens).unwrap();
//! assert_eq!(decompressed, b"ABABABA");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod dictionary;
mod encoder;
mod token;

pub use decoder::Lz78Decoder;
pub use dictionary::{PhraseList, PhraseTrie};
pub use encoder::Lz78Encoder;
pub use oxicodec_core::{OxiCodecError, Result};
pub use token::Lz78Token;

use oxicodec_core::Codec;

/// Compress data into LZ78 tokens.
pub fn compress(data: &[u8]) -> Vec<Lz78Token> {
    Lz78Encoder::new().encode(data)
}

/// Reconstruct the original bytes from LZ78 tokens.
///
/// Fails with [`OxiCodecError::InvalidIndex`] if a token references an
/// entry that does not exist yet.
pub fn decompress(tokens: &[Lz78Token]) -> Result<Vec<u8>> {
    Lz78Decoder::new().decode(tokens)
}

/// [`Codec`] adapter for LZ78.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz78Codec;

impl Codec for Lz78Codec {
    type Encoded = Vec<Lz78Token>;

    fn name(&self) -> &'static str {
        "LZ78"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<Lz78Token>> {
        Ok(compress(input))
    }

    fn decode(&self, encoded: &Vec<Lz78Token>) -> Result<Vec<u8>> {
        decompress(encoded)
    }
}
