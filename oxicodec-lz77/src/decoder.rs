//! LZ77 decoder (decompression).

use crate::token::Lz77Token;
use log::debug;
use oxicodec_core::{OxiCodecError, Result};

/// LZ77 decoder for decompression.
#[derive(Debug, Default)]
pub struct Lz77Decoder {
    /// Output produced so far.
    output: Vec<u8>,
}

impl Lz77Decoder {
    /// Create a new LZ77 decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one token to the output.
    ///
    /// The copy runs byte by byte, so a token whose `length` exceeds its
    /// `offset` replicates the bytes it has just written.
    pub fn apply(&mut self, token: &Lz77Token) -> Result<()> {
        if token.is_match() {
            let available = self.output.len();
            if token.offset > available {
                return Err(OxiCodecError::invalid_offset(token.offset, available));
            }

            let start = available - token.offset;
            self.output
                .try_reserve(token.length)
                .map_err(|_| OxiCodecError::invalid_length(token.length, available))?;
            for i in 0..token.length {
                let byte = self.output[start + i];
                self.output.push(byte);
            }
        }

        if let Some(byte) = token.literal {
            self.output.push(byte);
        }
        Ok(())
    }

    /// Decode a complete token sequence.
    pub fn decode(&mut self, tokens: &[Lz77Token]) -> Result<Vec<u8>> {
        self.reset();
        for token in tokens {
            self.apply(token)?;
        }

        debug!(
            "lz77 decoded {} tokens into {} bytes",
            tokens.len(),
            self.output.len()
        );
        Ok(std::mem::take(&mut self.output))
    }

    /// Number of bytes produced so far.
    pub fn output_len(&self) -> usize {
        self.output.len()
    }

    /// Reset the decoder to initial state.
    pub fn reset(&mut self) {
        self.output.clear();
    }
}
