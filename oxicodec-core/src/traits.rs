//! Core traits shared by the codecs.
//!
//! Every codec in the workspace follows the same linear flow: build a model
//! from the input, encode, decode using the model, and compare against the
//! original. [`Codec`] captures that flow so front ends can drive any codec
//! uniformly.

use crate::error::Result;

/// A lossless, whole-buffer codec.
///
/// `Encoded` is whatever the codec produces: a token sequence for the
/// dictionary coders, or a bit-packed stream plus its code table for
/// Huffman coding.
pub trait Codec {
    /// Encoded representation produced by [`encode`](Self::encode).
    type Encoded;

    /// Short human-readable codec name.
    fn name(&self) -> &'static str;

    /// Encode the complete input.
    fn encode(&self, input: &[u8]) -> Result<Self::Encoded>;

    /// Decode a complete encoded representation.
    fn decode(&self, encoded: &Self::Encoded) -> Result<Vec<u8>>;

    /// Encode then decode `input`, reporting whether the result is identical.
    fn verify(&self, input: &[u8]) -> Result<bool> {
        let encoded = self.encode(input)?;
        Ok(self.decode(&encoded)? == input)
    }
}
