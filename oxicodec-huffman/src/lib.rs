//! # OxiCodec-Huffman: Static Huffman Coding
//!
//! This crate builds an optimal prefix code from the byte frequencies of an
//! input, packs the input into a bit stream with it, and decodes that bit
//! stream again using only the persisted code table.
//!
//! ## Stream Layout
//!
//! - Each input byte is replaced by its code, MSB-first
//! - A pseudo-EOF code follows the last byte
//! - The final byte is zero padded; decoding stops at the pseudo-EOF, so
//!   padding is never interpreted
//!
//! The pseudo-EOF is a separate [`Symbol::Eof`] rather than a reserved byte,
//! so all 256 byte values can be coded.
//!
//! ## Determinism
//!
//! Leaves enter the priority queue in ascending byte order, pseudo-EOF last,
//! and nodes of equal weight are merged in creation order. The same input
//! therefore always yields the same codes.
//!
//! ## Example
//!
//! ```rust
//! use oxicodec_huffman::{Symbol, compress, decompress};
//!
//! let output = compress(b"aaabbc").unwrap();
//! assert_eq!(output.data, vec![0x15, 0xB8]);
//! assert_eq!(output.table.get(Symbol::Eof).unwrap().to_string(), "111");
//!
//! let decompressed = decompress(&output.data, &output.table).unwrap();
//! assert_eq!(decompressed, b"aaabbc");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod code;
mod decode;
mod encode;
mod frequency;
mod symbol;
mod table;
mod tree;

pub use code::Code;
pub use decode::HuffmanDecoder;
pub use encode::{HuffmanEncoder, HuffmanModel, HuffmanOutput};
pub use frequency::FrequencyTable;
pub use oxicodec_core::{OxiCodecError, Result};
pub use symbol::{ALPHABET_SIZE, LEGACY_EOF_BYTE, Symbol};
pub use table::{CodeTable, TableFormat};
pub use tree::{HuffmanTree, Node, NodeId};

use oxicodec_core::Codec;

/// Compress data, returning the packed bits and the code table.
pub fn compress(data: &[u8]) -> Result<HuffmanOutput> {
    HuffmanEncoder::new().encode(data)
}

/// Decode a packed bit stream with the table it was encoded with.
pub fn decompress(data: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    HuffmanDecoder::new(table)?.decode(data)
}

/// [`Codec`] adapter for Huffman coding.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl Codec for HuffmanCodec {
    type Encoded = HuffmanOutput;

    fn name(&self) -> &'static str {
        "Huffman"
    }

    fn encode(&self, input: &[u8]) -> Result<HuffmanOutput> {
        compress(input)
    }

    fn decode(&self, encoded: &HuffmanOutput) -> Result<Vec<u8>> {
        decompress(&encoded.data, &encoded.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_text() {
        let original = b"abracadabra, said the magician";
        let output = compress(original).unwrap();
        assert!(output.data.len() < original.len());
        assert_eq!(decompress(&output.data, &output.table).unwrap(), original);
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255u8).chain([b'_', 129, 0]).collect();
        let output = compress(&original).unwrap();
        assert_eq!(output.table.len(), ALPHABET_SIZE);
        assert_eq!(decompress(&output.data, &output.table).unwrap(), original);
    }

    #[test]
    fn test_codec_verify() {
        assert_eq!(HuffmanCodec.name(), "Huffman");
        assert!(HuffmanCodec.verify(b"").unwrap());
        assert!(HuffmanCodec.verify(b"she sells sea shells").unwrap());
    }
}
