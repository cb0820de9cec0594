//! Huffman decoder.

use crate::symbol::Symbol;
use crate::table::CodeTable;
use crate::tree::HuffmanTree;
use oxicodec_core::{BitReader, Result};
use std::io::Read;

/// Static Huffman decoder driven by a persisted code table.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder {
    tree: HuffmanTree,
}

impl HuffmanDecoder {
    /// Rebuild the decoding tree from `table`.
    pub fn new(table: &CodeTable) -> Result<Self> {
        Ok(Self {
            tree: HuffmanTree::from_code_table(table)?,
        })
    }

    /// Decoding tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Decode a packed bit stream held in memory.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.decode_from(data)
    }

    /// Decode symbols from `reader` until the pseudo-EOF.
    ///
    /// Bits after the pseudo-EOF code (padding) are ignored. Running out of
    /// input before the pseudo-EOF is an error.
    pub fn decode_from<R: Read>(&self, reader: R) -> Result<Vec<u8>> {
        let mut bits = BitReader::new(reader);
        let mut output = Vec::new();

        loop {
            match self.tree.decode_symbol(&mut bits)? {
                Symbol::Byte(b) => output.push(b),
                Symbol::Eof => break,
            }
        }

        log::trace!(
            "Huffman decoded {} bytes from {} bits",
            output.len(),
            bits.bits_read()
        );
        Ok(output)
    }
}
