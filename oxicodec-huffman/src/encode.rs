//! Huffman encoder.

use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use crate::table::CodeTable;
use crate::tree::HuffmanTree;
use oxicodec_core::{BitWriter, OxiCodecError, Result};
use std::io::Write;

/// Everything derived from one input: counts, tree and code table.
#[derive(Debug, Clone)]
pub struct HuffmanModel {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    table: CodeTable,
}

impl HuffmanModel {
    /// Count `data` and build its tree and codes.
    pub fn build(data: &[u8]) -> Self {
        Self::from_frequencies(FrequencyTable::from_bytes(data))
    }

    /// Build the tree and codes for precomputed counts.
    pub fn from_frequencies(frequencies: FrequencyTable) -> Self {
        let tree = HuffmanTree::from_frequencies(&frequencies);
        let table = tree.codes();
        Self {
            frequencies,
            tree,
            table,
        }
    }

    /// Symbol counts.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The Huffman tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Code table derived from the tree.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Number of meaningful bits the encoded stream will contain.
    pub fn encoded_bits(&self) -> u64 {
        self.frequencies
            .iter()
            .map(|(symbol, count)| {
                count * self.table.get(symbol).map_or(0, |code| code.len() as u64)
            })
            .sum()
    }

    /// Consume the model, keeping only the code table.
    pub fn into_table(self) -> CodeTable {
        self.table
    }
}

/// Result of encoding: packed bits plus the table needed to decode them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanOutput {
    /// Packed bit stream, MSB-first, zero padded to a whole byte.
    pub data: Vec<u8>,
    /// Code table used to produce `data`.
    pub table: CodeTable,
    /// Meaningful bits in `data`, pseudo-EOF code included.
    pub bit_len: u64,
}

impl HuffmanOutput {
    /// Padding bits in the last byte.
    pub fn padding_bits(&self) -> u64 {
        self.data.len() as u64 * 8 - self.bit_len
    }
}

/// Static Huffman encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanEncoder;

impl HuffmanEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }

    /// Build a model from `data` and encode it.
    pub fn encode(&self, data: &[u8]) -> Result<HuffmanOutput> {
        let model = HuffmanModel::build(data);
        log::debug!(
            "Huffman model: {} distinct bytes, {} codes, longest code {} bits",
            model.frequencies().distinct_bytes(),
            model.table().len(),
            model.table().max_code_len()
        );

        let mut out = Vec::new();
        let bit_len = self.encode_to(data, model.table(), &mut out)?;
        Ok(HuffmanOutput {
            data: out,
            table: model.into_table(),
            bit_len,
        })
    }

    /// Encode `data` with an existing table, writing packed bytes to `writer`.
    ///
    /// Every input byte is replaced by its code, then the pseudo-EOF code is
    /// appended and the final byte is zero padded. Returns the number of
    /// meaningful bits. Fails with `MalformedTable` if the table has no code
    /// for some input byte or for the pseudo-EOF.
    pub fn encode_to<W: Write>(&self, data: &[u8], table: &CodeTable, writer: W) -> Result<u64> {
        let mut bits = BitWriter::new(writer);

        for &byte in data {
            let code = table.get(Symbol::Byte(byte)).ok_or_else(|| {
                OxiCodecError::malformed_table(0, format!("no code for byte {:#04x}", byte))
            })?;
            bits.write_slice(code.bits())?;
        }

        let eof = table
            .get(Symbol::Eof)
            .ok_or_else(|| OxiCodecError::malformed_table(0, "missing pseudo-EOF symbol"))?;
        bits.write_slice(eof.bits())?;

        let bit_len = bits.bits_written();
        bits.into_inner()?;
        log::trace!("Huffman encoded {} bytes into {} bits", data.len(), bit_len);
        Ok(bit_len)
    }

    /// Encode `data` with an existing table into a new buffer.
    pub fn encode_with_table(&self, data: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode_to(data, table, &mut out)?;
        Ok(out)
    }
}
