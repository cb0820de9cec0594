//! Command implementations for OxiCodec CLI.

pub mod compress;
pub mod decompress;
pub mod stats;
pub mod tree;
pub mod verify;

pub use compress::{CompressOptions, cmd_compress};
pub use decompress::{DecompressOptions, cmd_decompress};
pub use stats::cmd_stats;
pub use tree::cmd_tree;
pub use verify::cmd_verify;

use clap::ValueEnum;
use oxicodec_huffman::TableFormat;

/// Default Huffman code table file.
pub const DEFAULT_TABLE: &str = "codes.txt";

/// Default Huffman decompression output.
pub const DEFAULT_DECOMPRESSED: &str = "Decompressed.txt";

/// Codec selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum CodecKind {
    /// Sliding-window back-references
    Lz77,
    /// Incremental dictionary phrases
    Lz78,
    /// Static Huffman coding with a code table file
    #[default]
    Huffman,
}

impl CodecKind {
    /// Every codec, in display order.
    pub const ALL: [CodecKind; 3] = [CodecKind::Lz77, CodecKind::Lz78, CodecKind::Huffman];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            CodecKind::Lz77 => "LZ77",
            CodecKind::Lz78 => "LZ78",
            CodecKind::Huffman => "Huffman",
        }
    }

    /// Suffix of token files for the LZ codecs.
    pub fn token_suffix(self) -> Option<&'static str> {
        match self {
            CodecKind::Lz77 => Some(".lz77.json"),
            CodecKind::Lz78 => Some(".lz78.json"),
            CodecKind::Huffman => None,
        }
    }
}

/// Code table file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum TableFormatArg {
    /// Raw symbol byte, `_` for space
    #[default]
    Legacy,
    /// Hex symbol, unambiguous for every byte
    Hex,
}

impl From<TableFormatArg> for TableFormat {
    fn from(arg: TableFormatArg) -> Self {
        match arg {
            TableFormatArg::Legacy => TableFormat::Legacy,
            TableFormatArg::Hex => TableFormat::Hex,
        }
    }
}
