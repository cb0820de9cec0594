//! # OxiCodec Core
//!
//! Core components shared by the OxiCodec codecs.
//!
//! - [`bitstream`]: MSB-first bit-level I/O for variable-length codes
//! - [`traits`]: the [`Codec`] trait driving encode/decode/verify
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     prompting, tree printing, statistics                │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codecs                                                  │
//! │     LZ77, LZ78, static Huffman                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     BitReader/BitWriter, Codec, OxiCodecError           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxicodec_core::bitstream::{BitReader, BitWriter};
//!
//! let mut data = Vec::new();
//! let mut writer = BitWriter::new(&mut data);
//! writer.write_slice(&[true, true, false, false]).unwrap();
//! writer.flush().unwrap();
//! assert_eq!(data, vec![0b1100_0000]);
//!
//! let mut reader = BitReader::new(&data[..]);
//! assert!(reader.read_bit().unwrap());
//! assert_eq!(reader.bits_read(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{ErrorKind, OxiCodecError, Result};
pub use traits::Codec;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{ErrorKind, OxiCodecError, Result};
    pub use crate::traits::Codec;
}
