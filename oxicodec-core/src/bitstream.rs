//! Bit-level I/O for variable-length codes.
//!
//! This module provides `BitReader` and `BitWriter`, which pack individual
//! bits into a byte-oriented stream and unpack them again.
//!
//! # Bit Ordering
//!
//! Bits are packed MSB-first: the first bit written lands in bit 7 of the
//! first byte. A stream that ends mid-byte is padded with zero bits by
//! [`BitWriter::flush`]; the reader has no notion of where the meaningful
//! bits end, so callers must carry their own terminator (the Huffman codec
//! uses a pseudo-EOF symbol).
//!
//! # Example
//!
//! ```
//! use oxicodec_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_slice(&[true, false, true, true, true]).unwrap();
//! let output = writer.into_inner().unwrap();
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(&output[..]);
//! let bits: Vec<bool> = (0..5).map(|_| reader.read_bit().unwrap()).collect();
//! assert_eq!(bits, vec![true, false, true, true, true]);
//! ```

use crate::error::{OxiCodecError, Result};
use std::io::{self, Read, Write};

/// A bit-level reader that wraps any `Read` implementation.
///
/// One byte is buffered at a time; a new byte is fetched only when all
/// eight bits of the current one have been consumed.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Current byte.
    buffer: u8,
    /// Bits of `buffer` already consumed (8 means a fill is needed).
    bit_pos: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bit_pos: 8,
            total_bits_read: 0,
        }
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Fetch the next byte. Returns `false` at end of stream.
    fn fill(&mut self) -> Result<bool> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(false),
                Ok(_) => {
                    self.buffer = byte[0];
                    self.bit_pos = 0;
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Read a single bit, or `None` once the stream is exhausted.
    pub fn try_read_bit(&mut self) -> Result<Option<bool>> {
        if self.bit_pos == 8 && !self.fill()? {
            return Ok(None);
        }

        let bit = (self.buffer >> (7 - self.bit_pos)) & 1 == 1;
        self.bit_pos += 1;
        self.total_bits_read += 1;
        Ok(Some(bit))
    }

    /// Read a single bit.
    ///
    /// Fails with [`OxiCodecError::UnexpectedEof`] once the stream is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        self.try_read_bit()?
            .ok_or_else(|| OxiCodecError::unexpected_eof(self.total_bits_read))
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// Bits accumulate in a one-byte buffer; each completed byte is written to
/// the underlying writer immediately. Call [`flush`](Self::flush) when done
/// to emit a trailing partial byte.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Partial byte, filled from bit 7 downward.
    buffer: u8,
    /// Number of bits in `buffer` (0-7).
    bit_pos: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bit_pos: 0,
            total_bits_written: 0,
        }
    }

    /// Flush any pending bits and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }

    /// Get the total number of bits written so far (excluding padding).
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        if bit {
            self.buffer |= 1 << (7 - self.bit_pos);
        }
        self.bit_pos += 1;
        self.total_bits_written += 1;

        if self.bit_pos == 8 {
            self.writer.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.bit_pos = 0;
        }
        Ok(())
    }

    /// Write every bit of a slice in order.
    pub fn write_slice(&mut self, bits: &[bool]) -> Result<()> {
        for &bit in bits {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Emit the pending partial byte (zero padded) and flush the writer.
    ///
    /// Does nothing to the stream when the buffer is empty, so an empty bit
    /// sequence produces zero bytes.
    pub fn flush(&mut self) -> Result<()> {
        if self.bit_pos > 0 {
            self.writer.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.bit_pos = 0;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitwriter_msb_first() {
        let mut output = Vec::new();
        let mut writer = BitWriter::new(&mut output);
        // 0b10110101 bit by bit
        for bit in [true, false, true, true, false, true, false, true] {
            writer.write_bit(bit).unwrap();
        }
        writer.flush().unwrap();
        assert_eq!(output, vec![0xB5]);
    }

    #[test]
    fn test_bitwriter_partial_byte_padded() {
        let mut output = Vec::new();
        let mut writer = BitWriter::new(&mut output);
        writer.write_slice(&[true, false, true]).unwrap();
        assert_eq!(writer.bits_written(), 3);
        writer.flush().unwrap();
        assert_eq!(output, vec![0b1010_0000]);
    }

    #[test]
    fn test_bitwriter_empty_flush() {
        let mut output = Vec::new();
        let mut writer = BitWriter::new(&mut output);
        writer.flush().unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_bitwriter_into_inner_flushes() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_slice(&[true; 4]).unwrap();
        let output = writer.into_inner().unwrap();
        assert_eq!(output, vec![0xF0]);
    }

    #[test]
    fn test_bitreader_basic() {
        let data = [0xB5u8];
        let mut reader = BitReader::new(&data[..]);
        let bits: Vec<bool> = (0..8).map(|_| reader.read_bit().unwrap()).collect();
        assert_eq!(bits, vec![true, false, true, true, false, true, false, true]);
        assert_eq!(reader.bits_read(), 8);
    }

    #[test]
    fn test_bitreader_eof() {
        let data = [0xFFu8];
        let mut reader = BitReader::new(&data[..]);
        for _ in 0..8 {
            assert!(reader.read_bit().unwrap());
        }
        assert_eq!(reader.try_read_bit().unwrap(), None);
        let err = reader.read_bit().unwrap_err();
        assert!(matches!(
            err,
            OxiCodecError::UnexpectedEof { bit_position: 8 }
        ));
    }

    #[test]
    fn test_roundtrip_across_bytes() {
        let bits: Vec<bool> = (0..15).map(|i| i % 3 != 1).collect();
        let mut output = Vec::new();
        let mut writer = BitWriter::new(&mut output);
        writer.write_slice(&bits).unwrap();
        assert_eq!(writer.bits_written(), 15);
        writer.flush().unwrap();
        assert_eq!(output.len(), 2);

        let mut reader = BitReader::new(&output[..]);
        let read: Vec<bool> = (0..15).map(|_| reader.read_bit().unwrap()).collect();
        assert_eq!(read, bits);
        // The sixteenth bit is padding.
        assert_eq!(reader.try_read_bit().unwrap(), Some(false));
        assert_eq!(reader.try_read_bit().unwrap(), None);
    }
}
