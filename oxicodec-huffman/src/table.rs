//! Code tables and their text serialization.
//!
//! A [`CodeTable`] maps each symbol to its code and is the only model the
//! decoder needs: frequencies are not persisted.
//!
//! # Table Formats
//!
//! [`TableFormat::Legacy`] is one record per line:
//!
//! ```text
//! <symbol byte> <space> <code>\n
//! ```
//!
//! The symbol is always the first byte of a record, written raw, except that
//! a space is written as `_` and the pseudo-EOF as byte 0x81. Consequently a
//! literal `_` or 0x81 data byte cannot be told apart from those escapes;
//! writing such a table fails with `AmbiguousSymbol` instead of producing an
//! unreadable file.
//!
//! [`TableFormat::Hex`] avoids the problem by writing each symbol as two hex
//! digits, or `EOF`:
//!
//! ```text
//! 61 0
//! 62 10
//! EOF 111
//! ```

use crate::code::Code;
use crate::symbol::{ALPHABET_SIZE, LEGACY_EOF_BYTE, Symbol};
use oxicodec_core::{OxiCodecError, Result};
use std::io::{Read, Write};

/// Escape written in place of a space symbol in legacy tables.
const SPACE_ESCAPE: u8 = b'_';

/// Text layout of a persisted code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Raw symbol byte, `_` for space, 0x81 for the pseudo-EOF.
    #[default]
    Legacy,
    /// Two hex digits per symbol, `EOF` for the pseudo-EOF.
    Hex,
}

/// Ordered symbol → code mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    /// Records in table order.
    entries: Vec<(Symbol, Code)>,
    /// Symbol index → position in `entries`.
    lookup: Vec<Option<usize>>,
}

impl CodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            lookup: vec![None; ALPHABET_SIZE],
        }
    }

    /// Add a record. Fails if the symbol already has a code.
    pub fn insert(&mut self, symbol: Symbol, code: Code) -> Result<()> {
        if self.lookup[symbol.index()].is_some() {
            return Err(OxiCodecError::malformed_table(
                self.entries.len() + 1,
                format!("duplicate symbol {}", symbol),
            ));
        }
        self.push_unchecked(symbol, code);
        Ok(())
    }

    /// Add a record for a symbol known to be absent.
    pub(crate) fn push_unchecked(&mut self, symbol: Symbol, code: Code) {
        self.lookup[symbol.index()] = Some(self.entries.len());
        self.entries.push((symbol, code));
    }

    /// Code assigned to `symbol`.
    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.lookup[symbol.index()].map(|i| &self.entries[i].1)
    }

    /// Records in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> {
        self.entries.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether no code is a prefix of (or equal to) another code.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Code> = self.entries.iter().map(|(_, code)| code).collect();
        // After sorting, a prefix sorts directly before some code it prefixes.
        codes.sort_by(|a, b| a.bits().cmp(b.bits()));
        codes.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    /// Longest code length, in bits.
    pub fn max_code_len(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, code)| code.len())
            .max()
            .unwrap_or(0)
    }

    /// Serialize the table.
    pub fn write_to<W: Write>(&self, mut writer: W, format: TableFormat) -> Result<()> {
        for (symbol, code) in &self.entries {
            match format {
                TableFormat::Legacy => writer.write_all(&[legacy_symbol_byte(*symbol)?])?,
                TableFormat::Hex => match symbol {
                    Symbol::Byte(b) => write!(writer, "{:02x}", b)?,
                    Symbol::Eof => writer.write_all(b"EOF")?,
                },
            }
            writeln!(writer, " {}", code)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Serialize the table into a byte vector.
    pub fn to_bytes(&self, format: TableFormat) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_to(&mut out, format)?;
        Ok(out)
    }

    /// Parse a table from a reader.
    pub fn read_from<R: Read>(mut reader: R, format: TableFormat) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data, format)
    }

    /// Parse a table from bytes.
    pub fn from_bytes(data: &[u8], format: TableFormat) -> Result<Self> {
        match format {
            TableFormat::Legacy => parse_legacy(data),
            TableFormat::Hex => parse_hex(data),
        }
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte written for `symbol` in a legacy table.
fn legacy_symbol_byte(symbol: Symbol) -> Result<u8> {
    match symbol {
        Symbol::Eof => Ok(LEGACY_EOF_BYTE),
        Symbol::Byte(b' ') => Ok(SPACE_ESCAPE),
        Symbol::Byte(b @ (SPACE_ESCAPE | LEGACY_EOF_BYTE)) => {
            Err(OxiCodecError::ambiguous_symbol(b))
        }
        Symbol::Byte(b) => Ok(b),
    }
}

/// Strip a trailing carriage return.
fn trim_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn parse_legacy(data: &[u8]) -> Result<CodeTable> {
    let mut table = CodeTable::new();
    let mut pos = 0;
    let mut line = 0;

    while pos < data.len() {
        // A record is "<symbol> <code>"; a newline not followed by a space
        // is a blank line rather than a newline symbol.
        if matches!(data[pos], b'\n' | b'\r') && data.get(pos + 1) != Some(&b' ') {
            pos += 1;
            continue;
        }
        line += 1;

        let symbol = match data[pos] {
            LEGACY_EOF_BYTE => Symbol::Eof,
            SPACE_ESCAPE => Symbol::Byte(b' '),
            b => Symbol::Byte(b),
        };
        if data.get(pos + 1) != Some(&b' ') {
            return Err(OxiCodecError::malformed_table(
                line,
                "expected a space after the symbol",
            ));
        }

        let code_start = pos + 2;
        let code_end = data[code_start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(data.len(), |n| code_start + n);
        let code = Code::parse(trim_cr(&data[code_start..code_end]), line)?;

        table.insert(symbol, code)?;
        pos = code_end + 1;
    }

    Ok(table)
}

fn parse_hex(data: &[u8]) -> Result<CodeTable> {
    let text = std::str::from_utf8(data)
        .map_err(|_| OxiCodecError::malformed_table(0, "hex code table is not valid UTF-8"))?;
    let mut table = CodeTable::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let (token, code) = raw
            .split_once(' ')
            .ok_or_else(|| OxiCodecError::malformed_table(line, "expected '<symbol> <code>'"))?;
        let symbol = if token == "EOF" {
            Symbol::Eof
        } else if token.len() == 2 {
            let byte = u8::from_str_radix(token, 16).map_err(|_| {
                OxiCodecError::malformed_table(line, format!("invalid symbol {:?}", token))
            })?;
            Symbol::Byte(byte)
        } else {
            return Err(OxiCodecError::malformed_table(
                line,
                format!("invalid symbol {:?}", token),
            ));
        };

        table.insert(symbol, Code::parse(code.trim_end().as_bytes(), line)?)?;
    }

    Ok(table)
}
