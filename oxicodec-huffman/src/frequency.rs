//! Symbol frequency counting.

use crate::symbol::Symbol;

/// Occurrence counts for every byte value, plus the implicit pseudo-EOF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.add_bytes(data);
        table
    }

    /// Count additional bytes.
    pub fn add_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
    }

    /// Frequency of a symbol; the pseudo-EOF always counts once.
    pub fn get(&self, symbol: Symbol) -> u64 {
        match symbol {
            Symbol::Byte(b) => self.counts[b as usize],
            Symbol::Eof => 1,
        }
    }

    /// Total number of data bytes counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of distinct byte values that occur.
    pub fn distinct_bytes(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Occurring symbols and their frequencies: bytes in ascending order,
    /// then the pseudo-EOF with frequency 1.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(byte, &count)| (Symbol::Byte(byte as u8), count))
            .chain(std::iter::once((Symbol::Eof, 1)))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
