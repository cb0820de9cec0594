//! LZ78 phrase dictionaries.
//!
//! The encoder and decoder keep different views of the same dictionary:
//! the encoder needs "which entry is this phrase plus one byte", the decoder
//! needs "what bytes does entry N spell". Entry 0 is the empty phrase in both
//! and is never stored explicitly by the encoder.

use oxicodec_core::{OxiCodecError, Result};
use std::collections::HashMap;

/// Encoder-side dictionary: a trie keyed by `(parent entry, next byte)`.
#[derive(Debug, Default)]
pub struct PhraseTrie {
    /// `(parent, byte) -> entry`.
    children: HashMap<(usize, u8), usize>,
}

impl PhraseTrie {
    /// Create an empty dictionary (only the implicit empty phrase).
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry spelling `parent`'s phrase followed by `byte`, if known.
    pub fn child(&self, parent: usize, byte: u8) -> Option<usize> {
        self.children.get(&(parent, byte)).copied()
    }

    /// Add `parent`'s phrase followed by `byte`; returns the new entry index.
    pub fn insert(&mut self, parent: usize, byte: u8) -> usize {
        let index = self.next_index();
        self.children.insert((parent, byte), index);
        index
    }

    /// Index the next inserted entry will receive.
    pub fn next_index(&self) -> usize {
        self.children.len() + 1
    }

    /// Number of entries, including the implicit empty phrase.
    pub fn len(&self) -> usize {
        self.children.len() + 1
    }

    /// Whether only the implicit empty phrase is present.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        self.children.clear();
    }
}

/// Decoder-side dictionary: entry index to phrase bytes.
#[derive(Debug)]
pub struct PhraseList {
    entries: Vec<Vec<u8>>,
}

impl PhraseList {
    /// Create a dictionary seeded with the empty phrase at index 0.
    pub fn new() -> Self {
        Self {
            entries: vec![Vec::new()],
        }
    }

    /// Phrase stored at `index`.
    pub fn get(&self, index: usize) -> Result<&[u8]> {
        self.entries
            .get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| OxiCodecError::invalid_index(index, self.entries.len()))
    }

    /// Append `entries[index] + literal` and return the new phrase.
    pub fn extend(&mut self, index: usize, literal: u8) -> Result<&[u8]> {
        let mut phrase = self.get(index)?.to_vec();
        phrase.push(literal);
        self.entries.push(phrase);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Number of entries, including the empty phrase.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the empty phrase is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over phrases in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(Vec::as_slice)
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        self.entries.truncate(1);
    }
}

impl Default for PhraseList {
    fn default() -> Self {
        Self::new()
    }
}
