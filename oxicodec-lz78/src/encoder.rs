//! LZ78 encoder (compression).

use crate::dictionary::PhraseTrie;
use crate::token::Lz78Token;
use log::{debug, trace};

/// LZ78 encoder for compression.
#[derive(Debug, Default)]
pub struct Lz78Encoder {
    /// Phrases seen so far.
    dict: PhraseTrie,
}

impl Lz78Encoder {
    /// Create a new LZ78 encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode data into a sequence of LZ78 tokens.
    ///
    /// # Algorithm
    ///
    /// 1. Extend the working phrase one byte at a time while it is still a
    ///    known dictionary entry
    /// 2. On the first unknown extension, emit `(entry of the phrase so far,
    ///    byte)`, add the extended phrase as the next entry, and start over
    ///    from the empty phrase
    /// 3. If input ends inside a known phrase, emit one final token for it
    ///    (its parent entry plus its last byte) without adding an entry
    pub fn encode(&mut self, input: &[u8]) -> Vec<Lz78Token> {
        self.reset();

        let mut tokens = Vec::new();
        // Entry spelled by the working phrase, its parent, and its last byte.
        let mut current = 0;
        let mut parent = 0;
        let mut last = None;

        for &byte in input {
            match self.dict.child(current, byte) {
                Some(entry) => {
                    parent = current;
                    current = entry;
                    last = Some(byte);
                }
                None => {
                    let token = Lz78Token::new(current, byte);
                    let entry = self.dict.insert(current, byte);
                    trace!("lz78 token {} -> entry {}", token, entry);
                    tokens.push(token);

                    current = 0;
                    last = None;
                }
            }
        }

        if let Some(byte) = last {
            tokens.push(Lz78Token::new(parent, byte));
        }

        debug!(
            "lz78 encoded {} bytes into {} tokens ({} dictionary entries)",
            input.len(),
            tokens.len(),
            self.dict.len()
        );
        tokens
    }

    /// Number of dictionary entries after the last encode, including the
    /// empty phrase.
    pub fn dictionary_len(&self) -> usize {
        self.dict.len()
    }

    /// Reset the encoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}
