//! LZ77 encoder (compression).

use crate::config::Lz77Config;
use crate::token::Lz77Token;
use log::{debug, trace};

/// A match found in the sliding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match {
    /// Distance back from the cursor.
    pub offset: usize,
    /// Match length in bytes.
    pub length: usize,
}

/// LZ77 encoder for compression.
#[derive(Debug, Clone, Default)]
pub struct Lz77Encoder {
    config: Lz77Config,
}

impl Lz77Encoder {
    /// Create a new LZ77 encoder with the given configuration.
    pub fn new(config: Lz77Config) -> Self {
        Self { config }
    }

    /// Get the encoder configuration.
    pub fn config(&self) -> &Lz77Config {
        &self.config
    }

    /// Find the longest match for the bytes at `pos`.
    ///
    /// Candidate starts are scanned left to right over
    /// `[pos - window, pos)`; only a strictly longer match replaces the
    /// current best, so ties keep the earliest start. A match may run past
    /// `pos` into the bytes it is itself describing.
    pub fn find_longest_match(&self, input: &[u8], pos: usize) -> Match {
        let mut best = Match::default();

        for start in self.config.window_start(pos)..pos {
            let length = input[pos..]
                .iter()
                .zip(&input[start..])
                .take_while(|(a, b)| a == b)
                .count();

            if length > best.length {
                best = Match {
                    offset: pos - start,
                    length,
                };
            }
        }

        best
    }

    /// Encode data into a sequence of LZ77 tokens.
    ///
    /// # Algorithm
    ///
    /// 1. Find the longest match for the cursor position in the window
    /// 2. Emit `(offset, length, next byte)`; the literal is absent when the
    ///    match consumes the rest of the input
    /// 3. Advance the cursor by `length + 1`
    pub fn encode(&self, input: &[u8]) -> Vec<Lz77Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < input.len() {
            let found = self.find_longest_match(input, pos);
            let literal = input.get(pos + found.length).copied();

            let token = Lz77Token::reference(found.offset, found.length, literal);
            trace!("lz77 token at {}: {}", pos, token);
            tokens.push(token);

            pos += found.length + 1;
        }

        debug!(
            "lz77 encoded {} bytes into {} tokens (window {})",
            input.len(),
            tokens.len(),
            self.config.window
        );
        tokens
    }
}
