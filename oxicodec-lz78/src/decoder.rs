//! LZ78 decoder (decompression).

use crate::dictionary::PhraseList;
use crate::token::Lz78Token;
use log::debug;
use oxicodec_core::Result;

/// LZ78 decoder for decompression.
///
/// The dictionary is rebuilt by replaying tokens in order: every token adds
/// exactly one entry, so after `k` tokens the dictionary holds `k + 1`
/// entries (counting the empty phrase).
#[derive(Debug, Default)]
pub struct Lz78Decoder {
    dict: PhraseList,
    output: Vec<u8>,
}

impl Lz78Decoder {
    /// Create a new LZ78 decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one token, appending its phrase to the output and dictionary.
    ///
    /// Fails with `InvalidIndex` if the token references an entry that
    /// has not been created yet.
    pub fn apply(&mut self, token: &Lz78Token) -> Result<()> {
        let phrase = self.dict.extend(token.index, token.literal)?;
        self.output.extend_from_slice(phrase);
        Ok(())
    }

    /// Decode a complete token sequence.
    pub fn decode(&mut self, tokens: &[Lz78Token]) -> Result<Vec<u8>> {
        self.reset();
        for token in tokens {
            self.apply(token)?;
        }

        debug!(
            "lz78 decoded {} tokens into {} bytes ({} dictionary entries)",
            tokens.len(),
            self.output.len(),
            self.dict.len()
        );
        Ok(std::mem::take(&mut self.output))
    }

    /// Current dictionary size, including the empty phrase.
    pub fn dictionary_len(&self) -> usize {
        self.dict.len()
    }

    /// The dictionary rebuilt so far.
    pub fn dictionary(&self) -> &PhraseList {
        &self.dict
    }

    /// Reset the decoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
        self.output.clear();
    }
}
