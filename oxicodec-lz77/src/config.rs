//! LZ77 encoder configuration.

use oxicodec_core::{OxiCodecError, Result};

/// Default sliding window size, in bytes.
pub const DEFAULT_WINDOW: usize = 20;

/// LZ77 configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Config {
    /// Number of already-processed bytes eligible as a match start.
    pub window: usize,
}

impl Lz77Config {
    /// Default configuration (20-byte window).
    pub const DEFAULT: Self = Self {
        window: DEFAULT_WINDOW,
    };

    /// Create a configuration with the given window size.
    ///
    /// The window must be at least one byte.
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(OxiCodecError::invalid_config(
                "LZ77 window size must be positive",
            ));
        }
        Ok(Self { window })
    }

    /// First position eligible as a match start for the cursor at `pos`.
    pub fn window_start(&self, pos: usize) -> usize {
        pos.saturating_sub(self.window)
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
