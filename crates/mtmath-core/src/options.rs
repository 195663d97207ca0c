//! Arithmetic options and configuration.

use crate::constants::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_RADIX, MAX_RADIX, MIN_RADIX};

/// Options for arithmetic and formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Operand size (in bytes) above which multiplication runs in parallel.
    pub parallel_threshold: usize,
    /// Radix used when rendering results.
    pub output_radix: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            output_radix: DEFAULT_RADIX,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero or out of range.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        if !(MIN_RADIX..=MAX_RADIX).contains(&self.output_radix) {
            self.output_radix = DEFAULT_RADIX;
        }
        self
    }
}
