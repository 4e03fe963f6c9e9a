//! Caller-side policies for decoding

use super::error::{RsError, RsResult};

/// How [`decode_blocks`](super::batch::decode_blocks) spreads blocks over threads
///
/// Blocks are independent, so the only choices are whether to use rayon at
/// all and how large a pool to give it.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Pool size; 0 uses rayon's global pool sized to the machine
    pub threads: usize,
    /// `false` decodes every block on the calling thread
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            parallel: true,
        }
    }
}

impl BatchConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self { threads, parallel }
    }

    pub fn sequential() -> Self {
        Self::new(1, false)
    }

    /// Number of threads a batch will run on
    ///
    /// A value of 1 means blocks are decoded in order on the caller's thread.
    pub fn effective_threads(&self) -> usize {
        if !self.parallel {
            return 1;
        }
        match self.threads {
            0 => rayon::current_num_threads(),
            n => n,
        }
    }
}

/// How many erasures a caller is willing to hand to the decoder
///
/// PDF417 readers allow a few erasures beyond `num_correction_words / 2` so
/// that ambiguous codewords can be marked while still leaving room for
/// substitution errors. The decoder itself never applies this bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErasureBudget {
    /// Erasures tolerated beyond half the correction codewords
    pub slack: usize,
    /// Largest correction codeword count accepted at all
    pub max_correction_words: usize,
}

impl Default for ErasureBudget {
    fn default() -> Self {
        Self {
            slack: 3,
            max_correction_words: 512,
        }
    }
}

impl ErasureBudget {
    pub fn new(slack: usize, max_correction_words: usize) -> Self {
        Self {
            slack,
            max_correction_words,
        }
    }

    /// Largest erasure count admitted for `num_correction_words`
    pub fn limit(&self, num_correction_words: usize) -> usize {
        num_correction_words / 2 + self.slack
    }

    /// Reject an erasure count known to be beyond this policy before decoding
    pub fn admit(&self, erasures: usize, num_correction_words: usize) -> RsResult<()> {
        if num_correction_words > self.max_correction_words {
            return Err(RsError::TooManyCorrectionWords {
                num_correction_words,
                max: self.max_correction_words,
            });
        }
        let limit = self.limit(num_correction_words);
        if erasures > limit {
            return Err(RsError::TooManyErasures { erasures, limit });
        }
        Ok(())
    }
}
