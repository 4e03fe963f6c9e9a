//! Decoding many independent blocks at once
//!
//! Symbols split their codewords over several interleaved Reed-Solomon blocks.
//! Each block is corrected on its own, so the blocks of one symbol (or of many
//! symbols) can be decoded in parallel against one shared decoder.

use super::config::BatchConfig;
use super::decoder::ReedSolomonDecoder;
use super::error::RsResult;
use log::{debug, warn};
use rayon::prelude::*;

/// One block to correct in place
#[derive(Debug)]
pub struct BlockJob<'a> {
    pub codewords: &'a mut [u16],
    pub num_correction_words: usize,
    pub erasures: &'a [usize],
}

impl<'a> BlockJob<'a> {
    pub fn new(codewords: &'a mut [u16], num_correction_words: usize) -> Self {
        Self {
            codewords,
            num_correction_words,
            erasures: &[],
        }
    }

    pub fn with_erasures(mut self, erasures: &'a [usize]) -> Self {
        self.erasures = erasures;
        self
    }

    fn run(&mut self, decoder: &ReedSolomonDecoder<'_>) -> RsResult<usize> {
        decoder.decode(self.codewords, self.num_correction_words, self.erasures)
    }
}

/// Decode every job, returning one result per job in input order
///
/// A failed block does not stop the others; its codewords are left untouched.
pub fn decode_blocks(
    decoder: &ReedSolomonDecoder<'_>,
    jobs: &mut [BlockJob<'_>],
    config: &BatchConfig,
) -> Vec<RsResult<usize>> {
    let threads = config.effective_threads();
    debug!("Decoding {} blocks on {} threads", jobs.len(), threads);

    if threads <= 1 || jobs.len() < 2 {
        return jobs.iter_mut().map(|job| job.run(decoder)).collect();
    }

    if config.threads == 0 {
        return jobs.par_iter_mut().map(|job| job.run(decoder)).collect();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(|| jobs.par_iter_mut().map(|job| job.run(decoder)).collect()),
        Err(e) => {
            warn!(
                "Could not build a pool of {} threads ({}), decoding sequentially",
                threads, e
            );
            jobs.iter_mut().map(|job| job.run(decoder)).collect()
        }
    }
}
