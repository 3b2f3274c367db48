// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/engine.rs
// Version: 1.0.0
//
// This file contains the nonce search engine of the LiteDuco miner, located in
// the miner subdirectory. The engine is picked once at startup: the accelerated
// hasher when one is available, otherwise the portable brute-force search.
// Both return the smallest nonce in [0, 100 * difficulty] whose DUCO-S1 hash
// equals the job digest.
//
// Tree Location:
// - src/miner/engine.rs (nonce search strategies)
// - Depends on: sha1, crate::core

use crate::core::ducos1::{DIGEST_LEN, decode_digest};
#[cfg(feature = "fasthash")]
use crate::core::ducos1::write_decimal;
use crate::core::{Job, SearchResult};
use sha1::{Digest, Sha1};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// An external DUCO-S1 nonce finder
pub trait FastHasher: Send + Sync {
    fn name(&self) -> &'static str;

    /// Smallest nonce in `[start, 100 * difficulty]` whose digest equals `expected`
    fn find_nonce(&self, seed: &[u8], expected: &[u8; DIGEST_LEN], difficulty: u64, start: u64) -> Option<u64>;
}

/// Absorbs the seed once and clones the SHA-1 state for every nonce
#[cfg(feature = "fasthash")]
#[derive(Debug, Default, Clone, Copy)]
pub struct MidstateHasher;

#[cfg(feature = "fasthash")]
impl FastHasher for MidstateHasher {
    fn name(&self) -> &'static str {
        "midstate"
    }

    fn find_nonce(&self, seed: &[u8], expected: &[u8; DIGEST_LEN], difficulty: u64, start: u64) -> Option<u64> {
        let mut base = Sha1::new();
        base.update(seed);

        let mut digits = [0u8; 20];
        for nonce in start..=difficulty.saturating_mul(100) {
            let mut hasher = base.clone();
            hasher.update(write_decimal(nonce, &mut digits));
            if hasher.finalize().as_slice() == expected {
                return Some(nonce);
            }
        }
        None
    }
}

/// The accelerated hasher compiled into this build, if any
pub fn accelerated_hasher() -> Option<Arc<dyn FastHasher>> {
    #[cfg(feature = "fasthash")]
    {
        Some(Arc::new(MidstateHasher))
    }
    #[cfg(not(feature = "fasthash"))]
    {
        None
    }
}

/// Nonce search strategy shared by every worker of the process
#[derive(Clone)]
pub enum NonceSearchEngine {
    NativeFastHash(Arc<dyn FastHasher>),
    PureBruteForce,
}

impl fmt::Debug for NonceSearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonceSearchEngine::NativeFastHash(hasher) => write!(f, "NativeFastHash({})", hasher.name()),
            NonceSearchEngine::PureBruteForce => f.write_str("PureBruteForce"),
        }
    }
}

impl NonceSearchEngine {
    /// Pick the strategy for this process
    pub fn detect(disable_fast: bool) -> Self {
        match accelerated_hasher() {
            Some(hasher) if !disable_fast => NonceSearchEngine::NativeFastHash(hasher),
            _ => NonceSearchEngine::PureBruteForce,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NonceSearchEngine::NativeFastHash(_) => "fasthash",
            NonceSearchEngine::PureBruteForce => "brute-force",
        }
    }

    /// Search `job` to completion; the elapsed time covers the search only
    pub fn search(&self, job: &Job) -> SearchResult {
        match self {
            NonceSearchEngine::NativeFastHash(hasher) => fast_search(hasher.as_ref(), job),
            NonceSearchEngine::PureBruteForce => brute_force(job),
        }
    }
}

fn fast_search(hasher: &dyn FastHasher, job: &Job) -> SearchResult {
    // A digest that does not decode can never be matched
    let Some(expected) = decode_digest(&job.expected_hash) else {
        return SearchResult::exhausted();
    };

    let started = Instant::now();
    match hasher.find_nonce(job.job_id.as_bytes(), &expected, job.difficulty, 0) {
        Some(nonce) => SearchResult::found(nonce, started.elapsed()),
        None => SearchResult::exhausted(),
    }
}

/// Portable search comparing hex digests for every nonce from 0 upward
pub fn brute_force(job: &Job) -> SearchResult {
    let started = Instant::now();
    let mut base = Sha1::new();
    base.update(job.job_id.as_bytes());

    for nonce in 0..=job.max_nonce() {
        let mut hasher = base.clone();
        hasher.update(nonce.to_string().as_bytes());
        if hex::encode(hasher.finalize()).eq_ignore_ascii_case(&job.expected_hash) {
            return SearchResult::found(nonce, started.elapsed());
        }
    }

    SearchResult::exhausted()
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial nonce search engine.
//   - NativeFastHash wraps any FastHasher; MidstateHasher ships behind the
//     "fasthash" feature.
//   - PureBruteForce hex-compares every nonce in [0, 100 * difficulty].
//   - Both time the search alone to derive the hash rate.
