// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the core functionality of the LiteDuco
// miner, located in the core subdirectory. It declares submodules and re-exports
// key types for use throughout the project.

pub mod ducos1;
pub mod error;
pub mod types;

// Re-export the most commonly used items
pub use ducos1::{ducos1_digest, ducos1_hash_hex};
pub use error::PoolError;
pub use types::{
    Args, DifficultyPreference, Feedback, Job, PoolEndpoint, RetryPolicy, SearchResult,
    WorkerContext,
};

// Changelog:
// - v1.0.0 (2026-10-19): Reorganized around DUCO-S1.
//   - Replaced sha3x, sha256 and difficulty with ducos1.
//   - Added the error module holding PoolError.
