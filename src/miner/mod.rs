// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for the miner functionality of the LiteDuco
// miner, located in the miner subdirectory. It declares submodules and re-exports
// key types for use throughout the project.
//
// Tree Location:
// - src/miner/mod.rs (miner module entry point)
// - Submodules: cpu, engine, stats

pub mod cpu;
pub mod engine;
pub mod stats;

// Re-export key types for convenience
pub use cpu::{Worker, WorkerPool, WorkerState};
pub use engine::{FastHasher, NonceSearchEngine};
pub use stats::WorkerStats;

// Changelog:
// - v2.0.0 (2026-10-19): Dropped the gpu submodule and added engine, which
//   holds the nonce search strategies.
// - v1.1.0 (2025-06-24): Added GPU mining module.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
