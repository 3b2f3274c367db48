// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/cpu/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for the CPU mining functionality of the
// LiteDuco miner, located in the cpu subdirectory of the miner module. It declares
// submodules and re-exports key types for use throughout the project.
//
// Tree Location:
// - src/miner/cpu/mod.rs (CPU miner module entry point)
// - Submodules: miner, thread

pub mod miner;
pub mod thread;

// Re-export key types for convenience
pub use miner::{WorkerPool, clamp_threads};
pub use thread::{Worker, WorkerState};

// Changelog:
// - v2.0.0 (2026-10-19): Re-exports WorkerPool and the Worker state machine in
//   place of CpuMiner.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
