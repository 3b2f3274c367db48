// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for statistics tracking in the LiteDuco
// miner, located in the stats subdirectory of the miner module.
//
// Tree Location:
// - src/miner/stats/mod.rs (stats module entry point)
// - Submodules: worker_stats

pub mod worker_stats;

pub use worker_stats::WorkerStats;

// Changelog:
// - v2.0.0 (2026-10-19): Replaced miner_stats, thread_stats and gpu_info with
//   the per-worker worker_stats submodule.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
