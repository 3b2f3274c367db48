// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
//
// This file serves as the main library entry point for the LiteDuco miner,
// located at the root of the source tree. It exports all public modules
// and types that other crates or binaries can use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, miner, pool, utils

pub mod core;
pub mod miner;
pub mod pool;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::{Job, PoolError, RetryPolicy, SearchResult, WorkerContext};
pub use crate::miner::{NonceSearchEngine, Worker, WorkerPool, WorkerState};
pub use crate::pool::{HttpPoolLocator, JobProtocol, PoolConnection, StaticPoolLocator, TcpDialer};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.0.0 (2026-10-19): Library root for the DUCO-S1 miner.
//   - Exports core, miner, pool and utils; dropped benchmark, help and tui.
//   - Re-exports the worker, engine and pool types main.rs wires together.
