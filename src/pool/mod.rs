// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for the pool communication functionality
// of the LiteDuco miner, located in the pool subdirectory. It declares submodules
// and re-exports key types for use throughout the project.
//
// Tree Location:
// - src/pool/mod.rs (pool module entry point)
// - Submodules: client, locator, protocol

pub mod client;
pub mod locator;
pub mod protocol;

// Re-export key types for convenience
pub use client::{Dialer, PoolConnection, PoolTransport, TcpDialer, connect};
pub use locator::{HttpPoolLocator, PoolLocator, StaticPoolLocator, locate};
pub use protocol::JobProtocol;

// Changelog:
// - v2.0.0 (2026-10-19): Added the locator submodule for pool discovery and
//   replaced the Stratum messages submodule with the job protocol.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
