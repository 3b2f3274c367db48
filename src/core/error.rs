// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 1.1.0
//
// This file defines the error taxonomy shared by pool discovery, the pool
// connection and the job protocol, located in the core subdirectory.
//
// Tree Location:
// - src/core/error.rs (pool fault taxonomy)
// - Depends on: thiserror, reqwest

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Pool discovery failed: {message}")]
    Discovery { message: String },

    #[error("Pool discovery request failed: {source}")]
    DiscoveryRequest {
        #[from]
        source: reqwest::Error,
    },

    #[error("Failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Pool socket I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Pool closed the connection")]
    ConnectionClosed,

    #[error("Pool did not answer within {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Malformed job from pool: expected 3 fields, got {fields} ({raw:?})")]
    MalformedJob { fields: usize, raw: String },

    #[error("Invalid job from pool: {message}")]
    InvalidJob { message: String },

    #[error("Nonce search aborted: {message}")]
    SearchAborted { message: String },
}

impl PoolError {
    /// A response that parsed but did not look like a job
    pub fn is_malformed_job(&self) -> bool {
        matches!(self, PoolError::MalformedJob { .. })
    }
}

// Changelog:
// - v1.1.0 (2026-10-20): Added SearchAborted for a search task that panics.
// - v1.0.0 (2026-10-19): Initial pool error taxonomy.
//   - Discovery faults (retried at the discovery interval), connect faults
//     (retried at the connect interval), and session faults (Io,
//     ConnectionClosed, Timeout, InvalidJob) that end a Worker session.
//   - MalformedJob is kept distinct so the Worker can reconnect without the
//     fatal-fault pause.
