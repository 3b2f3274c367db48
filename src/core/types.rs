// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
//
// This file defines core data structures for the LiteDuco miner, located in the
// core subdirectory. It includes types for command-line arguments, pool
// endpoints, jobs, search results, pool feedback and per-worker configuration.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Default pool discovery endpoint
pub const DEFAULT_DISCOVERY_URL: &str = "https://server.duinocoin.com/getPool";

/// Difficulty tier requested from the pool with every job
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyPreference {
    Low,
    Medium,
}

impl DifficultyPreference {
    /// Wire spelling used in the job request
    pub const fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreference::Low => "LOW",
            DifficultyPreference::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for DifficultyPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command-line arguments for the LiteDuco miner
#[derive(Parser, Debug)]
#[command(
    name = "liteduco-miner",
    version,
    about = "Lightweight Duino-Coin (DUCO-S1) CPU miner",
    long_about = "LiteDuco Miner looks up a Duino-Coin pool, requests jobs over the plain-text\n\
                  pool protocol and searches for DUCO-S1 nonces on every configured thread.\n\n\
                  Examples:\n\
                    Mining: liteduco-miner -u alice -k mykey --threads 4\n\
                    Medium difficulty: liteduco-miner -u alice --difficulty medium\n\
                    Fixed pool: liteduco-miner -u alice --pool 192.168.1.20:2813"
)]
pub struct Args {
    /// Duino-Coin account that receives the rewards
    #[arg(short = 'u', long = "username", value_name = "NAME")]
    pub username: String,

    /// Mining key configured in the wallet ('None' when the account has no key)
    #[arg(short = 'k', long = "mining-key", value_name = "KEY", default_value = "None")]
    pub mining_key: String,

    /// Job difficulty tier requested from the pool
    #[arg(short = 'd', long, value_enum, default_value = "low")]
    pub difficulty: DifficultyPreference,

    /// Number of mining threads (0 = one per available core)
    #[arg(short, long, default_value = "0", value_name = "COUNT")]
    pub threads: usize,

    /// Prefix of the worker tag reported with each share; the thread id is appended
    #[arg(long, default_value = "LiteDucoMiner", value_name = "PREFIX")]
    pub rig_prefix: String,

    /// HTTP endpoint returning the pool to mine on
    #[arg(long, default_value = DEFAULT_DISCOVERY_URL, value_name = "URL")]
    pub discovery_url: String,

    /// Mine on a fixed pool instead of asking the discovery endpoint
    #[arg(short = 'o', long = "pool", value_name = "HOST:PORT")]
    pub pool: Option<String>,

    /// Deadline for pool socket operations in seconds (0 = wait forever)
    #[arg(long, default_value = "60", value_name = "SECONDS")]
    pub io_timeout: u64,

    /// Use the portable brute-force search even when the accelerated hasher is built in
    #[arg(long, default_value = "false")]
    pub no_fasthash: bool,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username is required. Use --username YOUR_NAME".to_string());
        }
        if self.username.contains(',') || self.mining_key.contains(',') {
            return Err("Username and mining key cannot contain commas".to_string());
        }
        if self.rig_prefix.contains(',') {
            return Err("Rig prefix cannot contain commas".to_string());
        }

        if let Some(ref pool) = self.pool {
            let Some((host, port)) = pool.rsplit_once(':') else {
                return Err("Pool address must be in format HOST:PORT (e.g., 192.168.1.20:2813)".to_string());
            };
            if host.is_empty() {
                return Err("Pool host cannot be empty".to_string());
            }
            if port.parse::<u16>().is_err() {
                return Err("Pool port must be a valid number (1-65535)".to_string());
            }
        }

        if self.threads > 1024 {
            return Err("Thread count cannot exceed 1024".to_string());
        }

        Ok(())
    }

    /// Socket deadline derived from --io-timeout
    pub fn io_timeout(&self) -> Option<Duration> {
        (self.io_timeout > 0).then(|| Duration::from_secs(self.io_timeout))
    }
}

/// Network location of a pool, resolved fresh on every (re)connection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PoolEndpoint {
    #[serde(rename = "ip")]
    pub address: String,
    pub port: u16,
}

impl fmt::Display for PoolEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}

/// A unit of work handed out by the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// ASCII seed the nonce is appended to
    pub job_id: String,

    /// Lowercase hex SHA-1 digest the search must reproduce
    pub expected_hash: String,

    /// Bounds the search to [0, 100 * difficulty]
    pub difficulty: u64,
}

impl Job {
    /// Largest nonce the search visits (inclusive)
    pub fn max_nonce(&self) -> u64 {
        self.difficulty.saturating_mul(100)
    }
}

/// Outcome of one nonce search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub nonce: u64,
    pub hash_rate: f64,
    pub found: bool,
}

impl SearchResult {
    /// Result of a search that matched at `nonce` after `elapsed`
    pub fn found(nonce: u64, elapsed: Duration) -> Self {
        let seconds = elapsed.as_secs_f64();
        let hash_rate = if seconds > 0.0 { nonce as f64 / seconds } else { 0.0 };
        Self { nonce, hash_rate, found: true }
    }

    /// Result of a search that ran out of nonces
    pub fn exhausted() -> Self {
        Self { nonce: 0, hash_rate: 0.0, found: false }
    }
}

/// Pool verdict on a submitted share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub accepted: bool,
}

/// Immutable per-worker configuration fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerContext {
    pub username: String,
    pub mining_key: String,
    pub difficulty_preference: DifficultyPreference,
    pub thread_id: usize,
    pub rig_prefix: String,
}

impl WorkerContext {
    /// Tag identifying this worker in share submissions
    pub fn worker_tag(&self) -> String {
        format!("{}{}", self.rig_prefix, self.thread_id)
    }
}

/// Fixed-interval backoff for the three unbounded retry loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Pause after a failed pool lookup
    pub discovery: Duration,

    /// Pause after a failed socket connect
    pub connect: Duration,

    /// Pause after a fault in an active session
    pub fatal: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            discovery: Duration::from_secs(15),
            connect: Duration::from_secs(10),
            fatal: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Zero-interval policy, retries happen back to back
    pub fn immediate() -> Self {
        Self {
            discovery: Duration::ZERO,
            connect: Duration::ZERO,
            fatal: Duration::ZERO,
        }
    }
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial DUCO-S1 data model.
//   - Args now carries username, mining key, difficulty tier, thread count,
//     rig prefix, discovery URL, optional fixed pool and socket deadline.
//   - PoolEndpoint deserializes straight from the discovery JSON ({"ip", "port"}).
//   - SearchResult carries an explicit `found` flag so a match at nonce 0 is
//     distinguishable from an exhausted search.
//   - RetryPolicy holds the 15s/10s/5s backoff intervals as plain values.
