// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/worker_stats.rs
// Version: 2.1.0
//
// This file implements per-worker statistics tracking for the LiteDuco miner,
// located in the stats subdirectory of the miner module. Each worker owns its
// own instance; nothing here is shared between workers.
//
// Tree Location:
// - src/miner/stats/worker_stats.rs (per-worker statistics logic)
// - Depends on: crate::utils::format

use crate::utils::format::FormatUtils;

#[derive(Debug)]
pub struct WorkerStats {
    pub shares_accepted: u64,
    pub shares_rejected: u64,
    pub searches_exhausted: u64,
    pub reconnects: u64,
    last_hashrate: f64,
}

impl Default for WorkerStats {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerStats {
    pub fn new() -> Self {
        Self {
            shares_accepted: 0,
            shares_rejected: 0,
            searches_exhausted: 0,
            reconnects: 0,
            last_hashrate: 0.0,
        }
    }

    /// Record the pool verdict on one share
    pub fn record_share(&mut self, accepted: bool, hashrate: f64) {
        if accepted {
            self.shares_accepted += 1;
        } else {
            self.shares_rejected += 1;
        }
        self.last_hashrate = hashrate;
    }

    pub fn record_exhausted(&mut self) {
        self.searches_exhausted += 1;
    }

    pub fn record_reconnect(&mut self) {
        self.reconnects += 1;
    }

    pub fn last_hashrate(&self) -> f64 {
        self.last_hashrate
    }

    /// `accepted/rejected`, as printed in the share status line
    pub fn share_summary(&self) -> String {
        format!("{}/{}", self.shares_accepted, self.shares_rejected)
    }

    /// Status line for the share recorded last, e.g.
    /// `[T0] Accepted share 1234 - 56 kH/s (Diff 6) [12/1]`
    pub fn status_line(&self, thread_id: usize, accepted: bool, nonce: u64, difficulty: u64) -> String {
        format!(
            "[T{}] {} share {} - {} (Diff {}) [{}]",
            thread_id,
            if accepted { "Accepted" } else { "Rejected" },
            nonce,
            FormatUtils::format_hashrate(self.last_hashrate),
            difficulty,
            self.share_summary()
        )
    }
}

// Changelog:
// - v2.1.0 (2026-10-20): Status line built here from the recorded share.
//   - Dropped peak hashrate, best difficulty and last share time, which no
//     output ever showed.
// - v2.0.0 (2026-10-19): Reworked ThreadStats into WorkerStats.
//   - Owned by a single worker, so counters are plain integers instead of
//     atomics behind Arc/Mutex.
//   - Tracks the hash rate reported with each share rather than sampling a
//     running hash counter.
//   - Added exhausted-search and reconnect counters.
// - v1.0.1 (2025-06-14): Added peak hashrate tracking for benchmarking.
