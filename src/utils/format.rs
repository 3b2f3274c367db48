// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.1.0
//
// This file provides utility functions for formatting statistics in the LiteDuco
// miner, located in the utils subdirectory.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

/// Utility functions for formatting miner statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format hashrate in appropriate units (H/s, kH/s, MH/s)
    pub fn format_hashrate(hashrate: f64) -> String {
        if hashrate >= 1_000_000.0 {
            format!("{:.2} MH/s", hashrate / 1_000_000.0)
        } else if hashrate >= 1_000.0 {
            format!("{} kH/s", (hashrate / 1_000.0) as u64)
        } else {
            format!("{:.0} H/s", hashrate)
        }
    }
}

// Changelog:
// - v1.1.0 (2026-10-19): Trimmed to hashrate formatting.
//   - kH/s is printed as a whole number, as pool dashboards show it.
//   - Dropped GH/s, duration and number formatting.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
