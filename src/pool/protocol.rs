// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/protocol.rs
// Version: 2.0.0
//
// This file implements the Duino-Coin job protocol for communication with the
// mining pool in the LiteDuco miner, located in the pool subdirectory. It builds
// job requests and share submissions and parses jobs and share feedback.
//
// Tree Location:
// - src/pool/protocol.rs (job protocol logic)
// - Depends on: crate::core::types, crate::pool::client

use crate::core::{Feedback, Job, PoolError, SearchResult, WorkerContext};
use crate::pool::client::PoolTransport;
use tracing::debug;

const LOG_TARGET: &str = "liteduco::pool::protocol";

/// Largest job response read from the pool
pub const JOB_RESPONSE_MAX_BYTES: usize = 1024;

/// Largest share feedback read from the pool
pub const FEEDBACK_MAX_BYTES: usize = 1024;

/// Feedback text marking an accepted share; anything else is a rejection
pub const ACCEPT_TOKEN: &str = "GOOD";

/// Builds and parses the comma-separated pool messages
pub struct JobProtocol;

impl JobProtocol {
    /// `JOB,<username>,<LOW|MEDIUM>,<mining_key>`
    pub fn create_job_request(context: &WorkerContext) -> String {
        format!(
            "JOB,{},{},{}",
            context.username,
            context.difficulty_preference.as_str(),
            context.mining_key
        )
    }

    /// Parse `<job_id>,<expected_hash_hex>,<difficulty>`
    pub fn parse_job(response: &str) -> Result<Job, PoolError> {
        let fields: Vec<&str> = response.split(',').collect();
        if fields.len() < 3 {
            return Err(PoolError::MalformedJob {
                fields: fields.len(),
                raw: response.to_string(),
            });
        }
        if fields.len() > 3 {
            debug!(target: LOG_TARGET, "Ignoring {} extra job field(s)", fields.len() - 3);
        }

        let difficulty = fields[2].trim().parse::<u64>().map_err(|_| PoolError::InvalidJob {
            message: format!("difficulty {:?} is not an unsigned integer", fields[2]),
        })?;

        Ok(Job {
            job_id: fields[0].to_string(),
            expected_hash: fields[1].to_string(),
            difficulty,
        })
    }

    /// `<nonce>,<hash_rate>,<worker_tag>`; an exhausted search reports zeros
    pub fn create_submit_message(result: &SearchResult, worker_tag: &str) -> String {
        let (nonce, hash_rate) = if result.found {
            (result.nonce, result.hash_rate)
        } else {
            (0, 0.0)
        };
        format!("{},{},{}", nonce, hash_rate, worker_tag)
    }

    /// Exact match against the accept token
    pub fn parse_feedback(response: &str) -> Feedback {
        Feedback { accepted: response == ACCEPT_TOKEN }
    }

    /// Ask the pool for a job
    pub async fn request_job<T: PoolTransport + ?Sized>(
        transport: &mut T,
        context: &WorkerContext,
    ) -> Result<Job, PoolError> {
        transport.send(&Self::create_job_request(context)).await?;
        let response = transport.receive(JOB_RESPONSE_MAX_BYTES).await?;
        Self::parse_job(&response)
    }

    /// Send a share without waiting for the verdict
    pub async fn send_result<T: PoolTransport + ?Sized>(
        transport: &mut T,
        result: &SearchResult,
        worker_tag: &str,
    ) -> Result<(), PoolError> {
        transport.send(&Self::create_submit_message(result, worker_tag)).await
    }

    /// Read the verdict on the last submitted share
    pub async fn read_feedback<T: PoolTransport + ?Sized>(transport: &mut T) -> Result<Feedback, PoolError> {
        let response = transport.receive(FEEDBACK_MAX_BYTES).await?;
        Ok(Self::parse_feedback(&response))
    }

    /// Submit a share and read the verdict
    pub async fn submit_result<T: PoolTransport + ?Sized>(
        transport: &mut T,
        result: &SearchResult,
        worker_tag: &str,
    ) -> Result<Feedback, PoolError> {
        Self::send_result(transport, result, worker_tag).await?;
        Self::read_feedback(transport).await
    }
}

// Changelog:
// - v2.0.0 (2026-10-19): Replaced Stratum JSON messages with the Duino-Coin
//   comma-separated protocol.
//   - Job requests carry username, difficulty tier and mining key.
//   - Responses with fewer than three fields raise MalformedJob; a non-numeric
//     difficulty raises InvalidJob.
//   - Feedback is accepted only on an exact "GOOD".
// - v1.0.2 (2025-06-23): Fixed algo field format for pool compatibility.
