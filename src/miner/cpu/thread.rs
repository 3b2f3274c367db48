// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/cpu/thread.rs
// Version: 2.1.0
//
// This file contains the implementation of individual mining workers for the
// LiteDuco miner, located in the cpu subdirectory of the miner module. A worker
// owns one pool session and cycles connect -> request job -> search -> submit ->
// read feedback until its task is dropped.

use crate::core::{Feedback, Job, PoolError, RetryPolicy, SearchResult, WorkerContext};
use crate::miner::engine::NonceSearchEngine;
use crate::miner::stats::WorkerStats;
use crate::pool::{Dialer, JobProtocol, PoolLocator, connect};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const LOG_TARGET: &str = "liteduco::miner::worker";

/// Where a worker is in its mining cycle
#[derive(Debug)]
pub enum WorkerState {
    Connecting,
    RequestingJob,
    Searching(Job),
    Submitting { job: Job, result: SearchResult },
    AwaitingFeedback { job: Job, result: SearchResult },
    Reporting { job: Job, result: SearchResult, feedback: Feedback },
    FatalError(PoolError),
}

pub struct Worker<D: Dialer> {
    context: WorkerContext,
    worker_tag: String,
    engine: NonceSearchEngine,
    locator: Arc<dyn PoolLocator>,
    dialer: D,
    retry: RetryPolicy,
    link: Option<D::Link>,
    stats: WorkerStats,
}

impl<D: Dialer> Worker<D> {
    pub fn new(
        context: WorkerContext,
        engine: NonceSearchEngine,
        locator: Arc<dyn PoolLocator>,
        dialer: D,
        retry: RetryPolicy,
    ) -> Self {
        let worker_tag = context.worker_tag();
        Self {
            context,
            worker_tag,
            engine,
            locator,
            dialer,
            retry,
            link: None,
            stats: WorkerStats::new(),
        }
    }

    pub fn stats(&self) -> &WorkerStats {
        &self.stats
    }

    pub fn is_connected(&self) -> bool {
        self.link.is_some()
    }

    /// Mine forever
    pub async fn run(mut self) {
        let mut state = WorkerState::Connecting;
        loop {
            state = self.step(state).await;
        }
    }

    /// Perform exactly one transition
    pub async fn step(&mut self, state: WorkerState) -> WorkerState {
        let thread_id = self.context.thread_id;
        match state {
            WorkerState::Connecting => {
                let link = connect(self.locator.as_ref(), &self.dialer, &self.retry).await;
                self.link = Some(link);
                WorkerState::RequestingJob
            }
            WorkerState::RequestingJob => {
                let Some(link) = self.link.as_mut() else {
                    return WorkerState::Connecting;
                };
                match JobProtocol::request_job(link, &self.context).await {
                    Ok(job) => {
                        debug!(
                            target: LOG_TARGET,
                            "[T{}] Job {} (Diff {})", thread_id, job.job_id, job.difficulty
                        );
                        WorkerState::Searching(job)
                    }
                    Err(e) if e.is_malformed_job() => {
                        warn!(target: LOG_TARGET, "[T{}] {}, reconnecting", thread_id, e);
                        self.teardown();
                        WorkerState::Connecting
                    }
                    Err(e) => WorkerState::FatalError(e),
                }
            }
            WorkerState::Searching(job) => {
                let result = match search(self.engine.clone(), job.clone()).await {
                    Ok(result) => result,
                    Err(e) => return WorkerState::FatalError(e),
                };
                if !result.found {
                    self.stats.record_exhausted();
                    warn!(
                        target: LOG_TARGET,
                        "[T{}] No nonce found for job {} (Diff {}), reporting zero result",
                        thread_id,
                        job.job_id,
                        job.difficulty
                    );
                }
                WorkerState::Submitting { job, result }
            }
            WorkerState::Submitting { job, result } => {
                let Some(link) = self.link.as_mut() else {
                    return WorkerState::Connecting;
                };
                match JobProtocol::send_result(link, &result, &self.worker_tag).await {
                    Ok(()) => WorkerState::AwaitingFeedback { job, result },
                    Err(e) => WorkerState::FatalError(e),
                }
            }
            WorkerState::AwaitingFeedback { job, result } => {
                let Some(link) = self.link.as_mut() else {
                    return WorkerState::Connecting;
                };
                match JobProtocol::read_feedback(link).await {
                    Ok(feedback) => WorkerState::Reporting { job, result, feedback },
                    Err(e) => WorkerState::FatalError(e),
                }
            }
            WorkerState::Reporting { job, result, feedback } => {
                self.stats.record_share(feedback.accepted, result.hash_rate);
                let line = self.stats.status_line(thread_id, feedback.accepted, result.nonce, job.difficulty);
                if feedback.accepted {
                    info!(target: LOG_TARGET, "{}", line);
                } else {
                    warn!(target: LOG_TARGET, "{}", line);
                }
                WorkerState::RequestingJob
            }
            WorkerState::FatalError(e) => {
                error!(
                    target: LOG_TARGET,
                    "[T{}] Fatal error: {}. Restarting in {}s...",
                    thread_id,
                    e,
                    self.retry.fatal.as_secs()
                );
                self.teardown();
                tokio::time::sleep(self.retry.fatal).await;
                WorkerState::Connecting
            }
        }
    }

    /// Drop the session; the next Connecting starts from a fresh pool lookup
    fn teardown(&mut self) {
        if self.link.take().is_some() {
            self.stats.record_reconnect();
        }
    }
}

/// Run the search on the blocking pool so socket I/O of other workers keeps going
async fn search(engine: NonceSearchEngine, job: Job) -> Result<SearchResult, PoolError> {
    tokio::task::spawn_blocking(move || engine.search(&job))
        .await
        .map_err(|e| PoolError::SearchAborted { message: e.to_string() })
}

// Changelog:
// - v2.1.0 (2026-10-20): A search task that dies is a fatal fault instead of
//   being reported as an exhausted search. Status line comes from WorkerStats.
// - v2.0.0 (2026-10-19): Rewritten as the per-worker state machine.
//   - Each worker owns its own pool session instead of sharing a broadcast job
//     channel and share channel with the other threads.
//   - step() performs one transition so faults can be injected one at a time;
//     run() loops it forever.
//   - Malformed jobs reconnect immediately, any other session fault pauses for
//     the fatal interval first.
//   - The DUCO-S1 search runs through spawn_blocking.
// - v1.1.4 (2025-06-19): Fixed SHA-256 share validation.
