// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/cpu/miner.rs
// Version: 3.0.0

use crate::core::{RetryPolicy, WorkerContext};
use crate::miner::engine::NonceSearchEngine;
use crate::pool::{Dialer, PoolLocator};
use crate::Result;
use num_cpus;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::thread::Worker;

const LOG_TARGET: &str = "liteduco::miner::pool";

/// Clamp a requested thread count to `[1, available]`; 0 means "all of them"
pub fn clamp_threads(requested: usize, available: usize) -> usize {
    let available = available.max(1);
    if requested == 0 {
        available
    } else {
        requested.clamp(1, available)
    }
}

/// Spawns one independent worker per configured thread
pub struct WorkerPool<D: Dialer> {
    template: WorkerContext,
    num_threads: usize,
    engine: NonceSearchEngine,
    locator: Arc<dyn PoolLocator>,
    dialer: D,
    retry: RetryPolicy,
}

impl<D> WorkerPool<D>
where
    D: Dialer + Clone + 'static,
    D::Link: 'static,
{
    /// `template` supplies everything but the thread id, which each worker gets on spawn
    pub fn new(
        template: WorkerContext,
        num_threads: usize,
        engine: NonceSearchEngine,
        locator: Arc<dyn PoolLocator>,
        dialer: D,
        retry: RetryPolicy,
    ) -> Self {
        let actual_threads = clamp_threads(num_threads, num_cpus::get());

        Self {
            template,
            num_threads: actual_threads,
            engine,
            locator,
            dialer,
            retry,
        }
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Per-worker configuration, one distinct thread id each
    pub fn worker_contexts(&self) -> Vec<WorkerContext> {
        (0..self.num_threads)
            .map(|thread_id| WorkerContext {
                thread_id,
                ..self.template.clone()
            })
            .collect()
    }

    /// Start every worker on its own task
    pub fn spawn(self) -> Vec<JoinHandle<()>> {
        info!(
            target: LOG_TARGET,
            "Starting {} mining thread(s) ({} search)",
            self.num_threads,
            self.engine.name()
        );

        self.worker_contexts()
            .into_iter()
            .map(|context| {
                debug!(target: LOG_TARGET, "Spawning worker {}", context.worker_tag());
                let worker = Worker::new(
                    context,
                    self.engine.clone(),
                    Arc::clone(&self.locator),
                    self.dialer.clone(),
                    self.retry,
                );
                tokio::spawn(worker.run())
            })
            .collect()
    }

    /// Run all workers; only returns once every worker task has ended
    pub async fn run(self) -> Result<()> {
        let handles = self.spawn();
        for (thread_id, handle) in handles.into_iter().enumerate() {
            if let Err(e) = handle.await {
                error!(target: LOG_TARGET, "[T{}] Worker task ended abnormally: {}", thread_id, e);
            }
        }
        Ok(())
    }
}

// Changelog:
// - v3.0.0 (2026-10-19): Replaced CpuMiner with WorkerPool.
//   - No shared pool connection, job broadcast or share channel: each worker
//     owns its session and the pool only spawns and awaits them.
//   - Thread count clamped to [1, available cores], 0 selects all cores.
//   - The nonce search strategy is resolved by the caller and handed to every
//     worker.
// - v2.0.4-dns (2025-06-23): Added DNS resolution support.
