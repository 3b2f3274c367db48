// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/client.rs
// Version: 2.0.0
//
// This file implements the TCP client for communicating with the mining pool
// in the LiteDuco miner, located in the pool subdirectory. It handles
// establishing connections to the pool server and line-oriented send/receive.
//
// Tree Location:
// - src/pool/client.rs (pool TCP client logic)
// - Depends on: tokio, async-trait

use crate::core::{PoolEndpoint, PoolError, RetryPolicy};
use crate::pool::locator::{PoolLocator, locate};
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

const LOG_TARGET: &str = "liteduco::pool::client";

/// Upper bound on the greeting the pool sends right after accept
pub const GREETING_MAX_BYTES: usize = 100;

/// Text channel to a pool once a connection is established
#[async_trait]
pub trait PoolTransport: Send {
    /// Send `text` as-is
    async fn send(&mut self, text: &str) -> Result<(), PoolError>;

    /// Read at most `max_bytes` and strip trailing newlines
    async fn receive(&mut self, max_bytes: usize) -> Result<String, PoolError>;
}

/// Opens transports to resolved endpoints; one call is one attempt
#[async_trait]
pub trait Dialer: Send + Sync {
    type Link: PoolTransport;

    async fn try_dial(&self, endpoint: &PoolEndpoint) -> Result<Self::Link, PoolError>;
}

/// Run `fut` under an optional deadline
async fn within<T>(
    deadline: Option<Duration>,
    fut: impl Future<Output = std::io::Result<T>>,
) -> Result<std::io::Result<T>, PoolError> {
    match deadline {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| PoolError::Timeout { seconds: limit.as_secs() }),
        None => Ok(fut.await),
    }
}

fn strip_newlines(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end_matches('\n').to_string()
}

/// One TCP session with a pool
pub struct PoolConnection {
    stream: TcpStream,
    endpoint: PoolEndpoint,
    server_version: String,
    io_timeout: Option<Duration>,
}

impl PoolConnection {
    /// Connect to `endpoint` and consume the version greeting
    pub async fn open(endpoint: &PoolEndpoint, io_timeout: Option<Duration>) -> Result<Self, PoolError> {
        let address = endpoint.to_string();
        let stream = within(io_timeout, TcpStream::connect((endpoint.address.as_str(), endpoint.port)))
            .await?
            .map_err(|source| PoolError::Connect { address: address.clone(), source })?;
        stream.set_nodelay(true)?; // Disable Nagle's algorithm for low latency
        info!(target: LOG_TARGET, "Connected to pool server {}", address);

        let mut connection = Self {
            stream,
            endpoint: endpoint.clone(),
            server_version: String::new(),
            io_timeout,
        };
        connection.server_version = connection.receive(GREETING_MAX_BYTES).await?;
        info!(target: LOG_TARGET, "Server Version: {}", connection.server_version);
        Ok(connection)
    }

    pub fn endpoint(&self) -> &PoolEndpoint {
        &self.endpoint
    }

    pub fn server_version(&self) -> &str {
        &self.server_version
    }
}

#[async_trait]
impl PoolTransport for PoolConnection {
    async fn send(&mut self, text: &str) -> Result<(), PoolError> {
        debug!(target: LOG_TARGET, "-> {}", text);
        within(self.io_timeout, self.stream.write_all(text.as_bytes())).await??;
        within(self.io_timeout, self.stream.flush()).await??;
        Ok(())
    }

    async fn receive(&mut self, max_bytes: usize) -> Result<String, PoolError> {
        let mut buf = vec![0u8; max_bytes];
        let read = within(self.io_timeout, self.stream.read(&mut buf)).await??;
        if read == 0 {
            return Err(PoolError::ConnectionClosed);
        }
        let text = strip_newlines(&buf[..read]);
        debug!(target: LOG_TARGET, "<- {}", text);
        Ok(text)
    }
}

/// Dials pools over plain TCP
#[derive(Debug, Clone, Default)]
pub struct TcpDialer {
    io_timeout: Option<Duration>,
}

impl TcpDialer {
    pub fn new(io_timeout: Option<Duration>) -> Self {
        Self { io_timeout }
    }
}

#[async_trait]
impl Dialer for TcpDialer {
    type Link = PoolConnection;

    async fn try_dial(&self, endpoint: &PoolEndpoint) -> Result<PoolConnection, PoolError> {
        PoolConnection::open(endpoint, self.io_timeout).await
    }
}

/// Discover a pool and connect to it, retrying forever.
///
/// Every attempt starts with a fresh lookup, so a pool that went away is
/// replaced rather than redialed.
pub async fn connect<D: Dialer>(locator: &dyn PoolLocator, dialer: &D, retry: &RetryPolicy) -> D::Link {
    loop {
        let endpoint = locate(locator, retry.discovery).await;
        info!(target: LOG_TARGET, "Connecting to {}", endpoint);
        match dialer.try_dial(&endpoint).await {
            Ok(link) => return link,
            Err(e) => {
                warn!(
                    target: LOG_TARGET,
                    "Connection error: {}, retrying in {}s",
                    e,
                    retry.connect.as_secs()
                );
                tokio::time::sleep(retry.connect).await;
            }
        }
    }
}

// Changelog:
// - v2.0.0 (2026-10-19): Rewritten for the Duino-Coin text protocol.
//   - PoolConnection reads the version greeting on open and exposes
//     send/receive through the PoolTransport trait.
//   - Added optional socket deadlines; expiry surfaces as PoolError::Timeout.
//   - Added the Dialer seam and the connect() retry loop that re-runs
//     discovery before every attempt.
// - v1.1.0 (2025-06-23): Added DNS resolution support
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
