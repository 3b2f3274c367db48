// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/locator.rs
// Version: 1.0.0
//
// This file implements pool discovery for the LiteDuco miner, located in the
// pool subdirectory. A locator produces the endpoint to connect to; `locate`
// wraps any locator in the unbounded fixed-interval retry loop.
//
// Tree Location:
// - src/pool/locator.rs (pool discovery)
// - Depends on: reqwest, tokio, async-trait

use crate::core::{PoolEndpoint, PoolError};
use crate::utils::user_agent::user_agent;
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;
use tracing::{debug, info, warn};

const LOG_TARGET: &str = "liteduco::pool::locator";

/// Request timeout for the discovery endpoint
const DISCOVERY_TIMEOUT: Duration = Duration::from_secs(15);

/// Source of pool endpoints; one call is one lookup attempt
#[async_trait]
pub trait PoolLocator: Send + Sync {
    async fn try_locate(&self) -> Result<PoolEndpoint, PoolError>;
}

/// Asks the Duino-Coin discovery service which pool to mine on
#[derive(Clone)]
pub struct HttpPoolLocator {
    client: reqwest::Client,
    url: String,
}

impl HttpPoolLocator {
    pub fn new(url: impl Into<String>) -> Result<Self, PoolError> {
        let client = reqwest::Client::builder()
            .timeout(DISCOVERY_TIMEOUT)
            .user_agent(user_agent())
            .build()?;
        Ok(Self { client, url: url.into() })
    }
}

#[async_trait]
impl PoolLocator for HttpPoolLocator {
    async fn try_locate(&self) -> Result<PoolEndpoint, PoolError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(PoolError::Discovery {
                message: format!("{} returned HTTP {}", self.url, response.status()),
            });
        }

        let body = response.text().await?;
        debug!(target: LOG_TARGET, "Discovery response: {}", body);
        serde_json::from_str::<PoolEndpoint>(&body).map_err(|e| PoolError::Discovery {
            message: format!("unexpected discovery response: {}", e),
        })
    }
}

/// Fixed pool given on the command line, re-resolved through DNS on every lookup
#[derive(Debug, Clone)]
pub struct StaticPoolLocator {
    address: String,
}

impl StaticPoolLocator {
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into() }
    }
}

#[async_trait]
impl PoolLocator for StaticPoolLocator {
    async fn try_locate(&self) -> Result<PoolEndpoint, PoolError> {
        let mut addrs = lookup_host(self.address.as_str())
            .await
            .map_err(|e| PoolError::Discovery {
                message: format!("cannot resolve {}: {}", self.address, e),
            })?;
        let addr = addrs.next().ok_or_else(|| PoolError::Discovery {
            message: format!("no addresses found for {}", self.address),
        })?;
        Ok(PoolEndpoint {
            address: addr.ip().to_string(),
            port: addr.port(),
        })
    }
}

/// Look up a pool, retrying forever at the discovery interval
pub async fn locate(locator: &dyn PoolLocator, interval: Duration) -> PoolEndpoint {
    loop {
        info!(target: LOG_TARGET, "Fetching pool info...");
        match locator.try_locate().await {
            Ok(endpoint) => return endpoint,
            Err(e) => {
                warn!(
                    target: LOG_TARGET,
                    "Error fetching pool info: {}, retrying in {}s",
                    e,
                    interval.as_secs()
                );
                tokio::time::sleep(interval).await;
            }
        }
    }
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial pool discovery.
//   - HttpPoolLocator issues one GET with the client user agent and parses
//     {"ip", "port"}.
//   - StaticPoolLocator keeps the host:port resolution of the old pool client
//     for --pool.
//   - locate() is the unbounded discovery retry loop.
