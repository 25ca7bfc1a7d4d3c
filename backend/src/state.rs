use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};

use crate::config::RelayConfig;

#[derive(Clone)]
pub struct AppState {
    /// Shared client for upstream calls
    client: reqwest::Client,
    /// Relay settings, read once at startup
    relay: Arc<RelayConfig>,
}

impl AppState {
    pub fn new(relay: RelayConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(relay.timeout_seconds))
            .build()
            .context("failed to build relay http client")?;

        Ok(Self {
            client,
            relay: Arc::new(relay),
        })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn relay(&self) -> &RelayConfig {
        &self.relay
    }
}
