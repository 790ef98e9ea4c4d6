//! Configuration module
//!
//! Handles CLI configuration: service connection settings and poll policy
//! overrides.

use anyhow::{Context, Result};
use std::time::Duration;
use vigil_client::ClassificationClient;
use vigil_core::domain::PollPolicy;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the classification service
    pub service_url: String,

    /// Timeout of a single HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.service_url.is_empty() {
            anyhow::bail!("service_url cannot be empty");
        }

        if !self.service_url.starts_with("http://") && !self.service_url.starts_with("https://") {
            anyhow::bail!("service_url must start with http:// or https://");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }

    /// Builds a service client honoring the request timeout
    pub fn client(&self) -> Result<ClassificationClient> {
        let http_client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(ClassificationClient::with_client(
            self.service_url.clone(),
            http_client,
        ))
    }
}

/// Poll policy overrides given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct PollOverrides {
    /// Time between two status queries
    pub interval: Option<Duration>,

    /// Maximum number of status queries
    pub max_attempts: Option<u32>,
}

impl PollOverrides {
    /// Validates the overrides
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_some_and(|i| i.is_zero()) {
            anyhow::bail!("poll interval must be greater than 0");
        }

        Ok(())
    }

    /// Applies the overrides on top of a default policy
    pub fn apply(&self, policy: PollPolicy) -> PollPolicy {
        let policy = match self.interval {
            Some(interval) => policy.with_interval(interval),
            None => policy,
        };
        match self.max_attempts {
            Some(max_attempts) => policy.with_max_attempts(max_attempts),
            None => policy,
        }
    }
}
