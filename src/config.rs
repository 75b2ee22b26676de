//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::cache::{TtlPolicy, DEFAULT_ANALYSIS_TTL_SECS, DEFAULT_COMMENT_TTL_SECS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime in seconds of comment and metadata entries
    pub comment_ttl: u64,
    /// Lifetime in seconds of analysis entries
    pub analysis_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds, 0 disables the sweep
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `COMMENT_TTL` - Comment/metadata TTL in seconds (default: 10800)
    /// - `ANALYSIS_TTL` - Analysis TTL in seconds (default: 21600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            comment_ttl: env_or("COMMENT_TTL", defaults.comment_ttl),
            analysis_ttl: env_or("ANALYSIS_TTL", defaults.analysis_ttl),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
        };

        if config.analysis_ttl < config.comment_ttl {
            warn!(
                "ANALYSIS_TTL ({}s) is shorter than COMMENT_TTL ({}s); analyses will be recomputed more often than comments are refetched",
                config.analysis_ttl, config.comment_ttl
            );
        }
        config
    }

    /// TTL classes derived from this configuration.
    pub fn ttl_policy(&self) -> TtlPolicy {
        TtlPolicy::new(
            Duration::from_secs(self.comment_ttl),
            Duration::from_secs(self.analysis_ttl),
        )
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comment_ttl: DEFAULT_COMMENT_TTL_SECS,
            analysis_ttl: DEFAULT_ANALYSIS_TTL_SECS,
            server_port: 3000,
            sweep_interval: 60,
        }
    }
}
