use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// How a mutation is handled while another one is still pending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationPolicy {
    /// Fail fast with `MarketError::Busy`
    Reject,
    /// Wait for the pending mutation to finish
    Queue,
}

/// Runtime settings, read from the environment (and `.env` via dotenv)
#[derive(Debug, Clone)]
pub struct Config {
    pub state_dir: PathBuf,
    pub connect_delay: Duration,
    pub confirm_delay: Duration,
    /// Keep the storefront's first-release handling of unknown ids and delisting
    pub legacy_quirks: bool,
    pub mutation_policy: MutationPolicy,
    pub seed_catalog: bool,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            state_dir: PathBuf::from(".memex-market"),
            connect_delay: Duration::from_millis(1000),
            confirm_delay: Duration::from_millis(2000),
            legacy_quirks: false,
            mutation_policy: MutationPolicy::Reject,
            seed_catalog: true,
            page_size: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(dir) = lookup("MARKET_STATE_DIR") {
            config.state_dir = PathBuf::from(dir);
        }
        if let Some(ms) = lookup("MARKET_CONNECT_DELAY_MS") {
            config.connect_delay = Duration::from_millis(parse_u64("MARKET_CONNECT_DELAY_MS", &ms)?);
        }
        if let Some(ms) = lookup("MARKET_CONFIRM_DELAY_MS") {
            config.confirm_delay = Duration::from_millis(parse_u64("MARKET_CONFIRM_DELAY_MS", &ms)?);
        }
        if let Some(v) = lookup("MARKET_LEGACY_QUIRKS") {
            config.legacy_quirks = parse_bool("MARKET_LEGACY_QUIRKS", &v)?;
        }
        if let Some(v) = lookup("MARKET_QUEUE_MUTATIONS") {
            config.mutation_policy = if parse_bool("MARKET_QUEUE_MUTATIONS", &v)? {
                MutationPolicy::Queue
            } else {
                MutationPolicy::Reject
            };
        }
        if let Some(v) = lookup("MARKET_SEED_CATALOG") {
            config.seed_catalog = parse_bool("MARKET_SEED_CATALOG", &v)?;
        }
        if let Some(v) = lookup("MARKET_PAGE_SIZE") {
            let size = parse_u64("MARKET_PAGE_SIZE", &v)?;
            if size == 0 {
                return Err(ConfigError::Invalid {
                    key: "MARKET_PAGE_SIZE",
                    expected: "a positive integer",
                    value: v,
                });
            }
            config.page_size = size as usize;
        }

        Ok(config)
    }
}

fn parse_u64(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
        key,
        expected: "a non-negative integer",
        value: value.to_string(),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            expected: "a boolean",
            value: value.to_string(),
        }),
    }
}
