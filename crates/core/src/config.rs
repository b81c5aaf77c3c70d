//! Engine configuration
//!
//! Defaults come from `blockfall_types`; the environment can override them:
//!
//! - `BLOCKFALL_TICK_MS`: interval between ticks in milliseconds (default: 1000)
//! - `BLOCKFALL_SEED`: piece RNG seed (default: derived from the clock)
//!
//! Hosts may then layer command-line values on top with the `with_*` builders.

use std::time::Duration;

use thiserror::Error;

use crate::rng::seed_from_clock;
use crate::types::TICK_MS;

pub const TICK_MS_ENV: &str = "BLOCKFALL_TICK_MS";
pub const SEED_ENV: &str = "BLOCKFALL_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: expected an unsigned integer")]
    InvalidNumber { var: &'static str, value: String },

    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Time between two engine ticks. Owned by the host loop, never by the engine.
    pub tick_interval: Duration,
    /// Fixed seed; `None` means seed once from the clock.
    pub seed: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_MS as u64),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup(key)` for each known variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(TICK_MS_ENV) {
            let ms = parse_number::<u64>(TICK_MS_ENV, &raw)?;
            config = config.with_tick_ms(ms)?;
        }

        if let Some(raw) = lookup(SEED_ENV) {
            config.seed = Some(parse_number::<u32>(SEED_ENV, &raw)?);
        }

        Ok(config)
    }

    pub fn with_tick_ms(mut self, ms: u64) -> Result<Self, ConfigError> {
        if ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        self.tick_interval = Duration::from_millis(ms);
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The explicit seed, or a fresh one from the clock
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(seed_from_clock)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        })
}
