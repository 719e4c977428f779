//! Runtime configuration, loadable from TOML.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! tick_ms = 250
//! time_compression = 60.0
//! scenario = "duel"
//!
//! [engine]
//! detection = "nearest_contact"
//! damage = { model = "flat_uniform", min = 8.0, max = 15.0 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use skirmish_core::constants::{clamp_time_compression, DEFAULT_TICK_MS, DEFAULT_TIME_COMPRESSION};
use skirmish_sim::config::EngineConfig;
use skirmish_sim::scenario::ScenarioId;

use crate::error::ConfigError;

/// Default page size for event queries.
pub const DEFAULT_EVENT_PAGE_LIMIT: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Simulated time per tick.
    pub tick_ms: u64,
    /// Simulated seconds per wall-clock second.
    pub time_compression: f64,
    pub event_page_limit: usize,
    /// Starting layout for every new battle.
    pub scenario: ScenarioId,
    pub engine: EngineConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            time_compression: DEFAULT_TIME_COMPRESSION,
            event_page_limit: DEFAULT_EVENT_PAGE_LIMIT,
            scenario: ScenarioId::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Parse a TOML document. Out-of-range compression is clamped.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(input)?;
        config.time_compression = clamp_time_compression(config.time_compression);
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// Wall-clock pause between ticks at the configured compression.
    pub fn tick_interval(&self) -> Duration {
        crate::scheduler::tick_interval(self.tick_ms, self.time_compression)
    }
}
