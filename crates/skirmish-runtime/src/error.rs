//! Error types surfaced to callers of the runtime.

use std::path::PathBuf;

use thiserror::Error;

/// Caller misuse of a [`BattleSession`](crate::session::BattleSession).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("battle not started")]
    NotStarted,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
