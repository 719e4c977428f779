//! SKIRMISH runtime.
//!
//! Drives the simulation engine in real time: the tick scheduler, the
//! event log it appends to, and the battle session that owns both.

pub mod config;
pub mod error;
pub mod event_log;
pub mod scheduler;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{ConfigError, SessionError};
pub use event_log::{EventLog, EventPage};
pub use scheduler::TickScheduler;
pub use session::BattleSession;

pub use skirmish_core as core;
pub use skirmish_sim as sim;
