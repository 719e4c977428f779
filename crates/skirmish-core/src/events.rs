//! Events emitted by the simulation.
//!
//! Only decision-relevant changes are logged. Movement and the per-tick
//! spotting refresh are deliberately silent.

use serde::{Deserialize, Serialize};

use crate::enums::{OrderKind, WeaponType};
use crate::types::Position;

/// One immutable log record: `{ "ts_ms", "kind", "data" }` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Simulation time at which the event happened.
    pub ts_ms: u64,
    #[serde(flatten)]
    pub data: EventData,
}

impl Event {
    pub fn new(ts_ms: u64, data: EventData) -> Self {
        Self { ts_ms, data }
    }

    pub fn kind(&self) -> EventKind {
        self.data.kind()
    }
}

/// Event payloads, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum EventData {
    /// An order passed validation and changed the unit's intent.
    OrderAccepted {
        unit_id: String,
        kind: OrderKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<Position>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },
    /// Nearest-contact detection pairing (lightweight detection model only).
    Contact { unit_id: String, target_id: String },
    ShotFired {
        shooter: String,
        target: String,
        dist_m: f64,
        p: f64,
        weapon: WeaponType,
    },
    /// A hit landed. `hp` is the target's hit points right after the hit.
    Damage {
        target: String,
        dmg: f64,
        hp: f64,
        shooter: String,
    },
    Destroyed { unit_id: String, killer: String },
    Routed { unit_id: String },
}

/// Discriminant of [`EventData`], for filtering and ordering checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    OrderAccepted,
    Contact,
    ShotFired,
    Damage,
    Destroyed,
    Routed,
}

impl EventData {
    pub fn kind(&self) -> EventKind {
        match self {
            EventData::OrderAccepted { .. } => EventKind::OrderAccepted,
            EventData::Contact { .. } => EventKind::Contact,
            EventData::ShotFired { .. } => EventKind::ShotFired,
            EventData::Damage { .. } => EventKind::Damage,
            EventData::Destroyed { .. } => EventKind::Destroyed,
            EventData::Routed { .. } => EventKind::Routed,
        }
    }
}
