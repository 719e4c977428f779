//! Orders submitted from outside the simulation.
//!
//! Orders are queued and applied at the next tick boundary, in submission
//! order. The client timestamp is carried for diagnostics only.

use serde::{Deserialize, Serialize};

use crate::enums::OrderKind;
use crate::types::Position;

/// What a unit is told to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Command {
    /// Advance toward a position.
    Move { target_pos: Position },
    /// Designate an enemy unit as the attack target.
    Attack { target_unit_id: String },
    /// Clear movement and attack intents.
    Defend,
}

impl Command {
    pub fn kind(&self) -> OrderKind {
        match self {
            Command::Move { .. } => OrderKind::Move,
            Command::Attack { .. } => OrderKind::Attack,
            Command::Defend => OrderKind::Defend,
        }
    }
}

/// A validated order for one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub unit_id: String,
    #[serde(flatten)]
    pub command: Command,
    #[serde(default)]
    pub client_ts_ms: i64,
}

impl Order {
    pub fn move_to(unit_id: impl Into<String>, target_pos: Position) -> Self {
        Self {
            unit_id: unit_id.into(),
            command: Command::Move { target_pos },
            client_ts_ms: 0,
        }
    }

    pub fn attack(unit_id: impl Into<String>, target_unit_id: impl Into<String>) -> Self {
        Self {
            unit_id: unit_id.into(),
            command: Command::Attack {
                target_unit_id: target_unit_id.into(),
            },
            client_ts_ms: 0,
        }
    }

    pub fn defend(unit_id: impl Into<String>) -> Self {
        Self {
            unit_id: unit_id.into(),
            command: Command::Defend,
            client_ts_ms: 0,
        }
    }
}

/// Order as it arrives on the wire: a flat record with optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub kind: OrderKind,
    pub unit_id: String,
    #[serde(default)]
    pub target_pos: Option<Position>,
    #[serde(default)]
    pub target_unit_id: Option<String>,
    #[serde(default)]
    pub client_ts_ms: i64,
}

impl OrderRequest {
    /// Validate into an [`Order`]. Returns `None` when the fields the verb
    /// needs are missing (a move without a position, an attack without a
    /// target, or an empty target id).
    pub fn into_order(self) -> Option<Order> {
        let command = match self.kind {
            OrderKind::Move => Command::Move {
                target_pos: self.target_pos?,
            },
            OrderKind::Attack => match self.target_unit_id {
                Some(id) if !id.is_empty() => Command::Attack { target_unit_id: id },
                _ => return None,
            },
            OrderKind::Defend => Command::Defend,
        };
        Some(Order {
            unit_id: self.unit_id,
            command,
            client_ts_ms: self.client_ts_ms,
        })
    }
}
