//! Battle state and the read-only snapshot handed to observers.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::UnitType;
use crate::enums::{Side, UnitTypeId};
use crate::types::Position;

/// A unit on the battlefield. Owned by exactly one [`State`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub side: Side,
    pub unit_type_id: UnitTypeId,
    pub pos: Position,
    pub hp: f64,
    pub ammo: u32,
    /// Standing move intent, cleared by a defend order.
    pub intent_target_pos: Option<Position>,
    /// Designated attack target, cleared by a defend order.
    pub target_id: Option<String>,
    /// One-way: once set the unit never acts again.
    pub routed: bool,
    /// Simulation time of the last shot. Starts at 0, so the first shot
    /// waits one full reload from battle start.
    pub last_fire_ms: u64,
    /// Opposing units that saw this unit during the current tick.
    pub spotted_by: BTreeSet<String>,
}

impl Unit {
    /// A fresh unit at full hp and ammo for its type.
    pub fn new(
        id: impl Into<String>,
        side: Side,
        unit_type_id: UnitTypeId,
        pos: Position,
    ) -> Self {
        let stats = unit_type_id.stats();
        Self {
            id: id.into(),
            side,
            unit_type_id,
            pos,
            hp: stats.max_hp,
            ammo: stats.max_ammo,
            intent_target_pos: None,
            target_id: None,
            routed: false,
            last_fire_ms: 0,
            spotted_by: BTreeSet::new(),
        }
    }

    pub fn unit_type(&self) -> &'static UnitType {
        self.unit_type_id.stats()
    }

    pub fn is_destroyed(&self) -> bool {
        self.hp <= 0.0
    }

    /// Neither routed nor destroyed, so able to move, observe and fire.
    pub fn is_active(&self) -> bool {
        !self.routed && !self.is_destroyed()
    }

    /// Current hp over max hp, floored at 0.
    pub fn hp_fraction(&self) -> f64 {
        self.hp.max(0.0) / self.unit_type().max_hp
    }
}

/// The authoritative battle state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Simulation clock (ms), advanced by the tick delta after every step.
    pub ts_ms: u64,
    /// Units keyed by id. Ordered so every phase visits units in id order.
    pub units: BTreeMap<String, Unit>,
    pub battle_id: String,
}

impl State {
    pub fn new(battle_id: impl Into<String>, units: impl IntoIterator<Item = Unit>) -> Self {
        Self {
            ts_ms: 0,
            units: units.into_iter().map(|u| (u.id.clone(), u)).collect(),
            battle_id: battle_id.into(),
        }
    }

    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.get(id)
    }

    /// Read-only view for observers.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            ts_ms: self.ts_ms,
            battle_id: self.battle_id.clone(),
            units: self
                .units
                .iter()
                .map(|(id, u)| (id.clone(), UnitView::from(u)))
                .collect(),
        }
    }
}

/// State snapshot returned to callers outside the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub ts_ms: u64,
    pub battle_id: String,
    pub units: BTreeMap<String, UnitView>,
}

impl StateSnapshot {
    /// Units of one side, in id order.
    pub fn side(&self, side: Side) -> impl Iterator<Item = &UnitView> {
        self.units.values().filter(move |u| u.side == side)
    }
}

/// Per-unit snapshot entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub id: String,
    pub side: Side,
    pub unit_type_id: UnitTypeId,
    pub pos: Position,
    pub hp: f64,
    pub ammo: u32,
    pub routed: bool,
    pub destroyed: bool,
    pub intent_target_pos: Option<Position>,
    pub target_id: Option<String>,
    pub spotted_by: Vec<String>,
}

impl From<&Unit> for UnitView {
    fn from(u: &Unit) -> Self {
        Self {
            id: u.id.clone(),
            side: u.side,
            unit_type_id: u.unit_type_id,
            pos: u.pos,
            hp: u.hp,
            ammo: u.ammo,
            routed: u.routed,
            destroyed: u.is_destroyed(),
            intent_target_pos: u.intent_target_pos,
            target_id: u.target_id.clone(),
            spotted_by: u.spotted_by.iter().cloned().collect(),
        }
    }
}
