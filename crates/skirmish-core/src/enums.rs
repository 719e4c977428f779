//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The two factions on the battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }
}

/// Broad unit classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitClass {
    Recon,
    Infantry,
    Mbt,
    Artillery,
}

/// Weapon system carried by a unit type. Drives both the sighting rule
/// used by fire eligibility and the armor interaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    /// Tank guns, IFV cannon. Shooter must see the target itself.
    DirectFire,
    /// Artillery. Fires at anything a friendly unit spots.
    IndirectFire,
    /// Rifles and MGs. Shooter must see the target itself.
    SmallArms,
    /// AT missiles and rockets. Shooter must see the target itself.
    AntiTank,
}

impl WeaponType {
    /// Whether this weapon needs the shooter to have the target in sight.
    pub fn requires_direct_sight(self) -> bool {
        !matches!(self, WeaponType::IndirectFire)
    }
}

/// Catalog key for a unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnitTypeId {
    Recon,
    Infantry,
    Mbt,
    Artillery,
    /// Fixed-stat line section of the lightweight battle variant.
    Line,
}

/// Order verb, as named on the wire and in `OrderAccepted` payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Move,
    Attack,
    Defend,
}
