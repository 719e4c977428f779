//! Unit type catalog. Static, process-wide, never mutated.

use serde::Serialize;

use crate::enums::{UnitClass, UnitTypeId, WeaponType};

/// Immutable characteristics shared by every unit of a type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitType {
    pub name: &'static str,
    pub class: UnitClass,
    pub max_hp: f64,
    /// Road speed (m/s).
    pub speed_mps: f64,
    /// Base sensor range (m) against a target of visibility 1.0.
    pub sensor_range_m: f64,
    pub weapon: WeaponType,
    pub weapon_range_m: f64,
    pub damage: f64,
    pub reload_s: f64,
    /// 0 = none, 1 = light, 2 = medium, 3 = heavy.
    pub armor: u8,
    /// Detectability multiplier (0.5 = concealed, 1.0 = normal, 1.5 = conspicuous).
    pub visibility: f64,
    pub max_ammo: u32,
}

static RECON: UnitType = UnitType {
    name: "Reconnaissance Vehicle",
    class: UnitClass::Recon,
    max_hp: 50.0,
    speed_mps: 4.0,
    sensor_range_m: 2500.0,
    weapon: WeaponType::SmallArms,
    weapon_range_m: 400.0,
    damage: 5.0,
    reload_s: 2.0,
    armor: 1,
    visibility: 0.5,
    max_ammo: 200,
};

static INFANTRY: UnitType = UnitType {
    name: "Infantry Squad",
    class: UnitClass::Infantry,
    max_hp: 80.0,
    speed_mps: 1.5,
    sensor_range_m: 600.0,
    weapon: WeaponType::AntiTank,
    weapon_range_m: 500.0,
    damage: 30.0,
    reload_s: 5.0,
    armor: 0,
    visibility: 0.8,
    max_ammo: 10,
};

static MBT: UnitType = UnitType {
    name: "Main Battle Tank",
    class: UnitClass::Mbt,
    max_hp: 150.0,
    speed_mps: 2.0,
    sensor_range_m: 1000.0,
    weapon: WeaponType::DirectFire,
    weapon_range_m: 3000.0,
    damage: 50.0,
    reload_s: 6.0,
    armor: 3,
    visibility: 1.5,
    max_ammo: 40,
};

static ARTILLERY: UnitType = UnitType {
    name: "Self-Propelled Howitzer",
    class: UnitClass::Artillery,
    max_hp: 60.0,
    speed_mps: 1.5,
    sensor_range_m: 500.0,
    weapon: WeaponType::IndirectFire,
    weapon_range_m: 15_000.0,
    damage: 60.0,
    reload_s: 15.0,
    armor: 1,
    visibility: 1.2,
    max_ammo: 30,
};

static LINE: UnitType = UnitType {
    name: "Line Section",
    class: UnitClass::Infantry,
    max_hp: 100.0,
    speed_mps: 2.0,
    sensor_range_m: 800.0,
    weapon: WeaponType::SmallArms,
    weapon_range_m: 800.0,
    damage: 12.0,
    reload_s: 0.0,
    armor: 0,
    visibility: 1.0,
    max_ammo: 40,
};

impl UnitTypeId {
    pub const ALL: [UnitTypeId; 5] = [
        UnitTypeId::Recon,
        UnitTypeId::Infantry,
        UnitTypeId::Mbt,
        UnitTypeId::Artillery,
        UnitTypeId::Line,
    ];

    /// Catalog entry for this type.
    pub fn stats(self) -> &'static UnitType {
        match self {
            UnitTypeId::Recon => &RECON,
            UnitTypeId::Infantry => &INFANTRY,
            UnitTypeId::Mbt => &MBT,
            UnitTypeId::Artillery => &ARTILLERY,
            UnitTypeId::Line => &LINE,
        }
    }
}
