//! Engine tuning and model selection.
//!
//! One engine covers both battle variants: the canonical typed-unit model
//! with shared spotting and the armor table, and the lightweight model
//! with nearest-contact detection and flat damage rolls.

use serde::{Deserialize, Serialize};

use skirmish_core::constants::*;

/// How units find each other each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionModel {
    /// Every unrouted detector marks every opposing unit inside
    /// `sensor_range * target visibility`. Indirect fire may use any
    /// friendly sighting.
    #[default]
    SharedSpotting,
    /// Every unrouted detector pairs with the single nearest living opposing
    /// unit inside raw sensor range and reports it as a `Contact`.
    NearestContact,
}

/// How much damage a hit does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum DamageModel {
    /// Shooter's base damage scaled by the weapon-vs-armor table.
    #[default]
    ArmorTable,
    /// A uniform draw in `[min, max)` per hit, ignoring weapon and armor.
    FlatUniform { min: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hit probability at zero range, before the cap.
    pub base_accuracy: f64,
    /// Range (m) over which hit probability decays by a factor of e.
    pub decay_m: f64,
    /// Hp fraction below which a unit tests morale.
    pub rout_threshold: f64,
    /// Chance per tick that a unit below the threshold routs.
    pub rout_chance: f64,
    /// Arrival tolerance (m) for move orders.
    pub arrive_epsilon: f64,
    pub detection: DetectionModel,
    pub damage: DamageModel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_accuracy: BASE_ACCURACY,
            decay_m: ACCURACY_DECAY_M,
            rout_threshold: ROUT_HP_FRACTION,
            rout_chance: ROUT_CHANCE,
            arrive_epsilon: ARRIVE_EPSILON,
            detection: DetectionModel::SharedSpotting,
            damage: DamageModel::ArmorTable,
        }
    }
}

impl EngineConfig {
    /// The lightweight battle variant.
    pub fn lightweight() -> Self {
        Self {
            base_accuracy: LIGHT_BASE_ACCURACY,
            decay_m: LIGHT_ACCURACY_DECAY_M,
            detection: DetectionModel::NearestContact,
            damage: DamageModel::FlatUniform {
                min: LIGHT_DAMAGE_MIN,
                max: LIGHT_DAMAGE_MAX,
            },
            ..Self::default()
        }
    }
}
