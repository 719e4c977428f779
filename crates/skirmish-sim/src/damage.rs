//! Hit probability and weapon-vs-armor damage.

use skirmish_core::constants::MAX_HIT_PROBABILITY;
use skirmish_core::enums::WeaponType;

use crate::config::DamageModel;
use crate::rng::Drng;

/// `p = clamp(base * exp(-distance / decay), 0, 0.95)`.
pub fn hit_probability(distance_m: f64, base_accuracy: f64, decay_m: f64) -> f64 {
    (base_accuracy * (-distance_m / decay_m).exp()).clamp(0.0, MAX_HIT_PROBABILITY)
}

/// Damage multiplier for a weapon striking a given armor level.
///
/// | weapon        | 0   | 1   | 2   | 3   |
/// |---------------|-----|-----|-----|-----|
/// | small arms    | 1.0 | 1.0 | 0.1 | 0.1 |
/// | anti-tank     | 1.0 | 1.0 | 1.5 | 1.5 |
/// | direct fire   | 1.5 | 1.5 | 1.2 | 0.8 |
/// | indirect fire | 2.0 | 1.2 | 0.6 | 0.6 |
pub fn armor_multiplier(weapon: WeaponType, armor: u8) -> f64 {
    match (weapon, armor) {
        (WeaponType::SmallArms, 0..=1) => 1.0,
        (WeaponType::SmallArms, _) => 0.1,
        (WeaponType::AntiTank, 0..=1) => 1.0,
        (WeaponType::AntiTank, _) => 1.5,
        (WeaponType::DirectFire, 0..=1) => 1.5,
        (WeaponType::DirectFire, 2) => 1.2,
        (WeaponType::DirectFire, _) => 0.8,
        (WeaponType::IndirectFire, 0) => 2.0,
        (WeaponType::IndirectFire, 1) => 1.2,
        (WeaponType::IndirectFire, _) => 0.6,
    }
}

/// Damage dealt by one hit. The flat model consumes one extra draw.
pub fn roll_damage(
    model: DamageModel,
    weapon: WeaponType,
    base_damage: f64,
    target_armor: u8,
    rng: &mut Drng,
) -> f64 {
    match model {
        DamageModel::ArmorTable => base_damage * armor_multiplier(weapon, target_armor),
        DamageModel::FlatUniform { min, max } => rng.uniform(min, max),
    }
}
