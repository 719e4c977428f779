//! Combat resolution: fire, roll to hit, apply damage.

use tracing::error;

use skirmish_core::events::{Event, EventData};
use skirmish_core::state::State;

use crate::config::EngineConfig;
use crate::damage::{hit_probability, roll_damage};
use crate::rng::Drng;
use crate::systems::targeting::FireAssignment;

/// Resolve this tick's fire assignments in shooter-id order.
///
/// An assignment is skipped when its shooter has routed or its target was
/// already destroyed by an earlier shot this tick. Shooters hit earlier in
/// the same volley still fire.
pub fn run(
    state: &mut State,
    assignments: &[FireAssignment],
    config: &EngineConfig,
    rng: &mut Drng,
    events: &mut Vec<Event>,
) {
    let now = state.ts_ms;

    for FireAssignment { shooter, target } in assignments {
        let (Some(s), Some(t)) = (state.units.get(shooter), state.units.get(target)) else {
            continue;
        };
        if s.routed || t.is_destroyed() {
            continue;
        }

        let stats = s.unit_type();
        let target_armor = t.unit_type().armor;
        let distance = s.pos.range_to(&t.pos);
        let p = hit_probability(distance, config.base_accuracy, config.decay_m);

        let Some(s) = state.units.get_mut(shooter) else {
            continue;
        };
        debug_assert!(s.ammo > 0, "fire assignment for {shooter} with no ammo");
        let Some(remaining) = s.ammo.checked_sub(1) else {
            error!(shooter = %shooter, "fire assignment for a unit with no ammo");
            continue;
        };
        events.push(Event::new(
            now,
            EventData::ShotFired {
                shooter: shooter.clone(),
                target: target.clone(),
                dist_m: distance,
                p,
                weapon: stats.weapon,
            },
        ));
        s.ammo = remaining;
        s.last_fire_ms = now;

        if !rng.bernoulli(p) {
            continue;
        }

        let dmg = roll_damage(config.damage, stats.weapon, stats.damage, target_armor, rng);
        let Some(t) = state.units.get_mut(target) else {
            continue;
        };
        t.hp -= dmg;
        events.push(Event::new(
            now,
            EventData::Damage {
                target: target.clone(),
                dmg,
                hp: t.hp,
                shooter: shooter.clone(),
            },
        ));

        if t.is_destroyed() {
            t.hp = 0.0;
            events.push(Event::new(
                now,
                EventData::Destroyed {
                    unit_id: target.clone(),
                    killer: shooter.clone(),
                },
            ));
        }
    }
}
