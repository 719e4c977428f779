//! Target selection. Read-only: picks at most one target per shooter.

use skirmish_core::state::{State, Unit};

/// A shooter and the target it will engage this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireAssignment {
    pub shooter: String,
    pub target: String,
}

/// Whether `shooter` may fire on `target` at simulation time `now_ms`.
///
/// Requires: reload complete, ammo left, target within weapon range, and
/// a sighting. Direct-fire, small-arms and anti-tank weapons need the
/// shooter's own sighting; indirect fire accepts a sighting by any friendly.
pub fn can_fire_at(shooter: &Unit, target: &Unit, now_ms: u64) -> bool {
    let stats = shooter.unit_type();

    let since_s = now_ms.saturating_sub(shooter.last_fire_ms) as f64 / 1000.0;
    if since_s < stats.reload_s {
        return false;
    }
    if shooter.ammo == 0 {
        return false;
    }
    if shooter.pos.range_to(&target.pos) > stats.weapon_range_m {
        return false;
    }

    if stats.weapon.requires_direct_sight() {
        target.spotted_by.contains(&shooter.id)
    } else {
        // spotted_by only ever holds the target's opponents, our friendlies.
        !target.spotted_by.is_empty()
    }
}

/// For every active unit, the nearest living opponent it can fire on.
/// Equal distances resolve to the lowest target id.
pub fn run(state: &State) -> Vec<FireAssignment> {
    let now = state.ts_ms;
    let mut assignments = Vec::new();

    for shooter in state.units.values().filter(|u| u.is_active()) {
        let mut best: Option<(&Unit, f64)> = None;
        for target in state.units.values() {
            if target.side == shooter.side || target.is_destroyed() {
                continue;
            }
            if !can_fire_at(shooter, target, now) {
                continue;
            }
            let distance = shooter.pos.range_to(&target.pos);
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((target, distance));
            }
        }
        if let Some((target, _)) = best {
            assignments.push(FireAssignment {
                shooter: shooter.id.clone(),
                target: target.id.clone(),
            });
        }
    }

    assignments
}
