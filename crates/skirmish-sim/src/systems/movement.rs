//! Movement integration.
//!
//! Active units with a move intent advance straight toward it by
//! `speed * dt`, never overshooting. Units within the arrival tolerance
//! stay put. Movement emits no events.

use skirmish_core::state::State;

pub fn run(state: &mut State, dt_ms: u64, arrive_epsilon: f64) {
    let dt = dt_ms as f64 / 1000.0;
    for unit in state.units.values_mut() {
        if !unit.is_active() {
            continue;
        }
        let Some(target) = unit.intent_target_pos else {
            continue;
        };

        let delta = target.as_dvec2() - unit.pos.as_dvec2();
        let remaining = delta.length();
        if remaining < arrive_epsilon {
            continue;
        }

        let step = (unit.unit_type().speed_mps * dt).min(remaining);
        let direction = delta / remaining;
        unit.pos = (unit.pos.as_dvec2() + direction * step).into();
    }
}
