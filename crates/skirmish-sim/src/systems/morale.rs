//! Morale. Badly damaged units may break and rout, permanently.

use skirmish_core::events::{Event, EventData};
use skirmish_core::state::State;

use crate::config::EngineConfig;
use crate::rng::Drng;

/// Every unit still holding below the hp threshold rolls once per tick.
/// Destroyed units count as hp fraction 0 and roll too.
pub fn run(state: &mut State, config: &EngineConfig, rng: &mut Drng, events: &mut Vec<Event>) {
    let now = state.ts_ms;
    for unit in state.units.values_mut() {
        if unit.routed || unit.hp_fraction() >= config.rout_threshold {
            continue;
        }
        if rng.bernoulli(config.rout_chance) {
            unit.routed = true;
            events.push(Event::new(
                now,
                EventData::Routed {
                    unit_id: unit.id.clone(),
                },
            ));
        }
    }
}
