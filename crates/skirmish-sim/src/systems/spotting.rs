//! Detection. Rebuilds every unit's spotted-by set from scratch each tick.
//!
//! Sightings are one-directional: A spotting B says nothing about B
//! spotting A. Routed units stop observing; destroyed units still report.

use skirmish_core::events::{Event, EventData};
use skirmish_core::state::{State, Unit};

use crate::config::DetectionModel;

/// Shared-spotting rule: inside the detector's sensor range scaled by the
/// target's visibility. Conspicuous targets are seen beyond base range.
pub fn can_detect(detector: &Unit, target: &Unit) -> bool {
    let effective_range = detector.unit_type().sensor_range_m * target.unit_type().visibility;
    detector.pos.range_to(&target.pos) <= effective_range
}

pub fn run(state: &mut State, model: DetectionModel, events: &mut Vec<Event>) {
    for unit in state.units.values_mut() {
        unit.spotted_by.clear();
    }

    // (target, detector) pairs, collected before the sets are written.
    let sightings = match model {
        DetectionModel::SharedSpotting => shared_sightings(state),
        DetectionModel::NearestContact => nearest_contacts(state, events),
    };

    for (target_id, detector_id) in sightings {
        if let Some(target) = state.units.get_mut(&target_id) {
            target.spotted_by.insert(detector_id);
        }
    }
}

fn shared_sightings(state: &State) -> Vec<(String, String)> {
    let mut sightings = Vec::new();
    for detector in state.units.values().filter(|u| !u.routed) {
        for target in state.units.values() {
            if target.side != detector.side && can_detect(detector, target) {
                sightings.push((target.id.clone(), detector.id.clone()));
            }
        }
    }
    sightings
}

/// Each unrouted detector pairs with its nearest living opponent in raw
/// sensor range. Ties resolve to the lowest unit id.
fn nearest_contacts(state: &State, events: &mut Vec<Event>) -> Vec<(String, String)> {
    let mut sightings = Vec::new();
    for detector in state.units.values().filter(|u| !u.routed) {
        let sensor_range = detector.unit_type().sensor_range_m;
        let mut best: Option<(&Unit, f64)> = None;

        for target in state.units.values() {
            if target.side == detector.side || target.is_destroyed() {
                continue;
            }
            let distance = detector.pos.range_to(&target.pos);
            if distance > sensor_range {
                continue;
            }
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((target, distance));
            }
        }

        if let Some((target, _)) = best {
            events.push(Event::new(
                state.ts_ms,
                EventData::Contact {
                    unit_id: detector.id.clone(),
                    target_id: target.id.clone(),
                },
            ));
            sightings.push((target.id.clone(), detector.id.clone()));
        }
    }
    sightings
}
