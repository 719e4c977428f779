//! Order application, the first phase of a step.

use tracing::debug;

use skirmish_core::events::{Event, EventData};
use skirmish_core::orders::{Command, Order};
use skirmish_core::state::State;

/// Apply every pending order in submission order, then clear the buffer.
///
/// Orders for unknown or routed units are dropped. When one batch holds
/// several orders for the same unit, each is applied in turn, so the last
/// one decides the final intent.
pub fn run(state: &mut State, pending: &mut Vec<Order>, events: &mut Vec<Event>) {
    let now = state.ts_ms;
    for order in pending.drain(..) {
        let Some(unit) = state.units.get_mut(&order.unit_id) else {
            debug!(unit_id = %order.unit_id, "dropping order for unknown unit");
            continue;
        };
        if unit.routed {
            debug!(unit_id = %order.unit_id, "dropping order for routed unit");
            continue;
        }

        let kind = order.command.kind();
        let (to, target) = match order.command {
            Command::Move { target_pos } => {
                unit.intent_target_pos = Some(target_pos);
                (Some(target_pos), None)
            }
            Command::Attack { target_unit_id } => {
                unit.target_id = Some(target_unit_id.clone());
                (None, Some(target_unit_id))
            }
            Command::Defend => {
                unit.intent_target_pos = None;
                unit.target_id = None;
                (None, None)
            }
        };

        events.push(Event::new(
            now,
            EventData::OrderAccepted {
                unit_id: unit.id.clone(),
                kind,
                to,
                target,
            },
        ));
    }
}
