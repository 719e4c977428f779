//! Simulation engine: the deterministic state-transition function.
//!
//! `Engine` owns the battle `State`, buffers incoming orders, and advances
//! the battle one fixed delta at a time. Completely headless, so the same
//! seed and order sequence always replay to identical events.

use tracing::{error, trace};

use skirmish_core::events::Event;
use skirmish_core::orders::Order;
use skirmish_core::state::{State, StateSnapshot};

use crate::config::EngineConfig;
use crate::rng::Drng;
use crate::systems;

pub struct Engine {
    state: State,
    rng: Drng,
    config: EngineConfig,
    pending_orders: Vec<Order>,
}

impl Engine {
    /// Engine with the canonical model.
    pub fn new(seed: u64, initial_state: State) -> Self {
        Self::with_config(seed, initial_state, EngineConfig::default())
    }

    pub fn with_config(seed: u64, initial_state: State, config: EngineConfig) -> Self {
        Self {
            state: initial_state,
            rng: Drng::new(seed),
            config,
            pending_orders: Vec::new(),
        }
    }

    /// Buffer orders for the next step. Does not touch the state.
    pub fn apply_orders(&mut self, orders: impl IntoIterator<Item = Order>) {
        self.pending_orders.extend(orders);
    }

    /// Advance the battle by `dt_ms` and return this step's events, in
    /// phase order.
    pub fn step(&mut self, dt_ms: u64) -> Vec<Event> {
        let mut events = Vec::new();
        let orders_in = self.pending_orders.len();

        // 1. Orders
        systems::orders::run(&mut self.state, &mut self.pending_orders, &mut events);
        // 2. Movement
        systems::movement::run(&mut self.state, dt_ms, self.config.arrive_epsilon);
        // 3. Spotting
        systems::spotting::run(&mut self.state, self.config.detection, &mut events);
        // 4. Targeting
        let assignments = systems::targeting::run(&self.state);
        // 5. Combat
        systems::combat::run(
            &mut self.state,
            &assignments,
            &self.config,
            &mut self.rng,
            &mut events,
        );
        // 6. Morale
        systems::morale::run(&mut self.state, &self.config, &mut self.rng, &mut events);

        self.check_invariants();

        trace!(
            ts_ms = self.state.ts_ms,
            orders = orders_in,
            shooters = assignments.len(),
            events = events.len(),
            "step"
        );

        // 7. Clock
        self.state.ts_ms += dt_ms;
        events
    }

    /// Read-only access to the authoritative state.
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn pending_orders(&self) -> &[Order] {
        &self.pending_orders
    }

    /// Mutable state access for test setup.
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Guards that only an engine bug could break.
    fn check_invariants(&self) {
        for unit in self.state.units.values() {
            let max_ammo = unit.unit_type().max_ammo;
            let ammo_ok = unit.ammo <= max_ammo;
            if !ammo_ok {
                error!(unit_id = %unit.id, ammo = unit.ammo, max_ammo, "ammo above type maximum");
            }
            debug_assert!(ammo_ok, "ammo invariant broken for {}", unit.id);

            for spotter in &unit.spotted_by {
                let opposing = self
                    .state
                    .units
                    .get(spotter)
                    .is_some_and(|s| s.side != unit.side);
                if !opposing {
                    error!(
                        unit_id = %unit.id,
                        spotter = %spotter,
                        "spotted by a non-opposing unit"
                    );
                }
                debug_assert!(opposing, "spotting invariant broken for {}", unit.id);
            }
        }
    }
}
