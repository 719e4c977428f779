//! Battle session: the one owned handle to the current battle.
//!
//! Holds the runtime config and, once started, the scheduler for the live
//! battle. Every query before the first `start` fails with
//! [`SessionError::NotStarted`].

use std::path::Path;

use tracing::{debug, info};

use skirmish_core::orders::{Order, OrderRequest};
use skirmish_core::state::StateSnapshot;
use skirmish_sim::scenario::{self, LOCAL_BATTLE_ID};
use skirmish_sim::Engine;

use crate::config::RuntimeConfig;
use crate::error::SessionError;
use crate::event_log::EventPage;
use crate::scheduler::TickScheduler;

#[derive(Default)]
pub struct BattleSession {
    config: RuntimeConfig,
    scheduler: Option<TickScheduler>,
}

impl BattleSession {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            scheduler: None,
        }
    }

    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        Ok(Self::new(RuntimeConfig::load(path)?))
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn is_started(&self) -> bool {
        self.scheduler.is_some()
    }

    /// Start a fresh battle, discarding any previous state and event log.
    /// Returns the battle id.
    pub async fn start(&mut self, seed: u64) -> String {
        if let Some(mut previous) = self.scheduler.take() {
            previous.stop().await;
        }

        let state = scenario::build(self.config.scenario);
        let engine = Engine::with_config(seed, state, self.config.engine.clone());
        let mut scheduler =
            TickScheduler::new(engine, self.config.tick_ms, self.config.time_compression);
        scheduler.start();
        self.scheduler = Some(scheduler);

        info!(
            seed,
            scenario = ?self.config.scenario,
            battle_id = LOCAL_BATTLE_ID,
            "battle started"
        );
        LOCAL_BATTLE_ID.to_string()
    }

    fn scheduler(&self) -> Result<&TickScheduler, SessionError> {
        self.scheduler.as_ref().ok_or(SessionError::NotStarted)
    }

    /// Validate and queue orders. Malformed requests are dropped.
    /// Returns how many were queued.
    pub fn orders(&self, requests: Vec<OrderRequest>) -> Result<usize, SessionError> {
        let scheduler = self.scheduler()?;
        let submitted = requests.len();
        let orders: Vec<Order> = requests
            .into_iter()
            .filter_map(|req| {
                let unit_id = req.unit_id.clone();
                let order = req.into_order();
                if order.is_none() {
                    debug!(unit_id = %unit_id, "malformed order request dropped");
                }
                order
            })
            .collect();

        let queued = orders.len();
        if queued < submitted {
            debug!(submitted, queued, "some order requests were malformed");
        }
        scheduler.enqueue_orders(orders);
        Ok(queued)
    }

    /// Queue already-validated orders.
    pub fn submit(&self, orders: Vec<Order>) -> Result<usize, SessionError> {
        let scheduler = self.scheduler()?;
        let queued = orders.len();
        scheduler.enqueue_orders(orders);
        Ok(queued)
    }

    pub async fn state(&self) -> Result<StateSnapshot, SessionError> {
        Ok(self.scheduler()?.snapshot().await)
    }

    /// Page of events from `since`. `limit` defaults to the configured
    /// page size.
    pub async fn events(
        &self,
        since: i64,
        limit: Option<usize>,
    ) -> Result<EventPage, SessionError> {
        let limit = limit.unwrap_or(self.config.event_page_limit);
        Ok(self.scheduler()?.events_since(since, limit).await)
    }

    pub fn time_compression(&self) -> Result<f64, SessionError> {
        Ok(self.scheduler()?.time_compression())
    }

    /// Returns the factor actually applied after clamping.
    pub fn set_time_compression(&self, factor: f64) -> Result<f64, SessionError> {
        Ok(self.scheduler()?.set_time_compression(factor))
    }

    /// Stop the running battle. The session returns to not-started.
    pub async fn shutdown(&mut self) -> Result<(), SessionError> {
        let mut scheduler = self.scheduler.take().ok_or(SessionError::NotStarted)?;
        scheduler.stop().await;
        info!("battle shut down");
        Ok(())
    }
}
