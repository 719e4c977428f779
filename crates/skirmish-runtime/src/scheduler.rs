//! Tick scheduler: drives the engine on a wall-clock cadence.
//!
//! The engine lives behind a mutex that only the tick path writes through.
//! Orders arrive on an unbounded channel and are drained in full at each
//! tick boundary. The time-compression factor is published on a `watch`
//! channel and read when the next pause is computed, so a change never
//! cuts a pause short or drops a tick.

use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::{mpsc, oneshot, watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, trace, warn};

use skirmish_core::constants::clamp_time_compression;
use skirmish_core::orders::Order;
use skirmish_core::state::StateSnapshot;
use skirmish_sim::Engine;

use crate::event_log::{EventLog, EventPage};

/// Wall-clock pause for one tick: `tick_seconds / compression`.
pub fn tick_interval(tick_ms: u64, time_compression: f64) -> Duration {
    let seconds = tick_ms as f64 / 1000.0 / clamp_time_compression(time_compression);
    Duration::from_secs_f64(seconds)
}

/// State shared between the handle and the loop task.
struct Shared {
    engine: Mutex<Engine>,
    orders_rx: Mutex<mpsc::UnboundedReceiver<Vec<Order>>>,
    log: RwLock<EventLog>,
    tick_ms: u64,
}

impl Shared {
    /// Drain queued orders, step once, log the events.
    ///
    /// The engine lock is held from the drain through the step, so
    /// concurrent callers apply their batches in drain order.
    async fn tick(&self) -> Range<u64> {
        let mut engine = self.engine.lock().await;

        let mut batched = Vec::new();
        {
            let mut rx = self.orders_rx.lock().await;
            loop {
                match rx.try_recv() {
                    Ok(batch) => batched.extend(batch),
                    Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                }
            }
        }

        if !batched.is_empty() {
            debug!(count = batched.len(), "applying orders");
            engine.apply_orders(batched);
        }
        let events = engine.step(self.tick_ms);

        if !events.is_empty() {
            trace!(count = events.len(), "tick produced events");
        }
        let range = self.log.write().await.append_many(events);
        drop(engine);
        range
    }
}

struct LoopHandle {
    task: JoinHandle<()>,
    shutdown: oneshot::Sender<()>,
}

pub struct TickScheduler {
    shared: Arc<Shared>,
    orders_tx: mpsc::UnboundedSender<Vec<Order>>,
    compression: watch::Sender<f64>,
    running: Option<LoopHandle>,
}

impl TickScheduler {
    /// A stopped scheduler around `engine`.
    pub fn new(engine: Engine, tick_ms: u64, time_compression: f64) -> Self {
        let (orders_tx, orders_rx) = mpsc::unbounded_channel();
        let (compression, _) = watch::channel(clamp_time_compression(time_compression));
        Self {
            shared: Arc::new(Shared {
                engine: Mutex::new(engine),
                orders_rx: Mutex::new(orders_rx),
                log: RwLock::new(EventLog::new()),
                tick_ms,
            }),
            orders_tx,
            compression,
            running: None,
        }
    }

    /// Spawn the tick loop. No-op if it is already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.running.is_some() {
            return;
        }
        let (shutdown, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(run_loop(
            Arc::clone(&self.shared),
            self.compression.subscribe(),
            shutdown_rx,
        ));
        self.running = Some(LoopHandle { task, shutdown });
        info!(tick_ms = self.shared.tick_ms, "tick loop started");
    }

    /// Stop the loop and wait for it to exit. Applied ticks are kept.
    pub async fn stop(&mut self) {
        let Some(handle) = self.running.take() else {
            return;
        };
        // The loop may already have exited if the receiver is gone.
        let _ = handle.shutdown.send(());
        if let Err(e) = handle.task.await {
            error!(error = %e, "tick loop terminated abnormally");
        }
        info!("tick loop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Queue a batch for the next tick boundary. Never blocks.
    pub fn enqueue_orders(&self, orders: Vec<Order>) {
        if orders.is_empty() {
            return;
        }
        debug!(count = orders.len(), "enqueuing orders");
        if self.orders_tx.send(orders).is_err() {
            // The receiver lives in `shared`, which outlives every sender.
            error!("order queue closed");
        }
    }

    /// Consistent copy of the current state. Waits out an in-flight tick.
    pub async fn snapshot(&self) -> StateSnapshot {
        self.shared.engine.lock().await.snapshot()
    }

    pub async fn events_since(&self, offset: i64, limit: usize) -> EventPage {
        self.shared.log.read().await.since(offset, limit)
    }

    pub async fn event_count(&self) -> usize {
        self.shared.log.read().await.len()
    }

    /// Clamp and publish a new factor. Applies from the next pause on.
    pub fn set_time_compression(&self, factor: f64) -> f64 {
        let clamped = clamp_time_compression(factor);
        self.compression.send_replace(clamped);
        info!(
            requested = factor,
            time_compression = clamped,
            interval_ms = tick_interval(self.shared.tick_ms, clamped).as_secs_f64() * 1000.0,
            "time compression set"
        );
        clamped
    }

    pub fn time_compression(&self) -> f64 {
        *self.compression.borrow()
    }

    pub fn tick_ms(&self) -> u64 {
        self.shared.tick_ms
    }

    /// Run one tick by hand and return the offsets of its events.
    ///
    /// Only while stopped: the loop is the single stepper when running,
    /// so this returns `None` then.
    pub async fn step_once(&self) -> Option<Range<u64>> {
        if self.is_running() {
            warn!("step_once ignored while the tick loop is running");
            return None;
        }
        Some(self.shared.tick().await)
    }
}

async fn run_loop(
    shared: Arc<Shared>,
    compression: watch::Receiver<f64>,
    mut shutdown: oneshot::Receiver<()>,
) {
    loop {
        shared.tick().await;

        let pause = tick_interval(shared.tick_ms, *compression.borrow());
        tokio::select! {
            _ = tokio::time::sleep(pause) => {}
            _ = &mut shutdown => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::enums::OrderKind;
    use skirmish_core::events::{EventData, EventKind};
    use skirmish_core::types::Position;
    use skirmish_sim::scenario;

    fn duel_scheduler() -> TickScheduler {
        TickScheduler::new(Engine::new(42, scenario::duel(1000.0, 9000.0)), 500, 30.0)
    }

    #[test]
    fn test_tick_interval_scales_with_compression() {
        assert_eq!(tick_interval(500, 1.0), Duration::from_millis(500));
        assert_eq!(tick_interval(500, 10.0), Duration::from_millis(50));
        // Out-of-range factors are clamped before dividing.
        assert_eq!(tick_interval(500, 0.0), Duration::from_secs(5));
        assert_eq!(tick_interval(500, 1e9), tick_interval(500, 1000.0));
    }

    #[tokio::test]
    async fn test_step_once_drains_all_batches() {
        let scheduler = duel_scheduler();
        scheduler.enqueue_orders(vec![Order::move_to("B1", Position::new(2000.0, 0.0))]);
        scheduler.enqueue_orders(vec![Order::attack("R1", "B1")]);

        let range = scheduler.step_once().await.unwrap();
        assert_eq!(range, 0..2);

        let page = scheduler.events_since(0, 10).await;
        assert!(page
            .events
            .iter()
            .all(|e| e.kind() == EventKind::OrderAccepted));

        let snap = scheduler.snapshot().await;
        assert_eq!(snap.ts_ms, 500);
        assert_eq!(snap.units["B1"].pos.x, 1001.0);
        assert_eq!(snap.units["R1"].target_id.as_deref(), Some("B1"));
    }

    #[tokio::test]
    async fn test_concurrent_steps_apply_batches_in_order() {
        let scheduler = duel_scheduler();
        scheduler.enqueue_orders(vec![Order::move_to("B1", Position::new(2000.0, 0.0))]);
        scheduler.enqueue_orders(vec![Order::defend("B1")]);

        let (a, b) = tokio::join!(scheduler.step_once(), scheduler.step_once());
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_eq!(a.end - a.start + b.end - b.start, 2);

        let page = scheduler.events_since(0, 10).await;
        let kinds: Vec<OrderKind> = page
            .events
            .iter()
            .filter_map(|e| match &e.data {
                EventData::OrderAccepted { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect();
        assert_eq!(kinds, vec![OrderKind::Move, OrderKind::Defend]);

        let snap = scheduler.snapshot().await;
        assert_eq!(snap.ts_ms, 1000);
        assert!(snap.units["B1"].intent_target_pos.is_none(), "Defend was queued last");
        assert_eq!(snap.units["B1"].pos.x, 1000.0);
    }

    #[tokio::test]
    async fn test_set_time_compression_clamps() {
        let scheduler = duel_scheduler();
        assert_eq!(scheduler.time_compression(), 30.0);
        assert_eq!(scheduler.set_time_compression(5000.0), 1000.0);
        assert_eq!(scheduler.time_compression(), 1000.0);
        assert_eq!(scheduler.set_time_compression(0.01), 0.1);
        assert_eq!(scheduler.set_time_compression(f64::NAN), 0.1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_runs_until_stopped() {
        let mut scheduler = duel_scheduler();
        scheduler.start();
        scheduler.start();
        assert!(scheduler.is_running());

        tokio::time::sleep(Duration::from_millis(200)).await;
        scheduler.stop().await;
        assert!(!scheduler.is_running());

        let ts = scheduler.snapshot().await.ts_ms;
        assert!(ts >= 500, "At least one tick should have run, ts = {ts}");
        assert_eq!(ts % 500, 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(scheduler.snapshot().await.ts_ms, ts, "No ticks after stop");
    }

    #[tokio::test(start_paused = true)]
    async fn test_step_once_refused_while_running() {
        let mut scheduler = duel_scheduler();
        scheduler.start();
        assert!(scheduler.step_once().await.is_none());
        scheduler.stop().await;
        assert!(scheduler.step_once().await.is_some());
    }

    #[tokio::test]
    async fn test_stop_when_stopped_is_noop() {
        let mut scheduler = duel_scheduler();
        scheduler.stop().await;
        assert!(!scheduler.is_running());
    }
}
