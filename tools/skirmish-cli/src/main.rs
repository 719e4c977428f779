//! skirmish: headless battle runner.
//!
//! Usage:
//!   skirmish run --seed 42 --ticks 200 --scenario duel --format summary
//!   skirmish live --seed 42 --seconds 2 --compression 100

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skirmish_core::enums::Side;
use skirmish_core::events::{Event, EventData};
use skirmish_core::state::StateSnapshot;
use skirmish_runtime::{BattleSession, RuntimeConfig, SessionError, TickScheduler};
use skirmish_sim::config::EngineConfig;
use skirmish_sim::scenario::{self, ScenarioId};
use skirmish_sim::Engine;

#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Run deterministic SKIRMISH battles from the command line")]
struct Cli {
    /// TOML runtime config; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step the engine as fast as possible for a fixed number of ticks
    Run {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 200)]
        ticks: u64,

        /// Simulated milliseconds per tick
        #[arg(long)]
        tick_ms: Option<u64>,

        #[arg(long, value_enum)]
        scenario: Option<ScenarioArg>,

        /// Nearest-contact detection and flat damage rolls
        #[arg(long)]
        lightweight: bool,

        #[arg(long, value_enum, default_value_t = Format::Summary)]
        format: Format,
    },
    /// Run the real-time scheduler for a wall-clock duration
    Live {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Wall-clock seconds to run
        #[arg(long, default_value_t = 2.0)]
        seconds: f64,

        #[arg(long)]
        compression: Option<f64>,

        #[arg(long, value_enum)]
        scenario: Option<ScenarioArg>,

        #[arg(long)]
        lightweight: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ScenarioArg {
    Battle,
    Duel,
}

impl From<ScenarioArg> for ScenarioId {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Battle => ScenarioId::Battle,
            ScenarioArg::Duel => ScenarioId::Duel,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Summary,
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base = match &cli.config {
        Some(path) => match RuntimeConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => RuntimeConfig::default(),
    };

    let result = match cli.command {
        Command::Run {
            seed,
            ticks,
            tick_ms,
            scenario,
            lightweight,
            format,
        } => {
            let mut config = base;
            if let Some(tick_ms) = tick_ms {
                config.tick_ms = tick_ms;
            }
            apply_overrides(&mut config, scenario, lightweight);
            cmd_run(config, seed, ticks, format).await
        }
        Command::Live {
            seed,
            seconds,
            compression,
            scenario,
            lightweight,
        } => {
            let mut config = base;
            if let Some(factor) = compression {
                config.time_compression = skirmish_core::constants::clamp_time_compression(factor);
            }
            apply_overrides(&mut config, scenario, lightweight);
            cmd_live(config, seed, seconds).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn apply_overrides(config: &mut RuntimeConfig, scenario: Option<ScenarioArg>, lightweight: bool) {
    if let Some(scenario) = scenario {
        config.scenario = scenario.into();
    }
    if lightweight {
        config.engine = EngineConfig::lightweight();
    }
}

async fn cmd_run(
    config: RuntimeConfig,
    seed: u64,
    ticks: u64,
    format: Format,
) -> Result<(), String> {
    let engine = Engine::with_config(seed, scenario::build(config.scenario), config.engine.clone());
    let scheduler = TickScheduler::new(engine, config.tick_ms, config.time_compression);

    for _ in 0..ticks {
        if scheduler.step_once().await.is_none() {
            return Err("scheduler unexpectedly running".into());
        }
    }

    let state = scheduler.snapshot().await;
    let events = scheduler.events_since(0, usize::MAX).await.events;
    info!(seed, ticks, events = events.len(), "run finished");

    match format {
        Format::Json => {
            let out = json!({ "seed": seed, "events": events, "state": state });
            let text = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
            println!("{text}");
        }
        Format::Summary => print_summary(seed, &state, &events),
    }
    Ok(())
}

async fn cmd_live(config: RuntimeConfig, seed: u64, seconds: f64) -> Result<(), String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("invalid duration: {seconds}"));
    }
    let mut session = BattleSession::new(config);
    session.start(seed).await;
    tokio::time::sleep(Duration::from_secs_f64(seconds)).await;

    let collect = async {
        let state = session.state().await?;
        let page = session.events(0, Some(usize::MAX)).await?;
        Ok::<_, SessionError>((state, page.events))
    };
    let (state, events) = collect.await.map_err(|e| e.to_string())?;
    session.shutdown().await.map_err(|e| e.to_string())?;

    print_summary(seed, &state, &events);
    Ok(())
}

#[derive(Default)]
struct SideTally {
    units: u32,
    destroyed: u32,
    routed: u32,
    hp: f64,
    shots: u32,
    hits: u32,
}

fn print_summary(seed: u64, state: &StateSnapshot, events: &[Event]) {
    println!(
        "seed {seed}  t = {:.1} s  events = {}",
        state.ts_ms as f64 / 1000.0,
        events.len()
    );

    for side in [Side::Blue, Side::Red] {
        let mut tally = SideTally::default();
        for unit in state.side(side) {
            tally.units += 1;
            tally.hp += unit.hp;
            if unit.destroyed {
                tally.destroyed += 1;
            } else if unit.routed {
                tally.routed += 1;
            }
        }
        for event in events {
            match &event.data {
                EventData::ShotFired { shooter, .. } if side_of(state, shooter) == Some(side) => {
                    tally.shots += 1
                }
                EventData::Damage { shooter, .. } if side_of(state, shooter) == Some(side) => {
                    tally.hits += 1
                }
                _ => {}
            }
        }
        println!(
            "{side:?}: {} units, {} destroyed, {} routed, {:.0} hp left, {} shots, {} hits",
            tally.units, tally.destroyed, tally.routed, tally.hp, tally.shots, tally.hits
        );
    }
}

fn side_of(state: &StateSnapshot, unit_id: &str) -> Option<Side> {
    state.units.get(unit_id).map(|u| u.side)
}
