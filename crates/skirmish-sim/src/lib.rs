//! Simulation engine for SKIRMISH.
//!
//! Owns the battle state, runs the step phases at a fixed delta, and
//! produces the event stream. All randomness comes from one seeded
//! generator, so runs replay exactly.

pub mod config;
pub mod damage;
pub mod engine;
pub mod rng;
pub mod scenario;
pub mod systems;

pub use engine::Engine;
pub use skirmish_core as core;
