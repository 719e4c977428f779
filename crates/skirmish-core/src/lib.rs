//! Core types and definitions for the SKIRMISH battle simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, the unit-type catalog, orders, events, state and snapshots,
//! and tuning constants. It has no dependency on any runtime.

pub mod catalog;
pub mod constants;
pub mod enums;
pub mod events;
pub mod orders;
pub mod state;
pub mod types;
