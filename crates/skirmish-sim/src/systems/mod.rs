//! Per-tick phases of the engine step.
//!
//! Each phase is a free function over `&mut State` (or `&State` for
//! read-only phases). Phases own no state of their own; the engine calls
//! them in a fixed order and collects their events.

pub mod combat;
pub mod morale;
pub mod movement;
pub mod orders;
pub mod spotting;
pub mod targeting;
