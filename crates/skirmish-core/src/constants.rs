//! Simulation constants and tuning parameters.

// --- Timing ---

/// Default simulated duration of one tick (ms).
pub const DEFAULT_TICK_MS: u64 = 500;

/// Default time compression (simulated seconds per wall-clock second).
pub const DEFAULT_TIME_COMPRESSION: f64 = 30.0;

/// Lower bound for time compression.
pub const MIN_TIME_COMPRESSION: f64 = 0.1;

/// Upper bound for time compression.
pub const MAX_TIME_COMPRESSION: f64 = 1000.0;

// --- Movement ---

/// Distance (m) at which a unit counts as having reached its move target.
pub const ARRIVE_EPSILON: f64 = 0.1;

// --- Hit probability ---

/// Base accuracy at zero range (canonical model).
pub const BASE_ACCURACY: f64 = 0.7;

/// Range (m) over which accuracy decays by a factor of e (canonical model).
pub const ACCURACY_DECAY_M: f64 = 800.0;

/// Base accuracy of the lightweight model.
pub const LIGHT_BASE_ACCURACY: f64 = 0.6;

/// Accuracy decay range of the lightweight model.
pub const LIGHT_ACCURACY_DECAY_M: f64 = 600.0;

/// Hard cap on hit probability.
pub const MAX_HIT_PROBABILITY: f64 = 0.95;

// --- Damage ---

/// Flat damage bounds of the lightweight model.
pub const LIGHT_DAMAGE_MIN: f64 = 8.0;
pub const LIGHT_DAMAGE_MAX: f64 = 15.0;

// --- Morale ---

/// Units below this hp fraction test morale every tick.
pub const ROUT_HP_FRACTION: f64 = 0.3;

/// Chance per tick that a unit below the threshold breaks.
pub const ROUT_CHANCE: f64 = 0.5;

/// Clamp a time compression factor into the supported range.
pub fn clamp_time_compression(factor: f64) -> f64 {
    if factor.is_nan() {
        return MIN_TIME_COMPRESSION;
    }
    factor.clamp(MIN_TIME_COMPRESSION, MAX_TIME_COMPRESSION)
}
