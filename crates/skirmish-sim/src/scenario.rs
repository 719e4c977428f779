//! Scenario definitions: the starting state of a battle.

use serde::{Deserialize, Serialize};

use skirmish_core::enums::{Side, UnitTypeId};
use skirmish_core::state::{State, Unit};
use skirmish_core::types::Position;

/// Battle id used for the single local battle.
pub const LOCAL_BATTLE_ID: &str = "local";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioId {
    /// Combined-arms battle on a 10 km x 10 km field.
    #[default]
    Battle,
    /// Two line sections 500 m apart, already in contact.
    Duel,
}

/// Build the starting state for a scenario.
pub fn build(scenario: ScenarioId) -> State {
    match scenario {
        ScenarioId::Battle => default_battle(),
        ScenarioId::Duel => duel(1000.0, 1500.0),
    }
}

/// Two mirrored combined-arms groups: recon screen forward, infantry on
/// the flanks, tanks in the centre, a howitzer in the rear.
pub fn default_battle() -> State {
    let u = |id: &str, side, ty, x, y| Unit::new(id, side, ty, Position::new(x, y));
    State::new(
        LOCAL_BATTLE_ID,
        [
            u("B-RECON-1", Side::Blue, UnitTypeId::Recon, 1000.0, 5000.0),
            u("B-INF-1", Side::Blue, UnitTypeId::Infantry, 1500.0, 3000.0),
            u("B-INF-2", Side::Blue, UnitTypeId::Infantry, 1500.0, 7000.0),
            u("B-MBT-1", Side::Blue, UnitTypeId::Mbt, 2000.0, 4000.0),
            u("B-MBT-2", Side::Blue, UnitTypeId::Mbt, 2000.0, 6000.0),
            u("B-ARTY-1", Side::Blue, UnitTypeId::Artillery, 500.0, 5000.0),
            u("R-RECON-1", Side::Red, UnitTypeId::Recon, 9000.0, 5000.0),
            u("R-INF-1", Side::Red, UnitTypeId::Infantry, 8500.0, 3000.0),
            u("R-INF-2", Side::Red, UnitTypeId::Infantry, 8500.0, 7000.0),
            u("R-MBT-1", Side::Red, UnitTypeId::Mbt, 8000.0, 4000.0),
            u("R-MBT-2", Side::Red, UnitTypeId::Mbt, 8000.0, 6000.0),
            u("R-ARTY-1", Side::Red, UnitTypeId::Artillery, 9500.0, 5000.0),
        ],
    )
}

/// One BLUE (`B1`) and one RED (`R1`) line section on the x axis.
pub fn duel(blue_x: f64, red_x: f64) -> State {
    State::new(
        LOCAL_BATTLE_ID,
        [
            Unit::new("B1", Side::Blue, UnitTypeId::Line, Position::new(blue_x, 0.0)),
            Unit::new("R1", Side::Red, UnitTypeId::Line, Position::new(red_x, 0.0)),
        ],
    )
}
