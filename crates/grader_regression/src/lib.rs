//! Helpers for deterministic regression tests.

use duel_core::{resolve, Combatant, Faction, LightsaberColor, SimulationRng};
use grader_core::{GradeError, Roster};
use serde_json::json;

pub use duel_core::DEFAULT_SEED;

/// Reference roster with Light side colours drawn from `seed`.
pub fn seeded_roster(seed: u64) -> Result<Roster, GradeError> {
    Roster::reference(&mut SimulationRng::new(seed))
}

/// Reference roster with Luke on Blue and Obi-Wan on Green, so fight
/// messages never depend on the RNG.
pub fn pinned_roster() -> Result<Roster, GradeError> {
    Roster::new([
        Combatant::with_color("Luke Skywalker", 10, Faction::Light, LightsaberColor::Blue)?,
        Combatant::with_color("Obi-Wan Kenobi", 8, Faction::Light, LightsaberColor::Green)?,
        Combatant::with_color("Darth Vader", 9, Faction::Dark, LightsaberColor::Red)?,
        Combatant::with_color("Darth Maul", 10, Faction::Dark, LightsaberColor::Red)?,
    ])
}

pub fn duel_trace(attacker: &Combatant, defender: &Combatant) -> serde_json::Value {
    let resolution = resolve(attacker, defender);
    json!({
        "outcome": resolution.outcome.to_string(),
        "attacker_hp": resolution.attacker_hit_points,
        "defender_hp": resolution.defender_hit_points,
    })
}
