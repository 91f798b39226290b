//! Combatant model and the lightsaber duel rules.

pub mod combatant;
pub mod error;
pub mod fight;
pub mod rng;

pub use combatant::{Combatant, Faction, LightsaberColor};
pub use error::DuelError;
pub use fight::{fight, resolve, FightOutcome, Resolution, Side, FIGHT_REFUSED, NOTHING_HAPPENS};
pub use rng::{ColorPicker, FixedColor, SimulationParams, SimulationRng, DEFAULT_SEED};
