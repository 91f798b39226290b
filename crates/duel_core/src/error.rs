use thiserror::Error;

use crate::combatant::{Faction, LightsaberColor};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuelError {
    #[error("{faction} side combatants cannot carry a {color} lightsaber")]
    ColorNotAllowed {
        faction: Faction,
        color: LightsaberColor,
    },
    #[error("colour picker returned index {index}, but only {available} colours are available")]
    PickOutOfRange { index: usize, available: usize },
}
