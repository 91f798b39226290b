use duel_core::{DuelError, Faction};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    #[error("a duel roster needs exactly 4 combatants, got {0}")]
    RosterSize(usize),
    #[error("roster slot {slot} ({name}) must be {expected} side, found {found}")]
    WrongFaction {
        slot: usize,
        name: String,
        expected: Faction,
        found: Faction,
    },
    #[error(transparent)]
    Duel(#[from] DuelError),
}
