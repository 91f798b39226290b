use duel_core::{ColorPicker, Combatant, Faction};

use crate::error::GradeError;

/// The four combatants a duel scenario runs over: two Light side followed by
/// two Dark side, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub(crate) light: [Combatant; 2],
    pub(crate) dark: [Combatant; 2],
}

impl Roster {
    pub fn new(combatants: [Combatant; 4]) -> Result<Self, GradeError> {
        for (slot, combatant) in combatants.iter().enumerate() {
            let expected = if slot < 2 { Faction::Light } else { Faction::Dark };
            if combatant.faction() != expected {
                return Err(GradeError::WrongFaction {
                    slot,
                    name: combatant.name().to_owned(),
                    expected,
                    found: combatant.faction(),
                });
            }
        }
        let [l1, l2, d1, d2] = combatants;
        Ok(Self {
            light: [l1, l2],
            dark: [d1, d2],
        })
    }

    /// Luke Skywalker (10), Obi-Wan Kenobi (8), Darth Vader (9) and
    /// Darth Maul (10).
    pub fn reference(picker: &mut impl ColorPicker) -> Result<Self, GradeError> {
        Self::new([
            Combatant::new("Luke Skywalker", 10, Faction::Light, picker)?,
            Combatant::new("Obi-Wan Kenobi", 8, Faction::Light, picker)?,
            Combatant::new("Darth Vader", 9, Faction::Dark, picker)?,
            Combatant::new("Darth Maul", 10, Faction::Dark, picker)?,
        ])
    }

    pub fn first_light(&self) -> &Combatant {
        &self.light[0]
    }

    pub fn second_light(&self) -> &Combatant {
        &self.light[1]
    }

    pub fn first_dark(&self) -> &Combatant {
        &self.dark[0]
    }

    pub fn second_dark(&self) -> &Combatant {
        &self.dark[1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.light.iter().chain(self.dark.iter())
    }

    pub fn into_array(self) -> [Combatant; 4] {
        let [l1, l2] = self.light;
        let [d1, d2] = self.dark;
        [l1, l2, d1, d2]
    }
}

impl TryFrom<Vec<Combatant>> for Roster {
    type Error = GradeError;

    fn try_from(combatants: Vec<Combatant>) -> Result<Self, Self::Error> {
        let count = combatants.len();
        let combatants: [Combatant; 4] = combatants
            .try_into()
            .map_err(|_| GradeError::RosterSize(count))?;
        Self::new(combatants)
    }
}
