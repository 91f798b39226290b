use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DuelError;
use crate::rng::ColorPicker;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Light,
    Dark,
}

impl Faction {
    /// Colours a combatant of this faction may carry. Dark has exactly one.
    pub fn allowed_colors(self) -> &'static [LightsaberColor] {
        match self {
            Faction::Light => &LightsaberColor::LIGHT_SIDE,
            Faction::Dark => &LightsaberColor::DARK_SIDE,
        }
    }

    pub fn allows(self, color: LightsaberColor) -> bool {
        self.allowed_colors().contains(&color)
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Faction::Light => f.write_str("Light"),
            Faction::Dark => f.write_str("Dark"),
        }
    }
}

/// Display names are part of the fight message format and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightsaberColor {
    Blue,
    Green,
    Purple,
    Red,
}

impl LightsaberColor {
    pub const LIGHT_SIDE: [LightsaberColor; 3] = [
        LightsaberColor::Blue,
        LightsaberColor::Green,
        LightsaberColor::Purple,
    ];
    pub const DARK_SIDE: [LightsaberColor; 1] = [LightsaberColor::Red];

    pub fn as_str(self) -> &'static str {
        match self {
            LightsaberColor::Blue => "Blue",
            LightsaberColor::Green => "Green",
            LightsaberColor::Purple => "Purple",
            LightsaberColor::Red => "Red",
        }
    }
}

impl fmt::Display for LightsaberColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A participant in the duel simulation.
///
/// The weapon colour is fixed at construction and has no setter. Hit points
/// change through [`crate::fight`], or through [`Combatant::damage`] and
/// [`Combatant::heal`] when a different fight implementation is being graded.
/// A combatant at zero or below is defeated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Combatant {
    name: String,
    hit_points: i64,
    faction: Faction,
    weapon_color: LightsaberColor,
}

impl Combatant {
    /// Creates a combatant whose colour comes from `picker`, restricted to the
    /// faction's allowed colours.
    pub fn new(
        name: impl Into<String>,
        hit_points: i64,
        faction: Faction,
        picker: &mut impl ColorPicker,
    ) -> Result<Self, DuelError> {
        let choices = faction.allowed_colors();
        let index = picker.pick(choices);
        let weapon_color = *choices.get(index).ok_or(DuelError::PickOutOfRange {
            index,
            available: choices.len(),
        })?;
        Ok(Self {
            name: name.into(),
            hit_points,
            faction,
            weapon_color,
        })
    }

    /// Creates a combatant with an explicitly pinned colour.
    pub fn with_color(
        name: impl Into<String>,
        hit_points: i64,
        faction: Faction,
        weapon_color: LightsaberColor,
    ) -> Result<Self, DuelError> {
        if !faction.allows(weapon_color) {
            return Err(DuelError::ColorNotAllowed {
                faction,
                color: weapon_color,
            });
        }
        Ok(Self {
            name: name.into(),
            hit_points,
            faction,
            weapon_color,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hit_points(&self) -> i64 {
        self.hit_points
    }

    pub fn faction(&self) -> Faction {
        self.faction
    }

    pub fn weapon_color(&self) -> LightsaberColor {
        self.weapon_color
    }

    pub fn is_defeated(&self) -> bool {
        self.hit_points <= 0
    }

    /// Removes hit points, saturating at `i64::MIN`. Hand-written fight
    /// implementations use this and [`Combatant::heal`] to settle a duel.
    pub fn damage(&mut self, amount: i64) {
        self.hit_points = self.hit_points.saturating_sub(amount);
        debug!(target: "duel_core.combatant", name = %self.name, hit_points = self.hit_points, "damaged");
    }

    /// Adds hit points, saturating at `i64::MAX`.
    pub fn heal(&mut self, amount: i64) {
        self.hit_points = self.hit_points.saturating_add(amount);
        debug!(target: "duel_core.combatant", name = %self.name, hit_points = self.hit_points, "healed");
    }

    pub(crate) fn set_hit_points(&mut self, hit_points: i64) {
        self.hit_points = hit_points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FixedColor, SimulationRng};

    #[test]
    fn dark_side_is_always_red() {
        let mut rng = SimulationRng::new(99);
        for seed_round in 0..10 {
            let sith = Combatant::new(format!("Sith {seed_round}"), 5, Faction::Dark, &mut rng)
                .unwrap();
            assert_eq!(LightsaberColor::Red, sith.weapon_color());
        }
    }

    #[test]
    fn light_side_picks_from_allowed_colors() {
        let mut rng = SimulationRng::new(1);
        for _ in 0..32 {
            let jedi = Combatant::new("Jedi", 5, Faction::Light, &mut rng).unwrap();
            assert!(LightsaberColor::LIGHT_SIDE.contains(&jedi.weapon_color()));
        }
    }

    #[test]
    fn pinned_color_must_match_faction() {
        let err = Combatant::with_color("Luke", 10, Faction::Light, LightsaberColor::Red)
            .unwrap_err();
        assert_eq!(
            DuelError::ColorNotAllowed {
                faction: Faction::Light,
                color: LightsaberColor::Red,
            },
            err
        );
        assert!(Combatant::with_color("Maul", 10, Faction::Dark, LightsaberColor::Green).is_err());
    }

    #[test]
    fn out_of_range_pick_is_rejected() {
        struct Wild;
        impl ColorPicker for Wild {
            fn pick(&mut self, _: &[LightsaberColor]) -> usize {
                9
            }
        }
        let err = Combatant::new("Rey", 3, Faction::Light, &mut Wild).unwrap_err();
        assert_eq!(
            DuelError::PickOutOfRange {
                index: 9,
                available: 3
            },
            err
        );
    }

    #[test]
    fn zero_hit_points_counts_as_defeated() {
        let fallen = Combatant::new("Fallen", 0, Faction::Light, &mut FixedColor(LightsaberColor::Blue))
            .unwrap();
        assert!(fallen.is_defeated());
        assert_eq!("Blue", fallen.weapon_color().to_string());
    }

    #[test]
    fn damage_and_heal_saturate() {
        let mut vader =
            Combatant::with_color("Darth Vader", 9, Faction::Dark, LightsaberColor::Red).unwrap();
        vader.heal(5);
        assert_eq!(14, vader.hit_points());
        vader.damage(14);
        assert!(vader.is_defeated());
        vader.heal(i64::MAX);
        vader.heal(1);
        assert_eq!(i64::MAX, vader.hit_points());
        assert_eq!(LightsaberColor::Red, vader.weapon_color());
    }
}
