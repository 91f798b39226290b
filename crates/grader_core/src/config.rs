use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{self, Context, Result};
use duel_core::{Combatant, Faction, LightsaberColor, SimulationRng, DEFAULT_SEED};
use serde::Deserialize;

use crate::roster::Roster;
use crate::scenario::ScenarioOptions;

#[derive(Debug, Default, Deserialize)]
pub struct GraderConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub roster: Vec<CombatantConfig>,
    #[serde(default)]
    pub scenario: ScenarioToggles,
    #[serde(default)]
    pub report: Option<ReportConfig>,
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

impl GraderConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        let cfg: GraderConfig = toml::from_str(data)?;
        Ok(cfg)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn scenario_options(&self) -> ScenarioOptions {
        ScenarioOptions {
            report_final_check: self.scenario.report_final_check_enabled(),
        }
    }

    /// Builds the four-combatant roster, falling back to the reference
    /// characters when none are configured. Unpinned Light side colours are
    /// drawn from `rng` in roster order.
    pub fn build_roster(&self, rng: &mut SimulationRng) -> Result<Roster> {
        if self.roster.is_empty() {
            return Ok(Roster::reference(rng)?);
        }
        if self.roster.len() != 4 {
            anyhow::bail!(
                "roster must list exactly 4 combatants (2 light, then 2 dark), found {}",
                self.roster.len()
            );
        }
        let combatants = self
            .roster
            .iter()
            .map(|entry| entry.build(rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Roster::try_from(combatants)?)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CombatantConfig {
    pub name: String,
    pub hit_points: i64,
    pub faction: Faction,
    #[serde(default)]
    pub color: Option<LightsaberColor>,
}

impl CombatantConfig {
    fn build(&self, rng: &mut SimulationRng) -> Result<Combatant> {
        let combatant = match self.color {
            Some(color) => Combatant::with_color(&self.name, self.hit_points, self.faction, color),
            None => Combatant::new(&self.name, self.hit_points, self.faction, rng),
        };
        combatant.with_context(|| format!("invalid roster entry {}", self.name))
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScenarioToggles {
    #[serde(default)]
    pub report_final_check: Option<bool>,
}

impl ScenarioToggles {
    pub fn report_final_check_enabled(&self) -> bool {
        self.report_final_check.unwrap_or(true)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub enable_trace: Option<bool>,
    #[serde(default)]
    pub trace_filter: Option<String>,
}

impl TelemetryConfig {
    pub fn trace_enabled(&self) -> bool {
        self.enable_trace.unwrap_or(true)
    }
}
