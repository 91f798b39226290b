use duel_core::Combatant;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Anything that can be harvested for personal information.
pub trait Spyable {
    fn personal_information(&self) -> String;

    fn send_info_to_nsa(&self);
}

impl<T: Spyable + ?Sized> Spyable for &T {
    fn personal_information(&self) -> String {
        (**self).personal_information()
    }

    fn send_info_to_nsa(&self) {
        (**self).send_info_to_nsa()
    }
}

impl<T: Spyable + ?Sized> Spyable for Box<T> {
    fn personal_information(&self) -> String {
        (**self).personal_information()
    }

    fn send_info_to_nsa(&self) {
        (**self).send_info_to_nsa()
    }
}

/// Header line followed by every entity's information, in input order.
pub fn collect<I>(entities: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Spyable,
{
    let info: Vec<String> = entities
        .into_iter()
        .map(|entity| entity.personal_information())
        .collect();
    debug!(target: "grader_core.registry", count = info.len(), "collected personal info");

    let mut lines = Vec::with_capacity(info.len() + 1);
    lines.push(format!(
        "Collected {} juicy bits of personal info!",
        info.len()
    ));
    lines.extend(info);
    lines
}

/// Fires the notification hook on every entity and returns how many were sent.
pub fn send_all<I>(entities: I) -> usize
where
    I: IntoIterator,
    I::Item: Spyable,
{
    let mut sent = 0;
    for entity in entities {
        entity.send_info_to_nsa();
        sent += 1;
    }
    sent
}

/// A free-form record, as loaded by the CLI from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dossier {
    pub name: String,
    pub info: String,
}

impl Spyable for Dossier {
    fn personal_information(&self) -> String {
        self.info.clone()
    }

    fn send_info_to_nsa(&self) {
        info!(target: "grader_core.registry", subject = %self.name, "dossier forwarded");
    }
}

impl Spyable for Combatant {
    fn personal_information(&self) -> String {
        format!(
            "{}: {} side, {} hit points, {} lightsaber",
            self.name(),
            self.faction(),
            self.hit_points(),
            self.weapon_color()
        )
    }

    fn send_info_to_nsa(&self) {
        info!(target: "grader_core.registry", subject = self.name(), "combatant forwarded");
    }
}
