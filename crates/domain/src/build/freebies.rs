//! Freebie point ledger: per-trait increments bought after the base build,
//! plus the merits and flaws that adjust the same pool.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Ability, Attribute, Background, Sphere};

/// A trait that can receive freebie dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "name", rename_all = "camelCase")]
pub enum FreebieTarget {
    Attribute(Attribute),
    Ability(Ability),
    Sphere(Sphere),
    Background(Background),
    Arete,
    Willpower,
}

impl FreebieTarget {
    /// Freebie points charged per dot.
    pub fn cost(self) -> i32 {
        match self {
            FreebieTarget::Attribute(_) => 5,
            FreebieTarget::Ability(_) => 2,
            FreebieTarget::Sphere(_) => 7,
            FreebieTarget::Background(_) => 1,
            FreebieTarget::Arete => 4,
            FreebieTarget::Willpower => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FreebieTarget::Attribute(attribute) => attribute.name(),
            FreebieTarget::Ability(ability) => ability.name(),
            FreebieTarget::Sphere(sphere) => sphere.name(),
            FreebieTarget::Background(background) => background.name(),
            FreebieTarget::Arete => "Arete",
            FreebieTarget::Willpower => "Willpower",
        }
    }
}

/// Freebie dots bought per trait. Map entries at zero are removed, so an
/// absent key and a zero count mean the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FreebieDots {
    pub attributes: BTreeMap<Attribute, u8>,
    pub abilities: BTreeMap<Ability, u8>,
    pub spheres: BTreeMap<Sphere, u8>,
    pub backgrounds: BTreeMap<Background, u8>,
    pub arete: u8,
    pub willpower: u8,
}

impl FreebieDots {
    /// Dots bought on `target`.
    pub fn dots(&self, target: FreebieTarget) -> u8 {
        match target {
            FreebieTarget::Attribute(a) => self.attributes.get(&a).copied().unwrap_or(0),
            FreebieTarget::Ability(a) => self.abilities.get(&a).copied().unwrap_or(0),
            FreebieTarget::Sphere(s) => self.spheres.get(&s).copied().unwrap_or(0),
            FreebieTarget::Background(b) => self.backgrounds.get(&b).copied().unwrap_or(0),
            FreebieTarget::Arete => self.arete,
            FreebieTarget::Willpower => self.willpower,
        }
    }

    pub(crate) fn set_dots(&mut self, target: FreebieTarget, dots: u8) {
        fn put<K: Ord>(map: &mut BTreeMap<K, u8>, key: K, dots: u8) {
            if dots == 0 {
                map.remove(&key);
            } else {
                map.insert(key, dots);
            }
        }

        match target {
            FreebieTarget::Attribute(a) => put(&mut self.attributes, a, dots),
            FreebieTarget::Ability(a) => put(&mut self.abilities, a, dots),
            FreebieTarget::Sphere(s) => put(&mut self.spheres, s, dots),
            FreebieTarget::Background(b) => put(&mut self.backgrounds, b, dots),
            FreebieTarget::Arete => self.arete = dots,
            FreebieTarget::Willpower => self.willpower = dots,
        }
    }

    /// Every target with at least one dot bought.
    pub fn entries(&self) -> impl Iterator<Item = (FreebieTarget, u8)> + '_ {
        let attributes = self
            .attributes
            .iter()
            .map(|(a, dots)| (FreebieTarget::Attribute(*a), *dots));
        let abilities = self
            .abilities
            .iter()
            .map(|(a, dots)| (FreebieTarget::Ability(*a), *dots));
        let spheres = self
            .spheres
            .iter()
            .map(|(s, dots)| (FreebieTarget::Sphere(*s), *dots));
        let backgrounds = self
            .backgrounds
            .iter()
            .map(|(b, dots)| (FreebieTarget::Background(*b), *dots));
        let scalars = [
            (FreebieTarget::Arete, self.arete),
            (FreebieTarget::Willpower, self.willpower),
        ];

        attributes
            .chain(abilities)
            .chain(spheres)
            .chain(backgrounds)
            .chain(scalars)
            .filter(|(_, dots)| *dots > 0)
    }

    /// Weighted cost of every dot bought.
    pub fn spend(&self) -> i32 {
        self.entries()
            .map(|(target, dots)| i32::from(dots) * target.cost())
            .sum()
    }
}

/// A merit or flaw taken during creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeritPick {
    pub id: String,
    pub name: String,
    pub cost: u8,
}

impl MeritPick {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
        }
    }
}

pub(crate) fn total_cost(picks: &[MeritPick]) -> u32 {
    picks
        .iter()
        .fold(0u32, |total, pick| total.saturating_add(u32::from(pick.cost)))
}
