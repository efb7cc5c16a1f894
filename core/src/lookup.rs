//! Read-only collaborator interfaces for species metadata and hatch locations.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{GameVersion, GenderRatio};

/// Species metadata the legality and generation rules consult.
pub trait SpeciesLookup {
    /// Gender distribution of `species`/`form`.
    fn gender_ratio(&self, species: u16, form: u8) -> GenderRatio;

    /// Elemental types of `species`/`form`.
    fn types(&self, species: u16, form: u8) -> (u8, u8);

    /// Whether the species belongs to the undiscovered egg group and cannot breed.
    fn is_undiscovered(&self, species: u16, form: u8) -> bool;

    /// Whether an Ability Capsule can swap the regular abilities.
    fn can_ability_capsule(&self, species: u16, form: u8) -> bool;

    /// Whether an Ability Patch can grant the hidden ability.
    fn can_ability_patch(&self, species: u16, form: u8) -> bool;

    /// Whether the species' hidden ability was never released through wild means.
    fn is_hidden_ability_unreleased(&self, species: u16, form: u8) -> bool;
}

/// One row of a [`SpeciesTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonalEntry {
    /// Gender distribution.
    pub gender_ratio: GenderRatio,
    /// Primary and secondary types.
    pub types: (u8, u8),
    /// Undiscovered egg group flag.
    pub undiscovered: bool,
    /// Whether the two regular abilities differ.
    pub distinct_abilities: bool,
    /// Whether the hidden ability differs from the regular ones.
    pub has_hidden_ability: bool,
    /// Whether the hidden ability is unavailable outside events.
    pub hidden_unreleased: bool,
}

impl PersonalEntry {
    /// Entry for an ordinary species with an even gender split and three distinct abilities.
    #[must_use]
    pub const fn standard(types: (u8, u8)) -> Self {
        Self {
            gender_ratio: GenderRatio::EVEN,
            types,
            undiscovered: false,
            distinct_abilities: true,
            has_hidden_ability: true,
            hidden_unreleased: false,
        }
    }
}

const FALLBACK: PersonalEntry = PersonalEntry::standard((0, 0));

/// In-memory [`SpeciesLookup`] keyed by species and form.
///
/// Unknown species resolve to [`PersonalEntry::standard`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpeciesTable {
    entries: HashMap<(u16, u8), PersonalEntry>,
}

impl SpeciesTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry of `species`/`form`.
    pub fn insert(&mut self, species: u16, form: u8, entry: PersonalEntry) {
        let _ = self.entries.insert((species, form), entry);
    }

    /// Builder form of [`SpeciesTable::insert`].
    #[must_use]
    pub fn with(mut self, species: u16, form: u8, entry: PersonalEntry) -> Self {
        self.insert(species, form, entry);
        self
    }

    fn entry(&self, species: u16, form: u8) -> &PersonalEntry {
        self.entries
            .get(&(species, form))
            .or_else(|| self.entries.get(&(species, 0)))
            .unwrap_or(&FALLBACK)
    }
}

impl SpeciesLookup for SpeciesTable {
    fn gender_ratio(&self, species: u16, form: u8) -> GenderRatio {
        self.entry(species, form).gender_ratio
    }

    fn types(&self, species: u16, form: u8) -> (u8, u8) {
        self.entry(species, form).types
    }

    fn is_undiscovered(&self, species: u16, form: u8) -> bool {
        self.entry(species, form).undiscovered
    }

    fn can_ability_capsule(&self, species: u16, form: u8) -> bool {
        self.entry(species, form).distinct_abilities
    }

    fn can_ability_patch(&self, species: u16, form: u8) -> bool {
        self.entry(species, form).has_hidden_ability
    }

    fn is_hidden_ability_unreleased(&self, species: u16, form: u8) -> bool {
        self.entry(species, form).hidden_unreleased
    }
}

/// Opaque oracle answering whether an egg can hatch at a location.
pub trait HatchLocations {
    /// Whether `location` is a hatch location of `version`.
    fn is_valid_met(&self, version: GameVersion, location: u16) -> bool;

    /// Whether `location` is a hatch location of any game of `generation`.
    fn is_valid_met_any(&self, generation: u8, location: u16) -> bool;
}

/// [`HatchLocations`] backed by explicit location sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HatchLocationSet {
    by_version: HashMap<GameVersion, HashSet<u16>>,
}

impl HatchLocationSet {
    /// Creates an empty oracle that rejects every location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers hatch locations for a concrete game.
    #[must_use]
    pub fn with(mut self, version: GameVersion, locations: &[u16]) -> Self {
        self.by_version
            .entry(version)
            .or_default()
            .extend(locations.iter().copied());
        self
    }
}

impl HatchLocations for HatchLocationSet {
    fn is_valid_met(&self, version: GameVersion, location: u16) -> bool {
        self.by_version
            .get(&version)
            .is_some_and(|set| set.contains(&location))
    }

    fn is_valid_met_any(&self, generation: u8, location: u16) -> bool {
        self.by_version
            .iter()
            .any(|(version, set)| version.generation() == generation && set.contains(&location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_form_falls_back_to_base_form() {
        let table = SpeciesTable::new().with(
            25,
            0,
            PersonalEntry {
                gender_ratio: GenderRatio::MOSTLY_MALE,
                ..PersonalEntry::standard((13, 13))
            },
        );
        assert_eq!(table.gender_ratio(25, 3), GenderRatio::MOSTLY_MALE);
        assert_eq!(table.gender_ratio(26, 0), GenderRatio::EVEN);
    }

    #[test]
    fn hatch_set_answers_per_generation() {
        let set = HatchLocationSet::new().with(GameVersion::Black, &[16]);
        assert!(set.is_valid_met(GameVersion::Black, 16));
        assert!(!set.is_valid_met(GameVersion::White, 16));
        assert!(set.is_valid_met_any(5, 16));
        assert!(!set.is_valid_met_any(6, 16));
    }
}
