use serde::{Deserialize, Serialize};

use crate::{GameVersion, Gender, GenderRatio, Nature};

/// Whether a lock accepts any gender or pins one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockGender {
    /// Any gender passes.
    Any,
    /// Only the given gender passes.
    Exact(Gender),
}

impl LockGender {
    /// Whether `gender` satisfies the requirement.
    #[must_use]
    pub fn accepts(self, gender: Gender) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => expected == gender,
        }
    }
}

/// Required nature and gender at one position of a scripted party.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lock {
    species: u16,
    nature: Nature,
    gender: LockGender,
    ratio: GenderRatio,
}

impl Lock {
    /// Creates a lock for a party member of `species` with gender distribution `ratio`.
    #[must_use]
    pub const fn new(species: u16, nature: Nature, gender: LockGender, ratio: GenderRatio) -> Self {
        Self {
            species,
            nature,
            gender,
            ratio,
        }
    }

    /// Species of the locked member.
    #[must_use]
    pub const fn species(&self) -> u16 {
        self.species
    }

    /// Required nature.
    #[must_use]
    pub const fn nature(&self) -> Nature {
        self.nature
    }

    /// Required gender.
    #[must_use]
    pub const fn gender(&self) -> LockGender {
        self.gender
    }

    /// Gender distribution used to derive the member's gender from its PID.
    #[must_use]
    pub const fn ratio(&self) -> GenderRatio {
        self.ratio
    }

    /// Whether a derived pair satisfies the lock.
    #[must_use]
    pub fn accepts(&self, nature: Nature, gender: Gender) -> bool {
        self.nature == nature && self.gender.accepts(gender)
    }
}

/// How the entries of a [`LockSequence`] are applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockKind {
    /// The last entry constrains the specimen itself.
    Terminal,
    /// Every entry is a party member generated before the specimen.
    Party,
}

/// Ordered, immutable list of locks attached to a template.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LockSequence {
    kind: LockKind,
    locks: Vec<Lock>,
}

impl LockSequence {
    /// Creates a sequence of party members generated before the specimen.
    #[must_use]
    pub fn party(locks: Vec<Lock>) -> Self {
        Self {
            kind: LockKind::Party,
            locks,
        }
    }

    /// Creates a sequence whose last entry pins the specimen's own nature and gender.
    #[must_use]
    pub fn terminal(locks: Vec<Lock>) -> Self {
        Self {
            kind: LockKind::Terminal,
            locks,
        }
    }

    /// How the sequence is applied.
    #[must_use]
    pub const fn kind(&self) -> LockKind {
        self.kind
    }

    /// Entries in generation order.
    #[must_use]
    pub fn locks(&self) -> &[Lock] {
        &self.locks
    }

    /// Entry verified against the specimen in the terminal case.
    #[must_use]
    pub fn last(&self) -> Option<&Lock> {
        self.locks.last()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Whether the sequence has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Selection weight of one tiered raid slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedSlot {
    weight: u16,
    floor_scarlet: i16,
    floor_violet: i16,
}

impl WeightedSlot {
    /// Floor value that marks a slot missing from a version.
    pub const UNAVAILABLE: i16 = -1;

    /// Creates a slot weight with per-version cumulative floors.
    #[must_use]
    pub const fn new(weight: u16, floor_scarlet: i16, floor_violet: i16) -> Self {
        Self {
            weight,
            floor_scarlet,
            floor_violet,
        }
    }

    /// Width of the slot's roll range.
    #[must_use]
    pub const fn weight(&self) -> u16 {
        self.weight
    }

    /// Cumulative floor for Scarlet.
    #[must_use]
    pub const fn floor_scarlet(&self) -> i16 {
        self.floor_scarlet
    }

    /// Cumulative floor for Violet.
    #[must_use]
    pub const fn floor_violet(&self) -> i16 {
        self.floor_violet
    }

    /// Floor for `version`, `None` when the version has no table.
    #[must_use]
    pub const fn floor_for(&self, version: GameVersion) -> Option<i16> {
        match version {
            GameVersion::Scarlet => Some(self.floor_scarlet),
            GameVersion::Violet => Some(self.floor_violet),
            _ => None,
        }
    }

    /// Whether the slot exists in `version`.
    #[must_use]
    pub const fn is_available(&self, version: GameVersion) -> bool {
        match self.floor_for(version) {
            Some(floor) => floor != Self::UNAVAILABLE,
            None => false,
        }
    }
}

/// Roll totals for every raid tier, one column per sibling version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedRateTable {
    scarlet: [u16; 6],
    violet: [u16; 6],
}

/// Totals of the base game raid tables.
pub const BASE_RATE_TABLE: WeightedRateTable = WeightedRateTable::new(
    [5800, 5300, 7400, 8800, 9100, 6500],
    [5800, 5300, 7400, 8700, 9100, 6500],
);

impl WeightedRateTable {
    /// Highest raid tier.
    pub const MAX_TIER: u8 = 6;

    /// Creates a table from per-tier totals for tiers `1..=6`.
    #[must_use]
    pub const fn new(scarlet: [u16; 6], violet: [u16; 6]) -> Self {
        Self { scarlet, violet }
    }

    /// Roll total for `tier` in `version`.
    ///
    /// `None` for tiers outside `1..=6` and for versions without a table.
    #[must_use]
    pub const fn total(&self, tier: u8, version: GameVersion) -> Option<u16> {
        if tier == 0 || tier > Self::MAX_TIER {
            return None;
        }
        let index = (tier - 1) as usize;
        match version {
            GameVersion::Scarlet => Some(self.scarlet[index]),
            GameVersion::Violet => Some(self.violet[index]),
            _ => None,
        }
    }
}
