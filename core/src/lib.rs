#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the pidlab engine.
//!
//! This crate defines the vocabulary every system speaks. The decoder turns
//! bundled tables into [`EncounterTemplate`] values, the catalog publishes them
//! read-only, the generator synthesizes [`Specimen`] records from a template and
//! a [`TrainerContext`], and the correlator and legality dispatcher judge
//! existing specimens, producing [`PidCorrelation`] and [`VerificationResult`]
//! values. Collaborators outside the engine (species metadata, hatch location
//! tables) are consumed through the [`SpeciesLookup`] and [`HatchLocations`]
//! traits.

mod attributes;
mod constraints;
mod correlation;
mod encounter;
mod error;
pub mod locations;
mod lookup;
mod specimen;
mod verification;
mod version;

pub use attributes::{
    is_shiny, shiny_threshold, shiny_xor, AbilityPermission, AbilitySlot, Ball, GemType, Gender,
    GenderRatio, IvSet, Moveset, Nature, Shiny, IV_MAX, NATURE_COUNT,
};
pub use constraints::{
    Lock, LockGender, LockKind, LockSequence, WeightedRateTable, WeightedSlot, BASE_RATE_TABLE,
};
pub use correlation::{AlgorithmTag, CorrelationFields, PidCorrelation};
pub use encounter::{
    Encounter, EncounterArea, EncounterEgg, EncounterGift, EncounterShadow, EncounterSlot,
    EncounterTemplate, EncounterTera, EncounterTrade, HasLevelRange, HasLocation, HasMoveset,
    ShadowGame, SlotKind,
};
pub use error::{DecodeError, GenerationError};
pub use lookup::{HatchLocationSet, HatchLocations, PersonalEntry, SpeciesLookup, SpeciesTable};
pub use specimen::{Criteria, RegionOrigin, Specimen, TrainerContext};
pub use verification::{Grade, Reason, VerificationResult};
pub use version::{GameVersion, Language};
