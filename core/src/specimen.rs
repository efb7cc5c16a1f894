use serde::{Deserialize, Serialize};

use crate::{
    attributes, AbilitySlot, Ball, CorrelationFields, GameVersion, Gender, IvSet, Language,
    Moveset, Nature,
};

/// Console region metadata copied onto specimens of the 3DS era.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionOrigin {
    /// Country id.
    pub country: u8,
    /// Sub-region id.
    pub region: u8,
    /// Console region id.
    pub console_region: u8,
}

/// Identity of the trainer a specimen is generated for.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainerContext {
    /// Visible trainer id.
    pub tid: u16,
    /// Secret id.
    pub sid: u16,
    /// Trainer name.
    pub ot_name: String,
    /// Trainer gender code.
    pub ot_gender: u8,
    /// Language of the trainer's game.
    pub language: Language,
    /// The trainer's game.
    pub version: GameVersion,
    /// Console region metadata, when the trainer's game records it.
    pub region: Option<RegionOrigin>,
}

impl TrainerContext {
    /// Packed trainer id: `tid` in the low half, `sid` in the high half.
    #[must_use]
    pub const fn id32(&self) -> u32 {
        self.tid as u32 | (self.sid as u32) << 16
    }
}

/// Soft constraints a caller places on generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criteria {
    /// Desired gender.
    pub gender: Option<Gender>,
    /// Desired nature.
    pub nature: Option<Nature>,
    /// Desired ability slot.
    pub ability: Option<AbilitySlot>,
    /// Minimum number of perfect individual stats.
    pub min_flawless: u8,
}

impl Criteria {
    /// Accepts anything.
    pub const UNRESTRICTED: Self = Self {
        gender: None,
        nature: None,
        ability: None,
        min_flawless: 0,
    };

    /// Whether a derived attribute set satisfies every constraint.
    #[must_use]
    pub fn accepts(&self, nature: Nature, gender: Gender, ability: AbilitySlot, ivs: IvSet) -> bool {
        self.nature.map_or(true, |wanted| wanted == nature)
            && self.gender.map_or(true, |wanted| wanted == gender)
            && self.ability.map_or(true, |wanted| wanted == ability)
            && ivs.flawless_count() >= self.min_flawless
    }
}

/// Attribute record of a creature, either freshly generated or supplied for verification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specimen {
    /// National dex species id.
    pub species: u16,
    /// Form index.
    pub form: u8,
    /// Current level.
    pub current_level: u8,
    /// Level recorded when met.
    pub met_level: u8,
    /// Met location id.
    pub met_location: u16,
    /// Egg location id, zero when not from an egg.
    pub egg_location: u16,
    /// Game of origin.
    pub version: GameVersion,
    /// Generation of the record container the specimen currently lives in.
    pub format: u8,
    /// Language of origin.
    pub language: Language,
    /// Personality value.
    pub pid: u32,
    /// Encryption constant.
    pub encryption_constant: u32,
    /// Individual stats.
    pub ivs: IvSet,
    /// Nature.
    pub nature: Nature,
    /// Gender.
    pub gender: Gender,
    /// Ability slot.
    pub ability: AbilitySlot,
    /// Whether the specimen is still an egg.
    pub is_egg: bool,
    /// Fateful encounter flag.
    pub fateful_encounter: bool,
    /// Ball id.
    pub ball: Ball,
    /// Original trainer id.
    pub tid: u16,
    /// Original trainer secret id.
    pub sid: u16,
    /// Original trainer name.
    pub ot_name: String,
    /// Original trainer gender code.
    pub ot_gender: u8,
    /// Name of the trainer currently handling a traded specimen.
    pub handler_name: Option<String>,
    /// Console region metadata.
    pub region: Option<RegionOrigin>,
    /// Moves.
    pub moves: Moveset,
    /// Tera type assigned at generation, for generation 9 specimens.
    pub tera_type_original: Option<u8>,
}

impl Specimen {
    /// Packed original trainer id.
    #[must_use]
    pub const fn id32(&self) -> u32 {
        self.tid as u32 | (self.sid as u32) << 16
    }

    /// Generation of the game of origin.
    #[must_use]
    pub fn generation(&self) -> u8 {
        self.version.generation()
    }

    /// Whether the personality value is shiny for the original trainer.
    #[must_use]
    pub fn is_shiny(&self) -> bool {
        attributes::is_shiny(self.pid, self.id32(), self.generation())
    }

    /// Raw words consumed by the inverse correlator.
    #[must_use]
    pub const fn correlation_fields(&self) -> CorrelationFields {
        CorrelationFields {
            pid: self.pid,
            encryption_constant: self.encryption_constant,
            ivs: self.ivs,
            id32: self.id32(),
        }
    }
}
