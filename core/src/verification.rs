use std::fmt;

use serde::{Deserialize, Serialize};

/// How closely a specimen matches a claimed template.
///
/// Ordered from worst to best, so `grade >= Grade::Match` reads naturally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// A hard requirement of the template is violated.
    Invalid,
    /// The template fits but a soft detail (ball, fateful flag, RNG gate) does not.
    PartialMatch,
    /// A deferred check failed; another template may explain the specimen better.
    DeferredErrors,
    /// A deferred check is inconclusive without further context.
    Deferred,
    /// Every check passed.
    Match,
}

/// Why a [`VerificationResult`] received its grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    /// Every template check passed.
    EncounterMatch,
    /// Hatch location valid for the game of origin.
    EggLocation,
    /// Hatch location valid for a sibling game after a trade.
    EggLocationTrade,
    /// Unhatched egg with consistent egg data.
    EggUnhatched,
    /// Egg recorded at the wrong met level.
    EggMetLevel {
        /// Level an egg must be recorded at.
        expected: u8,
    },
    /// Hatch location is not valid for any game.
    EggLocationInvalid,
    /// Unhatched egg with a populated met location.
    EggLocationNone,
    /// Unhatched egg carrying a link trade egg location.
    EggLocationTradeFail,
    /// Generation 3 egg recorded at a location other than the hatch location.
    EggMetLocationFail,
    /// Egg transferred to a later generation while unhatched.
    TransferEgg,
    /// Transferred hatchling below the minimum met level.
    TransferEggMetLevel,
    /// Transferred hatchling not recorded at the transfer location.
    TransferEggLocation,
    /// Transferred hatchling carrying an egg location.
    EggLocationNotEmpty,
    /// Specimen egg state contradicts the template.
    EggStateMismatch,
    /// e-Reader shadow on a non-Japanese specimen.
    EReaderLanguage,
    /// Met level outside the template range.
    LevelMismatch,
    /// Met location differs from the template.
    LocationMismatch,
    /// Egg location differs from the template.
    EggLocationMismatch,
    /// Species differs from the template.
    SpeciesMismatch,
    /// Form differs from the template.
    FormMismatch,
    /// Gender differs from the template.
    GenderMismatch,
    /// Trainer data differs from the fixed trainer.
    TrainerMismatch,
    /// Fixed personality value differs.
    PidMismatch,
    /// No known algorithm reproduces the personality value and stats.
    NoCorrelation,
    /// The reconstructed seed does not satisfy any preceding party lock.
    ShadowLock,
    /// Shininess contradicts a strict template policy.
    ShinyMismatch,
    /// Fewer perfect stats than the template guarantees.
    FlawlessIvCount,
    /// Fateful encounter flag differs.
    FatefulMismatch,
    /// Ball differs from the fixed ball.
    BallMismatch,
    /// Hidden ability not released for the species through this template.
    HiddenAbilityUnavailable,
    /// The raid seed would not select this slot.
    StarChoice,
    /// Tera type differs from what the raid seed yields.
    TeraTypeMismatch,
    /// Attributes differ from what the reconstructed seed yields.
    RngMismatch,
    /// Hidden ability on a template that does not guarantee it.
    HiddenAbilityDeferred,
    /// Ability slot differs and cannot be explained by an item.
    AbilityMismatch,
    /// Nature differs from the one the personality value fixes.
    NatureMismatch,
    /// Ability slot differs from the bit the generating algorithm rolled.
    AbilityBitMismatch,
    /// Shininess contradicts the template policy.
    ShinyPolicy,
}

impl Reason {
    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::EncounterMatch => "Encounter matches the template.",
            Self::EggLocation => "Able to hatch an egg at the met location.",
            Self::EggLocationTrade => "Able to hatch a traded egg at the met location.",
            Self::EggUnhatched => "Valid unhatched egg.",
            Self::EggMetLevel { .. } => "Invalid met level for an egg.",
            Self::EggLocationInvalid => "Unable to hatch an egg at the met location.",
            Self::EggLocationNone => "Invalid egg location, expected none.",
            Self::EggLocationTradeFail => "Invalid egg location, should not be traded while an egg.",
            Self::EggMetLocationFail => "Unable to obtain an egg at the met location.",
            Self::TransferEgg => "Eggs cannot be transferred between generations.",
            Self::TransferEggMetLevel => "Invalid met level for a transferred hatchling.",
            Self::TransferEggLocation => "Invalid met location for a transferred hatchling.",
            Self::EggLocationNotEmpty => "Transferred hatchling should not have an egg location.",
            Self::EggStateMismatch => "Egg state does not match the template.",
            Self::EReaderLanguage => "Non-Japanese shadow from an e-Reader card.",
            Self::LevelMismatch => "Met level does not match the template.",
            Self::LocationMismatch => "Met location does not match the template.",
            Self::EggLocationMismatch => "Egg location does not match the template.",
            Self::SpeciesMismatch => "Species does not match the template.",
            Self::FormMismatch => "Form does not match the template.",
            Self::GenderMismatch => "Gender does not match the template.",
            Self::TrainerMismatch => "Trainer data does not match the fixed trainer.",
            Self::PidMismatch => "Personality value does not match the fixed value.",
            Self::NoCorrelation => "No generation method reproduces the personality value.",
            Self::ShadowLock => "Preceding party locks cannot be satisfied.",
            Self::ShinyMismatch => "Shininess is not possible for the template.",
            Self::FlawlessIvCount => "Fewer perfect individual stats than guaranteed.",
            Self::FatefulMismatch => "Fateful encounter flag does not match.",
            Self::BallMismatch => "Ball does not match the fixed ball.",
            Self::HiddenAbilityUnavailable => "Hidden ability is not available for the species.",
            Self::StarChoice => "Raid seed does not select this encounter.",
            Self::TeraTypeMismatch => "Tera type does not match the raid seed.",
            Self::RngMismatch => "Attributes do not match the reconstructed seed.",
            Self::HiddenAbilityDeferred => "Hidden ability requires another template.",
            Self::AbilityMismatch => "Ability does not match the template.",
            Self::ShinyPolicy => "Shininess does not match the template policy.",
            Self::NatureMismatch => "Nature does not match the personality value.",
            Self::AbilityBitMismatch => "Ability does not match the generated ability bit.",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EggMetLevel { expected } => {
                write!(f, "{} Expected level {expected}.", self.description())
            }
            other => f.write_str(other.description()),
        }
    }
}

/// Graded outcome of verifying a specimen against a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerificationResult {
    grade: Grade,
    reason: Reason,
}

impl VerificationResult {
    /// Creates a result.
    #[must_use]
    pub const fn new(grade: Grade, reason: Reason) -> Self {
        Self { grade, reason }
    }

    /// Full match with a reason describing what was matched.
    #[must_use]
    pub const fn valid(reason: Reason) -> Self {
        Self::new(Grade::Match, reason)
    }

    /// Hard mismatch.
    #[must_use]
    pub const fn invalid(reason: Reason) -> Self {
        Self::new(Grade::Invalid, reason)
    }

    /// Grade of the result.
    #[must_use]
    pub const fn grade(&self) -> Grade {
        self.grade
    }

    /// Reason for the grade.
    #[must_use]
    pub const fn reason(&self) -> Reason {
        self.reason
    }

    /// Whether the grade is anything but [`Grade::Invalid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self.grade, Grade::Invalid)
    }
}
