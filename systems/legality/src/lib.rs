#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Legality dispatcher that grades a specimen against the template it claims.
//!
//! Checks run in a fixed order and the first failing one decides the grade:
//! species and egg state, then the template's exact requirements (level,
//! location, form, trainer, fixed values, and the attributes the personality
//! value fixes in the early generations), then the correlation of the
//! personality value with the template's algorithms and the locks or star gate
//! applied to the reconstructed seed, then soft details that only degrade the
//! grade (ball, fateful flag, abilities explained by items). Every check is pure.

mod egg;
mod rules;

pub use egg::verify_egg;

use pidlab_core::{
    Encounter, EncounterTemplate, HatchLocations, Language, Reason, Specimen, SpeciesLookup,
    VerificationResult,
};
use tracing::debug;

/// Grades `specimen` against `template`.
#[must_use]
pub fn verify(
    specimen: &Specimen,
    template: &EncounterTemplate,
    lookup: &dyn SpeciesLookup,
    hatch: &dyn HatchLocations,
) -> VerificationResult {
    let result = evaluate(specimen, template, lookup, hatch);
    debug!(
        template = template.name(),
        species = specimen.species,
        grade = ?result.grade(),
        reason = %result.reason(),
        "verified encounter"
    );
    result
}

fn evaluate(
    specimen: &Specimen,
    template: &EncounterTemplate,
    lookup: &dyn SpeciesLookup,
    hatch: &dyn HatchLocations,
) -> VerificationResult {
    if specimen.species != template.species() {
        return VerificationResult::invalid(Reason::SpeciesMismatch);
    }
    if let EncounterTemplate::Egg(egg) = template {
        return verify_egg(specimen, egg.version.generation(), hatch);
    }
    if specimen.is_egg {
        return VerificationResult::invalid(Reason::EggStateMismatch);
    }
    if let EncounterTemplate::Shadow(shadow) = template {
        if shadow.is_e_reader() && specimen.language != Language::Japanese {
            return VerificationResult::invalid(Reason::EReaderLanguage);
        }
    }

    let stages = match template {
        EncounterTemplate::Slot(slot) => rules::slot(specimen, slot, lookup),
        EncounterTemplate::Tera(tera) => rules::tera(specimen, tera, lookup),
        EncounterTemplate::Shadow(shadow) => rules::shadow(specimen, shadow, lookup),
        EncounterTemplate::Trade(trade) => rules::trade(specimen, trade, lookup),
        EncounterTemplate::Gift(gift) => rules::gift(specimen, gift, lookup),
        EncounterTemplate::Egg(_) => Ok(()),
    };
    match stages {
        Ok(()) => VerificationResult::valid(Reason::EncounterMatch),
        Err(result) => result,
    }
}
