//! Egg rules per generation of origin.

use pidlab_core::{locations, HatchLocations, Reason, Specimen, VerificationResult};

/// Grades the egg data of `specimen`, an egg from a game of `generation`.
///
/// Unhatched eggs must carry the egg met level and no met location (or the
/// link trade location once traded). Hatched specimens must be recorded at the
/// hatch level in a location the `hatch` oracle accepts. Generation 3 and 4
/// hatchlings that moved on to a later format must carry the transfer
/// location instead.
#[must_use]
pub fn verify_egg(
    specimen: &Specimen,
    generation: u8,
    hatch: &dyn HatchLocations,
) -> VerificationResult {
    match generation {
        3 if specimen.format != 3 => transferred3(specimen),
        3 if specimen.is_egg => unhatched3(specimen),
        3 => hatched_with_trade(specimen, hatch, 3),
        4 if specimen.is_egg => unhatched(specimen, locations::LINK_TRADE4, 0),
        4 if specimen.format != 4 => transferred4(specimen),
        4 => hatched_with_trade(specimen, hatch, 4),
        5 if specimen.is_egg => unhatched(specimen, locations::LINK_TRADE5, 0),
        8 if specimen.version.is_bdsp() && specimen.is_egg => unhatched(
            specimen,
            locations::LINK_TRADE6_NPC,
            locations::DEFAULT_8B_NONE,
        ),
        6..=9 if specimen.is_egg => unhatched(specimen, locations::LINK_TRADE6, 0),
        5..=9 => hatched(specimen, hatch),
        _ => VerificationResult::invalid(Reason::EggLocationInvalid),
    }
}

fn met_level_mismatch(expected: u8) -> VerificationResult {
    VerificationResult::invalid(Reason::EggMetLevel { expected })
}

fn unhatched3(specimen: &Specimen) -> VerificationResult {
    if specimen.met_level != 0 {
        return met_level_mismatch(0);
    }
    if specimen.met_location != locations::hatch_location3(specimen.version) {
        return VerificationResult::invalid(Reason::EggMetLocationFail);
    }
    VerificationResult::valid(Reason::EggUnhatched)
}

/// Hatchling whose hatch location may belong to a sibling game it was traded from.
fn hatched_with_trade(
    specimen: &Specimen,
    hatch: &dyn HatchLocations,
    generation: u8,
) -> VerificationResult {
    let expected = locations::egg_met_level(generation);
    if specimen.met_level != expected {
        return met_level_mismatch(expected);
    }
    if hatch.is_valid_met(specimen.version, specimen.met_location) {
        VerificationResult::valid(Reason::EggLocation)
    } else if hatch.is_valid_met_any(generation, specimen.met_location) {
        VerificationResult::valid(Reason::EggLocationTrade)
    } else {
        VerificationResult::invalid(Reason::EggLocationInvalid)
    }
}

fn hatched(specimen: &Specimen, hatch: &dyn HatchLocations) -> VerificationResult {
    let expected = locations::egg_met_level(specimen.generation());
    if specimen.met_level != expected {
        return met_level_mismatch(expected);
    }
    if hatch.is_valid_met(specimen.version, specimen.met_location) {
        VerificationResult::valid(Reason::EggLocation)
    } else {
        VerificationResult::invalid(Reason::EggLocationInvalid)
    }
}

fn transferred3(specimen: &Specimen) -> VerificationResult {
    if specimen.is_egg {
        return VerificationResult::invalid(Reason::TransferEgg);
    }
    if specimen.met_level < 5 {
        return VerificationResult::invalid(Reason::TransferEggMetLevel);
    }
    if specimen.egg_location != 0 {
        return VerificationResult::invalid(Reason::EggLocationNotEmpty);
    }
    let arrival = if specimen.format == 4 {
        locations::TRANSFER3
    } else {
        locations::TRANSFER4
    };
    if specimen.met_location != arrival {
        return VerificationResult::invalid(Reason::TransferEggLocation);
    }
    VerificationResult::valid(Reason::EggLocation)
}

fn transferred4(specimen: &Specimen) -> VerificationResult {
    if specimen.met_level < 1 {
        return VerificationResult::invalid(Reason::TransferEggMetLevel);
    }
    if specimen.met_location != locations::TRANSFER4 {
        return VerificationResult::invalid(Reason::TransferEggLocation);
    }
    VerificationResult::valid(Reason::EggLocation)
}

/// Unhatched egg of generation 4 onward; `trade` is the link trade location
/// and `none` the "no location" value of the format.
fn unhatched(specimen: &Specimen, trade: u16, none: u16) -> VerificationResult {
    let expected = if specimen.format <= 4 { 0 } else { 1 };
    if specimen.met_level != expected {
        return met_level_mismatch(expected);
    }
    if specimen.egg_location == trade {
        return VerificationResult::invalid(Reason::EggLocationTradeFail);
    }
    if specimen.met_location == trade {
        VerificationResult::valid(Reason::EggLocationTrade)
    } else if specimen.met_location == none {
        VerificationResult::valid(Reason::EggUnhatched)
    } else {
        VerificationResult::invalid(Reason::EggLocationNone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pidlab_core::{GameVersion, HatchLocationSet};

    fn with(version: GameVersion, format: u8, is_egg: bool, met_level: u8, met: u16) -> Specimen {
        Specimen {
            species: 1,
            form: 0,
            current_level: met_level.max(1),
            met_level,
            met_location: met,
            egg_location: locations::daycare(version),
            version,
            format,
            language: pidlab_core::Language::English,
            pid: 0,
            encryption_constant: 0,
            ivs: pidlab_core::IvSet::ZERO,
            nature: pidlab_core::Nature::from_pid(0),
            gender: pidlab_core::Gender::Male,
            ability: pidlab_core::AbilitySlot::First,
            is_egg,
            fateful_encounter: false,
            ball: pidlab_core::Ball::Poke,
            tid: 0,
            sid: 0,
            ot_name: String::new(),
            ot_gender: 0,
            handler_name: None,
            region: None,
            moves: pidlab_core::Moveset::EMPTY,
            tera_type_original: None,
        }
    }

    #[test]
    fn traded_hatch_location_is_accepted_in_generation_four() {
        let hatch = HatchLocationSet::new().with(GameVersion::HeartGold, &[2000]);
        let specimen = with(GameVersion::Diamond, 4, false, 0, 2000);
        assert_eq!(
            verify_egg(&specimen, 4, &hatch).reason(),
            Reason::EggLocationTrade
        );
    }

    #[test]
    fn generation_five_has_no_trade_fallback() {
        let hatch = HatchLocationSet::new().with(GameVersion::White, &[16]);
        let specimen = with(GameVersion::Black, 5, false, 1, 16);
        assert_eq!(
            verify_egg(&specimen, 5, &hatch).reason(),
            Reason::EggLocationInvalid
        );
    }

    #[test]
    fn unknown_generation_is_invalid() {
        let specimen = with(GameVersion::Ruby, 2, false, 1, 0);
        assert!(!verify_egg(&specimen, 2, &HatchLocationSet::new()).is_valid());
    }
}
