//! Per-template checks.
//!
//! Each rule returns `Ok(())` when the specimen matches, or the first
//! [`VerificationResult`] that downgrades it.

use pidlab_core::{
    locations, AbilityPermission, AbilitySlot, AlgorithmTag, Encounter, EncounterGift,
    EncounterShadow, EncounterSlot, EncounterTera, EncounterTrade, Grade, GenderRatio,
    HasLevelRange, HasLocation, Nature, Reason, Specimen, SpeciesLookup, VerificationResult,
};
use pidlab_system_correlation::seeds_for;
use pidlab_system_locks::is_any_valid;
use pidlab_system_rng::{derive_block, gen9};
use pidlab_system_weighted::selects;

type Stage = Result<(), VerificationResult>;

fn require(holds: bool, reason: Reason) -> Stage {
    soften(holds, Grade::Invalid, reason)
}

fn soften(holds: bool, grade: Grade, reason: Reason) -> Stage {
    if holds {
        Ok(())
    } else {
        Err(VerificationResult::new(grade, reason))
    }
}

/// Shared exact checks on species data every template pins.
fn common(specimen: &Specimen, template: &dyn Encounter) -> Stage {
    require(specimen.form == template.form(), Reason::FormMismatch)?;
    require(
        template
            .fixed_gender()
            .map_or(true, |gender| gender == specimen.gender),
        Reason::GenderMismatch,
    )
}

/// Seeds under any of `tags` that reproduce the specimen; empty `tags` means
/// the template is uncorrelated.
fn correlated_seeds(
    specimen: &Specimen,
    tags: &[AlgorithmTag],
) -> Result<Vec<u32>, VerificationResult> {
    if tags.is_empty() {
        return Ok(Vec::new());
    }
    let fields = specimen.correlation_fields();
    let seeds: Vec<u32> = tags
        .iter()
        .flat_map(|tag| seeds_for(&fields, *tag))
        .collect();
    if seeds.is_empty() {
        Err(VerificationResult::invalid(Reason::NoCorrelation))
    } else {
        Ok(seeds)
    }
}

/// Nature and gender the personality value fixes in the generations that
/// derive them from it.
fn pid_attributes(
    specimen: &Specimen,
    template: &dyn Encounter,
    lookup: &dyn SpeciesLookup,
) -> Stage {
    let generation = template.generation();
    if generation <= 4 {
        require(
            specimen.nature == Nature::from_pid(specimen.pid),
            Reason::NatureMismatch,
        )?;
    }
    if generation <= 5 && template.fixed_gender().is_none() {
        let ratio = lookup.gender_ratio(specimen.species, specimen.form);
        require(
            specimen.gender == ratio.gender_from_pid(specimen.pid),
            Reason::GenderMismatch,
        )?;
    }
    Ok(())
}

/// Ability slot against the ability bits the generating algorithm could have
/// rolled. Formats with ability items may have rewritten it since.
fn ability_bit(
    specimen: &Specimen,
    bits: impl IntoIterator<Item = u32>,
    lookup: &dyn SpeciesLookup,
) -> Stage {
    let (species, form) = (specimen.species, specimen.form);
    let rolled = bits
        .into_iter()
        .any(|bit| AbilitySlot::from_index(bit & 1) == specimen.ability);
    let rewritten = match specimen.ability {
        AbilitySlot::Hidden => specimen.format >= 8 && lookup.can_ability_patch(species, form),
        _ => specimen.format >= 6 && lookup.can_ability_capsule(species, form),
    };
    require(rolled || rewritten, Reason::AbilityBitMismatch)
}

/// [`pid_attributes`] plus the ability bit for templates whose ability is the
/// low bit of the personality value.
fn pid_fixed(
    specimen: &Specimen,
    template: &dyn Encounter,
    lookup: &dyn SpeciesLookup,
) -> Stage {
    pid_attributes(specimen, template, lookup)?;
    if template.generation() <= 4 {
        ability_bit(specimen, [specimen.pid], lookup)?;
    }
    Ok(())
}

fn hidden_ability_released(specimen: &Specimen, lookup: &dyn SpeciesLookup) -> Stage {
    soften(
        specimen.ability != AbilitySlot::Hidden
            || !lookup.is_hidden_ability_unreleased(specimen.species, specimen.form),
        Grade::PartialMatch,
        Reason::HiddenAbilityUnavailable,
    )
}

/// Ability slot against the template permission, allowing for the items that
/// rewrite abilities after capture.
fn ability(
    specimen: &Specimen,
    permission: AbilityPermission,
    lookup: &dyn SpeciesLookup,
) -> Stage {
    let (species, form) = (specimen.species, specimen.form);
    let explained = match (permission, specimen.ability) {
        (AbilityPermission::Any12H, _) => true,
        (AbilityPermission::OnlyHidden, AbilitySlot::Hidden) => true,
        (_, AbilitySlot::Hidden) => lookup.can_ability_patch(species, form),
        (AbilityPermission::OnlyHidden, _) => false,
        (AbilityPermission::Any12, _) => true,
        (fixed, slot) => fixed.allows(slot) || lookup.can_ability_capsule(species, form),
    };
    soften(explained, Grade::DeferredErrors, Reason::AbilityMismatch)
}

fn fateful_and_ball(specimen: &Specimen, fateful: bool, template: &dyn Encounter) -> Stage {
    soften(
        specimen.fateful_encounter == fateful,
        Grade::PartialMatch,
        Reason::FatefulMismatch,
    )?;
    let ball = template.fixed_ball();
    soften(
        ball == pidlab_core::Ball::None || ball == specimen.ball,
        Grade::PartialMatch,
        Reason::BallMismatch,
    )
}

pub(crate) fn slot(
    specimen: &Specimen,
    slot: &EncounterSlot,
    lookup: &dyn SpeciesLookup,
) -> Stage {
    require(
        slot.is_level_within_range(specimen.met_level),
        Reason::LevelMismatch,
    )?;
    common(specimen, slot)?;
    require(
        specimen.met_location == slot.location(),
        Reason::LocationMismatch,
    )?;
    let undiscovered = lookup.is_undiscovered(specimen.species, specimen.form);
    require(
        specimen.ivs.flawless_count() >= slot.flawless_iv_count(undiscovered),
        Reason::FlawlessIvCount,
    )?;
    pid_fixed(specimen, slot, lookup)?;
    let _ = correlated_seeds(specimen, slot.correlations())?;

    hidden_ability_released(specimen, lookup)?;
    soften(
        specimen.ability != AbilitySlot::Hidden || slot.is_hidden_ability_possible(),
        Grade::Deferred,
        Reason::HiddenAbilityDeferred,
    )
}

pub(crate) fn shadow(
    specimen: &Specimen,
    shadow: &EncounterShadow,
    lookup: &dyn SpeciesLookup,
) -> Stage {
    if specimen.format == 3 {
        require(specimen.egg_location == 0, Reason::EggLocationMismatch)?;
        require(
            shadow.is_match_location(specimen.met_location),
            Reason::LocationMismatch,
        )?;
        require(specimen.met_level == shadow.level, Reason::LevelMismatch)?;
    } else {
        require(
            specimen.current_level >= shadow.level,
            Reason::LevelMismatch,
        )?;
    }
    common(specimen, shadow)?;
    require(
        shadow.shiny().is_valid(specimen.is_shiny()),
        Reason::ShinyMismatch,
    )?;

    pid_attributes(specimen, shadow, lookup)?;

    let fields = specimen.correlation_fields();
    let blocks: Vec<_> = shadow
        .correlations()
        .iter()
        .flat_map(|tag| {
            seeds_for(&fields, *tag)
                .into_iter()
                .filter_map(move |seed| derive_block(*tag, seed))
        })
        .collect();
    require(!blocks.is_empty(), Reason::NoCorrelation)?;
    let unlocked: Vec<_> = blocks
        .iter()
        .filter(|block| {
            is_any_valid(
                &shadow.party_prior,
                specimen.nature,
                specimen.gender,
                block.seed,
            )
        })
        .collect();
    require(!unlocked.is_empty(), Reason::ShadowLock)?;
    ability_bit(
        specimen,
        unlocked
            .iter()
            .map(|block| block.ability_bit.map_or(block.pid, u32::from)),
        lookup,
    )?;

    fateful_and_ball(specimen, shadow.is_fateful(), shadow)
}

pub(crate) fn trade(
    specimen: &Specimen,
    trade: &EncounterTrade,
    lookup: &dyn SpeciesLookup,
) -> Stage {
    require(specimen.met_level == trade.level, Reason::LevelMismatch)?;
    common(specimen, trade)?;
    require(
        specimen.met_location == trade.location,
        Reason::LocationMismatch,
    )?;
    require(
        specimen.egg_location == trade.egg_location,
        Reason::EggLocationMismatch,
    )?;
    require(
        specimen.id32() == trade.id32()
            && specimen.ot_gender == trade.ot_gender
            && trade.is_trainer_match(&specimen.ot_name, specimen.language.id()),
        Reason::TrainerMismatch,
    )?;
    pid_fixed(specimen, trade, lookup)?;
    match trade.pid {
        Some(pid) => require(
            specimen.pid == pid && specimen.encryption_constant == pid,
            Reason::PidMismatch,
        ),
        None => require(!specimen.is_shiny(), Reason::ShinyMismatch),
    }
}

pub(crate) fn gift(
    specimen: &Specimen,
    gift: &EncounterGift,
    lookup: &dyn SpeciesLookup,
) -> Stage {
    require(specimen.met_level == gift.level, Reason::LevelMismatch)?;
    require(
        specimen.met_location == gift.location,
        Reason::LocationMismatch,
    )?;
    common(specimen, gift)?;
    require(
        gift.shiny.is_valid(specimen.is_shiny()),
        Reason::ShinyMismatch,
    )?;
    require(
        specimen.ivs.flawless_count() >= gift.flawless_iv_count,
        Reason::FlawlessIvCount,
    )?;
    pid_fixed(specimen, gift, lookup)?;
    let _ = correlated_seeds(specimen, gift.correlations())?;

    fateful_and_ball(specimen, gift.fateful, gift)?;
    hidden_ability_released(specimen, lookup)?;
    ability(specimen, gift.ability, lookup)
}

pub(crate) fn tera(
    specimen: &Specimen,
    tera: &EncounterTera,
    lookup: &dyn SpeciesLookup,
) -> Stage {
    require(specimen.met_level == tera.level, Reason::LevelMismatch)?;
    common(specimen, tera)?;
    require(specimen.egg_location == 0, Reason::EggLocationMismatch)?;
    require(
        specimen.met_location == locations::TERA_CAVERN9,
        Reason::LocationMismatch,
    )?;

    let seed = gen9::seed_from_ec(specimen.encryption_constant);
    soften(
        tera.shiny.is_valid(specimen.is_shiny()),
        Grade::PartialMatch,
        Reason::ShinyPolicy,
    )?;
    if let Some(observed) = specimen.tera_type_original {
        let primary = lookup.types(specimen.species, specimen.form).0;
        soften(
            gen9::tera_type(seed, tera.tera_type, primary) == observed,
            Grade::PartialMatch,
            Reason::TeraTypeMismatch,
        )?;
    }
    soften(
        selects(seed, tera.stars, &tera.rate, specimen.version),
        Grade::PartialMatch,
        Reason::StarChoice,
    )?;

    let params = gen9::Gen9Params {
        flawless_ivs: tera.flawless_iv_count,
        shiny: tera.shiny,
        ability: tera.ability,
        gender_ratio: tera.gender.map_or_else(
            || lookup.gender_ratio(specimen.species, specimen.form),
            GenderRatio::single,
        ),
        id32: specimen.id32(),
    };
    let expected = gen9::generate(seed, &params);
    soften(
        expected.pid == specimen.pid
            && expected.encryption_constant == specimen.encryption_constant
            && expected.ivs == specimen.ivs
            && expected.gender == specimen.gender
            && expected.nature == specimen.nature,
        Grade::PartialMatch,
        Reason::RngMismatch,
    )?;

    hidden_ability_released(specimen, lookup)?;
    ability(specimen, tera.ability, lookup)
}
