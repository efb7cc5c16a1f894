#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Forward generator that synthesizes specimens by bounded rejection sampling.
//!
//! Every call resolves the template into a sampling plan, then repeatedly draws
//! a seed (or raw words for uncorrelated templates) from an [`EntropySource`],
//! derives the attribute block and keeps it only if the caller's [`Criteria`],
//! the template's own policies, any shadow locks and any raid star gate accept
//! it. Correlated candidates are additionally confirmed by the inverse
//! correlator before they are returned. The loop never exceeds the configured
//! attempt cap and reports [`GenerationError::Exhausted`] instead.

mod config;

pub use config::{ConfigError, GeneratorConfig};

use pidlab_core::{
    is_shiny, locations, AbilityPermission, AbilitySlot, AlgorithmTag, Ball, CorrelationFields,
    Criteria, Encounter, EncounterTemplate, EncounterTera, GameVersion, Gender, GenderRatio,
    GenerationError, HasLevelRange, HasLocation, HasMoveset, IvSet, Language, LockSequence, Nature,
    Shiny, Specimen, SpeciesLookup, TrainerContext, BASE_RATE_TABLE, IV_MAX,
};
use pidlab_system_correlation::analyze;
use pidlab_system_locks::is_any_valid;
use pidlab_system_rng::{
    card_xor_block, cxd_block, derive_block, gen9, global_entropy, EntropySource, PidBlock,
};
use pidlab_system_weighted::{rate_total, selects};
use tracing::{debug, warn};

/// Generates a specimen of `template` for `trainer`, drawing from `entropy`.
///
/// Fails with [`GenerationError::Unsupported`] when the template cannot be
/// produced for the trainer at all, and with [`GenerationError::Exhausted`]
/// when no candidate passes every constraint within the attempt cap.
pub fn generate<E: EntropySource>(
    template: &EncounterTemplate,
    trainer: &TrainerContext,
    criteria: &Criteria,
    lookup: &dyn SpeciesLookup,
    entropy: &mut E,
    config: &GeneratorConfig,
) -> Result<Specimen, GenerationError> {
    let version = template.version().compatible_with(trainer.version);
    let linkage = Linkage::resolve(template, trainer, version.generation())?;
    let plan = Plan::new(template, lookup, linkage.id32(), version)?;
    let met = MetData::draw(template, version, entropy);

    for attempt in 1..=config.max_attempts() {
        let Some(candidate) = plan.sample(criteria, entropy) else {
            continue;
        };
        if !plan.accepts(&candidate, criteria) || !plan.confirms(&candidate) {
            continue;
        }
        debug!(
            template = template.name(),
            species = template.species(),
            attempts = attempt,
            "candidate accepted"
        );
        return Ok(assemble(template, trainer, version, linkage, met, candidate));
    }

    warn!(
        template = template.name(),
        species = template.species(),
        attempts = config.max_attempts(),
        "generation exhausted its attempt cap"
    );
    Err(GenerationError::Exhausted {
        attempts: config.max_attempts(),
    })
}

/// [`generate`] drawing from the process-wide entropy source.
pub fn generate_novel(
    template: &EncounterTemplate,
    trainer: &TrainerContext,
    criteria: &Criteria,
    lookup: &dyn SpeciesLookup,
    config: &GeneratorConfig,
) -> Result<Specimen, GenerationError> {
    let mut entropy = global_entropy();
    generate(template, trainer, criteria, lookup, &mut entropy, config)
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    pid: u32,
    encryption_constant: u32,
    ivs: IvSet,
    nature: Nature,
    gender: Gender,
    ability: AbilitySlot,
    tera_type: Option<u8>,
}

enum Source<'a> {
    Lcrng(AlgorithmTag),
    Shadow(&'a [LockSequence]),
    EReader(&'a [LockSequence]),
    Tera {
        tera: &'a EncounterTera,
        version: GameVersion,
        params: gen9::Gen9Params,
        primary_type: u8,
    },
    FixedPid(u32),
    Fresh,
}

struct Plan<'a> {
    source: Source<'a>,
    id32: u32,
    generation: u8,
    shiny: Shiny,
    ratio: GenderRatio,
    fixed_gender: Option<Gender>,
    ability: AbilityPermission,
    hidden_released: bool,
    flawless: u8,
    correlations: &'static [AlgorithmTag],
}

impl<'a> Plan<'a> {
    fn new(
        template: &'a EncounterTemplate,
        lookup: &dyn SpeciesLookup,
        id32: u32,
        version: GameVersion,
    ) -> Result<Self, GenerationError> {
        let (species, form) = (template.species(), template.form());
        let ratio = lookup.gender_ratio(species, form);
        let source = match template {
            EncounterTemplate::Tera(tera) => Source::Tera {
                tera,
                version: raid_version(tera, version)?,
                params: gen9::Gen9Params {
                    flawless_ivs: tera.flawless_iv_count,
                    shiny: tera.shiny,
                    ability: tera.ability,
                    gender_ratio: tera.gender.map_or(ratio, GenderRatio::single),
                    id32,
                },
                primary_type: lookup.types(species, form).0,
            },
            EncounterTemplate::Shadow(shadow) if shadow.is_e_reader() => {
                Source::EReader(&shadow.party_prior)
            }
            EncounterTemplate::Shadow(shadow) => Source::Shadow(&shadow.party_prior),
            EncounterTemplate::Trade(trade) => trade.pid.map_or(Source::Fresh, Source::FixedPid),
            _ => template
                .correlations()
                .first()
                .map_or(Source::Fresh, |tag| Source::Lcrng(*tag)),
        };
        let flawless = match template {
            EncounterTemplate::Slot(slot) => {
                slot.flawless_iv_count(lookup.is_undiscovered(species, form))
            }
            EncounterTemplate::Tera(tera) => tera.flawless_iv_count,
            EncounterTemplate::Gift(gift) => gift.flawless_iv_count,
            _ => 0,
        };
        Ok(Self {
            source,
            id32,
            generation: version.generation(),
            shiny: template.shiny(),
            ratio,
            fixed_gender: template.fixed_gender(),
            ability: template.ability(),
            hidden_released: !lookup.is_hidden_ability_unreleased(species, form),
            flawless,
            correlations: template.correlations(),
        })
    }

    /// One candidate, or `None` when a hidden constraint of the source rejects the draw.
    fn sample(&self, criteria: &Criteria, entropy: &mut impl EntropySource) -> Option<Candidate> {
        match &self.source {
            Source::Lcrng(tag) => {
                let block = derive_block(*tag, entropy.next_u32())?;
                Some(self.from_block(&block))
            }
            Source::Shadow(alternatives) => {
                let seed = entropy.next_u32();
                let candidate = self.from_block(&cxd_block(seed));
                is_any_valid(alternatives, candidate.nature, candidate.gender, seed)
                    .then_some(candidate)
            }
            Source::EReader(alternatives) => {
                let seed = entropy.next_u32();
                let candidate = self.from_block(&card_xor_block(seed));
                is_any_valid(alternatives, candidate.nature, candidate.gender, seed)
                    .then_some(candidate)
            }
            Source::Tera {
                tera,
                version,
                params,
                primary_type,
            } => {
                let seed = entropy.next_u32();
                if !selects(seed, tera.stars, &tera.rate, *version) {
                    return None;
                }
                let attributes = gen9::generate(seed, params);
                Some(Candidate {
                    pid: attributes.pid,
                    encryption_constant: attributes.encryption_constant,
                    ivs: attributes.ivs,
                    nature: attributes.nature,
                    gender: attributes.gender,
                    ability: attributes.ability,
                    tera_type: Some(gen9::tera_type(seed, tera.tera_type, *primary_type)),
                })
            }
            Source::FixedPid(pid) => Some(Candidate {
                pid: *pid,
                encryption_constant: *pid,
                ivs: random_ivs(self.flawless, entropy),
                nature: Nature::from_pid(*pid),
                gender: self
                    .fixed_gender
                    .unwrap_or_else(|| self.ratio.gender_from_pid(*pid)),
                ability: AbilitySlot::from_index(pid & 1),
                tera_type: None,
            }),
            Source::Fresh => Some(self.fresh(criteria, entropy)),
        }
    }

    fn from_block(&self, block: &PidBlock) -> Candidate {
        let ability_bit = block.ability_bit.map_or(block.pid & 1, u32::from);
        Candidate {
            pid: block.pid,
            encryption_constant: block.pid,
            ivs: block.ivs,
            nature: Nature::from_pid(block.pid),
            gender: self.ratio.gender_from_pid(block.pid),
            ability: AbilitySlot::from_index(ability_bit),
            tera_type: None,
        }
    }

    /// Uncorrelated draw. Attributes the game stores independently of the
    /// personality value are taken from the criteria when they name one.
    fn fresh(&self, criteria: &Criteria, entropy: &mut impl EntropySource) -> Candidate {
        let mut pid = entropy.next_u32();
        if self.shiny == Shiny::Always {
            pid = force_shiny(pid, self.id32);
        }
        let encryption_constant = if self.generation >= 6 {
            entropy.next_u32()
        } else {
            pid
        };
        let ivs = random_ivs(self.flawless, entropy);

        let nature = match criteria.nature {
            Some(nature) if self.generation >= 5 => nature,
            _ if self.generation >= 5 => Nature::from_pid(entropy.next_u32()),
            _ => Nature::from_pid(pid),
        };
        let gender = if self.generation <= 5 {
            self.ratio.gender_from_pid(pid)
        } else if let Some(gender) = self
            .fixed_gender
            .or(criteria.gender.filter(|gender| self.ratio.permits(*gender)))
        {
            gender
        } else {
            let roll = (entropy.next_u32() % 100) as u8 + 1;
            self.ratio.gender_from_roll(roll)
        };
        let ability = if self.generation <= 4 {
            AbilitySlot::from_index(pid & 1)
        } else {
            self.pick_ability(criteria, entropy)
        };

        Candidate {
            pid,
            encryption_constant,
            ivs,
            nature,
            gender,
            ability,
            tera_type: None,
        }
    }

    fn pick_ability(&self, criteria: &Criteria, entropy: &mut impl EntropySource) -> AbilitySlot {
        if let Some(single) = self.ability.single_value() {
            return single;
        }
        if let Some(wanted) = criteria.ability.filter(|slot| self.allows_ability(*slot)) {
            return wanted;
        }
        let choices = if self.allows_ability(AbilitySlot::Hidden) {
            3
        } else {
            2
        };
        AbilitySlot::from_index(entropy.next_u32() % choices)
    }

    fn allows_ability(&self, slot: AbilitySlot) -> bool {
        self.ability.allows(slot) && (slot != AbilitySlot::Hidden || self.hidden_released)
    }

    fn accepts(&self, candidate: &Candidate, criteria: &Criteria) -> bool {
        let shiny = is_shiny(candidate.pid, self.id32, self.generation);
        self.shiny.is_valid(shiny)
            && self
                .fixed_gender
                .map_or(true, |gender| gender == candidate.gender)
            && self.allows_ability(candidate.ability)
            && candidate.ivs.flawless_count() >= self.flawless
            && criteria.accepts(
                candidate.nature,
                candidate.gender,
                candidate.ability,
                candidate.ivs,
            )
    }

    /// Whether the inverse correlator attributes the candidate to one of the
    /// template's algorithms.
    fn confirms(&self, candidate: &Candidate) -> bool {
        if self.correlations.is_empty() {
            return true;
        }
        let fields = CorrelationFields {
            pid: candidate.pid,
            encryption_constant: candidate.encryption_constant,
            ivs: candidate.ivs,
            id32: self.id32,
        };
        analyze(&fields).is_some_and(|found| self.correlations.contains(&found.tag()))
    }
}

fn raid_version(tera: &EncounterTera, version: GameVersion) -> Result<GameVersion, GenerationError> {
    let has_table = rate_total(&BASE_RATE_TABLE, tera.stars, version).is_some();
    if has_table && tera.rate.is_available(version) {
        Ok(version)
    } else {
        Err(GenerationError::Unsupported {
            reason: "raid slot has no weighted table for the trainer's version",
        })
    }
}

/// Rewrites the upper half so `shiny_xor` is zero for `id32`.
const fn force_shiny(pid: u32, id32: u32) -> u32 {
    let tsv = (id32 >> 16) ^ (id32 & 0xFFFF);
    let low = pid & 0xFFFF;
    (tsv ^ low) << 16 | low
}

fn random_ivs(flawless: u8, entropy: &mut impl EntropySource) -> IvSet {
    let mut perfect = [false; 6];
    let mut placed = 0;
    while placed < flawless.min(6) {
        let index = (entropy.next_u32() % 6) as usize;
        if !perfect[index] {
            perfect[index] = true;
            placed += 1;
        }
    }
    let mut values = [IV_MAX; 6];
    for (value, fixed) in values.iter_mut().zip(perfect) {
        if !fixed {
            *value = (entropy.next_u32() % 32) as u8;
        }
    }
    IvSet::new(values)
}

/// Trainer fields written onto the specimen.
struct Linkage {
    tid: u16,
    sid: u16,
    ot_name: String,
    ot_gender: u8,
    handler_name: Option<String>,
    language: Language,
}

impl Linkage {
    fn resolve(
        template: &EncounterTemplate,
        trainer: &TrainerContext,
        generation: u8,
    ) -> Result<Self, GenerationError> {
        let language = trainer.language.safe_for_generation(generation);
        let own = Self {
            tid: trainer.tid,
            sid: trainer.sid,
            ot_name: trainer.ot_name.clone(),
            ot_gender: trainer.ot_gender,
            handler_name: None,
            language,
        };
        match template {
            EncounterTemplate::Trade(trade) => {
                let ot_name = trade.trainer_name(language.id()).ok_or(
                    GenerationError::Unsupported {
                        reason: "trade is not offered in the trainer's language",
                    },
                )?;
                Ok(Self {
                    tid: trade.tid,
                    sid: trade.sid,
                    ot_name: ot_name.to_owned(),
                    ot_gender: trade.ot_gender,
                    handler_name: Some(trainer.ot_name.clone()),
                    language,
                })
            }
            // Both console protagonists are male.
            EncounterTemplate::Shadow(shadow) => Ok(Self {
                ot_gender: 0,
                language: if shadow.is_e_reader() {
                    Language::Japanese
                } else {
                    language
                },
                ..own
            }),
            _ => Ok(own),
        }
    }

    fn id32(&self) -> u32 {
        u32::from(self.tid) | u32::from(self.sid) << 16
    }
}

/// Level and location fields, fixed before sampling starts.
#[derive(Clone, Copy, Debug)]
struct MetData {
    current_level: u8,
    met_level: u8,
    met_location: u16,
    egg_location: u16,
    is_egg: bool,
}

impl MetData {
    fn draw(
        template: &EncounterTemplate,
        version: GameVersion,
        entropy: &mut impl EntropySource,
    ) -> Self {
        match template {
            EncounterTemplate::Egg(egg) => {
                let met_location = if version.generation() == 3 {
                    locations::hatch_location3(version)
                } else {
                    locations::unhatched_met(version)
                };
                Self {
                    current_level: egg.level_min(),
                    met_level: egg.egg_met_level(),
                    met_location,
                    egg_location: locations::daycare(version),
                    is_egg: true,
                }
            }
            EncounterTemplate::Trade(trade) => Self {
                current_level: trade.current_level.unwrap_or(trade.level),
                met_level: trade.level,
                met_location: trade.location(),
                egg_location: trade.egg_location(),
                is_egg: false,
            },
            other => {
                let (min, max) = (other.level_min(), other.level_max());
                let level = if min < max {
                    let span = u32::from(max) - u32::from(min) + 1;
                    min + (entropy.next_u32() % span) as u8
                } else {
                    min
                };
                Self {
                    current_level: level,
                    met_level: level,
                    met_location: other.location(),
                    egg_location: other.egg_location(),
                    is_egg: false,
                }
            }
        }
    }
}

fn is_fateful(template: &EncounterTemplate) -> bool {
    match template {
        EncounterTemplate::Shadow(shadow) => shadow.is_fateful(),
        EncounterTemplate::Trade(trade) => trade.is_fateful(),
        EncounterTemplate::Gift(gift) => gift.fateful,
        _ => false,
    }
}

fn assemble(
    template: &EncounterTemplate,
    trainer: &TrainerContext,
    version: GameVersion,
    linkage: Linkage,
    met: MetData,
    candidate: Candidate,
) -> Specimen {
    let generation = version.generation();
    let ball = match template.fixed_ball() {
        Ball::None => Ball::Poke,
        fixed => fixed,
    };
    Specimen {
        species: template.species(),
        form: template.form(),
        current_level: met.current_level,
        met_level: met.met_level,
        met_location: met.met_location,
        egg_location: met.egg_location,
        version,
        format: generation,
        language: linkage.language,
        pid: candidate.pid,
        encryption_constant: candidate.encryption_constant,
        ivs: candidate.ivs,
        nature: candidate.nature,
        gender: candidate.gender,
        ability: candidate.ability,
        is_egg: met.is_egg,
        fateful_encounter: is_fateful(template),
        ball,
        tid: linkage.tid,
        sid: linkage.sid,
        ot_name: linkage.ot_name,
        ot_gender: linkage.ot_gender,
        handler_name: linkage.handler_name,
        region: matches!(generation, 6 | 7).then_some(trainer.region).flatten(),
        moves: template.moves(),
        tera_type_original: candidate.tera_type,
    }
}
