use pidlab_core::{
    locations, AbilityPermission, Ball, Criteria, Encounter, EncounterEgg, EncounterShadow,
    EncounterSlot, EncounterTemplate, EncounterTera, EncounterTrade, GameVersion, GemType, Gender,
    GenderRatio, GenerationError, Language, Lock, LockGender, LockSequence, Moveset, Nature,
    PersonalEntry, RegionOrigin, ShadowGame, Shiny, SpeciesTable, TrainerContext, WeightedSlot,
};
use pidlab_system_correlation::analyze;
use pidlab_system_generator::{generate, generate_novel, GeneratorConfig};
use pidlab_system_rng::{gen9, install_global_entropy, EntropySource, SeededEntropy};
use pidlab_system_weighted::selects;
use proptest::prelude::*;

fn trainer(version: GameVersion) -> TrainerContext {
    TrainerContext {
        tid: 12345,
        sid: 54321,
        ot_name: "Ash".to_owned(),
        ot_gender: 0,
        language: Language::English,
        version,
        region: Some(RegionOrigin {
            country: 49,
            region: 7,
            console_region: 1,
        }),
    }
}

fn wild_slot() -> EncounterTemplate {
    EncounterTemplate::Slot(EncounterSlot::new(261, 2, 4, 17, GameVersion::Emerald))
}

fn xd_shadow(party_prior: Vec<LockSequence>) -> EncounterTemplate {
    EncounterTemplate::Shadow(EncounterShadow {
        game: ShadowGame::Xd,
        id: 1,
        gauge: 3000,
        species: 216,
        level: 11,
        location: 5,
        moves: Moveset::EMPTY,
        fixed_ball: Ball::None,
        party_prior,
    })
}

fn ranch_trade(pid: Option<u32>) -> EncounterTrade {
    EncounterTrade {
        species: 25,
        form: 0,
        level: 20,
        current_level: None,
        pid,
        location: locations::RANCH_GIFT,
        egg_location: 0,
        version: GameVersion::Dp,
        fixed_ball: Ball::Poke,
        tid: 1000,
        sid: 0,
        ot_gender: 1,
        gender: Gender::Male,
        ability: AbilityPermission::Any12,
        moves: Moveset::EMPTY,
        trainer_names: &["", "ハヤシ", "Hayley"],
    }
}

fn raid(rate: WeightedSlot) -> EncounterTera {
    EncounterTera {
        species: 128,
        form: 0,
        gender: Some(Gender::Male),
        ability: AbilityPermission::Any12,
        flawless_iv_count: 2,
        shiny: Shiny::Random,
        level: 35,
        moves: Moveset::new([33, 99, 0, 0]),
        tera_type: GemType::new(0),
        index: 0,
        stars: 3,
        rate,
    }
}

struct Counting {
    inner: SeededEntropy,
    draws: u32,
}

impl EntropySource for Counting {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn wild_slot_round_trips_through_the_correlator(seed in any::<u64>()) {
        let template = wild_slot();
        let specimen = generate(
            &template,
            &trainer(GameVersion::Emerald),
            &Criteria::UNRESTRICTED,
            &SpeciesTable::new(),
            &mut SeededEntropy::new(seed),
            &GeneratorConfig::default(),
        )
        .expect("slot generation");
        let found = analyze(&specimen.correlation_fields()).expect("correlation");
        prop_assert!(template.correlations().contains(&found.tag()));
        prop_assert!((2..=4).contains(&specimen.met_level));
        prop_assert_eq!(specimen.current_level, specimen.met_level);
        prop_assert_eq!(specimen.version, GameVersion::Emerald);
    }
}

#[test]
fn caller_criteria_are_honoured() {
    let criteria = Criteria {
        gender: Some(Gender::Female),
        nature: Nature::new(3),
        ability: None,
        min_flawless: 0,
    };
    let specimen = generate(
        &wild_slot(),
        &trainer(GameVersion::Emerald),
        &criteria,
        &SpeciesTable::new(),
        &mut SeededEntropy::new(42),
        &GeneratorConfig::default(),
    )
    .expect("generation");
    assert_eq!(specimen.gender, Gender::Female);
    assert_eq!(Some(specimen.nature), Nature::new(3));
    assert_eq!(specimen.nature, Nature::from_pid(specimen.pid));
}

#[test]
fn deterministic_replay() {
    let run = || {
        generate(
            &wild_slot(),
            &trainer(GameVersion::Ruby),
            &Criteria::UNRESTRICTED,
            &SpeciesTable::new(),
            &mut SeededEntropy::new(0x5EED),
            &GeneratorConfig::default(),
        )
        .expect("generation")
    };
    assert_eq!(run(), run(), "replay diverged between runs");
}

#[test]
fn impossible_lock_exhausts_within_the_cap() {
    let impossible = Lock::new(
        100,
        Nature::from_pid(0),
        LockGender::Exact(Gender::Genderless),
        GenderRatio::EVEN,
    );
    let template = xd_shadow(vec![LockSequence::party(vec![impossible])]);
    let mut entropy = Counting {
        inner: SeededEntropy::new(1),
        draws: 0,
    };
    let result = generate(
        &template,
        &trainer(GameVersion::Emerald),
        &Criteria::UNRESTRICTED,
        &SpeciesTable::new(),
        &mut entropy,
        &GeneratorConfig::new(64),
    );
    assert_eq!(result, Err(GenerationError::Exhausted { attempts: 64 }));
    assert_eq!(entropy.draws, 64);
}

#[test]
fn xd_shadow_is_fateful_and_never_shiny() {
    let template = xd_shadow(Vec::new());
    for seed in 0..16 {
        let specimen = generate(
            &template,
            &trainer(GameVersion::Sapphire),
            &Criteria::UNRESTRICTED,
            &SpeciesTable::new(),
            &mut SeededEntropy::new(seed),
            &GeneratorConfig::default(),
        )
        .expect("shadow generation");
        assert!(specimen.fateful_encounter);
        assert!(!specimen.is_shiny());
        assert_eq!(specimen.version, GameVersion::Cxd);
        assert_eq!(specimen.ball, Ball::Poke);
    }
}

#[test]
fn e_reader_shadow_satisfies_its_terminal_lock() {
    let wanted = Nature::from_pid(7);
    let lock = Lock::new(296, wanted, LockGender::Exact(Gender::Male), GenderRatio::EVEN);
    let template = EncounterTemplate::Shadow(EncounterShadow {
        game: ShadowGame::Colosseum,
        id: 40,
        gauge: 2000,
        species: 296,
        level: 30,
        location: locations::E_READER_ROOM,
        moves: Moveset::EMPTY,
        fixed_ball: Ball::None,
        party_prior: vec![LockSequence::terminal(vec![lock])],
    });
    let specimen = generate(
        &template,
        &trainer(GameVersion::Ruby),
        &Criteria::UNRESTRICTED,
        &SpeciesTable::new(),
        &mut SeededEntropy::new(3),
        &GeneratorConfig::default(),
    )
    .expect("e-Reader generation");
    assert_eq!(specimen.language, Language::Japanese);
    assert_eq!(specimen.ivs.flawless_count(), 0);
    assert_eq!(specimen.ivs.values(), [0; 6]);
    assert_eq!(specimen.nature, wanted);
    assert_eq!(specimen.gender, Gender::Male);
    assert!(!specimen.fateful_encounter);
}

#[test]
fn raid_seed_passes_its_star_gate() {
    let rate = WeightedSlot::new(100, 300, 300);
    let template = EncounterTemplate::Tera(raid(rate));
    let lookup = SpeciesTable::new().with(128, 0, PersonalEntry::standard((0, 0)));
    let specimen = generate(
        &template,
        &trainer(GameVersion::Violet),
        &Criteria::UNRESTRICTED,
        &lookup,
        &mut SeededEntropy::new(11),
        &GeneratorConfig::default(),
    )
    .expect("raid generation");
    let seed = gen9::seed_from_ec(specimen.encryption_constant);
    assert!(selects(seed, 3, &rate, GameVersion::Violet));
    assert_eq!(specimen.version, GameVersion::Violet);
    assert_eq!(specimen.met_location, locations::TERA_CAVERN9);
    assert_eq!(specimen.gender, Gender::Male);
    assert!(specimen.ivs.flawless_count() >= 2);
    assert_eq!(specimen.tera_type_original, Some(0));
    assert_eq!(specimen.moves, Moveset::new([33, 99, 0, 0]));
}

#[test]
fn raid_missing_from_the_trainer_version_is_unsupported() {
    let rate = WeightedSlot::new(100, 0, WeightedSlot::UNAVAILABLE);
    let template = EncounterTemplate::Tera(raid(rate));
    let result = generate(
        &template,
        &trainer(GameVersion::Violet),
        &Criteria::UNRESTRICTED,
        &SpeciesTable::new(),
        &mut SeededEntropy::new(11),
        &GeneratorConfig::default(),
    );
    assert!(matches!(result, Err(GenerationError::Unsupported { .. })));
}

#[test]
fn fixed_pid_trade_keeps_its_value_and_trainer() {
    let template = EncounterTemplate::Trade(ranch_trade(Some(0x1234_5678)));
    let specimen = generate(
        &template,
        &trainer(GameVersion::Pearl),
        &Criteria::UNRESTRICTED,
        &SpeciesTable::new(),
        &mut SeededEntropy::new(5),
        &GeneratorConfig::default(),
    )
    .expect("trade generation");
    assert_eq!(specimen.pid, 0x1234_5678);
    assert_eq!(specimen.encryption_constant, 0x1234_5678);
    assert_eq!(specimen.nature, Nature::from_pid(0x1234_5678));
    assert_eq!(specimen.ot_name, "Hayley");
    assert_eq!(specimen.handler_name.as_deref(), Some("Ash"));
    assert_eq!((specimen.tid, specimen.sid, specimen.ot_gender), (1000, 0, 1));
    assert_eq!(specimen.version, GameVersion::Pearl);
    assert!(!specimen.fateful_encounter);
}

#[test]
fn fateful_trade_rolls_a_plain_value() {
    let template = EncounterTemplate::Trade(ranch_trade(None));
    let specimen = generate(
        &template,
        &trainer(GameVersion::Diamond),
        &Criteria::UNRESTRICTED,
        &SpeciesTable::new(),
        &mut SeededEntropy::new(8),
        &GeneratorConfig::default(),
    )
    .expect("trade generation");
    assert!(specimen.fateful_encounter);
    assert!(!specimen.is_shiny());
    assert_eq!(specimen.gender, Gender::Male);
    assert_eq!(specimen.met_location, locations::RANCH_GIFT);
}

#[test]
fn trade_without_a_localized_trainer_is_unsupported() {
    let template = EncounterTemplate::Trade(ranch_trade(Some(1)));
    let mut french = trainer(GameVersion::Diamond);
    french.language = Language::French;
    let result = generate(
        &template,
        &french,
        &Criteria::UNRESTRICTED,
        &SpeciesTable::new(),
        &mut SeededEntropy::new(8),
        &GeneratorConfig::default(),
    );
    assert!(matches!(result, Err(GenerationError::Unsupported { .. })));
}

#[test]
fn eggs_are_generated_unhatched() {
    let cases = [
        (GameVersion::Emerald, 0, locations::HATCH_LOCATION_RSE, 0, 5),
        (GameVersion::Diamond, 0, 0, locations::DAYCARE4, 1),
        (GameVersion::BrilliantDiamond, 1, locations::DEFAULT_8B_NONE, locations::DAYCARE8B, 1),
        (GameVersion::Scarlet, 1, 0, locations::PICNIC9, 1),
    ];
    for (version, met_level, met_location, egg_location, level) in cases {
        let template = EncounterTemplate::Egg(EncounterEgg {
            species: 1,
            form: 0,
            version,
        });
        let specimen = generate(
            &template,
            &trainer(version),
            &Criteria::UNRESTRICTED,
            &SpeciesTable::new(),
            &mut SeededEntropy::new(2),
            &GeneratorConfig::default(),
        )
        .expect("egg generation");
        assert!(specimen.is_egg);
        assert_eq!(specimen.met_level, met_level, "{version:?}");
        assert_eq!(specimen.met_location, met_location, "{version:?}");
        assert_eq!(specimen.egg_location, egg_location, "{version:?}");
        assert_eq!(specimen.current_level, level, "{version:?}");
    }
}

#[test]
fn novel_generation_draws_from_the_global_source() {
    let _ = install_global_entropy(7);
    let specimen = generate_novel(
        &wild_slot(),
        &trainer(GameVersion::Emerald),
        &Criteria::UNRESTRICTED,
        &SpeciesTable::new(),
        &GeneratorConfig::default(),
    )
    .expect("novel generation");
    assert_eq!(specimen.species, 261);
    assert!(analyze(&specimen.correlation_fields()).is_some());
}
