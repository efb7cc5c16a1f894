use pidlab_core::{
    locations, AbilityPermission, AbilitySlot, Ball, Criteria, EncounterEgg, EncounterGift,
    EncounterShadow, EncounterSlot, EncounterTemplate, EncounterTera, EncounterTrade, GameVersion,
    GemType, Gender, GenderRatio, Grade, HatchLocationSet, Language, Lock, LockGender,
    LockSequence, Moveset, Nature, PersonalEntry, Reason, ShadowGame, Shiny, SlotKind, Specimen,
    SpeciesTable, TrainerContext, WeightedSlot,
};
use pidlab_system_generator::{generate, GeneratorConfig};
use pidlab_system_legality::{verify, verify_egg};
use pidlab_system_rng::SeededEntropy;
use proptest::prelude::*;

fn trainer(version: GameVersion) -> TrainerContext {
    TrainerContext {
        tid: 24680,
        sid: 13579,
        ot_name: "Lyra".to_owned(),
        ot_gender: 1,
        language: Language::English,
        version,
        region: None,
    }
}

fn species() -> SpeciesTable {
    SpeciesTable::new()
        .with(128, 0, PersonalEntry::standard((0, 0)))
        .with(
            144,
            0,
            PersonalEntry {
                gender_ratio: GenderRatio::GENDERLESS,
                undiscovered: true,
                ..PersonalEntry::standard((14, 2))
            },
        )
}

fn hatch() -> HatchLocationSet {
    HatchLocationSet::new()
        .with(GameVersion::Emerald, &[locations::HATCH_LOCATION_RSE])
        .with(GameVersion::Diamond, &[2000, 16])
        .with(GameVersion::Platinum, &[77])
        .with(GameVersion::White, &[16])
}

fn spawn(template: &EncounterTemplate, version: GameVersion, seed: u64) -> Specimen {
    generate(
        template,
        &trainer(version),
        &Criteria::UNRESTRICTED,
        &species(),
        &mut SeededEntropy::new(seed),
        &GeneratorConfig::default(),
    )
    .expect("generation")
}

fn check(specimen: &Specimen, template: &EncounterTemplate) -> (Grade, Reason) {
    let result = verify(specimen, template, &species(), &hatch());
    (result.grade(), result.reason())
}

fn emerald_slot() -> EncounterTemplate {
    EncounterTemplate::Slot(EncounterSlot::new(261, 2, 4, 17, GameVersion::Emerald))
}

fn xd_shadow() -> EncounterTemplate {
    let lock = Lock::new(
        50,
        Nature::from_pid(12),
        LockGender::Any,
        GenderRatio::EVEN,
    );
    EncounterTemplate::Shadow(EncounterShadow {
        game: ShadowGame::Xd,
        id: 7,
        gauge: 2500,
        species: 216,
        level: 11,
        location: 5,
        moves: Moveset::EMPTY,
        fixed_ball: Ball::None,
        party_prior: vec![LockSequence::party(vec![lock])],
    })
}

fn e_reader() -> EncounterTemplate {
    let lock = Lock::new(
        296,
        Nature::from_pid(3),
        LockGender::Any,
        GenderRatio::EVEN,
    );
    EncounterTemplate::Shadow(EncounterShadow {
        game: ShadowGame::Colosseum,
        id: 41,
        gauge: 2000,
        species: 296,
        level: 30,
        location: locations::E_READER_ROOM,
        moves: Moveset::EMPTY,
        fixed_ball: Ball::None,
        party_prior: vec![LockSequence::terminal(vec![lock])],
    })
}

fn raid() -> EncounterTemplate {
    EncounterTemplate::Tera(EncounterTera {
        species: 128,
        form: 0,
        gender: Some(Gender::Male),
        ability: AbilityPermission::Any12,
        flawless_iv_count: 3,
        shiny: Shiny::Random,
        level: 45,
        moves: Moveset::new([36, 99, 0, 0]),
        tera_type: GemType::new(0),
        index: 0,
        stars: 4,
        rate: WeightedSlot::new(400, 1200, 1200),
    })
}

fn trade(pid: Option<u32>) -> EncounterTemplate {
    EncounterTemplate::Trade(EncounterTrade {
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
    })
}

fn gift() -> EncounterTemplate {
    EncounterTemplate::Gift(EncounterGift {
        species: 175,
        form: 0,
        level: 1,
        location: 230,
        version: GameVersion::HgSs,
        shiny: Shiny::Random,
        ability: AbilityPermission::Any12,
        flawless_iv_count: 0,
        fixed_ball: Ball::None,
        gender: None,
        moves: Moveset::EMPTY,
        fateful: false,
        correlated: true,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn generated_wild_encounters_verify(seed in any::<u64>()) {
        let template = emerald_slot();
        let specimen = spawn(&template, GameVersion::Emerald, seed);
        prop_assert_eq!(check(&specimen, &template), (Grade::Match, Reason::EncounterMatch));
    }

    #[test]
    fn generated_raids_verify(seed in any::<u64>()) {
        let template = raid();
        let specimen = spawn(&template, GameVersion::Scarlet, seed);
        prop_assert_eq!(check(&specimen, &template), (Grade::Match, Reason::EncounterMatch));
    }
}

#[test]
fn every_category_round_trips_through_verification() {
    let horde = EncounterTemplate::Slot(
        EncounterSlot::new(41, 10, 12, 8, GameVersion::X).with_kind(SlotKind::Horde),
    );
    let legendary = EncounterTemplate::Slot(EncounterSlot::new(144, 70, 70, 8, GameVersion::Y));
    let cases = [
        (horde, GameVersion::X),
        (legendary, GameVersion::Y),
        (xd_shadow(), GameVersion::Sapphire),
        (e_reader(), GameVersion::Ruby),
        (trade(Some(0x4A3B_2C1D)), GameVersion::Pearl),
        (trade(None), GameVersion::Diamond),
        (gift(), GameVersion::HeartGold),
    ];
    for (template, version) in cases {
        for seed in 0..4 {
            let specimen = spawn(&template, version, seed);
            assert_eq!(
                check(&specimen, &template),
                (Grade::Match, Reason::EncounterMatch),
                "{template:?} seed {seed}"
            );
        }
    }
}

#[test]
fn generated_eggs_verify_as_unhatched() {
    for version in [
        GameVersion::Emerald,
        GameVersion::Diamond,
        GameVersion::White,
        GameVersion::BrilliantDiamond,
        GameVersion::Scarlet,
    ] {
        let template = EncounterTemplate::Egg(EncounterEgg {
            species: 1,
            form: 0,
            version,
        });
        let specimen = spawn(&template, version, 9);
        let result = verify(&specimen, &template, &species(), &hatch());
        assert_eq!(result.reason(), Reason::EggUnhatched, "{version:?}");
        assert!(result.is_valid());
    }
}

#[test]
fn level_outside_the_slot_range_is_invalid() {
    let template = emerald_slot();
    let mut specimen = spawn(&template, GameVersion::Emerald, 1);
    specimen.met_level = 10;
    assert_eq!(
        check(&specimen, &template),
        (Grade::Invalid, Reason::LevelMismatch)
    );
}

fn opposite(gender: Gender) -> Gender {
    match gender {
        Gender::Male => Gender::Female,
        _ => Gender::Male,
    }
}

fn other_nature(nature: Nature) -> Nature {
    Nature::from_pid(u32::from(nature.get()) + 1)
}

#[test]
fn specimen_of_another_species_is_invalid() {
    let template = emerald_slot();
    let mut specimen = spawn(&template, GameVersion::Emerald, 1);
    specimen.species = 150;
    assert_eq!(
        check(&specimen, &template),
        (Grade::Invalid, Reason::SpeciesMismatch)
    );

    let gift = gift();
    let mut specimen = spawn(&gift, GameVersion::HeartGold, 1);
    specimen.species = 176;
    assert_eq!(
        check(&specimen, &gift),
        (Grade::Invalid, Reason::SpeciesMismatch)
    );
}

#[test]
fn generation_three_attributes_follow_the_personality_value() {
    let template = emerald_slot();
    let specimen = spawn(&template, GameVersion::Emerald, 12);

    let mut renatured = specimen.clone();
    renatured.nature = other_nature(renatured.nature);
    assert_eq!(
        check(&renatured, &template),
        (Grade::Invalid, Reason::NatureMismatch)
    );

    let mut regendered = specimen.clone();
    regendered.gender = opposite(regendered.gender);
    assert_eq!(
        check(&regendered, &template),
        (Grade::Invalid, Reason::GenderMismatch)
    );

    let mut reabilitied = specimen;
    reabilitied.ability = AbilitySlot::from_index((reabilitied.pid & 1) ^ 1);
    assert_eq!(
        check(&reabilitied, &template),
        (Grade::Invalid, Reason::AbilityBitMismatch)
    );
}

#[test]
fn shadow_attributes_follow_the_rolled_values() {
    let template = xd_shadow();
    let specimen = spawn(&template, GameVersion::Sapphire, 13);

    let mut renatured = specimen.clone();
    renatured.nature = other_nature(renatured.nature);
    assert_eq!(
        check(&renatured, &template),
        (Grade::Invalid, Reason::NatureMismatch)
    );

    let mut reabilitied = specimen;
    reabilitied.ability = match reabilitied.ability {
        AbilitySlot::First => AbilitySlot::Second,
        _ => AbilitySlot::First,
    };
    assert_eq!(
        check(&reabilitied, &template),
        (Grade::Invalid, Reason::AbilityBitMismatch)
    );
}

#[test]
fn generation_five_gender_follows_the_personality_value() {
    let template = EncounterTemplate::Slot(EncounterSlot::new(128, 20, 22, 25, GameVersion::White));
    let specimen = spawn(&template, GameVersion::White, 14);
    assert_eq!(
        check(&specimen, &template),
        (Grade::Match, Reason::EncounterMatch)
    );

    let mut regendered = specimen;
    regendered.gender = opposite(regendered.gender);
    assert_eq!(
        check(&regendered, &template),
        (Grade::Invalid, Reason::GenderMismatch)
    );
}

#[test]
fn altered_personality_value_loses_its_correlation() {
    let template = emerald_slot();
    let mut specimen = spawn(&template, GameVersion::Emerald, 2);
    specimen.pid ^= 0x0001_0000;
    assert_eq!(
        check(&specimen, &template),
        (Grade::Invalid, Reason::NoCorrelation)
    );
}

#[test]
fn egg_against_a_wild_template_is_invalid() {
    let template = emerald_slot();
    let mut specimen = spawn(&template, GameVersion::Emerald, 3);
    specimen.is_egg = true;
    assert_eq!(
        check(&specimen, &template),
        (Grade::Invalid, Reason::EggStateMismatch)
    );
}

#[test]
fn e_reader_shadow_requires_japanese() {
    let template = e_reader();
    let mut specimen = spawn(&template, GameVersion::Ruby, 4);
    specimen.language = Language::English;
    assert_eq!(
        check(&specimen, &template),
        (Grade::Invalid, Reason::EReaderLanguage)
    );
}

#[test]
fn shadow_fateful_flag_only_degrades() {
    let template = xd_shadow();
    let mut specimen = spawn(&template, GameVersion::Sapphire, 5);
    specimen.fateful_encounter = false;
    assert_eq!(
        check(&specimen, &template),
        (Grade::PartialMatch, Reason::FatefulMismatch)
    );
}

#[test]
fn raid_attribute_drift_is_reported() {
    let template = raid();
    let specimen = spawn(&template, GameVersion::Violet, 6);

    let mut retyped = specimen.clone();
    retyped.tera_type_original = retyped.tera_type_original.map(|ty| (ty + 1) % 18);
    assert_eq!(
        check(&retyped, &template),
        (Grade::PartialMatch, Reason::TeraTypeMismatch)
    );

    let mut renatured = specimen;
    renatured.nature = Nature::from_pid(u32::from(renatured.nature.get()) + 1);
    assert_eq!(
        check(&renatured, &template),
        (Grade::PartialMatch, Reason::RngMismatch)
    );
}

#[test]
fn trade_from_another_trainer_is_invalid() {
    let template = trade(Some(0x4A3B_2C1D));
    let mut specimen = spawn(&template, GameVersion::Pearl, 7);
    specimen.ot_name = "Lyra".to_owned();
    assert_eq!(
        check(&specimen, &template),
        (Grade::Invalid, Reason::TrainerMismatch)
    );

    let mut repid = spawn(&template, GameVersion::Pearl, 7);
    repid.pid ^= 1;
    assert_eq!(
        check(&repid, &template),
        (Grade::Invalid, Reason::PidMismatch)
    );
}

#[test]
fn generation_three_hatchlings_follow_the_transfer_rules() {
    let template = EncounterTemplate::Egg(EncounterEgg {
        species: 1,
        form: 0,
        version: GameVersion::Emerald,
    });
    let egg = spawn(&template, GameVersion::Emerald, 8);

    let mut hatched = egg.clone();
    hatched.is_egg = false;
    assert_eq!(
        verify_egg(&hatched, 3, &hatch()).reason(),
        Reason::EggLocation
    );

    let mut transferred = hatched.clone();
    transferred.format = 4;
    transferred.met_level = 12;
    transferred.egg_location = 0;
    transferred.met_location = locations::TRANSFER3;
    assert_eq!(
        verify_egg(&transferred, 3, &hatch()).reason(),
        Reason::EggLocation
    );

    transferred.format = 5;
    assert_eq!(
        verify_egg(&transferred, 3, &hatch()).reason(),
        Reason::TransferEggLocation
    );

    transferred.met_level = 4;
    assert_eq!(
        verify_egg(&transferred, 3, &hatch()).reason(),
        Reason::TransferEggMetLevel
    );

    let mut traded_egg = egg;
    traded_egg.format = 4;
    assert_eq!(
        verify_egg(&traded_egg, 3, &hatch()).reason(),
        Reason::TransferEgg
    );
}

#[test]
fn unhatched_eggs_reject_trade_markers() {
    let template = EncounterTemplate::Egg(EncounterEgg {
        species: 1,
        form: 0,
        version: GameVersion::White,
    });
    let egg = spawn(&template, GameVersion::White, 10);

    let mut traded = egg.clone();
    traded.met_location = locations::LINK_TRADE5;
    assert_eq!(
        verify_egg(&traded, 5, &hatch()).reason(),
        Reason::EggLocationTrade
    );

    let mut marked = egg.clone();
    marked.egg_location = locations::LINK_TRADE5;
    assert_eq!(
        verify_egg(&marked, 5, &hatch()).reason(),
        Reason::EggLocationTradeFail
    );

    let mut early = egg;
    early.met_level = 0;
    let result = verify_egg(&early, 5, &hatch());
    assert_eq!(result.reason(), Reason::EggMetLevel { expected: 1 });
    assert_eq!(result.grade(), Grade::Invalid);
}

#[test]
fn verification_is_identical_across_threads() {
    let template = xd_shadow();
    let specimen = spawn(&template, GameVersion::Ruby, 11);
    let expected = verify(&specimen, &template, &species(), &hatch());
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| verify(&specimen, &template, &species(), &hatch())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread"), expected, "replay diverged between threads");
        }
    });
}
