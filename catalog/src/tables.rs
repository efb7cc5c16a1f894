//! Templates that ship as constants rather than decoded tables.

use pidlab_core::{
    locations, AbilityPermission, Ball, EncounterArea, EncounterGift, EncounterShadow,
    EncounterSlot, EncounterTrade, GameVersion, Gender, GenderRatio, Lock, LockGender,
    LockSequence, Moveset, Nature, ShadowGame, Shiny, SlotKind,
};

const ROUTE_101: u16 = 16;
const PETALBURG_WOODS: u16 = 24;
const ROUTE_2_XY: u16 = 8;
const SANTALUNE_FOREST: u16 = 10;
const FRIEND_SAFARI: u16 = 148;

const OUTSKIRT_STAND: u16 = 90;
const PHENAC_STADIUM: u16 = 29;
const PYRITE_TOWN: u16 = 104;

const GOLDENROD: u16 = 130;
const VIOLET_CITY: u16 = 138;

fn lock(species: u16, nature: u8, gender: LockGender, ratio: GenderRatio) -> Lock {
    Lock::new(species, Nature::from_pid(u32::from(nature)), gender, ratio)
}

/// Wild areas of the generation 3 and XY games.
pub(crate) fn areas() -> Vec<EncounterArea> {
    let emerald = |species, min, max, location| {
        EncounterSlot::new(species, min, max, location, GameVersion::Emerald)
    };
    let xy = |species, min, max, location, version| {
        EncounterSlot::new(species, min, max, location, version)
    };
    let horde = |species, level, version| {
        xy(species, level, level, SANTALUNE_FOREST, version).with_kind(SlotKind::Horde)
    };
    let safari = |species| {
        xy(species, 30, 30, FRIEND_SAFARI, GameVersion::Xy).with_kind(SlotKind::FriendSafari)
    };

    vec![
        EncounterArea::new(
            ROUTE_101,
            0,
            GameVersion::Emerald,
            vec![
                emerald(265, 2, 3, ROUTE_101),
                emerald(261, 2, 3, ROUTE_101),
                emerald(263, 2, 3, ROUTE_101),
            ],
        ),
        EncounterArea::new(
            PETALBURG_WOODS,
            0,
            GameVersion::Emerald,
            vec![
                emerald(263, 5, 6, PETALBURG_WOODS),
                emerald(265, 5, 6, PETALBURG_WOODS),
                emerald(285, 5, 6, PETALBURG_WOODS),
                emerald(276, 5, 6, PETALBURG_WOODS),
            ],
        ),
        EncounterArea::new(
            ROUTE_2_XY,
            0,
            GameVersion::Xy,
            vec![
                xy(659, 3, 4, ROUTE_2_XY, GameVersion::Xy),
                xy(661, 3, 4, ROUTE_2_XY, GameVersion::Xy),
                xy(16, 3, 4, ROUTE_2_XY, GameVersion::Xy),
            ],
        ),
        EncounterArea::new(
            SANTALUNE_FOREST,
            0,
            GameVersion::Xy,
            vec![
                horde(10, 3, GameVersion::X),
                horde(13, 3, GameVersion::Y),
                horde(265, 3, GameVersion::Xy),
            ],
        ),
        EncounterArea::new(
            FRIEND_SAFARI,
            0,
            GameVersion::Xy,
            vec![safari(190), safari(352), safari(132)],
        ),
    ]
}

/// Shadow captures of Colosseum and XD.
pub(crate) fn shadows() -> Vec<EncounterShadow> {
    let even = GenderRatio::EVEN;
    let mostly_male = GenderRatio::MOSTLY_MALE;
    let male = LockGender::Exact(Gender::Male);
    let female = LockGender::Exact(Gender::Female);

    vec![
        EncounterShadow {
            game: ShadowGame::Xd,
            id: 1,
            gauge: 3000,
            species: 216,
            level: 11,
            location: OUTSKIRT_STAND,
            moves: Moveset::EMPTY,
            fixed_ball: Ball::None,
            party_prior: Vec::new(),
        },
        EncounterShadow {
            game: ShadowGame::Xd,
            id: 2,
            gauge: 2500,
            species: 343,
            level: 17,
            location: PHENAC_STADIUM,
            moves: Moveset::EMPTY,
            fixed_ball: Ball::None,
            party_prior: vec![
                LockSequence::party(vec![
                    lock(322, 24, male, even),
                    lock(318, 5, female, even),
                ]),
                LockSequence::party(vec![lock(322, 24, male, even)]),
            ],
        },
        EncounterShadow {
            game: ShadowGame::Xd,
            id: 3,
            gauge: 4000,
            species: 179,
            level: 17,
            location: PYRITE_TOWN,
            moves: Moveset::EMPTY,
            fixed_ball: Ball::None,
            party_prior: vec![LockSequence::party(vec![
                lock(296, 12, LockGender::Any, mostly_male),
                lock(316, 9, female, even),
            ])],
        },
        EncounterShadow {
            game: ShadowGame::Colosseum,
            id: 40,
            gauge: 2000,
            species: 296,
            level: 30,
            location: locations::E_READER_ROOM,
            moves: Moveset::EMPTY,
            fixed_ball: Ball::None,
            party_prior: vec![LockSequence::terminal(vec![lock(
                296, 0, male, mostly_male,
            )])],
        },
    ]
}

/// Ranch gift trades of the Sinnoh games.
pub(crate) fn trades() -> Vec<EncounterTrade> {
    const HAYLEY: &[&str] = &[
        "", "ハヤシ", "Hayley", "Amélie", "Hayley", "Hayley", "", "Hayley",
    ];

    vec![
        EncounterTrade {
            species: 489,
            form: 0,
            level: 1,
            current_level: None,
            pid: None,
            location: locations::RANCH_GIFT,
            egg_location: 0,
            version: GameVersion::Dp,
            fixed_ball: Ball::Poke,
            tid: 1000,
            sid: 0,
            ot_gender: 1,
            gender: Gender::Genderless,
            ability: AbilityPermission::OnlyFirst,
            moves: Moveset::new([352, 0, 0, 0]),
            trainer_names: HAYLEY,
        },
        EncounterTrade {
            species: 25,
            form: 0,
            level: 18,
            current_level: None,
            pid: Some(0x0000_8000),
            location: locations::RANCH_GIFT,
            egg_location: 0,
            version: GameVersion::Dp,
            fixed_ball: Ball::Poke,
            tid: 1000,
            sid: 0,
            ot_gender: 1,
            gender: Gender::Female,
            ability: AbilityPermission::Any12,
            moves: Moveset::new([344, 0, 0, 0]),
            trainer_names: HAYLEY,
        },
    ]
}

/// Scripted gifts of the Johto remakes.
pub(crate) fn gifts() -> Vec<EncounterGift> {
    let johto = |species, level, location| EncounterGift {
        species,
        form: 0,
        level,
        location,
        version: GameVersion::HgSs,
        shiny: Shiny::Random,
        ability: AbilityPermission::Any12,
        flawless_iv_count: 0,
        fixed_ball: Ball::None,
        gender: None,
        moves: Moveset::EMPTY,
        fateful: false,
        correlated: true,
    };
    vec![
        johto(133, 5, GOLDENROD),
        johto(236, 10, VIOLET_CITY),
        EncounterGift {
            fixed_ball: Ball::Cherish,
            fateful: true,
            shiny: Shiny::Never,
            correlated: false,
            ..johto(147, 15, VIOLET_CITY)
        },
    ]
}
