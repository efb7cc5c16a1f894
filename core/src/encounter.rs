use crate::{
    locations, AbilityPermission, AlgorithmTag, Ball, GameVersion, GemType, Gender, LockSequence,
    Moveset, Shiny, WeightedSlot,
};

/// Templates obtainable over a contiguous level range.
pub trait HasLevelRange {
    /// Lowest level the template produces.
    fn level_min(&self) -> u8;

    /// Highest level the template produces.
    fn level_max(&self) -> u8;

    /// Whether `level` lies inside the template's range.
    fn is_level_within_range(&self, level: u8) -> bool {
        self.level_min() <= level && level <= self.level_max()
    }
}

/// Templates tied to a met location.
pub trait HasLocation {
    /// Met location id recorded on the specimen.
    fn location(&self) -> u16;

    /// Egg location id recorded on the specimen; zero when not hatched.
    fn egg_location(&self) -> u16 {
        0
    }
}

/// Templates that may fix the specimen's moves.
pub trait HasMoveset {
    /// Moves the specimen starts with; empty when the template does not fix them.
    fn moves(&self) -> Moveset;
}

/// Shared view over every template category.
pub trait Encounter: HasLevelRange + HasLocation + HasMoveset {
    /// National dex species id.
    fn species(&self) -> u16;

    /// Form index.
    fn form(&self) -> u8;

    /// Game or game group the template belongs to.
    fn version(&self) -> GameVersion;

    /// Generation the template originates in.
    fn generation(&self) -> u8 {
        self.version().generation()
    }

    /// Shininess policy.
    fn shiny(&self) -> Shiny;

    /// Ability slots the template can produce.
    fn ability(&self) -> AbilityPermission;

    /// Ball the specimen must be in, [`Ball::None`] when unrestricted.
    fn fixed_ball(&self) -> Ball {
        Ball::None
    }

    /// Gender pinned by the template, `None` when random.
    fn fixed_gender(&self) -> Option<Gender> {
        None
    }

    /// Short human-readable category name.
    fn name(&self) -> &'static str;

    /// Algorithms the template's personality values are correlated with.
    ///
    /// Empty when the template draws personality values without correlation.
    fn correlations(&self) -> &'static [AlgorithmTag];
}

/// Subtype of a wild encounter slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Ordinary grass, cave, water or overworld slot.
    Standard,
    /// Five-member horde battle.
    Horde,
    /// Friend Safari slot.
    FriendSafari,
}

/// One wild encounter slot of an area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncounterSlot {
    species: u16,
    form: u8,
    gender: Option<Gender>,
    level_min: u8,
    level_max: u8,
    time_of_day: u8,
    location: u16,
    version: GameVersion,
    kind: SlotKind,
}

const LCRNG_WILD: &[AlgorithmTag] = &[
    AlgorithmTag::Method1,
    AlgorithmTag::Method2,
    AlgorithmTag::Method4,
];

impl EncounterSlot {
    /// Creates an ordinary slot of the base form, with random gender, at any time of day.
    #[must_use]
    pub const fn new(
        species: u16,
        level_min: u8,
        level_max: u8,
        location: u16,
        version: GameVersion,
    ) -> Self {
        Self {
            species,
            form: 0,
            gender: None,
            level_min,
            level_max,
            time_of_day: 0,
            location,
            version,
            kind: SlotKind::Standard,
        }
    }

    /// Returns a copy with a different form.
    #[must_use]
    pub const fn with_form(mut self, form: u8) -> Self {
        self.form = form;
        self
    }

    /// Returns a copy with a fixed gender, or a random one for `None`.
    #[must_use]
    pub const fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    /// Returns a copy restricted to the `time_of_day` bitflags.
    #[must_use]
    pub const fn with_time_of_day(mut self, time_of_day: u8) -> Self {
        self.time_of_day = time_of_day;
        self
    }

    /// Returns a copy with a different slot subtype.
    #[must_use]
    pub const fn with_kind(mut self, kind: SlotKind) -> Self {
        self.kind = kind;
        self
    }

    /// Time-of-day bitflags the slot appears in; zero means any time.
    #[must_use]
    pub const fn time_of_day(&self) -> u8 {
        self.time_of_day
    }

    /// Slot subtype.
    #[must_use]
    pub const fn kind(&self) -> SlotKind {
        self.kind
    }

    /// Perfect stats the slot guarantees; `undiscovered` is the species' egg group flag.
    #[must_use]
    pub fn flawless_iv_count(&self, undiscovered: bool) -> u8 {
        if self.generation() != 6 {
            0
        } else if undiscovered {
            3
        } else if self.kind == SlotKind::FriendSafari {
            2
        } else {
            0
        }
    }

    /// Whether the slot can yield the hidden ability without being forced to.
    #[must_use]
    pub fn is_hidden_ability_possible(&self) -> bool {
        self.generation() == 6 && matches!(self.kind, SlotKind::Horde | SlotKind::FriendSafari)
    }
}

impl HasLevelRange for EncounterSlot {
    fn level_min(&self) -> u8 {
        self.level_min
    }

    fn level_max(&self) -> u8 {
        self.level_max
    }
}

impl HasLocation for EncounterSlot {
    fn location(&self) -> u16 {
        self.location
    }
}

impl HasMoveset for EncounterSlot {
    fn moves(&self) -> Moveset {
        Moveset::EMPTY
    }
}

impl Encounter for EncounterSlot {
    fn species(&self) -> u16 {
        self.species
    }

    fn form(&self) -> u8 {
        self.form
    }

    fn version(&self) -> GameVersion {
        self.version
    }

    fn shiny(&self) -> Shiny {
        Shiny::Random
    }

    fn ability(&self) -> AbilityPermission {
        if self.is_hidden_ability_possible() {
            AbilityPermission::Any12H
        } else {
            AbilityPermission::Any12
        }
    }

    fn fixed_gender(&self) -> Option<Gender> {
        self.gender
    }

    fn name(&self) -> &'static str {
        "Wild Encounter"
    }

    fn correlations(&self) -> &'static [AlgorithmTag] {
        if self.generation() == 3 {
            LCRNG_WILD
        } else {
            &[]
        }
    }
}

/// Location header plus the slots decoded from one area record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterArea {
    location: u16,
    cross_from: u16,
    version: GameVersion,
    slots: Vec<EncounterSlot>,
}

impl EncounterArea {
    /// Creates an area.
    #[must_use]
    pub fn new(location: u16, cross_from: u16, version: GameVersion, slots: Vec<EncounterSlot>) -> Self {
        Self {
            location,
            cross_from,
            version,
            slots,
        }
    }

    /// Location id of the area.
    #[must_use]
    pub const fn location(&self) -> u16 {
        self.location
    }

    /// Location whose slots spill over into this area.
    #[must_use]
    pub const fn cross_from(&self) -> u16 {
        self.cross_from
    }

    /// Game the table was shipped with.
    #[must_use]
    pub const fn version(&self) -> GameVersion {
        self.version
    }

    /// Slots in table order.
    #[must_use]
    pub fn slots(&self) -> &[EncounterSlot] {
        &self.slots
    }

    /// Whether the area is recorded under `location`.
    #[must_use]
    pub const fn is_match_location(&self, location: u16) -> bool {
        self.location == location
    }
}

/// Tiered raid encounter of the generation 9 games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncounterTera {
    /// National dex species id.
    pub species: u16,
    /// Form index.
    pub form: u8,
    /// Fixed gender, `None` when random.
    pub gender: Option<Gender>,
    /// Ability permission.
    pub ability: AbilityPermission,
    /// Number of guaranteed perfect individual stats.
    pub flawless_iv_count: u8,
    /// Shininess policy.
    pub shiny: Shiny,
    /// Fixed level.
    pub level: u8,
    /// Fixed moves.
    pub moves: Moveset,
    /// Tera gem assignment.
    pub tera_type: GemType,
    /// Distribution index; zero for the base game tables.
    pub index: u8,
    /// Raid tier (star count).
    pub stars: u8,
    /// Roll weight and per-version cumulative floors.
    pub rate: WeightedSlot,
}

const XOROSHIRO: &[AlgorithmTag] = &[AlgorithmTag::Xoroshiro];

impl EncounterTera {
    /// Whether the template comes from a distribution rather than the base tables.
    #[must_use]
    pub const fn is_distribution(&self) -> bool {
        self.index != 0
    }
}

impl HasLevelRange for EncounterTera {
    fn level_min(&self) -> u8 {
        self.level
    }

    fn level_max(&self) -> u8 {
        self.level
    }
}

impl HasLocation for EncounterTera {
    fn location(&self) -> u16 {
        locations::TERA_CAVERN9
    }
}

impl HasMoveset for EncounterTera {
    fn moves(&self) -> Moveset {
        self.moves
    }
}

impl Encounter for EncounterTera {
    fn species(&self) -> u16 {
        self.species
    }

    fn form(&self) -> u8 {
        self.form
    }

    fn version(&self) -> GameVersion {
        GameVersion::Sv
    }

    fn shiny(&self) -> Shiny {
        self.shiny
    }

    fn ability(&self) -> AbilityPermission {
        self.ability
    }

    fn fixed_gender(&self) -> Option<Gender> {
        self.gender
    }

    fn name(&self) -> &'static str {
        "Tera Raid Encounter"
    }

    fn correlations(&self) -> &'static [AlgorithmTag] {
        XOROSHIRO
    }
}

/// Game a shadow encounter belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShadowGame {
    /// Pokémon Colosseum.
    Colosseum,
    /// Pokémon XD.
    Xd,
}

/// Shadow capture of the generation 3 console games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterShadow {
    /// Game the shadow appears in.
    pub game: ShadowGame,
    /// Shadow table id.
    pub id: u8,
    /// Initial shadow gauge value.
    pub gauge: i16,
    /// National dex species id.
    pub species: u16,
    /// Fixed level.
    pub level: u8,
    /// Met location id.
    pub location: u16,
    /// Fixed moves; empty when level-up moves apply.
    pub moves: Moveset,
    /// Fixed ball, [`Ball::None`] when unrestricted.
    pub fixed_ball: Ball,
    /// Alternative preceding parties; the specimen must satisfy one of them.
    pub party_prior: Vec<LockSequence>,
}

const CXD: &[AlgorithmTag] = &[AlgorithmTag::Cxd];
const CARD_XOR: &[AlgorithmTag] = &[AlgorithmTag::CardXor];

impl EncounterShadow {
    /// Whether the shadow was scanned from an e-Reader card (Japanese only).
    #[must_use]
    pub fn is_e_reader(&self) -> bool {
        self.game == ShadowGame::Colosseum && self.location == locations::E_READER_ROOM
    }

    /// Whether the game flags the capture as a fateful encounter.
    #[must_use]
    pub fn is_fateful(&self) -> bool {
        self.game == ShadowGame::Xd
    }

    /// Whether `met` is an acceptable met location for the shadow.
    ///
    /// XD lets the player re-battle shadows snagged back from Miror B.
    #[must_use]
    pub fn is_match_location(&self, met: u16) -> bool {
        met == self.location
            || (self.game == ShadowGame::Xd && locations::XD_REBATTLE.contains(&met))
    }
}

impl HasLevelRange for EncounterShadow {
    fn level_min(&self) -> u8 {
        self.level
    }

    fn level_max(&self) -> u8 {
        self.level
    }
}

impl HasLocation for EncounterShadow {
    fn location(&self) -> u16 {
        self.location
    }
}

impl HasMoveset for EncounterShadow {
    fn moves(&self) -> Moveset {
        self.moves
    }
}

impl Encounter for EncounterShadow {
    fn species(&self) -> u16 {
        self.species
    }

    fn form(&self) -> u8 {
        0
    }

    fn version(&self) -> GameVersion {
        match self.game {
            ShadowGame::Colosseum => GameVersion::Colosseum,
            ShadowGame::Xd => GameVersion::Xd,
        }
    }

    fn shiny(&self) -> Shiny {
        match self.game {
            ShadowGame::Colosseum => Shiny::Random,
            ShadowGame::Xd => Shiny::Never,
        }
    }

    fn ability(&self) -> AbilityPermission {
        AbilityPermission::Any12
    }

    fn fixed_ball(&self) -> Ball {
        self.fixed_ball
    }

    fn name(&self) -> &'static str {
        "Shadow Encounter"
    }

    fn correlations(&self) -> &'static [AlgorithmTag] {
        if self.is_e_reader() {
            CARD_XOR
        } else {
            CXD
        }
    }
}

/// In-game trade with a fixed original trainer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterTrade {
    /// National dex species id.
    pub species: u16,
    /// Form index.
    pub form: u8,
    /// Met level.
    pub level: u8,
    /// Level on receipt when it differs from the met level.
    pub current_level: Option<u8>,
    /// Fixed personality value; `None` for fateful trades with a random value.
    pub pid: Option<u32>,
    /// Met location id.
    pub location: u16,
    /// Egg location id.
    pub egg_location: u16,
    /// Game the trade happens in.
    pub version: GameVersion,
    /// Ball the specimen arrives in.
    pub fixed_ball: Ball,
    /// Original trainer id.
    pub tid: u16,
    /// Original trainer secret id.
    pub sid: u16,
    /// Original trainer gender code.
    pub ot_gender: u8,
    /// Fixed specimen gender.
    pub gender: Gender,
    /// Ability permission.
    pub ability: AbilityPermission,
    /// Fixed moves; empty when level-up moves apply.
    pub moves: Moveset,
    /// Original trainer name per language id; empty entries are unused languages.
    pub trainer_names: &'static [&'static str],
}

impl EncounterTrade {
    /// Whether the trade rolls a fresh personality value on receipt.
    #[must_use]
    pub const fn is_fateful(&self) -> bool {
        self.pid.is_none()
    }

    /// Packed trainer id.
    #[must_use]
    pub const fn id32(&self) -> u32 {
        self.tid as u32 | (self.sid as u32) << 16
    }

    /// Original trainer name for `language_id`, if the trade exists in that language.
    #[must_use]
    pub fn trainer_name(&self, language_id: u8) -> Option<&'static str> {
        self.trainer_names
            .get(usize::from(language_id))
            .copied()
            .filter(|name| !name.is_empty())
    }

    /// Whether `name` is the trainer name used in `language_id`.
    #[must_use]
    pub fn is_trainer_match(&self, name: &str, language_id: u8) -> bool {
        self.trainer_name(language_id) == Some(name)
    }
}

impl HasLevelRange for EncounterTrade {
    fn level_min(&self) -> u8 {
        self.level
    }

    fn level_max(&self) -> u8 {
        self.level
    }
}

impl HasLocation for EncounterTrade {
    fn location(&self) -> u16 {
        self.location
    }

    fn egg_location(&self) -> u16 {
        self.egg_location
    }
}

impl HasMoveset for EncounterTrade {
    fn moves(&self) -> Moveset {
        self.moves
    }
}

impl Encounter for EncounterTrade {
    fn species(&self) -> u16 {
        self.species
    }

    fn form(&self) -> u8 {
        self.form
    }

    fn version(&self) -> GameVersion {
        self.version
    }

    fn shiny(&self) -> Shiny {
        if self.is_fateful() {
            Shiny::Never
        } else {
            Shiny::FixedValue
        }
    }

    fn ability(&self) -> AbilityPermission {
        self.ability
    }

    fn fixed_ball(&self) -> Ball {
        self.fixed_ball
    }

    fn fixed_gender(&self) -> Option<Gender> {
        Some(self.gender)
    }

    fn name(&self) -> &'static str {
        "In-game Trade"
    }

    fn correlations(&self) -> &'static [AlgorithmTag] {
        &[]
    }
}

/// Scripted gift or stationary encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncounterGift {
    /// National dex species id.
    pub species: u16,
    /// Form index.
    pub form: u8,
    /// Fixed level.
    pub level: u8,
    /// Met location id.
    pub location: u16,
    /// Game or game group.
    pub version: GameVersion,
    /// Shininess policy.
    pub shiny: Shiny,
    /// Ability permission.
    pub ability: AbilityPermission,
    /// Number of guaranteed perfect individual stats.
    pub flawless_iv_count: u8,
    /// Fixed ball, [`Ball::None`] when unrestricted.
    pub fixed_ball: Ball,
    /// Fixed gender, `None` when random.
    pub gender: Option<Gender>,
    /// Fixed moves.
    pub moves: Moveset,
    /// Whether the game flags the gift as a fateful encounter.
    pub fateful: bool,
    /// Whether the personality value is produced by the console's LCRNG.
    pub correlated: bool,
}

const LCRNG_STATIC: &[AlgorithmTag] = &[AlgorithmTag::Method1];

impl HasLevelRange for EncounterGift {
    fn level_min(&self) -> u8 {
        self.level
    }

    fn level_max(&self) -> u8 {
        self.level
    }
}

impl HasLocation for EncounterGift {
    fn location(&self) -> u16 {
        self.location
    }
}

impl HasMoveset for EncounterGift {
    fn moves(&self) -> Moveset {
        self.moves
    }
}

impl Encounter for EncounterGift {
    fn species(&self) -> u16 {
        self.species
    }

    fn form(&self) -> u8 {
        self.form
    }

    fn version(&self) -> GameVersion {
        self.version
    }

    fn shiny(&self) -> Shiny {
        self.shiny
    }

    fn ability(&self) -> AbilityPermission {
        self.ability
    }

    fn fixed_ball(&self) -> Ball {
        self.fixed_ball
    }

    fn fixed_gender(&self) -> Option<Gender> {
        self.gender
    }

    fn name(&self) -> &'static str {
        "Static Encounter"
    }

    fn correlations(&self) -> &'static [AlgorithmTag] {
        if self.correlated && self.generation() <= 4 {
            LCRNG_STATIC
        } else {
            &[]
        }
    }
}

/// Egg bred by the trainer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncounterEgg {
    /// National dex species id of the hatchling.
    pub species: u16,
    /// Form index.
    pub form: u8,
    /// Game the egg was received in.
    pub version: GameVersion,
}

impl EncounterEgg {
    /// Level an egg is recorded at before it hatches.
    #[must_use]
    pub fn egg_met_level(&self) -> u8 {
        locations::egg_met_level(self.version.generation())
    }
}

impl HasLevelRange for EncounterEgg {
    fn level_min(&self) -> u8 {
        locations::egg_hatch_level(self.version.generation())
    }

    fn level_max(&self) -> u8 {
        self.level_min()
    }
}

impl HasLocation for EncounterEgg {
    fn location(&self) -> u16 {
        0
    }

    fn egg_location(&self) -> u16 {
        locations::daycare(self.version)
    }
}

impl HasMoveset for EncounterEgg {
    fn moves(&self) -> Moveset {
        Moveset::EMPTY
    }
}

impl Encounter for EncounterEgg {
    fn species(&self) -> u16 {
        self.species
    }

    fn form(&self) -> u8 {
        self.form
    }

    fn version(&self) -> GameVersion {
        self.version
    }

    fn shiny(&self) -> Shiny {
        Shiny::Random
    }

    fn ability(&self) -> AbilityPermission {
        AbilityPermission::Any12
    }

    fn name(&self) -> &'static str {
        "Egg"
    }

    fn correlations(&self) -> &'static [AlgorithmTag] {
        &[]
    }
}

/// Every way a specimen can legitimately originate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncounterTemplate {
    /// Wild encounter slot.
    Slot(EncounterSlot),
    /// Tiered raid.
    Tera(EncounterTera),
    /// Shadow capture from a scripted party.
    Shadow(EncounterShadow),
    /// In-game trade.
    Trade(EncounterTrade),
    /// Scripted gift.
    Gift(EncounterGift),
    /// Bred egg.
    Egg(EncounterEgg),
}

impl EncounterTemplate {
    /// Category-independent view of the template.
    #[must_use]
    pub fn as_encounter(&self) -> &dyn Encounter {
        match self {
            Self::Slot(slot) => slot,
            Self::Tera(tera) => tera,
            Self::Shadow(shadow) => shadow,
            Self::Trade(trade) => trade,
            Self::Gift(gift) => gift,
            Self::Egg(egg) => egg,
        }
    }

    /// Whether the template produces an egg.
    #[must_use]
    pub const fn is_egg(&self) -> bool {
        matches!(self, Self::Egg(_))
    }
}

impl HasLevelRange for EncounterTemplate {
    fn level_min(&self) -> u8 {
        self.as_encounter().level_min()
    }

    fn level_max(&self) -> u8 {
        self.as_encounter().level_max()
    }
}

impl HasLocation for EncounterTemplate {
    fn location(&self) -> u16 {
        self.as_encounter().location()
    }

    fn egg_location(&self) -> u16 {
        self.as_encounter().egg_location()
    }
}

impl HasMoveset for EncounterTemplate {
    fn moves(&self) -> Moveset {
        self.as_encounter().moves()
    }
}

impl Encounter for EncounterTemplate {
    fn species(&self) -> u16 {
        self.as_encounter().species()
    }

    fn form(&self) -> u8 {
        self.as_encounter().form()
    }

    fn version(&self) -> GameVersion {
        self.as_encounter().version()
    }

    fn shiny(&self) -> Shiny {
        self.as_encounter().shiny()
    }

    fn ability(&self) -> AbilityPermission {
        self.as_encounter().ability()
    }

    fn fixed_ball(&self) -> Ball {
        self.as_encounter().fixed_ball()
    }

    fn fixed_gender(&self) -> Option<Gender> {
        self.as_encounter().fixed_gender()
    }

    fn name(&self) -> &'static str {
        self.as_encounter().name()
    }

    fn correlations(&self) -> &'static [AlgorithmTag] {
        self.as_encounter().correlations()
    }
}
