use serde::{Deserialize, Serialize};

/// Number of distinct natures.
pub const NATURE_COUNT: u8 = 25;

/// Temperament of a specimen, derived from the personality value in older games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Nature(u8);

impl Nature {
    /// Creates a nature from its index, rejecting values outside `0..25`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < NATURE_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Nature implied by a personality value (`pid % 25`).
    #[must_use]
    pub const fn from_pid(pid: u32) -> Self {
        Self((pid % NATURE_COUNT as u32) as u8)
    }

    /// Index of the nature.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Gender of a specimen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// No gender.
    Genderless,
}

impl Gender {
    /// Decodes a signed template gender code where `-1` means random.
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(Self::Male),
            1 => Some(Self::Female),
            2 => Some(Self::Genderless),
            _ => None,
        }
    }

    /// Numeric code stored in specimen records.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Male => 0,
            Self::Female => 1,
            Self::Genderless => 2,
        }
    }
}

/// Species gender distribution expressed as the personality-byte threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenderRatio(u8);

impl GenderRatio {
    /// Every specimen is male.
    pub const MALE_ONLY: Self = Self(0);
    /// One female in eight.
    pub const MOSTLY_MALE: Self = Self(31);
    /// One female in four.
    pub const QUARTER_FEMALE: Self = Self(63);
    /// Even split.
    pub const EVEN: Self = Self(127);
    /// Three females in four.
    pub const MOSTLY_FEMALE: Self = Self(191);
    /// Every specimen is female.
    pub const FEMALE_ONLY: Self = Self(254);
    /// Species has no gender.
    pub const GENDERLESS: Self = Self(255);

    /// Distribution in which every specimen has `gender`.
    #[must_use]
    pub const fn single(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self::MALE_ONLY,
            Gender::Female => Self::FEMALE_ONLY,
            Gender::Genderless => Self::GENDERLESS,
        }
    }

    /// Wraps a raw ratio byte.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw ratio byte.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Gender every specimen of the species shares, if any.
    #[must_use]
    pub const fn fixed_gender(self) -> Option<Gender> {
        match self.0 {
            0 => Some(Gender::Male),
            254 => Some(Gender::Female),
            255 => Some(Gender::Genderless),
            _ => None,
        }
    }

    /// Gender implied by the low byte of a personality value.
    #[must_use]
    pub const fn gender_from_pid(self, pid: u32) -> Gender {
        if let Some(fixed) = self.fixed_gender() {
            return fixed;
        }
        if ((pid & 0xFF) as u8) < self.0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    /// Percentage threshold used by games that roll gender out of 100.
    #[must_use]
    pub const fn percent_threshold(self) -> u8 {
        match self.0 {
            31 => 12,
            63 => 25,
            127 => 50,
            191 => 75,
            225 => 89,
            other => ((other as u16 * 100) / 256) as u8,
        }
    }

    /// Gender implied by a `1..=100` roll.
    #[must_use]
    pub const fn gender_from_roll(self, roll: u8) -> Gender {
        if let Some(fixed) = self.fixed_gender() {
            return fixed;
        }
        if roll < self.percent_threshold() {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    /// Whether `gender` can occur for the species at all.
    #[must_use]
    pub const fn permits(self, gender: Gender) -> bool {
        match self.fixed_gender() {
            Some(fixed) => fixed as u8 == gender as u8,
            None => !matches!(gender, Gender::Genderless),
        }
    }
}

/// Ability slot a specimen uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilitySlot {
    /// First regular ability.
    First,
    /// Second regular ability.
    Second,
    /// Hidden ability.
    Hidden,
}

impl AbilitySlot {
    /// Slot selected by a zero-based index.
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        match index {
            0 => Self::First,
            1 => Self::Second,
            _ => Self::Hidden,
        }
    }

    /// Ability number stored in records (1, 2 or 4).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Hidden => 4,
        }
    }
}

/// Which ability slots a template can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityPermission {
    /// Either regular ability.
    Any12,
    /// Either regular ability or the hidden ability.
    Any12H,
    /// Only the first ability.
    OnlyFirst,
    /// Only the second ability.
    OnlySecond,
    /// Only the hidden ability.
    OnlyHidden,
}

impl AbilityPermission {
    /// Decodes the table code `0..=4`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Any12),
            1 => Some(Self::Any12H),
            2 => Some(Self::OnlyFirst),
            3 => Some(Self::OnlySecond),
            4 => Some(Self::OnlyHidden),
            _ => None,
        }
    }

    /// Slot the permission pins, if it allows exactly one.
    #[must_use]
    pub const fn single_value(self) -> Option<AbilitySlot> {
        match self {
            Self::OnlyFirst => Some(AbilitySlot::First),
            Self::OnlySecond => Some(AbilitySlot::Second),
            Self::OnlyHidden => Some(AbilitySlot::Hidden),
            Self::Any12 | Self::Any12H => None,
        }
    }

    /// Whether the permission can yield `slot`.
    #[must_use]
    pub const fn allows(self, slot: AbilitySlot) -> bool {
        match self {
            Self::Any12 => !matches!(slot, AbilitySlot::Hidden),
            Self::Any12H => true,
            Self::OnlyFirst => matches!(slot, AbilitySlot::First),
            Self::OnlySecond => matches!(slot, AbilitySlot::Second),
            Self::OnlyHidden => matches!(slot, AbilitySlot::Hidden),
        }
    }
}

/// Shininess policy of a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shiny {
    /// Whatever the personality value yields.
    Random,
    /// Never shiny.
    Never,
    /// Always shiny.
    Always,
    /// Personality value is fixed by the template.
    FixedValue,
}

impl Shiny {
    /// Decodes the table code `0..=2`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Random),
            1 => Some(Self::Never),
            2 => Some(Self::Always),
            _ => None,
        }
    }

    /// Whether a specimen with the given shininess satisfies the policy.
    #[must_use]
    pub const fn is_valid(self, shiny: bool) -> bool {
        match self {
            Self::Never => !shiny,
            Self::Always => shiny,
            Self::Random | Self::FixedValue => true,
        }
    }
}

/// XOR of the trainer's ids with both halves of a personality value.
#[must_use]
pub const fn shiny_xor(pid: u32, id32: u32) -> u32 {
    let tsv = (id32 >> 16) ^ (id32 & 0xFFFF);
    (pid >> 16) ^ (pid & 0xFFFF) ^ tsv
}

/// Exclusive upper bound of [`shiny_xor`] for a shiny specimen.
#[must_use]
pub const fn shiny_threshold(generation: u8) -> u32 {
    if generation <= 5 {
        8
    } else {
        16
    }
}

/// Whether `pid` is shiny for the trainer `id32` in `generation`.
#[must_use]
pub const fn is_shiny(pid: u32, id32: u32, generation: u8) -> bool {
    shiny_xor(pid, id32) < shiny_threshold(generation)
}

/// Maximum value of a single individual stat.
pub const IV_MAX: u8 = 31;

/// Six individual stat values in HP, Atk, Def, SpA, SpD, Spe order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IvSet([u8; 6]);

impl IvSet {
    /// Every stat zero.
    pub const ZERO: Self = Self([0; 6]);

    /// Creates a set, clamping values to the five-bit range.
    #[must_use]
    pub const fn new(values: [u8; 6]) -> Self {
        let mut clamped = values;
        let mut index = 0;
        while index < 6 {
            clamped[index] &= IV_MAX;
            index += 1;
        }
        Self(clamped)
    }

    /// Unpacks the two 15-bit words used by the older games.
    ///
    /// The first word holds HP/Atk/Def, the second Spe/SpA/SpD.
    #[must_use]
    pub const fn from_words(first: u16, second: u16) -> Self {
        let hp = (first & 0x1F) as u8;
        let atk = ((first >> 5) & 0x1F) as u8;
        let def = ((first >> 10) & 0x1F) as u8;
        let spe = (second & 0x1F) as u8;
        let spa = ((second >> 5) & 0x1F) as u8;
        let spd = ((second >> 10) & 0x1F) as u8;
        Self([hp, atk, def, spa, spd, spe])
    }

    /// Packs the set into the two 15-bit words.
    #[must_use]
    pub const fn to_words(self) -> (u16, u16) {
        let [hp, atk, def, spa, spd, spe] = self.0;
        let first = hp as u16 | (atk as u16) << 5 | (def as u16) << 10;
        let second = spe as u16 | (spa as u16) << 5 | (spd as u16) << 10;
        (first, second)
    }

    /// Values as an array.
    #[must_use]
    pub const fn values(self) -> [u8; 6] {
        self.0
    }

    /// Number of stats at the maximum value.
    #[must_use]
    pub fn flawless_count(self) -> u8 {
        self.0.iter().filter(|value| **value == IV_MAX).count() as u8
    }
}

/// Four move ids; zero marks an empty slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Moveset([u16; 4]);

impl Moveset {
    /// No moves.
    pub const EMPTY: Self = Self([0; 4]);

    /// Creates a moveset from four ids.
    #[must_use]
    pub const fn new(moves: [u16; 4]) -> Self {
        Self(moves)
    }

    /// Move ids.
    #[must_use]
    pub const fn moves(self) -> [u16; 4] {
        self.0
    }

    /// Whether any slot is populated.
    #[must_use]
    pub fn has_moves(self) -> bool {
        self.0.iter().any(|id| *id != 0)
    }
}

/// Capture ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ball {
    /// Template does not fix a ball.
    None,
    /// Master Ball.
    Master,
    /// Ultra Ball.
    Ultra,
    /// Great Ball.
    Great,
    /// Poké Ball.
    Poke,
    /// Safari Ball.
    Safari,
    /// Premier Ball.
    Premier,
    /// Cherish Ball.
    Cherish,
}

impl Ball {
    /// Numeric id stored in specimen records.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Master => 1,
            Self::Ultra => 2,
            Self::Great => 3,
            Self::Poke => 4,
            Self::Safari => 5,
            Self::Premier => 12,
            Self::Cherish => 16,
        }
    }
}

/// Tera gem assignment of a raid template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GemType(u8);

impl GemType {
    /// Number of elemental types a random gem can land on.
    pub const TYPE_COUNT: u8 = 18;

    /// Wraps the table code: `0` default, `1` random, `n >= 2` fixed type `n - 2`.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Raw table code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// The species keeps one of its own types.
    #[must_use]
    pub const fn is_default(self) -> bool {
        self.0 == 0
    }

    /// The type is rolled from the raid seed.
    #[must_use]
    pub const fn is_random(self) -> bool {
        self.0 == 1
    }

    /// Fixed elemental type, if the template pins one.
    #[must_use]
    pub const fn fixed_type(self) -> Option<u8> {
        if self.0 >= 2 {
            Some(self.0 - 2)
        } else {
            None
        }
    }
}
