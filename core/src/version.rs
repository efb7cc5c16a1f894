use serde::{Deserialize, Serialize};

/// Game a specimen originated in, or a group of sibling games a template belongs to.
///
/// Concrete games carry the numeric id stored inside specimen records. Aggregate
/// values never appear on a specimen; they describe templates shared by sibling
/// releases and are resolved through [`GameVersion::contains`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameVersion {
    /// Pokémon Sapphire.
    Sapphire,
    /// Pokémon Ruby.
    Ruby,
    /// Pokémon Emerald.
    Emerald,
    /// Pokémon FireRed.
    FireRed,
    /// Pokémon LeafGreen.
    LeafGreen,
    /// Shared game id stored by both Colosseum and XD.
    Cxd,
    /// Pokémon HeartGold.
    HeartGold,
    /// Pokémon SoulSilver.
    SoulSilver,
    /// Pokémon Diamond.
    Diamond,
    /// Pokémon Pearl.
    Pearl,
    /// Pokémon Platinum.
    Platinum,
    /// Pokémon White.
    White,
    /// Pokémon Black.
    Black,
    /// Pokémon White 2.
    White2,
    /// Pokémon Black 2.
    Black2,
    /// Pokémon X.
    X,
    /// Pokémon Y.
    Y,
    /// Pokémon Alpha Sapphire.
    AlphaSapphire,
    /// Pokémon Omega Ruby.
    OmegaRuby,
    /// Pokémon Sun.
    Sun,
    /// Pokémon Moon.
    Moon,
    /// Pokémon Ultra Sun.
    UltraSun,
    /// Pokémon Ultra Moon.
    UltraMoon,
    /// Pokémon Sword.
    Sword,
    /// Pokémon Shield.
    Shield,
    /// Pokémon Brilliant Diamond.
    BrilliantDiamond,
    /// Pokémon Shining Pearl.
    ShiningPearl,
    /// Pokémon Scarlet.
    Scarlet,
    /// Pokémon Violet.
    Violet,
    /// Ruby and Sapphire.
    Rs,
    /// FireRed and LeafGreen.
    Frlg,
    /// Pokémon Colosseum templates.
    Colosseum,
    /// Pokémon XD templates.
    Xd,
    /// Diamond and Pearl.
    Dp,
    /// HeartGold and SoulSilver.
    HgSs,
    /// Black and White.
    Bw,
    /// Black 2 and White 2.
    B2w2,
    /// X and Y.
    Xy,
    /// Omega Ruby and Alpha Sapphire.
    OrAs,
    /// Sun and Moon.
    Sm,
    /// Ultra Sun and Ultra Moon.
    Usum,
    /// Sword and Shield.
    SwSh,
    /// Brilliant Diamond and Shining Pearl.
    Bdsp,
    /// Scarlet and Violet.
    Sv,
}

const CONCRETE: [(GameVersion, u8); 29] = [
    (GameVersion::Sapphire, 1),
    (GameVersion::Ruby, 2),
    (GameVersion::Emerald, 3),
    (GameVersion::FireRed, 4),
    (GameVersion::LeafGreen, 5),
    (GameVersion::HeartGold, 7),
    (GameVersion::SoulSilver, 8),
    (GameVersion::Diamond, 10),
    (GameVersion::Pearl, 11),
    (GameVersion::Platinum, 12),
    (GameVersion::Cxd, 15),
    (GameVersion::White, 20),
    (GameVersion::Black, 21),
    (GameVersion::White2, 22),
    (GameVersion::Black2, 23),
    (GameVersion::X, 24),
    (GameVersion::Y, 25),
    (GameVersion::AlphaSapphire, 26),
    (GameVersion::OmegaRuby, 27),
    (GameVersion::Sun, 30),
    (GameVersion::Moon, 31),
    (GameVersion::UltraSun, 32),
    (GameVersion::UltraMoon, 33),
    (GameVersion::Sword, 44),
    (GameVersion::Shield, 45),
    (GameVersion::BrilliantDiamond, 48),
    (GameVersion::ShiningPearl, 49),
    (GameVersion::Scarlet, 50),
    (GameVersion::Violet, 51),
];

impl GameVersion {
    /// Resolves a concrete game from the id stored in specimen records.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        CONCRETE
            .iter()
            .find(|(_, value)| *value == id)
            .map(|(version, _)| *version)
    }

    /// Numeric id of a concrete game, `None` for aggregate groups.
    #[must_use]
    pub fn id(self) -> Option<u8> {
        CONCRETE
            .iter()
            .find(|(version, _)| *version == self)
            .map(|(_, value)| *value)
    }

    /// Concrete games covered by this value; a concrete game covers itself.
    #[must_use]
    pub fn members(self) -> &'static [GameVersion] {
        use GameVersion::*;
        match self {
            Rs => &[Ruby, Sapphire],
            Frlg => &[FireRed, LeafGreen],
            Colosseum | Xd => &[Cxd],
            Dp => &[Diamond, Pearl],
            HgSs => &[HeartGold, SoulSilver],
            Bw => &[Black, White],
            B2w2 => &[Black2, White2],
            Xy => &[X, Y],
            OrAs => &[OmegaRuby, AlphaSapphire],
            Sm => &[Sun, Moon],
            Usum => &[UltraSun, UltraMoon],
            SwSh => &[Sword, Shield],
            Bdsp => &[BrilliantDiamond, ShiningPearl],
            Sv => &[Scarlet, Violet],
            Sapphire => &[Sapphire],
            Ruby => &[Ruby],
            Emerald => &[Emerald],
            FireRed => &[FireRed],
            LeafGreen => &[LeafGreen],
            Cxd => &[Cxd],
            HeartGold => &[HeartGold],
            SoulSilver => &[SoulSilver],
            Diamond => &[Diamond],
            Pearl => &[Pearl],
            Platinum => &[Platinum],
            White => &[White],
            Black => &[Black],
            White2 => &[White2],
            Black2 => &[Black2],
            X => &[X],
            Y => &[Y],
            AlphaSapphire => &[AlphaSapphire],
            OmegaRuby => &[OmegaRuby],
            Sun => &[Sun],
            Moon => &[Moon],
            UltraSun => &[UltraSun],
            UltraMoon => &[UltraMoon],
            Sword => &[Sword],
            Shield => &[Shield],
            BrilliantDiamond => &[BrilliantDiamond],
            ShiningPearl => &[ShiningPearl],
            Scarlet => &[Scarlet],
            Violet => &[Violet],
        }
    }

    /// Reports whether `other` is this game or one of its group members.
    #[must_use]
    pub fn contains(self, other: GameVersion) -> bool {
        self == other || self.members().contains(&other)
    }

    /// Whether the value is an aggregate group rather than a concrete game.
    #[must_use]
    pub fn is_group(self) -> bool {
        self.id().is_none()
    }

    /// Picks the concrete game a fresh specimen should record.
    ///
    /// The trainer's own game wins when it belongs to the template's group,
    /// otherwise the group's first member is used.
    #[must_use]
    pub fn compatible_with(self, trainer: GameVersion) -> GameVersion {
        if self.contains(trainer) {
            return trainer;
        }
        self.members().first().copied().unwrap_or(self)
    }

    /// Generation the game belongs to.
    #[must_use]
    pub fn generation(self) -> u8 {
        use GameVersion::*;
        match self {
            Sapphire | Ruby | Emerald | FireRed | LeafGreen | Cxd | Rs | Frlg | Colosseum
            | Xd => 3,
            HeartGold | SoulSilver | Diamond | Pearl | Platinum | Dp | HgSs => 4,
            White | Black | White2 | Black2 | Bw | B2w2 => 5,
            X | Y | AlphaSapphire | OmegaRuby | Xy | OrAs => 6,
            Sun | Moon | UltraSun | UltraMoon | Sm | Usum => 7,
            Sword | Shield | BrilliantDiamond | ShiningPearl | SwSh | Bdsp => 8,
            Scarlet | Violet | Sv => 9,
        }
    }

    /// Whether the game is one of the generation 8 Sinnoh remakes.
    #[must_use]
    pub fn is_bdsp(self) -> bool {
        GameVersion::Bdsp.contains(self)
    }
}

/// Language a specimen was obtained in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Japanese.
    Japanese,
    /// English.
    English,
    /// French.
    French,
    /// Italian.
    Italian,
    /// German.
    German,
    /// Spanish.
    Spanish,
    /// Korean.
    Korean,
    /// Simplified Chinese.
    ChineseSimplified,
    /// Traditional Chinese.
    ChineseTraditional,
}

impl Language {
    /// Numeric id stored in specimen records.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Japanese => 1,
            Self::English => 2,
            Self::French => 3,
            Self::Italian => 4,
            Self::German => 5,
            Self::Spanish => 7,
            Self::Korean => 8,
            Self::ChineseSimplified => 9,
            Self::ChineseTraditional => 10,
        }
    }

    /// Returns the language a game of `generation` can actually store.
    #[must_use]
    pub const fn safe_for_generation(self, generation: u8) -> Self {
        match self {
            Self::Korean if generation < 4 => Self::English,
            Self::ChineseSimplified | Self::ChineseTraditional if generation < 7 => Self::English,
            other => other,
        }
    }
}
