//! Location ids and egg constants shared across generations.

use crate::GameVersion;

/// Link trade egg location in generation 4.
pub const LINK_TRADE4: u16 = 2002;
/// Link trade egg location in generation 5.
pub const LINK_TRADE5: u16 = 30003;
/// Link trade egg location from generation 6 onward.
pub const LINK_TRADE6: u16 = 30002;
/// Link trade location used for eggs received from an NPC.
pub const LINK_TRADE6_NPC: u16 = 30001;
/// "No location" value of the generation 8 Sinnoh remakes.
pub const DEFAULT_8B_NONE: u16 = 0xFFFF;
/// Pal Park, where generation 3 specimens arrive in generation 4.
pub const TRANSFER3: u16 = 0x37;
/// Poké Transfer, where generation 4 specimens arrive in generation 5.
pub const TRANSFER4: u16 = 30001;
/// Hatch location recorded by Ruby, Sapphire and Emerald.
pub const HATCH_LOCATION_RSE: u16 = 32;
/// Hatch location recorded by FireRed and LeafGreen.
pub const HATCH_LOCATION_FRLG: u16 = 146;
/// Met location of every tiered raid.
pub const TERA_CAVERN9: u16 = 30024;
/// Day-Care egg location in generation 4.
pub const DAYCARE4: u16 = 2000;
/// Day-Care egg location from generation 5 onward.
pub const DAYCARE5: u16 = 60002;
/// Day-Care egg location of the generation 8 Sinnoh remakes.
pub const DAYCARE8B: u16 = 60010;
/// Picnic egg location of generation 9.
pub const PICNIC9: u16 = 30023;
/// Pokéathlon ranch met location of fateful ranch trades.
pub const RANCH_GIFT: u16 = 3000;
/// Colosseum card e-Room, where e-Reader shadows are recorded.
pub const E_READER_ROOM: u16 = 128;
/// XD locations where Miror B lets the player re-battle snagged shadows.
pub const XD_REBATTLE: [u16; 5] = [59, 90, 91, 92, 113];

/// Level an unhatched egg is recorded at.
#[must_use]
pub const fn egg_met_level(generation: u8) -> u8 {
    if generation <= 4 {
        0
    } else {
        1
    }
}

/// Level a hatchling emerges at.
#[must_use]
pub const fn egg_hatch_level(generation: u8) -> u8 {
    if generation == 3 {
        5
    } else {
        1
    }
}

/// Egg location recorded for eggs received from the breeding center.
#[must_use]
pub fn daycare(version: GameVersion) -> u16 {
    if version.is_bdsp() {
        return DAYCARE8B;
    }
    match version.generation() {
        3 => 0,
        4 => DAYCARE4,
        9 => PICNIC9,
        _ => DAYCARE5,
    }
}

/// Link trade location for eggs of `version`.
#[must_use]
pub fn link_trade(version: GameVersion) -> u16 {
    if version.is_bdsp() {
        return LINK_TRADE6_NPC;
    }
    match version.generation() {
        4 => LINK_TRADE4,
        5 => LINK_TRADE5,
        _ => LINK_TRADE6,
    }
}

/// Hatch location a generation 3 egg records, both before and after hatching.
#[must_use]
pub fn hatch_location3(version: GameVersion) -> u16 {
    if GameVersion::Frlg.contains(version) {
        HATCH_LOCATION_FRLG
    } else {
        HATCH_LOCATION_RSE
    }
}

/// Met location of an unhatched egg.
#[must_use]
pub fn unhatched_met(version: GameVersion) -> u16 {
    if version.is_bdsp() {
        DEFAULT_8B_NONE
    } else {
        0
    }
}
