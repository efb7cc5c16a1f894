//! Attribute derivation of the generation 9 raids.
//!
//! A raid is fully determined by a 32-bit seed fed to [`Xoroshiro128Plus`].
//! Calls are consumed in this order: encryption constant, a fake trainer id used
//! for the shiny roll, personality value, perfect stat picks, remaining stats,
//! ability, gender, nature.

use pidlab_core::{
    is_shiny, shiny_xor, AbilityPermission, AbilitySlot, GemType, Gender, GenderRatio, IvSet,
    Nature, Shiny, IV_MAX, NATURE_COUNT,
};

use crate::{Xoroshiro128Plus, XOROSHIRO_CONST};

const GENERATION: u8 = 9;
const ANTI_SHINY: u32 = 0x1000_0000;
const UNSET: u8 = u8::MAX;

/// Template parameters a raid derivation depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gen9Params {
    /// Number of stats forced to the maximum.
    pub flawless_ivs: u8,
    /// Shininess policy.
    pub shiny: Shiny,
    /// Ability permission.
    pub ability: AbilityPermission,
    /// Gender distribution; fixed distributions skip the gender roll.
    pub gender_ratio: GenderRatio,
    /// Packed id of the trainer receiving the specimen.
    pub id32: u32,
}

/// Attributes a raid seed yields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gen9Attributes {
    /// Seed the attributes were derived from.
    pub seed: u32,
    /// Encryption constant.
    pub encryption_constant: u32,
    /// Personality value after the shiny adjustment.
    pub pid: u32,
    /// Individual stats.
    pub ivs: IvSet,
    /// Ability slot.
    pub ability: AbilitySlot,
    /// Gender.
    pub gender: Gender,
    /// Nature.
    pub nature: Nature,
}

/// Derives every attribute a raid with `params` yields from `seed`.
#[must_use]
pub fn generate(seed: u32, params: &Gen9Params) -> Gen9Attributes {
    let mut rng = Xoroshiro128Plus::new(u64::from(seed));
    let encryption_constant = rng.next_u32();
    let fake_id = rng.next_u32();
    let pid = adjust_pid(rng.next_u32(), fake_id, params);

    let mut values = [UNSET; 6];
    let mut placed = 0;
    while placed < params.flawless_ivs.min(6) {
        let index = rng.next_int(6) as usize;
        if values[index] == UNSET {
            values[index] = IV_MAX;
            placed += 1;
        }
    }
    for value in values.iter_mut().filter(|value| **value == UNSET) {
        *value = rng.next_int(32) as u8;
    }

    let ability = match params.ability {
        AbilityPermission::Any12H => AbilitySlot::from_index(rng.next_int(3) as u32),
        AbilityPermission::Any12 => AbilitySlot::from_index(rng.next_int(2) as u32),
        fixed => fixed.single_value().unwrap_or(AbilitySlot::First),
    };

    let gender = match params.gender_ratio.fixed_gender() {
        Some(fixed) => fixed,
        None => params
            .gender_ratio
            .gender_from_roll(rng.next_int(100) as u8 + 1),
    };

    let nature = Nature::from_pid(rng.next_int(u64::from(NATURE_COUNT)) as u32);

    Gen9Attributes {
        seed,
        encryption_constant,
        pid,
        ivs: IvSet::new(values),
        ability,
        gender,
        nature,
    }
}

fn adjust_pid(pid: u32, fake_id: u32, params: &Gen9Params) -> u32 {
    let shiny = is_shiny(pid, params.id32, GENERATION);
    let fake_xor = shiny_xor(pid, fake_id);
    match params.shiny {
        Shiny::Random | Shiny::FixedValue => {
            if fake_xor < 16 {
                force_shiny(pid, params.id32, fake_xor)
            } else if shiny {
                pid ^ ANTI_SHINY
            } else {
                pid
            }
        }
        Shiny::Never if shiny => pid ^ ANTI_SHINY,
        Shiny::Never => pid,
        Shiny::Always if shiny => pid,
        Shiny::Always => force_shiny(pid, params.id32, fake_xor),
    }
}

/// Rewrites the upper half so the value is shiny for `id32`, as a square
/// (`xor == 0`) or star.
fn force_shiny(pid: u32, id32: u32, xor: u32) -> u32 {
    let tsv = (id32 >> 16) ^ (id32 & 0xFFFF);
    let low = pid & 0xFFFF;
    let kind = u32::from(xor != 0);
    (tsv ^ low ^ kind) << 16 | low
}

/// Raid seed implied by an encryption constant.
///
/// The first draw of the generator is `seed + XOROSHIRO_CONST` truncated to 32 bits.
#[must_use]
pub const fn seed_from_ec(encryption_constant: u32) -> u32 {
    encryption_constant.wrapping_sub(XOROSHIRO_CONST as u32)
}

/// Tera type a raid seed assigns for `gem`; `default_type` is the species' primary type.
#[must_use]
pub fn tera_type(seed: u32, gem: GemType, default_type: u8) -> u8 {
    if gem.is_random() {
        let mut rng = Xoroshiro128Plus::new(u64::from(seed));
        return rng.next_int(u64::from(GemType::TYPE_COUNT)) as u8;
    }
    gem.fixed_type().unwrap_or(default_type)
}
