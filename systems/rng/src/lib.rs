#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic random number generators reproduced from the console games.
//!
//! Every generator here is a pure function of its seed. [`Lcrng`] and [`XdRng`]
//! are 32-bit linear congruential generators stepping through `u32` states,
//! [`Xoroshiro128Plus`] is the 128-bit generator of the generation 9 games. The
//! [`derive_block`] entry point lays out the personality value and individual
//! stats a 32-bit algorithm produces from a seed, and [`gen9::generate`] does
//! the same for a generation 9 raid. Novel seeds come from the [`entropy`]
//! module; nothing else in the crate touches it.

pub mod entropy;
pub mod gen9;
mod xoroshiro;

use pidlab_core::{AlgorithmTag, IvSet};

pub use entropy::{
    global_entropy, install_global_entropy, EntropySource, SeededEntropy, SharedEntropy,
};
pub use xoroshiro::{Xoroshiro128Plus, XOROSHIRO_CONST};

/// A 32-bit linear congruential generator with a known inverse.
pub trait LinearCongruential {
    /// Forward multiplier.
    const MULT: u32;
    /// Forward increment.
    const ADD: u32;
    /// Multiplier of the inverse step.
    const RMULT: u32;
    /// Increment of the inverse step.
    const RADD: u32;

    /// State following `seed`.
    #[must_use]
    fn next(seed: u32) -> u32 {
        seed.wrapping_mul(Self::MULT).wrapping_add(Self::ADD)
    }

    /// State preceding `seed`.
    #[must_use]
    fn prev(seed: u32) -> u32 {
        seed.wrapping_mul(Self::RMULT).wrapping_add(Self::RADD)
    }

    /// State `count` steps after `seed`.
    #[must_use]
    fn advance(seed: u32, count: u32) -> u32 {
        (0..count).fold(seed, |state, _| Self::next(state))
    }

    /// State `count` steps before `seed`.
    #[must_use]
    fn rewind(seed: u32, count: u32) -> u32 {
        (0..count).fold(seed, |state, _| Self::prev(state))
    }

    /// Advances once, returning the new state and its upper 16 bits.
    #[must_use]
    fn step(seed: u32) -> (u32, u16) {
        let state = Self::next(seed);
        (state, (state >> 16) as u16)
    }
}

/// LCRNG of the handheld generation 3 and 4 games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lcrng;

impl LinearCongruential for Lcrng {
    const MULT: u32 = 0x41C6_4E6D;
    const ADD: u32 = 0x0000_6073;
    const RMULT: u32 = 0xEEB9_EB65;
    const RADD: u32 = 0x0A35_61A1;
}

/// LCRNG of Colosseum and XD.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XdRng;

impl LinearCongruential for XdRng {
    const MULT: u32 = 0x0003_43FD;
    const ADD: u32 = 0x0026_9EC3;
    const RMULT: u32 = 0xB9B3_3155;
    const RADD: u32 = 0xA170_F641;
}

/// Personality value and individual stats laid out by a 32-bit algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PidBlock {
    /// Seed the block was derived from.
    pub seed: u32,
    /// Personality value.
    pub pid: u32,
    /// Individual stats.
    pub ivs: IvSet,
    /// Ability bit rolled separately from the personality value, when the
    /// algorithm rolls one.
    pub ability_bit: Option<u8>,
    /// State after the last call the block consumed.
    pub end: u32,
}

fn iv_word(output: u16) -> u16 {
    output & 0x7FFF
}

/// Derives the block produced by `tag` from `seed`.
///
/// Returns `None` for [`AlgorithmTag::Xoroshiro`], whose output depends on
/// template parameters; use [`gen9::generate`] instead.
#[must_use]
pub fn derive_block(tag: AlgorithmTag, seed: u32) -> Option<PidBlock> {
    match tag {
        AlgorithmTag::Method1 => Some(lcrng_block(seed, 0, 0)),
        AlgorithmTag::Method2 => Some(lcrng_block(seed, 1, 0)),
        AlgorithmTag::Method4 => Some(lcrng_block(seed, 0, 1)),
        AlgorithmTag::Cxd => Some(cxd_block(seed)),
        AlgorithmTag::CardXor => Some(card_xor_block(seed)),
        AlgorithmTag::Xoroshiro => None,
    }
}

/// LCRNG layout: pid low, pid high, `gap_pid` skips, iv1, `gap_iv` skips, iv2.
fn lcrng_block(seed: u32, gap_pid: u32, gap_iv: u32) -> PidBlock {
    let (state, low) = Lcrng::step(seed);
    let (state, high) = Lcrng::step(state);
    let state = Lcrng::advance(state, gap_pid);
    let (state, first) = Lcrng::step(state);
    let state = Lcrng::advance(state, gap_iv);
    let (end, second) = Lcrng::step(state);
    PidBlock {
        seed,
        pid: u32::from(high) << 16 | u32::from(low),
        ivs: IvSet::from_words(iv_word(first), iv_word(second)),
        ability_bit: None,
        end,
    }
}

/// Colosseum/XD layout: iv1, iv2, ability bit, pid high, pid low.
#[must_use]
pub fn cxd_block(seed: u32) -> PidBlock {
    let (state, first) = XdRng::step(seed);
    let (state, second) = XdRng::step(state);
    let (state, ability) = XdRng::step(state);
    let (state, high) = XdRng::step(state);
    let (end, low) = XdRng::step(state);
    PidBlock {
        seed,
        pid: u32::from(high) << 16 | u32::from(low),
        ivs: IvSet::from_words(iv_word(first), iv_word(second)),
        ability_bit: Some((ability & 1) as u8),
        end,
    }
}

/// e-Card layout: pid high, then pid low scrambled by the high half. No stats are rolled.
#[must_use]
pub fn card_xor_block(seed: u32) -> PidBlock {
    let (state, high) = XdRng::step(seed);
    let (end, low) = XdRng::step(state);
    let pid = u32::from(high) << 16 | u32::from(low ^ high);
    PidBlock {
        seed,
        pid,
        ivs: IvSet::ZERO,
        ability_bit: Some((pid & 1) as u8),
        end,
    }
}

/// Whether a 32-bit tag steps with [`XdRng`] rather than [`Lcrng`].
#[must_use]
pub const fn is_xd_family(tag: AlgorithmTag) -> bool {
    matches!(tag, AlgorithmTag::Cxd | AlgorithmTag::CardXor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_constants_invert_forward_steps() {
        for seed in [0, 1, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(Lcrng::prev(Lcrng::next(seed)), seed);
            assert_eq!(XdRng::prev(XdRng::next(seed)), seed);
        }
    }

    #[test]
    fn lcrng_from_zero_matches_known_sequence() {
        assert_eq!(Lcrng::next(0), 0x0000_6073);
        assert_eq!(Lcrng::next(0x0000_6073), 0xE97E_7B6A);
    }

    #[test]
    fn method_gaps_shift_the_second_iv_word() {
        let seed = 0x1234_5678;
        let one = lcrng_block(seed, 0, 0);
        let four = lcrng_block(seed, 0, 1);
        assert_eq!(one.pid, four.pid);
        assert_eq!(one.ivs.to_words().0, four.ivs.to_words().0);
        assert_eq!(four.end, Lcrng::advance(seed, 5));
    }

    #[test]
    fn card_xor_block_has_no_stats() {
        let block = card_xor_block(0x0BAD_F00D);
        assert_eq!(block.ivs, IvSet::ZERO);
        assert_eq!(block.end, XdRng::advance(0x0BAD_F00D, 2));
    }
}
