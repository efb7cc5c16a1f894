use pidlab_core::{AbilityPermission, AlgorithmTag, GenderRatio, Shiny};
use pidlab_system_rng::{
    derive_block, gen9, EntropySource, Lcrng, LinearCongruential, SeededEntropy, XdRng,
    XOROSHIRO_CONST,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn advance_and_rewind_cancel(seed in any::<u32>(), count in 0u32..64) {
        prop_assert_eq!(Lcrng::rewind(Lcrng::advance(seed, count), count), seed);
        prop_assert_eq!(XdRng::rewind(XdRng::advance(seed, count), count), seed);
    }

    #[test]
    fn derived_blocks_are_pure(seed in any::<u32>()) {
        for tag in [
            AlgorithmTag::Method1,
            AlgorithmTag::Method2,
            AlgorithmTag::Method4,
            AlgorithmTag::Cxd,
            AlgorithmTag::CardXor,
        ] {
            prop_assert_eq!(derive_block(tag, seed), derive_block(tag, seed));
        }
    }

    #[test]
    fn method1_reads_pid_halves_from_consecutive_states(seed in any::<u32>()) {
        let block = derive_block(AlgorithmTag::Method1, seed).expect("32-bit tag");
        let first = Lcrng::next(seed);
        let second = Lcrng::next(first);
        prop_assert_eq!(block.pid & 0xFFFF, first >> 16);
        prop_assert_eq!(block.pid >> 16, second >> 16);
    }

    #[test]
    fn raid_seed_round_trips_through_encryption_constant(seed in any::<u32>()) {
        let params = gen9::Gen9Params {
            flawless_ivs: 3,
            shiny: Shiny::Random,
            ability: AbilityPermission::Any12H,
            gender_ratio: GenderRatio::QUARTER_FEMALE,
            id32: 0,
        };
        // The only seed whose first draw is rejected by the full-width bound.
        prop_assume!(seed != u32::MAX.wrapping_sub(XOROSHIRO_CONST as u32));
        let attributes = gen9::generate(seed, &params);
        prop_assert_eq!(gen9::seed_from_ec(attributes.encryption_constant), seed);
    }
}

#[test]
fn xoroshiro_tag_has_no_fixed_block() {
    assert!(derive_block(AlgorithmTag::Xoroshiro, 1).is_none());
}

#[test]
fn deterministic_replay_of_seeded_entropy() {
    let first = draw(SeededEntropy::new(0x5EED));
    let second = draw(SeededEntropy::new(0x5EED));
    assert_eq!(first, second, "replay diverged between runs");
    assert_ne!(first, draw(SeededEntropy::new(0x5EEE)));
}

fn draw(mut source: impl EntropySource) -> Vec<u64> {
    (0..16).map(|_| source.next_u64()).collect()
}
