#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Inverse correlator: recovers the algorithm and seed behind a specimen.
//!
//! Each 32-bit algorithm exposes the upper 16 bits of two consecutive states in
//! the personality value, so the lower 16 bits of the first state are searched
//! exhaustively and every surviving seed is replayed through
//! [`derive_block`] and compared with the observed stats. Generation 9 seeds
//! are read straight out of the encryption constant and replayed for every
//! perfect stat count and shiny policy.

use pidlab_core::{
    AbilityPermission, AlgorithmTag, CorrelationFields, GenderRatio, PidCorrelation, Shiny,
};
use pidlab_system_rng::{derive_block, gen9, Lcrng, LinearCongruential, XdRng};

/// Tags in the order [`analyze`] tries them: rare encodings first, the generic
/// handheld method last.
pub const PRIORITY: [AlgorithmTag; 6] = [
    AlgorithmTag::CardXor,
    AlgorithmTag::Xoroshiro,
    AlgorithmTag::Cxd,
    AlgorithmTag::Method4,
    AlgorithmTag::Method2,
    AlgorithmTag::Method1,
];

const LOW_SPACE: u32 = 0x1_0000;
const GEN9_SHINY: [Shiny; 3] = [Shiny::Random, Shiny::Never, Shiny::Always];

/// First algorithm in [`PRIORITY`] order that reproduces `fields`.
#[must_use]
pub fn analyze(fields: &CorrelationFields) -> Option<PidCorrelation> {
    PRIORITY.iter().find_map(|tag| analyze_as(fields, *tag))
}

/// Seed under `tag` that reproduces `fields`, if any.
#[must_use]
pub fn analyze_as(fields: &CorrelationFields, tag: AlgorithmTag) -> Option<PidCorrelation> {
    seeds_for(fields, tag)
        .first()
        .map(|seed| PidCorrelation::new(tag, *seed))
}

/// Every seed under `tag` that reproduces `fields`, ordered by the searched low bits.
#[must_use]
pub fn seeds_for(fields: &CorrelationFields, tag: AlgorithmTag) -> Vec<u32> {
    let high = fields.pid >> 16;
    let low = fields.pid & 0xFFFF;
    match tag {
        AlgorithmTag::Xoroshiro => gen9_seed(fields).into_iter().collect(),
        AlgorithmTag::CardXor => search::<XdRng>(high, low ^ high, 1, tag, fields),
        AlgorithmTag::Cxd => search::<XdRng>(high, low, 4, tag, fields),
        AlgorithmTag::Method1 | AlgorithmTag::Method2 | AlgorithmTag::Method4 => {
            search::<Lcrng>(low, high, 1, tag, fields)
        }
    }
}

/// Seeds whose state `depth` steps ahead has upper half `first`, whose next
/// state has upper half `second`, and whose full block reproduces `fields`.
fn search<R: LinearCongruential>(
    first: u32,
    second: u32,
    depth: u32,
    tag: AlgorithmTag,
    fields: &CorrelationFields,
) -> Vec<u32> {
    (0..LOW_SPACE)
        .map(|bits| first << 16 | bits)
        .filter(|state| R::next(*state) >> 16 == second)
        .map(|state| R::rewind(state, depth))
        .filter(|seed| {
            derive_block(tag, *seed)
                .is_some_and(|block| block.pid == fields.pid && block.ivs == fields.ivs)
        })
        .collect()
}

fn gen9_seed(fields: &CorrelationFields) -> Option<u32> {
    let seed = gen9::seed_from_ec(fields.encryption_constant);
    let reproduces = |flawless_ivs: u8, shiny: Shiny| {
        let params = gen9::Gen9Params {
            flawless_ivs,
            shiny,
            ability: AbilityPermission::Any12,
            gender_ratio: GenderRatio::GENDERLESS,
            id32: fields.id32,
        };
        let attributes = gen9::generate(seed, &params);
        attributes.pid == fields.pid && attributes.ivs == fields.ivs
    };
    let found = (0..=6u8).any(|flawless| GEN9_SHINY.iter().any(|shiny| reproduces(flawless, *shiny)));
    found.then_some(seed)
}
