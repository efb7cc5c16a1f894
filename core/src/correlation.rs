use serde::{Deserialize, Serialize};

use crate::IvSet;

/// Deterministic generation scheme a personality value can be correlated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlgorithmTag {
    /// 32-bit LCRNG: PID low, PID high, IV word 1, IV word 2.
    Method1,
    /// 32-bit LCRNG with an unused call between the PID and the IVs.
    Method2,
    /// 32-bit LCRNG with an unused call between the two IV words.
    Method4,
    /// Colosseum/XD RNG: IV word 1, IV word 2, ability bit, PID high, PID low.
    Cxd,
    /// Colosseum/XD RNG e-Card variant: PID high, scrambled PID low, no IVs.
    CardXor,
    /// Generation 9 xoroshiro128+ seeded from a 32-bit value.
    Xoroshiro,
}

/// Algorithm and originating seed reconstructed from a specimen.
///
/// The absence of a correlation is represented by `None` at the call sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PidCorrelation {
    tag: AlgorithmTag,
    seed: u32,
}

impl PidCorrelation {
    /// Creates a correlation result.
    #[must_use]
    pub const fn new(tag: AlgorithmTag, seed: u32) -> Self {
        Self { tag, seed }
    }

    /// Algorithm that reproduces the specimen.
    #[must_use]
    pub const fn tag(&self) -> AlgorithmTag {
        self.tag
    }

    /// Seed the algorithm started from.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }
}

/// Raw attribute words the correlator inspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationFields {
    /// Personality value.
    pub pid: u32,
    /// Encryption constant.
    pub encryption_constant: u32,
    /// Individual stats.
    pub ivs: IvSet,
    /// Trainer id (low half) and secret id (high half).
    pub id32: u32,
}
