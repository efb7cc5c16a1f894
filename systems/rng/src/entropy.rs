//! Entropy for novel generation.
//!
//! Verification never draws from here. Generators that synthesize new specimens
//! take an [`EntropySource`] so tests can supply a [`SeededEntropy`] while
//! production callers share the process-wide [`global_entropy`].

use std::sync::{Mutex, OnceLock, PoisonError};

use rand::{rngs::StdRng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Narrow interface over a source of fresh random words.
pub trait EntropySource {
    /// Next 32 random bits.
    fn next_u32(&mut self) -> u32;

    /// Next 64 random bits.
    fn next_u64(&mut self) -> u64;
}

/// Deterministic, thread-confined entropy for tests and replays.
#[derive(Clone, Debug)]
pub struct SeededEntropy {
    rng: ChaCha8Rng,
}

impl SeededEntropy {
    /// Creates a source that replays identically for the same `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

/// Internally synchronized entropy that can be shared across threads.
#[derive(Debug)]
pub struct SharedEntropy {
    rng: Mutex<StdRng>,
}

impl SharedEntropy {
    /// Creates a source seeded from the operating system.
    #[must_use]
    pub fn from_os() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a reproducible shared source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, draw: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        draw(&mut *rng)
    }
}

impl EntropySource for &SharedEntropy {
    fn next_u32(&mut self) -> u32 {
        self.with_rng(RngCore::next_u32)
    }

    fn next_u64(&mut self) -> u64 {
        self.with_rng(RngCore::next_u64)
    }
}

static GLOBAL: OnceLock<SharedEntropy> = OnceLock::new();

/// Installs a seeded process-wide source.
///
/// Returns `false` when a source was already installed or lazily created.
pub fn install_global_entropy(seed: u64) -> bool {
    GLOBAL.set(SharedEntropy::seeded(seed)).is_ok()
}

/// Process-wide source, seeded from the operating system on first use unless
/// [`install_global_entropy`] ran earlier.
pub fn global_entropy() -> &'static SharedEntropy {
    GLOBAL.get_or_init(SharedEntropy::from_os)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_entropy_replays() {
        let mut first = SeededEntropy::new(7);
        let mut second = SeededEntropy::new(7);
        let a: Vec<u32> = (0..8).map(|_| first.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| second.next_u32()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn shared_entropy_is_usable_from_threads() {
        let shared = SharedEntropy::seeded(3);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                let _ = scope.spawn(|| {
                    let mut source = &shared;
                    let _ = source.next_u64();
                });
            }
        });
    }
}
