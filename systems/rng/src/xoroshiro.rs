/// Fixed second state word used by the generation 9 games.
pub const XOROSHIRO_CONST: u64 = 0x82A2_B175_229D_6A5B;

/// xoroshiro128+ as seeded by the generation 9 games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Xoroshiro128Plus {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128Plus {
    /// Seeds the generator with `seed` and the fixed second word.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            s0: seed,
            s1: XOROSHIRO_CONST,
        }
    }

    /// Raw state words.
    #[must_use]
    pub const fn state(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }

    /// Advances the state and returns the 64-bit output.
    pub fn next(&mut self) -> u64 {
        let s0 = self.s0;
        let mut s1 = self.s1;
        let result = s0.wrapping_add(s1);
        s1 ^= s0;
        self.s0 = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.s1 = s1.rotate_left(37);
        result
    }

    /// Uniform value in `0..bound` by rejection against the smallest covering bitmask.
    ///
    /// A zero bound yields zero without advancing.
    pub fn next_int(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        let mask = bitmask(bound);
        loop {
            let result = self.next() & mask;
            if result < bound {
                return result;
            }
        }
    }

    /// Full-width 32-bit draw used for encryption constants and personality values.
    pub fn next_u32(&mut self) -> u32 {
        self.next_int(u64::from(u32::MAX)) as u32
    }
}

const fn bitmask(bound: u64) -> u64 {
    let mut mask = bound - 1;
    mask |= mask >> 1;
    mask |= mask >> 2;
    mask |= mask >> 4;
    mask |= mask >> 8;
    mask |= mask >> 16;
    mask |= mask >> 32;
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_output_is_seed_plus_constant() {
        let mut rng = Xoroshiro128Plus::new(0x1234);
        assert_eq!(rng.next(), 0x1234u64.wrapping_add(XOROSHIRO_CONST));
    }

    #[test]
    fn bitmask_covers_bound_minus_one() {
        assert_eq!(bitmask(1), 0);
        assert_eq!(bitmask(6), 7);
        assert_eq!(bitmask(32), 31);
        assert_eq!(bitmask(100), 127);
    }

    #[test]
    fn bounded_draws_stay_below_bound() {
        let mut rng = Xoroshiro128Plus::new(42);
        for _ in 0..1_000 {
            assert!(rng.next_int(25) < 25);
        }
        assert_eq!(rng.next_int(0), 0);
    }
}
