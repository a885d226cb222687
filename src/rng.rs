const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;
const MODULUS_MASK: u32 = 0x7fff_ffff;

/// Linear-congruential generator used for food placement.
///
/// `state' = (1103515245 * state + 12345) mod 2^31`. Seeded once per game
/// instance and kept for its whole lifetime, so a fixed seed and a fixed
/// sequence of draws always reproduce the same outputs.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the generator and returns a value in `0..upper`.
    ///
    /// `upper` must be non-zero.
    pub fn next(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0, "SeededRandom::next called with zero range");

        // 2^31 divides 2^32, so wrapping u32 arithmetic followed by the mask is exact.
        self.state = MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(INCREMENT)
            & MODULUS_MASK;
        self.state as usize % upper.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::SeededRandom;

    #[test]
    fn first_draws_match_lcg_recurrence() {
        let mut rng = SeededRandom::new(1);

        // (1103515245 * 1 + 12345) mod 2^31 = 1103527590
        assert_eq!(rng.next(usize::MAX), 1_103_527_590);
        assert_eq!(rng.next(usize::MAX), 377_401_575);
    }

    #[test]
    fn same_seed_reproduces_sequence() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);

        let first: Vec<_> = (0..32).map(|_| a.next(397)).collect();
        let second: Vec<_> = (0..32).map(|_| b.next(397)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn outputs_stay_within_range() {
        let mut rng = SeededRandom::new(7);

        for upper in 1..200 {
            assert!(rng.next(upper) < upper);
        }
    }
}
