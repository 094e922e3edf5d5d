use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Hard cap for sampling loops; the sampler returns its last value instead of spinning.
pub const POISSON_ITERATION_LIMIT: u32 = 1000;

pub struct RandomUtils;

impl RandomUtils {
    pub fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Independent stream for unit `index` of a run seeded with `seed` (splitmix64 finalizer).
    pub fn stream_seed(seed: u64, index: u64) -> u64 {
        let mut z = seed
            .wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));

        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);

        z ^ (z >> 31)
    }

    pub fn stream(seed: u64, index: u64) -> StdRng {
        Self::seeded(Self::stream_seed(seed, index))
    }

    /// Knuth's multiplication sampler.
    pub fn poisson<R: RngExt>(lambda: f64, rng: &mut R) -> u32 {
        if lambda <= 0.0 || !lambda.is_finite() {
            return 0;
        }

        let limit = (-lambda).exp();

        let mut k = 0u32;
        let mut p = 1.0f64;

        loop {
            k += 1;
            p *= rng.random::<f64>();

            if p <= limit || k >= POISSON_ITERATION_LIMIT {
                break;
            }
        }

        k - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_seed_is_stable() {
        assert_eq!(
            RandomUtils::stream_seed(42, 7),
            RandomUtils::stream_seed(42, 7)
        );
    }

    #[test]
    fn test_stream_seed_differs_per_index() {
        let a = RandomUtils::stream_seed(42, 0);
        let b = RandomUtils::stream_seed(42, 1);
        let c = RandomUtils::stream_seed(43, 0);

        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = RandomUtils::seeded(11);
        let mut second = RandomUtils::seeded(11);

        for _ in 0..32 {
            assert_eq!(
                first.random_range(0..1000u32),
                second.random_range(0..1000u32)
            );
        }
    }

    #[test]
    fn test_poisson_zero_lambda() {
        let mut rng = RandomUtils::seeded(1);
        assert_eq!(RandomUtils::poisson(0.0, &mut rng), 0);
        assert_eq!(RandomUtils::poisson(-3.0, &mut rng), 0);
        assert_eq!(RandomUtils::poisson(f64::NAN, &mut rng), 0);
    }

    #[test]
    fn test_poisson_mean_close_to_lambda() {
        let mut rng = RandomUtils::seeded(2024);
        let samples = 20_000;

        let total: u64 = (0..samples)
            .map(|_| RandomUtils::poisson(0.5, &mut rng) as u64)
            .sum();

        let mean = total as f64 / samples as f64;
        assert!((mean - 0.5).abs() < 0.05, "mean was {}", mean);
    }

    #[test]
    fn test_poisson_respects_iteration_cap() {
        let mut rng = RandomUtils::seeded(3);

        let value = RandomUtils::poisson(5000.0, &mut rng);
        assert!(value < POISSON_ITERATION_LIMIT);
    }
}
