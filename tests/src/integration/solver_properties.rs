//! # Solver Properties
//!
//! Service-level checks of the laws every answer must satisfy:
//!
//! 1. The sum equals the quadratic reference's maximum (empty range allowed)
//! 2. The sum reconstructs from the returned bounds
//! 3. `0 <= begin <= end <= len`
//! 4. Sequential and parallel configurations agree exactly

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use maxsum_solver::domain::brute_force;
    use maxsum_solver::{MaxSubarrayApi, MaxSubarrayService, SolverConfig};

    fn sequential() -> MaxSubarrayService {
        MaxSubarrayService::new(SolverConfig::sequential()).unwrap()
    }

    fn eager_parallel() -> MaxSubarrayService {
        MaxSubarrayService::new(SolverConfig {
            parallel: true,
            parallel_threshold: 2,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_seeded_random_sequences() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let seq = sequential();
        let par = eager_parallel();

        for _ in 0..500 {
            let len = rng.gen_range(0..60);
            let values: Vec<i64> = (0..len).map(|_| rng.gen_range(-30..=30)).collect();

            let expected = brute_force(&values);
            let result = seq.max_subarray(&values);

            assert_eq!(result.sum, expected.sum, "{:?}", values);
            assert!(result.is_consistent_with(&values), "{:?} -> {}", values, result);
            assert_eq!(par.max_subarray(&values), result, "{:?}", values);
        }
    }

    #[test]
    fn test_mostly_negative_sequences() {
        let mut rng = StdRng::seed_from_u64(42);
        let seq = sequential();

        for _ in 0..200 {
            let len = rng.gen_range(1..40);
            let values: Vec<i64> = (0..len).map(|_| rng.gen_range(-100..=2)).collect();
            let result = seq.max_subarray(&values);
            assert_eq!(result.sum, brute_force(&values).sum, "{:?}", values);
            assert!(result.sum >= 0);
        }
    }

    proptest! {
        #[test]
        fn prop_service_matches_reference(values in prop::collection::vec(-500i64..500, 0..120)) {
            let result = sequential().max_subarray(&values);
            prop_assert_eq!(result.sum, brute_force(&values).sum);
            prop_assert!(result.begin <= result.end && result.end <= values.len());
            prop_assert!(result.is_consistent_with(&values));
        }

        #[test]
        fn prop_parallel_agrees(values in prop::collection::vec(any::<i64>(), 0..120)) {
            prop_assert_eq!(eager_parallel().max_subarray(&values), sequential().max_subarray(&values));
        }
    }
}
