//! Property-based checks for the hypergeometric scorer.
//!
//! Invariants:
//! - survival probabilities are probabilities
//! - the scorer is a pure function
//! - more observed connections never look less significant
//! - the log-space sum agrees with the statrs distribution oracle

use diamond::stats::{effective_cluster_size, survival};
use proptest::prelude::*;
use statrs::distribution::{DiscreteCDF, Hypergeometric};

// (population, successes, draws, observed) with valid nesting
fn params() -> impl Strategy<Value = (u64, u64, u64, u64)> {
    (1u64..400).prop_flat_map(|n| {
        (Just(n), 0..=n, 1..=n).prop_flat_map(|(n, s, k)| {
            let upper = s.min(k).max(1);
            (Just(n), Just(s), Just(k), 1..=upper)
        })
    })
}

proptest! {
    #[test]
    fn survival_is_a_probability((n, s, k, kb) in params()) {
        let p = survival(n, s, k, kb);
        prop_assert!(p.is_finite());
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn survival_is_pure((n, s, k, kb) in params()) {
        let a = survival(n, s, k, kb);
        let b = survival(n, s, k, kb);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn more_observed_is_never_less_significant((n, s, k, kb) in params()) {
        let p_lo = survival(n, s, k, kb);
        let p_hi = survival(n, s, k, kb + 1);
        prop_assert!(p_hi <= p_lo + 1e-12, "P(X>={}) = {} > P(X>={}) = {}", kb + 1, p_hi, kb, p_lo);
    }

    #[test]
    fn agrees_with_statrs_oracle((n, s, k, kb) in params()) {
        let ours = survival(n, s, k, kb);
        let oracle = Hypergeometric::new(n, s, k).unwrap().sf(kb - 1);
        prop_assert!(
            (ours - oracle).abs() < 1e-9 + 1e-6 * oracle.abs(),
            "ours={} oracle={} for N={} s={} k={} kb={}",
            ours, oracle, n, s, k, kb
        );
    }

    #[test]
    fn effective_size_is_within_bounds(alpha in 1u64..20, cluster in 1usize..500, population in 1usize..2000) {
        let cluster = cluster.min(population);
        let s = effective_cluster_size(alpha, cluster, population);
        prop_assert!(s >= 1);
        prop_assert!(s <= population as u64);
        prop_assert!(s >= cluster.min(population) as u64 || s == population as u64);
    }
}
