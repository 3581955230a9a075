//! Exact hypergeometric upper-tail probabilities.
//!
//! The test asks: drawing `draws` nodes' worth of edge endpoints from a
//! population of `population` nodes of which `successes` are cluster
//! members, how likely is it to hit at least `observed` cluster members?
//! Low values mean the observed connectivity is unlikely under random
//! attachment.
//!
//! Terms are evaluated in log-space with `ln_gamma`-based binomial
//! coefficients and combined with a max-shifted log-sum-exp, so large
//! populations and degrees never overflow or cancel catastrophically.

use statrs::function::gamma::ln_gamma;

fn ln_binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    ln_gamma((n + 1) as f64) - ln_gamma((k + 1) as f64) - ln_gamma((n - k + 1) as f64)
}

/// Survival probability `P(X >= observed)` for a hypergeometric
/// distribution with the given population, success states and draws.
///
/// Degenerate parameter combinations (empty population, more successes or
/// draws than population) report `1.0`, the least significant value, so a
/// single bad candidate can never abort a run.
pub fn survival(population: u64, successes: u64, draws: u64, observed: u64) -> f64 {
    if observed == 0 {
        return 1.0;
    }
    if population == 0 || successes > population || draws > population {
        return 1.0;
    }
    let upper = draws.min(successes);
    if observed > upper {
        return 0.0;
    }
    let ln_total = ln_binomial(population, draws);
    if !ln_total.is_finite() {
        return 1.0;
    }

    let ln_terms: Vec<f64> = (observed..=upper)
        .map(|i| ln_binomial(successes, i) + ln_binomial(population - successes, draws - i) - ln_total)
        .collect();
    let max = ln_terms.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        // every term lies outside the distribution's support
        return 0.0;
    }
    let sum: f64 = ln_terms.iter().map(|&t| (t - max).exp()).sum();
    let p = (max + sum.ln()).exp();
    if p.is_nan() {
        return 1.0;
    }
    p.clamp(0.0, 1.0)
}

/// Effective success-state count for the null model: `alpha * |cluster|`,
/// clamped into `[1, population]`. Falls back to the raw cluster size if
/// the product underflows to zero.
pub fn effective_cluster_size(alpha: u64, cluster_len: usize, population: usize) -> u64 {
    let raw = alpha.saturating_mul(cluster_len as u64);
    let s = if raw < 1 { cluster_len as u64 } else { raw };
    s.clamp(1, population as u64)
}
