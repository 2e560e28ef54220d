// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Upper 0.1% quantile of the standard normal distribution.
pub const Z_999: f64 = 3.090_232;

/// Counts how often each value of `0..buckets` occurs in `samples`.
///
/// # Panics
///
/// Panics if a sample falls outside `0..buckets`.
pub fn histogram(samples: impl IntoIterator<Item = usize>, buckets: usize) -> Vec<u64> {
    let mut counts = vec![0u64; buckets];
    for sample in samples {
        assert!(sample < buckets, "sample {} outside 0..{}", sample, buckets);
        counts[sample] += 1;
    }

    counts
}

/// Pearson's chi-squared statistic of `observed` against the uniform distribution.
///
/// Returns 0.0 for an empty histogram or one without samples.
pub fn chi_squared(observed: &[u64]) -> f64 {
    let total: u64 = observed.iter().sum();
    if observed.is_empty() || total == 0 {
        return 0.0;
    }

    let expected = total as f64 / observed.len() as f64;

    observed
        .iter()
        .map(|&count| {
            let delta = count as f64 - expected;
            delta * delta / expected
        })
        .sum()
}

/// Approximate chi-squared quantile for `degrees_of_freedom` (Wilson-Hilferty).
///
/// `z` is the matching standard normal quantile, e.g. [`Z_999`].
pub fn chi_squared_critical(degrees_of_freedom: usize, z: f64) -> f64 {
    let k = degrees_of_freedom.max(1) as f64;
    let h = 2.0 / (9.0 * k);

    k * (1.0 - h + z * h.sqrt()).powi(3)
}

/// Asserts that `observed` is compatible with a uniform distribution at the
/// 99.9% confidence level.
///
/// # Panics
///
/// Panics with the statistic and the critical value when the fit is rejected.
pub fn assert_uniform(observed: &[u64]) {
    let statistic = chi_squared(observed);
    let critical = chi_squared_critical(observed.len().saturating_sub(1), Z_999);

    assert!(
        statistic <= critical,
        "chi-squared {:.2} exceeds critical value {:.2} for {} buckets: {:?}",
        statistic,
        critical,
        observed.len(),
        observed
    );
}
