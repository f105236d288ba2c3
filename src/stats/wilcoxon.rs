//! Wilcoxon signed-rank test for paired samples.
//!
//! Zero differences are dropped before ranking (the "wilcox" zero-method),
//! tied absolute differences receive midranks, and the reported statistic is
//! min(W+, W-). The two-sided p-value is exact (signed-rank sum enumeration)
//! for n <= 25 without ties, and a tie-corrected normal approximation
//! otherwise, matching the reference implementation the survey tooling used.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::model::results::TestOutcome;

const EXACT_LIMIT: usize = 25;

/// Two-sided Wilcoxon signed-rank test on pre-aligned, complete vectors.
///
/// Returns `None` for the degenerate cases: no pairs, all differences zero,
/// or a zero-variance rank distribution.
pub fn wilcoxon_signed_rank(pre: &[f64], post: &[f64]) -> Option<TestOutcome> {
    debug_assert_eq!(pre.len(), post.len());
    if pre.is_empty() {
        return None;
    }

    let mut diffs: Vec<f64> = pre
        .iter()
        .zip(post.iter())
        .map(|(a, b)| a - b)
        .filter(|d| *d != 0.0)
        .collect();
    if diffs.is_empty() {
        tracing::warn!("all paired differences are zero; signed-rank test undefined");
        return None;
    }
    let n = diffs.len();

    // rank |d| ascending, midranks for ties
    diffs.sort_by(|a, b| {
        a.abs()
            .partial_cmp(&b.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let ranks = midranks(&diffs);

    let mut w_plus = 0.0;
    for (d, r) in diffs.iter().zip(ranks.iter()) {
        if *d > 0.0 {
            w_plus += r;
        }
    }
    let total = (n * (n + 1)) as f64 / 2.0;
    let w_minus = total - w_plus;
    let statistic = w_plus.min(w_minus);

    let has_ties = has_tied_magnitudes(&diffs);
    let p_value = if n <= EXACT_LIMIT && !has_ties {
        exact_two_sided_p(n, statistic)
    } else {
        normal_two_sided_p(n, statistic, &diffs)?
    };

    Some(TestOutcome {
        statistic,
        p_value: p_value.clamp(0.0, 1.0),
    })
}

fn midranks(sorted_by_abs: &[f64]) -> Vec<f64> {
    let n = sorted_by_abs.len();
    let mut ranks = vec![0.0; n];
    let mut i = 0usize;
    while i < n {
        let mut j = i;
        while j + 1 < n && sorted_by_abs[j + 1].abs() == sorted_by_abs[i].abs() {
            j += 1;
        }
        // ranks are 1-based; ties share the average rank of their run
        let rank = (i + 1 + j + 1) as f64 / 2.0;
        for r in ranks.iter_mut().take(j + 1).skip(i) {
            *r = rank;
        }
        i = j + 1;
    }
    ranks
}

fn has_tied_magnitudes(sorted_by_abs: &[f64]) -> bool {
    sorted_by_abs
        .windows(2)
        .any(|w| w[0].abs() == w[1].abs())
}

/// Exact two-sided p: enumerate the null distribution of the rank sum over
/// all 2^n sign assignments via the classic counting recurrence.
fn exact_two_sided_p(n: usize, statistic: f64) -> f64 {
    let max_sum = n * (n + 1) / 2;
    let mut counts = vec![0.0f64; max_sum + 1];
    counts[0] = 1.0;
    for rank in 1..=n {
        for s in (rank..=max_sum).rev() {
            counts[s] += counts[s - rank];
        }
    }
    let t = statistic.floor() as usize;
    let tail: f64 = counts.iter().take(t + 1).sum();
    let p = 2.0 * tail / 2.0f64.powi(n as i32);
    p.min(1.0)
}

fn normal_two_sided_p(n: usize, statistic: f64, sorted_by_abs: &[f64]) -> Option<f64> {
    let nf = n as f64;
    let mean = nf * (nf + 1.0) / 4.0;
    let mut var = nf * (nf + 1.0) * (2.0 * nf + 1.0) / 24.0;

    // tie correction: sum(t^3 - t) / 48 over runs of tied magnitudes
    let mut i = 0usize;
    while i < n {
        let mut j = i;
        while j + 1 < n && sorted_by_abs[j + 1].abs() == sorted_by_abs[i].abs() {
            j += 1;
        }
        let t = (j - i + 1) as f64;
        var -= (t * t * t - t) / 48.0;
        i = j + 1;
    }

    if var <= 0.0 {
        tracing::warn!("degenerate rank variance; signed-rank test undefined");
        return None;
    }

    let z = (statistic - mean) / var.sqrt();
    let normal = Normal::new(0.0, 1.0).ok()?;
    // statistic = min(W+, W-) sits in the lower tail
    Some(2.0 * normal.cdf(z))
}
