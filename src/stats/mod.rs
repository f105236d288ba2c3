//! Paired-sample statistics with skip-missing semantics.
//!
//! Missing values are NaN throughout. Descriptive reductions skip them; the
//! significance tests require complete pairs, so rows with a missing entry on
//! either side are excluded pairwise before a test runs.

mod ttest;
mod wilcoxon;

pub use ttest::paired_t_test;
pub use wilcoxon::wilcoxon_signed_rank;

/// Mean of the non-NaN entries; NaN when there are none.
pub fn mean_skip_missing(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for &v in values {
        if v.is_nan() {
            continue;
        }
        sum += v;
        n += 1;
    }
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Sample standard deviation (n-1 divisor) over finite entries.
/// NaN when fewer than two entries remain.
pub fn sample_std(values: &[f64]) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if finite.len() < 2 {
        return f64::NAN;
    }
    let mean = finite.iter().sum::<f64>() / finite.len() as f64;
    let ss: f64 = finite.iter().map(|v| (v - mean) * (v - mean)).sum();
    (ss / (finite.len() - 1) as f64).sqrt()
}

/// Pairwise-complete subset of two aligned vectors: indices where both sides
/// are non-NaN. Caller guarantees equal lengths.
pub fn complete_pairs(a: &[f64], b: &[f64]) -> (Vec<f64>, Vec<f64>) {
    debug_assert_eq!(a.len(), b.len());
    let mut out_a = Vec::with_capacity(a.len());
    let mut out_b = Vec::with_capacity(b.len());
    for (&x, &y) in a.iter().zip(b.iter()) {
        if x.is_nan() || y.is_nan() {
            continue;
        }
        out_a.push(x);
        out_b.push(y);
    }
    (out_a, out_b)
}

/// Cohen's d for paired samples: mean(post - pre) / sd(post - pre, n-1).
///
/// Undefined when fewer than two complete pairs remain or the differences
/// have zero variance; both surface as `None` rather than an inf/NaN value.
pub fn cohens_d_paired(pre: &[f64], post: &[f64]) -> Option<f64> {
    let (pre_c, post_c) = complete_pairs(pre, post);
    if pre_c.len() < 2 {
        return None;
    }
    let diffs: Vec<f64> = post_c.iter().zip(pre_c.iter()).map(|(p, q)| p - q).collect();
    let mean = diffs.iter().sum::<f64>() / diffs.len() as f64;
    let sd = sample_std(&diffs);
    if sd == 0.0 || !sd.is_finite() {
        return None;
    }
    let d = mean / sd;
    if d.is_finite() { Some(d) } else { None }
}
