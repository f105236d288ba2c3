//! Paired (dependent-samples) t-test.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::model::results::TestOutcome;

/// Two-sided paired t-test on pre-aligned, complete vectors.
///
/// Returns `None` when fewer than two pairs are available or the differences
/// have zero variance; the infinite statistic the naive formula would produce
/// is reported as undefined instead.
pub fn paired_t_test(pre: &[f64], post: &[f64]) -> Option<TestOutcome> {
    debug_assert_eq!(pre.len(), post.len());
    let n = pre.len();
    if n < 2 {
        return None;
    }

    let diffs: Vec<f64> = pre.iter().zip(post.iter()).map(|(a, b)| a - b).collect();
    let mean = diffs.iter().sum::<f64>() / n as f64;
    let ss: f64 = diffs.iter().map(|d| (d - mean) * (d - mean)).sum();
    let var = ss / (n - 1) as f64;
    if var == 0.0 {
        return None;
    }

    let t = mean / (var / n as f64).sqrt();
    if !t.is_finite() {
        return None;
    }

    let df = (n - 1) as f64;
    let dist = StudentsT::new(0.0, 1.0, df).ok()?;
    let p = 2.0 * (1.0 - dist.cdf(t.abs()));

    Some(TestOutcome {
        statistic: t,
        p_value: p.clamp(0.0, 1.0),
    })
}
