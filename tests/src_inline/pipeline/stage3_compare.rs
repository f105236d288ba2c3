use super::{compare, AnalysisError};
use crate::model::category::Category;

const NAN: f64 = f64::NAN;

#[test]
fn test_mismatched_lengths_rejected() {
    let pre = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let post = vec![2.0, 3.0, 4.0, 5.0];
    let err = compare(Category::Confidence, &pre, &post).unwrap_err();
    match err {
        AnalysisError::MisalignedInput {
            category,
            pre_len,
            post_len,
        } => {
            assert_eq!(category, "Confidence");
            assert_eq!(pre_len, 5);
            assert_eq!(post_len, 4);
        }
    }
}

#[test]
fn test_constant_shift_has_undefined_d_and_t() {
    // every difference is exactly +1, so sd(diff) is zero: Cohen's d and the
    // paired t are undefined, while Wilcoxon still reports a result
    let pre = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let post = vec![2.0, 3.0, 4.0, 5.0, 6.0];
    let r = compare(Category::Wtc, &pre, &post).unwrap();
    assert!((r.pre_scalar - 3.0).abs() < 1e-12);
    assert!((r.post_scalar - 4.0).abs() < 1e-12);
    assert_eq!(r.n_pairs, 5);
    assert!(r.cohen_d.is_none());
    assert!(r.ttest.is_none());
    let w = r.wilcoxon.expect("wilcoxon defined for nonzero differences");
    assert_eq!(w.statistic, 0.0);
}

#[test]
fn test_rows_with_missing_scores_excluded_pairwise() {
    let pre = vec![1.0, NAN, 3.0, 4.0];
    let post = vec![2.0, 5.0, NAN, 6.0];
    let r = compare(Category::Nervousness, &pre, &post).unwrap();
    assert_eq!(r.n_pairs, 2);
    // scalars still average every available value, not just complete pairs
    assert!((r.pre_scalar - 8.0 / 3.0).abs() < 1e-12);
    assert!((r.post_scalar - 13.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_all_missing_yields_no_tests() {
    let pre = vec![NAN, NAN, NAN];
    let post = vec![NAN, 2.0, NAN];
    let r = compare(Category::Confidence, &pre, &post).unwrap();
    assert_eq!(r.n_pairs, 0);
    assert!(r.pre_scalar.is_nan());
    assert!(r.cohen_d.is_none());
    assert!(r.wilcoxon.is_none());
    assert!(r.ttest.is_none());
}

#[test]
fn test_varied_differences_report_all_statistics() {
    let pre = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let post = vec![2.0, 4.0, 3.0, 7.0, 6.0];
    let r = compare(Category::Confidence, &pre, &post).unwrap();
    assert_eq!(r.n_pairs, 5);

    // diffs post-pre = [1, 2, 0, 3, 1]: mean 1.4, sd ddof1 = sqrt(1.3)
    let d = r.cohen_d.expect("d defined");
    assert!((d - 1.4 / 1.3f64.sqrt()).abs() < 1e-12);

    // t = -1.4 / sqrt(1.3/5), df = 4
    let t = r.ttest.expect("t defined");
    assert!((t.statistic - (-2.745_626)).abs() < 1e-6);
    assert!((t.p_value - 0.051_606).abs() < 1e-4);

    let w = r.wilcoxon.expect("wilcoxon defined");
    assert!(w.statistic >= 0.0);
    assert!(w.p_value > 0.0 && w.p_value <= 1.0);
}

#[test]
fn test_empty_vectors_compare_cleanly() {
    let r = compare(Category::Wtc, &[], &[]).unwrap();
    assert_eq!(r.n_pairs, 0);
    assert!(r.pre_scalar.is_nan());
    assert!(r.post_scalar.is_nan());
    assert!(r.cohen_d.is_none());
}
