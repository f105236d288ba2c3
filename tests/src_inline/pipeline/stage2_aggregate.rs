use super::{aggregate, aggregate_scalar, run_stage2};
use crate::input::ResponseTable;
use crate::model::category::Category;

fn table(columns: &[&str], rows: &[&[&str]]) -> ResponseTable {
    ResponseTable {
        columns: columns.iter().map(|s| s.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

#[test]
fn test_no_matching_columns_yields_empty_vector() {
    let t = table(&["id", "comment"], &[&["1", "hello"], &["2", "world"]]);
    assert!(aggregate(&t, Category::Confidence).is_empty());
    assert!(aggregate_scalar(&t, Category::Confidence).is_nan());
}

#[test]
fn test_row_means_over_matching_columns() {
    // confidence scores: 多分できる=3, 簡単にできる=5, 絶対できない=0
    let t = table(
        &["id", "自信A", "自信B"],
        &[
            &["1", "多分できる", "簡単にできる"],
            &["2", "絶対できない", "絶対できない"],
        ],
    );
    let v = aggregate(&t, Category::Confidence);
    assert_eq!(v, vec![4.0, 0.0]);
    assert!((aggregate_scalar(&t, Category::Confidence) - 2.0).abs() < 1e-12);
}

#[test]
fn test_unmapped_cells_skipped_within_row() {
    let t = table(
        &["自信A", "自信B"],
        &[&["多分できる", "not a rating"], &["", ""]],
    );
    let v = aggregate(&t, Category::Confidence);
    assert_eq!(v[0], 3.0);
    assert!(v[1].is_nan());
    // scalar skips the all-unmapped row
    assert!((aggregate_scalar(&t, Category::Confidence) - 3.0).abs() < 1e-12);
}

#[test]
fn test_row_order_preserved() {
    let t = table(
        &["自信"],
        &[&["簡単にできる"], &["絶対できない"], &["多分できる"]],
    );
    assert_eq!(aggregate(&t, Category::Confidence), vec![5.0, 0.0, 3.0]);
}

#[test]
fn test_categories_do_not_cross_contaminate() {
    // 緊張しない is a nervousness phrase; a confidence column must not map it
    let t = table(&["自信", "緊張"], &[&["緊張しない", "緊張しない"]]);
    let conf = aggregate(&t, Category::Confidence);
    assert!(conf[0].is_nan());
    assert_eq!(aggregate(&t, Category::Nervousness), vec![4.0]);
}

#[test]
fn test_padded_fills_missing_category() {
    let t = table(&["自信"], &[&["多分できる"], &["簡単にできる"]]);
    let scores = run_stage2(&t);
    assert_eq!(scores.n_rows(), 2);
    assert_eq!(scores.get(Category::Confidence).len(), 2);
    assert!(scores.get(Category::Wtc).is_empty());
    let padded = scores.padded(Category::Wtc);
    assert_eq!(padded.len(), 2);
    assert!(padded.iter().all(|v| v.is_nan()));
}

#[test]
fn test_feature_rows_shape() {
    let t = table(
        &["自信", "緊張", "やる気"],
        &[&["多分できる", "緊張しない", "簡単にできる"]],
    );
    let rows = run_stage2(&t).feature_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], vec![3.0, 4.0, 3.0]);
}
