//! Linear SVM probe over the aggregated category scores.
//!
//! Each respondent contributes one row of three features (confidence,
//! nervousness, wtc means) labeled by origin condition. Missing features are
//! mean-imputed over the combined rows before a seeded 70/30 split; held-out
//! accuracy and a per-class precision/recall/F1/support table summarize how
//! separable the two conditions are.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::model::results::{ClassReport, ClassifierOutcome, ClassifierResult};
use crate::svm::{LinearSvm, SvmParams};

pub const DEFAULT_SPLIT_SEED: u64 = 42;
const TEST_FRACTION: f64 = 0.3;

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    /// Per-respondent feature rows for the first condition, one row of
    /// category means each (NaN where a category was unavailable).
    pub pre_rows: &'a [Vec<f64>],
    pub post_rows: &'a [Vec<f64>],
    pub label_pre: &'a str,
    pub label_post: &'a str,
    pub seed: u64,
    pub svm: SvmParams,
}

pub fn run_stage4(inputs: &Stage4Inputs<'_>) -> ClassifierOutcome {
    let mut features: Vec<Vec<f64>> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    for row in inputs.pre_rows {
        features.push(row.clone());
        labels.push(inputs.label_pre.to_string());
    }
    for row in inputs.post_rows {
        features.push(row.clone());
        labels.push(inputs.label_post.to_string());
    }

    if features.is_empty() {
        return ClassifierOutcome::NotPerformed {
            reason: "no respondent rows available".to_string(),
        };
    }

    let mut classes: Vec<String> = labels.clone();
    classes.sort();
    classes.dedup();
    if classes.len() < 2 {
        tracing::warn!("only one condition present; classifier skipped");
        return ClassifierOutcome::NotPerformed {
            reason: format!("only one class present ({})", classes.join(", ")),
        };
    }

    impute_column_means(&mut features);

    let n = features.len();
    let n_test = ((n as f64) * TEST_FRACTION).ceil() as usize;
    let n_train = n - n_test;
    if n_train == 0 {
        return ClassifierOutcome::NotPerformed {
            reason: format!("too few rows to split ({n})"),
        };
    }

    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(inputs.seed);
    order.shuffle(&mut rng);
    let (test_idx, train_idx) = order.split_at(n_test);

    // signed labels: first class alphabetically maps to -1
    let signed = |label: &str| if label == classes[0] { -1.0 } else { 1.0 };

    let train_features: Vec<Vec<f64>> =
        train_idx.iter().map(|&i| features[i].clone()).collect();
    let train_labels: Vec<f64> = train_idx.iter().map(|&i| signed(&labels[i])).collect();

    if !train_labels.windows(2).any(|w| w[0] != w[1]) {
        tracing::warn!("training split collapsed to one class; classifier skipped");
        return ClassifierOutcome::NotPerformed {
            reason: "training split contains a single class".to_string(),
        };
    }

    tracing::info!(
        n_train = train_idx.len(),
        n_test = test_idx.len(),
        seed = inputs.seed,
        "training linear SVM probe"
    );
    let model = LinearSvm::train(&train_features, &train_labels, inputs.svm);

    let truth: Vec<f64> = test_idx.iter().map(|&i| signed(&labels[i])).collect();
    let predicted: Vec<f64> = test_idx.iter().map(|&i| model.predict(&features[i])).collect();

    let correct = truth
        .iter()
        .zip(predicted.iter())
        .filter(|(t, p)| t == p)
        .count();
    let accuracy = correct as f64 / truth.len() as f64;

    let per_class: Vec<ClassReport> = classes
        .iter()
        .map(|class| class_report(class, signed(class), &truth, &predicted))
        .collect();
    let macro_avg = macro_average(&per_class);
    let weighted_avg = weighted_average(&per_class);

    ClassifierOutcome::Performed(ClassifierResult {
        accuracy,
        classes: per_class,
        macro_avg,
        weighted_avg,
        n_train: train_idx.len(),
        n_test: test_idx.len(),
    })
}

/// Replace NaN cells with their column mean over all rows. A column with no
/// finite value at all imputes to zero.
fn impute_column_means(rows: &mut [Vec<f64>]) {
    if rows.is_empty() {
        return;
    }
    let dim = rows[0].len();
    for col in 0..dim {
        let mut sum = 0.0;
        let mut count = 0usize;
        for row in rows.iter() {
            let v = row[col];
            if !v.is_nan() {
                sum += v;
                count += 1;
            }
        }
        let fill = if count > 0 {
            sum / count as f64
        } else {
            tracing::warn!(column = col, "feature column entirely missing; imputing 0");
            0.0
        };
        for row in rows.iter_mut() {
            if row[col].is_nan() {
                row[col] = fill;
            }
        }
    }
}

fn class_report(label: &str, class_sign: f64, truth: &[f64], predicted: &[f64]) -> ClassReport {
    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut fn_ = 0usize;
    let mut support = 0usize;
    for (&t, &p) in truth.iter().zip(predicted.iter()) {
        if t == class_sign {
            support += 1;
            if p == class_sign {
                tp += 1;
            } else {
                fn_ += 1;
            }
        } else if p == class_sign {
            fp += 1;
        }
    }
    let precision = ratio(tp, tp + fp);
    let recall = ratio(tp, tp + fn_);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };
    ClassReport {
        label: label.to_string(),
        precision,
        recall,
        f1,
        support,
    }
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

fn macro_average(classes: &[ClassReport]) -> ClassReport {
    let n = classes.len() as f64;
    ClassReport {
        label: "macro avg".to_string(),
        precision: classes.iter().map(|c| c.precision).sum::<f64>() / n,
        recall: classes.iter().map(|c| c.recall).sum::<f64>() / n,
        f1: classes.iter().map(|c| c.f1).sum::<f64>() / n,
        support: classes.iter().map(|c| c.support).sum(),
    }
}

fn weighted_average(classes: &[ClassReport]) -> ClassReport {
    let total: usize = classes.iter().map(|c| c.support).sum();
    let weight = |c: &ClassReport| c.support as f64 / total.max(1) as f64;
    ClassReport {
        label: "weighted avg".to_string(),
        precision: classes.iter().map(|c| c.precision * weight(c)).sum(),
        recall: classes.iter().map(|c| c.recall * weight(c)).sum(),
        f1: classes.iter().map(|c| c.f1 * weight(c)).sum(),
        support: total,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_classify.rs"]
mod tests;
