//! Result records produced by the pipeline stages.
//!
//! Every stage returns immutable records by value; nothing downstream mutates
//! them. The report writers consume them as tagged blocks so they stay
//! decoupled from the stages that produced them.

use crate::model::category::Category;

/// One significance test: statistic plus two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

/// Paired comparison of one category across the two conditions.
///
/// Undefined statistics (zero-variance differences, too few complete pairs)
/// are `None` and render as "N/A"; they are expected outcomes, not errors.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub category: Category,
    pub pre_scalar: f64,
    pub post_scalar: f64,
    pub cohen_d: Option<f64>,
    pub wilcoxon: Option<TestOutcome>,
    pub ttest: Option<TestOutcome>,
    /// Complete pairs available to the significance tests after pairwise
    /// exclusion of missing entries.
    pub n_pairs: usize,
}

/// Per-class row of the classifier report, sklearn classification_report
/// shape: precision / recall / F1 / support.
#[derive(Debug, Clone)]
pub struct ClassReport {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

#[derive(Debug, Clone)]
pub struct ClassifierResult {
    pub accuracy: f64,
    pub classes: Vec<ClassReport>,
    pub macro_avg: ClassReport,
    pub weighted_avg: ClassReport,
    pub n_train: usize,
    pub n_test: usize,
}

/// Outcome of the classifier probe. The probe is skipped, not failed, when
/// the data cannot support two classes.
#[derive(Debug, Clone)]
pub enum ClassifierOutcome {
    Performed(ClassifierResult),
    NotPerformed { reason: String },
}

/// Tagged block consumed uniformly by every report writer.
#[derive(Debug, Clone)]
pub enum ReportBlock {
    Comparison(ComparisonResult),
    Classifier(ClassifierOutcome),
}
