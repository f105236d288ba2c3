pub mod text;

use serde::Serialize;

use crate::model::results::{ClassifierOutcome, ComparisonResult, ReportBlock, TestOutcome};

/// Fixed decimal contracts of the generated reports: scalars and test
/// statistics carry 2 decimals, p-values 4. Undefined values render "N/A".
pub fn format_scalar_2(v: f64) -> String {
    if v.is_nan() {
        "N/A".to_string()
    } else {
        format!("{:.2}", v)
    }
}

pub fn format_opt_2(v: Option<f64>) -> String {
    match v {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => "N/A".to_string(),
    }
}

pub fn format_p_4(v: f64) -> String {
    if v.is_nan() {
        "N/A".to_string()
    } else {
        format!("{:.4}", v)
    }
}

/// 6-decimal fixed formatting for the per-respondent TSV; missing scores
/// write "NA".
pub fn format_score_6(v: f64) -> String {
    if v.is_nan() {
        "NA".to_string()
    } else {
        format!("{:.6}", v)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TestSummary {
    pub statistic: f64,
    pub p_value: f64,
}

impl From<TestOutcome> for TestSummary {
    fn from(value: TestOutcome) -> Self {
        TestSummary {
            statistic: value.statistic,
            p_value: value.p_value,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    pub category: String,
    pub pre_score: Option<f64>,
    pub post_score: Option<f64>,
    pub cohen_d: Option<f64>,
    pub wilcoxon: Option<TestSummary>,
    pub paired_t: Option<TestSummary>,
    pub n_pairs: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClassifierSummary {
    Performed {
        accuracy: f64,
        n_train: usize,
        n_test: usize,
        classes: Vec<ClassSummary>,
        macro_avg: ClassSummary,
        weighted_avg: ClassSummary,
    },
    NotPerformed {
        reason: String,
    },
}

/// Top-level record behind summary.json.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub label_pre: String,
    pub label_post: String,
    pub n_respondents_pre: usize,
    pub n_respondents_post: usize,
    pub comparisons: Vec<ComparisonSummary>,
    pub classifier: Option<ClassifierSummary>,
}

pub fn build_summary(
    blocks: &[ReportBlock],
    tool_name: &str,
    tool_version: &str,
    label_pre: &str,
    label_post: &str,
    n_pre: usize,
    n_post: usize,
) -> SummaryData {
    let mut comparisons = Vec::new();
    let mut classifier = None;
    for block in blocks {
        match block {
            ReportBlock::Comparison(result) => comparisons.push(comparison_summary(result)),
            ReportBlock::Classifier(outcome) => classifier = Some(classifier_summary(outcome)),
        }
    }
    SummaryData {
        tool_name: tool_name.to_string(),
        tool_version: tool_version.to_string(),
        label_pre: label_pre.to_string(),
        label_post: label_post.to_string(),
        n_respondents_pre: n_pre,
        n_respondents_post: n_post,
        comparisons,
        classifier,
    }
}

fn comparison_summary(result: &ComparisonResult) -> ComparisonSummary {
    // NaN is not representable in JSON; undefined scalars become null
    let scalar = |v: f64| if v.is_nan() { None } else { Some(v) };
    ComparisonSummary {
        category: result.category.name().to_string(),
        pre_score: scalar(result.pre_scalar),
        post_score: scalar(result.post_scalar),
        cohen_d: result.cohen_d,
        wilcoxon: result.wilcoxon.map(TestSummary::from),
        paired_t: result.ttest.map(TestSummary::from),
        n_pairs: result.n_pairs,
    }
}

fn classifier_summary(outcome: &ClassifierOutcome) -> ClassifierSummary {
    match outcome {
        ClassifierOutcome::Performed(result) => ClassifierSummary::Performed {
            accuracy: result.accuracy,
            n_train: result.n_train,
            n_test: result.n_test,
            classes: result.classes.iter().map(class_summary).collect(),
            macro_avg: class_summary(&result.macro_avg),
            weighted_avg: class_summary(&result.weighted_avg),
        },
        ClassifierOutcome::NotPerformed { reason } => ClassifierSummary::NotPerformed {
            reason: reason.clone(),
        },
    }
}

fn class_summary(report: &crate::model::results::ClassReport) -> ClassSummary {
    ClassSummary {
        label: report.label.clone(),
        precision: report.precision,
        recall: report.recall,
        f1: report.f1,
        support: report.support,
    }
}
