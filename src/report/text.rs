//! Plain-text report renderer.
//!
//! The numeric lines reproduce the text blocks of the generated study
//! reports: scalars and statistics at 2 decimals, p-values at 4, undefined
//! values as "N/A".

use crate::model::results::{
    ClassReport, ClassifierOutcome, ComparisonResult, ReportBlock, TestOutcome,
};
use crate::report::{format_opt_2, format_p_4, format_scalar_2};

pub fn render_report_text(blocks: &[ReportBlock], label_pre: &str, label_post: &str) -> String {
    let mut out = String::new();

    out.push_str("Pre/Post Survey Comparison Report\n");
    out.push_str("=================================\n\n");

    for block in blocks {
        match block {
            ReportBlock::Comparison(result) => {
                out.push_str(&render_comparison(result, label_pre, label_post));
                out.push('\n');
            }
            ReportBlock::Classifier(outcome) => {
                out.push_str(&render_classifier(outcome));
                out.push('\n');
            }
        }
    }

    out
}

fn render_comparison(result: &ComparisonResult, label_pre: &str, label_post: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} Comparison:\n", result.category.name()));
    out.push_str(&format!(
        "{}: {}\n",
        label_pre,
        format_scalar_2(result.pre_scalar)
    ));
    out.push_str(&format!(
        "{}: {}\n",
        label_post,
        format_scalar_2(result.post_scalar)
    ));
    out.push_str(&format!("Cohen's d: {}\n", format_opt_2(result.cohen_d)));
    out.push_str(&format!("Wilcoxon: {}\n", render_test("W", result.wilcoxon)));
    out.push_str(&format!(
        "Paired t-test: {}\n",
        render_test("t", result.ttest)
    ));
    out
}

fn render_test(symbol: &str, outcome: Option<TestOutcome>) -> String {
    match outcome {
        Some(test) => format!(
            "{}={}, p={}",
            symbol,
            format_scalar_2(test.statistic),
            format_p_4(test.p_value)
        ),
        None => "N/A".to_string(),
    }
}

fn render_classifier(outcome: &ClassifierOutcome) -> String {
    match outcome {
        ClassifierOutcome::Performed(result) => {
            let mut out = String::new();
            out.push_str(&format!(
                "SVM Accuracy: {}\n",
                format_scalar_2(result.accuracy)
            ));
            out.push_str("SVM Classification Report:\n");
            out.push_str(&format!(
                "{:>14} {:>9} {:>9} {:>9} {:>9}\n",
                "", "precision", "recall", "f1-score", "support"
            ));
            for class in &result.classes {
                out.push_str(&render_class_row(class));
            }
            out.push('\n');
            out.push_str(&format!(
                "{:>14} {:>9} {:>9} {:>9} {:>9}\n",
                "accuracy",
                "",
                "",
                format_scalar_2(result.accuracy),
                result.n_test
            ));
            out.push_str(&render_class_row(&result.macro_avg));
            out.push_str(&render_class_row(&result.weighted_avg));
            out
        }
        ClassifierOutcome::NotPerformed { reason } => {
            format!("SVM classification not performed: {}\n", reason)
        }
    }
}

fn render_class_row(class: &ClassReport) -> String {
    format!(
        "{:>14} {:>9} {:>9} {:>9} {:>9}\n",
        class.label,
        format_scalar_2(class.precision),
        format_scalar_2(class.recall),
        format_scalar_2(class.f1),
        class.support
    )
}
