//! Paired comparison of one category's score vectors across two conditions.

use thiserror::Error;

use crate::model::category::Category;
use crate::model::results::ComparisonResult;
use crate::stats::{
    cohens_d_paired, complete_pairs, mean_skip_missing, paired_t_test, wilcoxon_signed_rank,
};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(
        "misaligned input for {category}: pre has {pre_len} rows, post has {post_len}; \
         the two tables must list the same respondents in the same order"
    )]
    MisalignedInput {
        category: &'static str,
        pre_len: usize,
        post_len: usize,
    },
}

/// Compare two row-aligned score vectors for one category.
///
/// Pairing is strictly by index: the engine validates equal length and
/// nothing else. If the two files order respondents differently, the wrong
/// rows are paired silently; re-alignment by identifier is deliberately not
/// attempted here.
///
/// Degenerate statistics (zero-variance differences, too few complete pairs)
/// come back as `None` fields inside the result, not as errors.
pub fn compare(
    category: Category,
    pre: &[f64],
    post: &[f64],
) -> Result<ComparisonResult, AnalysisError> {
    if pre.len() != post.len() {
        return Err(AnalysisError::MisalignedInput {
            category: category.name(),
            pre_len: pre.len(),
            post_len: post.len(),
        });
    }

    let pre_scalar = mean_skip_missing(pre);
    let post_scalar = mean_skip_missing(post);
    let cohen_d = cohens_d_paired(pre, post);

    let (pre_c, post_c) = complete_pairs(pre, post);
    let n_pairs = pre_c.len();
    if n_pairs < pre.len() {
        tracing::warn!(
            category = category.name(),
            dropped = pre.len() - n_pairs,
            "rows with missing scores excluded pairwise from significance tests"
        );
    }

    let (wilcoxon, ttest) = if n_pairs == 0 {
        tracing::warn!(
            category = category.name(),
            "no complete pairs; significance tests not available"
        );
        (None, None)
    } else {
        (
            wilcoxon_signed_rank(&pre_c, &post_c),
            paired_t_test(&pre_c, &post_c),
        )
    };

    Ok(ComparisonResult {
        category,
        pre_scalar,
        post_scalar,
        cohen_d,
        wilcoxon,
        ttest,
        n_pairs,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_compare.rs"]
mod tests;
