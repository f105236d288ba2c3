//! Per-respondent score aggregation for one category.

use crate::input::ResponseTable;
use crate::model::category::{map_rating, Category};
use crate::stats::mean_skip_missing;

/// Per-respondent mean scores for one category, in table row order.
/// Respondents whose matching cells are all unmapped carry NaN.
pub type CategoryScoreVector = Vec<f64>;

/// Reduce a table to one score per respondent for `category`.
///
/// Columns are selected by the category's marker substring; every selected
/// cell is mapped through the rating table, and each row collapses to the
/// mean of its mapped values, skipping unmapped cells. Zero matching columns
/// yield an empty vector, never an error.
pub fn aggregate(table: &ResponseTable, category: Category) -> CategoryScoreVector {
    let selected = table.columns_containing(category.column_marker());
    if selected.is_empty() {
        tracing::warn!(
            category = category.name(),
            marker = category.column_marker(),
            "no columns match category marker; scores unavailable"
        );
        return Vec::new();
    }

    tracing::info!(
        category = category.name(),
        columns = selected.len(),
        rows = table.n_rows(),
        "aggregating category scores"
    );

    let mut out = Vec::with_capacity(table.n_rows());
    for row in &table.rows {
        let mut sum = 0i64;
        let mut n = 0usize;
        for &col in &selected {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            if let Some(score) = map_rating(cell, category) {
                sum += score;
                n += 1;
            }
        }
        out.push(if n == 0 {
            f64::NAN
        } else {
            sum as f64 / n as f64
        });
    }
    out
}

/// Dataset-level scalar for one category: NaN-skipping mean of the
/// per-respondent vector. Empty or all-NaN input yields NaN, which renders
/// as "N/A" downstream.
pub fn aggregate_scalar(table: &ResponseTable, category: Category) -> f64 {
    mean_skip_missing(&aggregate(table, category))
}

/// All three category vectors for one table.
#[derive(Debug, Clone)]
pub struct CategoryScores {
    pub confidence: CategoryScoreVector,
    pub nervousness: CategoryScoreVector,
    pub wtc: CategoryScoreVector,
    n_rows: usize,
}

pub fn run_stage2(table: &ResponseTable) -> CategoryScores {
    CategoryScores {
        confidence: aggregate(table, Category::Confidence),
        nervousness: aggregate(table, Category::Nervousness),
        wtc: aggregate(table, Category::Wtc),
        n_rows: table.n_rows(),
    }
}

impl CategoryScores {
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn get(&self, category: Category) -> &CategoryScoreVector {
        match category {
            Category::Confidence => &self.confidence,
            Category::Nervousness => &self.nervousness,
            Category::Wtc => &self.wtc,
        }
    }

    /// Category vector padded to the table's row count. A category with no
    /// matching columns pads to all-NaN so the comparison still lines up
    /// row-for-row with the other table.
    pub fn padded(&self, category: Category) -> CategoryScoreVector {
        let v = self.get(category);
        if v.is_empty() {
            vec![f64::NAN; self.n_rows]
        } else {
            v.clone()
        }
    }

    /// One feature row per respondent: [confidence, nervousness, wtc] means,
    /// NaN where a category was unavailable. Input for the classifier probe.
    pub fn feature_rows(&self) -> Vec<Vec<f64>> {
        let confidence = self.padded(Category::Confidence);
        let nervousness = self.padded(Category::Nervousness);
        let wtc = self.padded(Category::Wtc);
        (0..self.n_rows)
            .map(|i| vec![confidence[i], nervousness[i], wtc[i]])
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
