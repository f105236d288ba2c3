use std::path::Path;

use thiserror::Error;

pub mod csv;

use csv::read_csv;

/// One loaded survey table: a header row plus one row of text cells per
/// respondent. Cells stay raw strings; scoring happens downstream.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl ResponseTable {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Indices of columns whose original header contains `marker`.
    /// Case-sensitive containment, no trimming, matching the survey export.
    pub fn columns_containing(&self, marker: &str) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, name)| name.contains(marker))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Column holding the respondent identifier, if the table has one.
    /// Used for display only; pairing between tables is by row order.
    pub fn respondent_id_column(&self) -> Option<usize> {
        self.columns
            .iter()
            .position(|name| name.trim().eq_ignore_ascii_case("respondent id"))
    }

    pub fn respondent_label(&self, row: usize) -> String {
        match self.respondent_id_column() {
            Some(col) => self.rows[row]
                .get(col)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| (row + 1).to_string()),
            None => (row + 1).to_string(),
        }
    }
}

pub fn load_table(path: &Path) -> Result<ResponseTable, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "survey file not found: {}",
            path.display()
        )));
    }

    let records = read_csv(path)?;
    let mut records = records.into_iter();
    let columns = records
        .next()
        .ok_or_else(|| InputError::Parse("survey file is empty".to_string()))?;
    if columns.iter().all(|c| c.trim().is_empty()) {
        return Err(InputError::InvalidInput(
            "survey file header is empty".to_string(),
        ));
    }

    let width = columns.len();
    let mut rows = Vec::new();
    for (idx, mut record) in records.enumerate() {
        if record.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        if record.len() > width {
            tracing::warn!(
                line = idx + 2,
                cells = record.len(),
                width,
                "row wider than header; extra cells dropped"
            );
            record.truncate(width);
        } else if record.len() < width {
            record.resize(width, String::new());
        }
        rows.push(record);
    }

    tracing::info!(
        path = %path.display(),
        rows = rows.len(),
        columns = width,
        "loaded survey table"
    );

    Ok(ResponseTable { columns, rows })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
