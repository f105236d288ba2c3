//! Report writing: per-respondent TSV, summary JSON, plain-text report.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::results::ReportBlock;
use crate::pipeline::stage2_aggregate::CategoryScores;
use crate::report::text::render_report_text;
use crate::report::{build_summary, format_score_6};

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub label_pre: &'a str,
    pub label_post: &'a str,
    /// Display labels for the respondents of each table, row order.
    pub respondents_pre: &'a [String],
    pub respondents_post: &'a [String],
    pub pre_scores: &'a CategoryScores,
    pub post_scores: &'a CategoryScores,
    pub blocks: &'a [ReportBlock],
    pub tool_name: &'a str,
    pub tool_version: &'a str,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let scores_path = out_dir.join("scores.tsv");
    write_scores_tsv(input, &scores_path)?;

    let summary_path = out_dir.join("summary.json");
    let summary = build_summary(
        input.blocks,
        input.tool_name,
        input.tool_version,
        input.label_pre,
        input.label_post,
        input.pre_scores.n_rows(),
        input.post_scores.n_rows(),
    );
    let json = serde_json::to_string_pretty(&summary)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    write_text(&summary_path, &json)?;

    let report_path = out_dir.join("report.txt");
    let report = render_report_text(input.blocks, input.label_pre, input.label_post);
    write_text(&report_path, &report)?;

    tracing::info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_scores_tsv(input: &Stage5Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(
        w,
        "respondent\tcondition\tconfidence\tnervousness\twtc"
    )?;
    write_condition_rows(
        &mut w,
        input.label_pre,
        input.respondents_pre,
        input.pre_scores,
    )?;
    write_condition_rows(
        &mut w,
        input.label_post,
        input.respondents_post,
        input.post_scores,
    )?;
    Ok(())
}

fn write_condition_rows(
    w: &mut impl Write,
    condition: &str,
    respondents: &[String],
    scores: &CategoryScores,
) -> std::io::Result<()> {
    use crate::model::category::Category;
    let confidence = scores.padded(Category::Confidence);
    let nervousness = scores.padded(Category::Nervousness);
    let wtc = scores.padded(Category::Wtc);
    for row in 0..scores.n_rows() {
        let respondent = respondents
            .get(row)
            .cloned()
            .unwrap_or_else(|| (row + 1).to_string());
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            respondent,
            condition,
            format_score_6(confidence[row]),
            format_score_6(nervousness[row]),
            format_score_6(wtc[row]),
        )?;
    }
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
