mod input;
mod model;
mod pipeline;
mod report;
mod stats;
mod svm;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::input::load_table;
use crate::model::category::ALL_CATEGORIES;
use crate::model::results::ReportBlock;
use crate::pipeline::stage2_aggregate::run_stage2;
use crate::pipeline::stage3_compare::compare;
use crate::pipeline::stage4_classify::{run_stage4, Stage4Inputs, DEFAULT_SPLIT_SEED};
use crate::pipeline::stage5_report::{write_reports, Stage5Input};
use crate::report::text::render_report_text;
use crate::svm::SvmParams;

#[derive(Debug, Parser)]
#[command(name = "wtc-prepost", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare two survey exports (pre/post or test1/test2) and write reports.
    Compare {
        /// First-condition survey file (.csv or .csv.gz)
        #[arg(long)]
        pre: PathBuf,
        /// Second-condition survey file (.csv or .csv.gz)
        #[arg(long)]
        post: PathBuf,
        /// Output directory for scores.tsv, summary.json, report.txt
        #[arg(long)]
        out: PathBuf,
        /// Display label for the first condition
        #[arg(long, default_value = "Pre-Test")]
        label_pre: String,
        /// Display label for the second condition
        #[arg(long, default_value = "Post-Test")]
        label_post: String,
        /// Seed for the reproducible 70/30 classifier split
        #[arg(long, default_value_t = DEFAULT_SPLIT_SEED)]
        seed: u64,
        /// Training epochs for the linear SVM probe
        #[arg(long, default_value_t = 1000)]
        svm_epochs: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Compare {
            pre,
            post,
            out,
            label_pre,
            label_post,
            seed,
            svm_epochs,
        } => {
            let pre_table = load_table(&pre)?;
            let post_table = load_table(&post)?;

            let pre_scores = run_stage2(&pre_table);
            let post_scores = run_stage2(&post_table);

            let mut blocks = Vec::new();
            for category in ALL_CATEGORIES {
                let result = compare(
                    category,
                    &pre_scores.padded(category),
                    &post_scores.padded(category),
                )?;
                blocks.push(ReportBlock::Comparison(result));
            }

            let classifier = run_stage4(&Stage4Inputs {
                pre_rows: &pre_scores.feature_rows(),
                post_rows: &post_scores.feature_rows(),
                label_pre: &label_pre,
                label_post: &label_post,
                seed,
                svm: SvmParams {
                    epochs: svm_epochs,
                    ..SvmParams::default()
                },
            });
            blocks.push(ReportBlock::Classifier(classifier));

            let respondents_pre: Vec<String> = (0..pre_table.n_rows())
                .map(|row| pre_table.respondent_label(row))
                .collect();
            let respondents_post: Vec<String> = (0..post_table.n_rows())
                .map(|row| post_table.respondent_label(row))
                .collect();

            write_reports(
                &Stage5Input {
                    label_pre: &label_pre,
                    label_post: &label_post,
                    respondents_pre: &respondents_pre,
                    respondents_post: &respondents_post,
                    pre_scores: &pre_scores,
                    post_scores: &post_scores,
                    blocks: &blocks,
                    tool_name: "wtc-prepost",
                    tool_version: env!("CARGO_PKG_VERSION"),
                },
                &out,
            )?;

            print!("{}", render_report_text(&blocks, &label_pre, &label_post));
            Ok(())
        }
    }
}
