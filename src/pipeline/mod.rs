//! Staged pipeline: stage 1 is input loading (src/input), stage 2 aggregates
//! per-respondent category scores, stage 3 runs the paired comparison, stage
//! 4 runs the classifier probe, stage 5 writes the reports.

pub mod stage2_aggregate;
pub mod stage3_compare;
pub mod stage4_classify;
pub mod stage5_report;
