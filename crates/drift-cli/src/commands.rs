use std::path::PathBuf;

use anyhow::Context;
use drift_diff::{diff_mappings, DocumentDiff};
use drift_load::load_document;
use drift_report::{render_json, render_text};
use drift_types::Mapping;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};

/// One pairwise comparison in the chain.
#[derive(Debug)]
pub struct PairReport {
    pub left: String,
    pub right: String,
    pub diff: DocumentDiff,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let reports = compare_chain([cli.first, cli.second, cli.third])?;
    for report in &reports {
        match cli.format {
            OutputFormat::Text => {
                println!("{}", render_text(&report.left, &report.right, &report.diff));
            }
            OutputFormat::Json => {
                let json = render_json(&report.left, &report.right, &report.diff);
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }
    }
    Ok(())
}

/// Load all three snapshots, then compare the pairs (1,2), (2,3), and (1,3).
///
/// Each pair is a fresh comparison; the (1,3) pair in particular is computed
/// directly, not derived from the other two, so its report shows
/// first-vs-third differences verbatim.
pub fn compare_chain(paths: [PathBuf; 3]) -> anyhow::Result<Vec<PairReport>> {
    let mut docs: Vec<(String, Mapping)> = Vec::with_capacity(3);
    for path in &paths {
        let doc = load_document(path).with_context(|| format!("loading {}", path.display()))?;
        docs.push((path.display().to_string(), doc));
    }

    let mut reports = Vec::with_capacity(3);
    for (i, j) in [(0, 1), (1, 2), (0, 2)] {
        let (left_name, left) = &docs[i];
        let (right_name, right) = &docs[j];
        debug!(left = %left_name, right = %right_name, "comparing pair");
        let diff = diff_mappings(left, right, "")?;
        reports.push(PairReport {
            left: left_name.clone(),
            right: right_name.clone(),
            diff,
        });
    }
    Ok(reports)
}
