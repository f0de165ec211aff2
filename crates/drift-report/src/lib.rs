//! Report rendering for drift comparisons.
//!
//! Turns a [`DocumentDiff`] into a human-readable text report or a JSON
//! document for machine consumption. Sections with no entries are omitted.

use colored::Colorize;
use drift_diff::DocumentDiff;
use serde_json::json;

/// Render a comparison as a textual report.
///
/// The report names both documents, then lists `Added:`, `Removed:`, and
/// `Modified:` sections with one `  path: value` line per entry (modified
/// entries read `  path: old -> new`). Empty sections are omitted entirely.
///
/// Section headers are colorized through [`colored`]'s global switch, so
/// output piped to a file stays plain.
pub fn render_text(left: &str, right: &str, diff: &DocumentDiff) -> String {
    let mut out = String::new();
    out.push_str(&format!("Comparing {} vs {}\n", left.bold(), right.bold()));

    if !diff.added.is_empty() {
        out.push_str(&format!("{}\n", "Added:".green().bold()));
        for (path, value) in &diff.added {
            out.push_str(&format!("  {path}: {value}\n"));
        }
    }
    if !diff.removed.is_empty() {
        out.push_str(&format!("{}\n", "Removed:".red().bold()));
        for (path, value) in &diff.removed {
            out.push_str(&format!("  {path}: {value}\n"));
        }
    }
    if !diff.modified.is_empty() {
        out.push_str(&format!("{}\n", "Modified:".yellow().bold()));
        for (path, change) in &diff.modified {
            out.push_str(&format!("  {path}: {} -> {}\n", change.old, change.new));
        }
    }

    out
}

/// Render a comparison as a JSON document.
pub fn render_json(left: &str, right: &str, diff: &DocumentDiff) -> serde_json::Value {
    json!({
        "left": left,
        "right": right,
        "added": diff.added,
        "removed": diff.removed,
        "modified": diff.modified,
    })
}
