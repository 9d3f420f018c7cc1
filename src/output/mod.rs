// Output rendering — the structured JSON report and the CSV table.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::matrix::CompatMatrix;

/// The structured report: actor URL plus the full check matrix.
#[derive(Serialize)]
struct Report<'a> {
    actor: &'a str,
    checks: &'a CompatMatrix,
}

/// Render the report as pretty-printed JSON (2-space indent, keys in
/// matrix declaration order).
pub fn render_json(actor_url: &str, matrix: &CompatMatrix) -> Result<String> {
    let report = Report {
        actor: actor_url,
        checks: matrix,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Render the matrix as CSV: a `server,check,ok` header and one row per
/// check, `ok` as lowercase true/false.
pub fn render_csv(matrix: &CompatMatrix) -> String {
    let mut rows = vec!["server,check,ok".to_string()];
    for (server, check, ok) in matrix.rows() {
        rows.push(format!("{server},{check},{ok}"));
    }
    rows.join("\n")
}

/// Print the trailing warning shown when not every check passed.
pub fn warn_incomplete() {
    println!(
        "{}",
        "WARN: some compatibility checks failed or are incomplete.".yellow()
    );
}
