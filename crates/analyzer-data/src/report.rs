//! Rendering of the per-domain export report.

use serde::Serialize;

/// Header line of the semicolon-delimited report.
pub const REPORT_HEADER: &str = "domain;urls;social_score";

/// One exported row: a domain and its aggregate totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainSummary {
    pub domain: String,
    pub urls: u64,
    pub social_score: i64,
}

/// Render `rows` as the `domain;urls;social_score` report.
///
/// Every line, the header included, ends with `\n`. Rows are written in the
/// order given.
pub fn render_csv(rows: &[DomainSummary]) -> String {
    let mut out = String::with_capacity(REPORT_HEADER.len() + 1 + rows.len() * 32);
    out.push_str(REPORT_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&format!("{};{};{}\n", row.domain, row.urls, row.social_score));
    }
    out
}

/// Render `rows` as a pretty-printed JSON array.
pub fn render_json(rows: &[DomainSummary]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
