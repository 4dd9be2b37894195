//! Per-domain aggregation of URL records.

use std::collections::BTreeMap;

use analyzer_core::domain::extract_domain;
use analyzer_core::error::{AnalyzerError, Result};
use analyzer_core::models::{DomainStatistics, UrlRecord};

use crate::report::{render_csv, DomainSummary};

// ── ImportSummary ─────────────────────────────────────────────────────────────

/// Outcome of a bulk import that ran to completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows parsed and added to the store.
    pub rows_imported: usize,
}

// ── DomainStore ───────────────────────────────────────────────────────────────

/// Owns the domain → statistics mapping.
///
/// A domain is present exactly while it has at least one member record.
#[derive(Debug, Default)]
pub struct DomainStore {
    domains: BTreeMap<String, DomainStatistics>,
}

impl DomainStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `record` under its domain, creating the aggregate on first use.
    pub fn add(&mut self, record: UrlRecord) {
        let domain = extract_domain(&record.url);
        self.domains.entry(domain).or_default().add_record(record);
    }

    /// Remove the first record whose URL equals `url` exactly.
    ///
    /// The domain's aggregate is dropped once its last record is removed.
    pub fn remove(&mut self, url: &str) -> Result<UrlRecord> {
        let domain = extract_domain(url);
        let stats = self
            .domains
            .get_mut(&domain)
            .ok_or_else(|| AnalyzerError::DomainNotFound {
                url: url.to_string(),
            })?;

        let record = stats
            .remove_first(url)
            .ok_or_else(|| AnalyzerError::UrlNotFound {
                url: url.to_string(),
            })?;

        if stats.is_empty() {
            self.domains.remove(&domain);
        }
        Ok(record)
    }

    /// Parse and add each row of `rows` in order.
    ///
    /// Stops at the first source or format error. Rows added before the
    /// failing one stay added and later rows are never read.
    pub fn import_rows<I>(&mut self, rows: I, delimiter: char) -> Result<ImportSummary>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut summary = ImportSummary::default();

        for (idx, row) in rows.into_iter().enumerate() {
            let row = row?;
            let record = UrlRecord::parse_row(idx + 1, &row, delimiter)?;
            self.add(record);
            summary.rows_imported += 1;
        }

        Ok(summary)
    }

    /// Domains ordered by descending score sum, ties by ascending name.
    pub fn summaries(&self) -> Vec<DomainSummary> {
        // BTreeMap iteration is name-ascending; the stable sort keeps that for ties.
        let mut rows: Vec<DomainSummary> = self
            .domains
            .iter()
            .map(|(domain, stats)| DomainSummary {
                domain: domain.clone(),
                urls: stats.url_count,
                social_score: stats.social_score_sum,
            })
            .collect();
        rows.sort_by(|a, b| b.social_score.cmp(&a.social_score));
        rows
    }

    /// The `domain;urls;social_score` report for the current state.
    pub fn export(&self) -> String {
        render_csv(&self.summaries())
    }

    pub fn get(&self, domain: &str) -> Option<&DomainStatistics> {
        self.domains.get(domain)
    }

    /// Number of domains currently present.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Number of records across all domains.
    pub fn total_urls(&self) -> u64 {
        self.domains.values().map(|s| s.url_count).sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
