use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};

/// A single URL together with its social score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The URL exactly as it was ingested.
    pub url: String,
    /// Weight summed into the URL's domain aggregate.
    pub social_score: i64,
}

impl UrlRecord {
    pub fn new(url: impl Into<String>, social_score: i64) -> Self {
        Self {
            url: url.into(),
            social_score,
        }
    }

    /// Parse one bulk-import row of the form `<url><delimiter><score>`.
    ///
    /// `line` is the 1-based row index reported in errors. Both fields are
    /// trimmed; the row must contain exactly two fields.
    pub fn parse_row(line: usize, row: &str, delimiter: char) -> Result<Self> {
        let fields: Vec<&str> = row.split(delimiter).collect();
        let [url, score] = fields.as_slice() else {
            return Err(AnalyzerError::InvalidRowFormat {
                line,
                row: row.to_string(),
            });
        };

        let score = score.trim();
        let social_score =
            score
                .parse::<i64>()
                .map_err(|_| AnalyzerError::InvalidScoreFormat {
                    line,
                    value: score.to_string(),
                    row: row.to_string(),
                })?;

        Ok(Self::new(url.trim(), social_score))
    }
}

/// Running totals for every URL recorded under one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainStatistics {
    pub url_count: u64,
    pub social_score_sum: i64,
    /// Member records in insertion order.
    pub urls: Vec<UrlRecord>,
}

impl DomainStatistics {
    /// Add a record's count and score to the running totals.
    pub fn add_record(&mut self, record: UrlRecord) {
        self.url_count += 1;
        self.social_score_sum = self.social_score_sum.wrapping_add(record.social_score);
        self.urls.push(record);
    }

    /// Remove the first member whose URL equals `url`, returning it.
    ///
    /// Totals are left untouched when nothing matches.
    pub fn remove_first(&mut self, url: &str) -> Option<UrlRecord> {
        let idx = self.urls.iter().position(|r| r.url == url)?;
        let record = self.urls.remove(idx);
        self.url_count -= 1;
        self.social_score_sum = self.social_score_sum.wrapping_sub(record.social_score);
        Some(record)
    }

    pub fn is_empty(&self) -> bool {
        self.url_count == 0
    }
}
