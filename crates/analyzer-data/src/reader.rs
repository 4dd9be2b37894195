//! CSV row source for bulk imports.
//!
//! Opens a `<url>,<social_score>` file, drops its header line and feeds the
//! remaining lines to [`DomainStore::import_rows`] lazily.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use analyzer_core::error::{AnalyzerError, Result};
use tracing::{debug, info, warn};

use crate::store::{DomainStore, ImportSummary};

// ── CsvRows ───────────────────────────────────────────────────────────────────

/// Lazy iterator over the data rows of a CSV file, header excluded.
pub struct CsvRows {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl Iterator for CsvRows {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map_err(|source| AnalyzerError::FileRead {
            path: self.path.clone(),
            source,
        }))
    }
}

/// Open `path` and position the returned rows after the header line.
pub fn open_csv_rows(path: &Path) -> Result<CsvRows> {
    let file = File::open(path).map_err(|source| AnalyzerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = BufReader::new(file).lines();
    match lines.next() {
        Some(Ok(header)) => debug!("Skipping header of {}: {}", path.display(), header),
        Some(Err(source)) => {
            return Err(AnalyzerError::FileRead {
                path: path.to_path_buf(),
                source,
            })
        }
        None => debug!("{} is empty", path.display()),
    }

    Ok(CsvRows {
        path: path.to_path_buf(),
        lines,
    })
}

/// Import every data row of the CSV file at `path` into `store`.
pub fn import_csv(store: &mut DomainStore, path: &Path, delimiter: char) -> Result<ImportSummary> {
    let rows = open_csv_rows(path)?;

    match store.import_rows(rows, delimiter) {
        Ok(summary) => {
            info!(
                "Imported {} rows from {}",
                summary.rows_imported,
                path.display()
            );
            Ok(summary)
        }
        Err(e) => {
            warn!("Import of {} aborted: {}", path.display(), e);
            Err(e)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    // ── open_csv_rows ─────────────────────────────────────────────────────────

    #[test]
    fn test_open_csv_rows_skips_header() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "urls.csv",
            &["url,social_score", "http://a.com,1", "http://b.com,2"],
        );

        let rows: Vec<String> = open_csv_rows(&path)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows, vec!["http://a.com,1", "http://b.com,2"]);
    }

    #[test]
    fn test_open_csv_rows_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        File::create(&path).unwrap();

        assert_eq!(open_csv_rows(&path).unwrap().count(), 0);
    }

    #[test]
    fn test_open_csv_rows_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.csv");

        match open_csv_rows(&path) {
            Err(AnalyzerError::FileRead { path: p, .. }) => assert_eq!(p, path),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("expected an error for a missing file"),
        }
    }

    #[test]
    fn test_open_csv_rows_invalid_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"url,social_score\n\xff\xfe,1\n").unwrap();

        let first = open_csv_rows(&path).unwrap().next().unwrap();
        assert!(matches!(first, Err(AnalyzerError::FileRead { .. })));
    }

    // ── import_csv ────────────────────────────────────────────────────────────

    #[test]
    fn test_import_csv_populates_store() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "urls.csv",
            &[
                "url,social_score",
                "https://www.rte.ie/news/ulster/2018/1004/1000952-moanghan-mine/, 30",
                "http://www.rte.ie/news/politics/2018/1004/1001034-cso/, 20",
                "https://www.bbc.com/news/world-europe-58850973, 10",
            ],
        );

        let mut store = DomainStore::new();
        let summary = import_csv(&mut store, &path, ',').unwrap();

        assert_eq!(summary.rows_imported, 3);
        assert_eq!(
            store.export(),
            "domain;urls;social_score\nrte.ie;2;50\nbbc.com;1;10\n"
        );
    }

    #[test]
    fn test_import_csv_partial_on_bad_row() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "urls.csv",
            &[
                "url,social_score",
                "http://a.com,5",
                "http://b.com,5,extra",
                "http://c.com,5",
            ],
        );

        let mut store = DomainStore::new();
        let err = import_csv(&mut store, &path, ',').unwrap_err();

        assert!(matches!(err, AnalyzerError::InvalidRowFormat { line: 2, .. }));
        assert_eq!(store.export(), "domain;urls;social_score\na.com;1;5\n");
    }

    #[test]
    fn test_import_csv_blank_line_aborts() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "urls.csv",
            &["url,social_score", "http://a.com,5", "", "http://c.com,9"],
        );

        let mut store = DomainStore::new();
        let err = import_csv(&mut store, &path, ',').unwrap_err();

        assert!(matches!(err, AnalyzerError::InvalidRowFormat { line: 2, .. }));
        assert!(store.get("c.com").is_none());
        assert_eq!(store.total_urls(), 1);
    }

    #[test]
    fn test_import_csv_header_only() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "urls.csv", &["url,social_score"]);

        let mut store = DomainStore::new();
        let summary = import_csv(&mut store, &path, ',').unwrap();
        assert_eq!(summary, ImportSummary::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_import_csv_semicolon_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "urls.csv",
            &["url;social_score", "http://a.com;5"],
        );

        let mut store = DomainStore::new();
        import_csv(&mut store, &path, ';').unwrap();
        assert_eq!(store.get("a.com").unwrap().social_score_sum, 5);
    }
}
