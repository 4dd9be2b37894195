use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the URL analyzer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// No aggregate exists for the domain of the URL being removed.
    #[error("Domain not found for URL: {url}")]
    DomainNotFound { url: String },

    /// The domain exists but none of its records carries this exact URL.
    #[error("URL not found: {url}")]
    UrlNotFound { url: String },

    /// An import row did not split into exactly a URL and a score.
    #[error("Invalid CSV format at row {line}: expected <url>,<social_score> but got '{row}'")]
    InvalidRowFormat { line: usize, row: String },

    /// The score field of an import row is not an integer.
    #[error("Invalid social score '{value}' at row {line}: '{row}'")]
    InvalidScoreFormat {
        line: usize,
        value: String,
        row: String,
    },

    /// An import file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AnalyzerError {
    /// `true` for the two removal-target-absent errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DomainNotFound { .. } | Self::UrlNotFound { .. })
    }

    /// `true` when an import row was malformed (as opposed to unreadable).
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRowFormat { .. } | Self::InvalidScoreFormat { .. }
        )
    }
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
