use std::path::PathBuf;
use thiserror::Error;

/// Output format accepted by `EXPORT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { url: String, social_score: i64 },
    Remove { url: String },
    CsvImport { path: PathBuf },
    Export { format: ExportFormat },
    Help,
    Exit,
}

/// A line that does not form a valid command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Invalid command. Usage: ADD <URL> <social_score>")]
    Add,
    #[error("Invalid command. Usage: REMOVE <URL>")]
    Remove,
    #[error("Invalid command. Usage: CSV-IMPORT-PATH <PATH>")]
    CsvImport,
    #[error("Invalid command. Usage: EXPORT [JSON]")]
    Export,
    #[error("Invalid command. Available commands: {}", AVAILABLE_COMMANDS)]
    Unknown,
}

pub const AVAILABLE_COMMANDS: &str = "ADD, REMOVE, CSV-IMPORT-PATH, EXPORT, HELP, EXIT";

pub const HELP_TEXT: &str = "\
ADD <URL> <social_score>   record a URL with its social score
REMOVE <URL>               remove the first record with exactly this URL
CSV-IMPORT-PATH <PATH>     import url,social_score rows from a CSV file
EXPORT [JSON]              print per-domain totals
HELP                       show this message
EXIT                       leave the analyzer";

impl Command {
    /// Parse a whitespace-separated input line. Keywords are case-insensitive.
    pub fn parse(line: &str) -> Result<Self, UsageError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(keyword) = parts.first() else {
            return Err(UsageError::Unknown);
        };

        match (keyword.to_uppercase().as_str(), &parts[1..]) {
            ("ADD", [url, score]) => {
                let social_score = score.parse::<i64>().map_err(|_| UsageError::Add)?;
                Ok(Self::Add {
                    url: url.to_string(),
                    social_score,
                })
            }
            ("ADD", _) => Err(UsageError::Add),

            ("REMOVE", [url]) => Ok(Self::Remove {
                url: url.to_string(),
            }),
            ("REMOVE", _) => Err(UsageError::Remove),

            ("CSV-IMPORT-PATH", [path]) => Ok(Self::CsvImport {
                path: PathBuf::from(path),
            }),
            ("CSV-IMPORT-PATH", _) => Err(UsageError::CsvImport),

            ("EXPORT", []) => Ok(Self::Export {
                format: ExportFormat::Csv,
            }),
            ("EXPORT", [format]) if format.eq_ignore_ascii_case("json") => Ok(Self::Export {
                format: ExportFormat::Json,
            }),
            ("EXPORT", _) => Err(UsageError::Export),

            ("HELP", []) => Ok(Self::Help),
            ("EXIT", []) => Ok(Self::Exit),
            _ => Err(UsageError::Unknown),
        }
    }
}
