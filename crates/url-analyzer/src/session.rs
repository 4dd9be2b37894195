//! Interactive command session over a single [`DomainStore`].

use analyzer_core::models::UrlRecord;
use analyzer_data::reader::import_csv;
use analyzer_data::report::render_json;
use analyzer_data::store::DomainStore;

use crate::command::{Command, ExportFormat, HELP_TEXT};

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and read the next line.
    Continue(String),
    /// Print the message and stop.
    Exit(String),
}

/// One interactive session. Command failures are reported as messages; none
/// of them ends the session.
pub struct Session {
    store: DomainStore,
    delimiter: char,
}

impl Session {
    pub fn new(delimiter: char) -> Self {
        Self {
            store: DomainStore::new(),
            delimiter,
        }
    }

    pub fn store(&self) -> &DomainStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DomainStore {
        &mut self.store
    }

    /// Parse and execute one line of input.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let command = match Command::parse(line) {
            Ok(c) => c,
            Err(usage) => return Outcome::Continue(usage.to_string()),
        };
        tracing::debug!("Executing {:?}", command);

        match command {
            Command::Add { url, social_score } => {
                self.store.add(UrlRecord::new(url, social_score));
                Outcome::Continue("URL added successfully.".to_string())
            }
            Command::Remove { url } => match self.store.remove(&url) {
                Ok(_) => Outcome::Continue("URL removed successfully.".to_string()),
                Err(e) => Outcome::Continue(e.to_string()),
            },
            Command::CsvImport { path } => {
                match import_csv(&mut self.store, &path, self.delimiter) {
                    Ok(summary) => Outcome::Continue(format!(
                        "Imported {} URLs from {}.",
                        summary.rows_imported,
                        path.display()
                    )),
                    Err(e) => Outcome::Continue(format!("CSV import failed: {}", e)),
                }
            }
            Command::Export {
                format: ExportFormat::Csv,
            } => Outcome::Continue(self.store.export()),
            Command::Export {
                format: ExportFormat::Json,
            } => match render_json(&self.store.summaries()) {
                Ok(json) => Outcome::Continue(json),
                Err(e) => Outcome::Continue(format!("JSON export failed: {}", e)),
            },
            Command::Help => Outcome::Continue(HELP_TEXT.to_string()),
            Command::Exit => Outcome::Exit("Exiting URL Social Analyzer System.".to_string()),
        }
    }
}
