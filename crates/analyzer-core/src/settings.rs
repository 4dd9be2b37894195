use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Aggregate URL social scores per domain
#[derive(Parser, Debug, Clone)]
#[command(
    name = "url-analyzer",
    about = "Aggregate URL social scores per domain",
    version
)]
pub struct Settings {
    /// Logging level
    #[arg(
        long,
        env = "URL_ANALYZER_LOG_LEVEL",
        default_value = "WARNING",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]
    )]
    pub log_level: String,

    /// Field separator used by CSV imports
    #[arg(long, env = "URL_ANALYZER_DELIMITER", default_value_t = ',')]
    pub delimiter: char,

    /// CSV file to import before the prompt opens (repeatable)
    #[arg(long = "import", value_name = "PATH")]
    pub imports: Vec<PathBuf>,

    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments.
    pub fn load() -> Self {
        Self::parse()
    }

    /// Parse an explicit argument list, enabling unit-testing without
    /// spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// The log level actually in effect; `--debug` overrides `--log-level`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
