//! Core types for the URL social analyzer.
//!
//! URL records and per-domain statistics, the domain extractor, the shared
//! error taxonomy and command-line settings.

pub mod domain;
pub mod error;
pub mod models;
pub mod settings;

pub use error::{AnalyzerError, Result};
