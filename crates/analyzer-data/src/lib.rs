//! Aggregation layer for the URL social analyzer.
//!
//! Owns the per-domain store, reads bulk-import CSV rows and renders the
//! export report.

pub mod reader;
pub mod report;
pub mod store;

pub use analyzer_core as core;
