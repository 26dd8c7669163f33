//! Output module for export snapshots and statistics
//!
//! This module handles:
//! - Aggregating the coordinator's state into the export snapshot
//! - Deriving summary statistics
//! - Writing the JSON export file

mod json;
mod snapshot;
pub mod stats;

pub use json::{write_snapshot, ExportError};
pub use snapshot::{build_snapshot, dedup_keywords, ExportSnapshot, ExtractedData, Metadata, SearchResults};
pub use stats::{compute_statistics, print_statistics, CrawlStatistics};
