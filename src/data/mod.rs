// Loading the saved invoice export into records
pub mod invoices;

// Re-export commonly used types
pub use invoices::InvoiceDocument;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::domain::{Record, RecordSet};

/// Load a RecordSet from a saved invoice export file.
///
/// Fetching and saving the export is the job of the upstream API client;
/// this side only needs the file it left behind.
pub fn load_records_from_file(path: impl AsRef<Path>) -> Result<RecordSet> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading invoice export {}", path.display()))?;
    let document: InvoiceDocument = serde_json::from_str(&raw)
        .with_context(|| format!("parsing invoice export {}", path.display()))?;

    let records = document.into_records();
    log::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Distinct store locations in first-seen order. This feeds the location
/// dropdown; records without a location don't get an option.
pub fn unique_locations(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.location.clone())
        .unique()
        .collect()
}
