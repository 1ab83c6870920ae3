//! Content catalogue loading.
//!
//! The catalogue is a JSON array of [`ContentRecord`]s. Record ids must be
//! unique so that blocks can be keyed by id downstream.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::models::record::ContentRecord;

/// Parse a catalogue from its JSON text.
pub fn parse_catalogue(json: &str) -> Result<Vec<ContentRecord>, CoreError> {
    let records: Vec<ContentRecord> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for record in &records {
        if record.id.trim().is_empty() {
            return Err(CoreError::MissingField(format!(
                "id (record titled {:?})",
                record.title
            )));
        }
        if !seen.insert(record.id.as_str()) {
            return Err(CoreError::DuplicateRecord(record.id.clone()));
        }
    }

    Ok(records)
}
