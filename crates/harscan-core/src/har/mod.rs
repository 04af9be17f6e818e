//! HAR (HTTP Archive) loading.
//!
//! Reads a capture into memory, checks for the `log.entries` array, and
//! normalizes each entry into a [`Transaction`]. A field of the wrong type
//! falls back to its default on its own; an entry that is not an object at
//! all becomes an all-defaults record. Only a broken file or a missing
//! `log.entries` aborts the load.

mod parse;
mod path;
mod record;

pub use path::resolve_har_path;
pub use record::{Header, Transaction, UNKNOWN};

use serde_json::Value;
use std::path::Path;

use crate::error::ScanError;
use parse::RawEntry;

/// A loaded capture: transactions in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarLog {
    pub entries: Vec<Transaction>,
}

impl HarLog {
    pub fn new(entries: Vec<Transaction>) -> Self {
        Self { entries }
    }

    /// Validate the `log.entries` shape of an already-parsed document and normalize it.
    pub fn from_value(mut doc: Value) -> Result<Self, ScanError> {
        let entries = match doc.pointer_mut("/log/entries").map(Value::take) {
            Some(Value::Array(entries)) => entries,
            _ => return Err(ScanError::InvalidLog),
        };

        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| {
                let raw = serde_json::from_value::<RawEntry>(raw).unwrap_or_else(|err| {
                    tracing::warn!("entry #{} is malformed, using defaults: {}", idx + 1, err);
                    RawEntry::default()
                });
                Transaction::from_raw(raw)
            })
            .collect();

        Ok(Self { entries })
    }

    /// Parse a HAR document from its JSON text. `origin` is only used in error messages.
    pub fn from_slice(bytes: &[u8], origin: &Path) -> Result<Self, ScanError> {
        let doc: Value = serde_json::from_slice(bytes).map_err(|source| ScanError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        Self::from_value(doc)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read and normalize the HAR file at `path`.
pub fn load_har(path: &Path) -> Result<HarLog, ScanError> {
    let bytes = std::fs::read(path).map_err(|source| ScanError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let log = HarLog::from_slice(&bytes, path)?;
    tracing::debug!("loaded {} entries from {}", log.len(), path.display());
    Ok(log)
}
