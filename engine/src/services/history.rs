//! Irrigation history service
//!
//! An append-only, capped log of saved irrigation plans, persisted as a
//! single JSON blob under a fixed key. Entries are created by explicit
//! save actions, never mutated afterwards, and only removed by a full
//! clear or by falling off the capacity cap.

use shared::{IrrigationLog, NewIrrigationLog};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::storage::{BlobStore, HISTORY_KEY};

/// Maximum number of log entries retained; older entries are discarded
pub const HISTORY_CAPACITY: usize = 100;

/// History service over a blob store
#[derive(Debug, Clone)]
pub struct HistoryService<S> {
    store: S,
}

impl<S: BlobStore> HistoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append a saved plan to the history
    ///
    /// Assigns a fresh id (time-ordered, unique), prepends the entry so
    /// the stored sequence stays most-recent-first, truncates to
    /// [`HISTORY_CAPACITY`], and persists. Returns the stored copy.
    pub fn append(&self, entry: NewIrrigationLog) -> AppResult<IrrigationLog> {
        let log = entry.into_log(Uuid::now_v7().to_string());

        let mut history = self.list();
        history.insert(0, log.clone());
        history.truncate(HISTORY_CAPACITY);

        let blob = serde_json::to_string(&history)
            .map_err(|e| AppError::Internal(format!("serialize history: {}", e)))?;
        self.store.write(HISTORY_KEY, &blob)?;

        tracing::debug!(id = %log.id, crop = %log.crop, "appended irrigation log");
        Ok(log)
    }

    /// All stored logs, most recent first
    ///
    /// Missing or corrupt persisted state reads as an empty history;
    /// corruption is logged and swallowed, never surfaced to the caller.
    pub fn list(&self) -> Vec<IrrigationLog> {
        let Some(blob) = self.store.read(HISTORY_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str(&blob) {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!("discarding corrupt irrigation history: {}", e);
                Vec::new()
            }
        }
    }

    /// Erase all persisted history
    pub fn clear(&self) -> AppResult<()> {
        tracing::info!("clearing irrigation history");
        self.store.remove(HISTORY_KEY)
    }

    /// Export the current history as CSV, most recent first
    pub fn export_csv(&self) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for log in self.list() {
            wtr.serialize(log)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let data = wtr
            .into_inner()
            .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
        String::from_utf8(data)
            .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))
    }
}
