//! History of significant correlations.
//!
//! Each analytics run reports correlation coefficients by key. Significant ones are
//! kept together with the time they were first seen, so the UI can list the newest.

use crate::consts::cli_consts::HISTORY_STORE_KEY;
use crate::storage::{LocalStorage, StorageError, parse_json_from_local_storage, write_json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsHistoryEntry {
    pub key: String,
    pub coefficient: f64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

pub struct AnalyticsHistoryService {
    storage: Rc<dyn LocalStorage>,
    entries: Vec<AnalyticsHistoryEntry>,
    confidence_threshold: f64,
    change_threshold: f64,
}

impl AnalyticsHistoryService {
    pub fn new(storage: Rc<dyn LocalStorage>, confidence_threshold: f64, change_threshold: f64) -> Self {
        Self {
            storage,
            entries: Vec::new(),
            confidence_threshold,
            change_threshold,
        }
    }

    /// Loads the stored history. Unreadable history loads as empty.
    pub fn load(&mut self) {
        self.entries =
            parse_json_from_local_storage(self.storage.as_ref(), HISTORY_STORE_KEY).unwrap_or_default();
    }

    pub fn history_by_key(&self, key: &str) -> Option<&AnalyticsHistoryEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// The `limit` newest entries seen at or before `until`, sorted by coefficient ascending.
    pub fn newest_correlations(&self, limit: usize, until: i64) -> Vec<AnalyticsHistoryEntry> {
        let mut newest: Vec<AnalyticsHistoryEntry> = self
            .entries
            .iter()
            .filter(|e| e.timestamp <= until)
            .cloned()
            .collect();
        newest.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        newest.truncate(limit);

        newest.sort_by(|a, b| a.coefficient.total_cmp(&b.coefficient));
        newest
    }

    /// Replaces the history with the significant correlations of a new run.
    ///
    /// A correlation keeps its previous timestamp unless its coefficient moved by more
    /// than the change threshold, in which case it counts as new.
    pub fn process_result<I>(&mut self, correlations: I, now: DateTime<Utc>) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let new_timestamp = now.timestamp_millis();
        let mut result = Vec::new();
        for (key, coefficient) in correlations {
            // Signed: negative correlations never pass the threshold.
            if coefficient < self.confidence_threshold {
                continue;
            }

            let timestamp = match self.history_by_key(&key) {
                Some(existing)
                    if (existing.coefficient - coefficient).abs() <= self.change_threshold =>
                {
                    existing.timestamp
                }
                _ => new_timestamp,
            };
            result.push(AnalyticsHistoryEntry {
                key,
                coefficient,
                timestamp,
            });
        }

        log::debug!("Storing {} significant correlations", result.len());
        self.entries = result;
        write_json(self.storage.as_ref(), HISTORY_STORE_KEY, &self.entries)
    }

    pub fn all_history(&self) -> &[AnalyticsHistoryEntry] {
        &self.entries
    }

    pub fn import_history(&mut self, data: Vec<AnalyticsHistoryEntry>) -> Result<(), StorageError> {
        self.entries = data;
        write_json(self.storage.as_ref(), HISTORY_STORE_KEY, &self.entries)
    }

    /// Drops all history, in memory and in storage.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.storage.remove_item(HISTORY_STORE_KEY)
    }
}
