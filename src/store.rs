//! The persisted JSON document: one [`DayRecord`] per ISO date string.
//!
//! The document is loaded once per command, mutated in memory, and written
//! back in full. There is no cross-process locking; two racing invocations
//! resolve by last-writer-wins over the whole file, which is acceptable for
//! a single-user local tool.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::DayRecord;

pub const LOCK_VERSION: &str = "1";

/// The whole data file: a format tag plus a date-keyed map of day records.
///
/// `BTreeMap` keeps the "YYYY-MM-DD" keys lexicographically sorted on
/// write, which for this key format equals chronological order.
#[derive(Debug, Serialize, Deserialize)]
pub struct Store {
    pub lock_version: String,
    pub dates: BTreeMap<String, DayRecord>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            lock_version: LOCK_VERSION.to_string(),
            dates: BTreeMap::new(),
        }
    }
}

impl Store {
    /// Load the document at `path`. A missing file is an empty store, not
    /// an error; an unreadable or malformed file is.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the full document back, atomically (temp file + rename).
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;

        Ok(())
    }

    /// The record for `date`, or a fresh empty one when absent.
    ///
    /// The fallback is not inserted; only [`Store::replace`] writes into
    /// the map.
    pub fn find_date(&self, date: &str) -> DayRecord {
        self.dates.get(date).cloned().unwrap_or_default()
    }

    /// Insert or overwrite the record for `date`.
    pub fn replace(&mut self, date: &str, record: DayRecord) {
        self.dates.insert(date.to_string(), record);
    }
}
