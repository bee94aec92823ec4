//! On-disk shape of the timer file.
//!
//! ```json
//! {
//!   "170": null,
//!   "180": "2024-01-01T00:00:00",
//!   "210": { "killTime": "2024-01-01T00:00:00", "user": "neveon" }
//! }
//! ```
//!
//! A bare string is the legacy shape (no user recorded). New writes always
//! use the structured shape.

use std::collections::BTreeMap;

use respawn_core::catalog::BossCatalog;
use respawn_core::time_format::{format_stored, parse_stored};
use respawn_core::timer::{TimerMap, TimerRecord};
use respawn_core::types::UNKNOWN_USER;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Raw file contents. `None` is a boss that was never reset.
pub type StoredMap = BTreeMap<String, Option<StoredEntry>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredEntry {
    Structured(StoredKill),
    Legacy(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredKill {
    #[serde(rename = "killTime")]
    pub kill_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl StoredEntry {
    /// Normalize either shape into a [`TimerRecord`].
    pub fn to_record(&self, boss: &str) -> Result<TimerRecord, StoreError> {
        let (raw_time, user) = match self {
            StoredEntry::Structured(kill) => (kill.kill_time.as_str(), kill.user.as_deref()),
            StoredEntry::Legacy(raw) => (raw.as_str(), None),
        };

        let kill_time = parse_stored(raw_time).map_err(|_| StoreError::InvalidTimestamp {
            boss: boss.to_string(),
            value: raw_time.to_string(),
        })?;

        let recorded_by = match user.map(str::trim) {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => UNKNOWN_USER.to_string(),
        };

        Ok(TimerRecord {
            kill_time,
            recorded_by,
        })
    }

    pub fn from_record(record: &TimerRecord) -> Self {
        StoredEntry::Structured(StoredKill {
            kill_time: format_stored(record.kill_time),
            user: Some(record.recorded_by.clone()),
        })
    }
}

/// Convert raw file contents into the domain map.
///
/// Only catalog bosses are interpreted. Other entries stay raw in the file
/// and are never parsed, so a malformed retired boss cannot break reads.
pub fn to_timer_map(
    stored: &StoredMap,
    catalog: &BossCatalog,
) -> Result<TimerMap, StoreError> {
    catalog
        .names()
        .map(|boss| {
            let record = stored
                .get(boss)
                .and_then(Option::as_ref)
                .map(|e| e.to_record(boss))
                .transpose()?;
            Ok((boss.to_string(), record))
        })
        .collect()
}
