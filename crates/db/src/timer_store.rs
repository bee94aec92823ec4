//! Whole-file timer store.
//!
//! Every read loads the complete map and every write rewrites it. Writes land
//! in a sibling `.tmp` file that is renamed over the target, so a crash never
//! leaves a truncated store. Writers within one process are serialized; two
//! processes sharing a file can still overwrite each other's changes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use respawn_core::catalog::BossCatalog;
use respawn_core::timer::{TimerMap, TimerRecord};
use respawn_core::types::Timestamp;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::{to_timer_map, StoredEntry, StoredMap};

pub struct TimerStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TimerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // -----------------------------------------------------------------------
    // Public operations
    // -----------------------------------------------------------------------

    /// Load every stored timer.
    ///
    /// On first use (no file yet) every catalog boss is written as `null`
    /// before the map is returned.
    pub async fn load_all(&self, catalog: &BossCatalog) -> Result<TimerMap, StoreError> {
        if let Some(stored) = self.read_stored().await? {
            return to_timer_map(&stored, catalog);
        }

        let _guard = self.write_lock.lock().await;

        // Another request may have initialized the file while we waited.
        let stored = match self.read_stored().await? {
            Some(stored) => stored,
            None => {
                let initial = initial_map(catalog);
                self.write_stored(&initial).await?;
                tracing::info!(
                    path = %self.path.display(),
                    bosses = catalog.len(),
                    "Initialized empty timer store"
                );
                initial
            }
        };

        to_timer_map(&stored, catalog)
    }

    /// Record a kill, replacing any previous record for the boss.
    pub async fn record_kill(
        &self,
        catalog: &BossCatalog,
        boss_name: &str,
        kill_time: Timestamp,
        recorded_by: &str,
    ) -> Result<TimerRecord, StoreError> {
        if catalog.find(boss_name).is_none() {
            return Err(StoreError::UnknownBoss(boss_name.to_string()));
        }

        let _guard = self.write_lock.lock().await;

        let mut stored = match self.read_stored().await? {
            Some(stored) => stored,
            None => initial_map(catalog),
        };

        let record = TimerRecord {
            kill_time,
            recorded_by: recorded_by.to_string(),
        };
        stored.insert(boss_name.to_string(), Some(StoredEntry::from_record(&record)));

        self.write_stored(&stored).await?;

        tracing::info!(
            boss = boss_name,
            recorded_by,
            kill_time = %kill_time,
            "Recorded boss kill"
        );

        Ok(record)
    }

    /// Reachability check used by `/health`.
    pub(crate) async fn probe(&self) -> Result<(), StoreError> {
        match tokio::fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let dir = self.parent_dir().unwrap_or_else(|| Path::new("."));
                tokio::fs::metadata(dir)
                    .await
                    .map(|_| ())
                    .map_err(|e| StoreError::io(dir, e))
            }
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    // -----------------------------------------------------------------------
    // File access
    // -----------------------------------------------------------------------

    async fn read_stored(&self) -> Result<Option<StoredMap>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    path: self.path.clone(),
                    source,
                }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    async fn write_stored(&self, stored: &StoredMap) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(stored).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        if let Some(dir) = self.parent_dir() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::io(dir, e))?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::io(&self.path, e));
        }

        Ok(())
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Every catalog boss mapped to "never reset".
fn initial_map(catalog: &BossCatalog) -> StoredMap {
    catalog.names().map(|name| (name.to_string(), None)).collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> TimerStore {
        TimerStore::new(dir.path().join("bosses.json"))
    }

    fn kill_time() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn first_load_initializes_all_bosses_as_null() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let catalog = BossCatalog::default();

        let map = store.load_all(&catalog).await.unwrap();

        assert_eq!(map.len(), 4);
        assert!(map.values().all(Option::is_none));
        assert_eq!(
            read_json(store.path()),
            serde_json::json!({"170": null, "180": null, "210": null, "215": null})
        );
    }

    #[tokio::test]
    async fn recorded_kill_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let catalog = BossCatalog::default();

        store
            .record_kill(&catalog, "170", kill_time(), "neveon")
            .await
            .unwrap();
        let map = store.load_all(&catalog).await.unwrap();

        let record = map["170"].as_ref().unwrap();
        assert_eq!(record.kill_time, kill_time());
        assert_eq!(record.recorded_by, "neveon");
        assert!(map["180"].is_none());
    }

    #[tokio::test]
    async fn last_write_wins() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let catalog = BossCatalog::default();
        let later = kill_time() + chrono::Duration::minutes(30);

        store.record_kill(&catalog, "180", kill_time(), "neveon").await.unwrap();
        store.record_kill(&catalog, "180", later, "azazelbreath").await.unwrap();

        let map = store.load_all(&catalog).await.unwrap();
        let record = map["180"].as_ref().unwrap();
        assert_eq!(record.kill_time, later);
        assert_eq!(record.recorded_by, "azazelbreath");
    }

    #[tokio::test]
    async fn unknown_boss_is_rejected_without_writing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let catalog = BossCatalog::default();

        let result = store.record_kill(&catalog, "999", kill_time(), "neveon").await;

        assert_matches!(result, Err(StoreError::UnknownBoss(name)) if name == "999");
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn reads_legacy_file_and_upgrades_on_write() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let catalog = BossCatalog::default();
        std::fs::write(
            store.path(),
            r#"{"170": "2024-01-01T00:00:00", "180": null, "210": null, "215": null}"#,
        )
        .unwrap();

        let map = store.load_all(&catalog).await.unwrap();
        assert_eq!(map["170"].as_ref().unwrap().recorded_by, "unknown");

        store.record_kill(&catalog, "180", kill_time(), "neveon").await.unwrap();
        let json = read_json(store.path());
        // The untouched legacy entry is kept as-is; the new one is structured.
        assert_eq!(json["170"], "2024-01-01T00:00:00");
        assert_eq!(json["180"]["user"], "neveon");
        assert_eq!(json["180"]["killTime"], "2024-01-01T00:00:00");
    }

    #[tokio::test]
    async fn entries_outside_catalog_are_preserved() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let catalog = BossCatalog::default();
        std::fs::write(store.path(), r#"{"retired": "2023-05-05T05:05:05"}"#).unwrap();

        store.record_kill(&catalog, "215", kill_time(), "neveon").await.unwrap();

        let json = read_json(store.path());
        assert_eq!(json["retired"], "2023-05-05T05:05:05");
        assert_eq!(json["215"]["user"], "neveon");
    }

    #[tokio::test]
    async fn malformed_entry_outside_catalog_does_not_break_reads() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let catalog = BossCatalog::default();
        std::fs::write(
            store.path(),
            r#"{"170": null, "180": null, "210": null, "215": null, "retired": "garbage"}"#,
        )
        .unwrap();

        let map = store.load_all(&catalog).await.unwrap();
        assert_eq!(map.len(), 4);
        assert!(!map.contains_key("retired"));

        store.record_kill(&catalog, "170", kill_time(), "neveon").await.unwrap();
        assert_eq!(read_json(store.path())["retired"], "garbage");
    }

    #[tokio::test]
    async fn corrupt_file_is_reported_and_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let catalog = BossCatalog::default();
        std::fs::write(store.path(), "{ truncated").unwrap();

        assert_matches!(store.load_all(&catalog).await, Err(StoreError::Corrupt { .. }));
        assert_matches!(
            store.record_kill(&catalog, "170", kill_time(), "neveon").await,
            Err(StoreError::Corrupt { .. })
        );
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{ truncated");
    }

    #[tokio::test]
    async fn unwritable_location_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();
        let store = TimerStore::new(blocker.join("bosses.json"));

        let result = store
            .record_kill(&BossCatalog::default(), "170", kill_time(), "neveon")
            .await;

        assert_matches!(result, Err(StoreError::Io { .. }));
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = TimerStore::new(dir.path().join("data/nested/bosses.json"));

        store.load_all(&BossCatalog::default()).await.unwrap();

        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .record_kill(&BossCatalog::default(), "210", kill_time(), "neveon")
            .await
            .unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["bosses.json"]);
    }

    #[tokio::test]
    async fn concurrent_writes_to_different_bosses_both_survive() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let catalog = BossCatalog::default();

        let (a, b) = tokio::join!(
            store.record_kill(&catalog, "170", kill_time(), "neveon"),
            store.record_kill(&catalog, "215", kill_time(), "dontcallmeblack"),
        );
        a.unwrap();
        b.unwrap();

        let map = store.load_all(&catalog).await.unwrap();
        assert_eq!(map["170"].as_ref().unwrap().recorded_by, "neveon");
        assert_eq!(map["215"].as_ref().unwrap().recorded_by, "dontcallmeblack");
    }

    #[tokio::test]
    async fn probe_succeeds_before_first_write() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.probe().await.is_ok());

        let missing = TimerStore::new(dir.path().join("missing/bosses.json"));
        assert_matches!(missing.probe().await, Err(StoreError::Io { .. }));
    }
}
