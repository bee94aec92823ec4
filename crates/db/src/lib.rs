//! File-backed persistence for boss timers.
//!
//! The whole store is a single JSON object mapping boss name to the last
//! recorded kill. Reads load the entire file; writes rewrite it.

use std::path::PathBuf;

pub mod error;
pub mod models;
pub mod timer_store;

pub use error::StoreError;
pub use timer_store::TimerStore;

/// Open the timer store at `path`. The file is created lazily on first read.
pub fn create_store(path: impl Into<PathBuf>) -> TimerStore {
    TimerStore::new(path)
}

/// Check that the store's file (or, before first use, its directory) is reachable.
pub async fn health_check(store: &TimerStore) -> Result<(), StoreError> {
    store.probe().await
}
