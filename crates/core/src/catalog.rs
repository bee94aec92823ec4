//! Static boss catalog.
//!
//! The catalog is built once at startup (either the built-in list or a JSON
//! file named by configuration) and never changes while the process runs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Characters a boss name may use so it can sit in a path segment unescaped.
fn is_path_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A single boss with its fixed respawn delay and spawn window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossDefinition {
    /// Unique identifier, also used in URLs (`/reset/{name}`). Limited to
    /// unreserved URL characters.
    pub name: String,
    /// Minutes from kill until the boss can appear again.
    pub respawn_minutes: u32,
    /// Minutes after respawn during which the boss stays up.
    pub window_minutes: u32,
}

impl BossDefinition {
    pub fn new(name: impl Into<String>, respawn_minutes: u32, window_minutes: u32) -> Self {
        Self {
            name: name.into(),
            respawn_minutes,
            window_minutes,
        }
    }
}

/// Ordered, immutable set of bosses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossCatalog {
    bosses: Vec<BossDefinition>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl BossCatalog {
    /// Build a catalog, rejecting empty lists, blank or duplicate names and
    /// zero-minute durations.
    pub fn new(bosses: Vec<BossDefinition>) -> Result<Self, CoreError> {
        if bosses.is_empty() {
            return Err(CoreError::Validation(
                "Boss catalog must contain at least one boss".into(),
            ));
        }

        let mut seen = HashSet::with_capacity(bosses.len());
        for boss in &bosses {
            if boss.name.trim().is_empty() {
                return Err(CoreError::Validation("Boss name must not be empty".into()));
            }
            if !boss.name.chars().all(is_path_safe) {
                return Err(CoreError::Validation(format!(
                    "Boss name '{}' may only use letters, digits, '-', '_', '.' and '~'",
                    boss.name
                )));
            }
            if boss.respawn_minutes == 0 {
                return Err(CoreError::Validation(format!(
                    "Boss '{}' must have a positive respawn duration",
                    boss.name
                )));
            }
            if boss.window_minutes == 0 {
                return Err(CoreError::Validation(format!(
                    "Boss '{}' must have a positive window duration",
                    boss.name
                )));
            }
            if !seen.insert(boss.name.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Duplicate boss name '{}'",
                    boss.name
                )));
            }
        }

        Ok(Self { bosses })
    }

    /// Parse a catalog from a JSON array of boss definitions.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let bosses: Vec<BossDefinition> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid boss catalog JSON: {e}")))?;
        Self::new(bosses)
    }
}

impl Default for BossCatalog {
    /// The clan's built-in bosses.
    fn default() -> Self {
        Self {
            bosses: vec![
                BossDefinition::new("170", 70, 5),
                BossDefinition::new("180", 80, 5),
                BossDefinition::new("210", 130, 5),
                BossDefinition::new("215", 140, 5),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

impl BossCatalog {
    /// All bosses in declaration order.
    pub fn list(&self) -> &[BossDefinition] {
        &self.bosses
    }

    /// Find a boss by exact name. `None` is an expected outcome for stale or
    /// mistyped names.
    pub fn find(&self, name: &str) -> Option<&BossDefinition> {
        self.bosses.iter().find(|b| b.name == name)
    }

    /// Declaration index of the named boss.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.bosses.iter().position(|b| b.name == name)
    }

    /// Boss at a declaration index.
    pub fn get(&self, index: usize) -> Option<&BossDefinition> {
        self.bosses.get(index)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bosses.iter().map(|b| b.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.bosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bosses.is_empty()
    }
}
