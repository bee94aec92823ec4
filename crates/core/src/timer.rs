//! Timer arithmetic: kill record + boss definition + now -> derived view.
//!
//! Everything here is pure. The dashboard and the JSON data endpoint both
//! build a [`TimerBoard`] from the stored records and the current time.

use std::collections::BTreeMap;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::catalog::{BossCatalog, BossDefinition};
use crate::time_format::format_display;
use crate::types::{Timestamp, Username};

/// Display value for any field without data.
pub const NOT_AVAILABLE: &str = "N/A";

/// Display value for a countdown that has reached zero.
pub const READY: &str = "Ready!";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// The last recorded kill of a boss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerRecord {
    pub kill_time: Timestamp,
    /// Username that recorded the kill, or [`crate::types::UNKNOWN_USER`].
    pub recorded_by: Username,
}

/// Boss name -> last kill (`None` when the boss was never reset).
pub type TimerMap = BTreeMap<String, Option<TimerRecord>>;

// ---------------------------------------------------------------------------
// Derived view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    /// Respawn time has been reached.
    Due,
    /// Respawn time is still ahead, or no kill has been recorded.
    Upcoming,
}

/// Per-request view of one boss timer. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedTimerView {
    pub name: String,
    pub respawn_minutes: u32,
    pub window_minutes: u32,
    pub last_kill: Option<Timestamp>,
    pub recorded_by: Option<Username>,
    pub respawn_at: Option<Timestamp>,
    pub window_end_at: Option<Timestamp>,
    /// Whole seconds until respawn (negative once passed).
    pub respawn_remaining_secs: Option<i64>,
    /// Whole seconds until the window closes (negative once passed).
    pub window_remaining_secs: Option<i64>,
    pub status: TimerStatus,
}

impl DerivedTimerView {
    pub fn is_due(&self) -> bool {
        self.status == TimerStatus::Due
    }

    pub fn respawn_display(&self) -> String {
        format_remaining(self.respawn_remaining_secs)
    }

    pub fn window_display(&self) -> String {
        format_remaining(self.window_remaining_secs)
    }

    pub fn last_kill_display(&self) -> String {
        format_display(self.last_kill)
    }

    pub fn respawn_at_display(&self) -> String {
        format_display(self.respawn_at)
    }

    pub fn window_end_display(&self) -> String {
        format_display(self.window_end_at)
    }
}

/// Derive the timer view for one boss.
pub fn compute(
    boss: &BossDefinition,
    record: Option<&TimerRecord>,
    now: Timestamp,
) -> DerivedTimerView {
    let Some(record) = record else {
        return DerivedTimerView {
            name: boss.name.clone(),
            respawn_minutes: boss.respawn_minutes,
            window_minutes: boss.window_minutes,
            last_kill: None,
            recorded_by: None,
            respawn_at: None,
            window_end_at: None,
            respawn_remaining_secs: None,
            window_remaining_secs: None,
            status: TimerStatus::Upcoming,
        };
    };

    // A kill stored near the end of the representable range has no
    // representable respawn; keep the kill and leave the derived fields empty.
    let respawn_at = record
        .kill_time
        .checked_add_signed(Duration::minutes(i64::from(boss.respawn_minutes)));
    let window_end_at = respawn_at
        .and_then(|at| at.checked_add_signed(Duration::minutes(i64::from(boss.window_minutes))));
    let (Some(respawn_at), Some(window_end_at)) = (respawn_at, window_end_at) else {
        return DerivedTimerView {
            name: boss.name.clone(),
            respawn_minutes: boss.respawn_minutes,
            window_minutes: boss.window_minutes,
            last_kill: Some(record.kill_time),
            recorded_by: Some(record.recorded_by.clone()),
            respawn_at: None,
            window_end_at: None,
            respawn_remaining_secs: None,
            window_remaining_secs: None,
            status: TimerStatus::Upcoming,
        };
    };

    let status = if respawn_at <= now {
        TimerStatus::Due
    } else {
        TimerStatus::Upcoming
    };

    DerivedTimerView {
        name: boss.name.clone(),
        respawn_minutes: boss.respawn_minutes,
        window_minutes: boss.window_minutes,
        last_kill: Some(record.kill_time),
        recorded_by: Some(record.recorded_by.clone()),
        respawn_at: Some(respawn_at),
        window_end_at: Some(window_end_at),
        respawn_remaining_secs: Some(floor_seconds(respawn_at - now)),
        window_remaining_secs: Some(floor_seconds(window_end_at - now)),
        status,
    }
}

/// Whole seconds, rounded toward negative infinity.
fn floor_seconds(delta: Duration) -> i64 {
    let secs = delta.num_seconds();
    if delta < Duration::seconds(secs) {
        secs - 1
    } else {
        secs
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Render remaining seconds: `"N/A"` when unknown, `"Ready!"` when
/// non-positive, else `HH:MM:SS` with hours allowed past 24.
pub fn format_remaining(remaining_secs: Option<i64>) -> String {
    match remaining_secs {
        None => NOT_AVAILABLE.to_string(),
        Some(secs) if secs <= 0 => READY.to_string(),
        Some(secs) => {
            let hours = secs / 3600;
            let minutes = (secs % 3600) / 60;
            let seconds = secs % 60;
            format!("{hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// Dashboard partition of every catalog boss.
#[derive(Debug, Clone, Serialize)]
pub struct TimerBoard {
    pub generated_at: Timestamp,
    /// Due bosses in catalog order.
    pub due: Vec<DerivedTimerView>,
    /// Upcoming bosses, soonest respawn first, unrecorded bosses last.
    pub upcoming: Vec<DerivedTimerView>,
}

/// Compute and partition views for all catalog bosses.
pub fn build_board(catalog: &BossCatalog, timers: &TimerMap, now: Timestamp) -> TimerBoard {
    let (due, mut upcoming): (Vec<_>, Vec<_>) = catalog
        .list()
        .iter()
        .map(|boss| {
            let record = timers.get(&boss.name).and_then(Option::as_ref);
            compute(boss, record, now)
        })
        .partition(DerivedTimerView::is_due);

    // Stable: ties keep catalog order.
    upcoming.sort_by_key(|view| view.respawn_remaining_secs.unwrap_or(i64::MAX));

    TimerBoard {
        generated_at: now,
        due,
        upcoming,
    }
}
