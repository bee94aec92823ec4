//! Client-side countdown model.
//!
//! The dashboard embeds each boss's remaining seconds and a small script
//! ticks them down once per second without contacting the server. This type
//! is the same state machine in Rust so the rule can be tested: the respawn
//! counter runs to zero first, then the window counter takes over.

use serde::Serialize;

use crate::timer::{format_remaining, DerivedTimerView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub respawn_secs: Option<i64>,
    pub window_secs: Option<i64>,
}

impl Countdown {
    pub fn new(respawn_secs: Option<i64>, window_secs: Option<i64>) -> Self {
        Self {
            respawn_secs,
            window_secs,
        }
    }

    /// Seed from a server-computed view.
    pub fn from_view(view: &DerivedTimerView) -> Self {
        Self::new(view.respawn_remaining_secs, view.window_remaining_secs)
    }

    /// Advance one second.
    pub fn tick(self) -> Self {
        match (self.respawn_secs, self.window_secs) {
            (Some(r), w) if r > 0 => Self::new(Some(r - 1), w.map(|w| w - 1)),
            (r, Some(w)) if w > 0 => Self::new(r, Some(w - 1)),
            _ => self,
        }
    }

    /// Advance `n` seconds.
    pub fn advance(self, n: u32) -> Self {
        (0..n).fold(self, |c, _| c.tick())
    }

    /// `(respawn, window)` strings using the dashboard formatting rule.
    pub fn display(&self) -> (String, String) {
        (
            format_remaining(self.respawn_secs),
            format_remaining(self.window_secs),
        )
    }

    /// True once both counters have run out (or never had data).
    pub fn is_finished(&self) -> bool {
        self.respawn_secs.map_or(true, |r| r <= 0) && self.window_secs.map_or(true, |w| w <= 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respawn_counts_down_first() {
        let c = Countdown::new(Some(2), Some(302)).tick();
        assert_eq!(c, Countdown::new(Some(1), Some(301)));
        assert_eq!(c.display(), ("00:00:01".to_string(), "00:05:01".to_string()));
    }

    #[test]
    fn switches_to_window_after_respawn_reaches_zero() {
        let c = Countdown::new(Some(1), Some(301)).advance(2);
        assert_eq!(c, Countdown::new(Some(0), Some(299)));
        assert_eq!(c.display().0, "Ready!");
        assert_eq!(c.display().1, "00:04:59");
    }

    #[test]
    fn stops_at_zero() {
        let c = Countdown::new(Some(1), Some(2)).advance(10);
        assert_eq!(c, Countdown::new(Some(0), Some(0)));
        assert!(c.is_finished());
        assert_eq!(c.display(), ("Ready!".to_string(), "Ready!".to_string()));
    }

    #[test]
    fn already_due_only_ticks_window() {
        let c = Countdown::new(Some(-30), Some(270)).tick();
        assert_eq!(c, Countdown::new(Some(-30), Some(269)));
    }

    #[test]
    fn absent_data_never_changes() {
        let c = Countdown::new(None, None).advance(5);
        assert_eq!(c, Countdown::new(None, None));
        assert!(c.is_finished());
        assert_eq!(c.display(), ("N/A".to_string(), "N/A".to_string()));
    }
}
