//! Domain logic for the boss respawn tracker.
//!
//! This crate has no I/O: it holds the boss catalog, the timer arithmetic
//! that turns a recorded kill into respawn/window times, the countdown tick
//! model mirrored by the dashboard script, and the static credential table.

pub mod catalog;
pub mod countdown;
pub mod credentials;
pub mod error;
pub mod time_format;
pub mod timer;
pub mod types;
