//! Authentication primitives.
//!
//! - [`session`] -- In-memory login sessions.
//! - [`cookies`] -- Session and flash cookie encoding.
//!
//! Credential checking itself lives in `respawn_core::credentials`.

pub mod cookies;
pub mod session;
