//! Request extractors.
//!
//! - [`auth::CurrentSession`] -- Optional logged-in session.
//! - [`auth::PendingFlash`] -- Flash notice left by the previous redirect.

pub mod auth;
