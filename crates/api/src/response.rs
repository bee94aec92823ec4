//! Shared response envelope types for the JSON endpoints.
//!
//! JSON responses use a `{ "data": ... }` envelope. HTML pages are rendered
//! through [`crate::views::Views`] instead.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
