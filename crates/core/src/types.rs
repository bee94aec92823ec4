/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Username recorded against a kill.
pub type Username = String;

/// Recorded-by value for legacy kills stored without a user.
pub const UNKNOWN_USER: &str = "unknown";
