use std::path::PathBuf;

/// Failures of the timer file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file or its directory could not be read or written.
    #[error("Timer store I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid timer map.
    #[error("Timer store at {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A stored kill time could not be parsed.
    #[error("Invalid kill time '{value}' stored for boss '{boss}'")]
    InvalidTimestamp { boss: String, value: String },

    /// The boss is not in the catalog.
    #[error("Unknown boss '{0}'")]
    UnknownBoss(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
