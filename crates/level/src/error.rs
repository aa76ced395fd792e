use thiserror::Error;

/// Errors raised while loading or validating a level.
///
/// Every variant is fatal: a level that fails to load never reaches an
/// episode.
#[derive(Error, Debug)]
pub enum LevelError {
    /// The level parsed but violates an ordering, bounds or marker rule.
    #[error("malformed level: {reason}")]
    Malformed { reason: String },
    #[error("level is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
}

impl LevelError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        LevelError::Malformed {
            reason: reason.into(),
        }
    }

    /// True for the structural validation failures (as opposed to I/O or
    /// syntax problems).
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, LevelError::Malformed { .. })
    }
}
