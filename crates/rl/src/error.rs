use level::LevelError;
use physics::ConfigError;
use thiserror::Error;

use crate::episode::TerminationReason;

/// Why a `step` was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidState {
    #[error("no episode has been started, call reset first")]
    NotStarted,
    #[error("episode already terminated ({0:?}), call reset first")]
    Terminated(TerminationReason),
}

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("invalid episode state: {0}")]
    InvalidState(#[from] InvalidState),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error("invalid observation config: {0}")]
    InvalidObservationConfig(&'static str),
    #[error("expected {expected} actions, got {found}")]
    BatchSize { expected: usize, found: usize },
}

impl EnvError {
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, EnvError::InvalidState(_))
    }
}
