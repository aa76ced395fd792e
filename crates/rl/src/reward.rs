//! # Reward policy
//!
//! Dense progress reward plus a terminal term. A crash forfeits the progress
//! of the tick it happens on.

use serde::{Deserialize, Serialize};

use crate::episode::TerminationReason;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Reward per pixel of horizontal progress.
    pub progress_scale: f64,
    pub crash_penalty: f64,
    pub finish_bonus: f64,
    pub timeout_reward: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            progress_scale: 0.01,
            crash_penalty: -100.0,
            finish_bonus: 100.0,
            timeout_reward: 0.0,
        }
    }
}

impl RewardConfig {
    /// Reward for a non-terminal tick that covered `progress` pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn progress_reward(&self, progress: f64) -> f32 {
        (progress * self.progress_scale) as f32
    }

    /// Reward for one tick, given how (and whether) it ended the episode.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn reward(&self, progress: f64, termination: Option<TerminationReason>) -> f32 {
        match termination {
            Some(TerminationReason::Crashed) => self.crash_penalty as f32,
            Some(TerminationReason::Finished) => {
                (progress * self.progress_scale + self.finish_bonus) as f32
            }
            Some(TerminationReason::TimedOut) => {
                (progress * self.progress_scale + self.timeout_reward) as f32
            }
            None => self.progress_reward(progress),
        }
    }
}
