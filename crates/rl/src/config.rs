use physics::{ConfigError, PhysParams};
use serde::{Deserialize, Serialize};

use crate::error::EnvError;
use crate::observation::ObservationConfig;
use crate::reward::RewardConfig;

/// Everything an episode needs besides the level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeConfig {
    pub physics: PhysParams,
    pub reward: RewardConfig,
    pub observation: ObservationConfig,
    /// Episode length cap, in ticks.
    pub max_ticks: u64,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            physics: PhysParams::default(),
            reward: RewardConfig::default(),
            observation: ObservationConfig::default(),
            max_ticks: 10_000,
        }
    }
}

impl EpisodeConfig {
    pub fn validate(&self) -> Result<(), EnvError> {
        self.physics.validate()?;
        self.observation.validate()?;
        if self.max_ticks == 0 {
            return Err(ConfigError::out_of_range("max_ticks", "positive", 0.0).into());
        }
        let r = &self.reward;
        for (name, value) in [
            ("progress_scale", r.progress_scale),
            ("crash_penalty", r.crash_penalty),
            ("finish_bonus", r.finish_bonus),
            ("timeout_reward", r.timeout_reward),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::out_of_range(name, "finite", value).into());
            }
        }
        Ok(())
    }

    /// Ticks a player needs to scroll across `distance` pixels: the
    /// no-op finishing tick of a course that long.
    #[must_use]
    pub fn ticks_to_cover(&self, distance: f64) -> u64 {
        self.physics.ticks_to_reach(0.0, distance)
    }
}
