//! # Platformer environment
//!
//! [`PlatformerEnv`] puts an [`Episode`] behind the [`Env`] interface. The
//! level is held behind an `Arc` and never mutated, so any number of
//! environments (on any number of threads) can share one.

use std::sync::Arc;

use level::Level;
use physics::Action;

use crate::config::EpisodeConfig;
use crate::env::Env;
use crate::episode::{warn_if_cap_too_short, Episode, Snapshot, Step};
use crate::error::{EnvError, InvalidState};

#[derive(Debug, Clone)]
pub struct PlatformerEnv {
    level: Arc<Level>,
    config: Arc<EpisodeConfig>,
    episode: Option<Episode>,
}

impl PlatformerEnv {
    pub fn new(level: Arc<Level>, config: EpisodeConfig) -> Result<Self, EnvError> {
        Self::with_shared_config(level, Arc::new(config))
    }

    /// Like [`PlatformerEnv::new`], for environments sharing one config.
    pub fn with_shared_config(
        level: Arc<Level>,
        config: Arc<EpisodeConfig>,
    ) -> Result<Self, EnvError> {
        config.validate()?;
        warn_if_cap_too_short(&level, &config);
        Ok(Self {
            level,
            config,
            episode: None,
        })
    }

    /// Swaps the level used from the next reset on. The running episode, if
    /// any, keeps its own handle to the old one.
    pub fn set_level(&mut self, level: Arc<Level>) {
        if !Arc::ptr_eq(&level, &self.level) {
            warn_if_cap_too_short(&level, &self.config);
        }
        self.level = level;
    }

    #[must_use]
    pub fn level(&self) -> &Arc<Level> {
        &self.level
    }

    #[must_use]
    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    #[must_use]
    pub fn episode(&self) -> Option<&Episode> {
        self.episode.as_ref()
    }

    /// Read-only player and level for renderers. `None` before the first
    /// reset.
    #[must_use]
    pub fn current_state(&self) -> Option<Snapshot<'_>> {
        self.episode.as_ref().map(Episode::snapshot)
    }
}

impl Env for PlatformerEnv {
    fn step(&mut self, action: Action) -> Result<Step, EnvError> {
        self.episode.as_mut().ok_or(InvalidState::NotStarted)?.step(action)
    }

    fn reset(&mut self) -> Vec<f32> {
        let episode = Episode::start(Arc::clone(&self.level), Arc::clone(&self.config));
        self.episode.insert(episode).observe()
    }

    fn obs_size(&self) -> usize {
        self.config.observation.size()
    }

    fn action_size(&self) -> usize {
        2
    }
}
