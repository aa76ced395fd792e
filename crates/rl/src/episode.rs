//! # Episode State Machine
//!
//! An [`Episode`] owns one player, a shared handle to the level, the tick
//! counter and the running return. It starts `Running` and moves to
//! `Terminated` when the player crashes, crosses the finish line or runs out
//! of ticks. `Terminated` is absorbing: further steps are refused until the
//! episode is reset.

use std::sync::Arc;

use level::Level;
use physics::{tick, Action, Hit, PlayerState};
use serde::Serialize;

use crate::config::EpisodeConfig;
use crate::error::{EnvError, InvalidState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    Crashed,
    Finished,
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EpisodeStatus {
    Running,
    Terminated(TerminationReason),
}

impl EpisodeStatus {
    #[must_use]
    pub fn is_terminated(self) -> bool {
        matches!(self, EpisodeStatus::Terminated(_))
    }
}

/// Per-step metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Info {
    /// Ticks elapsed in this episode, including the one just taken.
    pub tick: u64,
    pub termination: Option<TerminationReason>,
    /// What the player ran into, on the crash tick.
    pub hit: Option<Hit>,
    /// Horizontal distance from the start marker.
    pub distance: f64,
    pub episode_return: f64,
    pub jumped: bool,
}

/// One transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub observation: Vec<f32>,
    pub reward: f32,
    pub terminated: bool,
    pub info: Info,
}

/// Read-only view handed to renderers and loggers.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub player: PlayerState,
    pub level: &'a Level,
    pub status: EpisodeStatus,
    pub tick: u64,
}

#[derive(Debug, Clone)]
pub struct Episode {
    level: Arc<Level>,
    config: Arc<EpisodeConfig>,
    player: PlayerState,
    tick: u64,
    episode_return: f64,
    status: EpisodeStatus,
}

impl Episode {
    /// Validates `config` and spawns a player at the level's start marker.
    pub fn new(level: Arc<Level>, config: Arc<EpisodeConfig>) -> Result<Self, EnvError> {
        config.validate()?;
        warn_if_cap_too_short(&level, &config);
        Ok(Self::start(level, config))
    }

    /// Builds an episode from an already validated config.
    pub(crate) fn start(level: Arc<Level>, config: Arc<EpisodeConfig>) -> Self {
        let player = PlayerState::spawn(&level);
        tracing::debug!(x = player.x, y = player.y, length = level.length(), "Episode reset");
        Self {
            level,
            config,
            player,
            tick: 0,
            episode_return: 0.0,
            status: EpisodeStatus::Running,
        }
    }

    /// Discards the current run and starts a fresh one on `level`.
    pub fn reset(&mut self, level: Arc<Level>) -> Vec<f32> {
        if !Arc::ptr_eq(&level, &self.level) {
            warn_if_cap_too_short(&level, &self.config);
        }
        *self = Self::start(level, Arc::clone(&self.config));
        self.observe()
    }

    /// Advances the episode by exactly one tick.
    ///
    /// When several endings coincide on one tick, a crash wins over the
    /// finish line, which wins over the tick cap.
    pub fn step(&mut self, action: Action) -> Result<Step, EnvError> {
        if let EpisodeStatus::Terminated(reason) = self.status {
            return Err(InvalidState::Terminated(reason).into());
        }

        let outcome = tick(&self.player, action, &self.level, &self.config.physics);
        self.player = outcome.state;
        self.tick += 1;
        if outcome.jumped {
            tracing::trace!(tick = self.tick, x = self.player.x, "Jump");
        }

        let termination = if outcome.collided {
            Some(TerminationReason::Crashed)
        } else if outcome.state.finished {
            Some(TerminationReason::Finished)
        } else if self.tick >= self.config.max_ticks {
            Some(TerminationReason::TimedOut)
        } else {
            None
        };

        let reward = self.config.reward.reward(outcome.progress, termination);
        self.episode_return += f64::from(reward);

        if let Some(reason) = termination {
            self.status = EpisodeStatus::Terminated(reason);
            tracing::debug!(
                tick = self.tick,
                x = self.player.x,
                ?reason,
                episode_return = self.episode_return,
                "Episode terminated"
            );
        }

        Ok(Step {
            observation: self.observe(),
            reward,
            terminated: termination.is_some(),
            info: Info {
                tick: self.tick,
                termination,
                hit: outcome.hit,
                distance: self.player.x - self.level.start(),
                episode_return: self.episode_return,
                jumped: outcome.jumped,
            },
        })
    }

    /// Encodes the current state without advancing it.
    #[must_use]
    pub fn observe(&self) -> Vec<f32> {
        self.config.observation.encode(&self.player, &self.level, &self.config.physics)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: self.player,
            level: &self.level,
            status: self.status,
            tick: self.tick,
        }
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
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
    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn episode_return(&self) -> f64 {
        self.episode_return
    }
}

pub(crate) fn warn_if_cap_too_short(level: &Level, config: &EpisodeConfig) {
    let needed = config.physics.ticks_to_reach(level.start(), level.length());
    if needed > config.max_ticks {
        tracing::warn!(
            needed,
            max_ticks = config.max_ticks,
            "Episode cap is shorter than the level, every episode will time out"
        );
    }
}
