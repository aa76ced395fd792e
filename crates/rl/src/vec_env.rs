//! # Batched environments
//!
//! A [`VecEnv`] steps N independent [`PlatformerEnv`]s in lockstep, one
//! action each. Environments that terminate are reset immediately, so the
//! batch never stalls; the terminal transition is still returned intact.

use std::sync::Arc;

use level::Level;
use physics::Action;

use crate::config::EpisodeConfig;
use crate::env::Env;
use crate::episode::Step;
use crate::error::{EnvError, InvalidState};
use crate::platformer::PlatformerEnv;

/// One environment's share of a batched step.
#[derive(Clone, Debug, PartialEq)]
pub struct VecStep {
    pub step: Step,
    /// First observation of the next episode, if this step terminated.
    pub reset_observation: Option<Vec<f32>>,
}

#[derive(Debug, Clone)]
pub struct VecEnv {
    envs: Vec<PlatformerEnv>,
}

impl VecEnv {
    pub fn new(level: &Arc<Level>, config: EpisodeConfig, count: usize) -> Result<Self, EnvError> {
        let config = Arc::new(config);
        let envs = (0..count)
            .map(|_| PlatformerEnv::with_shared_config(Arc::clone(level), Arc::clone(&config)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { envs })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.envs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }

    #[must_use]
    pub fn envs(&self) -> &[PlatformerEnv] {
        &self.envs
    }

    #[must_use]
    pub fn obs_size(&self) -> usize {
        self.envs.first().map_or(0, Env::obs_size)
    }

    pub fn reset(&mut self) -> Vec<Vec<f32>> {
        self.envs.iter_mut().map(Env::reset).collect()
    }

    /// Steps every environment with its own action.
    pub fn step(&mut self, actions: &[Action]) -> Result<Vec<VecStep>, EnvError> {
        if actions.len() != self.envs.len() {
            return Err(EnvError::BatchSize {
                expected: self.envs.len(),
                found: actions.len(),
            });
        }
        self.envs
            .iter_mut()
            .zip(actions)
            .map(|(env, &action)| {
                let step = env.step(action)?;
                let reset_observation = step.terminated.then(|| env.reset());
                Ok(VecStep {
                    step,
                    reset_observation,
                })
            })
            .collect()
    }

    /// Writes every environment's current observation into `buffer`, row by
    /// row.
    pub fn write_observations(&self, buffer: &mut [f32]) -> Result<(), EnvError> {
        let width = self.obs_size();
        if buffer.len() != width * self.envs.len() {
            return Err(EnvError::BatchSize {
                expected: width * self.envs.len(),
                found: buffer.len(),
            });
        }
        for (env, row) in self.envs.iter().zip(buffer.chunks_exact_mut(width.max(1))) {
            let episode = env.episode().ok_or(InvalidState::NotStarted)?;
            row.copy_from_slice(&episode.observe());
        }
        Ok(())
    }
}
