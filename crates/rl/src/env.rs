use physics::Action;

use crate::episode::Step;
use crate::error::EnvError;

/// Reinforcement learning environment trait.
///
/// Each call to [`step`] advances the simulation by one action and returns
/// the new observation vector, a reward signal, whether the episode has
/// terminated, and per-step metadata.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action.
    ///
    /// Fails with [`EnvError::InvalidState`] before the first [`reset`] and
    /// after the episode has terminated.
    ///
    /// [`reset`]: Env::reset
    fn step(&mut self, action: Action) -> Result<Step, EnvError>;

    /// Reset the environment to its starting state and return the initial
    /// observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Number of discrete actions.
    fn action_size(&self) -> usize;
}
