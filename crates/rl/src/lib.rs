#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! # Platformer RL Environment
//!
//! Wraps the physics engine in an episodic, Gym-style interface for an
//! external learning loop.
//!
//! ## Key Components
//!
//! -   **[`Episode`]:** the state machine. Owns the player, counts ticks,
//!     accumulates reward and decides when the run is over.
//! -   **[`Env`]:** the `reset` / `step` trait trainers program against.
//!     [`PlatformerEnv`] implements it on top of an [`Episode`].
//! -   **[`VecEnv`]:** a batch of independent environments sharing one level,
//!     with automatic resets.
//! -   **Configuration:** [`EpisodeConfig`] bundles the physics constants,
//!     the [`RewardConfig`], the [`ObservationConfig`] and the tick cap.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rl::{Env, EpisodeConfig, PlatformerEnv};
//!
//! let level = Arc::new(level::Level::from_path("course.json")?);
//! let mut env = PlatformerEnv::new(level, EpisodeConfig::default())?;
//! let mut obs = env.reset();
//! loop {
//!     let step = env.step(policy(&obs))?;
//!     obs = step.observation;
//!     if step.terminated {
//!         break;
//!     }
//! }
//! ```

pub mod config;
pub mod env;
pub mod episode;
pub mod error;
pub mod observation;
pub mod platformer;
pub mod reward;
pub mod vec_env;

pub use config::EpisodeConfig;
pub use env::Env;
pub use episode::{Episode, EpisodeStatus, Info, Snapshot, Step, TerminationReason};
pub use error::{EnvError, InvalidState};
pub use observation::{ObservationConfig, Probe, BASE_FEATURES, OBSTACLE_FEATURES};
pub use physics::Action;
pub use platformer::PlatformerEnv;
pub use reward::RewardConfig;
pub use vec_env::{VecEnv, VecStep};
