#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! # Platformer Physics Engine
//!
//! A minimal, deterministic physics engine for a single-axis-jump
//! side-scroller.
//!
//! The player moves right at a constant speed; the only thing it controls is
//! when to jump. Each call to [`tick`] advances the player by one fixed
//! timestep against an immutable [`level::Level`] and reports whether it hit
//! anything.
//!
//! ## Key Components
//!
//! -   **Constants:** [`PhysParams`] holds the timestep, speeds, gravity and
//!     hitbox size. [`PhysParams::validate`] rejects nonsense values with a
//!     [`ConfigError`].
//! -   **State:** [`PlayerState`] is the player's pose and flags; [`Action`]
//!     is the jump/no-op input.
//! -   **Integration:** the [`integrator`] module applies the jump impulse,
//!     gravity and the horizontal scroll.
//! -   **Collision:** the [`collision`] module holds exact box and
//!     box-triangle tests; [`simulation`] glues everything into [`tick`].
//!
//! ## Determinism
//!
//! `tick` reads no clock and draws no random numbers. Given the same inputs
//! it produces bit-identical outputs, which is what makes replays and
//! training runs reproducible.
//!
//! ```rust,ignore
//! use physics::{tick, Action, PhysParams, PlayerState};
//!
//! let params = PhysParams::default();
//! params.validate()?;
//! let mut player = PlayerState::spawn(&level);
//! let outcome = tick(&player, Action::Jump, &level, &params);
//! player = outcome.state;
//! ```

pub mod collision;
pub mod error;
pub mod integrator;
pub mod params;
pub mod player;
pub mod simulation;

pub use collision::{Aabb, Hit};
pub use error::ConfigError;
pub use params::PhysParams;
pub use player::{Action, PlayerState};
pub use simulation::{support_height, tick, TickOutcome};
