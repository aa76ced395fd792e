#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss, clippy::missing_errors_doc)]
//! # Level Model
//!
//! Immutable description of a side-scrolling level: a piecewise-constant
//! ground profile, a sorted list of [`Obstacle`]s and the start/finish
//! markers.
//!
//! Levels come from three places:
//!
//! -   **JSON level files** via [`Level::load`] / [`Level::from_path`].
//! -   **Tile grids** from the original level editor via
//!     [`Level::from_tilemap_json`].
//! -   **Procedural generation** via [`LevelGenerator`], seeded explicitly.
//!
//! Whatever the source, every level passes through [`Level::from_def`], which
//! rejects bad ordering, bounds and markers with [`LevelError::Malformed`].
//!
//! ```rust,ignore
//! use level::Level;
//!
//! let level = Level::load(r#"{ "start": 0, "end": 1024,
//!     "obstacles": [{ "kind": "spike", "x": 512, "width": 32, "height": 32 }] }"#)?;
//! assert_eq!(level.obstacles_near(500.0, 16.0).count(), 1);
//! ```

pub mod error;
pub mod generator;
pub mod ground;
pub mod level;
pub mod obstacle;
mod tilemap;

pub use error::LevelError;
pub use generator::{GeneratorConfig, LevelGenerator};
pub use ground::{GroundProfile, GroundSegment};
pub use level::{Cell, Level, LevelDef};
pub use obstacle::{Obstacle, ObstacleDef, ObstacleKind};
