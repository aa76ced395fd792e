//! Seeded procedural levels.
//!
//! All randomness comes from a `fastrand::Rng` seeded by the caller, so the
//! same seed and config always produce the same level.

use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::level::{Level, LevelDef};
use crate::obstacle::ObstacleDef;

/// Shape of generated levels. Sizes are in level units (pixels).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub length: f64,
    /// Obstacle-free run-up after the start marker.
    pub lead_in: f64,
    /// Obstacle-free stretch before the finish line.
    pub run_out: f64,
    pub min_spacing: f64,
    pub max_spacing: f64,
    /// Base size unit; widths and heights are multiples of it.
    pub tile: f64,
    /// Largest spike/wall height, in tiles.
    pub max_height_tiles: u32,
    /// Largest obstacle width, in tiles.
    pub max_width_tiles: u32,
    pub gap_depth: f64,
    /// Relative odds of spike, wall and gap.
    pub weights: [u32; 3],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 8192.0,
            lead_in: 512.0,
            run_out: 256.0,
            min_spacing: 256.0,
            max_spacing: 640.0,
            tile: 32.0,
            max_height_tiles: 2,
            max_width_tiles: 3,
            gap_depth: 512.0,
            weights: [2, 2, 1],
        }
    }
}

pub struct LevelGenerator {
    config: GeneratorConfig,
}

impl LevelGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, LevelError> {
        let c = &config;
        let positive = [c.length, c.tile, c.gap_depth, c.max_spacing];
        if positive.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(LevelError::malformed("generator sizes must be positive and finite"));
        }
        if c.min_spacing < 0.0 || c.min_spacing > c.max_spacing {
            return Err(LevelError::malformed("generator spacing range is empty"));
        }
        if c.max_height_tiles == 0 || c.max_width_tiles == 0 {
            return Err(LevelError::malformed("generator obstacles need at least one tile"));
        }
        if c.weights.iter().all(|w| *w == 0) {
            return Err(LevelError::malformed("generator weights are all zero"));
        }
        if c.lead_in < 0.0 || c.run_out < 0.0 || c.lead_in + c.run_out >= c.length {
            return Err(LevelError::malformed("generator lead-in and run-out exceed the length"));
        }
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds the level for `seed`.
    pub fn generate(&self, seed: u64) -> Result<Level, LevelError> {
        let c = &self.config;
        let mut rng = fastrand::Rng::with_seed(seed);
        let total_weight: u32 = c.weights.iter().sum();
        let limit = c.length - c.run_out;

        let mut obstacles = Vec::new();
        let mut x = c.lead_in;
        loop {
            let width = f64::from(rng.u32(1..=c.max_width_tiles)) * c.tile;
            if x + width > limit {
                break;
            }
            let height = f64::from(rng.u32(1..=c.max_height_tiles)) * c.tile;

            let mut roll = rng.u32(0..total_weight);
            let mut pick = 0;
            while roll >= c.weights[pick] {
                roll -= c.weights[pick];
                pick += 1;
            }
            obstacles.push(match pick {
                0 => ObstacleDef::Spike {
                    x,
                    width,
                    height,
                    elevation: None,
                },
                1 => ObstacleDef::Wall {
                    x,
                    width,
                    height,
                    elevation: None,
                },
                _ => ObstacleDef::Gap {
                    x,
                    width,
                    depth: c.gap_depth,
                },
            });

            x += width + c.min_spacing + rng.f64() * (c.max_spacing - c.min_spacing);
        }

        tracing::debug!(seed, obstacles = obstacles.len(), "Generated level");
        Level::from_def(LevelDef {
            start: 0.0,
            end: c.length,
            ground: Vec::new(),
            obstacles,
        })
    }
}
