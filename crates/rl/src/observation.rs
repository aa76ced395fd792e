//! # Observation encoding
//!
//! Turns a player state and the level into the flat `f32` vector the agent
//! sees. Encoding is a pure function, so identical states always give
//! identical bytes.
//!
//! Layout:
//!
//! | slot | value |
//! |------|-------|
//! | 0 | height above the terrain under the rear edge / `height_scale` |
//! | 1 | vertical velocity / jump impulse |
//! | 2 | 1 on ground, 0 airborne |
//! | 3 | fraction of the course covered |
//! | 4.. | `lookahead` obstacle blocks of [`OBSTACLE_FEATURES`] values |
//! | .. | one value per probe: 0 air, 1 solid, -1 deadly |
//!
//! An obstacle block is `[present, spike, wall, gap, distance, width, top]`.
//! Missing obstacles are all zeros.

use level::{Cell, Level, Obstacle, ObstacleKind};
use physics::{PhysParams, PlayerState};
use serde::{Deserialize, Serialize};

use crate::error::EnvError;

pub const BASE_FEATURES: usize = 4;
pub const OBSTACLE_FEATURES: usize = 7;

/// A sensor at a fixed offset from the player's rear-bottom corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Probe {
    pub dx: f64,
    pub dy: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationConfig {
    /// Number of upcoming obstacles described.
    pub lookahead: usize,
    /// Horizontal normaliser, in pixels.
    pub distance_scale: f64,
    /// Vertical normaliser, in pixels.
    pub height_scale: f64,
    pub probes: Vec<Probe>,
}

impl Default for ObservationConfig {
    fn default() -> Self {
        Self {
            lookahead: 3,
            distance_scale: 512.0,
            height_scale: 256.0,
            probes: Vec::new(),
        }
    }
}

impl ObservationConfig {
    pub fn validate(&self) -> Result<(), EnvError> {
        if !(self.distance_scale.is_finite() && self.distance_scale > 0.0) {
            return Err(EnvError::InvalidObservationConfig(
                "distance_scale must be finite and positive",
            ));
        }
        if !(self.height_scale.is_finite() && self.height_scale > 0.0) {
            return Err(EnvError::InvalidObservationConfig(
                "height_scale must be finite and positive",
            ));
        }
        if self.probes.iter().any(|p| !(p.dx.is_finite() && p.dy.is_finite())) {
            return Err(EnvError::InvalidObservationConfig("probe offsets must be finite"));
        }
        Ok(())
    }

    /// Length of every encoded observation.
    #[must_use]
    pub fn size(&self) -> usize {
        BASE_FEATURES + self.lookahead * OBSTACLE_FEATURES + self.probes.len()
    }

    #[must_use]
    pub fn encode(&self, player: &PlayerState, level: &Level, params: &PhysParams) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.size());
        self.encode_into(player, level, params, &mut out);
        out
    }

    /// Appends the observation to `out`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn encode_into(
        &self,
        player: &PlayerState,
        level: &Level,
        params: &PhysParams,
        out: &mut Vec<f32>,
    ) {
        let course = level.length() - level.start();
        out.extend_from_slice(&[
            ((player.y - level.ground_height(player.x)) / self.height_scale) as f32,
            (player.vy / params.jump_impulse) as f32,
            if player.on_ground { 1.0 } else { 0.0 },
            ((player.x - level.start()) / course) as f32,
        ]);

        let front = player.x + params.player_width;
        let mut described = 0;
        for obstacle in level.upcoming(player.x).take(self.lookahead) {
            out.extend_from_slice(&self.describe(obstacle, front, player.y));
            described += 1;
        }
        out.resize(out.len() + (self.lookahead - described) * OBSTACLE_FEATURES, 0.0);

        out.extend(self.probes.iter().map(|probe| {
            match level.classify_point(player.x + probe.dx, player.y + probe.dy) {
                Cell::Air => 0.0,
                Cell::Solid => 1.0,
                Cell::Deadly => -1.0,
            }
        }));
    }

    #[allow(clippy::cast_possible_truncation)]
    fn describe(&self, obstacle: &Obstacle, front: f64, feet: f64) -> [f32; OBSTACLE_FEATURES] {
        let kind = obstacle.kind();
        let flag = |k: ObstacleKind| if kind == k { 1.0 } else { 0.0 };
        [
            1.0,
            flag(ObstacleKind::Spike),
            flag(ObstacleKind::Wall),
            flag(ObstacleKind::Gap),
            ((obstacle.x() - front) / self.distance_scale) as f32,
            (obstacle.width() / self.distance_scale) as f32,
            ((obstacle.top() - feet) / self.height_scale) as f32,
        ]
    }
}
