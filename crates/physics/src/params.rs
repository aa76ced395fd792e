//! # Simulation constants
//!
//! Units are pixels and seconds with y pointing up. The defaults reproduce
//! the feel of a 64 FPS game scrolling 8 px per frame, pulled down by
//! 1 px/frame² and jumping with 17.2 px/frame.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysParams {
    /// Fixed timestep in seconds.
    pub dt: f64,
    /// Constant scroll speed.
    pub horizontal_speed: f64,
    /// Vertical acceleration, negative (downward).
    pub gravity: f64,
    /// Upward velocity set by a jump.
    pub jump_impulse: f64,
    /// Terminal fall speed (magnitude).
    pub max_fall_speed: f64,
    pub player_width: f64,
    pub player_height: f64,
    /// How far below a gap's rim the player's feet may sink before the fall
    /// counts as a crash.
    pub gap_fall_threshold: f64,
    /// Half-width of the obstacle query window around the player's centre.
    pub collision_radius: f64,
}

impl Default for PhysParams {
    fn default() -> Self {
        Self {
            dt: 1.0 / 64.0,
            horizontal_speed: 512.0,
            gravity: -4096.0,
            jump_impulse: 1100.8,
            max_fall_speed: 5120.0,
            player_width: 64.0,
            player_height: 64.0,
            gap_fall_threshold: 32.0,
            collision_radius: 256.0,
        }
    }
}

impl PhysParams {
    /// Rejects constants that would make the simulation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("dt", self.dt)?;
        positive("horizontal_speed", self.horizontal_speed)?;
        positive("jump_impulse", self.jump_impulse)?;
        positive("max_fall_speed", self.max_fall_speed)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        if !self.gravity.is_finite() || self.gravity >= 0.0 {
            return Err(ConfigError::out_of_range("gravity", "finite and negative", self.gravity));
        }
        if !self.gap_fall_threshold.is_finite() || self.gap_fall_threshold < 0.0 {
            return Err(ConfigError::out_of_range(
                "gap_fall_threshold",
                "finite and non-negative",
                self.gap_fall_threshold,
            ));
        }
        // The query window must at least cover the hitbox around its centre.
        if !self.collision_radius.is_finite() || self.collision_radius < self.player_width * 0.5 {
            return Err(ConfigError::out_of_range(
                "collision_radius",
                "finite and at least half the player width",
                self.collision_radius,
            ));
        }
        Ok(())
    }

    /// Horizontal distance covered by one tick.
    #[must_use]
    pub fn step_distance(&self) -> f64 {
        self.horizontal_speed * self.dt
    }

    /// Scroll position after `ticks` ticks from `origin`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position_after(&self, origin: f64, ticks: u64) -> f64 {
        origin + ticks as f64 * self.step_distance()
    }

    /// Fewest ticks after which the scroll position from `origin` is at or
    /// past `target`. Agrees exactly with [`PhysParams::position_after`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn ticks_to_reach(&self, origin: f64, target: f64) -> u64 {
        let mut ticks = ((target - origin) / self.step_distance()).ceil().max(0.0) as u64;
        while ticks > 0 && self.position_after(origin, ticks - 1) >= target {
            ticks -= 1;
        }
        while self.position_after(origin, ticks) < target {
            ticks += 1;
        }
        ticks
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(name, "finite and positive", value))
    }
}
