use level::Level;
use serde::{Deserialize, Serialize};

use crate::collision::Aabb;
use crate::params::PhysParams;

/// The only input the agent controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    NoOp,
    Jump,
}

impl Action {
    /// Discrete action index: 0 = no-op, 1 = jump.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Action::NoOp),
            1 => Some(Action::Jump),
            _ => None,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Action::NoOp => 0,
            Action::Jump => 1,
        }
    }
}

impl From<bool> for Action {
    fn from(jump: bool) -> Self {
        if jump {
            Action::Jump
        } else {
            Action::NoOp
        }
    }
}

/// Pose and flags of the player entity.
///
/// `x` is the rear edge of the hitbox and `y` its feet, so the hitbox spans
/// `[x, x + player_width] × [y, y + player_height]`.
///
/// The scroll position is recomputed from `origin` and `steps` every tick
/// rather than accumulated, so it carries no summed rounding error.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlayerState {
    pub x: f64,
    pub y: f64,
    pub vy: f64,
    pub on_ground: bool,
    pub alive: bool,
    pub finished: bool,
    /// Horizontal position at tick zero.
    pub origin: f64,
    /// Ticks of horizontal travel since `origin`.
    pub steps: u64,
}

impl PlayerState {
    /// Standing on the terrain at the level's start marker.
    #[must_use]
    pub fn spawn(level: &Level) -> Self {
        let x = level.start();
        Self {
            on_ground: true,
            ..Self::at(x, level.ground_height(x))
        }
    }

    /// At rest and airborne at `(x, y)`, which becomes the scroll origin.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            vy: 0.0,
            on_ground: false,
            alive: true,
            finished: false,
            origin: x,
            steps: 0,
        }
    }

    /// A crashed or finished player no longer moves.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        !self.alive || self.finished
    }

    #[must_use]
    pub fn hitbox(&self, params: &PhysParams) -> Aabb {
        Aabb::new(self.x, self.y, self.x + params.player_width, self.y + params.player_height)
    }
}
