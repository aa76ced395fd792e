//! # Physics Integration
//!
//! Semi-implicit Euler integration of the player's vertical motion and the
//! constant horizontal scroll.

use crate::params::PhysParams;
use crate::player::{Action, PlayerState};

/// Applies the jump impulse if the player is standing on something.
/// Returns whether a jump happened.
pub fn apply_jump(player: &mut PlayerState, action: Action, params: &PhysParams) -> bool {
    let jumped = action == Action::Jump && player.on_ground;
    if jumped {
        player.vy = params.jump_impulse;
    }
    jumped
}

/// Gravity, terminal velocity, then position.
pub fn integrate_vertical(player: &mut PlayerState, params: &PhysParams) {
    player.vy += params.gravity * params.dt;
    player.vy = player.vy.max(-params.max_fall_speed);
    player.y += player.vy * params.dt;
}

/// Advances the scroll by one tick and returns the nominal distance covered.
pub fn advance_horizontal(player: &mut PlayerState, params: &PhysParams) -> f64 {
    player.steps += 1;
    player.x = params.position_after(player.origin, player.steps);
    params.step_distance()
}
