//! # Physics Simulation Core
//!
//! One fixed-timestep tick of the player against a level. The tick is a pure
//! function of `(state, action, level, params)`: no clock, no randomness, no
//! allocation.

use level::{Level, Obstacle};

use crate::collision::{detect_obstacle_hit, Hit};
use crate::integrator::{advance_horizontal, apply_jump, integrate_vertical};
use crate::params::PhysParams;
use crate::player::{Action, PlayerState};

/// Slack for "was at or above this surface" comparisons.
const SURFACE_EPSILON: f64 = 1e-9;

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    pub state: PlayerState,
    /// The player intersected a hazard this tick.
    pub collided: bool,
    pub hit: Option<Hit>,
    /// Horizontal distance covered this tick.
    pub progress: f64,
    pub jumped: bool,
}

impl TickOutcome {
    fn frozen(state: PlayerState) -> Self {
        Self {
            state,
            collided: false,
            hit: None,
            progress: 0.0,
            jumped: false,
        }
    }
}

/// Advances `state` by one timestep.
///
/// Order: jump impulse, gravity and vertical integration, horizontal scroll,
/// landing, hazard tests, finish line. A frozen player (crashed or finished)
/// is returned unchanged.
#[must_use]
pub fn tick(
    state: &PlayerState,
    action: Action,
    level: &Level,
    params: &PhysParams,
) -> TickOutcome {
    if state.is_frozen() {
        return TickOutcome::frozen(*state);
    }

    let mut next = *state;
    let jumped = apply_jump(&mut next, action, params);
    integrate_vertical(&mut next, params);
    let progress = advance_horizontal(&mut next, params);

    land(&mut next, state.y, level, params);

    let hit = detect_hit(&next, level, params);
    if let Some(hit) = hit {
        next.alive = false;
        tracing::debug!(x = next.x, y = next.y, ?hit, "Player crashed");
    }
    if next.x >= level.length() {
        next.finished = true;
    }

    TickOutcome {
        state: next,
        collided: hit.is_some(),
        hit,
        progress,
        jumped,
    }
}

/// Snaps the player onto the highest surface under its footprint that it was
/// above at the start of the tick.
fn land(player: &mut PlayerState, previous_y: f64, level: &Level, params: &PhysParams) {
    match support_height(level, player.x, player.x + params.player_width, previous_y) {
        Some(surface) if player.y <= surface => {
            if !player.on_ground {
                tracing::trace!(x = player.x, surface, "Landed");
            }
            player.y = surface;
            player.vy = 0.0;
            player.on_ground = true;
        }
        _ => player.on_ground = false,
    }
}

/// Highest terrain piece or wall top under `(from, to)` that lies at or
/// below `previous_y`. Surfaces above it are faces the player runs into,
/// not floors.
#[must_use]
pub fn support_height(level: &Level, from: f64, to: f64, previous_y: f64) -> Option<f64> {
    let reachable = |h: f64| h <= previous_y + SURFACE_EPSILON;
    let terrain = level.terrain_under(from, to).filter(|&h| reachable(h));
    let centre = (from + to) * 0.5;
    let half = (to - from) * 0.5;
    let wall_tops = level
        .obstacles_near(centre, half)
        .filter(|o| matches!(o, Obstacle::Wall { .. }) && o.x() < to && from < o.end())
        .map(Obstacle::top)
        .filter(|&h| reachable(h));
    terrain.chain(wall_tops).reduce(f64::max)
}

fn detect_hit(player: &PlayerState, level: &Level, params: &PhysParams) -> Option<Hit> {
    let hitbox = player.hitbox(params);
    let obstacle_hit = level
        .obstacles_near(hitbox.centre_x(), params.collision_radius)
        .find_map(|o| detect_obstacle_hit(&hitbox, o, params.gap_fall_threshold));
    obstacle_hit.or_else(|| {
        level
            .terrain_under(hitbox.min_x, hitbox.max_x)
            .any(|h| h > player.y + SURFACE_EPSILON)
            .then_some(Hit::Terrain)
    })
}
