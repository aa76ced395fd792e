//! Player versus obstacle tests

use level::Obstacle;

use super::aabb::Aabb;
use super::triangle::aabb_triangle_overlap;

/// What ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hit {
    Spike,
    Wall,
    /// Fell too deep into a gap.
    Gap,
    /// Ran into a ground step higher than the player's feet.
    Terrain,
}

/// Tests the hitbox against one obstacle.
///
/// Walls and spikes kill on any interior overlap. A gap kills once the
/// hitbox overlaps it horizontally with the feet more than
/// `gap_fall_threshold` below the rim.
#[must_use]
pub fn detect_obstacle_hit(
    hitbox: &Aabb,
    obstacle: &Obstacle,
    gap_fall_threshold: f64,
) -> Option<Hit> {
    match *obstacle {
        Obstacle::Wall {
            x,
            width,
            height,
            base,
        } => {
            hitbox.overlaps(&Aabb::new(x, base, x + width, base + height)).then_some(Hit::Wall)
        }
        Obstacle::Spike {
            x,
            width,
            height,
            base,
        } => {
            let tri = [[x, base], [x + width, base], [x + width * 0.5, base + height]];
            aabb_triangle_overlap(hitbox, &tri).then_some(Hit::Spike)
        }
        Obstacle::Gap { x, width, rim, .. } => {
            (hitbox.overlaps_span(x, x + width) && hitbox.min_y < rim - gap_fall_threshold)
                .then_some(Hit::Gap)
        }
    }
}
