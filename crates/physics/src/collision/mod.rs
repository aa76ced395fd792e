//! # Collision Detection
//!
//! Exact, allocation-free intersection tests between the player hitbox and
//! level geometry. Touching shapes do not collide: every test uses strict
//! inequalities so that standing on a wall top or brushing a spike's edge
//! is safe.

mod aabb;
mod narrow_phase;
mod triangle;

pub use aabb::Aabb;
pub use narrow_phase::{detect_obstacle_hit, Hit};
pub use triangle::aabb_triangle_overlap;
