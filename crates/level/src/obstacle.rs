//! # Obstacles
//!
//! Static level hazards. The set of obstacle kinds is closed: every consumer
//! matches exhaustively on [`Obstacle`], so adding a kind is a compile error
//! everywhere it needs handling.

use serde::{Deserialize, Serialize};

/// Discriminant of an [`Obstacle`], handy for observation encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Spike,
    Wall,
    Gap,
}

/// A resolved, immutable obstacle.
///
/// Horizontal extents are half-open: an obstacle covers `[x, x + width)`.
/// Vertical placement is absolute (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Obstacle {
    /// Deadly isosceles triangle standing on `base`, apex at the top centre.
    Spike {
        x: f64,
        width: f64,
        height: f64,
        base: f64,
    },
    /// Solid block. Its top can be stood on; its sides and bottom kill.
    Wall {
        x: f64,
        width: f64,
        height: f64,
        base: f64,
    },
    /// Hole in the ground. `rim` is the ground height at the edges, the pit
    /// floor sits `depth` below it.
    Gap {
        x: f64,
        width: f64,
        depth: f64,
        rim: f64,
    },
}

impl Obstacle {
    #[must_use]
    pub fn kind(&self) -> ObstacleKind {
        match self {
            Obstacle::Spike { .. } => ObstacleKind::Spike,
            Obstacle::Wall { .. } => ObstacleKind::Wall,
            Obstacle::Gap { .. } => ObstacleKind::Gap,
        }
    }

    /// Left edge.
    #[must_use]
    pub fn x(&self) -> f64 {
        match *self {
            Obstacle::Spike { x, .. } | Obstacle::Wall { x, .. } | Obstacle::Gap { x, .. } => x,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        match *self {
            Obstacle::Spike { width, .. }
            | Obstacle::Wall { width, .. }
            | Obstacle::Gap { width, .. } => width,
        }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub fn end(&self) -> f64 {
        self.x() + self.width()
    }

    /// Lowest point of the obstacle. For gaps this is the pit floor.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        match *self {
            Obstacle::Spike { base, .. } | Obstacle::Wall { base, .. } => base,
            Obstacle::Gap { rim, depth, .. } => rim - depth,
        }
    }

    /// Highest point of the obstacle. For gaps this is the rim.
    #[must_use]
    pub fn top(&self) -> f64 {
        match *self {
            Obstacle::Spike { base, height, .. } | Obstacle::Wall { base, height, .. } => {
                base + height
            }
            Obstacle::Gap { rim, .. } => rim,
        }
    }

    /// Vertical size: height for spikes and walls, depth for gaps.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.top() - self.bottom()
    }

    /// Whether the closed interval `[from, to]` touches this obstacle's
    /// horizontal extent.
    #[must_use]
    pub fn touches_span(&self, from: f64, to: f64) -> bool {
        self.x() <= to && self.end() >= from
    }

    /// Strict horizontal overlap with another obstacle (shared edges do not
    /// count).
    #[must_use]
    pub fn overlaps_horizontally(&self, other: &Obstacle) -> bool {
        self.x() < other.end() && other.x() < self.end()
    }

    /// Whether `(px, py)` lies strictly inside the obstacle's solid shape.
    /// Gaps have no solid shape.
    #[must_use]
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        match *self {
            Obstacle::Wall {
                x,
                width,
                height,
                base,
            } => {
                px > x && px < x + width && py > base && py < base + height
            }
            Obstacle::Spike {
                x,
                width,
                height,
                base,
            } => {
                if px <= x || px >= x + width || py <= base {
                    return false;
                }
                // Height of the triangle's silhouette at px.
                let half = width * 0.5;
                let from_centre = (px - (x + half)).abs();
                let surface = base + height * (1.0 - from_centre / half);
                py < surface
            }
            Obstacle::Gap { .. } => false,
        }
    }
}

/// Obstacle as written in a level file, before elevations are resolved
/// against the ground profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ObstacleDef {
    Spike {
        x: f64,
        width: f64,
        height: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        elevation: Option<f64>,
    },
    Wall {
        x: f64,
        width: f64,
        height: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        elevation: Option<f64>,
    },
    Gap { x: f64, width: f64, depth: f64 },
}

impl ObstacleDef {
    #[must_use]
    pub fn x(&self) -> f64 {
        match *self {
            ObstacleDef::Spike { x, .. }
            | ObstacleDef::Wall { x, .. }
            | ObstacleDef::Gap { x, .. } => x,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ObstacleKind {
        match self {
            ObstacleDef::Spike { .. } => ObstacleKind::Spike,
            ObstacleDef::Wall { .. } => ObstacleKind::Wall,
            ObstacleDef::Gap { .. } => ObstacleKind::Gap,
        }
    }
}

impl From<&Obstacle> for ObstacleDef {
    fn from(obstacle: &Obstacle) -> Self {
        match *obstacle {
            Obstacle::Spike {
                x,
                width,
                height,
                base,
            } => ObstacleDef::Spike {
                x,
                width,
                height,
                elevation: Some(base),
            },
            Obstacle::Wall {
                x,
                width,
                height,
                base,
            } => ObstacleDef::Wall {
                x,
                width,
                height,
                elevation: Some(base),
            },
            Obstacle::Gap {
                x, width, depth, ..
            } => ObstacleDef::Gap { x, width, depth },
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn spike_silhouette_is_a_triangle() {
        let spike = Obstacle::Spike {
            x: 0.0,
            width: 64.0,
            height: 64.0,
            base: 0.0,
        };
        assert!(spike.contains_point(32.0, 63.0));
        assert!(!spike.contains_point(4.0, 32.0));
        assert!(spike.contains_point(20.0, 32.0));
        assert!(!spike.contains_point(32.0, 0.0));
    }

    #[test]
    fn shared_edges_do_not_overlap() {
        let a = Obstacle::Wall {
            x: 0.0,
            width: 64.0,
            height: 64.0,
            base: 0.0,
        };
        let b = Obstacle::Wall {
            x: 64.0,
            width: 64.0,
            height: 64.0,
            base: 0.0,
        };
        assert!(!a.overlaps_horizontally(&b));
        assert!(a.touches_span(64.0, 70.0));
    }
}
