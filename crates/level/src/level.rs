//! # Level Model
//!
//! A [`Level`] is built once from a [`LevelDef`] (usually parsed from JSON),
//! validated, and is read-only afterwards. Episodes share it behind an
//! `Arc`, so every query here takes `&self`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::ground::{GroundProfile, GroundSegment};
use crate::obstacle::{Obstacle, ObstacleDef};

/// Level as written on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Spawn position of the player.
    pub start: f64,
    /// Finish line. Also the level length.
    pub end: f64,
    #[serde(default)]
    pub ground: Vec<GroundSegment>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleDef>,
}

/// What occupies a point of the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Air,
    Solid,
    Deadly,
}

#[derive(Debug, Clone)]
pub struct Level {
    start: f64,
    length: f64,
    ground: GroundProfile,
    obstacles: Vec<Obstacle>,
    // Widest obstacle, bounds the backwards reach of the binary searches.
    max_width: f64,
}

impl Level {
    /// Parses and validates a JSON level description.
    pub fn load(source: &str) -> Result<Self, LevelError> {
        let def: LevelDef = serde_json::from_str(source)?;
        Self::from_def(def)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let source = fs::read_to_string(path.as_ref())?;
        let level = Self::load(&source)?;
        tracing::info!(
            path = %path.as_ref().display(),
            length = level.length,
            obstacles = level.obstacles.len(),
            "Loaded level"
        );
        Ok(level)
    }

    /// Validates a definition and resolves obstacle elevations against the
    /// ground profile.
    pub fn from_def(def: LevelDef) -> Result<Self, LevelError> {
        let LevelDef {
            start,
            end,
            ground,
            obstacles,
        } = def;

        if !start.is_finite() || !end.is_finite() {
            return Err(LevelError::malformed("start and end markers must be finite"));
        }
        if end <= 0.0 {
            return Err(LevelError::malformed(format!(
                "level length must be positive, found {end}"
            )));
        }
        if start < 0.0 || start >= end {
            return Err(LevelError::malformed(format!(
                "start marker {start} must lie in [0, {end})"
            )));
        }

        let ground = GroundProfile::from_segments(ground, end)?;

        let mut resolved = Vec::with_capacity(obstacles.len());
        let mut previous_x = f64::NEG_INFINITY;
        for (i, def) in obstacles.iter().enumerate() {
            let obstacle = resolve_obstacle(i, def, &ground, end)?;
            if obstacle.x() < previous_x {
                return Err(LevelError::malformed(format!(
                    "obstacle {i} at x={} is out of order (previous at x={previous_x})",
                    obstacle.x()
                )));
            }
            previous_x = obstacle.x();
            resolved.push(obstacle);
        }
        check_overlaps(&resolved)?;

        let max_width = resolved.iter().map(Obstacle::width).fold(0.0, f64::max);
        Ok(Self {
            start,
            length: end,
            ground,
            obstacles: resolved,
            max_width,
        })
    }

    /// Inverse of [`Level::from_def`], with elevations written out.
    #[must_use]
    pub fn to_def(&self) -> LevelDef {
        LevelDef {
            start: self.start,
            end: self.length,
            ground: self.ground.segments().to_vec(),
            obstacles: self.obstacles.iter().map(ObstacleDef::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(&self.to_def())?)
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[must_use]
    pub fn ground(&self) -> &GroundProfile {
        &self.ground
    }

    /// Obstacles whose horizontal extent touches
    /// `[position - radius, position + radius]`, in level order.
    ///
    /// Both ends of the candidate window are found by binary search; only
    /// obstacles starting within `max_width` before the window are examined
    /// individually.
    pub fn obstacles_near(
        &self,
        position: f64,
        radius: f64,
    ) -> impl Iterator<Item = &Obstacle> + '_ {
        let from = position - radius;
        let to = position + radius;
        let lo = self.obstacles.partition_point(|o| o.x() < from - self.max_width);
        let hi = self.obstacles.partition_point(|o| o.x() <= to);
        self.obstacles[lo..hi.max(lo)]
            .iter()
            .filter(move |o| o.touches_span(from, to))
    }

    /// Obstacles not yet fully passed at `x` (right edge beyond `x`), in
    /// level order.
    pub fn upcoming(&self, x: f64) -> impl Iterator<Item = &Obstacle> + '_ {
        let lo = self.obstacles.partition_point(|o| o.x() + self.max_width <= x);
        self.obstacles[lo..].iter().filter(move |o| o.end() > x)
    }

    /// Terrain surface height at `x`: the ground profile, lowered to the pit
    /// floor inside gaps.
    #[must_use]
    pub fn ground_height(&self, x: f64) -> f64 {
        let gap_floor = self.obstacles_near(x, 0.0).find_map(|o| match *o {
            Obstacle::Gap { x: gx, width, .. } if x >= gx && x < gx + width => Some(o.bottom()),
            _ => None,
        });
        gap_floor.unwrap_or_else(|| self.ground.height_at(x))
    }

    /// Every distinct terrain height over the open span `(from, to)`.
    ///
    /// The terrain is piecewise constant, so sampling the left end plus
    /// every ground step and gap edge inside the span covers all pieces.
    pub fn terrain_under(&self, from: f64, to: f64) -> impl Iterator<Item = f64> + '_ {
        let mid = (from + to) * 0.5;
        let half = (to - from) * 0.5;
        let gap_edges = self
            .obstacles_near(mid, half)
            .filter(|o| matches!(o, Obstacle::Gap { .. }))
            .flat_map(|o| [o.x(), o.end()])
            .filter(move |&edge| edge > from && edge < to);
        std::iter::once(from)
            .chain(self.ground.breakpoints_within(from, to))
            .chain(gap_edges)
            .map(move |x| self.ground_height(x))
    }

    /// Classifies a single point. Used by sensor probes.
    #[must_use]
    pub fn classify_point(&self, x: f64, y: f64) -> Cell {
        let mut cell = if y < self.ground_height(x) { Cell::Solid } else { Cell::Air };
        for obstacle in self.obstacles_near(x, 0.0) {
            if !obstacle.contains_point(x, y) {
                continue;
            }
            match obstacle {
                Obstacle::Spike { .. } => return Cell::Deadly,
                Obstacle::Wall { .. } => cell = Cell::Solid,
                Obstacle::Gap { .. } => {}
            }
        }
        cell
    }
}

fn resolve_obstacle(
    index: usize,
    def: &ObstacleDef,
    ground: &GroundProfile,
    end: f64,
) -> Result<Obstacle, LevelError> {
    let (x, width, vertical) = match *def {
        ObstacleDef::Spike {
            x, width, height, ..
        }
        | ObstacleDef::Wall {
            x, width, height, ..
        } => {
            (x, width, height)
        }
        ObstacleDef::Gap { x, width, depth } => (x, width, depth),
    };
    if !x.is_finite() || !width.is_finite() || !vertical.is_finite() {
        return Err(LevelError::malformed(format!("obstacle {index} has non-finite geometry")));
    }
    if width <= 0.0 || vertical <= 0.0 {
        return Err(LevelError::malformed(format!(
            "obstacle {index} must have a positive width and height/depth"
        )));
    }
    if x < 0.0 || x + width > end {
        return Err(LevelError::malformed(format!(
            "obstacle {index} spans [{x}, {}] outside the level [0, {end}]",
            x + width
        )));
    }

    let elevation = |declared: Option<f64>| -> Result<f64, LevelError> {
        let base = declared.unwrap_or_else(|| ground.height_at(x));
        if base.is_finite() {
            Ok(base)
        } else {
            Err(LevelError::malformed(format!("obstacle {index} has a non-finite elevation")))
        }
    };

    Ok(match *def {
        ObstacleDef::Spike {
            height,
            elevation: declared,
            ..
        } => {
            Obstacle::Spike {
                x,
                width,
                height,
                base: elevation(declared)?,
            }
        }
        ObstacleDef::Wall {
            height,
            elevation: declared,
            ..
        } => {
            Obstacle::Wall {
                x,
                width,
                height,
                base: elevation(declared)?,
            }
        }
        ObstacleDef::Gap { depth, .. } => {
            if ground.breakpoints_within(x, x + width).next().is_some() {
                return Err(LevelError::malformed(format!(
                    "gap {index} straddles a ground step"
                )));
            }
            Obstacle::Gap {
                x,
                width,
                depth,
                rim: ground.height_at(x),
            }
        }
    })
}

/// Horizontal overlap is only allowed between spikes and walls stacked on
/// top of each other.
fn check_overlaps(obstacles: &[Obstacle]) -> Result<(), LevelError> {
    let mut open: Vec<usize> = Vec::new();
    for (i, obstacle) in obstacles.iter().enumerate() {
        open.retain(|&j| obstacles[j].end() > obstacle.x());
        for &j in &open {
            let other = &obstacles[j];
            if !other.overlaps_horizontally(obstacle) {
                continue;
            }
            let stacked = match (other, obstacle) {
                (Obstacle::Gap { .. }, _) | (_, Obstacle::Gap { .. }) => false,
                _ => other.top() <= obstacle.bottom() || obstacle.top() <= other.bottom(),
            };
            if !stacked {
                return Err(LevelError::malformed(format!(
                    "obstacles {j} and {i} overlap without being stacked"
                )));
            }
        }
        open.push(i);
    }
    Ok(())
}
