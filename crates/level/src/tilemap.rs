//! Import of tile-grid levels.
//!
//! Tile grids store one entry per cell, keyed `"col;row"`, with rows growing
//! downward:
//!
//! ```json
//! { "tileSize": 64, "tilemap": { "0;10": { "type": "brick", "pos": [0, 10] } } }
//! ```
//!
//! The lowest brick row is the floor. Floor columns without a brick become
//! gaps, bricks above the floor become walls (vertically contiguous bricks
//! merge into one wall) and spike tiles become spikes. Elevations are
//! measured from the top of the floor, which sits at height 0.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::LevelError;
use crate::level::{Level, LevelDef};
use crate::obstacle::ObstacleDef;

/// Pit depth given to floor holes, in tiles.
const GAP_DEPTH_TILES: f64 = 8.0;

#[derive(Deserialize)]
struct TilemapFile {
    #[serde(rename = "tileSize")]
    tile_size: f64,
    tilemap: HashMap<String, Tile>,
}

#[derive(Deserialize)]
struct Tile {
    #[serde(rename = "type")]
    kind: String,
    pos: [i64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileKind {
    Brick,
    Spike,
}

impl Level {
    /// Converts a tile-grid level into a [`Level`].
    pub fn from_tilemap_json(source: &str) -> Result<Self, LevelError> {
        let file: TilemapFile = serde_json::from_str(source)?;
        let def = tilemap_to_def(file)?;
        Self::from_def(def)
    }
}

fn tilemap_to_def(file: TilemapFile) -> Result<LevelDef, LevelError> {
    let ts = file.tile_size;
    if !ts.is_finite() || ts <= 0.0 {
        return Err(LevelError::malformed(format!("tile size must be positive, found {ts}")));
    }

    // (col, row) -> kind, ordered so the conversion is deterministic.
    let mut cells: BTreeMap<(i64, i64), TileKind> = BTreeMap::new();
    for (key, tile) in file.tilemap {
        let kind = match tile.kind.as_str() {
            "brick" => TileKind::Brick,
            "spike" => TileKind::Spike,
            other => {
                return Err(LevelError::malformed(format!("unknown tile type `{other}` at {key}")))
            }
        };
        cells.insert((tile.pos[0], tile.pos[1]), kind);
    }

    let floor_row = cells
        .iter()
        .filter(|(_, kind)| **kind == TileKind::Brick)
        .map(|((_, row), _)| *row)
        .max()
        .ok_or_else(|| LevelError::malformed("tilemap has no brick to serve as floor"))?;
    let min_col = cells.keys().map(|(col, _)| *col).min().unwrap_or(0);
    let max_col = cells.keys().map(|(col, _)| *col).max().unwrap_or(0);

    let x_of = |col: i64| (col - min_col) as f64 * ts;
    // Base of the tile sitting `floor_row - row` rows above the floor.
    let elevation_of = |row: i64| (floor_row - 1 - row) as f64 * ts;

    if cells
        .iter()
        .any(|((_, row), kind)| *kind == TileKind::Spike && *row >= floor_row)
    {
        return Err(LevelError::malformed("spike tile at or below the floor row"));
    }

    let mut obstacles = Vec::new();
    let gap = |first: i64, past: i64| ObstacleDef::Gap {
        x: x_of(first),
        width: (past - first) as f64 * ts,
        depth: GAP_DEPTH_TILES * ts,
    };

    // Floor holes, merged into runs.
    let mut hole_start: Option<i64> = None;
    for col in min_col..=max_col {
        let solid = cells.get(&(col, floor_row)) == Some(&TileKind::Brick);
        match (solid, hole_start) {
            (false, None) => hole_start = Some(col),
            (true, Some(first)) => {
                obstacles.push(gap(first, col));
                hole_start = None;
            }
            _ => {}
        }
    }
    if let Some(first) = hole_start {
        obstacles.push(gap(first, max_col + 1));
    }

    // Bricks and spikes above the floor, column by column, bottom to top.
    for col in min_col..=max_col {
        let column: Vec<(i64, TileKind)> = cells
            .range((col, i64::MIN)..(col, floor_row))
            .rev()
            .map(|((_, row), kind)| (*row, *kind))
            .collect();

        let mut run: Option<(i64, i64)> = None; // (bottom row, top row)
        for (row, kind) in column {
            match kind {
                TileKind::Brick => {
                    run = match run {
                        Some((bottom, top)) if top - 1 == row => Some((bottom, row)),
                        Some(finished) => {
                            obstacles.push(wall_from_run(x_of(col), ts, finished, elevation_of));
                            Some((row, row))
                        }
                        None => Some((row, row)),
                    };
                }
                TileKind::Spike => {
                    if let Some(finished) = run.take() {
                        obstacles.push(wall_from_run(x_of(col), ts, finished, elevation_of));
                    }
                    obstacles.push(ObstacleDef::Spike {
                        x: x_of(col),
                        width: ts,
                        height: ts,
                        elevation: Some(elevation_of(row)),
                    });
                }
            }
        }
        if let Some(finished) = run {
            obstacles.push(wall_from_run(x_of(col), ts, finished, elevation_of));
        }
    }

    obstacles.sort_by(|a, b| a.x().total_cmp(&b.x()));

    Ok(LevelDef {
        start: 0.0,
        end: x_of(max_col + 1),
        ground: Vec::new(),
        obstacles,
    })
}

fn wall_from_run(
    x: f64,
    ts: f64,
    (bottom, top): (i64, i64),
    elevation_of: impl Fn(i64) -> f64,
) -> ObstacleDef {
    ObstacleDef::Wall {
        x,
        width: ts,
        height: (bottom - top + 1) as f64 * ts,
        elevation: Some(elevation_of(bottom)),
    }
}
