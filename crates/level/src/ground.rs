//! Piecewise-constant ground profile.

use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// Ground at `height` from `start` until the next segment begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundSegment {
    pub start: f64,
    pub height: f64,
}

/// Sorted ground segments. The first segment always starts at 0 and the
/// last one extends to infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundProfile {
    segments: Vec<GroundSegment>,
}

impl Default for GroundProfile {
    fn default() -> Self {
        Self::flat(0.0)
    }
}

impl GroundProfile {
    #[must_use]
    pub fn flat(height: f64) -> Self {
        Self { segments: vec![GroundSegment { start: 0.0, height }] }
    }

    /// Validates and wraps a segment table. An empty table means flat ground
    /// at height 0.
    pub fn from_segments(segments: Vec<GroundSegment>, end: f64) -> Result<Self, LevelError> {
        if segments.is_empty() {
            return Ok(Self::default());
        }
        if segments[0].start != 0.0 {
            return Err(LevelError::malformed(format!(
                "first ground segment must start at 0, found {}",
                segments[0].start
            )));
        }
        for (i, segment) in segments.iter().enumerate() {
            if !segment.start.is_finite() || !segment.height.is_finite() {
                return Err(LevelError::malformed(format!("ground segment {i} is not finite")));
            }
            if segment.start >= end && i > 0 {
                return Err(LevelError::malformed(format!(
                    "ground segment {i} starts at {} past the level end {end}",
                    segment.start
                )));
            }
        }
        if let Some(i) = segments.windows(2).position(|w| w[1].start <= w[0].start) {
            return Err(LevelError::malformed(format!(
                "ground segments {} and {} are not strictly increasing",
                i,
                i + 1
            )));
        }
        Ok(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[GroundSegment] {
        &self.segments
    }

    /// Ground height at `x`. Positions left of 0 use the first segment.
    #[must_use]
    pub fn height_at(&self, x: f64) -> f64 {
        let idx = self.segments.partition_point(|s| s.start <= x);
        self.segments[idx.saturating_sub(1)].height
    }

    /// Segment boundaries strictly inside `(from, to)`.
    pub fn breakpoints_within(&self, from: f64, to: f64) -> impl Iterator<Item = f64> + '_ {
        let lo = self.segments.partition_point(|s| s.start <= from);
        let hi = self.segments.partition_point(|s| s.start < to);
        self.segments[lo..hi.max(lo)].iter().map(|s| s.start)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn stepped() -> GroundProfile {
        GroundProfile::from_segments(
            vec![
                GroundSegment {
                    start: 0.0,
                    height: 0.0,
                },
                GroundSegment {
                    start: 100.0,
                    height: 32.0,
                },
                GroundSegment {
                    start: 200.0,
                    height: -16.0,
                },
            ],
            1000.0,
        )
        .unwrap()
    }

    #[test]
    fn height_lookup_uses_half_open_segments() {
        let ground = stepped();
        assert_eq!(ground.height_at(-5.0), 0.0);
        assert_eq!(ground.height_at(99.9), 0.0);
        assert_eq!(ground.height_at(100.0), 32.0);
        assert_eq!(ground.height_at(5000.0), -16.0);
    }

    #[test]
    fn breakpoints_exclude_interval_ends() {
        let ground = stepped();
        let inside: Vec<f64> = ground.breakpoints_within(50.0, 200.0).collect();
        assert_eq!(inside, vec![100.0]);
        assert_eq!(ground.breakpoints_within(100.0, 150.0).count(), 0);
    }

    #[test]
    fn rejects_unsorted_segments() {
        let err = GroundProfile::from_segments(
            vec![
                GroundSegment {
                    start: 0.0,
                    height: 0.0,
                },
                GroundSegment {
                    start: 50.0,
                    height: 0.0,
                },
                GroundSegment {
                    start: 50.0,
                    height: 1.0,
                },
            ],
            100.0,
        )
        .unwrap_err();
        assert!(err.is_malformed());
    }
}
