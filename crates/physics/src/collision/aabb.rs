//! Axis-aligned bounding boxes

/// Axis-aligned box, `min` corner bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    #[must_use]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn centre_x(&self) -> f64 {
        (self.min_x + self.max_x) * 0.5
    }

    /// Strict overlap: boxes sharing only an edge do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Strict overlap with the horizontal span `[from, to]`.
    #[must_use]
    pub fn overlaps_span(&self, from: f64, to: f64) -> bool {
        self.min_x < to && from < self.max_x
    }

    /// Projection onto `axis` as `(min, max)`.
    pub(crate) fn project(&self, axis: [f64; 2]) -> (f64, f64) {
        let corners = [
            [self.min_x, self.min_y],
            [self.max_x, self.min_y],
            [self.max_x, self.max_y],
            [self.min_x, self.max_y],
        ];
        project_points(&corners, axis)
    }
}

pub(crate) fn project_points(points: &[[f64; 2]], axis: [f64; 2]) -> (f64, f64) {
    points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        let d = p[0] * axis[0] + p[1] * axis[1];
        (lo.min(d), hi.max(d))
    })
}
