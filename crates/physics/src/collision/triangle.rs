//! Box-triangle intersection by the separating axis theorem

use super::aabb::{project_points, Aabb};

/// Whether `aabb` and the triangle `tri` have overlapping interiors.
///
/// Candidate axes are the box normals plus one normal per triangle edge.
/// Projections that merely touch count as separated.
#[must_use]
pub fn aabb_triangle_overlap(aabb: &Aabb, tri: &[[f64; 2]; 3]) -> bool {
    let normal = |a: [f64; 2], b: [f64; 2]| [a[1] - b[1], b[0] - a[0]];
    let [p, q, r] = *tri;
    let axes = [[1.0, 0.0], [0.0, 1.0], normal(p, q), normal(q, r), normal(r, p)];

    axes.iter()
        .filter(|axis| axis[0] != 0.0 || axis[1] != 0.0)
        .all(|&axis| {
            let (box_lo, box_hi) = aabb.project(axis);
            let (tri_lo, tri_hi) = project_points(tri, axis);
            box_lo < tri_hi && tri_lo < box_hi
        })
}
