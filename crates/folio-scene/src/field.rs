//! Random particle and line field generation.

use rand::Rng;

use crate::geometry::Geometry;

/// Generate `count` particles with positions uniform in `[-half, half)` on
/// each axis and colors uniform in `[0, 1)`.
pub fn particle_field<R: Rng + ?Sized>(count: usize, half: f32, rng: &mut R) -> Geometry {
    let mut positions = Vec::with_capacity(count * 3);
    let mut colors = Vec::with_capacity(count * 3);
    for _ in 0..count {
        for _ in 0..3 {
            positions.push(coordinate(half, rng));
            colors.push(rng.gen_range(0.0..1.0));
        }
    }
    Geometry::with_colors(positions, colors)
}

/// Generate `vertex_count` line vertices uniform in `[-half, half)` on each
/// axis. Vertices `2k` and `2k + 1` form a segment.
pub fn line_field<R: Rng + ?Sized>(vertex_count: usize, half: f32, rng: &mut R) -> Geometry {
    let positions = (0..vertex_count * 3).map(|_| coordinate(half, rng)).collect();
    Geometry::new(positions)
}

/// Extents that are non-positive, or whose full width is not finite, collapse
/// to the origin.
fn coordinate<R: Rng + ?Sized>(half: f32, rng: &mut R) -> f32 {
    if !(half * 2.0).is_finite() || half <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-half..half)
}
