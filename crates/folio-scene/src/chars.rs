//! Glyphs used by the canvas renderer.

/// Particle glyphs from nearest to farthest.
pub const PARTICLE_CHARS: &[char] = &['✦', '*', '+', '·', '.'];

/// Glyph for cells covered by a line segment.
pub const LINE_CHAR: char = '·';
