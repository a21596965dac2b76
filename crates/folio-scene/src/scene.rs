//! The drawable objects of the background scene.

use rand::Rng;

use crate::field;
use crate::geometry::{Geometry, LineMaterial, PointsMaterial, Transform};
use crate::settings::SceneSettings;

/// A point cloud.
#[derive(Debug, Clone)]
pub struct Points {
    pub geometry: Geometry,
    pub material: PointsMaterial,
    pub transform: Transform,
}

/// Independent line segments; vertices are consumed in pairs.
#[derive(Debug, Clone)]
pub struct LineSegments {
    pub geometry: Geometry,
    pub material: LineMaterial,
    pub transform: Transform,
}

impl LineSegments {
    /// Number of complete segments.
    pub fn segment_count(&self) -> usize {
        self.geometry.vertex_count() / 2
    }
}

/// The particle field and line field drawn as the background.
#[derive(Debug, Clone)]
pub struct Scene {
    pub particles: Points,
    pub lines: LineSegments,
}

impl Scene {
    /// Build both fields from `rng` according to `settings`.
    pub fn generate<R: Rng + ?Sized>(settings: &SceneSettings, line_color: [f32; 3], rng: &mut R) -> Self {
        let half = settings.half_extent();
        let particles = Points {
            geometry: field::particle_field(settings.particle_count, half, rng),
            material: PointsMaterial::new(settings.particle_size, true),
            transform: Transform::default(),
        };
        let lines = LineSegments {
            geometry: field::line_field(settings.line_vertex_count, half, rng),
            material: LineMaterial::new(line_color, settings.line_opacity),
            transform: Transform::default(),
        };
        Self { particles, lines }
    }

    /// Release both geometries and both materials.
    pub fn dispose(&mut self) {
        self.particles.geometry.dispose();
        self.particles.material.dispose();
        self.lines.geometry.dispose();
        self.lines.material.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.particles.geometry.is_disposed()
            && self.particles.material.is_disposed()
            && self.lines.geometry.is_disposed()
            && self.lines.material.is_disposed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_follows_settings() {
        let settings = SceneSettings {
            particle_count: 10,
            line_vertex_count: 7,
            ..Default::default()
        };
        let scene = Scene::generate(&settings, [0.2, 0.4, 0.6], &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(scene.particles.geometry.vertex_count(), 10);
        assert!(scene.particles.material.vertex_colors);
        assert_eq!(scene.lines.geometry.vertex_count(), 7);
        // A trailing unpaired vertex does not form a segment.
        assert_eq!(scene.lines.segment_count(), 3);
        assert_eq!(scene.lines.material.color, [0.2, 0.4, 0.6]);
        assert_eq!(scene.lines.material.opacity, settings.line_opacity);
    }

    #[test]
    fn test_generate_with_unbounded_spread() {
        for spread in [f32::INFINITY, f32::NAN] {
            let settings = SceneSettings {
                particle_count: 3,
                line_vertex_count: 4,
                spread,
                ..Default::default()
            };
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            let scene = Scene::generate(&settings, [1.0, 1.0, 1.0], &mut rng);
            assert!(scene.particles.geometry.positions().iter().all(|v| *v == 0.0));
            assert!(scene.lines.geometry.positions().iter().all(|v| *v == 0.0));
        }
    }

    #[test]
    fn test_dispose_releases_geometries_and_materials() {
        let mut scene = Scene::generate(
            &SceneSettings::default(),
            [1.0, 1.0, 1.0],
            &mut ChaCha8Rng::seed_from_u64(9),
        );
        assert!(!scene.is_disposed());
        scene.dispose();
        assert!(scene.is_disposed());
        assert_eq!(scene.particles.geometry.vertex_count(), 0);
        assert_eq!(scene.lines.geometry.vertex_count(), 0);
    }
}
