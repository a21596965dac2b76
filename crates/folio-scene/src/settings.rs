//! Tunable parameters for the background scene.

use serde::{Deserialize, Serialize};

/// Parameters controlling field generation and per-frame motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Number of particles in the particle field.
    pub particle_count: usize,
    /// Number of vertices in the line field; consecutive pairs form segments.
    pub line_vertex_count: usize,
    /// Edge length of the cube that positions are drawn from, centered on the origin.
    pub spread: f32,
    /// Particle field y rotation added per frame, in radians.
    pub particle_spin: f32,
    /// Line field x rotation added per frame, in radians.
    pub line_spin: f32,
    /// Pointer-to-offset factor added to the particle position every frame.
    pub drift_scale: f32,
    /// Pointer-to-position factor for the line field.
    pub follow_scale: f32,
    /// Rendered particle size.
    pub particle_size: f32,
    /// Line field opacity.
    pub line_opacity: f32,
    /// Fixed seed for field generation; `None` uses system randomness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Target frame rate of the host scheduler.
    pub fps: u32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            particle_count: 1500,
            line_vertex_count: 2000,
            spread: 10.0,
            particle_spin: 0.001,
            line_spin: 0.0005,
            drift_scale: 0.01,
            follow_scale: 0.5,
            particle_size: 0.005,
            line_opacity: 0.1,
            seed: None,
            fps: 30,
        }
    }
}

impl SceneSettings {
    /// Half of [`spread`](Self::spread): the bound of every generated coordinate.
    pub fn half_extent(&self) -> f32 {
        self.spread / 2.0
    }
}
