//! Buffer geometry, materials and transforms.

use glam::{EulerRot, Quat, Vec3};

/// Flat vertex buffers for a drawable.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    positions: Vec<f32>,
    colors: Option<Vec<f32>>,
    disposed: bool,
}

impl Geometry {
    /// Geometry with positions only.
    pub fn new(positions: Vec<f32>) -> Self {
        Self {
            positions,
            colors: None,
            disposed: false,
        }
    }

    /// Geometry with per-vertex colors. Both buffers hold one triple per vertex.
    pub fn with_colors(positions: Vec<f32>, colors: Vec<f32>) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        Self {
            positions,
            colors: Some(colors),
            disposed: false,
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> Option<&[f32]> {
        self.colors.as_deref()
    }

    /// Number of vertices (position triples).
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Vertex at `index`.
    pub fn vertex(&self, index: usize) -> Vec3 {
        let i = index * 3;
        Vec3::from_slice(&self.positions[i..i + 3])
    }

    /// Color of vertex `index`, if this geometry carries colors.
    pub fn color(&self, index: usize) -> Option<[f32; 3]> {
        let colors = self.colors.as_ref()?;
        let i = index * 3;
        Some([colors[i], colors[i + 1], colors[i + 2]])
    }

    /// Free the vertex buffers.
    pub fn dispose(&mut self) {
        self.positions = Vec::new();
        self.colors = None;
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Material for point clouds.
#[derive(Debug, Clone)]
pub struct PointsMaterial {
    pub size: f32,
    /// Use the geometry's per-vertex colors.
    pub vertex_colors: bool,
    pub opacity: f32,
    disposed: bool,
}

impl PointsMaterial {
    pub fn new(size: f32, vertex_colors: bool) -> Self {
        Self {
            size,
            vertex_colors,
            opacity: 1.0,
            disposed: false,
        }
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Material for line segments.
#[derive(Debug, Clone)]
pub struct LineMaterial {
    pub color: [f32; 3],
    pub opacity: f32,
    disposed: bool,
}

impl LineMaterial {
    pub fn new(color: [f32; 3], opacity: f32) -> Self {
        Self {
            color,
            opacity,
            disposed: false,
        }
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Object placement: Euler rotation (radians, XYZ order) then translation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    pub rotation: Vec3,
    pub position: Vec3,
}

impl Transform {
    /// Map a local-space point into world space.
    pub fn apply(&self, local: Vec3) -> Vec3 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        rotation * local + self.position
    }
}
