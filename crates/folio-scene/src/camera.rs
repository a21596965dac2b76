//! Perspective camera looking down -z at the origin.

use folio_core::Viewport;
use glam::{Mat4, Vec3};

/// A perspective camera placed on the +z axis, looking at the origin.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    position: Vec3,
    view: Mat4,
    projection: Mat4,
}

impl PerspectiveCamera {
    /// `fov` is the vertical field of view in degrees.
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let position = Vec3::new(0.0, 0.0, 5.0);
        Self {
            fov,
            aspect,
            near,
            far,
            position,
            view: Mat4::look_at_rh(position, Vec3::ZERO, Vec3::Y),
            projection: Mat4::perspective_rh(fov.to_radians(), aspect, near, far),
        }
    }

    /// Camera matching the given viewport, falling back to a square aspect.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::new(75.0, viewport.aspect().unwrap_or(1.0), 0.1, 1000.0)
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.projection = Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far);
    }

    /// Project a world-space point to normalized device coordinates.
    ///
    /// Returns `(x, y, depth)` with x and y in [-1, 1] when visible and depth
    /// the distance in front of the camera. Points outside the near/far range
    /// yield `None`.
    pub fn project(&self, point: Vec3) -> Option<(f32, f32, f32)> {
        let view = self.view.transform_point3(point);
        let depth = -view.z;
        if depth < self.near || depth > self.far {
            return None;
        }

        let ndc = self.projection.project_point3(view);
        Some((ndc.x, ndc.y, depth))
    }
}
