//! Animated 3D background for the folio portfolio.
//!
//! A [`SceneLifecycle`] owns a randomly generated particle field and line
//! field, spins them once per frame, lets them react to the pointer and draws
//! them through a [`Renderer`]. The environment is injected through the
//! [`Host`] and [`Surface`] traits so the same lifecycle runs in the terminal
//! and under test.

mod camera;
mod canvas;
mod chars;
mod field;
mod geometry;
mod host;
mod lifecycle;
mod renderer;
mod scene;
mod settings;
mod surface;

#[cfg(test)]
mod testing;

pub use glam::Vec3;

pub use camera::PerspectiveCamera;
pub use canvas::{CanvasRenderer, LayerView};
pub use geometry::{Geometry, LineMaterial, PointsMaterial, Transform};
pub use host::{EventKind, FrameHandle, Host, ListenerId};
pub use lifecycle::SceneLifecycle;
pub use renderer::Renderer;
pub use scene::{LineSegments, Points, Scene};
pub use settings::SceneSettings;
pub use surface::{LayerId, Surface, SurfaceError};
