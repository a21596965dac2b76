//! Renderer capability.

use folio_core::Viewport;

use crate::camera::PerspectiveCamera;
use crate::scene::Scene;
use crate::surface::LayerId;

/// Draws a [`Scene`] from a camera into an output layer.
pub trait Renderer {
    /// The layer this renderer draws into.
    fn output(&self) -> LayerId;

    /// Resize the output.
    fn set_size(&mut self, viewport: Viewport);

    /// Current output size.
    fn size(&self) -> Viewport;

    /// Draw one frame.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera);

    /// Release output resources. Later renders are ignored.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}
