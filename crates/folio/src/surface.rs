//! The full-screen surface the background layer is mounted on.

use folio_scene::{LayerId, Surface, SurfaceError};

/// Layers ordered bottom to top.
#[derive(Debug, Default)]
pub struct LayerStack {
    layers: Vec<LayerId>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lowest layer, if any.
    pub fn bottom(&self) -> Option<LayerId> {
        self.layers.first().copied()
    }
}

impl Surface for LayerStack {
    fn insert_layer(&mut self, layer: LayerId) {
        self.layers.insert(0, layer);
    }

    fn remove_layer(&mut self, layer: LayerId) -> Result<(), SurfaceError> {
        let index = self
            .layers
            .iter()
            .position(|l| *l == layer)
            .ok_or(SurfaceError::Detached(layer))?;
        self.layers.remove(index);
        Ok(())
    }
}
