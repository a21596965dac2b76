//! The UI node a renderer's output is mounted into.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

/// Identifies a renderer output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

impl LayerId {
    /// Allocate a process-unique layer id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        LayerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Errors raised when manipulating surface layers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// The layer was already removed, typically because the host unmounted
    /// the surface first.
    #[error("layer {0:?} is not attached to the surface")]
    Detached(LayerId),
}

/// A mounted UI node that can hold renderer output layers.
pub trait Surface {
    /// Insert a layer at the lowest stacking order.
    fn insert_layer(&mut self, layer: LayerId);

    /// Remove a previously inserted layer.
    fn remove_layer(&mut self, layer: LayerId) -> Result<(), SurfaceError>;
}
