//! Test doubles for the host, surface and renderer capabilities.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_core::Viewport;

use crate::camera::PerspectiveCamera;
use crate::host::{EventKind, FrameHandle, Host, ListenerId};
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::surface::{LayerId, Surface, SurfaceError};

/// Host that schedules frames on demand; tests deliver them with `take_frame`.
#[derive(Debug, Default)]
pub struct MockHost {
    pub viewport: Viewport,
    listeners: HashMap<ListenerId, EventKind>,
    next_id: u64,
    pending: Option<FrameHandle>,
    pub unlisten_calls: usize,
}

impl MockHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.listeners.values().any(|k| *k == kind)
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Deliver the pending frame, if any.
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl Host for MockHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn listen(&mut self, kind: EventKind) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.insert(id, kind);
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.unlisten_calls += 1;
        self.listeners.remove(&id);
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

/// Surface recording inserted layers; removing an absent layer fails.
#[derive(Debug, Default)]
pub struct MockSurface {
    pub layers: Vec<LayerId>,
}

impl Surface for MockSurface {
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

/// What a [`RecordingRenderer`] observed.
#[derive(Debug, Default)]
pub struct RenderProbe {
    pub renders: usize,
    pub disposals: usize,
    pub disposed: bool,
    pub last_size: Option<Viewport>,
}

pub type Probe = Rc<RefCell<RenderProbe>>;

/// Renderer that only counts calls, readable after the lifecycle drops it.
#[derive(Debug)]
pub struct RecordingRenderer {
    layer: LayerId,
    probe: Probe,
}

impl RecordingRenderer {
    pub fn new() -> (Self, Probe) {
        let probe = Probe::default();
        let renderer = Self {
            layer: LayerId::next(),
            probe: Rc::clone(&probe),
        };
        (renderer, probe)
    }
}

impl Renderer for RecordingRenderer {
    fn output(&self) -> LayerId {
        self.layer
    }

    fn set_size(&mut self, viewport: Viewport) {
        self.probe.borrow_mut().last_size = Some(viewport);
    }

    fn size(&self) -> Viewport {
        self.probe.borrow().last_size.unwrap_or_default()
    }

    fn render(&mut self, _scene: &Scene, _camera: &PerspectiveCamera) {
        let mut probe = self.probe.borrow_mut();
        if !probe.disposed {
            probe.renders += 1;
        }
    }

    fn dispose(&mut self) {
        let mut probe = self.probe.borrow_mut();
        probe.disposals += 1;
        probe.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.probe.borrow().disposed
    }
}
