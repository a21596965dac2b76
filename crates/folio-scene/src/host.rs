//! The environment a scene is attached to: viewport, event listeners and
//! frame scheduling.

use folio_core::Viewport;

/// Host events a scene can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    PointerMove,
}

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Identifies a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Services provided by whatever drives the scene.
///
/// All calls happen on one thread. Events registered through [`Host::listen`]
/// are delivered by the host calling back into the scene, and a frame
/// requested with [`Host::request_frame`] is delivered with its handle.
pub trait Host {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Register interest in an event kind.
    fn listen(&mut self, kind: EventKind) -> ListenerId;

    /// Remove a listener. Unknown ids are ignored.
    fn unlisten(&mut self, id: ListenerId);

    /// Schedule the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a scheduled frame. A handle that is not pending is ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}
