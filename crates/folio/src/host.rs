//! Terminal implementation of the scene host.
//!
//! Listeners are bookkeeping only: the event loop asks [`TerminalHost::is_listening`]
//! before forwarding a crossterm event. Frames are deadlines the loop polls
//! against.

use std::time::{Duration, Instant};

use folio_core::Viewport;
use folio_scene::{EventKind, FrameHandle, Host, ListenerId};

/// How long to wait for input when no frame is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Host backed by the terminal event loop.
#[derive(Debug)]
pub struct TerminalHost {
    viewport: Viewport,
    listeners: Vec<(ListenerId, EventKind)>,
    next_id: u64,
    frame: Option<(FrameHandle, Instant)>,
    frame_interval: Duration,
}

impl TerminalHost {
    /// Create a host for the given viewport, scheduling frames at `fps`.
    pub fn new(viewport: Viewport, fps: u32) -> Self {
        let fps = fps.clamp(1, 240);
        Self {
            viewport,
            listeners: Vec::new(),
            next_id: 0,
            frame: None,
            frame_interval: Duration::from_secs(1) / fps,
        }
    }

    /// Record a new terminal size.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Whether anything is subscribed to `kind`.
    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.listeners.iter().any(|(_, k)| *k == kind)
    }

    /// Time to wait for input before the next frame is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.frame {
            Some((_, deadline)) => deadline.saturating_duration_since(now),
            None => IDLE_POLL,
        }
    }

    /// Take the scheduled frame if its deadline has passed.
    pub fn due_frame(&mut self, now: Instant) -> Option<FrameHandle> {
        match self.frame {
            Some((handle, deadline)) if deadline <= now => {
                self.frame = None;
                Some(handle)
            }
            _ => None,
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Host for TerminalHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn listen(&mut self, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.push((id, kind));
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener, _)| *listener != id);
    }

    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.frame = Some((handle, Instant::now() + self.frame_interval));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if matches!(self.frame, Some((pending, _)) if pending == handle) {
            self.frame = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_and_unlisten() {
        let mut host = TerminalHost::new(Viewport::new(80, 24), 30);
        let resize = host.listen(EventKind::Resize);
        assert!(host.is_listening(EventKind::Resize));
        assert!(!host.is_listening(EventKind::PointerMove));

        host.unlisten(resize);
        host.unlisten(resize);
        assert!(!host.is_listening(EventKind::Resize));
    }

    #[test]
    fn test_frame_becomes_due_after_interval() {
        let mut host = TerminalHost::new(Viewport::new(80, 24), 10);
        let handle = host.request_frame();
        let now = Instant::now();

        assert!(host.poll_timeout(now) <= Duration::from_millis(100));
        assert_eq!(host.due_frame(now + Duration::from_millis(150)), Some(handle));
        assert_eq!(host.due_frame(now + Duration::from_millis(300)), None);
        assert_eq!(host.poll_timeout(now), IDLE_POLL);
    }

    #[test]
    fn test_cancel_frame() {
        let mut host = TerminalHost::new(Viewport::new(80, 24), 30);
        let first = host.request_frame();
        host.cancel_frame(FrameHandle(first.0 + 100));
        assert!(host.poll_timeout(Instant::now()) < IDLE_POLL);

        host.cancel_frame(first);
        assert_eq!(host.due_frame(Instant::now() + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let host = TerminalHost::new(Viewport::new(80, 24), 0);
        assert_eq!(host.frame_interval, Duration::from_secs(1));
    }
}
