//! Binds the animated scene to a surface for exactly the surface's mounted
//! lifetime.

use folio_core::{AnimationSpeed, PointerState, Viewport};
use glam::Vec3;
use rand::Rng;

use crate::camera::PerspectiveCamera;
use crate::host::{EventKind, FrameHandle, Host, ListenerId};
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::settings::SceneSettings;
use crate::surface::{LayerId, Surface};

/// An attached background scene.
///
/// Returned by [`SceneLifecycle::attach`]; call [`SceneLifecycle::detach`]
/// to release it. Every resource is optional so that teardown only touches
/// what was actually acquired.
#[derive(Debug)]
pub struct SceneLifecycle<R: Renderer> {
    settings: SceneSettings,
    speed: AnimationSpeed,
    viewport: Viewport,
    pointer: PointerState,
    camera: Option<PerspectiveCamera>,
    renderer: Option<R>,
    scene: Option<Scene>,
    layer: Option<LayerId>,
    resize_listener: Option<ListenerId>,
    pointer_listener: Option<ListenerId>,
    frame: Option<FrameHandle>,
    attached: bool,
}

impl<R: Renderer> SceneLifecycle<R> {
    /// Build the scene, mount the renderer output on `surface`, subscribe to
    /// resize and pointer-move events and schedule the first frame.
    pub fn attach<S, H, G>(
        surface: &mut S,
        host: &mut H,
        mut renderer: R,
        settings: SceneSettings,
        rng: &mut G,
    ) -> Self
    where
        S: Surface + ?Sized,
        H: Host + ?Sized,
        G: Rng + ?Sized,
    {
        let viewport = host.viewport();
        let camera = PerspectiveCamera::for_viewport(viewport);
        renderer.set_size(viewport);
        let scene = Scene::generate(&settings, [1.0, 1.0, 1.0], rng);

        let layer = renderer.output();
        surface.insert_layer(layer);

        let resize_listener = host.listen(EventKind::Resize);
        let pointer_listener = host.listen(EventKind::PointerMove);
        let frame = host.request_frame();

        log::debug!(
            "scene attached to layer {:?} at {}x{} ({} particles, {} line vertices)",
            layer,
            viewport.width,
            viewport.height,
            settings.particle_count,
            settings.line_vertex_count,
        );

        Self {
            settings,
            speed: AnimationSpeed::default(),
            viewport,
            pointer: PointerState::default(),
            camera: Some(camera),
            renderer: Some(renderer),
            scene: Some(scene),
            layer: Some(layer),
            resize_listener: Some(resize_listener),
            pointer_listener: Some(pointer_listener),
            frame: Some(frame),
            attached: true,
        }
    }

    /// Advance the animation and render once.
    ///
    /// Returns `false` without rendering when the scene is detached or when
    /// `handle` is not the frame this scene scheduled.
    pub fn on_frame<H: Host + ?Sized>(&mut self, handle: FrameHandle, host: &mut H) -> bool {
        if !self.attached || self.frame != Some(handle) {
            return false;
        }
        let (Some(scene), Some(camera), Some(renderer)) =
            (self.scene.as_mut(), self.camera.as_ref(), self.renderer.as_mut())
        else {
            return false;
        };

        let spin = self.speed.spin_multiplier();
        scene.particles.transform.rotation.y += self.settings.particle_spin * spin;
        scene.lines.transform.rotation.x += self.settings.line_spin * spin;

        // Particles drift by the pointer every frame; lines follow it directly.
        let pointer = Vec3::new(self.pointer.x, self.pointer.y, 0.0);
        scene.particles.transform.position += pointer * self.settings.drift_scale;
        scene.lines.transform.position = Vec3::new(
            pointer.x * self.settings.follow_scale,
            pointer.y * self.settings.follow_scale,
            scene.lines.transform.position.z,
        );

        renderer.render(scene, camera);
        self.frame = Some(host.request_frame());
        true
    }

    /// Update the camera aspect and renderer size for a new viewport.
    pub fn handle_resize(&mut self, viewport: Viewport) {
        if !self.attached {
            return;
        }
        self.viewport = viewport;
        if let (Some(camera), Some(aspect)) = (self.camera.as_mut(), viewport.aspect()) {
            camera.set_aspect(aspect);
        }
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.set_size(viewport);
        }
        log::trace!("scene resized to {}x{}", viewport.width, viewport.height);
    }

    /// Record a pointer move in raw client coordinates.
    pub fn handle_pointer_move(&mut self, client_x: f32, client_y: f32) {
        if !self.attached {
            return;
        }
        self.pointer = PointerState::from_client(client_x, client_y, self.viewport);
    }

    /// Tear the scene down. Safe to call more than once.
    ///
    /// A surface that already lost the layer is logged and otherwise ignored.
    pub fn detach<S, H>(&mut self, host: &mut H, surface: &mut S)
    where
        S: Surface + ?Sized,
        H: Host + ?Sized,
    {
        if !self.attached {
            log::debug!("scene already detached");
            return;
        }
        self.attached = false;

        if let Some(frame) = self.frame.take() {
            host.cancel_frame(frame);
        }
        if let Some(id) = self.resize_listener.take() {
            host.unlisten(id);
        }
        if let Some(id) = self.pointer_listener.take() {
            host.unlisten(id);
        }
        if let Some(layer) = self.layer.take()
            && let Err(err) = surface.remove_layer(layer)
        {
            log::warn!("failed to remove background layer: {err}");
        }
        if let Some(mut renderer) = self.renderer.take() {
            renderer.dispose();
        }
        if let Some(mut scene) = self.scene.take() {
            scene.dispose();
        }
        self.camera = None;

        log::debug!("scene detached");
    }

    /// Change the spin speed.
    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
    }

    /// Recolor the line field.
    pub fn set_line_color(&mut self, rgb: [f32; 3]) {
        if let Some(scene) = self.scene.as_mut() {
            scene.lines.material.color = rgb;
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Handle of the frame this scene is waiting for.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn camera(&self) -> Option<&PerspectiveCamera> {
        self.camera.as_ref()
    }
}

impl<R: Renderer> Drop for SceneLifecycle<R> {
    fn drop(&mut self) {
        if self.attached {
            log::warn!("scene dropped while still attached; listeners and layer leak");
        }
    }
}
