//! Mounting and driving the animated background.

use std::fmt;

use folio_core::{AnimationSpeed, ColorTheme, Viewport};
use folio_scene::{
    CanvasRenderer, FrameHandle, Host, LayerId, LayerView, Renderer, SceneLifecycle,
    SceneSettings, Surface,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Owns at most one attached background scene.
pub struct Background {
    settings: SceneSettings,
    rng: Box<dyn RngCore>,
    scene: Option<SceneLifecycle<CanvasRenderer>>,
}

impl fmt::Debug for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Background")
            .field("settings", &self.settings)
            .field("scene", &self.scene)
            .finish_non_exhaustive()
    }
}

impl Background {
    /// Create an unmounted background. A configured seed makes the fields
    /// reproducible; otherwise they come from the thread-local generator.
    pub fn new(settings: SceneSettings) -> Self {
        let rng: Box<dyn RngCore> = match settings.seed {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        };
        Self {
            settings,
            rng,
            scene: None,
        }
    }

    /// Attach a fresh scene, detaching any current one first.
    pub fn mount<H, S>(&mut self, host: &mut H, surface: &mut S, speed: AnimationSpeed, theme: ColorTheme)
    where
        H: Host,
        S: Surface,
    {
        self.unmount(host, surface);

        let mut scene = SceneLifecycle::attach(
            surface,
            host,
            CanvasRenderer::new(),
            self.settings.clone(),
            &mut *self.rng,
        );
        scene.set_speed(speed);
        scene.set_line_color(theme.rgb());
        self.scene = Some(scene);
    }

    /// Detach and drop the current scene, if any.
    pub fn unmount<H, S>(&mut self, host: &mut H, surface: &mut S)
    where
        H: Host,
        S: Surface,
    {
        if let Some(mut scene) = self.scene.take() {
            scene.detach(host, surface);
        }
    }

    /// Mount if unmounted, unmount otherwise.
    pub fn toggle<H, S>(&mut self, host: &mut H, surface: &mut S, speed: AnimationSpeed, theme: ColorTheme)
    where
        H: Host,
        S: Surface,
    {
        if self.is_mounted() {
            self.unmount(host, surface);
        } else {
            self.mount(host, surface, speed, theme);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.scene.is_some()
    }

    /// Deliver a due frame. Returns whether anything was rendered.
    pub fn on_frame<H: Host>(&mut self, handle: FrameHandle, host: &mut H) -> bool {
        self.scene
            .as_mut()
            .is_some_and(|scene| scene.on_frame(handle, host))
    }

    pub fn handle_resize(&mut self, viewport: Viewport) {
        if let Some(scene) = self.scene.as_mut() {
            scene.handle_resize(viewport);
        }
    }

    pub fn handle_pointer_move(&mut self, column: u16, row: u16) {
        if let Some(scene) = self.scene.as_mut() {
            scene.handle_pointer_move(f32::from(column), f32::from(row));
        }
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        if let Some(scene) = self.scene.as_mut() {
            scene.set_speed(speed);
        }
    }

    pub fn set_theme(&mut self, theme: ColorTheme) {
        if let Some(scene) = self.scene.as_mut() {
            scene.set_line_color(theme.rgb());
        }
    }

    /// Output layer of the mounted scene.
    pub fn layer(&self) -> Option<LayerId> {
        self.scene.as_ref()?.renderer().map(Renderer::output)
    }

    /// Widget for the last rendered frame.
    pub fn view(&self) -> Option<LayerView<'_>> {
        self.scene.as_ref()?.renderer().map(CanvasRenderer::view)
    }
}
