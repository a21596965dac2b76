//! Software renderer projecting the scene into a terminal cell buffer.

use folio_core::Viewport;
use glam::Vec3;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::camera::PerspectiveCamera;
use crate::chars::{LINE_CHAR, PARTICLE_CHARS};
use crate::renderer::Renderer;
use crate::scene::{LineSegments, Points, Scene};
use crate::surface::LayerId;

/// Segments whose projected endpoints lie this far outside the view are skipped.
const MAX_NDC: f32 = 4.0;

/// Renders into an owned [`Buffer`], which is then painted as the lowest layer.
#[derive(Debug)]
pub struct CanvasRenderer {
    layer: LayerId,
    buffer: Buffer,
    size: Viewport,
    frames: u64,
    disposed: bool,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self {
            layer: LayerId::next(),
            buffer: Buffer::empty(Rect::ZERO),
            size: Viewport::default(),
            frames: 0,
            disposed: false,
        }
    }

    /// The rendered cells.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Widget view of the last frame.
    pub fn view(&self) -> LayerView<'_> {
        LayerView {
            buffer: &self.buffer,
        }
    }

    /// Number of frames drawn so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    fn to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        let col = ((x + 1.0) / 2.0 * self.size.width as f32).floor() as i32;
        let row = ((1.0 - y) / 2.0 * self.size.height as f32).floor() as i32;
        (col, row)
    }

    fn plot(&mut self, col: i32, row: i32, ch: char, color: Color) {
        let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
            return;
        };
        if col >= self.size.width || row >= self.size.height {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((col, row)) {
            cell.set_char(ch).set_style(Style::new().fg(color));
        }
    }

    fn draw_lines(&mut self, lines: &LineSegments, camera: &PerspectiveCamera) {
        let brightness = (0.25 + lines.material.opacity).clamp(0.0, 1.0);
        let color = to_rgb(lines.material.color, brightness);

        for segment in 0..lines.segment_count() {
            let a = lines.transform.apply(lines.geometry.vertex(segment * 2));
            let b = lines.transform.apply(lines.geometry.vertex(segment * 2 + 1));
            let (Some((ax, ay, _)), Some((bx, by, _))) = (camera.project(a), camera.project(b))
            else {
                continue;
            };
            if [ax, ay, bx, by].iter().any(|v| v.abs() > MAX_NDC) {
                continue;
            }

            let start = self.to_cell(ax, ay);
            let end = self.to_cell(bx, by);
            for (col, row) in bresenham(start, end) {
                self.plot(col, row, LINE_CHAR, color);
            }
        }
    }

    fn draw_particles(&mut self, points: &Points, camera: &PerspectiveCamera) {
        let far = camera.position().z + 5.0;
        for index in 0..points.geometry.vertex_count() {
            let world: Vec3 = points.transform.apply(points.geometry.vertex(index));
            let Some((x, y, depth)) = camera.project(world) else {
                continue;
            };

            // Nearer particles get heavier glyphs and more light.
            let nearness = (1.0 - depth / far).clamp(0.0, 1.0);
            let glyph_idx = ((1.0 - nearness) * (PARTICLE_CHARS.len() - 1) as f32).round() as usize;
            let ch = PARTICLE_CHARS[glyph_idx.min(PARTICLE_CHARS.len() - 1)];

            let rgb = match points.geometry.color(index) {
                Some(rgb) if points.material.vertex_colors => rgb,
                _ => [1.0, 1.0, 1.0],
            };
            let brightness = points.material.opacity * (0.4 + 0.6 * nearness);

            let (col, row) = self.to_cell(x, y);
            self.plot(col, row, ch, to_rgb(rgb, brightness));
        }
    }
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for CanvasRenderer {
    fn output(&self) -> LayerId {
        self.layer
    }

    fn set_size(&mut self, viewport: Viewport) {
        if self.disposed {
            return;
        }
        self.size = viewport;
        self.buffer = Buffer::empty(Rect::new(0, 0, viewport.width, viewport.height));
    }

    fn size(&self) -> Viewport {
        self.size
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) {
        if self.disposed {
            return;
        }
        self.buffer.reset();
        self.draw_lines(&scene.lines, camera);
        self.draw_particles(&scene.particles, camera);
        self.frames += 1;
    }

    fn dispose(&mut self) {
        self.buffer = Buffer::empty(Rect::ZERO);
        self.size = Viewport::default();
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Widget painting the non-blank cells of the last frame, leaving the rest
/// of the target untouched.
#[derive(Debug, Clone, Copy)]
pub struct LayerView<'a> {
    buffer: &'a Buffer,
}

impl Widget for LayerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bounds = self.buffer.area.intersection(area);
        for y in bounds.top()..bounds.bottom() {
            for x in bounds.left()..bounds.right() {
                let Some(src) = self.buffer.cell((x, y)) else {
                    continue;
                };
                if src.symbol() == " " {
                    continue;
                }
                if let Some(dst) = buf.cell_mut((x, y)) {
                    *dst = src.clone();
                }
            }
        }
    }
}

fn to_rgb(rgb: [f32; 3], brightness: f32) -> Color {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * brightness.clamp(0.0, 1.0) * 255.0) as u8;
    Color::Rgb(channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
}

/// Cells on the line between two cells, endpoints included.
fn bresenham(start: (i32, i32), end: (i32, i32)) -> impl Iterator<Item = (i32, i32)> {
    let (mut x, mut y) = start;
    let dx = (end.0 - x).abs();
    let dy = -(end.1 - y).abs();
    let sx = if x < end.0 { 1 } else { -1 };
    let sy = if y < end.1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut done = false;

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let current = (x, y);
        if current == end {
            done = true;
        } else {
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Some(current)
    })
}
