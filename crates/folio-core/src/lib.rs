//! Core types shared across the folio crates.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Size of the visible drawing area, in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// Construct a viewport of the given size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width divided by height, or `None` for a degenerate viewport.
    pub fn aspect(self) -> Option<f32> {
        if self.height == 0 {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

/// Normalized cursor position, both axes in [-1, 1] with +y pointing up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Normalize raw client coordinates against the viewport.
    ///
    /// The viewport center maps to `(0, 0)` and the top-left corner to
    /// `(-1, 1)`. A zero-sized axis normalizes to 0.
    pub fn from_client(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        let x = if viewport.width == 0 {
            0.0
        } else {
            (client_x / viewport.width as f32) * 2.0 - 1.0
        };
        let y = if viewport.height == 0 {
            0.0
        } else {
            -(client_y / viewport.height as f32) * 2.0 + 1.0
        };
        Self { x, y }
    }
}

/// Accent color theme for the portfolio UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::White,
            ColorTheme::White => ColorTheme::Cyan,
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::White => Color::White,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::Red => Color::Red,
            ColorTheme::Blue => Color::Blue,
        }
    }

    /// RGB components used when blending the background line field.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            ColorTheme::Cyan => [0.0, 0.8, 0.9],
            ColorTheme::Green => [0.2, 0.9, 0.4],
            ColorTheme::White => [0.85, 0.85, 0.85],
            ColorTheme::Magenta => [0.85, 0.3, 0.85],
            ColorTheme::Yellow => [0.95, 0.85, 0.2],
            ColorTheme::Red => [0.95, 0.3, 0.3],
            ColorTheme::Blue => [0.3, 0.5, 1.0],
        }
    }
}

/// Background animation speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Multiplier applied to the per-frame spin increments.
    pub fn spin_multiplier(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Short label for the help line.
    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_center_is_origin() {
        let viewport = Viewport::new(120, 40);
        let pointer = PointerState::from_client(60.0, 20.0, viewport);
        assert_eq!(pointer, PointerState { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_pointer_top_left_corner() {
        let viewport = Viewport::new(120, 40);
        let pointer = PointerState::from_client(0.0, 0.0, viewport);
        assert_eq!(pointer, PointerState { x: -1.0, y: 1.0 });
    }

    #[test]
    fn test_pointer_degenerate_viewport() {
        let pointer = PointerState::from_client(5.0, 5.0, Viewport::new(0, 0));
        assert_eq!(pointer, PointerState::default());
    }

    #[test]
    fn test_viewport_aspect() {
        assert_eq!(Viewport::new(80, 20).aspect(), Some(4.0));
        assert_eq!(Viewport::new(80, 0).aspect(), None);
    }

    #[test]
    fn test_theme_cycle_returns_to_start() {
        let mut theme = ColorTheme::Cyan;
        for _ in 0..7 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Cyan);
    }

    #[test]
    fn test_speed_cycle() {
        assert_eq!(AnimationSpeed::Slow.next(), AnimationSpeed::Medium);
        assert_eq!(AnimationSpeed::Fast.next(), AnimationSpeed::Slow);
        assert_eq!(AnimationSpeed::default().spin_multiplier(), 1.0);
    }
}
