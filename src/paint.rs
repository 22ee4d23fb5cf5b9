//! What to draw for one paint notification.
//!
//! The plan is built from the same geometry the hit-test uses and from the
//! hover slot, then replayed through a [`ThemePainter`]. How a glyph looks
//! is entirely up to the painter.

use crate::config::ChromeConfig;
use crate::geometry::{fake_shadow_rect, scale, ChromeButton, ChromeGeometry};
use crate::host::WindowFrameMetrics;
use crate::hover::HoveredRegion;
use crate::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphState {
    Normal,
    Hot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPaint {
    pub button: ChromeButton,
    pub state: GlyphState,
    pub rect: Rect,
    /// Square the glyph is drawn in, centered in `rect`.
    pub glyph: Rect,
}

pub trait ThemePainter {
    /// Clears the damaged part of the client area.
    fn fill_background(&mut self, rect: Rect);

    fn fill_title_bar(&mut self, rect: Rect);

    fn draw_title_text(&mut self, rect: Rect);

    /// `maximized` picks the restore glyph for the maximize button.
    fn draw_button_glyph(&mut self, paint: ButtonPaint, maximized: bool);

    fn fill_shadow(&mut self, rect: Rect);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintPlan {
    pub damaged: Rect,
    pub title_bar: Rect,
    pub title_text: Rect,
    pub buttons: Vec<ButtonPaint>,
    pub shadow: Rect,
    pub maximized: bool,
}

impl PaintPlan {
    pub fn build(
        metrics: &WindowFrameMetrics,
        config: &ChromeConfig,
        hovered: HoveredRegion,
        damaged: Rect,
    ) -> Self {
        let geometry = ChromeGeometry::compute(metrics, config);
        let hot = hovered.button();
        let glyph_size = scale(config.glyph_size, metrics.dpi);

        // Close, minimize, maximize, help.
        let buttons = ChromeButton::ALL
            .into_iter()
            .map(|button| {
                let rect = geometry.buttons.get(button);
                ButtonPaint {
                    button,
                    state: if hot == Some(button) {
                        GlyphState::Hot
                    } else {
                        GlyphState::Normal
                    },
                    rect,
                    glyph: rect.center(glyph_size, glyph_size),
                }
            })
            .collect();

        Self {
            damaged,
            title_bar: geometry.title_bar,
            title_text: geometry.title_text_rect(config),
            buttons,
            shadow: fake_shadow_rect(metrics, config),
            maximized: metrics.maximized,
        }
    }

    pub fn render<P: ThemePainter + ?Sized>(&self, painter: &mut P) {
        painter.fill_background(self.damaged);

        if self.title_bar.is_empty() {
            return;
        }

        painter.fill_title_bar(self.title_bar);
        if !self.title_text.is_empty() {
            painter.draw_title_text(self.title_text);
        }
        for button in &self.buttons {
            painter.draw_button_glyph(*button, self.maximized);
        }
        if !self.shadow.is_empty() {
            painter.fill_shadow(self.shadow);
        }
    }
}
