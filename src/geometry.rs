//! Title bar and caption button layout.
//!
//! Everything here is a pure function of [`WindowFrameMetrics`] and
//! [`ChromeConfig`]. Hit-testing, hover invalidation and painting all call
//! into this module so the three can never disagree about where a button is.

use crate::config::ChromeConfig;
use crate::host::WindowFrameMetrics;
use crate::rect::Rect;

/// The platform's baseline DPI.
pub const DEFAULT_DPI: u32 = 96;

/// Scales a 96-DPI length to `dpi`, truncating toward zero like the system does.
pub const fn scale(value: i32, dpi: u32) -> i32 {
    (value as i64 * dpi as i64 / DEFAULT_DPI as i64) as i32
}

/// One of the four custom caption buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeButton {
    Close,
    Minimize,
    Maximize,
    Help,
}

impl ChromeButton {
    /// Hit-test priority order.
    pub const ALL: [ChromeButton; 4] = [
        ChromeButton::Close,
        ChromeButton::Minimize,
        ChromeButton::Maximize,
        ChromeButton::Help,
    ];
}

/// Title bar covering the top of the client area.
///
/// Collapses to zero height when the DPI is unknown or the theme caption
/// height could not be read, which leaves the area as plain client.
pub fn title_bar_rect(metrics: &WindowFrameMetrics, config: &ChromeConfig) -> Rect {
    let mut rect = metrics.client;

    let height = match metrics.caption_height {
        Some(caption) if metrics.dpi > 0 => {
            scale(caption.max(0), metrics.dpi) + config.border_allowance
        }
        _ => 0,
    };

    rect.bottom = rect.top + height.max(0);
    rect
}

/// Strip at the very top of the client area standing in for the native
/// border the frame extension removes.
pub fn fake_shadow_rect(metrics: &WindowFrameMetrics, config: &ChromeConfig) -> Rect {
    let mut rect = metrics.client;
    rect.bottom = rect.top + config.fake_shadow_height;
    rect
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRects {
    pub close: Rect,
    pub maximize: Rect,
    pub minimize: Rect,
    pub help: Rect,
}

impl ButtonRects {
    /// Lays the buttons out right to left from the title bar's right edge:
    /// close, maximize, minimize, help.
    pub fn layout(metrics: &WindowFrameMetrics, config: &ChromeConfig, title_bar: &Rect) -> Self {
        let button_width = if title_bar.is_empty() {
            0
        } else {
            scale(config.button_width, metrics.dpi).max(0)
        };

        let close = Rect {
            top: (title_bar.top + config.fake_shadow_height).min(title_bar.bottom),
            left: title_bar.right - button_width,
            ..*title_bar
        };

        let maximize = close.offset(-button_width, 0);
        let minimize = maximize.offset(-button_width, 0);
        let help = minimize.offset(-button_width, 0);

        let rects = Self {
            close,
            maximize,
            minimize,
            help,
        };

        if metrics.maximized {
            // Raw pixels, not DPI-scaled.
            let offset = config.maximized_button_offset;
            rects.offset(offset, offset)
        } else {
            rects
        }
    }

    pub fn get(&self, button: ChromeButton) -> Rect {
        match button {
            ChromeButton::Close => self.close,
            ChromeButton::Minimize => self.minimize,
            ChromeButton::Maximize => self.maximize,
            ChromeButton::Help => self.help,
        }
    }

    /// Buttons with their rects, in hit-test priority order.
    pub fn iter(&self) -> impl Iterator<Item = (ChromeButton, Rect)> + '_ {
        ChromeButton::ALL.into_iter().map(move |button| (button, self.get(button)))
    }

    fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            close: self.close.offset(dx, dy),
            maximize: self.maximize.offset(dx, dy),
            minimize: self.minimize.offset(dx, dy),
            help: self.help.offset(dx, dy),
        }
    }

    /// Left edge of the leftmost button.
    pub fn leftmost(&self) -> i32 {
        self.help.left
    }
}

/// Title bar and buttons computed together from one metrics snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeGeometry {
    pub title_bar: Rect,
    pub buttons: ButtonRects,
}

impl ChromeGeometry {
    pub fn compute(metrics: &WindowFrameMetrics, config: &ChromeConfig) -> Self {
        let title_bar = title_bar_rect(metrics, config);
        let buttons = ButtonRects::layout(metrics, config, &title_bar);
        Self { title_bar, buttons }
    }

    /// Room for the window title: padded on the left, stopping short of the
    /// buttons on the right.
    pub fn title_text_rect(&self, config: &ChromeConfig) -> Rect {
        let padding = config.title_text_padding;
        let right = (self.buttons.leftmost() - padding).max(self.title_bar.left + padding);
        Rect {
            left: self.title_bar.left + padding,
            right,
            ..self.title_bar
        }
    }
}
