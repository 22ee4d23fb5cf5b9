//! Custom caption chrome for native desktop windows.
//!
//! The window keeps its native frame behavior (resize, snap, system menu,
//! DPI changes) while the title bar and its close, maximize, minimize and
//! help buttons are hit-tested and painted by this crate.
//!
//! The platform-independent part decides; it never calls the window system.
//! [`ChromeController::handle`] takes a [`ChromeEvent`] plus a [`Host`] to
//! query and returns an [`Outcome`]: the reply for the host and a list of
//! [`Effect`]s for an [`EffectSink`] to carry out. The `win32` module (Windows
//! only) is the thin adapter that wires this to a real `HWND`.

pub mod commands;
pub mod config;
pub mod effects;
pub mod error;
pub mod events;
pub mod frame;
pub mod geometry;
pub mod host;
pub mod hover;
pub mod logging;
pub mod paint;
pub mod rect;
pub mod registry;

#[cfg(windows)]
pub mod win32;

pub use commands::{ShowState, SystemCommand};
pub use config::ChromeConfig;
pub use effects::{Effect, EffectSink, ShowCommand};
pub use error::ChromeError;
pub use events::{ChromeController, ChromeEvent, Outcome, Reply};
pub use geometry::{ButtonRects, ChromeButton, ChromeGeometry};
pub use hit_test::{FrameRegion, HitTest, LogicalRegion};
pub use host::{DefaultHit, Host, SystemMetric, WindowFrameMetrics};
pub use hover::{HoverTracker, HoveredRegion};
pub use paint::{ButtonPaint, GlyphState, PaintPlan, ThemePainter};
pub use rect::{Point, Rect};
pub use registry::WindowId;
