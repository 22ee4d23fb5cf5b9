//! What the chrome logic asks of the windowing system.
//!
//! The Win32 adapter implements [`Host`] over an `HWND`; tests implement it
//! over plain fields. Nothing here is cached: every notification takes a
//! fresh [`WindowFrameMetrics`] snapshot so DPI changes (monitor moves) and
//! resizes are always seen.

use tracing::warn;

use crate::error::Result;
use crate::hit_test::FrameRegion;
use crate::rect::{Point, Rect};

/// System metrics the frame math needs, queried for a specific DPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemMetric {
    /// `SM_CXFRAME`
    FrameX,
    /// `SM_CYFRAME`
    FrameY,
    /// `SM_CXPADDEDBORDER`
    PaddedBorder,
    /// `SM_CXMAXIMIZED`
    MaximizedWidth,
    /// `SM_CYMAXIMIZED`
    MaximizedHeight,
    /// `SM_XVIRTUALSCREEN`
    VirtualScreenX,
    /// `SM_YVIRTUALSCREEN`
    VirtualScreenY,
}

/// The host's own classification of a screen point, before any override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultHit {
    ClientArea,
    Frame(FrameRegion),
}

pub trait Host {
    fn client_rect(&self) -> Result<Rect>;

    /// Current DPI of the monitor the window is on.
    fn dpi(&self) -> u32;

    fn is_maximized(&self) -> Result<bool>;

    fn is_minimized(&self) -> bool {
        false
    }

    /// Theme caption height in 96-DPI units.
    fn caption_height(&self) -> Result<i32>;

    fn system_metric(&self, metric: SystemMetric, dpi: u32) -> i32;

    fn default_hit_test(&self, screen: Point) -> DefaultHit;

    fn screen_to_client(&self, screen: Point) -> Point;
}

/// A point-in-time view of everything the geometry engine depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFrameMetrics {
    pub dpi: u32,
    pub maximized: bool,
    pub client: Rect,
    /// `None` when the theme could not be read; the title bar then collapses.
    pub caption_height: Option<i32>,
}

impl WindowFrameMetrics {
    /// Snapshot `host`, degrading failed queries instead of failing.
    pub fn query<H: Host + ?Sized>(host: &H) -> Self {
        let client = host.client_rect().unwrap_or_else(|e| {
            warn!("Failed to get client rect: {e}");
            Rect::default()
        });

        let maximized = host.is_maximized().unwrap_or_else(|e| {
            warn!("Failed to get window maximized state: {e}");
            false
        });

        let caption_height = match host.caption_height() {
            Ok(height) => Some(height),
            Err(e) => {
                warn!("Falling back to an empty title bar: {e}");
                None
            }
        };

        Self {
            dpi: host.dpi(),
            maximized,
            client,
            caption_height,
        }
    }
}
