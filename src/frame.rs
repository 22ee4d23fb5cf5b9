//! Non-client frame math.
//!
//! To draw our own caption the client area is extended over the native
//! title bar while the side and bottom resize borders are kept.

use crate::host::{Host, SystemMetric};
use crate::rect::{Point, Rect};

/// Frame thicknesses for one DPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameMetrics {
    pub frame_x: i32,
    pub frame_y: i32,
    pub padding: i32,
}

impl FrameMetrics {
    pub fn query<H: Host + ?Sized>(host: &H, dpi: u32) -> Self {
        Self {
            frame_x: host.system_metric(SystemMetric::FrameX, dpi),
            frame_y: host.system_metric(SystemMetric::FrameY, dpi),
            padding: host.system_metric(SystemMetric::PaddedBorder, dpi),
        }
    }
}

/// Client rect for a proposed window rect (`WM_NCCALCSIZE` with `wParam` set).
///
/// Left, right and bottom keep the resize frame. The top keeps nothing so
/// the client covers the caption, except for the padded border while
/// maximized, where the window hangs past the monitor edge.
pub fn extend_client_area(proposed: Rect, frame: FrameMetrics, maximized: bool) -> Rect {
    let side = frame.frame_x + frame.padding;

    let mut client = Rect {
        left: proposed.left + side,
        right: proposed.right - side,
        bottom: proposed.bottom - (frame.frame_y + frame.padding),
        ..proposed
    };

    if maximized {
        client.top += frame.padding;
    }

    client
}

/// Height of the band at the top of the client that resizes the window
/// when the top resize band is enabled.
pub fn top_resize_band<H: Host + ?Sized>(host: &H, dpi: u32) -> i32 {
    let frame = FrameMetrics::query(host, dpi);
    frame.frame_y + frame.padding
}

/// Maximized size and position (`WM_GETMINMAXINFO`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaximizedBounds {
    pub size: Point,
    pub position: Point,
}

impl MaximizedBounds {
    pub fn query<H: Host + ?Sized>(host: &H, dpi: u32) -> Self {
        Self {
            size: Point::new(
                host.system_metric(SystemMetric::MaximizedWidth, dpi),
                host.system_metric(SystemMetric::MaximizedHeight, dpi),
            ),
            position: Point::new(
                host.system_metric(SystemMetric::VirtualScreenX, dpi),
                host.system_metric(SystemMetric::VirtualScreenY, dpi),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_96: FrameMetrics = FrameMetrics {
        frame_x: 4,
        frame_y: 4,
        padding: 4,
    };

    #[test]
    fn restored_window_keeps_side_and_bottom_frame() {
        let proposed = Rect::new(100, 100, 900, 700);
        let client = extend_client_area(proposed, FRAME_96, false);

        assert_eq!(client, Rect::new(108, 100, 892, 692));
    }

    #[test]
    fn maximized_window_pads_the_top() {
        let proposed = Rect::new(-8, -8, 1928, 1040);
        let client = extend_client_area(proposed, FRAME_96, true);

        assert_eq!(client, Rect::new(0, -4, 1920, 1032));
    }
}
