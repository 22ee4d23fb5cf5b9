use std::mem::size_of;

use windows::{
    core::w,
    Win32::{
        Foundation::{HWND, POINT, RECT, WPARAM},
        Graphics::Gdi::ScreenToClient,
        UI::{
            Controls::{CloseThemeData, GetThemePartSize, OpenThemeData, CS_ACTIVE, TS_TRUE, WP_CAPTION},
            HiDpi::{GetDpiForWindow, GetSystemMetricsForDpi},
            WindowsAndMessaging::{
                DefWindowProcW, GetClientRect, GetWindowPlacement, IsIconic, SHOW_WINDOW_CMD,
                SM_CXFRAME, SM_CXMAXIMIZED, SM_CXPADDEDBORDER, SM_CYFRAME, SM_CYMAXIMIZED,
                SM_XVIRTUALSCREEN, SM_YVIRTUALSCREEN, SW_SHOWMAXIMIZED, WINDOWPLACEMENT,
                WM_NCHITTEST,
            },
        },
    },
};

use crate::error::{ChromeError, Result};
use crate::hit_test::{codes, FrameRegion};
use crate::host::{DefaultHit, Host, SystemMetric};
use crate::rect::{Point, Rect};

use super::{make_point_param, to_point, to_rect};

/// [`Host`] over a live `HWND`. Every call queries the system afresh.
pub(super) struct Win32Host {
    handle: HWND,
}

impl Win32Host {
    pub(super) fn new(handle: HWND) -> Self {
        Self { handle }
    }
}

fn host_error(query: &'static str, e: windows::core::Error) -> ChromeError {
    ChromeError::HostQuery {
        query,
        message: e.message().to_string(),
    }
}

impl Host for Win32Host {
    fn client_rect(&self) -> Result<Rect> {
        let mut rect = RECT::default();
        unsafe { GetClientRect(self.handle, &mut rect) }
            .map_err(|e| host_error("GetClientRect", e))?;
        Ok(to_rect(rect))
    }

    fn dpi(&self) -> u32 {
        unsafe { GetDpiForWindow(self.handle) }
    }

    fn is_maximized(&self) -> Result<bool> {
        let mut placement = WINDOWPLACEMENT {
            length: size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };
        unsafe { GetWindowPlacement(self.handle, &mut placement) }
            .map_err(|e| host_error("GetWindowPlacement", e))?;
        Ok(SHOW_WINDOW_CMD(placement.showCmd as _) == SW_SHOWMAXIMIZED)
    }

    fn is_minimized(&self) -> bool {
        unsafe { IsIconic(self.handle) }.as_bool()
    }

    fn caption_height(&self) -> Result<i32> {
        let theme = unsafe { OpenThemeData(self.handle, w!("WINDOW")) };
        if theme.0 == 0 {
            return Err(ChromeError::ThemeUnavailable("WINDOW".to_owned()));
        }

        let size = unsafe { GetThemePartSize(theme, None, WP_CAPTION.0, CS_ACTIVE.0, None, TS_TRUE) };
        if let Err(e) = unsafe { CloseThemeData(theme) } {
            tracing::warn!("Failed to close theme data: {}", e.message());
        }

        size.map(|size| size.cy)
            .map_err(|e| ChromeError::ThemeUnavailable(e.message().to_string()))
    }

    fn system_metric(&self, metric: SystemMetric, dpi: u32) -> i32 {
        let index = match metric {
            SystemMetric::FrameX => SM_CXFRAME,
            SystemMetric::FrameY => SM_CYFRAME,
            SystemMetric::PaddedBorder => SM_CXPADDEDBORDER,
            SystemMetric::MaximizedWidth => SM_CXMAXIMIZED,
            SystemMetric::MaximizedHeight => SM_CYMAXIMIZED,
            SystemMetric::VirtualScreenX => SM_XVIRTUALSCREEN,
            SystemMetric::VirtualScreenY => SM_YVIRTUALSCREEN,
        };
        unsafe { GetSystemMetricsForDpi(index, dpi) }
    }

    fn default_hit_test(&self, screen: Point) -> DefaultHit {
        let hit = unsafe {
            DefWindowProcW(self.handle, WM_NCHITTEST, WPARAM(0), make_point_param(screen))
        };

        match hit.0 as u32 {
            codes::HTCLIENT => DefaultHit::ClientArea,
            code => DefaultHit::Frame(FrameRegion::from_code(code)),
        }
    }

    fn screen_to_client(&self, screen: Point) -> Point {
        let mut point = POINT {
            x: screen.x,
            y: screen.y,
        };
        unsafe { ScreenToClient(self.handle, &mut point) };
        to_point(point)
    }
}
