//! Win32 adapter: window class, message loop and the window procedure that
//! feeds chrome messages to a [`ChromeController`].
//!
//! The controller lives in a `RefCell` boxed behind `GWLP_USERDATA`. It is
//! borrowed only while deciding; effects run after the borrow is released
//! because `ShowWindow`, `MessageBoxW` and `TrackPopupMenu` all re-enter the
//! window procedure.

mod executor;
mod host;
mod painter;

use std::cell::RefCell;
use std::ffi::c_void;
use std::mem::size_of;

use anyhow::{anyhow, Result};
use tracing::{info, warn};
use windows::{
    core::{w, HSTRING, PCWSTR},
    Win32::{
        Foundation::{HWND, LPARAM, LRESULT, POINT, RECT, WPARAM},
        Graphics::Gdi::{BeginPaint, EndPaint, PAINTSTRUCT},
        UI::{
            HiDpi::{SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2},
            Input::KeyboardAndMouse::{TrackMouseEvent, TME_LEAVE, TME_NONCLIENT, TRACKMOUSEEVENT},
            WindowsAndMessaging::{
                CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW, GetWindowLongPtrW,
                LoadCursorW, RegisterClassExW, SetWindowLongPtrW, TranslateMessage, CREATESTRUCTW,
                CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, GWLP_USERDATA, IDC_ARROW, MINMAXINFO, MSG,
                NCCALCSIZE_PARAMS, WM_ACTIVATE, WM_CREATE, WM_DESTROY, WM_GETMINMAXINFO,
                WM_MOUSEMOVE, WM_NCCALCSIZE, WM_NCCREATE, WM_NCDESTROY, WM_NCHITTEST,
                WM_NCLBUTTONDOWN, WM_NCLBUTTONUP, WM_NCMOUSELEAVE, WM_NCMOUSEMOVE, WM_NCRBUTTONDOWN,
                WM_PAINT,
                WM_SYSCOMMAND, WNDCLASSEXW, WS_EX_APPWINDOW, WS_MAXIMIZEBOX, WS_MINIMIZEBOX,
                WS_SYSMENU, WS_THICKFRAME, WS_VISIBLE,
            },
        },
    },
};

use crate::config::ChromeConfig;
use crate::effects::EffectSink;
use crate::events::{ChromeController, ChromeEvent, Reply};
use crate::hit_test::HitTest;
use crate::rect::{Point, Rect};
use crate::registry::WindowId;

use self::executor::Win32Effects;
use self::host::Win32Host;
use self::painter::GdiPainter;

type SharedController = RefCell<ChromeController>;

/// Registers the window class, opens one chrome window and pumps messages
/// until it is closed.
pub fn run(config: ChromeConfig, title: &str) -> Result<()> {
    if let Err(e) =
        unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) }
    {
        return Err(anyhow!("Failed to set DPI awareness: {}", e.message()));
    };

    let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }
        .map_err(|e| anyhow!("Failed to load cursor: {}", e.message()))?;

    let window_class_name = w!("Caption Chrome Window Class");
    let window_class = WNDCLASSEXW {
        cbSize: size_of::<WNDCLASSEXW>() as u32,
        lpszClassName: window_class_name,
        lpfnWndProc: Some(window_proc),
        style: CS_HREDRAW | CS_VREDRAW,
        hCursor: cursor,
        ..Default::default()
    };

    if unsafe { RegisterClassExW(&window_class) } == 0 {
        return Err(anyhow!("Failed to register window class"));
    }

    // Released in WM_NCDESTROY.
    let controller: *mut SharedController = Box::into_raw(Box::new(RefCell::new(
        ChromeController::new(config),
    )));

    let window_style = WS_THICKFRAME | WS_SYSMENU | WS_MAXIMIZEBOX | WS_MINIMIZEBOX | WS_VISIBLE;
    let title = HSTRING::from(title);

    let handle = unsafe {
        CreateWindowExW(
            WS_EX_APPWINDOW,
            window_class_name,
            PCWSTR(title.as_ptr()),
            window_style,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            800,
            600,
            None,
            None,
            None,
            Some(controller as *const c_void),
        )
    };

    if handle.0 == 0 {
        return Err(anyhow!("Failed to create window"));
    }
    info!(handle = handle.0, "chrome window created");

    let mut message: MSG = MSG::default();
    while unsafe { GetMessageW(&mut message, None, 0, 0).0 > 0 } {
        unsafe { TranslateMessage(&message) };
        unsafe { DispatchMessageW(&message) };
    }

    Ok(())
}

pub(crate) fn to_rect(rect: RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

pub(crate) fn to_win32_rect(rect: Rect) -> RECT {
    RECT {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}

pub(crate) fn to_point(point: POINT) -> Point {
    Point::new(point.x, point.y)
}

// Coordinates are signed shorts on multi-monitor setups, so go through i16
// to keep the sign before widening.
const fn get_x_param(l_param: LPARAM) -> i32 {
    (l_param.0 & 0xffff) as i16 as i32
}

const fn get_y_param(l_param: LPARAM) -> i32 {
    ((l_param.0 >> 16) & 0xffff) as i16 as i32
}

pub(crate) const fn make_point_param(point: Point) -> LPARAM {
    let x = point.x as i16 as u16 as u32;
    let y = point.y as i16 as u16 as u32;
    LPARAM((x | (y << 16)) as i32 as isize)
}

fn screen_point(l_param: LPARAM) -> Point {
    Point::new(get_x_param(l_param), get_y_param(l_param))
}

/// Maps a message to a chrome event; `None` leaves it to the default handler.
unsafe fn translate(message: u32, w_param: WPARAM, l_param: LPARAM) -> Option<ChromeEvent> {
    let hit = || HitTest::from_code(w_param.0 as u32);

    let event = match message {
        WM_CREATE => ChromeEvent::Created,
        WM_DESTROY => ChromeEvent::Destroyed,
        WM_ACTIVATE => ChromeEvent::Activated,
        WM_NCCALCSIZE => {
            if w_param == WPARAM(0) {
                return None;
            }

            let params = l_param.0 as *const NCCALCSIZE_PARAMS;
            if params.is_null() {
                return None;
            }

            ChromeEvent::CalcSize {
                proposed: to_rect((*params).rgrc[0]),
            }
        }
        WM_NCHITTEST => ChromeEvent::HitTest {
            screen: screen_point(l_param),
        },
        WM_NCMOUSEMOVE => ChromeEvent::NonClientPointerMove { hit: hit() },
        WM_MOUSEMOVE => ChromeEvent::ClientPointerMove,
        WM_NCMOUSELEAVE => ChromeEvent::NonClientPointerLeave,
        WM_NCLBUTTONDOWN => ChromeEvent::NonClientButtonDown { hit: hit() },
        WM_NCLBUTTONUP => ChromeEvent::NonClientButtonUp { hit: hit() },
        WM_NCRBUTTONDOWN => ChromeEvent::NonClientRightButtonDown {
            hit: hit(),
            screen: screen_point(l_param),
        },
        WM_SYSCOMMAND => ChromeEvent::SystemCommand { w_param: w_param.0 },
        WM_GETMINMAXINFO => ChromeEvent::GetMinMaxInfo,
        _ => return None,
    };

    Some(event)
}

unsafe fn reply(
    handle: HWND,
    message: u32,
    w_param: WPARAM,
    l_param: LPARAM,
    reply: Reply,
) -> LRESULT {
    match reply {
        Reply::Default => DefWindowProcW(handle, message, w_param, l_param),
        Reply::Handled | Reply::Paint(_) => LRESULT(0),
        Reply::HitTest(hit) => LRESULT(hit.code() as isize),
        Reply::ClientArea(client) => {
            let params = l_param.0 as *mut NCCALCSIZE_PARAMS;
            if params.is_null() {
                return DefWindowProcW(handle, message, w_param, l_param);
            }

            (*params).rgrc[0] = to_win32_rect(client);
            LRESULT(0)
        }
        Reply::MaximizedBounds(bounds) => {
            let info = l_param.0 as *mut MINMAXINFO;
            if info.is_null() {
                return DefWindowProcW(handle, message, w_param, l_param);
            }

            (*info).ptMaxSize = POINT {
                x: bounds.size.x,
                y: bounds.size.y,
            };
            (*info).ptMaxPosition = POINT {
                x: bounds.position.x,
                y: bounds.position.y,
            };
            LRESULT(0)
        }
    }
}

// WM_NCMOUSELEAVE is only sent after asking for it, and the request lapses
// once it fires.
unsafe fn track_non_client_leave(handle: HWND) {
    let mut track = TRACKMOUSEEVENT {
        cbSize: size_of::<TRACKMOUSEEVENT>() as u32,
        dwFlags: TME_LEAVE | TME_NONCLIENT,
        hwndTrack: handle,
        dwHoverTime: 0,
    };
    if let Err(e) = TrackMouseEvent(&mut track) {
        warn!("Failed to track mouse leave: {}", e.message());
    }
}

unsafe fn paint(handle: HWND, controller: &SharedController) -> LRESULT {
    let mut ps = PAINTSTRUCT::default();
    let hdc = BeginPaint(handle, &mut ps);

    let host = Win32Host::new(handle);
    let event = ChromeEvent::Paint {
        damaged: to_rect(ps.rcPaint),
    };
    let outcome = match controller.try_borrow_mut() {
        Ok(mut controller) => controller.handle(WindowId(handle.0), &host, event),
        Err(_) => {
            warn!("Paint arrived while the chrome controller was busy");
            EndPaint(handle, &ps);
            return LRESULT(0);
        }
    };

    if let Reply::Paint(plan) = outcome.reply {
        let mut painter = GdiPainter::new(handle, hdc);
        plan.render(&mut painter);
    }

    EndPaint(handle, &ps);
    LRESULT(0)
}

unsafe extern "system" fn window_proc(
    handle: HWND,
    message: u32,
    w_param: WPARAM,
    l_param: LPARAM,
) -> LRESULT {
    if message == WM_NCCREATE {
        let create = l_param.0 as *const CREATESTRUCTW;
        if !create.is_null() {
            SetWindowLongPtrW(handle, GWLP_USERDATA, (*create).lpCreateParams as isize);
        }
        return DefWindowProcW(handle, message, w_param, l_param);
    }

    let controller = GetWindowLongPtrW(handle, GWLP_USERDATA) as *mut SharedController;
    if controller.is_null() {
        return DefWindowProcW(handle, message, w_param, l_param);
    }

    if message == WM_NCDESTROY {
        SetWindowLongPtrW(handle, GWLP_USERDATA, 0);
        drop(Box::from_raw(controller));
        return DefWindowProcW(handle, message, w_param, l_param);
    }

    if message == WM_PAINT {
        return paint(handle, &*controller);
    }

    if message == WM_NCMOUSEMOVE {
        track_non_client_leave(handle);
    }

    let Some(event) = translate(message, w_param, l_param) else {
        return DefWindowProcW(handle, message, w_param, l_param);
    };

    let host = Win32Host::new(handle);
    let outcome = match (*controller).try_borrow_mut() {
        Ok(mut controller) => controller.handle(WindowId(handle.0), &host, event),
        Err(_) => {
            warn!(?event, "Chrome controller busy; using default handling");
            return DefWindowProcW(handle, message, w_param, l_param);
        }
    };

    Win32Effects::new(handle).apply_all(outcome.effects);
    reply(handle, message, w_param, l_param, outcome.reply)
}
