use tracing::{debug, warn};
use windows::{
    core::{HSTRING, PCWSTR},
    Win32::{
        Foundation::{HWND, LPARAM, RECT, WPARAM},
        Graphics::Gdi::InvalidateRect,
        UI::WindowsAndMessaging::{
            EnableMenuItem, GetSystemMenu, GetWindowRect, MessageBoxW, PostMessageW,
            PostQuitMessage, SendMessageW, SetWindowPos, ShowWindow, TrackPopupMenu, MB_OK,
            MENU_ITEM_FLAGS, MF_BYCOMMAND, MF_ENABLED, MF_GRAYED, SWP_FRAMECHANGED, SWP_NOMOVE,
            SWP_NOSIZE, SW_MAXIMIZE, SW_MINIMIZE, SW_RESTORE, TPM_RETURNCMD, TPM_RIGHTBUTTON,
            WM_CLOSE, WM_SYSCOMMAND,
        },
    },
};

use crate::commands::codes::{SC_MAXIMIZE, SC_RESTORE};
use crate::effects::{Effect, EffectSink, ShowCommand};

use super::to_win32_rect;

/// Carries out chrome effects against one window.
pub(super) struct Win32Effects {
    handle: HWND,
}

impl Win32Effects {
    pub(super) fn new(handle: HWND) -> Self {
        Self { handle }
    }

    fn refresh_frame(&self) {
        let mut size_rect = RECT::default();
        if let Err(e) = unsafe { GetWindowRect(self.handle, &mut size_rect) } {
            warn!("Failed to get window rect: {}", e.message());
            return;
        }

        // Forces a WM_NCCALCSIZE so the client area extends into the title bar.
        let result = unsafe {
            SetWindowPos(
                self.handle,
                None,
                size_rect.left,
                size_rect.top,
                size_rect.right - size_rect.left,
                size_rect.bottom - size_rect.top,
                SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE,
            )
        };

        if let Err(e) = result {
            warn!("Failed to set window position: {}", e.message());
        }
    }

    fn sync_system_menu(&self, maximize_enabled: bool, restore_enabled: bool) {
        let menu = unsafe { GetSystemMenu(self.handle, false) };
        if menu.0 == 0 {
            return;
        }

        let state = |enabled: bool| -> MENU_ITEM_FLAGS {
            MF_BYCOMMAND | if enabled { MF_ENABLED } else { MF_GRAYED }
        };

        unsafe {
            EnableMenuItem(menu, SC_MAXIMIZE, state(maximize_enabled));
            EnableMenuItem(menu, SC_RESTORE, state(restore_enabled));
        }
    }

    fn show_system_menu(&self, x: i32, y: i32) {
        let menu = unsafe { GetSystemMenu(self.handle, false) };
        if menu.0 == 0 {
            return;
        }

        let command = unsafe {
            TrackPopupMenu(menu, TPM_RETURNCMD | TPM_RIGHTBUTTON, x, y, 0, self.handle, None)
        };

        if command.0 != 0 {
            unsafe {
                SendMessageW(
                    self.handle,
                    WM_SYSCOMMAND,
                    WPARAM(command.0 as usize),
                    LPARAM(0),
                )
            };
        }
    }
}

impl EffectSink for Win32Effects {
    fn apply(&mut self, effect: Effect) {
        debug!(?effect, "applying chrome effect");

        match effect {
            Effect::Invalidate(rect) => {
                let rect = to_win32_rect(rect);
                unsafe { InvalidateRect(self.handle, Some(&rect), false) };
            }
            Effect::RefreshFrame => self.refresh_frame(),
            Effect::CloseWindow => {
                if let Err(e) = unsafe { PostMessageW(self.handle, WM_CLOSE, WPARAM(0), LPARAM(0)) } {
                    warn!("Failed to post message: {}", e.message());
                }
            }
            Effect::ShowWindow(command) => {
                let mode = match command {
                    ShowCommand::Minimize => SW_MINIMIZE,
                    ShowCommand::Maximize => SW_MAXIMIZE,
                    ShowCommand::Restore => SW_RESTORE,
                };
                unsafe { ShowWindow(self.handle, mode) };
            }
            Effect::ShowModal { caption, text } => {
                let caption = HSTRING::from(caption.as_str());
                let text = HSTRING::from(text.as_str());
                unsafe {
                    MessageBoxW(
                        self.handle,
                        PCWSTR(text.as_ptr()),
                        PCWSTR(caption.as_ptr()),
                        MB_OK,
                    )
                };
            }
            Effect::SyncSystemMenu {
                maximize_enabled,
                restore_enabled,
            } => self.sync_system_menu(maximize_enabled, restore_enabled),
            Effect::ShowSystemMenu { at } => self.show_system_menu(at.x, at.y),
            Effect::Quit => unsafe { PostQuitMessage(0) },
        }
    }
}
