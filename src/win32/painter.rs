use std::mem::size_of;

use tracing::warn;
use windows::{
    core::w,
    Win32::{
        Foundation::{COLORREF, HWND},
        Graphics::Gdi::{
            CreateFontIndirectW, CreatePen, CreateSolidBrush, DeleteObject, DrawTextW, FillRect,
            GetStockObject, LineTo, MoveToEx, Rectangle, SelectObject, SetBkMode, SetTextColor,
            DT_CENTER, DT_SINGLELINE, DT_VCENTER, DT_WORD_ELLIPSIS, HDC, HFONT, HOLLOW_BRUSH,
            LOGFONTW, PS_SOLID, TRANSPARENT,
        },
        UI::{
            Controls::{
                CloseThemeData, DrawThemeTextEx, OpenThemeData, CS_ACTIVE, DTTOPTS,
                DTT_TEXTCOLOR, HTHEME, WP_CAPTION,
            },
            HiDpi::{GetDpiForWindow, SystemParametersInfoForDpi},
            Input::KeyboardAndMouse::GetFocus,
            WindowsAndMessaging::{GetWindowTextLengthW, GetWindowTextW, SPI_GETICONTITLELOGFONT},
        },
    },
};

use crate::geometry::ChromeButton;
use crate::paint::{ButtonPaint, GlyphState, ThemePainter};
use crate::rect::Rect;

use super::to_win32_rect;

const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16)
}

const fn get_r_value(rgb: u32) -> u8 {
    (rgb & 0xff) as u8
}

const fn get_g_value(rgb: u32) -> u8 {
    ((rgb >> 8) & 0xff) as u8
}

const fn get_b_value(rgb: u32) -> u8 {
    ((rgb >> 16) & 0xff) as u8
}

/// Per-channel average of two `COLORREF` values.
const fn blend(a: u32, b: u32) -> u32 {
    const fn average(x: u8, y: u8) -> u8 {
        ((x as u32 + y as u32) / 2) as u8
    }

    rgb(
        average(get_r_value(a), get_r_value(b)),
        average(get_g_value(a), get_g_value(b)),
        average(get_b_value(a), get_b_value(b)),
    )
}

const BACKGROUND_COLOR: u32 = rgb(200, 250, 230);
const TITLE_BAR_COLOR: u32 = rgb(150, 200, 180);
const SHADOW_COLOR: u32 = rgb(100, 100, 100);
const BUTTON_HOVER_COLOR: u32 = rgb(130, 180, 160);
const CLOSE_HOVER_COLOR: u32 = rgb(255, 0, 0);

/// How far the back window of the restore glyph sticks out.
const RESTORE_GLYPH_OFFSET: i32 = 2;

/// Paints a [`PaintPlan`](crate::paint::PaintPlan) with GDI. The `WINDOW`
/// visual style is only used for the caption text. Lives for one
/// `BeginPaint`/`EndPaint` pair.
pub(super) struct GdiPainter {
    handle: HWND,
    hdc: HDC,
    theme: HTHEME,
    has_focus: bool,
}

impl GdiPainter {
    pub(super) unsafe fn new(handle: HWND, hdc: HDC) -> Self {
        Self {
            handle,
            hdc,
            theme: OpenThemeData(handle, w!("WINDOW")),
            has_focus: GetFocus() == handle,
        }
    }

    unsafe fn fill(&self, rect: Rect, color: u32) {
        let brush = CreateSolidBrush(COLORREF(color));
        FillRect(self.hdc, &to_win32_rect(rect), brush);
        DeleteObject(brush);
    }

    fn text_color(&self) -> COLORREF {
        COLORREF(if self.has_focus {
            rgb(33, 33, 33)
        } else {
            rgb(127, 127, 127)
        })
    }
}

impl Drop for GdiPainter {
    fn drop(&mut self) {
        if self.theme.0 == 0 {
            return;
        }
        if let Err(e) = unsafe { CloseThemeData(self.theme) } {
            warn!("Failed to close theme data: {}", e.message());
        }
    }
}

impl ThemePainter for GdiPainter {
    fn fill_background(&mut self, rect: Rect) {
        unsafe { self.fill(rect, BACKGROUND_COLOR) };
    }

    fn fill_title_bar(&mut self, rect: Rect) {
        unsafe { self.fill(rect, TITLE_BAR_COLOR) };
    }

    fn draw_title_text(&mut self, rect: Rect) {
        unsafe {
            let dpi = GetDpiForWindow(self.handle);
            let mut logical_font = LOGFONTW::default();
            let old_font = if SystemParametersInfoForDpi(
                SPI_GETICONTITLELOGFONT.0,
                size_of::<LOGFONTW>() as _,
                Some(&mut logical_font as *mut LOGFONTW as _),
                0,
                dpi,
            )
            .is_ok()
            {
                let theme_font = CreateFontIndirectW(&logical_font);
                HFONT(SelectObject(self.hdc, theme_font).0)
            } else {
                HFONT(0)
            };

            let text_length = GetWindowTextLengthW(self.handle);
            let mut title_text_buffer = vec![0u16; text_length as usize + 1];
            let copied = GetWindowTextW(self.handle, &mut title_text_buffer).max(0) as usize;

            let mut text_rect = to_win32_rect(rect);
            let draw_theme_options = DTTOPTS {
                dwSize: size_of::<DTTOPTS>() as u32,
                dwFlags: DTT_TEXTCOLOR,
                crText: self.text_color(),
                ..Default::default()
            };

            if let Err(e) = DrawThemeTextEx(
                self.theme,
                self.hdc,
                WP_CAPTION.0,
                CS_ACTIVE.0,
                &title_text_buffer[..copied],
                DT_VCENTER | DT_SINGLELINE | DT_WORD_ELLIPSIS,
                &mut text_rect,
                Some(&draw_theme_options),
            ) {
                warn!("Failed to draw theme text: {}", e.message());
            }

            if old_font != HFONT(0) {
                let theme_font = SelectObject(self.hdc, old_font);
                DeleteObject(theme_font);
            }
        }
    }

    fn draw_button_glyph(&mut self, paint: ButtonPaint, maximized: bool) {
        let hot = paint.state == GlyphState::Hot;
        let close_hot = hot && paint.button == ChromeButton::Close;

        unsafe {
            if close_hot {
                self.fill(paint.rect, CLOSE_HOVER_COLOR);
            } else if hot {
                self.fill(paint.rect, BUTTON_HOVER_COLOR);
            }

            let color = if close_hot {
                COLORREF(rgb(255, 255, 255))
            } else {
                self.text_color()
            };
            let pen = CreatePen(PS_SOLID, 1, color);
            let old_pen = SelectObject(self.hdc, pen);
            let old_brush = SelectObject(self.hdc, GetStockObject(HOLLOW_BRUSH));

            let glyph = paint.glyph;
            match paint.button {
                ChromeButton::Minimize => {
                    let line = paint.rect.center(glyph.width(), 1);
                    let brush = CreateSolidBrush(color);
                    FillRect(self.hdc, &to_win32_rect(line), brush);
                    DeleteObject(brush);
                }
                ChromeButton::Maximize => {
                    if maximized {
                        let offset = RESTORE_GLYPH_OFFSET;
                        Rectangle(
                            self.hdc,
                            glyph.left + offset,
                            glyph.top - offset,
                            glyph.right + offset,
                            glyph.bottom - offset,
                        );
                        // Hide the back window's edges behind the front one.
                        self.fill(glyph, if hot { BUTTON_HOVER_COLOR } else { TITLE_BAR_COLOR });
                    }
                    Rectangle(self.hdc, glyph.left, glyph.top, glyph.right, glyph.bottom);
                }
                ChromeButton::Close => {
                    MoveToEx(self.hdc, glyph.left, glyph.top, None);
                    LineTo(self.hdc, glyph.right + 1, glyph.bottom + 1);
                    MoveToEx(self.hdc, glyph.left, glyph.bottom, None);
                    LineTo(self.hdc, glyph.right + 1, glyph.top - 1);
                }
                ChromeButton::Help => {
                    let mut text: Vec<u16> = "?".encode_utf16().collect();
                    let mut rect = to_win32_rect(paint.rect);
                    SetBkMode(self.hdc, TRANSPARENT);
                    SetTextColor(self.hdc, color);
                    DrawTextW(
                        self.hdc,
                        &mut text,
                        &mut rect,
                        DT_CENTER | DT_VCENTER | DT_SINGLELINE,
                    );
                }
            }

            SelectObject(self.hdc, old_brush);
            SelectObject(self.hdc, old_pen);
            DeleteObject(pen);
        }
    }

    fn fill_shadow(&mut self, rect: Rect) {
        // The native top border is gone after the client extension; dim the
        // replacement when the window is inactive.
        let color = if self.has_focus {
            SHADOW_COLOR
        } else {
            blend(TITLE_BAR_COLOR, SHADOW_COLOR)
        };
        unsafe { self.fill(rect, color) };
    }
}
