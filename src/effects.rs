//! Outward requests produced by the chrome handlers.
//!
//! Handlers never touch the window system. They return [`Effect`]s, and an
//! [`EffectSink`] owned by the platform adapter carries them out after the
//! handler has returned.

use crate::rect::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowCommand {
    Minimize,
    Maximize,
    Restore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Invalidate(Rect),
    // SWP_FRAMECHANGED, so WM_NCCALCSIZE runs again
    RefreshFrame,
    CloseWindow,
    ShowWindow(ShowCommand),
    /// Blocking acknowledgment box. Further notifications wait until it is
    /// dismissed.
    ShowModal { caption: String, text: String },
    /// Grey out whichever of maximize/restore does not apply.
    SyncSystemMenu {
        maximize_enabled: bool,
        restore_enabled: bool,
    },
    ShowSystemMenu { at: Point },
    Quit,
}

pub trait EffectSink {
    fn apply(&mut self, effect: Effect);

    fn apply_all(&mut self, effects: impl IntoIterator<Item = Effect>)
    where
        Self: Sized,
    {
        for effect in effects {
            self.apply(effect);
        }
    }
}

impl EffectSink for Vec<Effect> {
    fn apply(&mut self, effect: Effect) {
        self.push(effect);
    }
}
