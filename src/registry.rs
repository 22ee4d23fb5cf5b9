//! Per-window chrome state, keyed by window handle.

use std::collections::HashMap;

use crate::geometry::ChromeButton;
use crate::hover::HoverTracker;

/// Opaque window identity (the raw `HWND` value on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub isize);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowChrome {
    pub hover: HoverTracker,
    // set on non-client left press, taken on release
    pub pressed: Option<ChromeButton>,
}

#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: HashMap<WindowId, WindowChrome>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `id` with fresh state. Re-registering resets it.
    pub fn register(&mut self, id: WindowId) -> &mut WindowChrome {
        let chrome = self.windows.entry(id).or_default();
        *chrome = WindowChrome::default();
        chrome
    }

    pub fn unregister(&mut self, id: WindowId) -> Option<WindowChrome> {
        self.windows.remove(&id)
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowChrome> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowChrome> {
        self.windows.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
