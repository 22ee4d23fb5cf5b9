//! Which caption button the pointer is over.
//!
//! The painted highlight reads this slot, so it only changes when a pointer
//! move lands on a different region. Each change invalidates just the old
//! and new button areas.

use tracing::debug;

use crate::effects::Effect;
use crate::geometry::{ButtonRects, ChromeButton};
use crate::hit_test::{HitTest, LogicalRegion};
use crate::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum HoveredRegion {
    #[default]
    None,
    Help,
    Close,
    Minimize,
    Maximize,
}

impl HoveredRegion {
    pub fn button(self) -> Option<ChromeButton> {
        match self {
            Self::None => None,
            Self::Help => Some(ChromeButton::Help),
            Self::Close => Some(ChromeButton::Close),
            Self::Minimize => Some(ChromeButton::Minimize),
            Self::Maximize => Some(ChromeButton::Maximize),
        }
    }

    fn rect(self, buttons: &ButtonRects) -> Rect {
        self.button()
            .map_or_else(Rect::default, |button| buttons.get(button))
    }
}

impl From<Option<ChromeButton>> for HoveredRegion {
    fn from(button: Option<ChromeButton>) -> Self {
        match button {
            None => Self::None,
            Some(ChromeButton::Help) => Self::Help,
            Some(ChromeButton::Close) => Self::Close,
            Some(ChromeButton::Minimize) => Self::Minimize,
            Some(ChromeButton::Maximize) => Self::Maximize,
        }
    }
}

impl From<HitTest> for HoveredRegion {
    fn from(hit: HitTest) -> Self {
        hit.button().into()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: HoveredRegion,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> HoveredRegion {
        self.hovered
    }

    /// Pointer moved over the non-client area; `hit` is the code the host
    /// got from our hit-test.
    ///
    /// Returns the invalidation for the change, or `None` when the hovered
    /// region is unchanged.
    pub fn on_pointer_move(&mut self, hit: HitTest, buttons: &ButtonRects) -> Option<Effect> {
        let next = HoveredRegion::from(hit);
        if next == self.hovered {
            return None;
        }

        let previous = std::mem::replace(&mut self.hovered, next);
        debug!(?previous, ?next, "caption hover changed");

        let dirty = previous.rect(buttons).union(&next.rect(buttons));
        (!dirty.is_empty()).then_some(Effect::Invalidate(dirty))
    }

    /// Pointer moved over the content area, so no button is hovered.
    pub fn on_pointer_move_over_client(&mut self, buttons: &ButtonRects) -> Option<Effect> {
        self.on_pointer_move(HitTest::Region(LogicalRegion::Client), buttons)
    }
}
