use thiserror::Error;

use crate::registry::WindowId;

/// Failures reported by the host while answering a chrome query.
///
/// None of these abort a notification. The controller logs them and falls
/// back to native behavior (an empty title bar, or default processing).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    /// The visual style for the window class could not be opened or read.
    #[error("theme data unavailable: {0}")]
    ThemeUnavailable(String),

    /// A window query (client rect, placement, metrics) failed.
    #[error("host query `{query}` failed: {message}")]
    HostQuery {
        query: &'static str,
        message: String,
    },

    /// A notification arrived for a window that was never registered or
    /// has already been destroyed.
    #[error("no chrome state for window {0:?}")]
    UnknownWindow(WindowId),
}

pub type Result<T> = std::result::Result<T, ChromeError>;
