//! Turns caption button clicks and system commands into window commands.

use tracing::debug;

use crate::config::ChromeConfig;
use crate::effects::{Effect, ShowCommand};
use crate::geometry::ChromeButton;

/// `WM_SYSCOMMAND` codes, already masked with `0xFFF0`.
pub mod codes {
    pub const SC_MINIMIZE: u32 = 0xF020;
    pub const SC_MAXIMIZE: u32 = 0xF030;
    pub const SC_CLOSE: u32 = 0xF060;
    pub const SC_RESTORE: u32 = 0xF120;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

impl ShowState {
    pub fn from_maximized(maximized: bool) -> Self {
        if maximized {
            Self::Maximized
        } else {
            Self::Normal
        }
    }

    /// Show state after `command`. Defined for every state and command.
    pub fn apply(self, command: SystemCommand) -> Self {
        match command {
            SystemCommand::Minimize => Self::Minimized,
            SystemCommand::Maximize => Self::Maximized,
            SystemCommand::Restore => Self::Normal,
            SystemCommand::Close => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemCommand {
    Close,
    Minimize,
    Maximize,
    Restore,
}

impl SystemCommand {
    pub const ALL: [SystemCommand; 4] = [
        SystemCommand::Close,
        SystemCommand::Minimize,
        SystemCommand::Maximize,
        SystemCommand::Restore,
    ];

    /// Decodes a `WM_SYSCOMMAND` `wParam`. The low four bits are used by the
    /// system internally and ignored.
    pub const fn from_code(w_param: usize) -> Option<Self> {
        match (w_param & 0xFFF0) as u32 {
            codes::SC_CLOSE => Some(Self::Close),
            codes::SC_MINIMIZE => Some(Self::Minimize),
            codes::SC_MAXIMIZE => Some(Self::Maximize),
            codes::SC_RESTORE => Some(Self::Restore),
            _ => None,
        }
    }

    pub const fn code(self) -> u32 {
        match self {
            Self::Close => codes::SC_CLOSE,
            Self::Minimize => codes::SC_MINIMIZE,
            Self::Maximize => codes::SC_MAXIMIZE,
            Self::Restore => codes::SC_RESTORE,
        }
    }
}

/// Handles a window-manager command and resynchronizes the system menu.
///
/// Returns the resulting show state with the effects to apply.
pub fn on_system_command(state: ShowState, command: SystemCommand) -> (ShowState, Vec<Effect>) {
    let next = state.apply(command);
    debug!(?command, from = ?state, to = ?next, "system command");

    let transition = match command {
        SystemCommand::Close => Effect::CloseWindow,
        SystemCommand::Minimize => Effect::ShowWindow(ShowCommand::Minimize),
        SystemCommand::Maximize => Effect::ShowWindow(ShowCommand::Maximize),
        SystemCommand::Restore => Effect::ShowWindow(ShowCommand::Restore),
    };

    (next, vec![transition, sync_system_menu(next)])
}

/// Maximize is offered only when not maximized, restore only when maximized.
pub fn sync_system_menu(state: ShowState) -> Effect {
    let maximized = state == ShowState::Maximized;
    Effect::SyncSystemMenu {
        maximize_enabled: !maximized,
        restore_enabled: maximized,
    }
}

/// Runs the action behind a clicked caption button.
pub fn on_button_activated(
    state: ShowState,
    button: ChromeButton,
    config: &ChromeConfig,
) -> (ShowState, Vec<Effect>) {
    debug!(?button, "caption button activated");

    match button {
        ChromeButton::Help => (
            state,
            vec![Effect::ShowModal {
                caption: config.help_caption.clone(),
                text: config.help_text.clone(),
            }],
        ),
        ChromeButton::Close => (state, vec![Effect::CloseWindow]),
        ChromeButton::Minimize => on_system_command(state, SystemCommand::Minimize),
        ChromeButton::Maximize => {
            let command = if state == ShowState::Maximized {
                SystemCommand::Restore
            } else {
                SystemCommand::Maximize
            };
            on_system_command(state, command)
        }
    }
}
