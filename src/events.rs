//! Chrome notifications and the controller that answers them.
//!
//! The platform adapter translates each window message it cares about into a
//! [`ChromeEvent`], calls [`ChromeController::handle`], returns the
//! [`Reply`] to the host and hands the effects to its executor.

use tracing::{debug, warn};

use crate::commands::{self, ShowState, SystemCommand};
use crate::config::ChromeConfig;
use crate::effects::Effect;
use crate::error::ChromeError;
use crate::frame::{self, FrameMetrics, MaximizedBounds};
use crate::geometry::ChromeGeometry;
use crate::hit_test::{self, HitTest, LogicalRegion};
use crate::host::{Host, WindowFrameMetrics};
use crate::hover::HoveredRegion;
use crate::paint::PaintPlan;
use crate::rect::{Point, Rect};
use crate::registry::{WindowChrome, WindowId, WindowRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeEvent {
    /// `WM_CREATE`
    Created,
    /// `WM_DESTROY`
    Destroyed,
    /// `WM_ACTIVATE`
    Activated,
    /// `WM_NCCALCSIZE` with `wParam` set; `proposed` is the new window rect.
    CalcSize { proposed: Rect },
    /// `WM_NCHITTEST`
    HitTest { screen: Point },
    /// `WM_NCMOUSEMOVE`; `hit` is decoded from `wParam`.
    NonClientPointerMove { hit: HitTest },
    /// `WM_MOUSEMOVE`
    ClientPointerMove,
    /// `WM_NCMOUSELEAVE`
    NonClientPointerLeave,
    /// `WM_NCLBUTTONDOWN`
    NonClientButtonDown { hit: HitTest },
    /// `WM_NCLBUTTONUP`
    NonClientButtonUp { hit: HitTest },
    /// `WM_NCRBUTTONDOWN`
    NonClientRightButtonDown { hit: HitTest, screen: Point },
    /// `WM_SYSCOMMAND`, raw `wParam`.
    SystemCommand { w_param: usize },
    /// `WM_GETMINMAXINFO`
    GetMinMaxInfo,
    /// `WM_PAINT`; `damaged` is the update region's bounding rect.
    Paint { damaged: Rect },
}

/// What the window procedure should return to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Let the host's default handler process the message.
    Default,
    /// The message was consumed (return 0).
    Handled,
    HitTest(HitTest),
    ClientArea(Rect),
    MaximizedBounds(MaximizedBounds),
    Paint(PaintPlan),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub reply: Reply,
    pub effects: Vec<Effect>,
}

impl Outcome {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            effects: Vec::new(),
        }
    }

    pub fn with_effects(reply: Reply, effects: Vec<Effect>) -> Self {
        Self { reply, effects }
    }

    pub fn default_processing() -> Self {
        Self::new(Reply::Default)
    }

    pub fn handled() -> Self {
        Self::new(Reply::Handled)
    }
}

/// Owns the configuration and every window's chrome state.
#[derive(Debug, Default)]
pub struct ChromeController {
    config: ChromeConfig,
    windows: WindowRegistry,
}

impl ChromeController {
    pub fn new(config: ChromeConfig) -> Self {
        Self {
            config,
            windows: WindowRegistry::new(),
        }
    }

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    pub fn windows(&self) -> &WindowRegistry {
        &self.windows
    }

    pub fn hovered(&self, id: WindowId) -> HoveredRegion {
        self.windows
            .get(id)
            .map_or(HoveredRegion::None, |chrome| chrome.hover.hovered())
    }

    pub fn handle<H: Host + ?Sized>(&mut self, id: WindowId, host: &H, event: ChromeEvent) -> Outcome {
        match event {
            ChromeEvent::Created => self.on_created(id, host),
            ChromeEvent::Destroyed => self.on_destroyed(id),
            ChromeEvent::Activated => self.on_activated(host),
            ChromeEvent::CalcSize { proposed } => on_calc_size(host, proposed),
            ChromeEvent::HitTest { screen } => self.on_hit_test(host, screen),
            ChromeEvent::NonClientPointerMove { hit } => self.on_pointer_move(id, host, hit),
            ChromeEvent::ClientPointerMove | ChromeEvent::NonClientPointerLeave => {
                self.on_client_pointer_move(id, host)
            }
            ChromeEvent::NonClientButtonDown { hit } => self.on_button_down(id, hit),
            ChromeEvent::NonClientButtonUp { hit } => self.on_button_up(id, host, hit),
            ChromeEvent::NonClientRightButtonDown { hit, screen } => on_right_button_down(hit, screen),
            ChromeEvent::SystemCommand { w_param } => on_system_command(host, w_param),
            ChromeEvent::GetMinMaxInfo => on_get_min_max_info(host),
            ChromeEvent::Paint { damaged } => self.on_paint(id, host, damaged),
        }
    }

    fn chrome_mut(&mut self, id: WindowId) -> Option<&mut WindowChrome> {
        let chrome = self.windows.get_mut(id);
        if chrome.is_none() {
            warn!("{}", ChromeError::UnknownWindow(id));
        }
        chrome
    }

    fn geometry<H: Host + ?Sized>(&self, host: &H) -> ChromeGeometry {
        ChromeGeometry::compute(&WindowFrameMetrics::query(host), &self.config)
    }

    fn on_created<H: Host + ?Sized>(&mut self, id: WindowId, host: &H) -> Outcome {
        debug!(?id, "window created");
        self.windows.register(id);

        Outcome::with_effects(
            Reply::Handled,
            vec![
                Effect::RefreshFrame,
                commands::sync_system_menu(show_state(host)),
            ],
        )
    }

    fn on_destroyed(&mut self, id: WindowId) -> Outcome {
        debug!(?id, "window destroyed");
        self.windows.unregister(id);

        Outcome::with_effects(Reply::Handled, vec![Effect::Quit])
    }

    fn on_activated<H: Host + ?Sized>(&self, host: &H) -> Outcome {
        let title_bar = self.geometry(host).title_bar;
        let effects = if title_bar.is_empty() {
            Vec::new()
        } else {
            vec![Effect::Invalidate(title_bar)]
        };

        Outcome::with_effects(Reply::Default, effects)
    }

    fn on_hit_test<H: Host + ?Sized>(&self, host: &H, screen: Point) -> Outcome {
        Outcome::new(Reply::HitTest(hit_test::resolve(host, &self.config, screen)))
    }

    fn on_pointer_move<H: Host + ?Sized>(&mut self, id: WindowId, host: &H, hit: HitTest) -> Outcome {
        let buttons = self.geometry(host).buttons;
        let Some(chrome) = self.chrome_mut(id) else {
            return Outcome::default_processing();
        };

        let effects = chrome.hover.on_pointer_move(hit, &buttons).into_iter().collect();
        Outcome::with_effects(Reply::Handled, effects)
    }

    fn on_client_pointer_move<H: Host + ?Sized>(&mut self, id: WindowId, host: &H) -> Outcome {
        if self.hovered(id) == HoveredRegion::None {
            return Outcome::default_processing();
        }

        let buttons = self.geometry(host).buttons;
        let effects = self
            .chrome_mut(id)
            .and_then(|chrome| chrome.hover.on_pointer_move_over_client(&buttons))
            .into_iter()
            .collect();

        Outcome::with_effects(Reply::Default, effects)
    }

    fn on_button_down(&mut self, id: WindowId, hit: HitTest) -> Outcome {
        let Some(chrome) = self.chrome_mut(id) else {
            return Outcome::default_processing();
        };

        chrome.pressed = hit.button();
        // A press on a button must not reach the host, which would start a
        // caption drag. Caption and frame presses keep native drag, resize
        // and double-click.
        if chrome.pressed.is_some() {
            Outcome::handled()
        } else {
            Outcome::default_processing()
        }
    }

    fn on_button_up<H: Host + ?Sized>(&mut self, id: WindowId, host: &H, hit: HitTest) -> Outcome {
        let config = &self.config;
        let Some(chrome) = self.windows.get_mut(id) else {
            warn!("{}", ChromeError::UnknownWindow(id));
            return Outcome::default_processing();
        };

        let pressed = chrome.pressed.take();
        let Some(button) = hit.button() else {
            return Outcome::default_processing();
        };

        if pressed != Some(button) {
            debug!(?pressed, released = ?button, "caption press cancelled");
            return Outcome::handled();
        }

        let (_, effects) = commands::on_button_activated(show_state(host), button, config);
        Outcome::with_effects(Reply::Handled, effects)
    }

    fn on_paint<H: Host + ?Sized>(&self, id: WindowId, host: &H, damaged: Rect) -> Outcome {
        let metrics = WindowFrameMetrics::query(host);
        let plan = PaintPlan::build(&metrics, &self.config, self.hovered(id), damaged);
        Outcome::new(Reply::Paint(plan))
    }
}

fn show_state<H: Host + ?Sized>(host: &H) -> ShowState {
    if host.is_minimized() {
        return ShowState::Minimized;
    }

    let maximized = host.is_maximized().unwrap_or_else(|e| {
        warn!("Failed to get window maximized state: {e}");
        false
    });
    ShowState::from_maximized(maximized)
}

fn on_calc_size<H: Host + ?Sized>(host: &H, proposed: Rect) -> Outcome {
    let dpi = host.dpi();
    let frame = FrameMetrics::query(host, dpi);
    let maximized = show_state(host) == ShowState::Maximized;

    Outcome::new(Reply::ClientArea(frame::extend_client_area(
        proposed, frame, maximized,
    )))
}

fn on_right_button_down(hit: HitTest, screen: Point) -> Outcome {
    if hit != HitTest::Region(LogicalRegion::Caption) {
        return Outcome::default_processing();
    }

    Outcome::with_effects(Reply::Handled, vec![Effect::ShowSystemMenu { at: screen }])
}

fn on_system_command<H: Host + ?Sized>(host: &H, w_param: usize) -> Outcome {
    let Some(command) = SystemCommand::from_code(w_param) else {
        return Outcome::default_processing();
    };

    let (_, effects) = commands::on_system_command(show_state(host), command);
    Outcome::with_effects(Reply::Handled, effects)
}

fn on_get_min_max_info<H: Host + ?Sized>(host: &H) -> Outcome {
    Outcome::new(Reply::MaximizedBounds(MaximizedBounds::query(host, host.dpi())))
}
