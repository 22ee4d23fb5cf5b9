use caption_chrome::error::Result;
use caption_chrome::{
    ChromeButton, ChromeConfig, ChromeController, ChromeError, ChromeEvent, DefaultHit, Effect,
    EffectSink, FrameRegion, GlyphState, HitTest, Host, HoveredRegion, LogicalRegion, Point,
    Rect, Reply, ShowCommand, SystemMetric, WindowId,
};

const WINDOW: WindowId = WindowId(0x10);

/// A window whose client area starts at `origin` on screen.
struct FakeHost {
    origin: Point,
    size: (i32, i32),
    dpi: u32,
    maximized: bool,
    minimized: bool,
    caption_height: Option<i32>,
    border: i32,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            origin: Point::new(100, 200),
            size: (800, 600),
            dpi: 96,
            maximized: false,
            minimized: false,
            caption_height: Some(20),
            border: 8,
        }
    }
}

impl FakeHost {
    fn screen(&self, x: i32, y: i32) -> Point {
        Point::new(self.origin.x + x, self.origin.y + y)
    }
}

impl Host for FakeHost {
    fn client_rect(&self) -> Result<Rect> {
        Ok(Rect::from_size(self.size.0, self.size.1))
    }

    fn dpi(&self) -> u32 {
        self.dpi
    }

    fn is_maximized(&self) -> Result<bool> {
        Ok(self.maximized)
    }

    fn is_minimized(&self) -> bool {
        self.minimized
    }

    fn caption_height(&self) -> Result<i32> {
        self.caption_height
            .ok_or_else(|| ChromeError::ThemeUnavailable("WINDOW".into()))
    }

    fn system_metric(&self, metric: SystemMetric, _dpi: u32) -> i32 {
        match metric {
            SystemMetric::FrameX | SystemMetric::FrameY | SystemMetric::PaddedBorder => 4,
            SystemMetric::MaximizedWidth => 1936,
            SystemMetric::MaximizedHeight => 1056,
            SystemMetric::VirtualScreenX | SystemMetric::VirtualScreenY => 0,
        }
    }

    fn default_hit_test(&self, screen: Point) -> DefaultHit {
        let local = self.screen_to_client(screen);
        if local.x < -self.border || local.y < -self.border {
            DefaultHit::Frame(FrameRegion::Nowhere)
        } else if local.x < 0 {
            DefaultHit::Frame(FrameRegion::Left)
        } else if local.x >= self.size.0 {
            DefaultHit::Frame(FrameRegion::Right)
        } else if local.y >= self.size.1 {
            DefaultHit::Frame(FrameRegion::Bottom)
        } else {
            DefaultHit::ClientArea
        }
    }

    fn screen_to_client(&self, screen: Point) -> Point {
        Point::new(screen.x - self.origin.x, screen.y - self.origin.y)
    }
}

fn controller() -> ChromeController {
    let mut controller = ChromeController::new(ChromeConfig::default());
    controller.handle(WINDOW, &FakeHost::default(), ChromeEvent::Created);
    controller
}

fn hit_at(controller: &mut ChromeController, host: &FakeHost, x: i32, y: i32) -> HitTest {
    let screen = host.screen(x, y);
    match controller.handle(WINDOW, host, ChromeEvent::HitTest { screen }).reply {
        Reply::HitTest(hit) => hit,
        other => panic!("expected a hit-test reply, got {other:?}"),
    }
}

/// Hit-test then feed the answer back as the host would for a pointer move.
fn move_to(controller: &mut ChromeController, host: &FakeHost, x: i32, y: i32) -> Vec<Effect> {
    let hit = hit_at(controller, host, x, y);
    controller
        .handle(WINDOW, host, ChromeEvent::NonClientPointerMove { hit })
        .effects
}

fn click(controller: &mut ChromeController, host: &FakeHost, x: i32, y: i32) -> Vec<Effect> {
    let hit = hit_at(controller, host, x, y);
    controller.handle(WINDOW, host, ChromeEvent::NonClientButtonDown { hit });
    controller
        .handle(WINDOW, host, ChromeEvent::NonClientButtonUp { hit })
        .effects
}

#[test]
fn creation_registers_and_extends_frame() {
    let mut controller = ChromeController::new(ChromeConfig::default());
    let outcome = controller.handle(WINDOW, &FakeHost::default(), ChromeEvent::Created);

    assert_eq!(outcome.reply, Reply::Handled);
    assert_eq!(
        outcome.effects,
        vec![
            Effect::RefreshFrame,
            Effect::SyncSystemMenu {
                maximize_enabled: true,
                restore_enabled: false,
            },
        ]
    );
    assert_eq!(controller.windows().len(), 1);
    assert_eq!(controller.hovered(WINDOW), HoveredRegion::None);
}

#[test]
fn close_button_scenario() {
    let mut controller = controller();
    let host = FakeHost::default();

    // Title bar is 22 high at 96 DPI; close covers x in [753, 800).
    assert_eq!(
        hit_at(&mut controller, &host, 790, 10),
        HitTest::Region(LogicalRegion::CloseButton)
    );
    assert_eq!(
        hit_at(&mut controller, &host, 753, 10),
        HitTest::Region(LogicalRegion::CloseButton)
    );
    assert_eq!(
        hit_at(&mut controller, &host, 752, 10),
        HitTest::Region(LogicalRegion::MaxButton)
    );
    assert_eq!(
        hit_at(&mut controller, &host, 300, 10),
        HitTest::Region(LogicalRegion::Caption)
    );
    assert_eq!(
        hit_at(&mut controller, &host, 300, 22),
        HitTest::Region(LogicalRegion::Client)
    );
}

#[test]
fn host_frame_regions_pass_through() {
    let mut controller = controller();
    let host = FakeHost::default();

    assert_eq!(
        hit_at(&mut controller, &host, -3, 10),
        HitTest::Frame(FrameRegion::Left)
    );
    assert_eq!(
        hit_at(&mut controller, &host, 400, 603),
        HitTest::Frame(FrameRegion::Bottom)
    );
    assert_eq!(
        hit_at(&mut controller, &host, 803, 10),
        HitTest::Frame(FrameRegion::Right)
    );
}

#[test]
fn resolve_is_pure() {
    let mut controller = controller();
    let host = FakeHost::default();

    for (x, y) in [(790, 10), (10, 10), (400, 400), (-2, 5), (700, 21)] {
        let first = hit_at(&mut controller, &host, x, y);
        let second = hit_at(&mut controller, &host, x, y);
        assert_eq!(first, second, "({x}, {y})");
    }
    assert_eq!(controller.hovered(WINDOW), HoveredRegion::None);
}

#[test]
fn top_resize_band_is_opt_in() {
    let host = FakeHost::default();

    let mut plain = controller();
    assert_eq!(
        hit_at(&mut plain, &host, 300, 3),
        HitTest::Region(LogicalRegion::Caption)
    );

    let mut banded = ChromeController::new(ChromeConfig::new().with_top_resize_band(true));
    banded.handle(WINDOW, &host, ChromeEvent::Created);
    assert_eq!(
        hit_at(&mut banded, &host, 300, 3),
        HitTest::Frame(FrameRegion::Top)
    );
    assert_eq!(
        hit_at(&mut banded, &host, 300, 8),
        HitTest::Region(LogicalRegion::Caption)
    );

    let maximized = FakeHost {
        maximized: true,
        ..FakeHost::default()
    };
    assert_eq!(
        hit_at(&mut banded, &maximized, 300, 3),
        HitTest::Region(LogicalRegion::Caption)
    );
}

#[test]
fn top_resize_band_leaves_buttons_whole() {
    let host = FakeHost::default();
    let mut controller = ChromeController::new(ChromeConfig::new().with_top_resize_band(true));
    controller.handle(WINDOW, &host, ChromeEvent::Created);

    for y in [1, 5, 7, 8] {
        assert_eq!(
            hit_at(&mut controller, &host, 790, y),
            HitTest::Region(LogicalRegion::CloseButton),
            "close at y = {y}"
        );
    }
    assert_eq!(
        hit_at(&mut controller, &host, 630, 5),
        HitTest::Region(LogicalRegion::HelpButton)
    );
    // Row 0 sits above the band; caption columns inside it resize.
    assert_eq!(
        hit_at(&mut controller, &host, 790, 0),
        HitTest::Region(LogicalRegion::Caption)
    );
    assert_eq!(
        hit_at(&mut controller, &host, 600, 5),
        HitTest::Frame(FrameRegion::Top)
    );

    move_to(&mut controller, &host, 790, 5);
    assert_eq!(controller.hovered(WINDOW), HoveredRegion::Close);
}

#[test]
fn hover_moves_invalidate_old_and_new() {
    let mut controller = controller();
    let host = FakeHost::default();
    let close = Rect::new(753, 1, 800, 22);
    let minimize = Rect::new(659, 1, 706, 22);

    let mut effects = Vec::new();
    effects.apply_all(move_to(&mut controller, &host, 790, 10));
    assert_eq!(controller.hovered(WINDOW), HoveredRegion::Close);
    effects.apply_all(move_to(&mut controller, &host, 680, 10));
    assert_eq!(controller.hovered(WINDOW), HoveredRegion::Minimize);

    assert_eq!(
        effects,
        vec![
            Effect::Invalidate(close),
            Effect::Invalidate(close.union(&minimize)),
        ]
    );
}

#[test]
fn repeated_hover_is_idempotent() {
    let mut controller = controller();
    let host = FakeHost::default();

    let first = move_to(&mut controller, &host, 790, 10);
    let second = move_to(&mut controller, &host, 795, 15);

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn entering_content_clears_hover() {
    let mut controller = controller();
    let host = FakeHost::default();
    move_to(&mut controller, &host, 630, 10);
    assert_eq!(controller.hovered(WINDOW), HoveredRegion::Help);

    let outcome = controller.handle(WINDOW, &host, ChromeEvent::ClientPointerMove);
    assert_eq!(outcome.reply, Reply::Default);
    assert_eq!(outcome.effects, vec![Effect::Invalidate(Rect::new(612, 1, 659, 22))]);
    assert_eq!(controller.hovered(WINDOW), HoveredRegion::None);

    let outcome = controller.handle(WINDOW, &host, ChromeEvent::ClientPointerMove);
    assert!(outcome.effects.is_empty());
}

#[test]
fn leaving_window_clears_hover() {
    let mut controller = controller();
    let host = FakeHost::default();
    move_to(&mut controller, &host, 790, 5);
    assert_eq!(controller.hovered(WINDOW), HoveredRegion::Close);

    let outcome = controller.handle(WINDOW, &host, ChromeEvent::NonClientPointerLeave);
    assert_eq!(outcome.reply, Reply::Default);
    assert_eq!(outcome.effects, vec![Effect::Invalidate(Rect::new(753, 1, 800, 22))]);
    assert_eq!(controller.hovered(WINDOW), HoveredRegion::None);

    let outcome = controller.handle(WINDOW, &host, ChromeEvent::NonClientPointerLeave);
    assert!(outcome.effects.is_empty());
}

#[test]
fn buttons_dispatch_commands() {
    let mut controller = controller();
    let host = FakeHost::default();

    assert_eq!(click(&mut controller, &host, 790, 10), vec![Effect::CloseWindow]);
    assert_eq!(
        click(&mut controller, &host, 680, 10)[0],
        Effect::ShowWindow(ShowCommand::Minimize)
    );
    assert_eq!(
        click(&mut controller, &host, 720, 10)[0],
        Effect::ShowWindow(ShowCommand::Maximize)
    );
    assert!(matches!(
        click(&mut controller, &host, 630, 10)[0],
        Effect::ShowModal { .. }
    ));

    let maximized = FakeHost {
        maximized: true,
        ..FakeHost::default()
    };
    assert_eq!(
        click(&mut controller, &maximized, 720, 10),
        vec![
            Effect::ShowWindow(ShowCommand::Restore),
            Effect::SyncSystemMenu {
                maximize_enabled: true,
                restore_enabled: false,
            },
        ]
    );
}

#[test]
fn press_is_swallowed_and_release_elsewhere_cancels() {
    let mut controller = controller();
    let host = FakeHost::default();

    let close = hit_at(&mut controller, &host, 790, 10);
    let down = controller.handle(WINDOW, &host, ChromeEvent::NonClientButtonDown { hit: close });
    assert_eq!(down.reply, Reply::Handled);
    assert!(down.effects.is_empty());

    let minimize = hit_at(&mut controller, &host, 680, 10);
    let up = controller.handle(WINDOW, &host, ChromeEvent::NonClientButtonUp { hit: minimize });
    assert_eq!(up.reply, Reply::Handled);
    assert!(up.effects.is_empty());

    // The cancelled press does not linger.
    let up = controller.handle(WINDOW, &host, ChromeEvent::NonClientButtonUp { hit: close });
    assert!(up.effects.is_empty());
}

#[test]
fn caption_press_keeps_native_drag() {
    let mut controller = controller();
    let host = FakeHost::default();

    let caption = hit_at(&mut controller, &host, 300, 10);
    let outcome = controller.handle(WINDOW, &host, ChromeEvent::NonClientButtonDown { hit: caption });

    assert_eq!(outcome.reply, Reply::Default);
    assert!(outcome.effects.is_empty());
}

#[test]
fn caption_right_click_opens_system_menu() {
    let mut controller = controller();
    let host = FakeHost::default();
    let screen = host.screen(300, 10);

    let outcome = controller.handle(
        WINDOW,
        &host,
        ChromeEvent::NonClientRightButtonDown {
            hit: HitTest::Region(LogicalRegion::Caption),
            screen,
        },
    );
    assert_eq!(outcome.effects, vec![Effect::ShowSystemMenu { at: screen }]);

    let outcome = controller.handle(
        WINDOW,
        &host,
        ChromeEvent::NonClientRightButtonDown {
            hit: HitTest::Region(LogicalRegion::CloseButton),
            screen,
        },
    );
    assert_eq!(outcome.reply, Reply::Default);
}

#[test]
fn system_commands_sync_menu() {
    let mut controller = controller();
    let host = FakeHost::default();

    let outcome = controller.handle(WINDOW, &host, ChromeEvent::SystemCommand { w_param: 0xF030 });
    assert_eq!(outcome.reply, Reply::Handled);
    assert_eq!(
        outcome.effects,
        vec![
            Effect::ShowWindow(ShowCommand::Maximize),
            Effect::SyncSystemMenu {
                maximize_enabled: false,
                restore_enabled: true,
            },
        ]
    );

    let minimized = FakeHost {
        minimized: true,
        ..FakeHost::default()
    };
    let outcome = controller.handle(WINDOW, &minimized, ChromeEvent::SystemCommand { w_param: 0xF120 });
    assert_eq!(outcome.effects[0], Effect::ShowWindow(ShowCommand::Restore));

    // SC_MOVE stays with the host.
    let outcome = controller.handle(WINDOW, &host, ChromeEvent::SystemCommand { w_param: 0xF010 });
    assert_eq!(outcome.reply, Reply::Default);
    assert!(outcome.effects.is_empty());
}

#[test]
fn calc_size_extends_client_over_caption() {
    let mut controller = controller();
    let proposed = Rect::new(100, 100, 916, 739);

    let outcome = controller.handle(WINDOW, &FakeHost::default(), ChromeEvent::CalcSize { proposed });
    assert_eq!(outcome.reply, Reply::ClientArea(Rect::new(108, 100, 908, 731)));

    let maximized = FakeHost {
        maximized: true,
        ..FakeHost::default()
    };
    let outcome = controller.handle(WINDOW, &maximized, ChromeEvent::CalcSize { proposed });
    assert_eq!(outcome.reply, Reply::ClientArea(Rect::new(108, 104, 908, 731)));
}

#[test]
fn activation_repaints_title_bar() {
    let mut controller = controller();
    let outcome = controller.handle(WINDOW, &FakeHost::default(), ChromeEvent::Activated);

    assert_eq!(outcome.reply, Reply::Default);
    assert_eq!(outcome.effects, vec![Effect::Invalidate(Rect::new(0, 0, 800, 22))]);
}

#[test]
fn maximized_paint_and_hit_test_agree() {
    let mut controller = controller();
    let host = FakeHost {
        maximized: true,
        ..FakeHost::default()
    };

    // 754 is the first column of close normally, but maximize once shifted.
    move_to(&mut controller, &host, 754, 10);
    assert_eq!(controller.hovered(WINDOW), HoveredRegion::Maximize);

    let outcome = controller.handle(
        WINDOW,
        &host,
        ChromeEvent::Paint {
            damaged: Rect::from_size(800, 600),
        },
    );
    let Reply::Paint(plan) = outcome.reply else {
        panic!("expected a paint plan");
    };

    let hot: Vec<_> = plan
        .buttons
        .iter()
        .filter(|b| b.state == GlyphState::Hot)
        .collect();
    assert_eq!(hot.len(), 1);
    assert_eq!(hot[0].button, ChromeButton::Maximize);
    assert_eq!(hot[0].rect, Rect::new(708, 3, 755, 24));
    assert!(hot[0].rect.contains(Point::new(754, 10)));
    assert!(plan.maximized);

    // The shifted rect hangs below the title bar; those rows stay client.
    let below = Point::new(754, plan.title_bar.bottom);
    assert!(hot[0].rect.contains(below));
    assert_eq!(
        hit_at(&mut controller, &host, below.x, below.y),
        HitTest::Region(LogicalRegion::Client)
    );
}

#[test]
fn geometry_follows_dpi_changes() {
    let mut controller = controller();
    let host = FakeHost {
        dpi: 144,
        size: (1200, 900),
        ..FakeHost::default()
    };

    // Caption 30 + 2, buttons 70 wide.
    assert_eq!(
        hit_at(&mut controller, &host, 1130, 31),
        HitTest::Region(LogicalRegion::CloseButton)
    );
    assert_eq!(
        hit_at(&mut controller, &host, 1129, 31),
        HitTest::Region(LogicalRegion::MaxButton)
    );
    assert_eq!(
        hit_at(&mut controller, &host, 1130, 32),
        HitTest::Region(LogicalRegion::Client)
    );
}

#[test]
fn missing_theme_degrades_to_client() {
    let mut controller = controller();
    let host = FakeHost {
        caption_height: None,
        ..FakeHost::default()
    };

    assert_eq!(
        hit_at(&mut controller, &host, 790, 10),
        HitTest::Region(LogicalRegion::Client)
    );
    assert!(move_to(&mut controller, &host, 790, 10).is_empty());
}

#[test]
fn maximized_bounds_from_system_metrics() {
    let mut controller = controller();
    let outcome = controller.handle(WINDOW, &FakeHost::default(), ChromeEvent::GetMinMaxInfo);

    let Reply::MaximizedBounds(bounds) = outcome.reply else {
        panic!("expected maximized bounds");
    };
    assert_eq!(bounds.size, Point::new(1936, 1056));
    assert_eq!(bounds.position, Point::new(0, 0));
}

#[test]
fn destroy_forgets_window_and_quits() {
    let mut controller = controller();
    let host = FakeHost::default();
    move_to(&mut controller, &host, 790, 10);

    let outcome = controller.handle(WINDOW, &host, ChromeEvent::Destroyed);
    assert_eq!(outcome.effects, vec![Effect::Quit]);
    assert!(controller.windows().is_empty());
    assert_eq!(controller.hovered(WINDOW), HoveredRegion::None);

    let hit = HitTest::Region(LogicalRegion::CloseButton);
    let outcome = controller.handle(WINDOW, &host, ChromeEvent::NonClientPointerMove { hit });
    assert_eq!(outcome.reply, Reply::Default);
    assert!(outcome.effects.is_empty());
}
