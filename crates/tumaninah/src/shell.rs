//! The home shell: a splash, then a navigation bar and one panel per
//! section, all driven by a single controlled [`Tabs`] root.
//!
//! Navigation goes through [`ShellMessage`]s. Triggers request a tab through
//! the tabs scope, whose change callback posts `Activate` into the shell's
//! mailbox; cards bubble their message straight up. Either way the shell
//! updates [`ShellState`], runs the returned [`Command`], and pushes the new
//! active tab back into the scope.

use crate::config::ShellConfig;
use crate::panels::{self, AdhkarPanel, FloatingChat, Splash};
use crate::registry::{ActionRegistry, AdhkarCard};
use crate::sections;
use crate::state::{ShellMessage, ShellState};
use std::any::Any;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};
use tumaninah_core::{
    AccessibleRole, Canvas, Command, Constraints, Context, Event, LayoutResult, Palette, Rect,
    Scheduler, Size, State, TypeId, Widget,
};
use tumaninah_widgets::{Column, ContentMode, Label, TabId, Tabs, TabsContent, TabsScope};

/// Callback run for every tab activation.
pub type TabListener = Box<dyn Fn(&TabId) + Send + Sync>;

/// Messages posted from inside the widget tree, drained after each dispatch.
#[derive(Debug, Clone, Default)]
struct Mailbox(Arc<Mutex<VecDeque<ShellMessage>>>);

impl Mailbox {
    fn lock(&self) -> MutexGuard<'_, VecDeque<ShellMessage>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn post(&self, msg: ShellMessage) {
        self.lock().push_back(msg);
    }

    fn take(&self) -> Vec<ShellMessage> {
        self.lock().drain(..).collect()
    }
}

fn section(id: &str, panel: impl Widget + 'static) -> TabsContent {
    TabsContent::new(id)
        .mode(ContentMode::UnmountInactive)
        .test_id(format!("panel-{id}"))
        .child(panel)
}

/// Root widget of the app.
pub struct HomeShell {
    config: ShellConfig,
    state: ShellState,
    scheduler: Scheduler<ShellMessage>,
    mailbox: Mailbox,
    registry: ActionRegistry,
    listeners: Vec<TabListener>,
    scope: TabsScope,
    splash: Vec<Box<dyn Widget>>,
    body: Vec<Box<dyn Widget>>,
    ctx: Option<Context>,
    mounted: bool,
    torn_down: bool,
    scroll_offset: f32,
    palette: Palette,
    bounds: Rect,
}

impl HomeShell {
    /// Build the shell. Nothing is scheduled until the first mount.
    #[must_use]
    pub fn new(config: ShellConfig) -> Self {
        let state = ShellState::new(config.initial_tab.as_str(), config.settle_delay_ms);
        let mailbox = Mailbox::default();
        let outbox = mailbox.clone();

        let tabs = Tabs::controlled(state.active_tab.clone())
            .on_value_change(move |tab| outbox.post(ShellMessage::Activate(tab.clone())))
            .spacing(16.0)
            .test_id("shell-tabs")
            .child(panels::nav_bar())
            .child(section(sections::HOME, panels::home()))
            .child(section(sections::ADHKAR_LIST, AdhkarPanel::new()))
            .child(section(sections::TASBIH, panels::tasbih()))
            .child(section(
                sections::PRAYER_TIMES,
                panels::prayer_times(&config.prayer_location),
            ))
            .child(section(sections::CALENDAR, panels::calendar()))
            .child(section(sections::SHARE, panels::share()))
            .child(section(sections::DASHBOARD, panels::dashboard()))
            .child(section(sections::ABOUT, panels::about()));
        let scope = tabs.scope();

        let body = Column::new()
            .gap(16.0)
            .with_test_id("shell-body")
            .child(Label::heading(panels::TITLE).with_test_id("header"))
            .child(tabs)
            .child(FloatingChat::new());

        Self {
            config,
            state,
            scheduler: Scheduler::new(),
            mailbox,
            registry: ActionRegistry::new(),
            listeners: Vec::new(),
            scope,
            splash: vec![Box::new(Splash::new())],
            body: vec![Box::new(body)],
            ctx: None,
            mounted: false,
            torn_down: false,
            scroll_offset: 0.0,
            palette: Palette::default(),
            bounds: Rect::ZERO,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &ShellState {
        &self.state
    }

    /// Section currently shown.
    #[must_use]
    pub const fn active_tab(&self) -> &TabId {
        &self.state.active_tab
    }

    /// Check whether the splash is up.
    #[must_use]
    pub const fn show_splash(&self) -> bool {
        self.state.show_splash
    }

    /// Configuration the shell was built with.
    #[must_use]
    pub const fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Registry the adhkar panel publishes its card actions into.
    #[must_use]
    pub const fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Scope of the shell's tabs.
    #[must_use]
    pub const fn scope(&self) -> &TabsScope {
        &self.scope
    }

    /// Timers not yet fired.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Virtual time since construction.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Vertical scroll of the body.
    #[must_use]
    pub const fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scroll the body by `dy`, never above the top.
    pub fn scroll_by(&mut self, dy: f32) {
        self.scroll_offset = (self.scroll_offset + dy).max(0.0);
    }

    /// Check whether the shell has been unmounted.
    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Call `listener` on every tab activation, repeated activations of the
    /// current tab included.
    pub fn on_tab_change(&mut self, listener: impl Fn(&TabId) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Switch to the adhkar list and open `card` once it has settled.
    pub fn open_card(&mut self, card: AdhkarCard) {
        self.dispatch(ShellMessage::OpenCard(card));
    }

    /// Apply a message and everything it triggers.
    pub fn dispatch(&mut self, msg: ShellMessage) {
        if self.torn_down {
            debug!(?msg, "shell torn down, dropping message");
            return;
        }
        self.process(msg);
        self.settle();
    }

    /// Advance the virtual clock and dispatch every timer that came due.
    pub fn advance(&mut self, delta_ms: u64) {
        if self.torn_down {
            return;
        }
        for msg in self.scheduler.advance(delta_ms) {
            self.dispatch(msg);
        }
    }

    fn process(&mut self, msg: ShellMessage) {
        if let ShellMessage::InvokeCard(card) = &msg {
            if !self.registry.invoke(*card) {
                warn!(%card, "card action not registered, skipping");
                return;
            }
        }

        if let Some(tab) = msg.activated_tab() {
            for listener in &self.listeners {
                listener(&tab);
            }
        }

        let was_splash = self.state.show_splash;
        let command = self.state.update(msg);
        self.execute(command);

        if was_splash && !self.state.show_splash {
            for child in &mut self.splash {
                child.unmount();
            }
            info!(tab = %self.state.active_tab, "splash dismissed");
        }
    }

    fn execute(&mut self, command: Command<ShellMessage>) {
        for command in command.flatten() {
            match command {
                Command::Delay { after_ms, message } => {
                    let id = self.scheduler.schedule(after_ms, message);
                    debug!(?id, after_ms, "deferred message scheduled");
                }
                Command::ScrollToTop => self.scroll_offset = 0.0,
                Command::None | Command::Batch(_) => {}
            }
        }
    }

    /// Drain the mailbox, push the active tab into the scope and re-mount.
    fn settle(&mut self) {
        loop {
            let queued = self.mailbox.take();
            if queued.is_empty() {
                break;
            }
            for msg in queued {
                self.process(msg);
            }
        }
        if let Err(err) = self
            .scope
            .sync_external(Some(self.state.active_tab.clone()))
        {
            warn!(%err, "failed to sync tabs scope");
        }
        self.mount_visible();
    }

    fn mount_visible(&mut self) {
        let Some(ctx) = self.ctx.as_ref() else {
            return;
        };
        let visible = if self.state.show_splash {
            &mut self.splash
        } else {
            &mut self.body
        };
        for child in visible {
            child.mount(ctx);
        }
    }

    /// The body is mounted and may be measured, painted and queried.
    fn body_live(&self) -> bool {
        self.ctx.is_some() && !self.torn_down && !self.state.show_splash
    }
}

impl Widget for HomeShell {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.biggest()
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        if self.torn_down {
            return LayoutResult {
                size: bounds.size(),
            };
        }
        if self.body_live() {
            let scrolled = Rect::new(
                bounds.x,
                bounds.y - self.scroll_offset,
                bounds.width,
                bounds.height + self.scroll_offset,
            );
            for child in &mut self.body {
                child.layout(scrolled);
            }
        } else {
            for child in &mut self.splash {
                child.layout(bounds);
            }
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.torn_down {
            return;
        }
        if !self.body_live() {
            for child in &self.splash {
                child.paint(canvas);
            }
            return;
        }
        canvas.fill_rect(self.bounds, self.palette.background);
        canvas.push_clip(self.bounds);
        for child in &self.body {
            child.paint(canvas);
        }
        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if !self.body_live() {
            return None;
        }
        let bubbled = self.body.iter_mut().find_map(|child| child.event(event));
        let passthrough = match bubbled.map(|msg| msg.downcast::<ShellMessage>()) {
            Some(Ok(msg)) => {
                self.process(*msg);
                None
            }
            Some(Err(other)) => Some(other),
            None => None,
        };
        self.settle();
        passthrough
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        if self.torn_down {
            &[]
        } else if self.body_live() {
            &self.body
        } else {
            &self.splash
        }
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        if self.torn_down {
            &mut []
        } else if self.body_live() {
            &mut self.body
        } else {
            &mut self.splash
        }
    }

    fn mount(&mut self, ctx: &Context) {
        if self.torn_down {
            debug!("shell torn down, ignoring mount");
            return;
        }
        self.ctx = Some(ctx.with(self.registry.clone()));
        if !self.mounted {
            self.mounted = true;
            if self.state.show_splash {
                self.scheduler
                    .schedule(self.config.splash_delay_ms, ShellMessage::DismissSplash);
                info!(delay_ms = self.config.splash_delay_ms, "splash shown");
            }
        }
        self.mount_visible();
    }

    fn unmount(&mut self) {
        if self.torn_down {
            return;
        }
        let cancelled = self.scheduler.cancel_all();
        self.mailbox.take();
        for child in self.splash.iter_mut().chain(self.body.iter_mut()) {
            child.unmount();
        }
        self.torn_down = true;
        self.ctx = None;
        info!(cancelled, "shell torn down");
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Region
    }

    fn test_id(&self) -> Option<&str> {
        Some("shell")
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted() -> HomeShell {
        let mut shell = HomeShell::new(ShellConfig::default());
        shell.mount(&Context::new());
        shell.layout(Rect::new(0.0, 0.0, 1280.0, 720.0));
        shell
    }

    #[test]
    fn test_first_mount_schedules_splash_once() {
        let mut shell = mounted();
        assert!(shell.show_splash());
        assert_eq!(shell.pending_timers(), 1);
        shell.mount(&Context::new());
        assert_eq!(shell.pending_timers(), 1);
    }

    #[test]
    fn test_splash_dismissed_after_delay() {
        let mut shell = mounted();
        shell.advance(1999);
        assert!(shell.show_splash());
        shell.advance(1);
        assert!(!shell.show_splash());
        assert_eq!(shell.active_tab(), "home");
        assert_eq!(shell.pending_timers(), 0);
    }

    #[test]
    fn test_input_ignored_during_splash() {
        let mut shell = mounted();
        let center = shell.bounds().center();
        assert!(shell.event(&Event::click(center)).is_none());
        assert!(shell.show_splash());
        assert_eq!(shell.children().len(), 1);
        assert_eq!(shell.children()[0].test_id(), Some("splash"));
    }

    #[test]
    fn test_dispatch_syncs_scope() {
        let mut shell = mounted();
        shell.advance(2000);
        shell.dispatch(ShellMessage::Activate("calendar".into()));
        assert_eq!(shell.active_tab(), "calendar");
        assert_eq!(shell.scope().read(), "calendar");
    }

    #[test]
    fn test_scope_request_goes_through_mailbox() {
        let mut shell = mounted();
        shell.advance(2000);
        shell.scope().request_change("about");
        assert_eq!(shell.active_tab(), "home");
        assert_eq!(shell.scope().read(), "home");

        shell.dispatch(ShellMessage::DismissSplash);
        assert_eq!(shell.active_tab(), "about");
        assert_eq!(shell.scope().read(), "about");
    }

    #[test]
    fn test_adhkar_panel_registers_only_when_active() {
        let mut shell = mounted();
        shell.advance(2000);
        assert!(!shell.registry().is_registered(AdhkarCard::Morning));

        shell.dispatch(ShellMessage::Activate(sections::ADHKAR_LIST.into()));
        assert!(shell.registry().is_registered(AdhkarCard::Morning));

        shell.dispatch(ShellMessage::Activate(sections::HOME.into()));
        assert!(!shell.registry().is_registered(AdhkarCard::Morning));
    }

    #[test]
    fn test_unmount_cancels_timers_and_ignores_dispatch() {
        let mut shell = mounted();
        shell.unmount();
        assert!(shell.is_torn_down());
        assert_eq!(shell.pending_timers(), 0);

        shell.dispatch(ShellMessage::DismissSplash);
        shell.advance(5000);
        assert!(shell.show_splash());
        assert!(shell.children().is_empty());
    }

    #[test]
    fn test_scroll_by_clamps_at_top() {
        let mut shell = mounted();
        shell.scroll_by(-10.0);
        assert_eq!(shell.scroll_offset(), 0.0);
        shell.scroll_by(40.0);
        assert_eq!(shell.scroll_offset(), 40.0);
    }
}
