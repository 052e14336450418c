//! View controller
//!
//! Owns the single `ViewState` of a session. Every mutation goes through one
//! of the operations here:
//! - `navigate`: switch tab, close the menu, scroll to top
//! - `toggle_menu`: open/close the navigation overlay (locks scrolling)
//! - `toggle_theme`: flip light/dark and persist the choice
//! - `trigger_copy_guard_toast`: show the copy notice for 3 seconds
//!
//! Time is passed in explicitly so timer behavior is deterministic.

use crate::config::PreferenceStore;
use crate::types::{Tab, ThemeMode};
use std::time::{Duration, Instant};

/// How long the copy-guard toast stays up after the last trigger
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// UI state for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active_tab: Tab,
    pub menu_open: bool,
    pub theme: ThemeMode,
    pub toast_visible: bool,
    /// Vertical scroll offset of the active view
    pub scroll: u16,
}

/// Single pending dismissal. Scheduling again replaces the deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToastTimer {
    deadline: Option<Instant>,
}

impl ToastTimer {
    pub fn schedule(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire the timer if its deadline has passed. Returns true once per expiry.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

pub struct ViewController {
    state: ViewState,
    store: Box<dyn PreferenceStore>,
    toast_timer: ToastTimer,
    /// Largest offset the active view can scroll to
    scroll_limit: u16,
    /// False once a save has failed; theme then lives in memory only
    persistent: bool,
}

impl ViewController {
    pub fn new(theme: ThemeMode, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            state: ViewState {
                active_tab: Tab::Home,
                menu_open: false,
                theme,
                toast_visible: false,
                scroll: 0,
            },
            store,
            toast_timer: ToastTimer::default(),
            scroll_limit: u16::MAX,
            persistent: true,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    pub fn theme(&self) -> ThemeMode {
        self.state.theme
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Switch to `tab`, close the menu and reset scroll to the top
    pub fn navigate(&mut self, tab: Tab) {
        tracing::debug!(from = ?self.state.active_tab, to = ?tab, "navigate");
        self.state.active_tab = tab;
        self.state.menu_open = false;
        self.state.scroll = 0;
    }

    pub fn next_tab(&mut self) {
        self.navigate(self.state.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.navigate(self.state.active_tab.prev());
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        tracing::debug!(open = self.state.menu_open, "menu toggled");
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.state.menu_open
    }

    /// Scroll the active view. Ignored while the menu overlay is open.
    pub fn scroll_by(&mut self, delta: i32) {
        if self.is_scroll_locked() {
            return;
        }
        let next = (self.state.scroll as i32).saturating_add(delta);
        self.state.scroll = next.clamp(0, self.scroll_limit as i32) as u16;
    }

    /// Bound scrolling to the active view's content; pulls the offset back if needed
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.state.scroll = self.state.scroll.min(limit);
    }

    pub fn scroll_to_top(&mut self) {
        if !self.is_scroll_locked() {
            self.state.scroll = 0;
        }
    }

    /// Flip the theme and persist it. Storage failures are logged, not raised.
    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
        tracing::info!(theme = self.state.theme.as_str(), "theme changed");

        if let Err(e) = self.store.save_theme(self.state.theme) {
            if self.persistent {
                tracing::warn!("theme preference not saved, keeping it in memory: {:#}", e);
            }
            self.persistent = false;
        } else {
            self.persistent = true;
        }
    }

    /// Show the copy-guard toast; restarts the dismissal countdown
    pub fn trigger_copy_guard_toast(&mut self, now: Instant) {
        self.state.toast_visible = true;
        self.toast_timer.schedule(now, TOAST_DURATION);
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_timer.cancel();
        self.state.toast_visible = false;
    }

    /// Advance timers to `now`
    pub fn tick(&mut self, now: Instant) {
        if self.toast_timer.poll(now) {
            self.state.toast_visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use anyhow::{anyhow, Result};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Store whose contents the test can still see after handing it over
    #[derive(Clone, Default)]
    struct SharedStore(Rc<Cell<Option<ThemeMode>>>);

    impl PreferenceStore for SharedStore {
        fn load_theme(&self) -> Result<Option<ThemeMode>> {
            Ok(self.0.get())
        }

        fn save_theme(&mut self, theme: ThemeMode) -> Result<()> {
            self.0.set(Some(theme));
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load_theme(&self) -> Result<Option<ThemeMode>> {
            Err(anyhow!("storage unavailable"))
        }

        fn save_theme(&mut self, _theme: ThemeMode) -> Result<()> {
            Err(anyhow!("storage unavailable"))
        }
    }

    fn controller() -> ViewController {
        ViewController::new(ThemeMode::Light, Box::new(MemoryStore::default()))
    }

    #[test]
    fn test_navigate_from_any_state() {
        for &start in Tab::all() {
            for menu_open in [false, true] {
                for &target in Tab::all() {
                    let mut c = controller();
                    c.navigate(start);
                    if menu_open {
                        c.toggle_menu();
                    }
                    c.navigate(target);
                    assert_eq!(c.state().active_tab, target);
                    assert!(!c.state().menu_open);
                }
            }
        }
    }

    #[test]
    fn test_toggle_menu_pair() {
        let mut c = controller();
        c.toggle_menu();
        assert!(c.state().menu_open);
        c.toggle_menu();
        assert!(!c.state().menu_open);
    }

    #[test]
    fn test_menu_locks_scroll() {
        let mut c = controller();
        c.scroll_by(5);
        assert_eq!(c.state().scroll, 5);

        c.toggle_menu();
        c.scroll_by(3);
        c.scroll_to_top();
        assert_eq!(c.state().scroll, 5);

        c.toggle_menu();
        c.scroll_by(-10);
        assert_eq!(c.state().scroll, 0);
    }

    #[test]
    fn test_scroll_stays_within_limit() {
        let mut c = controller();
        c.set_scroll_limit(10);
        c.scroll_by(50);
        assert_eq!(c.state().scroll, 10);
        c.scroll_by(i32::MAX);
        assert_eq!(c.state().scroll, 10);

        // A shorter view pulls the offset back
        c.set_scroll_limit(4);
        assert_eq!(c.state().scroll, 4);
        c.scroll_by(i32::MIN);
        assert_eq!(c.state().scroll, 0);
    }

    #[test]
    fn test_navigate_resets_scroll() {
        let mut c = controller();
        c.scroll_by(12);
        c.navigate(Tab::Projects);
        assert_eq!(c.state().scroll, 0);
    }

    #[test]
    fn test_toggle_theme_persists_each_change() {
        let store = SharedStore::default();
        let mut c = ViewController::new(ThemeMode::Light, Box::new(store.clone()));
        c.toggle_theme();
        assert_eq!(c.theme(), ThemeMode::Dark);
        assert_eq!(store.load_theme().unwrap(), Some(ThemeMode::Dark));

        c.toggle_theme();
        assert_eq!(c.theme(), ThemeMode::Light);
        assert_eq!(store.load_theme().unwrap(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_toggle_theme_without_storage() {
        let mut c = ViewController::new(ThemeMode::Dark, Box::new(BrokenStore));
        c.toggle_theme();
        assert_eq!(c.theme(), ThemeMode::Light);
        assert!(!c.is_persistent());
        assert!(c.store.load_theme().is_err());
    }

    #[test]
    fn test_toast_dismisses_after_delay() {
        let t0 = Instant::now();
        let mut c = controller();
        c.trigger_copy_guard_toast(t0);
        assert!(c.state().toast_visible);

        c.tick(t0 + Duration::from_millis(2999));
        assert!(c.state().toast_visible);

        c.tick(t0 + Duration::from_millis(3000));
        assert!(!c.state().toast_visible);
    }

    #[test]
    fn test_toast_retrigger_extends_deadline() {
        let t0 = Instant::now();
        let mut c = controller();
        c.trigger_copy_guard_toast(t0);
        c.trigger_copy_guard_toast(t0 + Duration::from_millis(2000));

        c.tick(t0 + Duration::from_millis(4000));
        assert!(c.state().toast_visible);

        c.tick(t0 + Duration::from_millis(5000));
        assert!(!c.state().toast_visible);
    }

    #[test]
    fn test_dismiss_cancels_timer() {
        let t0 = Instant::now();
        let mut c = controller();
        c.trigger_copy_guard_toast(t0);
        c.dismiss_toast();
        assert!(!c.state().toast_visible);
        assert!(!c.toast_timer.is_pending());
    }
}
