//! Application state and event handling
//!
//! Translates keyboard and mouse input into view controller operations and
//! keeps the per-view cursors:
//! - Tab switching, menu overlay, theme toggle
//! - Copy guard (Ctrl+C, `y`, right click)
//! - Opening contact links, social links, credentials, skill badges and the CV

use crate::content::ContentStore;
use crate::controller::ViewController;
use crate::icons::IconResolver;
use crate::opener::LinkOpener;
use crate::types::Tab;
use crate::ui::{self, Theme};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// How long a flash message stays in the status bar
const FLASH_DURATION: Duration = Duration::from_secs(3);

/// Lines moved per PageUp/PageDown
const PAGE: i32 = 10;

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub controller: ViewController,
    pub content: ContentStore,
    pub icons: IconResolver,
    pub theme: Theme,
    opener: Box<dyn LinkOpener>,

    // Cursors
    pub menu_cursor: usize,
    /// Highlighted credential on the About view, once the user picks one
    pub about_cursor: Option<usize>,
    pub skills_cursor: usize,
    pub contact_cursor: usize,

    pub show_help: bool,

    /// Last frame size, for bounding scroll
    viewport: Rect,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)
}

impl App {
    pub fn new(
        content: ContentStore,
        controller: ViewController,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        let theme = Theme::from_mode(controller.theme());

        Self {
            should_quit: false,
            controller,
            content,
            icons: IconResolver::new(),
            theme,
            opener,
            menu_cursor: 0,
            about_cursor: None,
            skills_cursor: 0,
            contact_cursor: 0,
            show_help: false,
            viewport: Rect::new(0, 0, 80, 24),
            flash_message: None,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.controller.active_tab()
    }

    /// Record the frame size and re-bound the scroll offset to it
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        let limit = ui::max_scroll(self, area);
        self.controller.set_scroll_limit(limit);
    }

    /// Advance timers: toast dismissal and flash expiry
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);

        if let Some((_, _, shown_at)) = &self.flash_message {
            if now.saturating_duration_since(*shown_at) >= FLASH_DURATION {
                self.flash_message = None;
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Copying is guarded everywhere, including inside overlays
        if is_copy_key(&key) {
            self.controller.trigger_copy_guard_toast(now);
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                self.show_help = false;
            }
            return;
        }

        if key.code == KeyCode::Esc && self.controller.state().toast_visible {
            self.controller.dismiss_toast();
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            KeyCode::Char('t') => {
                self.toggle_theme();
                return;
            }
            KeyCode::Char('m') => {
                self.toggle_menu();
                return;
            }
            // Plain `c` only: Ctrl+C was consumed by the copy guard above
            KeyCode::Char('c') => {
                let url = self.content.cv_url.clone();
                self.open_link(&url, "CV");
                return;
            }
            KeyCode::Char(d @ '1'..='6') => {
                let idx = d as usize - '1' as usize;
                self.controller.navigate(Tab::from_index(idx));
                return;
            }
            _ => {}
        }

        if self.controller.state().menu_open {
            self.handle_menu_key(key);
        } else {
            self.handle_view_key(key);
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Right) => {
                self.controller.trigger_copy_guard_toast(now);
            }
            MouseEventKind::ScrollDown => self.scroll(3),
            MouseEventKind::ScrollUp => self.scroll(-3),
            _ => {}
        }
    }

    /// Keys while the navigation overlay is open. The cursor runs over the
    /// tab links first, then the social links.
    fn handle_menu_key(&mut self, key: KeyEvent) {
        let count = nav_links().len() + self.content.footer_links().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.menu_cursor = (self.menu_cursor + 1) % count;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.menu_cursor = (self.menu_cursor + count - 1) % count;
            }
            KeyCode::Enter => match nav_links().get(self.menu_cursor) {
                Some(&tab) => self.controller.navigate(tab),
                None => {
                    let index = self.menu_cursor - nav_links().len();
                    if let Some((name, url)) = self.content.footer_links().into_iter().nth(index) {
                        self.open_link(&url, name);
                    }
                }
            },
            KeyCode::Esc => self.toggle_menu(),
            _ => {}
        }
    }

    /// Keys in the active view
    fn handle_view_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.controller.next_tab(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.controller.prev_tab(),
            KeyCode::PageDown => self.scroll(PAGE),
            KeyCode::PageUp => self.scroll(-PAGE),
            KeyCode::Char('g') | KeyCode::Home => self.controller.scroll_to_top(),
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
            KeyCode::Char('n') if self.active_tab() == Tab::About => self.next_credential(),
            KeyCode::Enter => self.activate(),
            _ => {}
        }
    }

    /// Move the selection in list views, scroll everywhere else
    fn move_cursor(&mut self, delta: i32) {
        match self.active_tab() {
            Tab::Skills => {
                let len = self.content.all_skills().len();
                self.skills_cursor = step(self.skills_cursor, delta, len);
            }
            Tab::Contact => {
                let len = self.content.contact_links().len();
                self.contact_cursor = step(self.contact_cursor, delta, len);
            }
            _ => self.scroll(delta),
        }
    }

    /// Scroll the active view, bounded by its content in the last frame
    fn scroll(&mut self, delta: i32) {
        let limit = ui::max_scroll(self, self.viewport);
        self.controller.set_scroll_limit(limit);
        self.controller.scroll_by(delta);
    }

    fn activate(&mut self) {
        match self.active_tab() {
            Tab::About => {
                let cert = self
                    .about_cursor
                    .and_then(|i| self.content.certification_links().get(i).copied())
                    .map(|(name, url)| (name.to_string(), url.to_string()));
                if let Some((name, url)) = cert {
                    self.open_link(&url, &name);
                }
            }
            Tab::Skills => self.open_selected_skill(),
            Tab::Contact => {
                if let Some(link) = self.content.contact_links().get(self.contact_cursor) {
                    let (url, label) = (link.url.clone(), link.label);
                    self.open_link(&url, label);
                }
            }
            // "Connect Gateway" call to action
            Tab::Home => self.controller.navigate(Tab::Contact),
            _ => {}
        }
    }

    /// Highlight the next linked certification, wrapping around
    fn next_credential(&mut self) {
        let len = self.content.certification_links().len();
        if len == 0 {
            return;
        }
        self.about_cursor = Some(self.about_cursor.map_or(0, |i| (i + 1) % len));
    }

    fn toggle_menu(&mut self) {
        self.controller.toggle_menu();
        if self.controller.state().menu_open {
            self.menu_cursor = nav_links()
                .iter()
                .position(|t| *t == self.active_tab())
                .unwrap_or(0);
        }
    }

    fn toggle_theme(&mut self) {
        let was_persistent = self.controller.is_persistent();
        self.controller.toggle_theme();
        self.theme = Theme::from_mode(self.controller.theme());

        if was_persistent && !self.controller.is_persistent() {
            self.show_flash("Theme not saved (storage unavailable)", true);
        }
    }

    /// Open the selected skill's badge, falling back to the color variant once
    fn open_selected_skill(&mut self) {
        let skill = match self.content.all_skills().get(self.skills_cursor) {
            Some(s) => s.to_string(),
            None => return,
        };

        let icon = self.icons.resolve(&skill);
        if icon.is_broken() {
            self.show_flash(&format!("No badge available for {}", skill), true);
            return;
        }
        let url = match icon.url() {
            Some(url) => url,
            None => {
                self.show_flash(&format!("No badge for {}", skill), true);
                return;
            }
        };

        if self.opener.open(&url).is_ok() {
            self.show_flash(&format!("Opened {} badge", skill), false);
            return;
        }

        match self.icons.report_load_error(&skill) {
            Some(fallback) => match self.opener.open(&fallback) {
                Ok(()) => self.show_flash(&format!("Opened {} badge", skill), false),
                Err(e) => {
                    self.icons.report_load_error(&skill);
                    tracing::warn!(skill = %skill, "badge fallback failed: {:#}", e);
                    self.show_flash(&format!("Could not open {} badge", skill), true);
                }
            },
            None => self.show_flash(&format!("Could not open {} badge", skill), true),
        }
    }

    fn open_link(&mut self, url: &str, label: &str) {
        match self.opener.open(url) {
            Ok(()) => self.show_flash(&format!("Opened {}", label), false),
            Err(e) => {
                tracing::warn!(url, "failed to open link: {:#}", e);
                self.show_flash(&format!("Could not open {}: {}", label, url), true);
            }
        }
    }

    /// Show a flash message
    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }
}

/// Entries of the navigation menu (the brand name covers Home)
pub fn nav_links() -> &'static [Tab] {
    &Tab::all()[1..]
}

fn is_copy_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Insert => {
            key.modifiers.contains(KeyModifiers::CONTROL)
        }
        KeyCode::Char('y') => key.modifiers.is_empty(),
        _ => false,
    }
}

fn step(cursor: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor as i64 + delta as i64).clamp(0, len as i64 - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use crate::types::ThemeMode;
    use anyhow::{anyhow, Result};
    use crossterm::event::KeyEventKind;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    /// Records every URL; fails for the ones listed
    #[derive(Default, Clone)]
    struct FakeOpener {
        opened: Rc<RefCell<Vec<String>>>,
        failing: HashSet<String>,
    }

    impl LinkOpener for FakeOpener {
        fn open(&mut self, url: &str) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            if self.failing.contains(url) {
                Err(anyhow!("cannot open {}", url))
            } else {
                Ok(())
            }
        }
    }

    fn app_with(opener: FakeOpener) -> App {
        let controller = ViewController::new(ThemeMode::Light, Box::new(MemoryStore::default()));
        App::new(ContentStore::builtin(), controller, Box::new(opener))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code), Instant::now());
    }

    #[test]
    fn test_digit_keys_navigate() {
        let mut app = app_with(FakeOpener::default());
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_tab(), Tab::Skills);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_tab(), Tab::Home);
    }

    #[test]
    fn test_menu_navigation_closes_menu() {
        let mut app = app_with(FakeOpener::default());
        press(&mut app, KeyCode::Char('m'));
        assert!(app.controller.state().menu_open);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active_tab(), Tab::Experience);
        assert!(!app.controller.state().menu_open);
    }

    #[test]
    fn test_menu_blocks_view_keys() {
        let mut app = app_with(FakeOpener::default());
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.active_tab(), Tab::Home);
        assert_eq!(app.controller.state().scroll, 0);

        press(&mut app, KeyCode::Esc);
        assert!(!app.controller.state().menu_open);
    }

    #[test]
    fn test_theme_key_swaps_palette() {
        let mut app = app_with(FakeOpener::default());
        let light_bg = app.theme.bg;
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.controller.theme(), ThemeMode::Dark);
        assert_ne!(app.theme.bg, light_bg);
    }

    #[test]
    fn test_copy_guard_inputs() {
        let t0 = Instant::now();
        let mut app = app_with(FakeOpener::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), t0);
        assert!(app.controller.state().toast_visible);
        assert!(app.flash_message.is_none(), "Ctrl+C must not open the CV");

        app.tick(t0 + Duration::from_secs(3));
        assert!(!app.controller.state().toast_visible);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, t0);
        assert!(app.controller.state().toast_visible);
    }

    #[test]
    fn test_contact_enter_opens_mailto() {
        let opener = FakeOpener::default();
        let opened = opener.opened.clone();
        let mut app = app_with(opener);
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(opened.borrow().as_slice(), ["mailto:vanakeethan@outlook.com"]);
    }

    #[test]
    fn test_skill_badge_single_fallback() {
        let mut opener = FakeOpener::default();
        // First skill is Java -> openjdk
        opener.failing.insert("https://cdn.simpleicons.org/openjdk".into());
        opener.failing.insert("https://cdn.simpleicons.org/openjdk/000".into());
        let opened = opener.opened.clone();
        let mut app = app_with(opener);

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            opened.borrow().as_slice(),
            [
                "https://cdn.simpleicons.org/openjdk",
                "https://cdn.simpleicons.org/openjdk/000",
            ]
        );
        assert!(app.icons.resolve("Java").is_broken());

        // No further requests once both attempts failed
        press(&mut app, KeyCode::Enter);
        assert_eq!(opened.borrow().len(), 2);
        assert!(matches!(app.flash_message, Some((_, true, _))));
    }

    #[test]
    fn test_skills_cursor_clamps() {
        let mut app = app_with(FakeOpener::default());
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.skills_cursor, 0);
        for _ in 0..100 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.skills_cursor, app.content.all_skills().len() - 1);
    }

    #[test]
    fn test_paging_stops_at_end_of_view() {
        let mut app = app_with(FakeOpener::default());
        press(&mut app, KeyCode::Char('5'));
        for _ in 0..20 {
            press(&mut app, KeyCode::PageDown);
        }
        let limit = ui::max_scroll(&app, Rect::new(0, 0, 80, 24));
        assert_eq!(app.controller.state().scroll, limit);

        // One PageUp is enough to move back off the end
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.controller.state().scroll, limit.saturating_sub(PAGE as u16));
    }

    #[test]
    fn test_larger_viewport_pulls_scroll_back() {
        let mut app = app_with(FakeOpener::default());
        press(&mut app, KeyCode::Char('5'));
        for _ in 0..20 {
            press(&mut app, KeyCode::PageDown);
        }
        let tall = Rect::new(0, 0, 120, 200);
        app.set_viewport(tall);
        assert_eq!(app.controller.state().scroll, ui::max_scroll(&app, tall));
    }

    #[test]
    fn test_menu_opens_social_links() {
        let opener = FakeOpener::default();
        let opened = opener.opened.clone();
        let mut app = app_with(opener);
        press(&mut app, KeyCode::Char('m'));

        // Past the tab links: GitHub, then LinkedIn
        for _ in 0..nav_links().len() + 1 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(opened.borrow().as_slice(), ["https://linkedin.com/in/vanakeethan"]);
        assert!(app.controller.state().menu_open);
        assert_eq!(app.active_tab(), Tab::Home);
    }

    #[test]
    fn test_menu_cursor_wraps_over_all_entries() {
        let mut app = app_with(FakeOpener::default());
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Up);
        assert_eq!(
            app.menu_cursor,
            nav_links().len() + app.content.footer_links().len() - 1
        );
    }

    #[test]
    fn test_about_opens_selected_credential() {
        let opener = FakeOpener::default();
        let opened = opener.opened.clone();
        let mut app = app_with(opener);
        press(&mut app, KeyCode::Char('2'));

        // Nothing is selected until asked for
        press(&mut app, KeyCode::Enter);
        assert!(opened.borrow().is_empty());

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            opened.borrow().as_slice(),
            ["https://www.credly.com/badges/8e0cc245-24d2-4140-b694-f24c239de1d8/public_url"]
        );
    }

    #[test]
    fn test_credential_selection_wraps() {
        let mut app = app_with(FakeOpener::default());
        press(&mut app, KeyCode::Char('2'));
        let len = app.content.certification_links().len();
        for _ in 0..len + 1 {
            press(&mut app, KeyCode::Char('n'));
        }
        assert_eq!(app.about_cursor, Some(0));
    }

    #[test]
    fn test_contact_reaches_linkedin() {
        let opener = FakeOpener::default();
        let opened = opener.opened.clone();
        let mut app = app_with(opener);
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(opened.borrow().as_slice(), ["https://linkedin.com/in/vanakeethan"]);
    }

    #[test]
    fn test_quit() {
        let mut app = app_with(FakeOpener::default());
        let mut event = key(KeyCode::Char('q'));
        event.kind = KeyEventKind::Press;
        app.handle_key(event, Instant::now());
        assert!(app.should_quit);
    }
}
