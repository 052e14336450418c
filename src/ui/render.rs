//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with brand, tab bar and theme indicator
//! - Active tab content
//! - Footer with social links
//! - Menu overlay, help popup, copy-guard toast
//! - Status bar

use crate::app::{nav_links, App};
use crate::content::ContentStore;
use crate::icons::IconResolver;
use crate::types::{Tab, ThemeMode};
use crate::ui::{theme::Theme, widgets};
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

const TOAST_MESSAGE: &str = "© CONTENT COPYRIGHT PROTECTED";

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Block::default().style(app.theme.block_style()), area);

    let [header, content, footer, status] = main_layout(area);

    render_header(frame, app, header);
    render_tab_content(frame, app, content);
    render_footer(frame, app, footer);
    render_status_bar(frame, app, status);

    render_overlays(frame, app, area);
}

/// Largest scroll offset that still shows content in the active view
pub fn max_scroll(app: &App, area: Rect) -> u16 {
    let [_, content, _, _] = main_layout(area);
    let inner = content_inner(content);
    let (lines, _) = view_lines(app);
    wrapped_height(&lines, inner.width).saturating_sub(inner.height)
}

/// Header, content, footer and status bar
fn main_layout(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(3), // Header + tabs
        Constraint::Min(5),    // Content
        Constraint::Length(2), // Footer
        Constraint::Length(1), // Status bar
    ])
    .areas(area)
}

/// Text area inside the content pane
fn content_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(1),
    }
}

/// Render header with brand and tab bar
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let header_block = Block::default()
        .style(theme.block_style())
        .title(format!(" {} ", app.content.brand()))
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    frame.render_widget(header_block, area);

    // Theme indicator and menu hint on the right of the first row
    let indicator = match app.controller.theme() {
        ThemeMode::Dark => "☀ light [t]  ☰ menu [m] ",
        ThemeMode::Light => "☾ dark [t]  ☰ menu [m] ",
    };
    let indicator_area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(indicator)
            .style(theme.text_dim())
            .alignment(Alignment::Right),
        indicator_area,
    );

    let tab_titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if app.active_tab() == *tab {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::styled(format!("[{}] {}", i + 1, tab.label().to_uppercase()), style)
        })
        .collect();

    let tabs = Tabs::new(tab_titles)
        .select(app.active_tab().index())
        .divider(" │ ")
        .style(theme.text());

    let tabs_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(tabs, tabs_area);
}

/// Render the active tab's content
fn render_tab_content(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .style(theme.block_style())
        .borders(Borders::NONE);
    let inner = content_inner(area);
    frame.render_widget(block, area);

    let (lines, selected_line) = view_lines(app);

    // The stored offset may come from a larger frame
    let limit = wrapped_height(&lines, inner.width).saturating_sub(inner.height);
    let scroll = app.controller.state().scroll.min(limit);
    let scroll = visible_offset(scroll, selected_line, inner.height);

    let paragraph = Paragraph::new(lines)
        .style(theme.text())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}

/// Lines of the active view and, for list views, the selected line
fn view_lines(app: &App) -> (Vec<Line<'_>>, Option<u16>) {
    let theme = &app.theme;
    let content = &app.content;
    match app.active_tab() {
        Tab::Home => (home_lines(content, &app.icons, theme), None),
        Tab::About => about_lines(content, app.about_cursor, theme),
        Tab::Experience => (experience_lines(content, theme), None),
        Tab::Skills => skills_lines(content, &app.icons, app.skills_cursor, theme),
        Tab::Projects => (projects_lines(content, theme), None),
        Tab::Contact => contact_lines(content, app.contact_cursor, theme),
    }
}

/// Keep the selected line on screen without fighting the user's own scroll
fn visible_offset(scroll: u16, selected_line: Option<u16>, height: u16) -> u16 {
    match selected_line {
        Some(line) if height > 0 && line >= scroll.saturating_add(height) => line + 1 - height,
        Some(line) if line < scroll => line,
        _ => scroll,
    }
}

/// Rows `lines` occupy once word-wrapped to `width`
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let rows: usize = lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            wrapped_rows(&text, width as usize)
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Greedy word wrap row count; words longer than the width are split
fn wrapped_rows(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }

    let mut rows = 1;
    let mut col = 0;
    for (i, word) in text.split(' ').enumerate() {
        let len = word.chars().count();
        let start = if i == 0 { 0 } else { col + 1 };
        if start + len <= width {
            col = start + len;
            continue;
        }

        let spans = len.max(1).div_ceil(width);
        rows += if i == 0 { spans - 1 } else { spans };
        col = len - (spans - 1) * width;
    }
    rows
}

// === TAB CONTENT ===

fn home_lines<'a>(content: &'a ContentStore, icons: &IconResolver, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::styled("⚙ ENGINEERING SCALABILITY", theme.label()),
        Line::raw(""),
        Line::styled(content.headline.as_str(), theme.title()),
        Line::styled(content.tagline.as_str(), theme.text_dim()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("⤓ Download CV ", theme.link()),
            Span::styled("[c]", theme.text_dim()),
        ]),
        Line::raw(""),
    ];

    lines.extend(widgets::section_heading("01", "About", theme));
    lines.push(Line::styled(content.summary.as_str(), theme.text()));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Base Operations  ", theme.label()),
        Span::styled(content.contact.location.as_str(), theme.text()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Background       ", theme.label()),
        Span::styled(content.background.as_str(), theme.text()),
    ]));
    lines.push(Line::raw(""));

    lines.extend(widgets::section_heading("02", "Experience", theme));
    for exp in &content.experiences {
        lines.push(Line::styled(exp.period.as_str(), theme.label()));
        lines.push(Line::from(vec![
            Span::styled(exp.company.as_str(), theme.title()),
            Span::styled(format!("  {}", exp.role), theme.text_dim()),
        ]));
        lines.push(Line::styled(exp.headline(), theme.text()));
        lines.push(Line::raw(""));
    }

    lines.extend(widgets::section_heading("03", "Skills", theme));
    for (category, skills) in content.featured_skills() {
        let mut spans = vec![Span::styled(format!("{:<26}", category), theme.label())];
        for skill in skills {
            spans.push(widgets::badge_span(&icons.resolve(skill), theme));
            spans.push(Span::styled(format!("{}   ", skill), theme.text()));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(""));

    lines.extend(widgets::section_heading("04", "Projects", theme));
    for project in content.featured_projects() {
        lines.push(Line::styled(project.title.as_str(), theme.title()));
        lines.push(Line::styled(project.description.as_str(), theme.text_dim()));
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled("Let's build.", theme.title()));
    lines.push(Line::styled(
        "Available for architectural leadership and strategic automation consulting.",
        theme.text_dim(),
    ));
    lines.push(Line::from(vec![
        Span::styled("→ Connect Gateway ", theme.link()),
        Span::styled("[Enter]", theme.text_dim()),
    ]));

    lines
}

/// About view; returns the line index of the selected certification link
fn about_lines<'a>(
    content: &'a ContentStore,
    cursor: Option<usize>,
    theme: &Theme,
) -> (Vec<Line<'a>>, Option<u16>) {
    let mut lines = vec![
        Line::styled("About.", theme.title()),
        Line::raw(""),
        Line::styled(content.summary.as_str(), theme.text()),
        Line::raw(""),
    ];

    for principle in &content.principles {
        lines.push(Line::styled(principle.title.to_uppercase(), theme.label()));
        lines.push(Line::styled(principle.body.as_str(), theme.text()));
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled("Academic History", theme.title()));
    lines.push(Line::raw(""));
    for edu in &content.education {
        lines.push(Line::styled(edu.period.as_str(), theme.label()));
        lines.push(Line::styled(edu.institution.as_str(), theme.title()));
        lines.push(Line::styled(edu.degree.as_str(), theme.text_dim()));
        for detail in &edu.details {
            lines.push(Line::styled(format!("  · {}", detail), theme.text()));
        }
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled("Certifications", theme.title()));
    lines.push(Line::raw(""));

    let mut link_index = 0;
    let mut selected_line = None;
    for achievement in &content.achievements {
        let Some(link) = &achievement.link else {
            lines.push(Line::styled(achievement.name.as_str(), theme.text()));
            continue;
        };

        let style = if cursor == Some(link_index) {
            selected_line = Some(lines.len() as u16);
            theme.selected()
        } else {
            theme.text()
        };
        lines.push(Line::from(vec![
            Span::styled(achievement.name.as_str(), style),
            Span::raw("  "),
            Span::styled(link.as_str(), theme.link()),
        ]));
        link_index += 1;
    }

    (lines, selected_line)
}

fn experience_lines<'a>(content: &'a ContentStore, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::styled("Experience.", theme.title()), Line::raw("")];

    for exp in &content.experiences {
        let mut meta = vec![Span::styled(exp.period.as_str(), theme.label())];
        if let Some(location) = &exp.location {
            meta.push(Span::styled(format!("  ·  {}", location), theme.text_dim()));
        }
        lines.push(Line::from(meta));
        lines.push(Line::styled(exp.company.as_str(), theme.title()));
        lines.push(Line::styled(exp.role.as_str(), theme.text_dim()));
        if let Some(description) = &exp.description {
            lines.push(Line::styled(description.as_str(), theme.text()));
        }
        for responsibility in &exp.responsibilities {
            lines.push(Line::from(vec![
                Span::styled("  ▪ ", theme.text_dim()),
                Span::styled(responsibility.as_str(), theme.text()),
            ]));
        }
        if let Some(technologies) = &exp.technologies {
            lines.push(Line::styled(format!("  {}", technologies.join(" · ")), theme.tag()));
        }
        lines.push(Line::raw(""));
    }

    lines
}

/// Skills view; returns the line index of the selected skill
fn skills_lines<'a>(
    content: &'a ContentStore,
    icons: &IconResolver,
    cursor: usize,
    theme: &Theme,
) -> (Vec<Line<'a>>, Option<u16>) {
    let mut lines = vec![Line::styled("Skills.", theme.title())];

    // Badge URL of the selected skill
    let selected = content.all_skills().get(cursor).copied();
    let detail = match selected.map(|s| (s, icons.resolve(s))) {
        Some((skill, icon)) if icon.is_broken() => format!("{}: badge unavailable", skill),
        Some((skill, icon)) => match icon.url() {
            Some(url) => format!("{}: {}", skill, url),
            None => format!("{}: no badge", skill),
        },
        None => String::new(),
    };
    lines.push(Line::styled(detail, theme.text_dim()));
    lines.push(Line::raw(""));

    let mut index = 0;
    let mut selected_line = None;
    for cat in &content.skills {
        lines.push(Line::styled(format!("▸ {}", cat.category), theme.title()));
        for skill in &cat.skills {
            let style = if index == cursor {
                selected_line = Some(lines.len() as u16);
                theme.selected()
            } else {
                theme.text()
            };
            lines.push(Line::from(vec![
                Span::raw("    "),
                widgets::badge_span(&icons.resolve(skill), theme),
                Span::styled(skill.as_str(), style),
            ]));
            index += 1;
        }
        lines.push(Line::raw(""));
    }

    (lines, selected_line)
}

fn projects_lines<'a>(content: &'a ContentStore, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::styled("Projects.", theme.title()), Line::raw("")];

    for project in &content.projects {
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", project.year), theme.label()),
            Span::styled(project.title.as_str(), theme.title()),
        ]));
        lines.push(Line::styled(project.category.to_uppercase(), theme.text_dim()));
        lines.push(Line::styled(project.description.as_str(), theme.text()));
        let tags: Vec<Span> = project
            .technologies
            .iter()
            .map(|tech| Span::styled(format!("[{}] ", tech), theme.tag()))
            .collect();
        lines.push(Line::from(tags));
        lines.push(Line::raw(""));
    }

    lines
}

/// Contact view; returns the line index of the selected link
fn contact_lines<'a>(
    content: &'a ContentStore,
    cursor: usize,
    theme: &Theme,
) -> (Vec<Line<'a>>, Option<u16>) {
    let mut lines = vec![Line::styled("Connect.", theme.title()), Line::raw("")];
    let mut selected_line = None;

    for (i, link) in content.contact_links().into_iter().enumerate() {
        let style = if i == cursor {
            selected_line = Some(lines.len() as u16);
            theme.selected()
        } else {
            theme.title()
        };
        lines.push(Line::styled(link.label.to_uppercase(), theme.label()));
        lines.push(Line::styled(link.display, style));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Phone  ", theme.label()),
        Span::styled(content.contact.phone.as_str(), theme.text()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Web    ", theme.label()),
        Span::styled(content.contact.website.as_str(), theme.link()),
    ]));

    (lines, selected_line)
}

/// Footer with social links and copyright
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let names: Vec<&str> = app
        .content
        .footer_links()
        .iter()
        .map(|(name, _)| *name)
        .collect();
    let year = chrono::Local::now().year();

    let footer = Paragraph::new(vec![
        Line::styled(names.join("  ·  "), theme.text_dim()),
        Line::styled(
            format!("© {} {} — All rights reserved.", year, app.content.owner),
            theme.text_dim(),
        ),
    ])
    .style(theme.text())
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, theme, area);
        return;
    }

    let hints = if app.controller.state().menu_open {
        "[j/k] Navigate  [Enter] Open  [Esc] Close  [q] Quit"
    } else {
        match app.active_tab() {
            Tab::Skills => "[j/k] Select  [Enter] Open Badge  [←/→] Tabs  [?] Help  [q] Quit",
            Tab::Contact => "[j/k] Select  [Enter] Open Link  [←/→] Tabs  [?] Help  [q] Quit",
            Tab::About => "[j/k] Scroll  [n] Next Credential  [Enter] Open  [←/→] Tabs  [q] Quit",
            Tab::Home => "[j/k] Scroll  [Enter] Connect  [←/→] Tabs  [?] Help  [q] Quit",
            _ => "[j/k] Scroll  [←/→] Tabs  [c] CV  [?] Help  [q] Quit",
        }
    };

    let storage = if app.controller.is_persistent() { "" } else { "theme not saved " };
    widgets::render_status_bar(frame, hints, storage, theme, area);
}

/// Render overlays if active
fn render_overlays(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let state = app.controller.state();

    if state.menu_open {
        let social = app.content.footer_links();
        let social_names: Vec<&str> = social.iter().map(|(name, _)| *name).collect();
        widgets::render_menu_overlay(
            frame,
            nav_links(),
            &social_names,
            app.menu_cursor,
            state.active_tab,
            theme,
            area,
        );
    }

    if app.show_help {
        widgets::render_help_popup(frame, theme, area);
    }

    // Toast sits above everything else
    if state.toast_visible {
        widgets::render_toast(frame, TOAST_MESSAGE, theme, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use crate::controller::ViewController;
    use crate::opener::LinkOpener;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    struct NoopOpener;

    impl LinkOpener for NoopOpener {
        fn open(&mut self, _url: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn app(theme: ThemeMode) -> App {
        let controller = ViewController::new(theme, Box::new(MemoryStore::default()));
        App::new(ContentStore::builtin(), controller, Box::new(NoopOpener))
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_every_tab_renders_in_both_themes() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let mut app = app(mode);
            for &tab in Tab::all() {
                app.controller.navigate(tab);
                draw(&app, 100, 40);
                // Tiny terminals must not panic either
                draw(&app, 20, 8);
            }
        }
    }

    #[test]
    fn test_toast_is_drawn() {
        let mut app = app(ThemeMode::Light);
        app.controller.trigger_copy_guard_toast(Instant::now());
        let screen = draw(&app, 100, 40);
        assert!(screen.contains("COPYRIGHT PROTECTED"));
    }

    #[test]
    fn test_menu_overlay_lists_links() {
        let mut app = app(ThemeMode::Dark);
        app.controller.toggle_menu();
        let screen = draw(&app, 100, 40);
        assert!(screen.contains("EXPERIENCE"));
        assert!(screen.contains("CONNECT"));
        assert!(screen.contains("↗ LinkedIn"));
    }

    #[test]
    fn test_header_shows_brand() {
        let app = app(ThemeMode::Light);
        let screen = draw(&app, 100, 40);
        assert!(screen.contains("VANAKEETHAN."));
    }

    #[test]
    fn test_visible_offset_follows_selection() {
        assert_eq!(visible_offset(0, Some(3), 10), 0);
        assert_eq!(visible_offset(0, Some(12), 10), 3);
        assert_eq!(visible_offset(8, Some(2), 10), 2);
        assert_eq!(visible_offset(4, None, 10), 4);
    }

    #[test]
    fn test_visible_offset_near_max_scroll() {
        assert_eq!(visible_offset(u16::MAX - 1, Some(3), 10), 3);
        assert_eq!(visible_offset(u16::MAX, None, 10), u16::MAX);
    }

    #[test]
    fn test_oversized_scroll_still_shows_content() {
        let mut app = app(ThemeMode::Light);
        app.controller.navigate(Tab::Skills);
        app.controller.scroll_by(i32::MAX);
        draw(&app, 100, 40);

        app.controller.navigate(Tab::Projects);
        app.controller.scroll_by(i32::MAX);
        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Scalable Microservices Media Hub"));
    }

    #[test]
    fn test_max_scroll_keeps_last_lines_visible() {
        let mut app = app(ThemeMode::Light);
        app.controller.navigate(Tab::Projects);
        let area = Rect::new(0, 0, 80, 24);
        let limit = max_scroll(&app, area);
        assert!(limit > 0);

        app.controller.set_scroll_limit(limit);
        app.controller.scroll_by(i32::MAX);
        assert_eq!(app.controller.state().scroll, limit);
        let screen = draw(&app, 80, 24);
        assert!(screen.contains("Scalable Microservices Media Hub"));
    }

    #[test]
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("short line", 10), 1);
        assert_eq!(wrapped_rows("short line here", 10), 2);
        assert_eq!(wrapped_rows("abcdefghijklmnopqrstu", 10), 3);
        assert_eq!(wrapped_rows("ab abcdefghijklmnopqrstu", 10), 4);
    }

    #[test]
    fn test_about_marks_selected_certification() {
        let content = ContentStore::builtin();
        let theme = Theme::light();
        let (_, selected) = about_lines(&content, None, &theme);
        assert_eq!(selected, None);

        let (lines, selected) = about_lines(&content, Some(1), &theme);
        let line = &lines[selected.unwrap() as usize];
        assert!(line.spans[0].content.contains("Cisco"));
    }
}
