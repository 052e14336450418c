//! Reusable UI widgets
//!
//! Contains common UI components used across multiple tabs:
//! - Popup dialogs and the navigation menu overlay
//! - The copy-guard toast
//! - Section headings and skill badges
//! - Status bar and flash messages

use crate::icons::Icon;
use crate::types::Tab;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a centered popup dialog
pub fn render_popup(
    frame: &mut Frame,
    title: &str,
    content: Vec<Line>,
    buttons: &[(&str, char)], // (label, key)
    theme: &Theme,
    area: Rect,
) {
    // Calculate popup size
    let popup_width = 56.min(area.width.saturating_sub(4));
    let popup_height = (content.len() as u16 + 6).min(area.height.saturating_sub(2));

    let popup_area = centered_rect(popup_width, popup_height, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.text());

    frame.render_widget(block, popup_area);

    let inner = Rect {
        x: popup_area.x + 2,
        y: popup_area.y + 1,
        width: popup_area.width.saturating_sub(4),
        height: popup_area.height.saturating_sub(4),
    };

    let content_widget = Paragraph::new(content)
        .style(theme.text())
        .wrap(Wrap { trim: false });
    frame.render_widget(content_widget, inner);

    // Buttons at bottom
    if !buttons.is_empty() && popup_area.height >= 3 {
        let button_area = Rect {
            x: popup_area.x + 2,
            y: popup_area.y + popup_area.height - 2,
            width: popup_area.width.saturating_sub(4),
            height: 1,
        };

        let button_spans: Vec<Span> = buttons
            .iter()
            .enumerate()
            .flat_map(|(i, (label, key))| {
                let mut spans = vec![
                    Span::styled("[", theme.text_dim()),
                    Span::styled(
                        key.to_string(),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("] ", theme.text_dim()),
                    Span::styled(*label, theme.text()),
                ];
                if i < buttons.len() - 1 {
                    spans.push(Span::raw("    "));
                }
                spans
            })
            .collect();

        let buttons_widget = Paragraph::new(Line::from(button_spans))
            .alignment(Alignment::Center);
        frame.render_widget(buttons_widget, button_area);
    }
}

/// Render the keybinding help popup
pub fn render_help_popup(frame: &mut Frame, theme: &Theme, area: Rect) {
    let bindings = [
        ("1-6", "Jump to tab"),
        ("h/l  ←/→", "Previous / next tab"),
        ("j/k", "Scroll or move selection"),
        ("PgUp/PgDn", "Scroll a page"),
        ("Enter", "Open selected link or badge"),
        ("n", "Next credential (About)"),
        ("m", "Toggle menu (tabs and social links)"),
        ("t", "Toggle light/dark theme"),
        ("c", "Open CV"),
        ("q", "Quit"),
    ];

    let content: Vec<Line> = bindings
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", keys), Style::default().fg(theme.accent)),
                Span::styled(*action, theme.text()),
            ])
        })
        .collect();

    render_popup(frame, "Keys", content, &[("Close", '?')], theme, area);
}

/// Render the navigation menu overlay. `cursor` indexes the tab links
/// followed by the social links.
pub fn render_menu_overlay(
    frame: &mut Frame,
    links: &[Tab],
    social: &[&str],
    cursor: usize,
    active: Tab,
    theme: &Theme,
    area: Rect,
) {
    let width = 40.min(area.width.saturating_sub(4));
    let height = (links.len() as u16 * 2 + social.len() as u16 + 4).min(area.height.saturating_sub(2));
    let menu_area = centered_rect(width, height, area);

    frame.render_widget(Clear, menu_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.overlay());
    let inner = block.inner(menu_area);
    frame.render_widget(block, menu_area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, tab) in links.iter().enumerate() {
        let marker = if *tab == active { "● " } else { "  " };
        let style = if i == cursor {
            theme.selected()
        } else {
            theme.overlay().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::styled(
            format!("{}{}", marker, tab.label().to_uppercase()),
            style,
        ));
        lines.push(Line::raw(""));
    }

    for (i, name) in social.iter().enumerate() {
        let style = if links.len() + i == cursor {
            theme.selected()
        } else {
            theme.overlay().fg(theme.fg_dim)
        };
        lines.push(Line::styled(format!("↗ {}", name), style));
    }

    let menu = Paragraph::new(lines)
        .style(theme.overlay())
        .alignment(Alignment::Center);
    frame.render_widget(menu, inner);
}

/// Render the copy-guard toast near the top of the screen
pub fn render_toast(frame: &mut Frame, message: &str, theme: &Theme, area: Rect) {
    let width = (message.chars().count() as u16 + 6).min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + 4.min(area.height.saturating_sub(1)),
        width,
        height: 1,
    };

    frame.render_widget(Clear, toast_area);
    let toast = Paragraph::new(message)
        .style(theme.toast())
        .alignment(Alignment::Center);
    frame.render_widget(toast, toast_area);
}

/// Section heading: small numbered label above a bold title
pub fn section_heading<'a>(label: &'a str, title: &'a str, theme: &Theme) -> Vec<Line<'a>> {
    vec![
        Line::styled(spaced_upper(label), theme.label()),
        Line::styled(title, theme.title()),
        Line::raw(""),
    ]
}

/// Glyph and style for a skill's icon
pub fn badge_span(icon: &Icon, theme: &Theme) -> Span<'static> {
    match icon {
        _ if icon.is_placeholder() => Span::styled("● ", theme.placeholder()),
        _ if icon.is_broken() => Span::styled("◇ ", theme.placeholder()),
        _ => Span::styled("◆ ", theme.badge()),
    }
}

/// Render a flash message (bottom of screen)
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, flash_area);
    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]))
    .style(theme.text());

    frame.render_widget(flash, flash_area);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Clear the line first
    frame.render_widget(Clear, status_area);

    let left_widget = Paragraph::new(left_content)
        .style(theme.text_dim());

    let right_len = (right_content.chars().count() as u16).min(status_area.width);
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: (right_len + 1).min(status_area.width),
        height: 1,
    };
    let right_widget = Paragraph::new(right_content)
        .style(theme.text_dim());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}

/// "About" -> "A B O U T", the wide-tracked label look
fn spaced_upper(label: &str) -> String {
    let upper = label.to_uppercase();
    let chars: Vec<String> = upper.chars().map(|c| c.to_string()).collect();
    chars.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(40, 20, area);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        let popup = centered_rect(40, 20, area);
        assert_eq!(popup, area);
    }

    #[test]
    fn test_spaced_upper() {
        assert_eq!(spaced_upper("01"), "0 1");
        assert_eq!(spaced_upper("Skills"), "S K I L L S");
    }

    #[test]
    fn test_badge_span_glyphs() {
        let theme = Theme::light();
        assert_eq!(badge_span(&Icon::Placeholder, &theme).content, "● ");
        let badge = Icon::Badge {
            slug: "docker",
            attempt: crate::icons::BadgeAttempt::Primary,
        };
        assert_eq!(badge_span(&badge, &theme).content, "◆ ");
    }
}
