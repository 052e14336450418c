//! Theme definitions for folio
//!
//! Two palettes built on the zinc scale: Light and Dark.
//! Each theme defines colors for all UI elements.

use crate::types::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,
    pub accent_dim: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Overlays
    pub toast_bg: Color,
    pub toast_fg: Color,
    pub overlay_bg: Color,

    // Content
    pub link: Color,
    pub badge: Color,
    pub placeholder: Color,
}

impl Theme {
    /// Create a theme from a mode
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Light theme (default)
    pub fn light() -> Self {
        Self {
            // Base
            bg: Color::Rgb(250, 250, 250),        // zinc-50
            fg: Color::Rgb(24, 24, 27),           // zinc-900
            fg_dim: Color::Rgb(113, 113, 122),    // zinc-500

            accent: Color::Rgb(9, 9, 11),         // zinc-950
            accent_dim: Color::Rgb(82, 82, 91),   // zinc-600

            success: Color::Rgb(22, 163, 74),     // green-600
            error: Color::Rgb(220, 38, 38),       // red-600

            border: Color::Rgb(228, 228, 231),    // zinc-200
            border_focused: Color::Rgb(161, 161, 170), // zinc-400
            selection_bg: Color::Rgb(228, 228, 231),
            selection_fg: Color::Rgb(9, 9, 11),

            toast_bg: Color::Rgb(24, 24, 27),
            toast_fg: Color::Rgb(250, 250, 250),
            overlay_bg: Color::Rgb(244, 244, 245), // zinc-100

            link: Color::Rgb(37, 99, 235),        // blue-600
            badge: Color::Rgb(63, 63, 70),        // zinc-700
            placeholder: Color::Rgb(161, 161, 170),
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            // Base
            bg: Color::Rgb(9, 9, 11),             // zinc-950
            fg: Color::Rgb(244, 244, 245),        // zinc-100
            fg_dim: Color::Rgb(113, 113, 122),    // zinc-500

            accent: Color::Rgb(250, 250, 250),    // zinc-50
            accent_dim: Color::Rgb(161, 161, 170), // zinc-400

            success: Color::Rgb(74, 222, 128),    // green-400
            error: Color::Rgb(248, 113, 113),     // red-400

            border: Color::Rgb(39, 39, 42),       // zinc-800
            border_focused: Color::Rgb(82, 82, 91), // zinc-600
            selection_bg: Color::Rgb(39, 39, 42),
            selection_fg: Color::Rgb(250, 250, 250),

            toast_bg: Color::Rgb(244, 244, 245),
            toast_fg: Color::Rgb(24, 24, 27),
            overlay_bg: Color::Rgb(24, 24, 27),   // zinc-900

            link: Color::Rgb(96, 165, 250),       // blue-400
            badge: Color::Rgb(228, 228, 231),     // zinc-200
            placeholder: Color::Rgb(63, 63, 70),
        }
    }

    // Style helpers for common UI patterns

    /// Background fill for blocks
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Small uppercase section label ("01", "Base Operations")
    pub fn label(&self) -> Style {
        Style::default()
            .fg(self.fg_dim)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Tab style (inactive)
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Tab style (active)
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }

    /// Copy-guard toast
    pub fn toast(&self) -> Style {
        Style::default()
            .fg(self.toast_fg)
            .bg(self.toast_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Menu overlay background
    pub fn overlay(&self) -> Style {
        Style::default().fg(self.fg).bg(self.overlay_bg)
    }

    /// Outbound link
    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.link)
            .bg(self.bg)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Skill badge glyph
    pub fn badge(&self) -> Style {
        Style::default().fg(self.badge).bg(self.bg)
    }

    /// Placeholder dot for unmapped skills
    pub fn placeholder(&self) -> Style {
        Style::default()
            .fg(self.placeholder)
            .bg(self.bg)
            .add_modifier(Modifier::DIM)
    }

    /// Technology tag on project cards
    pub fn tag(&self) -> Style {
        Style::default().fg(self.accent_dim).bg(self.bg)
    }
}
