//! Palettes and semantic styling. The active palette follows the user's
//! saved theme.

use ratatui::style::{Color, Modifier, Style};

use primer_core::{NotificationLevel, Theme};

// ── Core Palette ──────────────────────────────────────────────────────

pub const PRIMER_GREEN: Color = Color::Rgb(16, 185, 129); // #10b981
pub const DEEP_GREEN: Color = Color::Rgb(4, 120, 87); // #047857
pub const AMBER: Color = Color::Rgb(245, 158, 11); // #f59e0b
pub const CORAL: Color = Color::Rgb(255, 106, 193); // #ff6ac1
pub const SUCCESS_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363
pub const INFO_BLUE: Color = Color::Rgb(139, 233, 253); // #8be9fd

// ── Surfaces ──────────────────────────────────────────────────────────

pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36
pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4

pub const BG_LIGHT: Color = Color::Rgb(248, 250, 252); // #f8fafc
pub const BG_LIGHT_HIGHLIGHT: Color = Color::Rgb(226, 232, 240); // #e2e8f0
pub const INK: Color = Color::Rgb(30, 41, 59); // #1e293b
pub const SLATE: Color = Color::Rgb(100, 116, 139); // #64748b

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub highlight: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
}

pub const DARK: Palette = Palette {
    bg: BG_DARK,
    highlight: BG_HIGHLIGHT,
    text: DIM_WHITE,
    muted: BORDER_GRAY,
    accent: PRIMER_GREEN,
    border: BORDER_GRAY,
};

pub const LIGHT: Palette = Palette {
    bg: BG_LIGHT,
    highlight: BG_LIGHT_HIGHLIGHT,
    text: INK,
    muted: SLATE,
    accent: DEEP_GREEN,
    border: SLATE,
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

// ── Semantic Styles ───────────────────────────────────────────────────

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    /// Title text for blocks/panels.
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Selected list row.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Filter chip; active chips are filled.
    pub fn chip(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.bg).bg(self.accent)
        } else {
            Style::default().fg(self.text).bg(self.highlight)
        }
    }

    pub fn price(&self) -> Style {
        Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn key_hint_key(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)
    }
}

/// Favorite heart.
pub fn heart(favorite: bool) -> (&'static str, Style) {
    if favorite {
        ("♥", Style::default().fg(CORAL))
    } else {
        ("♡", Style::default().fg(BORDER_GRAY))
    }
}

/// Border color and icon for a toast.
pub fn notification(level: NotificationLevel) -> (Color, &'static str) {
    match level {
        NotificationLevel::Success => (SUCCESS_GREEN, "✓"),
        NotificationLevel::Error => (ERROR_RED, "✗"),
        NotificationLevel::Info => (INFO_BLUE, "·"),
    }
}
