// Theme system for the TUI
//
// Customizable color themes that can be switched at runtime with Ctrl+T.
// Each theme defines colors for all UI elements.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Monokai,
    Nord,
}

impl ThemeKind {
    /// All available themes, in cycle order
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Monokai,
            ThemeKind::Nord,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Resolve a config name ("dark", "light", ...) to a theme.
    /// Unknown names fall back to the default with a warning.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dark" => ThemeKind::Dark,
            "light" => ThemeKind::Light,
            "monokai" => ThemeKind::Monokai,
            "nord" => ThemeKind::Nord,
            other => {
                tracing::warn!(theme = other, "unknown theme name, using default");
                ThemeKind::default()
            }
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Monokai => "Monokai",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Monokai => Theme::monokai(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    // Chrome
    pub title: Color,
    pub status_bar: Color,

    // Panels
    pub accent: Color,
    pub muted: Color,
    pub busy: Color,
    pub gauge: Color,

    // Feedback
    pub success: Color,
    pub error: Color,

    // Border style
    pub border_type: BorderType,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,

            accent: Color::Cyan,
            muted: Color::DarkGray,
            busy: Color::Yellow,
            gauge: Color::Cyan,

            success: Color::Green,
            error: Color::Red,

            border_type: BorderType::Rounded,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            accent: Color::Blue,
            muted: Color::Gray,
            busy: Color::Rgb(184, 134, 11), // Dark goldenrod
            gauge: Color::Blue,

            success: Color::Green,
            error: Color::Red,

            border_type: BorderType::Rounded,
        }
    }

    /// Monokai theme
    pub fn monokai() -> Self {
        Self {
            bg: Color::Rgb(39, 40, 34),
            fg: Color::Rgb(248, 248, 242),
            border: Color::Rgb(117, 113, 94),
            border_focused: Color::Rgb(166, 226, 46),

            title: Color::Rgb(166, 226, 46),       // Green
            status_bar: Color::Rgb(102, 217, 239), // Cyan

            accent: Color::Rgb(102, 217, 239),
            muted: Color::Rgb(117, 113, 94),
            busy: Color::Rgb(230, 219, 116), // Yellow
            gauge: Color::Rgb(174, 129, 255), // Purple

            success: Color::Rgb(166, 226, 46),
            error: Color::Rgb(249, 38, 114), // Pink/Red

            border_type: BorderType::Plain,
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208),

            title: Color::Rgb(136, 192, 208),      // Frost cyan
            status_bar: Color::Rgb(163, 190, 140), // Aurora green

            accent: Color::Rgb(129, 161, 193),
            muted: Color::Rgb(76, 86, 106),
            busy: Color::Rgb(235, 203, 139), // Aurora yellow
            gauge: Color::Rgb(136, 192, 208),

            success: Color::Rgb(163, 190, 140),
            error: Color::Rgb(191, 97, 106),

            border_type: BorderType::Rounded,
        }
    }

    /// Background color honoring the use_theme_background setting
    pub fn background(&self, use_theme_background: bool) -> Color {
        if use_theme_background {
            self.bg
        } else {
            Color::Reset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_theme_and_wraps() {
        let mut kind = ThemeKind::Dark;
        let mut seen = Vec::new();
        for _ in 0..ThemeKind::all().len() {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(seen, ThemeKind::all());
        assert_eq!(kind, ThemeKind::Dark);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ThemeKind::from_name("NORD"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("Light"), ThemeKind::Light);
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(ThemeKind::from_name("no-such-theme"), ThemeKind::default());
    }

    #[test]
    fn background_respects_setting() {
        let theme = Theme::nord();
        assert_eq!(theme.background(true), Color::Rgb(46, 52, 64));
        assert_eq!(theme.background(false), Color::Reset);
    }
}
