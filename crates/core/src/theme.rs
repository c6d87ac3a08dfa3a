use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn opposite(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                background: "#0a0a0a",
                foreground: "#ffffff",
                primary: "#10b981",
                secondary: "#1f2937",
                accent: "#22c55e",
                muted: "#6b7280",
            },
            Theme::Light => ThemeColors {
                background: "#ffffff",
                foreground: "#0a0a0a",
                primary: "#059669",
                secondary: "#f3f4f6",
                accent: "#10b981",
                muted: "#9ca3af",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{}', expected dark or light", other)),
        }
    }
}

/// Palette for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub foreground: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
}

impl ThemeColors {
    /// CSS custom properties for `:root`
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{ --background: {}; --foreground: {}; --primary: {}; --secondary: {}; --accent: {}; --muted: {}; }}",
            self.background, self.foreground, self.primary, self.secondary, self.accent, self.muted
        )
    }
}

/// Theme handed down the component tree.
///
/// Only the owner of the context may call [`ThemeContext::toggle`]; page
/// components receive it by reference and read from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeContext {
    theme: Theme,
}

impl ThemeContext {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn colors(&self) -> ThemeColors {
        self.theme.colors()
    }

    pub fn toggle(&mut self) {
        self.theme = self.theme.opposite();
    }

    /// The context after a toggle, without touching this one
    pub fn toggled(&self) -> ThemeContext {
        ThemeContext::new(self.theme.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeContext::default().theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_flips_and_returns() {
        let mut ctx = ThemeContext::new(Theme::Dark);
        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Light);
        assert_eq!(ctx.colors().background, "#ffffff");
        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggled_leaves_original() {
        let ctx = ThemeContext::new(Theme::Light);
        assert_eq!(ctx.toggled().theme(), Theme::Dark);
        assert_eq!(ctx.theme(), Theme::Light);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_css_variables() {
        let css = Theme::Dark.colors().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--primary: #10b981;"));
    }
}
