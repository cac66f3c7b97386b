use std::fmt;

use serde::Deserialize;

use liteui_engine::paint::{Color, ParseColorError};

// ── Theme ─────────────────────────────────────────────────────────────────

/// The fixed set of color tokens every stylesheet rule is derived from.
///
/// Changing one token repaints every rule that uses it; the compiler never
/// emits a color that is not a token or a token with a fixed alpha.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

impl Theme {
    /// Token names in declaration order.
    pub const TOKENS: [&'static str; 5] = ["background", "text", "primary", "secondary", "accent"];

    pub fn background(mut self, c: Color) -> Self { self.background = c; self }
    pub fn text(mut self, c: Color) -> Self { self.text = c; self }
    pub fn primary(mut self, c: Color) -> Self { self.primary = c; self }
    pub fn secondary(mut self, c: Color) -> Self { self.secondary = c; self }
    pub fn accent(mut self, c: Color) -> Self { self.accent = c; self }

    /// Look a token up by name.
    pub fn token(&self, name: &str) -> Option<Color> {
        match name {
            "background" => Some(self.background),
            "text"       => Some(self.text),
            "primary"    => Some(self.primary),
            "secondary"  => Some(self.secondary),
            "accent"     => Some(self.accent),
            _            => None,
        }
    }

    /// Apply the tokens set in `config` on top of the defaults.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let mut theme = Self::default();
        let slots = [
            ("background", &config.background, &mut theme.background),
            ("text",       &config.text,       &mut theme.text),
            ("primary",    &config.primary,    &mut theme.primary),
            ("secondary",  &config.secondary,  &mut theme.secondary),
            ("accent",     &config.accent,     &mut theme.accent),
        ];
        for (token, value, slot) in slots {
            if let Some(v) = value {
                *slot = Color::parse(v).map_err(|source| ThemeError { token, source })?;
            }
        }
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xff, 0xff, 0xff),
            text:       Color::rgb(0x00, 0x00, 0x00),
            primary:    Color::rgb(0x00, 0x7b, 0xff),
            secondary:  Color::rgb(0x6c, 0x75, 0x7d),
            accent:     Color::rgb(0x28, 0xa7, 0x45),
        }
    }
}

// ── ThemeConfig ───────────────────────────────────────────────────────────

/// Partial theme as read from a config file. Unset tokens keep their default.
///
/// ```json
/// { "background": "#1e1e2e", "text": "#cdd6f4" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub background: Option<String>,
    pub text: Option<String>,
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

// ── ThemeError ────────────────────────────────────────────────────────────

/// A theme token whose value is not a valid color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeError {
    pub token: &'static str,
    pub source: ParseColorError,
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "theme token '{}': {}", self.token, self.source)
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
