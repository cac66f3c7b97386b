use std::fmt;

/// Straight-alpha sRGB color, one byte per channel.
///
/// Invariant:
/// - printed colors are always CSS hex (`#rrggbb` / `#rrggbbaa`), so a
///   stylesheet built from them never needs a second color syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same rgb, alpha replaced by `a`.
    ///
    /// This is how the stylesheet derives translucent variants of a theme
    /// token (`#6c757d` → `#6c757d40`).
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 0xff
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (hex digits are case-insensitive).
    pub fn parse(input: &str) -> Result<Self, ParseColorError> {
        let trimmed = input.trim();
        let Some(hex) = trimmed.strip_prefix('#') else {
            return Err(ParseColorError::new(input, "expected a leading '#'"));
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::new(input, "non-hex digit"));
        }

        // All digits are ASCII here, so byte slicing is safe.
        let byte = |s: &str| u8::from_str_radix(s, 16)
            .map_err(|_| ParseColorError::new(input, "non-hex digit"));
        let nibble = |s: &str| byte(s).map(|v| v * 0x11);

        match hex.len() {
            3 => Ok(Self::rgb(nibble(&hex[0..1])?, nibble(&hex[1..2])?, nibble(&hex[2..3])?)),
            6 => Ok(Self::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
            8 => Ok(Self::rgba(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            n => Err(ParseColorError::new(input, format!("expected 3, 6 or 8 hex digits, got {n}"))),
        }
    }

    /// CSS hex form: `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── ParseColorError ───────────────────────────────────────────────────────

/// A color literal that is not valid CSS hex notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    pub input: String,
    pub reason: String,
}

impl ParseColorError {
    pub(crate) fn new(input: &str, reason: impl Into<String>) -> Self {
        Self { input: input.to_string(), reason: reason.into() }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseColorError {}
