use std::ops::BitOr;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

const NAMED_COLORS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

impl Color {
    /// Parses a curses-style color name (`default`, `red`, `bright-blue`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "default" | "reset" => return Some(Color::Reset),
            "gray" | "grey" => return Some(Color::Indexed(8)),
            _ => {}
        }

        let (base, offset) = match name.strip_prefix("bright-") {
            Some(rest) => (rest, 8),
            None => (name.as_str(), 0),
        };
        NAMED_COLORS
            .iter()
            .position(|c| *c == base)
            .map(|idx| Color::Indexed(idx as u8 + offset))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u16);

impl Mod {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const DIM: Self = Self(1 << 1);
    pub const UNDERLINE: Self = Self(1 << 2);
    pub const REVERSE: Self = Self(1 << 3);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Mod {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mods: Mod,
}

impl Style {
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    MissingSeparator(String),
    UnknownColor(String),
}

impl std::fmt::Display for StyleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleParseError::MissingSeparator(spec) => {
                write!(f, "attribute spec {:?} is not of the form fg/bg", spec)
            }
            StyleParseError::UnknownColor(name) => write!(f, "unknown color name: {:?}", name),
        }
    }
}

impl std::error::Error for StyleParseError {}

/// Attribute specs are `"foreground/background"` pairs of color names,
/// e.g. `"white/blue"` or `"default/default"`.
impl FromStr for Style {
    type Err = StyleParseError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (fg, bg) = spec
            .split_once('/')
            .ok_or_else(|| StyleParseError::MissingSeparator(spec.to_string()))?;
        let fg = Color::from_name(fg).ok_or_else(|| StyleParseError::UnknownColor(fg.to_string()))?;
        let bg = Color::from_name(bg).ok_or_else(|| StyleParseError::UnknownColor(bg.to_string()))?;
        Ok(Style::default().fg(fg).bg(bg))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
