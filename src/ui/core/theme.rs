use crate::ui::core::style::{Color, Style};

/// Semantic style tokens for the menu frame.
///
/// Widgets ask for a token instead of carrying concrete colors, so the
/// configuration layer is the only place that knows about attribute specs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Normal,
    Highlight,
    Border,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub normal: Style,
    pub highlight: Style,
    pub border: Style,
}

impl Theme {
    pub fn style(&self, token: Token) -> Style {
        match token {
            Token::Normal => self.normal,
            Token::Highlight => self.highlight,
            Token::Border => self.border,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        let plain = Style::default().fg(Color::Reset).bg(Color::Reset);
        Self {
            normal: plain,
            highlight: Style::default()
                .fg(Color::Indexed(7)) // White
                .bg(Color::Indexed(4)), // Blue
            border: plain,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/theme.rs"]
mod tests;
