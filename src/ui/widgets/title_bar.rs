//! Top border row: corners, inline menu bar segments and a centered title.

use crate::menu::MenuModel;
use crate::ui::core::geom::Pos;
use crate::ui::core::painter::glyph;
use crate::ui::core::text::cell_width;
use crate::ui::core::theme::{Theme, Token};
use crate::ui::core::widget::{Ui, Widget};

/// Columns kept free for the title (plus its surrounding border) before
/// another menu segment may be placed.
const TITLE_RESERVE: usize = 5;

/// Border glyph before and after each label, plus the bracket/space pair around it.
const SEGMENT_CHROME: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleBarLayout {
    /// Column right after the opening border glyph of the highlighted entry.
    /// Only set while no submenu is open.
    pub anchor_column: Option<u16>,
    pub drawn_items: usize,
    pub title_drawn: bool,
}

pub struct TitleBar<'a> {
    pub title: &'a str,
    pub model: &'a MenuModel,
    pub active: usize,
    pub submenu_open: bool,
    pub theme: &'a Theme,
}

impl Widget for TitleBar<'_> {
    type Output = TitleBarLayout;

    fn ui(&mut self, ui: &mut Ui) -> TitleBarLayout {
        let mut layout = TitleBarLayout::default();
        let row = ui.rect;
        if row.w < 2 || row.h == 0 {
            return layout;
        }

        let y = row.y;
        let right = usize::from(row.right() - 1);
        let border = self.theme.style(Token::Border);
        let normal = self.theme.style(Token::Normal);
        let highlight = self.theme.style(Token::Highlight);
        let title_w = cell_width(self.title);

        ui.painter.glyph(Pos::new(row.x, y), glyph::TOP_LEFT, border);
        let mut x = usize::from(row.x) + 1;

        for (idx, label) in self.model.labels().enumerate() {
            let label_w = cell_width(label);
            let segment_w = label_w + SEGMENT_CHROME;
            if x + segment_w + title_w + TITLE_RESERVE > right {
                tracing::debug!(drawn = idx, total = self.model.len(), "menu bar truncated");
                break;
            }

            let highlighted = idx == self.active && !self.submenu_open;
            let (text, style) = if highlighted {
                (format!("[{label}]"), highlight)
            } else {
                (format!(" {label} "), normal)
            };

            ui.painter.glyph(col(x, y), glyph::HORIZONTAL, border);
            ui.painter.text(col(x + 1, y), text, style);
            ui.painter
                .glyph(col(x + segment_w - 1, y), glyph::HORIZONTAL, border);

            if highlighted {
                layout.anchor_column = Some(col(x + 1, y).x);
            }
            layout.drawn_items += 1;
            x += segment_w;
        }

        let remaining = right.saturating_sub(x);
        if title_w > 0 && remaining > title_w {
            let gap = remaining - title_w;
            let trail = gap / 2;
            let lead = gap - trail;
            ui.painter
                .hline(col(x, y), len(lead), glyph::HORIZONTAL, border);
            ui.painter.text(col(x + lead, y), self.title, normal);
            ui.painter.hline(
                col(x + lead + title_w, y),
                len(trail),
                glyph::HORIZONTAL,
                border,
            );
            layout.title_drawn = true;
        } else {
            if title_w > 0 {
                tracing::warn!(title = self.title, remaining, "title does not fit in the top border");
            }
            ui.painter
                .hline(col(x, y), len(remaining), glyph::HORIZONTAL, border);
        }

        ui.painter.glyph(col(right, y), glyph::TOP_RIGHT, border);
        layout
    }
}

// Every column computed above stays within the row, which itself fits in u16.
fn col(x: usize, y: u16) -> Pos {
    Pos::new(len(x), y)
}

fn len(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/title_bar.rs"]
mod tests;
