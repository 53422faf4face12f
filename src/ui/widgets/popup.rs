//! Submenu popup anchored under the highlighted menu bar entry.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::BorderKind;
use crate::ui::core::text::{cell_width, fit_to_width};
use crate::ui::core::theme::{Theme, Token};
use crate::ui::core::widget::{Ui, Widget};

/// Smallest popup that still shows one item between its borders.
const MIN_HEIGHT: u16 = 3;

/// The content area has no room for even a one-item popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryInfeasible {
    pub available_rows: u16,
}

impl std::fmt::Display for GeometryInfeasible {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "popup needs at least {} rows, only {} available",
            MIN_HEIGHT, self.available_rows
        )
    }
}

impl std::error::Error for GeometryInfeasible {}

/// Resolves where the popup goes inside `content` (the area inside the frame border).
///
/// The box is `max_item_width + 4` wide and `items + 2` tall. It starts at the
/// anchor column, shifts left when it would cross the rightmost content column,
/// and is clipped at the bottom content row.
pub fn popup_geometry(
    items: &[String],
    anchor_column: u16,
    content: Rect,
) -> Result<Rect, GeometryInfeasible> {
    let infeasible = GeometryInfeasible {
        available_rows: content.h,
    };
    let Some(rightmost) = content.last_col() else {
        return Err(infeasible);
    };

    let max_item_w = items.iter().map(|item| cell_width(item)).max().unwrap_or(0);
    let width = clamp_u16(max_item_w.saturating_add(4)).min(content.w);
    let height = clamp_u16(items.len().saturating_add(2));

    let mut x = anchor_column.max(content.x);
    if x.saturating_add(width - 1) > rightmost {
        x = (rightmost + 1 - width).max(content.x);
    }

    let y = content.y;
    let height = if y.saturating_add(height) > content.bottom() {
        content.bottom() - y
    } else {
        height
    };
    if height < MIN_HEIGHT {
        return Err(infeasible);
    }

    Ok(Rect::new(x, y, width, height))
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

pub struct Popup<'a> {
    pub items: &'a [String],
    pub selected: usize,
    pub anchor_column: u16,
    pub theme: &'a Theme,
}

impl Widget for Popup<'_> {
    type Output = Result<(), GeometryInfeasible>;

    /// `ui.rect` is the content area the popup must stay inside.
    fn ui(&mut self, ui: &mut Ui) -> Result<(), GeometryInfeasible> {
        if self.items.is_empty() {
            return Ok(());
        }

        let popup = popup_geometry(self.items, self.anchor_column, ui.rect)?;
        let normal = self.theme.style(Token::Normal);
        let highlight = self.theme.style(Token::Highlight);

        ui.painter.fill_rect(popup, normal);
        ui.painter
            .border(popup, self.theme.style(Token::Border), BorderKind::Plain);

        let inner = popup.shrink(1);
        if inner.is_empty() {
            return Ok(());
        }

        for (idx, item) in self.items.iter().enumerate().take(usize::from(inner.h)) {
            let row_y = inner.y + idx as u16;
            let style = if idx == self.selected { highlight } else { normal };
            let text = fit_to_width(format!(" {item} "), usize::from(inner.w));
            ui.painter
                .text_clipped(Pos::new(inner.x, row_y), text, style, inner);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/popup.rs"]
mod tests;
