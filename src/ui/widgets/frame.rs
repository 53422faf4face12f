use crate::ui::core::geom::Rect;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::theme::{Theme, Token};
use crate::ui::core::widget::{Ui, Widget};

/// Full-screen border. Returns the content area inside it.
pub struct Frame<'a> {
    pub theme: &'a Theme,
}

impl Widget for Frame<'_> {
    type Output = Rect;

    fn ui(&mut self, ui: &mut Ui) -> Rect {
        let screen = ui.rect;
        ui.painter.fill_rect(screen, self.theme.style(Token::Normal));
        ui.painter
            .border(screen, self.theme.style(Token::Border), BorderKind::Plain);
        screen.content_area()
    }
}
