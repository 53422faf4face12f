use super::geom::Rect;
use super::painter::Painter;

/// Drawing context handed to widgets: the area they own plus the frame's painter.
pub struct Ui<'a> {
    pub rect: Rect,
    pub painter: &'a mut Painter,
}

impl<'a> Ui<'a> {
    pub fn new(rect: Rect, painter: &'a mut Painter) -> Self {
        Self { rect, painter }
    }

    pub fn with_rect<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Ui<'_>) -> R) -> R {
        let mut child = Ui {
            rect,
            painter: self.painter,
        };
        f(&mut child)
    }
}

pub trait Widget {
    type Output;

    fn ui(&mut self, ui: &mut Ui) -> Self::Output;
}
