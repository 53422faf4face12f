//! Screen surface: the present/refresh side of a backend.

use crate::ui::backend::test::{TestBackend, TestBuffer};
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;
use std::io;

/// Character-cell screen the application loop draws into.
///
/// `present` writes one frame of paint commands and refreshes the screen.
/// `flush` is the alternate flush used when a refresh fails.
pub trait Surface {
    /// `(rows, cols)`.
    fn dimensions(&self) -> io::Result<(u16, u16)>;

    /// Blanks the screen. With `redraw` set the next `present` repaints every cell.
    fn clear(&mut self, redraw: bool) -> io::Result<()>;

    fn present(&mut self, cmds: &[PaintCmd]) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// In-memory surface backed by [`TestBackend`].
///
/// Failures can be injected to exercise the refresh retry path.
#[derive(Debug)]
pub struct HeadlessSurface {
    backend: TestBackend,
    rows: u16,
    cols: u16,
    fail_present: bool,
    fail_flush: bool,
    presents: usize,
    flushes: usize,
    clears: usize,
}

impl HeadlessSurface {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            backend: TestBackend::new(cols, rows),
            rows,
            cols,
            fail_present: false,
            fail_flush: false,
            presents: 0,
            flushes: 0,
            clears: 0,
        }
    }

    pub fn failing_present(mut self, fail: bool) -> Self {
        self.fail_present = fail;
        self
    }

    pub fn failing_flush(mut self, fail: bool) -> Self {
        self.fail_flush = fail;
        self
    }

    pub fn buffer(&self) -> &TestBuffer {
        self.backend.buffer()
    }

    pub fn row_text(&self, y: u16) -> String {
        self.backend.buffer().row_text(y)
    }

    pub fn presents(&self) -> usize {
        self.presents
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Surface for HeadlessSurface {
    fn dimensions(&self) -> io::Result<(u16, u16)> {
        Ok((self.rows, self.cols))
    }

    fn clear(&mut self, _redraw: bool) -> io::Result<()> {
        self.clears += 1;
        self.backend.buffer_mut().reset();
        Ok(())
    }

    fn present(&mut self, cmds: &[PaintCmd]) -> io::Result<()> {
        self.presents += 1;
        if self.fail_present {
            return Err(io::Error::new(io::ErrorKind::Other, "present failed"));
        }
        self.backend.draw(Rect::screen(self.rows, self.cols), cmds);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        if self.fail_flush {
            return Err(io::Error::new(io::ErrorKind::Other, "flush failed"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/surface.rs"]
mod tests;
