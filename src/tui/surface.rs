use crate::ui::backend::terminal::RatatuiTerminal;
use crate::ui::core::painter::PaintCmd;
use crate::ui::surface::Surface;
use std::io;

/// The real terminal as a [`Surface`].
///
/// Expects a [`TerminalGuard`](crate::tui::terminal_guard::TerminalGuard) to
/// hold the terminal in raw/alternate-screen mode while it is in use.
pub struct TerminalSurface {
    terminal: RatatuiTerminal,
}

impl TerminalSurface {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            terminal: RatatuiTerminal::new(io::stdout())?,
        })
    }
}

impl Surface for TerminalSurface {
    fn dimensions(&self) -> io::Result<(u16, u16)> {
        self.terminal.size()
    }

    // ratatui's clear also resets the diff buffer, so the next draw is always a full repaint.
    fn clear(&mut self, _redraw: bool) -> io::Result<()> {
        self.terminal.clear()
    }

    fn present(&mut self, cmds: &[PaintCmd]) -> io::Result<()> {
        self.terminal.present(cmds)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.terminal.flush()
    }
}
