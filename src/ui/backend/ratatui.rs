use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::{Backend as RatatuiBackendTrait, CrosstermBackend};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::Terminal;
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

/// Replays paint commands into the buffer of the frame being drawn.
pub struct FrameBackend<'a> {
    buf: &'a mut Buffer,
}

impl<'a> FrameBackend<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: RStyle) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char, style: RStyle) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(style);
        }
    }

    fn apply(&mut self, area: Rect, cmd: &PaintCmd) {
        match cmd {
            PaintCmd::FillRect { rect, style } => {
                let style = convert_style(*style);
                let rect = rect.intersect(area);
                for y in rect.y..rect.bottom() {
                    for x in rect.x..rect.right() {
                        self.put_char(x, y, ' ', style);
                    }
                }
            }
            PaintCmd::HLine { pos, len, ch, style } => {
                let style = convert_style(*style);
                for x in pos.x..pos.x.saturating_add(*len) {
                    self.put_char(x, pos.y, *ch, style);
                }
            }
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => self.text(*pos, text, *style, clip.unwrap_or(area)),
            PaintCmd::Border { rect, style, kind } => self.border(*rect, *style, *kind),
        }
    }

    fn text(&mut self, pos: Pos, text: &str, style: Style, clip: Rect) {
        if pos.y < clip.y || pos.y >= clip.bottom() {
            return;
        }
        let style = convert_style(style);
        let mut x = pos.x;
        for g in text.graphemes(true) {
            let w = g.width() as u16;
            if w == 0 {
                continue;
            }
            // A wide glyph that would cross the clip edge is not drawn at all.
            if x.saturating_add(w) > clip.right() {
                break;
            }
            if x >= clip.x {
                self.put(x, pos.y, g, style);
                for dx in 1..w {
                    self.put_char(x + dx, pos.y, ' ', style);
                }
            }
            x = x.saturating_add(w);
        }
    }

    fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        let (Some(right), Some(bottom)) = (rect.last_col(), rect.last_row()) else {
            return;
        };
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        let style = convert_style(style);
        let (tl, tr, bl, br, h, v) = kind.glyphs();

        for x in rect.x + 1..right {
            self.put_char(x, rect.y, h, style);
            self.put_char(x, bottom, h, style);
        }
        for y in rect.y + 1..bottom {
            self.put_char(rect.x, y, v, style);
            self.put_char(right, y, v, style);
        }
        self.put_char(rect.x, rect.y, tl, style);
        self.put_char(right, rect.y, tr, style);
        self.put_char(rect.x, bottom, bl, style);
        self.put_char(right, bottom, br, style);
    }
}

impl Backend for FrameBackend<'_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        for cmd in cmds {
            self.apply(area, cmd);
        }
    }
}

/// Opaque terminal wrapper so the rest of the crate does not need to reference `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    /// `(rows, cols)` of the attached terminal.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok((rows, cols))
    }

    /// Draws one frame with the cursor hidden; ratatui diffs it against the previous one and writes
    /// only the changed cells before flushing.
    pub fn present(&mut self, cmds: &[PaintCmd]) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = FrameBackend::new(frame.buffer_mut());
            backend.draw(area, cmds);
        })?;
        Ok(())
    }

    /// Clears the screen and drops ratatui's diff state so the next draw repaints every cell.
    pub fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        RatatuiBackendTrait::flush(self.terminal.backend_mut())
    }
}

fn convert_style(style: Style) -> RStyle {
    let mut out = RStyle::default().add_modifier(convert_mods(style.mods));
    if let Some(fg) = style.fg {
        out = out.fg(convert_color(fg));
    }
    if let Some(bg) = style.bg {
        out = out.bg(convert_color(bg));
    }
    out
}

fn convert_color(color: Color) -> RColor {
    match color {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn convert_mods(mods: Mod) -> RModifier {
    [
        (Mod::BOLD, RModifier::BOLD),
        (Mod::DIM, RModifier::DIM),
        (Mod::UNDERLINE, RModifier::UNDERLINED),
        (Mod::REVERSE, RModifier::REVERSED),
    ]
    .into_iter()
    .filter(|(ours, _)| mods.contains(*ours))
    .fold(RModifier::empty(), |acc, (_, theirs)| acc | theirs)
}
