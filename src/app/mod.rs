//! Application context and the blocking event loop.
//!
//! One iteration: draw the frame border, the top row (which yields the anchor
//! column), the popup if a submenu is open, present, then block for one key
//! and dispatch it to the menu state machine.

mod error;

pub use error::AppError;

use crate::core::event::LogicalKey;
use crate::core::input::InputSource;
use crate::menu::{Effect, MenuBar, MenuModel};
use crate::services::AppConfig;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;
use crate::ui::core::theme::Theme;
use crate::ui::core::widget::{Ui, Widget};
use crate::ui::surface::Surface;
use crate::ui::widgets::{Frame, Popup, TitleBar};

pub const MIN_ROWS: u16 = 3;
pub const MIN_COLS: u16 = 40;

pub struct App<S: Surface, I: InputSource> {
    surface: S,
    input: I,
    model: MenuModel,
    menu: MenuBar,
    theme: Theme,
    title: String,
    quit_key: char,
    anchor_column: u16,
    painter: Painter,
    clear_pending: bool,
}

impl<S: Surface, I: InputSource> App<S, I> {
    pub fn new(surface: S, input: I, config: &AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        let model = config.menu_model()?;
        let theme = config.theme()?;

        let (rows, cols) = surface.dimensions().map_err(AppError::Terminal)?;
        if rows < MIN_ROWS || cols < MIN_COLS {
            tracing::error!(rows, cols, "terminal too small");
            return Err(AppError::TerminalTooSmall { rows, cols });
        }
        tracing::info!(rows, cols, menus = model.len(), "menu frame initialized");

        Ok(Self {
            surface,
            input,
            model,
            menu: MenuBar::new(),
            theme,
            title: config.title.clone(),
            quit_key: config.quit_key,
            anchor_column: 0,
            painter: Painter::new(),
            clear_pending: false,
        })
    }

    /// Runs until the quit key or the quit item ends the loop.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.draw_frame();
            let key = self.input.read_key().map_err(AppError::Input)?;
            if self.handle_key(key) == Effect::Quit {
                tracing::info!("menu loop finished");
                return Ok(());
            }
        }
    }

    pub fn handle_key(&mut self, key: LogicalKey) -> Effect {
        tracing::trace!(?key, mode = ?self.menu.mode(), "key");
        let effect = self.menu.handle_key(&self.model, key, self.quit_key);
        if effect == Effect::Repaint {
            self.clear_pending = true;
        }
        effect
    }

    /// Paints one frame. Rendering problems are logged, never returned.
    pub fn draw_frame(&mut self) {
        if self.clear_pending {
            self.clear_pending = false;
            if let Err(err) = self.surface.clear(true) {
                tracing::warn!(error = %err, "screen clear failed");
            }
        }

        let (rows, cols) = match self.surface.dimensions() {
            Ok(dims) => dims,
            Err(err) => {
                tracing::warn!(error = %err, "cannot query screen size, frame skipped");
                return;
            }
        };

        self.painter.clear();
        let theme = &self.theme;
        let mut ui = Ui::new(Rect::screen(rows, cols), &mut self.painter);

        let content = Frame { theme }.ui(&mut ui);

        let submenu_open = self.menu.is_open();
        let top_row = Rect::new(0, 0, cols, rows.min(1));
        let layout = ui.with_rect(top_row, |ui| {
            TitleBar {
                title: &self.title,
                model: &self.model,
                active: self.menu.active(),
                submenu_open,
                theme,
            }
            .ui(ui)
        });
        if let Some(anchor) = layout.anchor_column {
            self.anchor_column = anchor;
        }

        let anchor_column = self.anchor_column;
        let popup = match self.menu.submenu() {
            Some(submenu) => ui.with_rect(content, |ui| {
                Popup {
                    items: submenu.items(),
                    selected: submenu.selected(),
                    anchor_column,
                    theme,
                }
                .ui(ui)
            }),
            None => Ok(()),
        };
        if let Err(err) = popup {
            tracing::error!(error = %err, "submenu popup does not fit, closing it");
            self.menu.force_close();
        }

        self.present();
    }

    fn present(&mut self) {
        let Err(err) = self.surface.present(self.painter.cmds()) else {
            return;
        };
        tracing::warn!(error = %err, "screen refresh failed, retrying with flush");
        if let Err(err) = self.surface.flush() {
            tracing::error!(error = %err, "screen flush failed");
        }
    }

    pub fn menu(&self) -> &MenuBar {
        &self.menu
    }

    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    /// Column the popup aligns to, as last reported by the top row.
    pub fn anchor_column(&self) -> u16 {
        self.anchor_column
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_parts(self) -> (S, I) {
        (self.surface, self.input)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/mod.rs"]
mod tests;
