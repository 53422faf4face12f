use crate::core::event::{Direction, LogicalKey};
use crate::menu::model::{MenuModel, QUIT_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    Browsing,
    SubmenuOpen,
}

/// What the application loop has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Clear the whole screen before the next frame (a closed popup leaves no trace).
    Repaint,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submenu {
    items: Vec<String>,
    selected: usize,
}

impl Submenu {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }
}

/// Menu bar interaction state: the active top-level entry and the open submenu, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuBar {
    active: usize,
    submenu: Option<Submenu>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> MenuMode {
        if self.submenu.is_some() {
            MenuMode::SubmenuOpen
        } else {
            MenuMode::Browsing
        }
    }

    pub fn is_open(&self) -> bool {
        self.submenu.is_some()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn submenu(&self) -> Option<&Submenu> {
        self.submenu.as_ref()
    }

    pub fn navigate(&mut self, model: &MenuModel, direction: Direction) -> Effect {
        if self.is_open() {
            tracing::debug!(?direction, "navigate ignored while a submenu is open");
            return Effect::None;
        }
        let count = model.len();
        if count == 0 {
            tracing::warn!(?direction, "navigate on an empty menu bar");
            return Effect::None;
        }

        self.active = match direction {
            Direction::Left => (self.active + count - 1) % count,
            Direction::Right => (self.active + 1) % count,
        };
        tracing::debug!(active = self.active, "menu bar navigated");
        Effect::None
    }

    pub fn open_submenu(&mut self, model: &MenuModel) -> Effect {
        if self.is_open() {
            return Effect::None;
        }
        let children = model.children_at(self.active);
        if children.is_empty() {
            tracing::debug!(label = ?model.label(self.active), "menu entry has no submenu");
            return Effect::None;
        }

        self.submenu = Some(Submenu {
            items: children.to_vec(),
            selected: 0,
        });
        tracing::debug!(label = ?model.label(self.active), items = children.len(), "submenu opened");
        Effect::None
    }

    pub fn close_submenu(&mut self) -> Effect {
        match self.submenu.take() {
            Some(_) => {
                tracing::debug!("submenu closed");
                Effect::Repaint
            }
            None => Effect::None,
        }
    }

    /// Activates the selected item. Only the quit item does anything beyond
    /// closing the submenu.
    pub fn activate_selected(&mut self) -> Effect {
        let Some(submenu) = self.submenu.take() else {
            return Effect::None;
        };
        match submenu.selected_item() {
            Some(QUIT_LABEL) => {
                tracing::info!("quit selected from submenu");
                Effect::Quit
            }
            item => {
                tracing::info!(item = ?item, "submenu item has no action");
                Effect::Repaint
            }
        }
    }

    /// Up/Down inside the popup. Selection movement is not wired up, so this only logs.
    pub fn move_selection(&mut self, key: LogicalKey) -> Effect {
        tracing::debug!(?key, "submenu selection movement is not implemented");
        Effect::None
    }

    /// Drops the submenu when it cannot be drawn.
    pub fn force_close(&mut self) {
        self.submenu = None;
    }

    pub fn handle_key(&mut self, model: &MenuModel, key: LogicalKey, quit_key: char) -> Effect {
        match self.mode() {
            MenuMode::SubmenuOpen => self.handle_submenu_key(key),
            MenuMode::Browsing => self.handle_main_key(model, key, quit_key),
        }
    }

    fn handle_main_key(&mut self, model: &MenuModel, key: LogicalKey, quit_key: char) -> Effect {
        if let Some(direction) = key.direction() {
            return self.navigate(model, direction);
        }
        match key {
            LogicalKey::Enter | LogicalKey::Down => self.open_submenu(model),
            LogicalKey::Esc => Effect::None,
            LogicalKey::Char(ch) if ch == quit_key => {
                tracing::info!("quit key pressed");
                Effect::Quit
            }
            _ => Effect::None,
        }
    }

    fn handle_submenu_key(&mut self, key: LogicalKey) -> Effect {
        match key {
            LogicalKey::Esc => self.close_submenu(),
            LogicalKey::Enter => self.activate_selected(),
            LogicalKey::Up | LogicalKey::Down => self.move_selection(key),
            _ => Effect::None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/menu/state.rs"]
mod tests;
