/// Label of the submenu item that ends the application.
pub const QUIT_LABEL: &str = "Quit";

/// One entry of the menu bar. An empty `items` list means "no submenu".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopMenu {
    pub label: String,
    pub items: Vec<String>,
}

impl TopMenu {
    pub fn new(label: impl Into<String>, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            label: label.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_submenu(&self) -> bool {
        !self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuModelError {
    EmptyLabel { index: usize },
    DuplicateLabel(String),
}

impl std::fmt::Display for MenuModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuModelError::EmptyLabel { index } => {
                write!(f, "menu entry #{} has an empty label", index)
            }
            MenuModelError::DuplicateLabel(label) => {
                write!(f, "menu label {:?} appears more than once", label)
            }
        }
    }
}

impl std::error::Error for MenuModelError {}

/// Ordered, immutable menu bar definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuModel {
    menus: Vec<TopMenu>,
}

impl MenuModel {
    pub fn new(menus: Vec<TopMenu>) -> Result<Self, MenuModelError> {
        for (index, menu) in menus.iter().enumerate() {
            if menu.label.trim().is_empty() {
                return Err(MenuModelError::EmptyLabel { index });
            }
            if menus[..index].iter().any(|m| m.label == menu.label) {
                return Err(MenuModelError::DuplicateLabel(menu.label.clone()));
            }
        }
        Ok(Self { menus })
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.menus.iter().map(|m| m.label.as_str())
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.menus.get(index).map(|m| m.label.as_str())
    }

    pub fn children_at(&self, index: usize) -> &[String] {
        self.menus
            .get(index)
            .map(|m| m.items.as_slice())
            .unwrap_or_default()
    }

    pub fn children(&self, label: &str) -> Option<&[String]> {
        self.menus
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.items.as_slice())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/menu/model.rs"]
mod tests;
