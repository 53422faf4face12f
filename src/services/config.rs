//! Application configuration: title, menus, colors, quit key and log destination.

use crate::menu::{MenuModel, MenuModelError, TopMenu};
use crate::ui::core::style::{Style, StyleParseError};
use crate::ui::core::theme::Theme;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Menu(MenuModelError),
    Color { field: &'static str, source: StyleParseError },
    InvalidQuitKey(char),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
            ConfigError::Menu(err) => write!(f, "invalid menu definition: {}", err),
            ConfigError::Color { field, source } => {
                write!(f, "invalid color for {}: {}", field, source)
            }
            ConfigError::InvalidQuitKey(ch) => {
                write!(f, "quit key {:?} must be a printable character", ch)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Menu(err) => Some(err),
            ConfigError::Color { source, .. } => Some(source),
            ConfigError::InvalidQuitKey(_) => None,
        }
    }
}

impl From<MenuModelError> for ConfigError {
    fn from(err: MenuModelError) -> Self {
        ConfigError::Menu(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub label: String,
    /// Submenu items. Also accepts a single space-separated string.
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Vec<String>,
}

impl MenuConfig {
    pub fn new(label: &str, items: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Items {
        List(Vec<String>),
        Words(String),
    }

    Ok(match Items::deserialize(deserializer)? {
        Items::List(items) => items,
        Items::Words(words) => words.split_whitespace().map(str::to_string).collect(),
    })
}

/// Attribute specs (`"foreground/background"`) for each style token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub normal: String,
    pub highlight: String,
    pub border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            normal: "default/default".to_string(),
            highlight: "white/blue".to_string(),
            border: "default/default".to_string(),
        }
    }
}

impl ColorConfig {
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            normal: parse_style("normal", &self.normal)?,
            highlight: parse_style("highlight", &self.highlight)?,
            border: parse_style("border", &self.border)?,
        })
    }
}

fn parse_style(field: &'static str, spec: &str) -> Result<Style, ConfigError> {
    spec.parse()
        .map_err(|source| ConfigError::Color { field, source })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub quit_key: char,
    pub menus: Vec<MenuConfig>,
    pub colors: ColorConfig,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "menuframe".to_string(),
            quit_key: 'q',
            menus: vec![
                MenuConfig::new("File", &["New", "Open", "Save", "---", "Quit"]),
                MenuConfig::new("Edit", &["Undo", "Redo", "Cut", "Copy", "Paste"]),
                MenuConfig::new("View", &["Zoom-In", "Zoom-Out"]),
                MenuConfig::new("Help", &[]),
            ],
            colors: ColorConfig::default(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn menu_model(&self) -> Result<MenuModel, ConfigError> {
        let menus = self
            .menus
            .iter()
            .map(|m| TopMenu::new(m.label.clone(), m.items.iter().cloned()))
            .collect();
        Ok(MenuModel::new(menus)?)
    }

    pub fn theme(&self) -> Result<Theme, ConfigError> {
        self.colors.theme()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quit_key.is_control() || self.quit_key.is_whitespace() {
            return Err(ConfigError::InvalidQuitKey(self.quit_key));
        }
        self.menu_model()?;
        self.theme()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
