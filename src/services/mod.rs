//! Configuration loading.

pub mod config;
pub mod settings;

pub use config::{AppConfig, ColorConfig, ConfigError, MenuConfig};
pub use settings::{default_config_json, default_config_path, load_config, resolve_config};
