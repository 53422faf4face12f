//! menuframe - bordered full-screen terminal frame with an inline menu bar
//!
//! Modules:
//! - core: logical keys and the blocking input seam
//! - menu: menu model and the menu bar state machine
//! - services: configuration loading
//! - ui: geometry, painter, backends and the frame/title bar/popup widgets
//! - tui: crossterm input, terminal surface and terminal guard
//! - app: application context and event loop

pub mod app;
pub mod core;
pub mod menu;
pub mod services;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;
