//! UI layer (thin wrapper over `ratatui`).
//!
//! Widgets only emit paint commands; backends replay them onto a terminal or
//! onto an in-memory cell buffer, and a [`surface::Surface`] owns the
//! present/refresh cycle.

pub mod core;

pub mod backend;

pub mod surface;

pub mod widgets;
