//! TUI integration layer (crossterm + ratatui).
//!
//! Kept separate from `menu`/`ui::core` so the state machine and the widgets
//! can be exercised headlessly without terminal crates.

pub mod crossterm;
pub mod surface;
pub mod terminal_guard;

pub use surface::TerminalSurface;
pub use terminal_guard::TerminalGuard;
