//! Core types shared by the menu state machine, the input adapters and the app loop.

pub mod event;
pub mod input;

pub use event::{Direction, LogicalKey};
pub use input::{InputSource, ScriptedInput};
