//! Menu bar model and its interaction state machine.

pub mod model;
pub mod state;

pub use model::{MenuModel, MenuModelError, TopMenu, QUIT_LABEL};
pub use state::{Effect, MenuBar, MenuMode, Submenu};

