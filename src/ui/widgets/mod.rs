pub mod frame;
pub mod popup;
pub mod title_bar;

pub use frame::Frame;
pub use popup::{popup_geometry, GeometryInfeasible, Popup};
pub use title_bar::{TitleBar, TitleBarLayout};
