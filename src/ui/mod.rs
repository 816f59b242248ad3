//! UI components

mod frame;
mod window;

pub use frame::{render_frame, save_png, save_svg};
pub use window::build_window;
