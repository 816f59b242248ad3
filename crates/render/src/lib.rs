//! dialclock-render: the dial engine.
//!
//! Converts gauge state (angles, sizes, color indices, labels) into Cairo
//! drawing on any [`DialCanvas`], using fixed-point trig tables.

pub mod canvas;
pub mod colors;
pub mod engine;
pub mod font;
pub mod gradient;
pub mod hands;
pub mod mask;
pub mod pango_text;
pub mod session;
pub mod trig;

pub use canvas::DialCanvas;
pub use colors::{parse_color, ColorRegistry};
pub use engine::DialEngine;
pub use session::{DrawSession, TextRow, NO_COLOR};
pub use trig::{normalize_angle, TrigTable};
