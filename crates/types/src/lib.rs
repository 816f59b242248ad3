//! dialclock-types: Shared data types for the dialclock gauge engine.
//!
//! This crate contains pure data types (colors, dial geometry, hand styles)
//! shared by the render crate and the application. GTK and Cairo are only
//! pulled in by the optional `gtk` feature.

pub mod color;
pub mod dial;
pub mod hand;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorEntry};
pub use dial::{
    clamp_dial_size, grid_fits, DialConfig, MarkerType, DIAL_SIZE_STEP, MAX_DIALS, MAX_DIAL_SIZE,
    MIN_DIAL_SIZE, SCALE_1, SCALE_2, SCALE_3, SCALE_4,
};
pub use hand::{HandShape, HandStyle, MAX_HAND_LENGTH};
