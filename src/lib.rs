//! dialclock: a grid of analog timezone clocks drawn with the dial engine
//!
//! This library provides:
//! - Configuration store and clock settings
//! - Ordered containers for clock faces
//! - Clock business logic (hand angles, face composition)
//! - Frame rendering to the window, SVG and PNG

pub mod app;
pub mod clock;
pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use app::{Action, AppState, Outcome};
pub use config::{ClockSettings, ConfigStore};
