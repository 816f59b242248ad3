//! Gauge geometry configuration shared by the engine and the application.

use serde::{Deserialize, Serialize};

use crate::color::ColorEntry;

/// Quarter turn in table angle units.
pub const SCALE_1: i32 = 300;
/// Half turn.
pub const SCALE_2: i32 = 600;
/// Three quarter turn.
pub const SCALE_3: i32 = 900;
/// Full turn. Table angles live in `0..SCALE_4`.
pub const SCALE_4: i32 = 1200;

pub const MIN_DIAL_SIZE: i32 = 64;
pub const MAX_DIAL_SIZE: i32 = 1024;
/// Dial sizes move in steps of this many pixels.
pub const DIAL_SIZE_STEP: i32 = 64;
/// Upper bound on `dial_width * dial_height`.
pub const MAX_DIALS: i32 = 50;

/// Decoration drawn at marker positions around the face
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MarkerType {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "triangle")]
    #[default]
    Triangle,
    #[serde(rename = "circle")]
    Circle,
    #[serde(rename = "numeral")]
    Numeral,
    #[serde(rename = "roman")]
    Roman,
}

impl MarkerType {
    pub fn name(&self) -> &'static str {
        match self {
            MarkerType::None => "none",
            MarkerType::Triangle => "triangle",
            MarkerType::Circle => "circle",
            MarkerType::Numeral => "numeral",
            MarkerType::Roman => "roman",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => Some(MarkerType::None),
            "triangle" => Some(MarkerType::Triangle),
            "circle" => Some(MarkerType::Circle),
            "numeral" => Some(MarkerType::Numeral),
            "roman" => Some(MarkerType::Roman),
            _ => None,
        }
    }

    /// Next type in menu order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            MarkerType::None => MarkerType::Triangle,
            MarkerType::Triangle => MarkerType::Circle,
            MarkerType::Circle => MarkerType::Numeral,
            MarkerType::Numeral => MarkerType::Roman,
            MarkerType::Roman => MarkerType::None,
        }
    }
}

/// Per-window gauge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialConfig {
    /// Pixel diameter of one gauge cell, a multiple of 64
    pub dial_size: i32,
    /// Grid columns
    pub dial_width: i32,
    /// Grid rows
    pub dial_height: i32,
    pub colors: Vec<ColorEntry>,
    /// Family with an optional trailing point size, e.g. `"Sans 14"`
    pub font_name: String,
    /// Gradient contrast in percent, 0-99
    pub dial_gradient: i32,
    pub marker_type: MarkerType,
    /// Angle step between markers; 0 means a single marker at 12 o'clock
    pub marker_step: i32,
    /// Rotation applied when the trig tables are filled
    pub start_point: i32,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            dial_size: 256,
            dial_width: 1,
            dial_height: 1,
            colors: Vec::new(),
            font_name: "Sans".to_string(),
            dial_gradient: 0,
            marker_type: MarkerType::default(),
            marker_step: 100,
            start_point: 0,
        }
    }
}

impl DialConfig {
    /// Width and height of the whole gauge grid in pixels
    pub fn surface_size(&self) -> (i32, i32) {
        (
            self.dial_width * self.dial_size,
            self.dial_height * self.dial_size,
        )
    }

    /// Store a new dial size, rounded down to a multiple of 64 and clamped to
    /// `[64, min(1024, screen_max)]`. Returns true when the value changed.
    pub fn set_dial_size(&mut self, size: i32, screen_max: Option<i32>) -> bool {
        let size = clamp_dial_size(size, screen_max);
        if size == self.dial_size {
            return false;
        }
        log::debug!("dial size {} -> {}", self.dial_size, size);
        self.dial_size = size;
        true
    }

    /// Resize the grid. Rejects a grid with a zero side or more than
    /// `MAX_DIALS` cells. Returns true when the value changed.
    pub fn set_grid(&mut self, width: i32, height: i32) -> bool {
        if !grid_fits(width, height) {
            return false;
        }
        if width == self.dial_width && height == self.dial_height {
            return false;
        }
        self.dial_width = width;
        self.dial_height = height;
        true
    }

    pub fn set_gradient(&mut self, percent: i32) {
        self.dial_gradient = percent.clamp(0, 99);
    }

    /// Marker step with 0 normalized to a full turn
    pub fn effective_marker_step(&self) -> i32 {
        if self.marker_step <= 0 {
            SCALE_4
        } else {
            self.marker_step
        }
    }
}

/// True for a grid with both sides at least 1 and at most `MAX_DIALS` cells.
pub fn grid_fits(width: i32, height: i32) -> bool {
    width >= 1
        && height >= 1
        && width
            .checked_mul(height)
            .is_some_and(|cells| cells <= MAX_DIALS)
}

/// Round down to the size step and clamp to the allowed range.
pub fn clamp_dial_size(size: i32, screen_max: Option<i32>) -> i32 {
    let mut upper = MAX_DIAL_SIZE;
    if let Some(max) = screen_max {
        upper = upper.min(max / DIAL_SIZE_STEP * DIAL_SIZE_STEP);
    }
    let upper = upper.max(MIN_DIAL_SIZE);
    (size / DIAL_SIZE_STEP * DIAL_SIZE_STEP).clamp(MIN_DIAL_SIZE, upper)
}
