//! Clock hand and gauge pointer styles

use serde::{Deserialize, Serialize};

/// Polygon used to draw a hand
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HandShape {
    /// Two triangles back to back
    #[serde(rename = "kite")]
    Kite,
    /// Single triangle with a one unit tail
    #[serde(rename = "triangle")]
    Triangle,
    /// Constant width bar
    #[serde(rename = "bar")]
    Bar,
    /// Bar with a pointed tip
    #[serde(rename = "pointed")]
    Pointed,
    /// Bar with a barbed arrow tip
    #[serde(rename = "arrow")]
    Arrow,
    /// Thin triangle
    #[serde(rename = "needle")]
    Needle,
    #[serde(rename = "line")]
    #[default]
    Line,
}

impl HandShape {
    /// Map a numeric style code. Anything unknown draws as a plain line.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => HandShape::Kite,
            1 => HandShape::Triangle,
            2 => HandShape::Bar,
            3 => HandShape::Pointed,
            4 => HandShape::Arrow,
            5 => HandShape::Needle,
            _ => HandShape::Line,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            HandShape::Kite => 0,
            HandShape::Triangle => 1,
            HandShape::Bar => 2,
            HandShape::Pointed => 3,
            HandShape::Arrow => 4,
            HandShape::Needle => 5,
            HandShape::Line => 9,
        }
    }
}

/// Longest hand length or tail accepted from settings, twice the rim
pub const MAX_HAND_LENGTH: i32 = 64;

/// How one hand is drawn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HandStyle {
    pub shape: HandShape,
    /// Tip distance from the center, in 64ths of the dial size
    pub length: i32,
    /// Distance the hand extends behind the center
    pub tail: i32,
    /// Color index for the outline, -1 for none
    pub line_color: i32,
    /// Color index for the fill, -1 for none
    pub fill_color: i32,
    pub fill_in: bool,
    /// Clamp the angle to one turn instead of wrapping (sub-dials)
    pub gauge: bool,
}

impl Default for HandStyle {
    fn default() -> Self {
        Self {
            shape: HandShape::Kite,
            length: 24,
            tail: 4,
            line_color: 0,
            fill_color: 0,
            fill_in: true,
            gauge: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_and_unknown_is_line() {
        for code in [0, 1, 2, 3, 4, 5, 9] {
            assert_eq!(HandShape::from_code(code).code(), code);
        }
        assert_eq!(HandShape::from_code(7), HandShape::Line);
        assert_eq!(HandShape::from_code(-1), HandShape::Line);
    }

    #[test]
    fn test_default_hand_within_limit() {
        let hand = HandStyle::default();
        assert!((0..=MAX_HAND_LENGTH).contains(&hand.length));
        assert!((0..=MAX_HAND_LENGTH).contains(&hand.tail));
    }
}
