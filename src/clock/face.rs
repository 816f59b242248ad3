//! One timezone clock drawn with the dial primitives.

use chrono::{DateTime, Offset, Timelike, Utc};
use chrono_tz::Tz;
use dialclock_render::{DialCanvas, DrawSession, TextRow, NO_COLOR};
use dialclock_types::{ColorEntry, HandShape, HandStyle};
use serde::{Deserialize, Serialize};

use super::angles::{marker_label, FaceAngles};

// Color table slots used by the clock face
pub const TEXT: i32 = 0;
pub const FACE: i32 = 1;
pub const RIM: i32 = 2;
pub const TICK: i32 = 3;
pub const HOUR: i32 = 4;
pub const MINUTE: i32 = 5;
pub const SECOND: i32 = 6;
pub const MARK: i32 = 7;
pub const HOT: i32 = 8;
pub const COLD: i32 = 9;

/// Table units between minute ticks
const MINUTE_STEP: i32 = 20;

/// Color table in slot order
pub fn default_colors() -> Vec<ColorEntry> {
    vec![
        ColorEntry::new("text", "Text", "#202020"),
        ColorEntry::new("face", "Face", "#f4f1e8"),
        ColorEntry::new("rim", "Rim", "#505050"),
        ColorEntry::new("tick", "Ticks", "#303030"),
        ColorEntry::new("hour", "Hour hand", "#1a1a1a"),
        ColorEntry::new("minute", "Minute hand", "#1a1a1a"),
        ColorEntry::new("second", "Second hand", "#c01818"),
        ColorEntry::new("mark", "Markers", "#283c80"),
        ColorEntry::new("hot", "Daytime", "#e07020"),
        ColorEntry::new("cold", "Night", "#2070d0"),
    ]
}

/// Outline of the face background
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FaceShape {
    #[serde(rename = "circle")]
    #[default]
    Circle,
    #[serde(rename = "square")]
    Square,
}

impl FaceShape {
    pub fn name(&self) -> &'static str {
        match self {
            FaceShape::Circle => "circle",
            FaceShape::Square => "square",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "circle" => Some(FaceShape::Circle),
            "square" => Some(FaceShape::Square),
            _ => None,
        }
    }
}

/// Face shape and the three hands
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaceStyle {
    pub shape: FaceShape,
    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub second_hand: HandStyle,
    pub show_seconds: bool,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            shape: FaceShape::Circle,
            hour_hand: HandStyle {
                shape: HandShape::Kite,
                length: 16,
                tail: 3,
                line_color: HOUR,
                fill_color: HOUR,
                fill_in: true,
                gauge: false,
            },
            minute_hand: HandStyle {
                shape: HandShape::Pointed,
                length: 25,
                tail: 4,
                line_color: MINUTE,
                fill_color: MINUTE,
                fill_in: true,
                gauge: false,
            },
            second_hand: HandStyle {
                shape: HandShape::Needle,
                length: 28,
                tail: 6,
                line_color: SECOND,
                fill_color: SECOND,
                fill_in: true,
                gauge: false,
            },
            show_seconds: true,
        }
    }
}

/// A clock showing the time in one timezone
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    pub tz: Tz,
    pub label: String,
}

impl ClockFace {
    /// A face labelled with `label`, or the city part of the zone name.
    pub fn new(tz: Tz, label: Option<&str>) -> Self {
        let label = match label {
            Some(label) if !label.trim().is_empty() => label.trim().to_string(),
            _ => tz
                .name()
                .rsplit('/')
                .next()
                .unwrap_or_else(|| tz.name())
                .replace('_', " "),
        };
        Self { tz, label }
    }

    /// Parse an IANA zone name, e.g. `"Asia/Tokyo"`.
    pub fn parse(zone: &str, label: Option<&str>) -> Option<Self> {
        match zone.trim().parse::<Tz>() {
            Ok(tz) => Some(Self::new(tz, label)),
            Err(e) => {
                log::warn!("Unknown timezone '{}': {}", zone, e);
                None
            }
        }
    }

    /// Seconds east of UTC at `now`
    pub fn utc_offset(&self, now: DateTime<Utc>) -> i32 {
        now.with_timezone(&self.tz).offset().fix().local_minus_utc()
    }
}

/// Paint one face, back to front.
pub fn draw_face<C: DialCanvas>(
    session: &DrawSession<'_, C>,
    face: &ClockFace,
    now: DateTime<Utc>,
    style: &FaceStyle,
) -> Result<(), cairo::Error> {
    let config = session.config();
    let local = now.with_timezone(&face.tz);
    let shaded = config.dial_gradient > 0;

    match style.shape {
        FaceShape::Circle => {
            session.circle(64, FACE, RIM)?;
            if shaded {
                session.circle_gradient(60, FACE, 0)?;
            }
        }
        FaceShape::Square => {
            session.square(64, FACE, RIM)?;
            if shaded {
                session.square_gradient(60, FACE, 0)?;
            }
        }
    }

    let daytime = (6..18).contains(&local.hour());
    session.hot_cold(50, if daytime { HOT } else { COLD }, !daytime)?;

    for i in 0..60 {
        if i % 5 != 0 {
            session.minute(58, 3, i * MINUTE_STEP, TICK)?;
        }
    }
    for i in 0..60 {
        let angle = i * MINUTE_STEP;
        session.mark(angle, 60, MARK, TEXT, &marker_label(config.marker_type, angle))?;
    }

    session.text(TextRow::Top, &face.label, TEXT);
    session.text(TextRow::Bottom, &local.format("%a %d").to_string(), TEXT);

    let angles = FaceAngles::from_time(&local);
    session.hand(angles.hour, &style.hour_hand)?;
    session.hand(angles.minute, &style.minute_hand)?;
    if style.show_seconds {
        session.hand(angles.second, &style.second_hand)?;
    }

    // Center cap
    session.circle(3, RIM, NO_COLOR)
}
