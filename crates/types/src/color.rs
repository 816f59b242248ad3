//! RGBA color and the dial's indexed color table entries.

use serde::{Deserialize, Serialize};

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Fully transparent, used for `none` table entries.
    pub const NONE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
            (self.a * 255.0) as u8,
        )
    }

    /// `#rrggbb` form, or `#rrggbbaa` when not opaque. Used when writing
    /// colors back to the settings file.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Multiply each color channel by `factor`, capping at 1.0. Alpha is kept.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            r: (self.r * factor).clamp(0.0, 1.0),
            g: (self.g * factor).clamp(0.0, 1.0),
            b: (self.b * factor).clamp(0.0, 1.0),
            a: self.a,
        }
    }

    /// Linear interpolation towards `other`, `t` in 0..=1
    pub fn lerp(&self, other: &Color, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Create from GTK RGBA
    #[cfg(feature = "gtk")]
    pub fn from_gdk_rgba(rgba: &gdk4::RGBA) -> Self {
        Self {
            r: rgba.red() as f64,
            g: rgba.green() as f64,
            b: rgba.blue() as f64,
            a: rgba.alpha() as f64,
        }
    }

    /// Apply to Cairo context
    #[cfg(feature = "gtk")]
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// One slot of the dial color table.
///
/// `definition` is the user-facing string (`"#c00000"`, `"navy"`, `"none"`);
/// `color` is filled in when the table is resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorEntry {
    pub short_name: String,
    pub long_name: String,
    pub definition: String,
    #[serde(skip)]
    pub color: Color,
}

impl ColorEntry {
    pub fn new(short_name: &str, long_name: &str, definition: &str) -> Self {
        Self {
            short_name: short_name.to_string(),
            long_name: long_name.to_string(),
            definition: definition.to_string(),
            color: Color::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_caps_at_one() {
        let c = Color::new(0.8, 0.5, 0.0, 0.5).scaled(1.5);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 0.75).abs() < 1e-9);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(Color::from_rgba8(192, 0, 0, 255).to_hex(), "#c00000");
        assert_eq!(Color::from_rgba8(0, 0, 0, 0).to_hex(), "#00000000");
    }

    #[test]
    fn test_color_entry_skips_resolved_color() {
        let mut entry = ColorEntry::new("face", "Face", "#ffffff");
        entry.color = Color::new(1.0, 1.0, 1.0, 1.0);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"color\""));

        let back: ColorEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.definition, "#ffffff");
        assert_eq!(back.color, Color::default());
    }
}
