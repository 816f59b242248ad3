//! Sine/cosine lookup tables and the polar-to-offset projector.
//!
//! Angles are integer table units, `SCALE_4` per turn, with 0 at twelve
//! o'clock and increasing clockwise on screen.

use std::f64::consts::PI;

use dialclock_types::{SCALE_2, SCALE_4};

/// Shift for sizes in 128ths of the dial size (64 reaches the rim).
pub const SHAPE_SHIFT: u32 = 7;
/// Shift for hand length and tail, in 64ths of the dial size (32 reaches the rim).
pub const HAND_SHIFT: u32 = 6;

/// Wrap any angle into `0..SCALE_4`.
#[inline]
pub fn normalize_angle(angle: i32) -> i32 {
    angle.rem_euclid(SCALE_4)
}

/// Fixed-point radius: `dial_size * size >> shift`, saturating at the i32 range.
#[inline]
pub fn scaled(dial_size: i32, size: i32, shift: u32) -> i32 {
    let wide = (i64::from(dial_size) * i64::from(size)) >> shift;
    wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Dense sine and cosine tables, one entry per table unit.
#[derive(Debug, Clone)]
pub struct TrigTable {
    sin: Vec<f64>,
    cos: Vec<f64>,
    start_point: i32,
}

impl TrigTable {
    pub fn new(start_point: i32) -> Self {
        let mut table = Self {
            sin: vec![0.0; SCALE_4 as usize],
            cos: vec![0.0; SCALE_4 as usize],
            start_point: 0,
        };
        table.fill(start_point);
        table
    }

    /// Refill both tables. Index `i` holds the functions of
    /// `(start_point + i) mod SCALE_4`, so `start_point` rotates the whole dial.
    pub fn fill(&mut self, start_point: i32) {
        let start_point = normalize_angle(start_point);
        for i in 0..SCALE_4 {
            let x = (start_point + i).rem_euclid(SCALE_4) as f64;
            let radians = x * PI / SCALE_2 as f64;
            self.sin[i as usize] = radians.sin();
            self.cos[i as usize] = radians.cos();
        }
        self.start_point = start_point;
        log::debug!("trig tables filled, start point {}", start_point);
    }

    pub fn start_point(&self) -> i32 {
        self.start_point
    }

    pub fn sin(&self, angle: i32) -> f64 {
        self.sin[normalize_angle(angle) as usize]
    }

    pub fn cos(&self, angle: i32) -> f64 {
        self.cos[normalize_angle(angle) as usize]
    }

    /// Offset from the gauge center for a point `radius` pixels out at `angle`.
    ///
    /// Screen y grows downwards, so angle 0 gives `(0, -radius)`.
    pub fn project(&self, radius: i32, angle: i32) -> (i32, i32) {
        let index = normalize_angle(angle) as usize;
        let r = radius as f64;
        (
            (r * self.sin[index]).round() as i32,
            -((r * self.cos[index]).round() as i32),
        )
    }
}

impl Default for TrigTable {
    fn default() -> Self {
        Self::new(0)
    }
}
