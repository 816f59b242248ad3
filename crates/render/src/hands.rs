//! Hand outline geometry.

use dialclock_types::{HandShape, HandStyle, SCALE_1, SCALE_2, SCALE_4};

use crate::trig::{normalize_angle, scaled, TrigTable, HAND_SHIFT};

/// Angle used to draw a hand: gauge pointers stop at the ends of their
/// scale, clock hands wrap around.
pub fn hand_angle(angle: i32, gauge: bool) -> i32 {
    if gauge {
        angle.clamp(0, SCALE_4 - 1)
    } else {
        normalize_angle(angle)
    }
}

/// Outline points of a hand around `center`, in drawing order.
///
/// Filled shapes give 3 to 7 points; [`HandShape::Line`] gives the two ends
/// of a plain stroke.
pub fn hand_points(
    table: &TrigTable,
    dial_size: i32,
    center: (f64, f64),
    angle: i32,
    style: &HandStyle,
) -> Vec<(f64, f64)> {
    let angle = hand_angle(angle, style.gauge);
    let length = scaled(dial_size, style.length, HAND_SHIFT);
    let tail = scaled(dial_size, style.tail, HAND_SHIFT);
    let half = dial_size >> 5;

    let at = |radius: i32, a: i32| {
        let (dx, dy) = table.project(radius, a);
        (center.0 + dx as f64, center.1 + dy as f64)
    };
    // Sideways from `p`, positive side is clockwise of the hand
    let side = |p: (f64, f64), width: i32, sign: i32| {
        let (dx, dy) = table.project(width, angle + sign * SCALE_1);
        (p.0 + dx as f64, p.1 + dy as f64)
    };

    let tip = at(length, angle);
    let back = at(tail, angle + SCALE_2);

    match style.shape {
        HandShape::Kite => vec![
            tip,
            at(half, angle + SCALE_1),
            back,
            at(half, angle - SCALE_1),
        ],
        HandShape::Triangle => vec![tip, side(back, 1, 1), side(back, 1, -1)],
        HandShape::Needle => {
            let width = dial_size / 40;
            vec![tip, side(back, width, 1), side(back, width, -1)]
        }
        HandShape::Bar => vec![
            side(back, half, -1),
            side(tip, half, -1),
            side(tip, half, 1),
            side(back, half, 1),
        ],
        HandShape::Pointed => {
            let shoulder = at(length * 15 / 16, angle);
            vec![
                side(back, half, -1),
                side(shoulder, half, -1),
                tip,
                side(shoulder, half, 1),
                side(back, half, 1),
            ]
        }
        HandShape::Arrow => {
            let neck = at(length * 12 / 16, angle);
            let waist = at(length * 14 / 16, angle);
            let thin = (half / 4).max(1);
            vec![
                side(back, half, -1),
                side(neck, half, -1),
                side(waist, thin, -1),
                tip,
                side(waist, thin, 1),
                side(neck, half, 1),
                side(back, half, 1),
            ]
        }
        HandShape::Line => vec![back, tip],
    }
}
