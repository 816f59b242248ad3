//! Two-tone gradient colors derived from one base color.

use dialclock_types::Color;

/// Light and dark ends for `base` at `percent` contrast (0-99).
/// Every channel of both ends stays within `[0, 1]`.
pub fn gradient_endpoints(base: &Color, percent: i32) -> (Color, Color) {
    let g = percent.clamp(0, 99) as f64 / 100.0;
    (base.scaled(1.0 + g), base.scaled(1.0 - g))
}

/// Stops for the gradient of one grid cell.
///
/// A single ramp runs across all diagonals of the grid; cell diagonal
/// `diagonal` of `diagonals` takes its slice of it so neighbouring gauges
/// continue each other's shading. `style` 1 runs the ramp dark to light.
pub fn gradient_stops(
    base: &Color,
    percent: i32,
    style: i32,
    diagonal: i32,
    diagonals: i32,
) -> [(f64, Color); 2] {
    let (light, dark) = gradient_endpoints(base, percent);
    let (from, to) = if style == 1 {
        (dark, light)
    } else {
        (light, dark)
    };
    let n = diagonals.max(1) as f64;
    let k = diagonal.clamp(0, diagonals.max(1) - 1) as f64;
    [
        (0.0, from.lerp(&to, k / n)),
        (1.0, from.lerp(&to, (k + 1.0) / n)),
    ]
}
