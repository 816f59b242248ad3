//! Window shape mask: one round cutout per gauge in the grid.
//!
//! The circles are painted into an off-screen alpha surface and gdk turns
//! the more-than-half-opaque pixels into a region. Any failure leaves the
//! window rectangular.

use std::f64::consts::PI;

use dialclock_types::DialConfig;

use crate::trig::{scaled, SHAPE_SHIFT};

/// Build the shape region for a `dial_width` x `dial_height` grid of round
/// gauges. Returns None when the mask surface cannot be created.
pub fn build_mask(config: &DialConfig) -> Option<cairo::Region> {
    let (width, height) = config.surface_size();
    let surface = match cairo::ImageSurface::create(cairo::Format::A8, width, height) {
        Ok(surface) => surface,
        Err(e) => {
            log::warn!("Failed to create {}x{} mask surface: {}", width, height, e);
            return None;
        }
    };

    {
        let cr = match cairo::Context::new(&surface) {
            Ok(cr) => cr,
            Err(e) => {
                log::warn!("Failed to create mask context: {}", e);
                return None;
            }
        };
        if let Err(e) = paint_cutouts(&cr, config) {
            log::warn!("Failed to paint window mask: {}", e);
            return None;
        }
    }
    surface.flush();

    let region = gdk4::cairo_region_create_from_surface(&surface);
    log::debug!(
        "window mask {}x{}: {} rectangles",
        width,
        height,
        region.num_rectangles()
    );
    Some(region)
}

fn paint_cutouts(cr: &cairo::Context, config: &DialConfig) -> Result<(), cairo::Error> {
    let size = config.dial_size as f64;
    let radius = scaled(config.dial_size, 64, SHAPE_SHIFT) as f64;
    cr.set_source_rgba(0.0, 0.0, 0.0, 1.0);
    for row in 0..config.dial_height {
        for col in 0..config.dial_width {
            let cx = col as f64 * size + size / 2.0;
            let cy = row as f64 * size + size / 2.0;
            cr.new_path();
            cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
            cr.fill()?;
        }
    }
    Ok(())
}
