//! One frame of the clock grid, to the window or to a file.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dialclock_render::{DialCanvas, DialEngine};
use std::path::Path;

use crate::clock::{draw_face, ClockFace, FaceStyle};

/// Draw the faces into the grid cells, row by row. Cells past the last face
/// stay empty.
pub fn render_frame<'f, C: DialCanvas>(
    engine: &mut DialEngine,
    canvas: &C,
    faces: impl IntoIterator<Item = &'f ClockFace>,
    style: &FaceStyle,
    now: DateTime<Utc>,
) -> Result<(), cairo::Error> {
    let config = engine.config();
    let (size, columns, cells) = (
        config.dial_size,
        config.dial_width,
        (config.dial_width * config.dial_height) as usize,
    );

    for (cell, face) in faces.into_iter().take(cells).enumerate() {
        let cell = cell as i32;
        let x = f64::from(cell % columns * size);
        let y = f64::from(cell / columns * size);
        let session = engine.start(canvas, x, y)?;
        draw_face(&session, face, now, style)?;
        session.finish()?;
    }
    Ok(())
}

/// Render one frame into an SVG file.
pub fn save_svg<'f>(
    path: &Path,
    engine: &mut DialEngine,
    faces: impl IntoIterator<Item = &'f ClockFace>,
    style: &FaceStyle,
    now: DateTime<Utc>,
) -> Result<()> {
    let (width, height) = engine.config().surface_size();
    let surface = cairo::SvgSurface::new(f64::from(width), f64::from(height), Some(path))
        .with_context(|| format!("Failed to create SVG surface for {}", path.display()))?;
    {
        let cr = cairo::Context::new(&surface).context("Failed to create cairo context")?;
        render_frame(engine, &cr, faces, style, now).context("Failed to draw frame")?;
    }
    surface.finish();
    log::info!("Wrote {}x{} SVG to {}", width, height, path.display());
    Ok(())
}

/// Render one frame into a PNG file with a transparent background.
pub fn save_png<'f>(
    path: &Path,
    engine: &mut DialEngine,
    faces: impl IntoIterator<Item = &'f ClockFace>,
    style: &FaceStyle,
    now: DateTime<Utc>,
) -> Result<()> {
    let (width, height) = engine.config().surface_size();
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create image surface")?;
    {
        let cr = cairo::Context::new(&surface).context("Failed to create cairo context")?;
        render_frame(engine, &cr, faces, style, now).context("Failed to draw frame")?;
    }
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
    log::info!("Wrote {}x{} PNG to {}", width, height, path.display());
    Ok(())
}
