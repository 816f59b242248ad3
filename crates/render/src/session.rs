//! One gauge redraw: the scoped session and every shape primitive.
//!
//! A [`DrawSession`] is opened with [`DialEngine::start`](crate::DialEngine::start)
//! and restores the canvas state when finished or dropped. Primitives without
//! a suffix are placed relative to the gauge center; the `_at` variants take
//! an explicit absolute center.

use std::cell::Cell;
use std::f64::consts::PI;

use dialclock_types::{DialConfig, HandStyle, MarkerType, SCALE_2};

use crate::canvas::DialCanvas;
use crate::engine::DialEngine;
use crate::font::{font_family, resolve_font_size};
use crate::gradient::gradient_stops;
use crate::hands::hand_points;
use crate::trig::{scaled, SHAPE_SHIFT};

/// Sentinel color index: do not draw this layer.
pub const NO_COLOR: i32 = -1;

/// Half width of a triangle marker, in table units either side of its tick.
const MARK_SPREAD: i32 = 5;

/// Vertical slot for [`DrawSession::text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRow {
    /// 5/16 of the gauge height below its top edge
    Top,
    /// 11/16 of the gauge height below its top edge
    Bottom,
}

pub struct DrawSession<'a, C: DialCanvas> {
    engine: &'a DialEngine,
    canvas: &'a C,
    origin: (f64, f64),
    center: (f64, f64),
    restored: Cell<bool>,
}

impl<'a, C: DialCanvas> DrawSession<'a, C> {
    pub(crate) fn begin(
        engine: &'a DialEngine,
        canvas: &'a C,
        x: f64,
        y: f64,
    ) -> Result<Self, cairo::Error> {
        canvas.save()?;
        canvas.set_line_cap(cairo::LineCap::Butt);
        canvas.set_line_join(cairo::LineJoin::Miter);
        let half = (engine.config().dial_size / 2) as f64;
        Ok(Self {
            engine,
            canvas,
            origin: (x, y),
            center: (x + half, y + half),
            restored: Cell::new(false),
        })
    }

    /// Restore the canvas state saved at start.
    pub fn finish(self) -> Result<(), cairo::Error> {
        self.restored.set(true);
        self.canvas.restore()
    }

    pub fn config(&self) -> &DialConfig {
        self.engine.config()
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn canvas(&self) -> &C {
        self.canvas
    }

    fn dial_size(&self) -> i32 {
        self.engine.config().dial_size
    }

    /// Pixel radius of a size in 128ths of the dial
    fn radius(&self, size: i32) -> f64 {
        scaled(self.dial_size(), size, SHAPE_SHIFT) as f64
    }

    fn stroke_width(&self) -> f64 {
        (self.dial_size() >> 7).max(1) as f64
    }

    fn point(&self, center: (f64, f64), size: i32, angle: i32) -> (f64, f64) {
        let radius = scaled(self.dial_size(), size, SHAPE_SHIFT);
        let (dx, dy) = self.engine.trig().project(radius, angle);
        (center.0 + dx as f64, center.1 + dy as f64)
    }

    /// Make color `index` the active source
    pub fn set_source(&self, index: i32) {
        let color = self.engine.colors().resolve(index);
        self.canvas.set_color(&color);
    }

    fn trace_polygon(&self, points: &[(f64, f64)]) {
        self.canvas.new_path();
        if let Some((first, rest)) = points.split_first() {
            self.canvas.move_to(first.0, first.1);
            for p in rest {
                self.canvas.line_to(p.0, p.1);
            }
        }
        if points.len() > 2 {
            self.canvas.close_path();
        }
    }

    /// Fill and/or outline the current shape, tracing it again for each pass
    fn paint(
        &self,
        trace: impl Fn(),
        fill_color: i32,
        outline_color: i32,
    ) -> Result<(), cairo::Error> {
        if fill_color != NO_COLOR {
            trace();
            self.set_source(fill_color);
            self.canvas.fill()?;
        }
        if outline_color != NO_COLOR {
            trace();
            self.set_source(outline_color);
            self.canvas.set_line_width(self.stroke_width());
            self.canvas.stroke()?;
        }
        Ok(())
    }

    pub fn circle(&self, size: i32, fill_color: i32, outline_color: i32) -> Result<(), cairo::Error> {
        self.circle_at(self.center, size, fill_color, outline_color)
    }

    pub fn circle_at(
        &self,
        center: (f64, f64),
        size: i32,
        fill_color: i32,
        outline_color: i32,
    ) -> Result<(), cairo::Error> {
        let radius = self.radius(size);
        self.paint(
            || self.canvas.full_circle(center.0, center.1, radius),
            fill_color,
            outline_color,
        )
    }

    pub fn square(&self, size: i32, fill_color: i32, outline_color: i32) -> Result<(), cairo::Error> {
        self.square_at(self.center, size, fill_color, outline_color)
    }

    pub fn square_at(
        &self,
        center: (f64, f64),
        size: i32,
        fill_color: i32,
        outline_color: i32,
    ) -> Result<(), cairo::Error> {
        let half = self.radius(size);
        self.paint(
            || {
                self.canvas.new_path();
                self.canvas
                    .rectangle(center.0 - half, center.1 - half, half * 2.0, half * 2.0);
            },
            fill_color,
            outline_color,
        )
    }

    /// Diagonal gradient across the shape's bounding square, phased by the
    /// gauge's grid cell so adjacent gauges shade continuously.
    fn set_gradient_source(&self, half: f64, fill_color: i32, style: i32) -> Result<(), cairo::Error> {
        let config = self.engine.config();
        let size = config.dial_size.max(1) as f64;
        let diagonal = (self.origin.0 / size) as i32 + (self.origin.1 / size) as i32;
        let diagonals = config.dial_width + config.dial_height - 1;
        let base = self.engine.colors().resolve(fill_color);
        let stops = gradient_stops(&base, config.dial_gradient, style, diagonal, diagonals);
        let (cx, cy) = self.center;
        self.canvas
            .set_linear_gradient((cx - half, cy - half), (cx + half, cy + half), &stops)
    }

    pub fn circle_gradient(&self, size: i32, fill_color: i32, style: i32) -> Result<(), cairo::Error> {
        if fill_color == NO_COLOR {
            return Ok(());
        }
        let radius = self.radius(size);
        self.canvas.full_circle(self.center.0, self.center.1, radius);
        self.set_gradient_source(radius, fill_color, style)?;
        self.canvas.fill()
    }

    pub fn square_gradient(&self, size: i32, fill_color: i32, style: i32) -> Result<(), cairo::Error> {
        if fill_color == NO_COLOR {
            return Ok(());
        }
        let half = self.radius(size);
        let (cx, cy) = self.center;
        self.canvas.new_path();
        self.canvas
            .rectangle(cx - half, cy - half, half * 2.0, half * 2.0);
        self.set_gradient_source(half, fill_color, style)?;
        self.canvas.fill()
    }

    /// Thick 45 degree arc: upper right for hot, left for cold.
    pub fn hot_cold(&self, size: i32, fill_color: i32, cold: bool) -> Result<(), cairo::Error> {
        if fill_color == NO_COLOR {
            return Ok(());
        }
        let middle = if cold { PI } else { -PI / 4.0 };
        let spread = PI / 8.0;
        let radius = self.radius(size);
        self.canvas.new_path();
        self.canvas.arc(
            self.center.0,
            self.center.1,
            radius,
            middle - spread,
            middle + spread,
        );
        self.set_source(fill_color);
        self.canvas
            .set_line_width((self.dial_size() >> 4).max(1) as f64);
        self.canvas.stroke()
    }

    pub fn minute(&self, size: i32, len: i32, angle: i32, color: i32) -> Result<(), cairo::Error> {
        self.minute_at(self.center, size, len, angle, color)
    }

    /// Tick from radius `size` to `size + len`. When `len` is not shorter
    /// than `size` the start point is taken from the opposite side.
    pub fn minute_at(
        &self,
        center: (f64, f64),
        size: i32,
        len: i32,
        angle: i32,
        color: i32,
    ) -> Result<(), cairo::Error> {
        if color == NO_COLOR {
            return Ok(());
        }
        let start_angle = if len < size { angle } else { angle + SCALE_2 };
        let start = self.point(center, size, start_angle);
        let end = self.point(center, size + len, angle);
        self.canvas.new_path();
        self.canvas.move_to(start.0, start.1);
        self.canvas.line_to(end.0, end.1);
        self.set_source(color);
        self.canvas.set_line_width(self.stroke_width());
        self.canvas.stroke()
    }

    pub fn hand(&self, angle: i32, style: &HandStyle) -> Result<(), cairo::Error> {
        self.hand_at(self.center, angle, style)
    }

    pub fn hand_at(
        &self,
        center: (f64, f64),
        angle: i32,
        style: &HandStyle,
    ) -> Result<(), cairo::Error> {
        let points = hand_points(self.engine.trig(), self.dial_size(), center, angle, style);
        let fill_color = if style.fill_in && points.len() >= 3 {
            style.fill_color
        } else {
            NO_COLOR
        };
        self.paint(|| self.trace_polygon(&points), fill_color, style.line_color)
    }

    pub fn mark(
        &self,
        angle: i32,
        size: i32,
        fill_color: i32,
        outline_color: i32,
        text: &str,
    ) -> Result<(), cairo::Error> {
        self.mark_at(self.center, angle, size, fill_color, outline_color, text)
    }

    /// Marker at `angle`, drawn only on multiples of the marker step.
    pub fn mark_at(
        &self,
        center: (f64, f64),
        angle: i32,
        size: i32,
        fill_color: i32,
        outline_color: i32,
        text: &str,
    ) -> Result<(), cairo::Error> {
        let config = self.engine.config();
        if angle.rem_euclid(config.effective_marker_step()) != 0 {
            return Ok(());
        }
        match config.marker_type {
            MarkerType::None => Ok(()),
            MarkerType::Triangle => {
                let points = [
                    self.point(center, size, angle - MARK_SPREAD),
                    self.point(center, size, angle + MARK_SPREAD),
                    self.point(center, size - 3, angle),
                ];
                self.paint(|| self.trace_polygon(&points), fill_color, outline_color)
            }
            MarkerType::Circle => {
                let at = self.point(center, size - 2, angle);
                self.circle_at(at, 2, fill_color, outline_color)
            }
            MarkerType::Numeral | MarkerType::Roman => {
                let at = self.point(center, size - 5, angle);
                self.text_at(at.0, at.1, text, outline_color, true);
                Ok(())
            }
        }
    }

    /// Centered text in the top or bottom slot of the gauge
    pub fn text(&self, row: TextRow, text: &str, color: i32) {
        let dial_size = self.dial_size() as f64;
        let offset = match row {
            TextRow::Top => dial_size * 5.0 / 16.0,
            TextRow::Bottom => dial_size * 11.0 / 16.0,
        };
        self.text_at(self.center.0, self.origin.1 + offset, text, color, false);
    }

    /// Text centered on `(x, y)`. `scaled` text is drawn a size smaller.
    pub fn text_at(&self, x: f64, y: f64, text: &str, color: i32, scaled: bool) {
        if text.is_empty() || color == NO_COLOR {
            return;
        }
        let config = self.engine.config();
        let family = font_family(&config.font_name);
        let size = resolve_font_size(&config.font_name, config.dial_size, scaled);
        let extents = self.canvas.measure_text(text, family, size);
        self.set_source(color);
        self.canvas.show_text_at(
            x - extents.width / 2.0,
            y + extents.height / 2.0,
            text,
            family,
            size,
        );
    }
}

impl<C: DialCanvas> Drop for DrawSession<'_, C> {
    fn drop(&mut self) {
        if !self.restored.get() {
            if let Err(e) = self.canvas.restore() {
                log::warn!("Failed to restore canvas after dial draw: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{Command, RecordingCanvas, Segment, Source};
    use dialclock_types::{Color, ColorEntry, HandShape, SCALE_1, SCALE_4};

    fn engine(dial_size: i32) -> DialEngine {
        DialEngine::new(DialConfig {
            dial_size,
            colors: vec![
                ColorEntry::new("text", "Text", "#000000"),
                ColorEntry::new("face", "Face", "#ffffff"),
                ColorEntry::new("hand", "Hand", "#ff0000"),
                ColorEntry::new("mark", "Mark", "#0000ff"),
            ],
            font_name: "Sans 14".to_string(),
            dial_gradient: 50,
            ..Default::default()
        })
    }

    #[test]
    fn test_start_sets_butt_miter_and_finish_restores() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        assert_eq!(canvas.depth.get(), 1);
        assert_eq!(canvas.line_cap.get(), cairo::LineCap::Butt);
        assert_eq!(canvas.line_join.get(), cairo::LineJoin::Miter);
        session.finish().unwrap();
        assert_eq!(canvas.depth.get(), 0);
    }

    #[test]
    fn test_dropped_session_restores_once() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        {
            let session = engine.start(&canvas, 256.0, 0.0).unwrap();
            assert_eq!(session.center(), (384.0, 128.0));
        }
        assert_eq!(canvas.depth.get(), 0);
    }

    #[test]
    fn test_filled_circle_only() {
        let mut engine = engine(640);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        session.circle(64, 2, NO_COLOR).unwrap();
        session.finish().unwrap();

        let fills = canvas.fills();
        assert_eq!(fills.len(), 1);
        assert!(fills[0].has_arc());
        assert_eq!(
            fills[0].path()[0],
            Segment::Arc {
                xc: 320.0,
                yc: 320.0,
                radius: 320.0,
                angle1: 0.0,
                angle2: 2.0 * PI,
            }
        );
        assert!(canvas.strokes().iter().all(|c| !c.has_arc()));
        assert!(canvas.strokes().is_empty());
    }

    #[test]
    fn test_filled_and_outlined_square() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        session.square(32, 1, 0).unwrap();
        session.square(32, NO_COLOR, NO_COLOR).unwrap();
        drop(session);

        assert_eq!(canvas.fills().len(), 1);
        assert_eq!(canvas.strokes().len(), 1);
        assert_eq!(
            canvas.fills()[0].path(),
            &[Segment::Rectangle(64.0, 64.0, 128.0, 128.0)]
        );
    }

    #[test]
    fn test_gradient_fill_uses_linear_source() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        session.circle_gradient(60, 1, 0).unwrap();
        session.square_gradient(60, NO_COLOR, 0).unwrap();
        drop(session);

        let fills = canvas.fills();
        assert_eq!(fills.len(), 1);
        match &fills[0] {
            Command::Fill {
                source: Source::Linear { start, end, stops },
                ..
            } => {
                assert_eq!(*start, (8.0, 8.0));
                assert_eq!(*end, (248.0, 248.0));
                assert_eq!(stops.len(), 2);
                assert!(stops.iter().all(|(_, c)| c.r <= 1.0 && c.r >= 0.0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    fn linear_stops(command: &Command) -> Vec<(f64, Color)> {
        match command {
            Command::Fill {
                source: Source::Linear { stops, .. },
                ..
            } => stops.clone(),
            other => panic!("expected a gradient fill, got {:?}", other),
        }
    }

    #[test]
    fn test_neighbour_gradients_continue() {
        let mut engine = engine(256);
        assert!(engine.set_grid(2, 1));
        let canvas = RecordingCanvas::new();
        for x in [0.0, 256.0] {
            let session = engine.start(&canvas, x, 0.0).unwrap();
            session.circle_gradient(60, 2, 0).unwrap();
            session.finish().unwrap();
        }

        let fills = canvas.fills();
        assert_eq!(fills.len(), 2);
        let left = linear_stops(&fills[0]);
        let right = linear_stops(&fills[1]);
        // The left cell ends where the right cell starts
        assert_eq!(left[1].1, right[0].1);
        assert_ne!(left[0].1, left[1].1);
        assert_ne!(right[0].1, right[1].1);
        assert!(left[0].1.r > right[1].1.r);
    }

    #[test]
    fn test_square_gradient_fill() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        session.square_gradient(32, 2, 1).unwrap();
        drop(session);

        let fills = canvas.fills();
        assert_eq!(fills.len(), 1);
        assert_eq!(
            fills[0].path(),
            &[Segment::Rectangle(64.0, 64.0, 128.0, 128.0)]
        );
        match &fills[0] {
            Command::Fill {
                source: Source::Linear { start, end, stops },
                ..
            } => {
                assert_eq!(*start, (64.0, 64.0));
                assert_eq!(*end, (192.0, 192.0));
                // Style 1 runs dark to light
                assert!(stops[0].1.r < stops[1].1.r);
                assert_eq!(stops[1].1, Color::new(1.0, 0.0, 0.0, 1.0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_circle_at_uses_given_center() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 256.0, 0.0).unwrap();
        session.circle_at((50.0, 70.0), 16, 1, 0).unwrap();
        drop(session);

        let arc = Segment::Arc {
            xc: 50.0,
            yc: 70.0,
            radius: 32.0,
            angle1: 0.0,
            angle2: 2.0 * PI,
        };
        assert_eq!(canvas.fills()[0].path(), &[arc.clone()]);
        assert_eq!(canvas.strokes()[0].path(), &[arc]);
    }

    #[test]
    fn test_square_at_uses_given_center() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 256.0, 0.0).unwrap();
        session.square_at((50.0, 70.0), 16, 1, NO_COLOR).unwrap();
        drop(session);

        assert!(canvas.strokes().is_empty());
        assert_eq!(
            canvas.fills()[0].path(),
            &[Segment::Rectangle(18.0, 38.0, 64.0, 64.0)]
        );
    }

    #[test]
    fn test_minute_at_uses_given_center() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 256.0, 0.0).unwrap();
        // Quarter turn: the tick points right from (50, 70)
        session.minute_at((50.0, 70.0), 60, 4, SCALE_1, 0).unwrap();
        drop(session);

        assert_eq!(
            canvas.strokes()[0].points(),
            vec![(170.0, 70.0), (178.0, 70.0)]
        );
    }

    #[test]
    fn test_hand_at_uses_given_center() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 256.0, 0.0).unwrap();
        let style = HandStyle {
            shape: HandShape::Line,
            length: 16,
            tail: 4,
            ..Default::default()
        };
        session.hand_at((50.0, 70.0), 0, &style).unwrap();
        drop(session);

        assert!(canvas.fills().is_empty());
        // From the tail behind the center to the tip above it
        assert_eq!(
            canvas.strokes()[0].points(),
            vec![(50.0, 86.0), (50.0, 6.0)]
        );
    }

    #[test]
    fn test_mark_at_uses_given_center() {
        let mut engine = engine(256);
        engine.set_marker(MarkerType::Circle, 100);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 256.0, 0.0).unwrap();
        session.mark_at((50.0, 70.0), 0, 60, 3, NO_COLOR, "").unwrap();
        drop(session);

        assert_eq!(
            canvas.fills()[0].path(),
            &[Segment::Arc {
                xc: 50.0,
                yc: -46.0,
                radius: 4.0,
                angle1: 0.0,
                angle2: 2.0 * PI,
            }]
        );
    }

    #[test]
    fn test_hot_and_cold_arcs() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        session.hot_cold(40, 2, false).unwrap();
        session.hot_cold(40, 3, true).unwrap();
        drop(session);

        let strokes = canvas.strokes();
        assert_eq!(strokes.len(), 2);
        for stroke in &strokes {
            if let Segment::Arc { angle1, angle2, .. } = stroke.path()[0] {
                assert!((angle2 - angle1 - PI / 4.0).abs() < 1e-9);
            } else {
                panic!("expected arc");
            }
        }
        match strokes[0].path()[0] {
            Segment::Arc { angle1, angle2, .. } => assert!(angle1 < 0.0 && angle2 <= 0.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_minute_tick_endpoints() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        // Inner radius 60, length 4: a short tick at 12 o'clock
        session.minute(60, 4, 0, 0).unwrap();
        // Length not shorter than size: start flips to the other side
        session.minute(4, 60, 0, 0).unwrap();
        drop(session);

        let strokes = canvas.strokes();
        assert_eq!(strokes[0].points(), vec![(128.0, 8.0), (128.0, 0.0)]);
        assert_eq!(strokes[1].points(), vec![(128.0, 136.0), (128.0, 0.0)]);
    }

    #[test]
    fn test_hand_fill_and_outline_passes() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        let style = HandStyle {
            shape: HandShape::Arrow,
            line_color: 0,
            fill_color: 2,
            fill_in: true,
            ..Default::default()
        };
        session.hand(100, &style).unwrap();
        drop(session);

        let fills = canvas.fills();
        let strokes = canvas.strokes();
        assert_eq!(fills.len(), 1);
        assert_eq!(strokes.len(), 1);
        assert_eq!(fills[0].points().len(), 7);
        assert_eq!(fills[0].path().last(), Some(&Segment::Close));
        assert!(matches!(
            &fills[0],
            Command::Fill { source: Source::Solid(c), .. } if c.r == 1.0 && c.g == 0.0
        ));
    }

    #[test]
    fn test_line_hand_is_never_filled() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        let style = HandStyle {
            shape: HandShape::Line,
            fill_in: true,
            fill_color: 2,
            ..Default::default()
        };
        session.hand(0, &style).unwrap();
        drop(session);

        assert!(canvas.fills().is_empty());
        let strokes = canvas.strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].points().len(), 2);
        assert!(!strokes[0].path().contains(&Segment::Close));
    }

    #[test]
    fn test_marks_only_on_step() {
        let mut engine = engine(256);
        engine.set_marker(MarkerType::Triangle, 100);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        for i in 0..60 {
            session.mark(i * SCALE_4 / 60, 60, 3, NO_COLOR, "").unwrap();
        }
        drop(session);

        let fills = canvas.fills();
        assert_eq!(fills.len(), 12);
        assert_eq!(fills[0].points().len(), 3);
    }

    #[test]
    fn test_zero_step_behaves_like_full_turn() {
        let count = |step: i32| {
            let mut engine = engine(256);
            engine.set_marker(MarkerType::Circle, step);
            let canvas = RecordingCanvas::new();
            let session = engine.start(&canvas, 0.0, 0.0).unwrap();
            for angle in (0..SCALE_4).step_by(20) {
                session.mark(angle, 60, 1, 0, "").unwrap();
            }
            drop(session);
            canvas.commands()
        };
        let zero = count(0);
        assert_eq!(zero, count(SCALE_4));
        assert_eq!(zero.len(), 2);
    }

    #[test]
    fn test_skipped_mark_emits_nothing() {
        let mut engine = engine(256);
        engine.set_marker(MarkerType::Numeral, 100);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        session.mark(40, 60, 1, 0, "1").unwrap();
        assert!(canvas.commands().is_empty());
        session.mark(300, 60, 1, 0, "3").unwrap();
        drop(session);

        let texts = canvas.texts();
        assert_eq!(texts.len(), 1);
        match &texts[0] {
            Command::Text { text, size, .. } => {
                assert_eq!(text, "3");
                assert!((size - 14.0 * 0.8).abs() < 1e-9);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_no_markers_type() {
        let mut engine = engine(256);
        engine.set_marker(MarkerType::None, 100);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 0.0).unwrap();
        session.mark(0, 60, 1, 0, "12").unwrap();
        drop(session);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_text_rows_are_centered() {
        let mut engine = engine(256);
        let canvas = RecordingCanvas::new();
        let session = engine.start(&canvas, 0.0, 256.0).unwrap();
        session.text(TextRow::Top, "UTC", 0);
        session.text(TextRow::Bottom, "", 0);
        session.text(TextRow::Bottom, "Mon", 0);
        drop(session);

        let texts = canvas.texts();
        assert_eq!(texts.len(), 2);
        // Recorder measures 0.5em per character
        let width = 3.0 * 14.0 * 0.5;
        match (&texts[0], &texts[1]) {
            (Command::Text { x: x0, y: y0, .. }, Command::Text { x: x1, y: y1, .. }) => {
                assert_eq!(*x0, 128.0 - width / 2.0);
                assert_eq!(*y0, 256.0 + 80.0 + 7.0);
                assert_eq!(*x1, *x0);
                assert_eq!(*y1, 256.0 + 176.0 + 7.0);
            }
            _ => unreachable!(),
        }
    }
}
