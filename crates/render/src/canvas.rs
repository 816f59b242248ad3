//! The drawing surface seam used by every dial primitive.
//!
//! Primitives only talk to [`DialCanvas`], so the same face can be drawn
//! into the live window, an SVG/PNG export surface, or a recorder in tests.

use std::f64::consts::PI;

use dialclock_types::Color;

use crate::pango_text::{pango_show_text, pango_text_extents, TextExtents};

pub trait DialCanvas {
    fn save(&self) -> Result<(), cairo::Error>;
    fn restore(&self) -> Result<(), cairo::Error>;

    fn set_line_width(&self, width: f64);
    fn set_line_cap(&self, cap: cairo::LineCap);
    fn set_line_join(&self, join: cairo::LineJoin);

    fn set_color(&self, color: &Color);
    /// Linear gradient source from `start` to `end`, stops as `(offset, color)`.
    fn set_linear_gradient(
        &self,
        start: (f64, f64),
        end: (f64, f64),
        stops: &[(f64, Color)],
    ) -> Result<(), cairo::Error>;

    fn new_path(&self);
    fn move_to(&self, x: f64, y: f64);
    fn line_to(&self, x: f64, y: f64);
    fn close_path(&self);
    /// Clockwise arc in radians, cairo convention (0 = +x axis)
    fn arc(&self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64);
    fn rectangle(&self, x: f64, y: f64, width: f64, height: f64);

    fn fill(&self) -> Result<(), cairo::Error>;
    fn stroke(&self) -> Result<(), cairo::Error>;

    fn measure_text(&self, text: &str, family: &str, size: f64) -> TextExtents;
    /// Draw text with its baseline starting at `(x, y)`
    fn show_text_at(&self, x: f64, y: f64, text: &str, family: &str, size: f64);

    fn full_circle(&self, xc: f64, yc: f64, radius: f64) {
        self.new_path();
        self.arc(xc, yc, radius, 0.0, 2.0 * PI);
    }
}

impl DialCanvas for cairo::Context {
    fn save(&self) -> Result<(), cairo::Error> {
        cairo::Context::save(self)
    }

    fn restore(&self) -> Result<(), cairo::Error> {
        cairo::Context::restore(self)
    }

    fn set_line_width(&self, width: f64) {
        cairo::Context::set_line_width(self, width);
    }

    fn set_line_cap(&self, cap: cairo::LineCap) {
        cairo::Context::set_line_cap(self, cap);
    }

    fn set_line_join(&self, join: cairo::LineJoin) {
        cairo::Context::set_line_join(self, join);
    }

    fn set_color(&self, color: &Color) {
        color.apply_to_cairo(self);
    }

    fn set_linear_gradient(
        &self,
        start: (f64, f64),
        end: (f64, f64),
        stops: &[(f64, Color)],
    ) -> Result<(), cairo::Error> {
        let gradient = cairo::LinearGradient::new(start.0, start.1, end.0, end.1);
        for (offset, color) in stops {
            gradient.add_color_stop_rgba(*offset, color.r, color.g, color.b, color.a);
        }
        self.set_source(&gradient)
    }

    fn new_path(&self) {
        cairo::Context::new_path(self);
    }

    fn move_to(&self, x: f64, y: f64) {
        cairo::Context::move_to(self, x, y);
    }

    fn line_to(&self, x: f64, y: f64) {
        cairo::Context::line_to(self, x, y);
    }

    fn close_path(&self) {
        cairo::Context::close_path(self);
    }

    fn arc(&self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        cairo::Context::arc(self, xc, yc, radius, angle1, angle2);
    }

    fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) {
        cairo::Context::rectangle(self, x, y, width, height);
    }

    fn fill(&self) -> Result<(), cairo::Error> {
        cairo::Context::fill(self)
    }

    fn stroke(&self) -> Result<(), cairo::Error> {
        cairo::Context::stroke(self)
    }

    fn measure_text(&self, text: &str, family: &str, size: f64) -> TextExtents {
        pango_text_extents(self, text, family, size)
    }

    fn show_text_at(&self, x: f64, y: f64, text: &str, family: &str, size: f64) {
        cairo::Context::move_to(self, x, y);
        pango_show_text(self, text, family, size);
    }
}
