//! The dial engine: configuration, trig tables and colors for one gauge grid.

use dialclock_types::{DialConfig, MarkerType, DIAL_SIZE_STEP};

use crate::canvas::DialCanvas;
use crate::colors::ColorRegistry;
use crate::mask::build_mask;
use crate::pango_text::clear_pango_caches;
use crate::session::DrawSession;
use crate::trig::{normalize_angle, TrigTable};

/// Owns everything a redraw reads. Settings changes go through the setters
/// so the tables and colors never go stale.
#[derive(Debug, Clone)]
pub struct DialEngine {
    config: DialConfig,
    trig: TrigTable,
    colors: ColorRegistry,
}

impl DialEngine {
    /// Fill the trig tables and resolve the color table.
    pub fn new(mut config: DialConfig) -> Self {
        config.start_point = normalize_angle(config.start_point);
        let trig = TrigTable::new(config.start_point);
        let colors = ColorRegistry::from_entries(&config.colors);
        log::debug!(
            "dial engine: size {} grid {}x{} colors {}",
            config.dial_size,
            config.dial_width,
            config.dial_height,
            colors.len()
        );
        Self {
            config,
            trig,
            colors,
        }
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn trig(&self) -> &TrigTable {
        &self.trig
    }

    pub fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    /// Begin drawing the gauge whose top-left corner is `(x, y)`.
    ///
    /// The session borrows the engine mutably, so sessions cannot nest.
    pub fn start<'a, C: DialCanvas>(
        &'a mut self,
        canvas: &'a C,
        x: f64,
        y: f64,
    ) -> Result<DrawSession<'a, C>, cairo::Error> {
        DrawSession::begin(self, canvas, x, y)
    }

    /// Window shape region for the current grid
    pub fn build_mask(&self) -> Option<cairo::Region> {
        build_mask(&self.config)
    }

    /// Returns true when the geometry changed and the mask must be rebuilt.
    pub fn set_dial_size(&mut self, size: i32, screen_max: Option<i32>) -> bool {
        self.config.set_dial_size(size, screen_max)
    }

    /// Grow or shrink the dial by `steps` size steps.
    pub fn zoom(&mut self, steps: i32, screen_max: Option<i32>) -> bool {
        let size = self.config.dial_size + steps * DIAL_SIZE_STEP;
        self.set_dial_size(size, screen_max)
    }

    /// Returns true when the geometry changed and the mask must be rebuilt.
    pub fn set_grid(&mut self, width: i32, height: i32) -> bool {
        self.config.set_grid(width, height)
    }

    pub fn set_font(&mut self, font_name: &str) {
        if self.config.font_name != font_name {
            self.config.font_name = font_name.to_string();
            clear_pango_caches();
        }
    }

    /// Change one color definition. Returns false for an unknown index.
    pub fn set_color(&mut self, index: i32, definition: &str) -> bool {
        if !self.colors.set(index, definition) {
            return false;
        }
        self.config.colors = self.colors.entries().to_vec();
        true
    }

    pub fn set_gradient(&mut self, percent: i32) {
        self.config.set_gradient(percent);
    }

    pub fn set_marker(&mut self, marker_type: MarkerType, step: i32) {
        self.config.marker_type = marker_type;
        self.config.marker_step = step.max(0);
    }

    /// Rotate the dial; refills the trig tables. Stored within one turn.
    pub fn set_start_point(&mut self, start_point: i32) {
        let start_point = normalize_angle(start_point);
        if self.config.start_point != start_point || self.trig.start_point() != start_point {
            self.config.start_point = start_point;
            self.trig.fill(start_point);
        }
    }
}
