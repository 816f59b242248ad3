//! Application state and the style-change entry points driven by the keyboard.

use anyhow::Result;
use chrono::{DateTime, Utc};
use dialclock_render::DialEngine;
use dialclock_types::{SCALE_1, SCALE_4};
use gtk4::gdk;
use std::path::PathBuf;

use crate::clock::{faces_by_offset, ClockFace};
use crate::config::{save_store, ClockSettings, ConfigStore};
use crate::core::OrderedList;

/// Marker steps cycled by `s`
const MARKER_STEPS: [i32; 4] = [0, 20, 100, 300];
/// Gradient percentages cycled by `g`
const GRADIENTS: [i32; 4] = [0, 20, 40, 60];

/// A style change requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ZoomIn,
    ZoomOut,
    /// Add (or remove, when negative) grid columns and rows
    Grid { columns: i32, rows: i32 },
    NextMarker,
    NextMarkerStep,
    Rotate,
    NextGradient,
    Save,
    Quit,
}

impl Action {
    /// Map a key press to an action.
    pub fn from_key(key: gdk::Key, modifiers: gdk::ModifierType) -> Option<Self> {
        if modifiers.contains(gdk::ModifierType::CONTROL_MASK) {
            return match key {
                gdk::Key::s | gdk::Key::S => Some(Action::Save),
                _ => None,
            };
        }
        match key {
            gdk::Key::plus | gdk::Key::equal | gdk::Key::KP_Add => Some(Action::ZoomIn),
            gdk::Key::minus | gdk::Key::KP_Subtract => Some(Action::ZoomOut),
            gdk::Key::Right => Some(Action::Grid { columns: 1, rows: 0 }),
            gdk::Key::Left => Some(Action::Grid { columns: -1, rows: 0 }),
            gdk::Key::Down => Some(Action::Grid { columns: 0, rows: 1 }),
            gdk::Key::Up => Some(Action::Grid { columns: 0, rows: -1 }),
            gdk::Key::m => Some(Action::NextMarker),
            gdk::Key::s => Some(Action::NextMarkerStep),
            gdk::Key::r => Some(Action::Rotate),
            gdk::Key::g => Some(Action::NextGradient),
            gdk::Key::q | gdk::Key::Escape => Some(Action::Quit),
            _ => None,
        }
    }
}

/// What the window has to do after an action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Size or grid changed: resize and rebuild the mask
    pub geometry_changed: bool,
    pub redraw: bool,
    pub quit: bool,
}

/// The next entry of `cycle` after `current`, wrapping to the start.
fn next_in_cycle(cycle: &[i32], current: i32) -> i32 {
    cycle
        .iter()
        .copied()
        .find(|&value| value > current)
        .or_else(|| cycle.first().copied())
        .unwrap_or(current)
}

pub struct AppState {
    pub engine: DialEngine,
    pub settings: ClockSettings,
    pub faces: OrderedList<ClockFace>,
    store: ConfigStore,
    config_path: Option<PathBuf>,
}

impl AppState {
    /// Resolve the configured faces and build the engine.
    pub fn new(
        settings: ClockSettings,
        store: ConfigStore,
        config_path: Option<PathBuf>,
        now: DateTime<Utc>,
    ) -> Self {
        let faces = faces_by_offset(
            settings
                .faces
                .iter()
                .filter_map(|f| ClockFace::parse(&f.timezone, f.label.as_deref())),
            now,
        );
        log::info!("{} clock faces", faces.len());
        Self {
            engine: DialEngine::new(settings.dial.clone()),
            settings,
            faces,
            store,
            config_path,
        }
    }

    /// Apply one style change. `screen_max` caps the dial size.
    pub fn apply(&mut self, action: Action, screen_max: Option<i32>) -> Result<Outcome> {
        let mut outcome = Outcome {
            redraw: true,
            ..Default::default()
        };
        let config = self.engine.config().clone();
        match action {
            Action::ZoomIn => outcome.geometry_changed = self.engine.zoom(1, screen_max),
            Action::ZoomOut => outcome.geometry_changed = self.engine.zoom(-1, screen_max),
            Action::Grid { columns, rows } => {
                outcome.geometry_changed = self
                    .engine
                    .set_grid(config.dial_width + columns, config.dial_height + rows);
            }
            Action::NextMarker => {
                self.engine
                    .set_marker(config.marker_type.next(), config.marker_step);
            }
            Action::NextMarkerStep => {
                let step = next_in_cycle(&MARKER_STEPS, config.marker_step);
                self.engine.set_marker(config.marker_type, step);
            }
            Action::Rotate => {
                self.engine
                    .set_start_point((config.start_point + SCALE_1).rem_euclid(SCALE_4));
            }
            Action::NextGradient => {
                self.engine
                    .set_gradient(next_in_cycle(&GRADIENTS, config.dial_gradient));
            }
            Action::Save => {
                self.save()?;
                outcome.redraw = false;
            }
            Action::Quit => {
                outcome.redraw = false;
                outcome.quit = true;
            }
        }
        if outcome.geometry_changed {
            let (width, height) = self.engine.config().surface_size();
            log::info!("Geometry now {}x{}", width, height);
        }
        log::debug!("{:?} -> {:?}", action, outcome);
        Ok(outcome)
    }

    /// Copy the live engine settings back and write the settings file.
    pub fn save(&mut self) -> Result<()> {
        self.settings.dial = self.engine.config().clone();
        self.settings.to_store(&mut self.store);
        match &self.config_path {
            Some(path) => save_store(&self.store, path),
            None => {
                log::warn!("No settings path, not saving");
                Ok(())
            }
        }
    }
}
