//! Clock settings mapped to and from the key/value store

use anyhow::{Context, Result};
use dialclock_types::{
    clamp_dial_size, grid_fits, DialConfig, HandShape, HandStyle, MarkerType, MAX_DIALS,
    MAX_HAND_LENGTH, SCALE_4,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::store::ConfigStore;
use crate::clock::{default_colors, FaceShape, FaceStyle};

/// Zones shown when the settings name none
const DEFAULT_ZONES: [&str; 4] = ["America/New_York", "UTC", "Europe/Berlin", "Asia/Tokyo"];

/// One configured face before its timezone is resolved
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FaceSetting {
    pub timezone: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClockSettings {
    pub dial: DialConfig,
    pub style: FaceStyle,
    /// Cut the window down to the round gauges
    pub shaped_window: bool,
    pub faces: Vec<FaceSetting>,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            dial: DialConfig {
                dial_size: 256,
                dial_width: 2,
                dial_height: 2,
                colors: default_colors(),
                font_name: "Sans".to_string(),
                dial_gradient: 30,
                marker_type: MarkerType::Numeral,
                marker_step: 100,
                start_point: 0,
            },
            style: FaceStyle::default(),
            shaped_window: true,
            faces: DEFAULT_ZONES
                .iter()
                .map(|zone| FaceSetting {
                    timezone: zone.to_string(),
                    label: None,
                })
                .collect(),
        }
    }
}

/// Read a parseable value, keeping `default` when it is missing or bad.
fn read<T: FromStr>(store: &ConfigStore, name: &str, default: T) -> T {
    match store.get(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid value '{}' for {}", raw, name);
            default
        }),
        None => default,
    }
}

fn read_bool(store: &ConfigStore, name: &str, default: bool) -> bool {
    match store.get(name).map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if v == "1" || v == "true" || v == "yes" => true,
        Some(v) if v == "0" || v == "false" || v == "no" => false,
        Some(v) => {
            log::warn!("Ignoring invalid value '{}' for {}", v, name);
            default
        }
        None => default,
    }
}

/// Hand as `style,length,tail,fill`, e.g. `3,25,4,1`. Length and tail are
/// clamped to `0..=MAX_HAND_LENGTH`; colors stay as given.
fn parse_hand(raw: &str, base: HandStyle) -> Option<HandStyle> {
    let fields: Vec<i32> = raw
        .split(',')
        .map(|f| f.trim().parse::<i32>())
        .collect::<Result<_, _>>()
        .ok()?;
    match fields.as_slice() {
        [style, length, tail, fill] => Some(HandStyle {
            shape: HandShape::from_code(*style),
            length: (*length).clamp(0, MAX_HAND_LENGTH),
            tail: (*tail).clamp(0, MAX_HAND_LENGTH),
            fill_in: *fill != 0,
            ..base
        }),
        _ => None,
    }
}

fn format_hand(hand: &HandStyle) -> String {
    format!(
        "{},{},{},{}",
        hand.shape.code(),
        hand.length,
        hand.tail,
        i32::from(hand.fill_in)
    )
}

fn read_hand(store: &ConfigStore, name: &str, default: HandStyle) -> HandStyle {
    match store.get(name) {
        Some(raw) => parse_hand(raw, default).unwrap_or_else(|| {
            log::warn!("Ignoring invalid hand '{}' for {}", raw, name);
            default
        }),
        None => default,
    }
}

impl ClockSettings {
    pub fn from_store(store: &ConfigStore) -> Self {
        let defaults = Self::default();
        let mut dial = defaults.dial.clone();

        dial.dial_size = clamp_dial_size(read(store, "dial_size", dial.dial_size), None);
        let width = read(store, "dial_width", dial.dial_width);
        let height = read(store, "dial_height", dial.dial_height);
        if grid_fits(width, height) {
            dial.dial_width = width;
            dial.dial_height = height;
        } else {
            log::warn!("Ignoring {}x{} grid, at most {} dials", width, height, MAX_DIALS);
        }
        if let Some(font) = store.get("font_name") {
            dial.font_name = font.to_string();
        }
        dial.set_gradient(read(store, "dial_gradient", dial.dial_gradient));
        if let Some(raw) = store.get("marker_type") {
            match MarkerType::from_name(raw) {
                Some(marker_type) => dial.marker_type = marker_type,
                None => log::warn!("Unknown marker type '{}'", raw),
            }
        }
        dial.marker_step = read(store, "marker_step", dial.marker_step).max(0);
        dial.start_point = read(store, "start_point", dial.start_point).rem_euclid(SCALE_4);
        for entry in &mut dial.colors {
            if let Some(definition) = store.get(&format!("color_{}", entry.short_name)) {
                entry.definition = definition.to_string();
            }
        }

        let mut style = defaults.style.clone();
        if let Some(raw) = store.get("face_shape") {
            match FaceShape::from_name(raw) {
                Some(shape) => style.shape = shape,
                None => log::warn!("Unknown face shape '{}'", raw),
            }
        }
        style.hour_hand = read_hand(store, "hour_hand", style.hour_hand);
        style.minute_hand = read_hand(store, "minute_hand", style.minute_hand);
        style.second_hand = read_hand(store, "second_hand", style.second_hand);
        style.show_seconds = read_bool(store, "show_seconds", style.show_seconds);

        let faces: Vec<FaceSetting> = (0..MAX_DIALS)
            .map_while(|n| {
                store.get(&format!("timezone_{}", n)).map(|zone| FaceSetting {
                    timezone: zone.to_string(),
                    label: store.get(&format!("label_{}", n)).map(str::to_string),
                })
            })
            .collect();

        Self {
            dial,
            style,
            shaped_window: read_bool(store, "shaped_window", defaults.shaped_window),
            faces: if faces.is_empty() {
                defaults.faces
            } else {
                faces
            },
        }
    }

    /// Write every setting back; existing lines keep their place.
    pub fn to_store(&self, store: &mut ConfigStore) {
        let dial = &self.dial;
        store.set("dial_size", &dial.dial_size.to_string());
        store.set("dial_width", &dial.dial_width.to_string());
        store.set("dial_height", &dial.dial_height.to_string());
        store.set("font_name", &dial.font_name);
        store.set("dial_gradient", &dial.dial_gradient.to_string());
        store.set("marker_type", dial.marker_type.name());
        store.set("marker_step", &dial.marker_step.to_string());
        store.set("start_point", &dial.start_point.to_string());
        for entry in &dial.colors {
            store.set(&format!("color_{}", entry.short_name), &entry.definition);
        }
        store.set("face_shape", self.style.shape.name());
        store.set("hour_hand", &format_hand(&self.style.hour_hand));
        store.set("minute_hand", &format_hand(&self.style.minute_hand));
        store.set("second_hand", &format_hand(&self.style.second_hand));
        store.set("show_seconds", if self.style.show_seconds { "1" } else { "0" });
        store.set("shaped_window", if self.shaped_window { "1" } else { "0" });

        for n in 0..MAX_DIALS {
            let zone_key = format!("timezone_{}", n);
            let label_key = format!("label_{}", n);
            match self.faces.get(n as usize) {
                Some(face) => {
                    store.set(&zone_key, &face.timezone);
                    match &face.label {
                        Some(label) => store.set(&label_key, label),
                        None => {
                            store.remove(&label_key);
                        }
                    }
                }
                None => {
                    store.remove(&zone_key);
                    store.remove(&label_key);
                }
            }
        }
    }
}

/// `<config dir>/dialclock/dialclock.conf`
pub fn default_config_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("org", "dialclock", "dialclock")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(dirs.config_dir().join("dialclock.conf"))
}

/// Load the store at `path`; a missing file gives an empty store.
pub fn load_store(path: &Path) -> Result<ConfigStore> {
    if !path.exists() {
        log::info!("No settings at {}, using defaults", path.display());
        return Ok(ConfigStore::new());
    }
    let store = ConfigStore::load(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    log::info!("Loaded settings from {}", path.display());
    Ok(store)
}

pub fn save_store(store: &ConfigStore, path: &Path) -> Result<()> {
    store
        .save(path)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;
    log::info!("Saved settings to {}", path.display());
    Ok(())
}
