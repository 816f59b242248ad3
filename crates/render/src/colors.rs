//! Indexed color table resolved from name/hex definitions.

use dialclock_types::{Color, ColorEntry};

/// Parse a color definition. `none` is fully transparent; anything GDK
/// cannot parse falls back to opaque black.
pub fn parse_color(definition: &str) -> Color {
    let definition = definition.trim();
    if definition.eq_ignore_ascii_case("none") {
        return Color::NONE;
    }
    match gdk4::RGBA::parse(definition) {
        Ok(rgba) => Color::from_gdk_rgba(&rgba),
        Err(e) => {
            log::warn!("Unparseable color '{}': {}", definition, e);
            Color::default()
        }
    }
}

/// Color table indexed by small integers. Index -1 is the callers'
/// "skip this layer" sentinel and never reaches the registry.
#[derive(Debug, Clone, Default)]
pub struct ColorRegistry {
    entries: Vec<ColorEntry>,
}

impl ColorRegistry {
    /// Resolve every entry's definition once.
    pub fn from_entries(entries: &[ColorEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|entry| {
                let mut entry = entry.clone();
                entry.color = parse_color(&entry.definition);
                entry
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Color at `index`, or entry 0 when the index is out of range.
    pub fn resolve(&self, index: i32) -> Color {
        let fallback = || self.entries.first().map(|e| e.color).unwrap_or_default();
        if index < 0 {
            return fallback();
        }
        self.entries
            .get(index as usize)
            .map(|e| e.color)
            .unwrap_or_else(fallback)
    }

    /// Index of the entry with this short name
    pub fn find(&self, short_name: &str) -> Option<i32> {
        self.entries
            .iter()
            .position(|e| e.short_name == short_name)
            .map(|i| i as i32)
    }

    /// Replace one definition and re-resolve it. Returns false for an
    /// unknown index.
    pub fn set(&mut self, index: i32, definition: &str) -> bool {
        if index < 0 {
            return false;
        }
        match self.entries.get_mut(index as usize) {
            Some(entry) => {
                entry.definition = definition.to_string();
                entry.color = parse_color(definition);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ColorRegistry {
        ColorRegistry::from_entries(&[
            ColorEntry::new("text", "Text", "#000000"),
            ColorEntry::new("face", "Face", "#ffffff"),
            ColorEntry::new("second", "Second hand", "#ff0000"),
            ColorEntry::new("off", "Unused", "none"),
        ])
    }

    #[test]
    fn test_resolve_in_range() {
        let colors = registry();
        assert_eq!(colors.resolve(2), Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(colors.resolve(3), Color::NONE);
    }

    #[test]
    fn test_out_of_range_falls_back_to_first() {
        let colors = registry();
        let first = colors.resolve(0);
        assert_eq!(colors.resolve(-1), first);
        assert_eq!(colors.resolve(colors.len() as i32), first);
        assert_eq!(colors.resolve(1000), first);
    }

    #[test]
    fn test_empty_table_resolves_black() {
        let colors = ColorRegistry::default();
        assert_eq!(colors.resolve(0), Color::default());
    }

    #[test]
    fn test_set_and_find() {
        let mut colors = registry();
        let face = colors.find("face").unwrap();
        assert!(colors.set(face, "#0000ff"));
        assert_eq!(colors.resolve(face), Color::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(colors.entries()[face as usize].definition, "#0000ff");
        assert!(!colors.set(42, "red"));
        assert_eq!(colors.find("missing"), None);
    }

    #[test]
    fn test_named_and_bad_definitions() {
        assert_eq!(parse_color("white"), Color::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(parse_color(" NONE "), Color::NONE);
        assert_eq!(parse_color("not-a-color"), Color::default());
    }
}
