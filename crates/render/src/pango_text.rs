//! Pango-based text measuring and drawing for dial labels
//!
//! Cairo's toy font API (select_font_face, show_text, text_extents) creates
//! internal font caches that grow unboundedly. Pango manages font resources
//! properly and integrates with fontconfig, so all dial text goes through here.

use cairo::Context;
use pango::FontDescription;
use pangocairo::functions::{create_layout, show_layout};
use std::cell::RefCell;
use std::collections::HashMap;

/// Ink extents of a piece of text, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
}

/// Cache for FontDescription objects to avoid repeated allocations
struct FontDescriptionCache {
    cache: HashMap<FontKey, FontDescription>,
    max_entries: usize,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
struct FontKey {
    family: String,
    size_pango: i32, // Size in Pango units (points * PANGO_SCALE)
}

impl FontDescriptionCache {
    fn new() -> Self {
        Self {
            cache: HashMap::new(),
            max_entries: 32,
        }
    }

    fn get_or_create(&mut self, family: &str, size: f64) -> FontDescription {
        let key = FontKey {
            family: family.to_string(),
            size_pango: (size * pango::SCALE as f64) as i32,
        };

        if let Some(desc) = self.cache.get(&key) {
            return desc.clone();
        }

        // Evict if full (simple eviction - just clear half)
        if self.cache.len() >= self.max_entries {
            let keys_to_remove: Vec<_> = self
                .cache
                .keys()
                .take(self.max_entries / 2)
                .cloned()
                .collect();
            for k in keys_to_remove {
                self.cache.remove(&k);
            }
        }

        let mut desc = FontDescription::new();
        desc.set_family(family);
        desc.set_size(key.size_pango);

        self.cache.insert(key, desc.clone());
        desc
    }
}

// GTK objects aren't thread-safe, so the cache is per thread
thread_local! {
    static FONT_DESC_CACHE: RefCell<FontDescriptionCache> = RefCell::new(FontDescriptionCache::new());
}

/// Drop cached font descriptions, e.g. after the dial font changed
pub fn clear_pango_caches() {
    FONT_DESC_CACHE.with(|cache| cache.borrow_mut().cache.clear());
    log::debug!("Pango font cache cleared");
}

/// Measure text ink extents with Pango
pub fn pango_text_extents(cr: &Context, text: &str, family: &str, size: f64) -> TextExtents {
    FONT_DESC_CACHE.with(|cache| {
        let font_desc = cache.borrow_mut().get_or_create(family, size);

        let layout = create_layout(cr);
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        // High-precision extents are in Pango units
        let (ink_rect, _logical_rect) = layout.extents();
        let scale = pango::SCALE as f64;

        TextExtents {
            width: ink_rect.width() as f64 / scale,
            height: ink_rect.height() as f64 / scale,
        }
    })
}

/// Show text with its baseline at the current point.
///
/// Pango draws from the layout's top-left corner, so the point is moved up
/// by the baseline first and restored afterwards.
pub fn pango_show_text(cr: &Context, text: &str, family: &str, size: f64) {
    FONT_DESC_CACHE.with(|cache| {
        let font_desc = cache.borrow_mut().get_or_create(family, size);

        let layout = create_layout(cr);
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        let (x, y) = cr.current_point().unwrap_or((0.0, 0.0));

        cr.rel_move_to(0.0, -baseline);
        show_layout(cr, &layout);
        cr.move_to(x, y);
    });
}
