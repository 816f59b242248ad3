//! Font family and size from a `"Family Size"` style font name.

/// Smallest point size the dial will pick by itself.
pub const MIN_FONT_SIZE: f64 = 6.0;
/// Marker numerals are drawn at this fraction of the body size.
pub const MARKER_FONT_SCALE: f64 = 0.8;

/// Byte offset where the trailing run of digits and dots begins, if any.
fn suffix_start(font_name: &str) -> Option<usize> {
    let trimmed = font_name.trim_end();
    trimmed
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .last()
        .map(|(i, _)| i)
}

/// Point size encoded at the end of the font name
pub fn font_size_suffix(font_name: &str) -> Option<f64> {
    let trimmed = font_name.trim_end();
    let start = suffix_start(trimmed)?;
    trimmed[start..]
        .parse::<f64>()
        .ok()
        .filter(|size| *size > 0.0)
}

/// Family part of the font name, `Sans` when nothing is left
pub fn font_family(font_name: &str) -> &str {
    let trimmed = font_name.trim_end();
    let family = match suffix_start(trimmed) {
        Some(start) => trimmed[..start].trim(),
        None => trimmed.trim(),
    };
    if family.is_empty() {
        "Sans"
    } else {
        family
    }
}

/// Size used when the font name carries none: 4pt per 64px of dial
pub fn default_font_size(dial_size: i32) -> f64 {
    ((dial_size / 64 * 4) as f64).max(MIN_FONT_SIZE)
}

/// Resolve the point size for dial text. `scaled` text (marker numerals)
/// is shrunk unless it is already at the minimum.
pub fn resolve_font_size(font_name: &str, dial_size: i32, scaled: bool) -> f64 {
    let size = font_size_suffix(font_name).unwrap_or_else(|| default_font_size(dial_size));
    if scaled && size > MIN_FONT_SIZE {
        size * MARKER_FONT_SCALE
    } else {
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_suffix() {
        assert_eq!(font_size_suffix("Sans 14"), Some(14.0));
        assert_eq!(font_size_suffix("DejaVu Serif 10.5 "), Some(10.5));
        assert_eq!(font_size_suffix("Sans"), None);
        assert_eq!(font_size_suffix("Sans ."), None);
        assert_eq!(font_size_suffix(""), None);
    }

    #[test]
    fn test_family() {
        assert_eq!(font_family("Sans 14"), "Sans");
        assert_eq!(font_family("DejaVu Serif 10.5"), "DejaVu Serif");
        assert_eq!(font_family("Monospace"), "Monospace");
        assert_eq!(font_family("12"), "Sans");
    }

    #[test]
    fn test_resolve_falls_back_to_dial_default() {
        assert_eq!(resolve_font_size("Sans 14", 640, false), 14.0);
        assert_eq!(resolve_font_size("Sans", 640, false), 40.0);
        assert_eq!(resolve_font_size("Sans", 64, false), MIN_FONT_SIZE);
    }

    #[test]
    fn test_scaled_markers() {
        assert!((resolve_font_size("Sans 10", 256, true) - 8.0).abs() < 1e-9);
        assert_eq!(resolve_font_size("Sans 6", 256, true), 6.0);
    }
}
