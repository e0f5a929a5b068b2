use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct FontMetrics {
    pub default_advance_width: f64,
    pub units_per_em: f64,
    pub ascent: f64,
}

impl FontMetrics {
    /// Baseline offset glyph paths are flipped against.
    pub fn y_offset(&self, offset_relative: bool) -> f64 {
        if offset_relative {
            self.ascent
        } else {
            self.units_per_em
        }
    }

    /// CSS `top` (in em) that compensates for flipping against the ascent.
    pub fn relative_top(&self) -> f64 {
        let top = (self.units_per_em - self.ascent) / self.units_per_em;
        (top * 1e5).round() / 1e5
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GlyphRecord {
    /// Fallback name, see [`character_key`].
    pub character: String,
    /// Stylesheet lookup key, see [`lookup_key`].
    pub lookup_key: String,
    pub raw_path: String,
    pub advance_width_override: Option<f64>,
    pub embedded_name: Option<String>,
}

impl GlyphRecord {
    pub fn advance_width(&self, metrics: &FontMetrics) -> f64 {
        self.advance_width_override
            .unwrap_or(metrics.default_advance_width)
    }
}

/// Lowercase hex digits without leading zeros, or `None` if `digits` is not hex.
pub fn hex_key(digits: &str) -> Option<String> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        Some("0".into())
    } else {
        Some(trimmed.to_ascii_lowercase())
    }
}

/// Normalizes the `unicode` attribute of a glyph into the name used when
/// nothing better is known.
///
/// Hex character references lose their `&#x` prefix and are lowercased
/// (`&#x002A;` is `002a`), decimal references (`&#65;`) become hex; anything
/// else is kept as written, minus the trailing semicolons.
pub fn character_key(unicode: &str) -> String {
    let raw = unicode.trim_end_matches(';');
    let lower = raw.to_ascii_lowercase();
    if let Some(digits) = lower.strip_prefix("&#x") {
        return digits.to_string();
    }
    if let Some(digits) = raw.strip_prefix("&#") {
        if let Ok(code_point) = digits.parse::<u32>() {
            return format!("{code_point:x}");
        }
    }
    raw.to_string()
}

/// Key a glyph is looked up by in a [`crate::css::NameTable`].
///
/// Single code points, however they are written, become lowercase hex
/// without leading zeros, so `&#x0041;`, `&#65;` and `A` all give `41`.
pub fn lookup_key(unicode: &str) -> String {
    let character = character_key(unicode);
    let raw = unicode.trim_end_matches(';');
    if raw.starts_with("&#") {
        return hex_key(&character).unwrap_or(character);
    }
    literal_hex_key(&character).unwrap_or(character)
}

/// Hex key of `character` when it is a single literal character.
pub fn literal_hex_key(character: &str) -> Option<String> {
    let mut chars = character.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(format!("{:x}", u32::from(c))),
        _ => None,
    }
}
