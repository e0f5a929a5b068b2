use std::path::Path;

use log::debug;

use crate::error::SpriteError;
use crate::font::{character_key, lookup_key, FontMetrics, GlyphRecord};
use crate::markup::{attribute, elements, first_element, Element};

pub fn read_input(path: &Path) -> Result<String, SpriteError> {
    std::fs::read_to_string(path).map_err(|source| SpriteError::InputAccess {
        path: path.to_path_buf(),
        source,
    })
}

pub fn extract_metrics(font: &str) -> Result<FontMetrics, SpriteError> {
    let font_tag = first_element(font, Element::Font);
    let face_tag = first_element(font, Element::FontFace);

    let metrics = FontMetrics {
        default_advance_width: metric(font_tag, Element::Font, "horiz-adv-x")?,
        units_per_em: metric(face_tag, Element::FontFace, "units-per-em")?,
        ascent: metric(face_tag, Element::FontFace, "ascent")?,
    };
    if metrics.units_per_em == 0.0 {
        return Err(SpriteError::MalformedFont {
            element: Element::FontFace.name(),
            attribute: "units-per-em",
        });
    }
    Ok(metrics)
}

fn metric(tag: Option<&str>, element: Element, name: &'static str) -> Result<f64, SpriteError> {
    tag.and_then(|tag| attribute(tag, name))
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or(SpriteError::MalformedFont {
            element: element.name(),
            attribute: name,
        })
}

/// Every usable `<glyph>` of the font, in document order.
///
/// Glyphs without a `unicode` or with empty path data are skipped.
pub fn glyphs(font: &str) -> impl Iterator<Item = GlyphRecord> + '_ {
    elements(font, Element::Glyph).filter_map(glyph_record)
}

fn glyph_record(tag: &str) -> Option<GlyphRecord> {
    let Some(unicode) = attribute(tag, "unicode").filter(|u| !u.is_empty()) else {
        debug!("skipping glyph without unicode: {tag}");
        return None;
    };
    let Some(raw_path) = attribute(tag, "d").filter(|d| !d.trim().is_empty()) else {
        debug!("skipping glyph '{unicode}' without path data");
        return None;
    };

    let advance_width_override = attribute(tag, "horiz-adv-x").and_then(|value| {
        let width = value.trim().parse::<f64>().ok();
        if width.is_none() {
            debug!("ignoring horiz-adv-x '{value}' of glyph '{unicode}'");
        }
        width
    });

    Some(GlyphRecord {
        character: character_key(unicode),
        lookup_key: lookup_key(unicode),
        raw_path: raw_path.to_string(),
        advance_width_override,
        embedded_name: attribute(tag, "glyph-name").map(str::to_string),
    })
}
