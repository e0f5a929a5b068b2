//! Assembles the sprite document from an SVG font and its optional stylesheet.

use std::collections::HashSet;
use std::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::css::NameTable;
use crate::error::SpriteError;
use crate::font::{FontMetrics, GlyphRecord};
use crate::fontload::{extract_metrics, glyphs};
use crate::path::{flip_path, format_number};

/// Sprite file name used in the usage snippets.
pub const EXAMPLE_SPRITE_FILE: &str = "sprite-bootstrap-3.3.7-glyphicons.svg";

const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<svg xmlns=\"http://www.w3.org/2000/svg\">\n\
<defs>\n";
const FOOTER: &str = "</defs>\n</svg>\n";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpriteOptions {
    /// Flip glyphs against the ascent instead of units-per-em, for fonts
    /// whose glyphs get cut off at the top.
    pub offset_relative: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0 0 {} {}",
            format_number(self.width),
            format_number(self.height)
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ResolvedGlyph {
    pub name: String,
    pub view_box: ViewBox,
    pub path: String,
}

impl ResolvedGlyph {
    /// Names come from the stylesheet first, then `glyph-name`, then the
    /// character key itself.
    pub fn resolve(
        glyph: &GlyphRecord,
        metrics: &FontMetrics,
        names: &NameTable,
        y_offset: f64,
    ) -> Self {
        let name = names
            .get(&glyph.lookup_key)
            .or(glyph.embedded_name.as_deref())
            .unwrap_or(glyph.character.as_str())
            .to_string();
        ResolvedGlyph {
            name,
            view_box: ViewBox {
                width: glyph.advance_width(metrics),
                height: metrics.units_per_em,
            },
            path: flip_path(&glyph.raw_path, y_offset),
        }
    }

    pub fn symbol(&self) -> String {
        format!(
            "<symbol id=\"{}\" viewBox=\"{}\" overflow=\"visible\">\n    <path d=\"{}\"></path>\n</symbol>\n",
            self.name, self.view_box, self.path
        )
    }

    pub fn usage(&self) -> String {
        format!(
            "            <div>\n                <svg class='icon'><use href='{EXAMPLE_SPRITE_FILE}#{name}'/></svg>\n                <code>{name}</code><br>\n            </div>\n",
            name = self.name
        )
    }
}

/// The sprite document and the text meant for the diagnostic stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpriteOutput {
    pub document: String,
    pub diagnostics: String,
}

pub fn convert(
    font: &str,
    css: Option<&str>,
    options: SpriteOptions,
) -> Result<SpriteOutput, SpriteError> {
    let names = css.map(NameTable::parse).unwrap_or_default();
    let metrics = extract_metrics(font)?;
    let y_offset = metrics.y_offset(options.offset_relative);

    let mut output = SpriteOutput::default();
    if options.offset_relative {
        output.diagnostics.push_str(&format!(
            "position:relative; top:{}em;\n",
            css_number(metrics.relative_top())
        ));
    }

    let mut seen = HashSet::new();
    let mut count = 0;
    for glyph in glyphs(font) {
        let resolved = ResolvedGlyph::resolve(&glyph, &metrics, &names, y_offset);
        if !seen.insert(resolved.name.clone()) {
            warn!("duplicate symbol id '{}'", resolved.name);
        }
        if count == 0 {
            output.document.push_str(HEADER);
        }
        output.document.push_str(&resolved.symbol());
        output.diagnostics.push_str(&resolved.usage());
        count += 1;
    }
    if count > 0 {
        output.document.push_str(FOOTER);
    }

    info!("converted {count} glyphs ({} stylesheet names)", names.len());
    Ok(output)
}

/// Whole numbers keep one decimal place (`0.0`), as a CSS length hint.
fn css_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FONT: &str = r#"<svg><defs><font horiz-adv-x="500">
<font-face units-per-em="1000" ascent="750"/>
<glyph unicode="&#x41;" d="M10 20L30 40"/>
</font></defs></svg>"#;

    #[test]
    fn single_glyph() {
        let output = convert(FONT, None, SpriteOptions::default()).unwrap();
        assert_eq!(
            output.document,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg">
<defs>
<symbol id="41" viewBox="0 0 500 1000" overflow="visible">
    <path d="M10 980L30 960"></path>
</symbol>
</defs>
</svg>
"#
        );
        assert_eq!(
            output.diagnostics,
            "            <div>\n                <svg class='icon'><use href='sprite-bootstrap-3.3.7-glyphicons.svg#41'/></svg>\n                <code>41</code><br>\n            </div>\n"
        );
    }

    #[test]
    fn offset_relative() {
        let options = SpriteOptions { offset_relative: true };
        let output = convert(FONT, None, options).unwrap();
        assert!(output.document.contains(r#"<path d="M10 730L30 710"></path>"#));
        assert!(output.document.contains(r#"viewBox="0 0 500 1000""#));
        assert!(output
            .diagnostics
            .starts_with("position:relative; top:0.25em;\n            <div>"));
        assert_eq!(output.diagnostics.matches("position:relative").count(), 1);
    }

    #[test]
    fn stylesheet_names_win() {
        let font = FONT.replace("<glyph ", r#"<glyph glyph-name="letter" "#);
        let output = convert(&font, None, SpriteOptions::default()).unwrap();
        assert!(output.document.contains(r#"<symbol id="letter""#));

        let css = r#".home::before { content: "\0041"; }"#;
        let output = convert(&font, Some(css), SpriteOptions::default()).unwrap();
        assert!(output.document.contains(r#"<symbol id="home""#));
        assert!(!output.document.contains("letter"));
        assert!(output.diagnostics.contains("#home'"));
    }

    #[test]
    fn offset_hint_for_full_ascent() {
        let font = FONT.replace(r#"ascent="750""#, r#"ascent="1000""#);
        let options = SpriteOptions { offset_relative: true };
        let output = convert(&font, None, options).unwrap();
        assert!(output.diagnostics.starts_with("position:relative; top:0.0em;\n"));
        assert!(output.document.contains(r#"<path d="M10 980L30 960"></path>"#));
    }

    #[test]
    fn padded_code_points_keep_their_digits() {
        let font = FONT.replace("&#x41;", "&#x002A;");
        let output = convert(&font, None, SpriteOptions::default()).unwrap();
        assert!(output.document.contains(r#"<symbol id="002a""#));
        assert!(output.diagnostics.contains("<code>002a</code>"));

        let css = r#".asterisk:before { content: "\2a"; }"#;
        let output = convert(&font, Some(css), SpriteOptions::default()).unwrap();
        assert!(output.document.contains(r#"<symbol id="asterisk""#));
    }

    #[test]
    fn commented_stylesheet() {
        let font = FONT.replace("&#x41;", "&#xf000;");
        let css = "/* Font Awesome uses the Unicode Private Use Area (PUA) to ensure screen\n   readers do not read off random characters that represent icons */\n\
                   .fa-glass:before {\n  content: \"\\f000\";\n}\n";
        let output = convert(&font, Some(css), SpriteOptions::default()).unwrap();
        assert!(output.document.contains(r#"<symbol id="fa-glass""#));
    }

    #[test]
    fn no_glyphs_means_no_document() {
        let font = r#"<font horiz-adv-x="500"><font-face units-per-em="1000" ascent="750"/></font>"#;
        let output = convert(font, None, SpriteOptions::default()).unwrap();
        assert_eq!(output, SpriteOutput::default());
    }

    #[test]
    fn advance_width_override() {
        let glyph = GlyphRecord {
            character: "e001".into(),
            lookup_key: "e001".into(),
            raw_path: "M0 0".into(),
            advance_width_override: Some(1300.5),
            embedded_name: None,
        };
        let metrics = FontMetrics {
            default_advance_width: 500.0,
            units_per_em: 1000.0,
            ascent: 750.0,
        };
        let resolved = ResolvedGlyph::resolve(&glyph, &metrics, &NameTable::default(), 1000.0);
        assert_eq!(resolved.view_box.to_string(), "0 0 1300.5 1000");
        assert_eq!(resolved.name, "e001");
        assert_eq!(resolved.path, "M0 1000");
    }

    #[test]
    fn malformed_font_produces_nothing() {
        let err = convert("<svg/>", None, SpriteOptions::default()).unwrap_err();
        assert!(matches!(err, SpriteError::MalformedFont { .. }));
    }
}
