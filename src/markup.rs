//! Element and attribute lookup over SVG font markup.
//!
//! Everything the converter reads out of the font document goes through
//! [`elements`] and [`attribute`], so the scanning here can be swapped for a
//! real XML reader without touching the path or sprite code.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    Font,
    FontFace,
    Glyph,
}

impl Element {
    pub fn name(self) -> &'static str {
        match self {
            Element::Font => "font",
            Element::FontFace => "font-face",
            Element::Glyph => "glyph",
        }
    }

    fn pattern(self) -> &'static Regex {
        static FONT_RE: OnceLock<Regex> = OnceLock::new();
        static FONT_FACE_RE: OnceLock<Regex> = OnceLock::new();
        static GLYPH_RE: OnceLock<Regex> = OnceLock::new();
        let cell = match self {
            Element::Font => &FONT_RE,
            Element::FontFace => &FONT_FACE_RE,
            Element::Glyph => &GLYPH_RE,
        };
        cell.get_or_init(|| {
            Regex::new(&format!(r"(?i)<{}(?:\s[^>]*)?>", regex::escape(self.name())))
                .expect("valid regex")
        })
    }
}

/// Start tags of every `element` in `doc`, in document order.
pub fn elements(doc: &str, element: Element) -> impl Iterator<Item = &str> {
    element.pattern().find_iter(doc).map(|m| m.as_str())
}

/// The first start tag of `element` in `doc`.
pub fn first_element(doc: &str, element: Element) -> Option<&str> {
    elements(doc, element).next()
}

/// Raw value of attribute `name` in a start tag, without its quotes.
pub fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    static ATTRIBUTE_RE: OnceLock<Regex> = OnceLock::new();
    let re = ATTRIBUTE_RE.get_or_init(|| {
        Regex::new(r#"\s([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("valid regex")
    });
    re.captures_iter(tag)
        .find(|caps| &caps[1] == name)
        .and_then(|caps| caps.get(2).or_else(|| caps.get(3)))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_does_not_match_font_face() {
        let doc = r#"<font-face units-per-em="1000"/><font id="x" horiz-adv-x="500">"#;
        let font = first_element(doc, Element::Font).unwrap();
        assert_eq!(attribute(font, "horiz-adv-x"), Some("500"));
        let face = first_element(doc, Element::FontFace).unwrap();
        assert_eq!(attribute(face, "units-per-em"), Some("1000"));
    }

    #[test]
    fn glyph_does_not_match_missing_glyph() {
        let doc = r#"<missing-glyph d="M0 0"/><glyph unicode="a" d="M1 1"/><glyphRef/>"#;
        let tags: Vec<_> = elements(doc, Element::Glyph).collect();
        assert_eq!(tags, vec![r#"<glyph unicode="a" d="M1 1"/>"#]);
    }

    #[test]
    fn attribute_names_match_exactly() {
        let tag = r#"<font-face descent="-250" ascent='750'>"#;
        assert_eq!(attribute(tag, "ascent"), Some("750"));
        assert_eq!(attribute(tag, "descent"), Some("-250"));
        let glyph = r#"<glyph glyph-name="home" d="M0 0">"#;
        assert_eq!(attribute(glyph, "name"), None);
        assert_eq!(attribute(glyph, "d"), Some("M0 0"));
    }

    #[test]
    fn multiline_tags() {
        let doc = "<glyph\n  unicode=\"&#x41;\"\n  d=\"M0 0\" />";
        let tag = first_element(doc, Element::Glyph).unwrap();
        assert_eq!(attribute(tag, "unicode"), Some("&#x41;"));
    }
}
