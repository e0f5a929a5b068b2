//! Icon names from `.name::before { content: "\e001"; }` stylesheet rules.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::font::{hex_key, literal_hex_key};

/// Character key to class name.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NameTable {
    names: HashMap<String, String>,
}

impl NameTable {
    pub fn parse(css: &str) -> Self {
        static COMMENT_RE: OnceLock<Regex> = OnceLock::new();
        static RULE_RE: OnceLock<Regex> = OnceLock::new();
        static SELECTOR_RE: OnceLock<Regex> = OnceLock::new();
        static CONTENT_RE: OnceLock<Regex> = OnceLock::new();
        let comment_re = COMMENT_RE.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));
        let rule_re = RULE_RE.get_or_init(|| Regex::new(r"([^{}]+)\{([^{}]*)\}").expect("valid regex"));
        let selector_re = SELECTOR_RE.get_or_init(|| {
            Regex::new(r"(?i)\.([-\w]+):{1,2}before\s*$").expect("valid regex")
        });
        let content_re = CONTENT_RE.get_or_init(|| {
            Regex::new(r#"(?i)(?:^|[;\s])content\s*:\s*(?:"([^"]+)"|'([^']+)')"#).expect("valid regex")
        });

        let css = comment_re.replace_all(css, " ");
        let mut table = NameTable::default();
        for rule in rule_re.captures_iter(&css) {
            let Some(literal) = content_re
                .captures(&rule[2])
                .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            else {
                continue;
            };
            let key = literal_key(literal.as_str());
            // Only the last compound of a selector names the icon.
            for selector in rule[1].split(',') {
                match selector_re.captures(selector) {
                    Some(caps) => table.insert(key.clone(), caps[1].to_string()),
                    None => debug!("ignoring selector '{}'", selector.trim()),
                }
            }
        }
        table
    }

    pub fn insert(&mut self, character: String, name: String) {
        self.names.insert(character, name);
    }

    /// Class name for a glyph's lookup key, see [`crate::font::lookup_key`].
    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// `\F101` becomes `f101`, a literal single character becomes its code
/// point in hex; anything else is kept as written.
fn literal_key(literal: &str) -> String {
    if !literal.starts_with('\\') {
        return literal_hex_key(literal).unwrap_or_else(|| literal.to_string());
    }
    let unescaped = literal.to_lowercase().replace('\\', "");
    let unescaped = unescaped.trim();
    hex_key(unescaped).unwrap_or_else(|| unescaped.to_string())
}
