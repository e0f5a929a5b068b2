//! Convert an SVG font into an SVG sprite.
//!
//! Each `<glyph>` of the font becomes a `<symbol>` whose id is the icon's
//! stylesheet class name, its `glyph-name`, or its code point, in that order
//! of preference. Glyph paths are rewritten from the font's y-up coordinate
//! space into the y-down space of the symbol's view box.

pub mod css;
pub mod error;
pub mod font;
pub mod fontload;
pub mod markup;
pub mod path;
pub mod sprite;

pub use css::NameTable;
pub use error::SpriteError;
pub use font::{FontMetrics, GlyphRecord};
pub use fontload::{extract_metrics, glyphs, read_input};
pub use path::flip_path;
pub use sprite::{convert, ResolvedGlyph, SpriteOptions, SpriteOutput, EXAMPLE_SPRITE_FILE};
