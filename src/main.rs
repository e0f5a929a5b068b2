//! Convert an SVG font to an SVG sprite.
//!
//! ```text
//! svg-sprite --css bootstrap.css fonts/glyphicons-halflings-regular.svg > glyphicons-sprite.svg
//! ```
//!
//! The sprite goes to stdout, a usage snippet for every symbol goes to stderr:
//!
//! ```text
//! <style>.ico{position:relative;top:0;width:1em;height:1em;fill:currentColor;}</style>
//! <svg class='ico'><use href='glyphicons-sprite.svg#bookmark'/></svg>
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use svg_sprite::{convert, read_input, SpriteError, SpriteOptions, SpriteOutput};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the SVG font file.
    #[arg(value_name = "SVG_FONT")]
    svg_font: PathBuf,

    /// Path to a stylesheet mapping icon class names to characters.
    #[arg(long)]
    css: Option<PathBuf>,

    /// Use if the view box cuts glyphs off; prints the CSS top offset to apply.
    #[arg(long)]
    offset_relative: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let output = match run(&args.svg_font, args.css.as_deref(), args.offset_relative) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = write_output(&output) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn write_output(output: &SpriteOutput) -> std::io::Result<()> {
    std::io::stderr().write_all(output.diagnostics.as_bytes())?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.document.as_bytes())?;
    stdout.flush()
}

fn run(svg_font: &Path, css: Option<&Path>, offset_relative: bool) -> Result<SpriteOutput, SpriteError> {
    let font = read_input(svg_font)?;
    let css = css.map(read_input).transpose()?;
    convert(&font, css.as_deref(), SpriteOptions { offset_relative })
}
