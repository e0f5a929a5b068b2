use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("Cannot read input file {}: {source}", .path.display())]
    InputAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed font: missing or invalid '{attribute}' on <{element}>")]
    MalformedFont {
        element: &'static str,
        attribute: &'static str,
    },
}
