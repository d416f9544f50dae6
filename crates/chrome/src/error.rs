use std::path::PathBuf;

use edlkit_model::{ObjectError, ParseError};
use thiserror::Error;

/// Errors from screen furniture construction and rewriting.
#[derive(Error, Debug)]
pub enum ChromeError {
    #[error("expected a Screen, got a {0}")]
    NotAScreen(String),

    #[error("bad pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Object(#[from] ObjectError),
}
