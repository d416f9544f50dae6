use thiserror::Error;

/// Errors from property access and tree manipulation.
#[derive(Error, Debug)]
pub enum ObjectError {
    #[error("missing property '{0}'")]
    MissingProperty(String),

    #[error("property '{key}' is not {expected}")]
    WrongShape { key: String, expected: &'static str },

    #[error("cannot add children to a '{0}'")]
    NotAContainer(String),

    #[error("cannot add a Screen to a '{0}'")]
    ScreenChild(String),

    #[error("no child at index {index}, object has {len} children")]
    NoSuchChild { index: usize, len: usize },

    #[error("unknown colour '{0}'")]
    UnknownColour(String),
}

/// Structural violations of the `.edl` text grammar. These are fatal to the
/// parse call; the caller owns any retry or fallback policy.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: expected '# (Type)' header, got '{text}'")]
    MissingTypeHeader { line: usize, text: String },

    #[error("line {line}: block '{key}' changes shape mid-block")]
    MixedBlockShape { line: usize, key: String },

    #[error("line {line}: geometry property '{key}' is not an integer: '{value}'")]
    BadGeometry {
        line: usize,
        key: String,
        value: String,
    },

    #[error("line {line}: bad key '{token}' in block '{key}'")]
    BadMapKey {
        line: usize,
        key: String,
        token: String,
    },

    #[error("unexpected end of input while parsing a '{0}' block")]
    UnexpectedEof(String),

    #[error(transparent)]
    Object(#[from] ObjectError),
}

/// Errors loading the defaults/colour cache.
#[derive(Error, Debug)]
pub enum DefaultsError {
    #[error("could not read defaults cache: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed defaults cache: {0}")]
    Json(#[from] serde_json::Error),
}
