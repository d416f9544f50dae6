use edlkit_model::ObjectError;
use thiserror::Error;

/// Errors from layout construction and resolution.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("no space left for a {w}x{h} object, check has_space before adding")]
    TilerFull { w: i64, h: i64 },

    #[error("cannot lay out an empty object list")]
    NoObjects,

    #[error(transparent)]
    Object(#[from] ObjectError),
}
