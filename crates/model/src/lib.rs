//! Object model for EDM screen description files.
//!
//! This crate defines the in-memory representation of an `.edl` screen: a
//! tree of [`EdmObject`] nodes, each carrying an ordered map of loosely
//! typed properties, together with a round-trip parser and serializer for
//! the brace-and-keyword `.edl` text grammar and a defaults/colour table
//! loaded from a JSON cache.

pub mod defaults;
pub mod error;
pub mod object;
pub mod parse;
pub mod properties;
pub mod serialize;
pub mod value;

pub use self::defaults::{ColourMap, DefaultsTable};
pub use self::error::{DefaultsError, ObjectError, ParseError};
pub use self::object::EdmObject;
pub use self::parse::{parse_object, parse_screen};
pub use self::properties::PropertyMap;
pub use self::value::{PropValue, quote_list_string, quote_string, unquote_string};
