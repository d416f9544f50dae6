//! The tagged property value type and `.edl` string quoting helpers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single property value.
///
/// `.edl` properties are untyped on disk; the shape of a given key is fixed
/// by convention per widget type (`xPoints` is always an integer-keyed map,
/// `fill` is always a flag, and so on). The sum type keeps that convention
/// out of the storage layer: typed accessors on the property map validate
/// shape at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// A bare keyword. `true` serializes as the keyword alone, `false`
    /// suppresses the property entirely.
    Bool(bool),
    /// An integer value. Geometry keys (`x`, `y`, `w`, `h`) always parse to
    /// this shape.
    Int(i64),
    /// A plain string value, stored without wrapping quotes.
    Str(String),
    /// A multi-line block of single tokens.
    List(Vec<String>),
    /// A multi-line block of `key value` pairs keyed by integer.
    Map(BTreeMap<i64, String>),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<i64, String>> {
        match self {
            PropValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut BTreeMap<i64, String>> {
        match self {
            PropValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn shape_name(&self) -> &'static str {
        match self {
            PropValue::Bool(_) => "a flag",
            PropValue::Int(_) => "an integer",
            PropValue::Str(_) => "a string",
            PropValue::List(_) => "a list",
            PropValue::Map(_) => "a map",
        }
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<i64> for PropValue {
    fn from(v: i64) -> Self {
        PropValue::Int(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::Str(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Str(v)
    }
}

impl From<Vec<String>> for PropValue {
    fn from(v: Vec<String>) -> Self {
        PropValue::List(v)
    }
}

impl From<BTreeMap<i64, String>> for PropValue {
    fn from(v: BTreeMap<i64, String>) -> Self {
        PropValue::Map(v)
    }
}

/// Characters escaped inside quoted `.edl` strings.
const ESCAPES: [char; 4] = ['\\', '{', '}', '"'];

/// Escape and wrap a string in quotes for use as an `.edl` value.
///
/// Strings with embedded newlines cannot be represented as a single quoted
/// value; split them with [`quote_list_string`] instead.
pub fn quote_string(s: &str) -> String {
    debug_assert!(!s.contains('\n'), "newlines need quote_list_string");
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if ESCAPES.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Reverse [`quote_string`]: strip wrapping quotes and unescape.
pub fn unquote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && ESCAPES.contains(&next)
        {
            out.push(next);
            chars.next();
        } else {
            out.push(c);
        }
    }
    out.trim_matches('"').to_string()
}

/// Split a string on newlines and quote each line, producing the list shape
/// EDM uses for multi-line text values.
pub fn quote_list_string(s: &str) -> Vec<String> {
    s.split('\n').map(quote_string).collect()
}
