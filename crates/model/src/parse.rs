//! Parser for the `.edl` text grammar.
//!
//! The grammar is line oriented: a screen document is a version line, a
//! `beginScreenProperties` section, then a sequence of object blocks. An
//! object block runs from its `# (Type)` header to `endObjectProperties`;
//! a `# (Type)` header seen inside an open block starts a child. Parsing
//! keeps an explicit cursor into the line array, so recursing into a child
//! block simply advances the shared position and the parent resumes at the
//! next unconsumed line.

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::object::EdmObject;
use crate::value::PropValue;

/// Lines that are pure block syntax and never become properties.
const IGNORE: [&str; 6] = [
    "4 0 1",
    "beginScreenProperties",
    "endScreenProperties",
    "beginObjectProperties",
    "beginGroup",
    "endGroup",
];

/// Geometry keys coerced to integers on parse.
const GEOMETRY_KEYS: [&str; 4] = ["x", "y", "w", "h"];

/// Parse a whole `.edl` document into a `Screen` object.
pub fn parse_screen(text: &str) -> Result<EdmObject, ParseError> {
    let mut cursor = Cursor::new(text);
    let mut screen = EdmObject::bare("Screen");
    while let Some(line) = cursor.peek() {
        if line.is_empty() || IGNORE.contains(&line) {
            cursor.advance();
        } else if line.starts_with("# (") {
            let child = parse_block(&mut cursor)?;
            screen.add_object(child)?;
        } else {
            parse_property(&mut cursor, &mut screen)?;
        }
    }
    Ok(screen)
}

/// Parse a single object block, the text from `# (Type)` to its matching
/// `endObjectProperties`. Leading blank lines are skipped.
pub fn parse_object(text: &str) -> Result<EdmObject, ParseError> {
    let mut cursor = Cursor::new(text);
    while let Some(line) = cursor.peek() {
        if line.is_empty() {
            cursor.advance();
        } else {
            break;
        }
    }
    parse_block(&mut cursor)
}

struct Cursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor {
            lines: text.trim().lines().map(str::trim).collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// 1-based line number of the current position, for error reports.
    fn line_no(&self) -> usize {
        self.pos + 1
    }
}

fn parse_block(cursor: &mut Cursor<'_>) -> Result<EdmObject, ParseError> {
    let header = cursor.peek().unwrap_or("");
    let kind = header
        .strip_prefix("# (")
        .and_then(|rest| rest.split_once(')'))
        .map(|(kind, _)| kind)
        .ok_or_else(|| ParseError::MissingTypeHeader {
            line: cursor.line_no(),
            text: header.to_string(),
        })?;
    let mut ob = EdmObject::bare(kind);
    cursor.advance();
    loop {
        let Some(line) = cursor.peek() else {
            return Err(ParseError::UnexpectedEof(ob.kind().to_string()));
        };
        if line.is_empty() || IGNORE.contains(&line) {
            cursor.advance();
        } else if line == "endObjectProperties" {
            cursor.advance();
            return Ok(ob);
        } else if line.starts_with("# (") {
            let child = parse_block(cursor)?;
            ob.add_object(child)?;
        } else {
            parse_property(cursor, &mut ob)?;
        }
    }
}

/// Parse one property line (or a `key {` multi-line block) into `ob`. The
/// cursor is left after the consumed lines.
fn parse_property(cursor: &mut Cursor<'_>, ob: &mut EdmObject) -> Result<(), ParseError> {
    let line = cursor.peek().unwrap_or("");
    let line_no = cursor.line_no();
    let mut parts = line.split_whitespace();
    let Some(key) = parts.next() else {
        cursor.advance();
        return Ok(());
    };
    match parts.next() {
        None => {
            // a bare keyword is a flag
            ob.set(key, true);
            cursor.advance();
        }
        Some("{") => {
            let key = key.to_string();
            cursor.advance();
            let value = parse_multiline(cursor, &key)?;
            ob.set(key, value);
        }
        Some(_) => {
            let raw = line[key.len()..].trim();
            let value = strip_wrapping_quotes(raw);
            if GEOMETRY_KEYS.contains(&key) {
                let n: i64 = value.parse().map_err(|_| ParseError::BadGeometry {
                    line: line_no,
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
                ob.set(key, n);
            } else {
                ob.set(key, value);
            }
            cursor.advance();
        }
    }
    Ok(())
}

/// Parse the interior of a `key {` block up to the closing `}`. The first
/// interior line fixes the shape: one token per line is a list, two or more
/// is an integer-keyed map.
fn parse_multiline(cursor: &mut Cursor<'_>, key: &str) -> Result<PropValue, ParseError> {
    let mut value: Option<PropValue> = None;
    loop {
        let Some(line) = cursor.peek() else {
            return Err(ParseError::UnexpectedEof(key.to_string()));
        };
        let line_no = cursor.line_no();
        if line == "}" {
            cursor.advance();
            // an empty block reads as an empty list
            return Ok(value.unwrap_or_else(|| PropValue::List(Vec::new())));
        }
        let tokens = tokenize(line);
        if tokens.is_empty() {
            cursor.advance();
            continue;
        }
        match (&mut value, tokens.len()) {
            (None, 1) => value = Some(PropValue::List(vec![tokens[0].clone()])),
            (None, _) => {
                let mut map = BTreeMap::new();
                map.insert(parse_map_key(&tokens[0], line_no, key)?, tokens[1..].join(" "));
                value = Some(PropValue::Map(map));
            }
            (Some(PropValue::List(items)), 1) => items.push(tokens[0].clone()),
            (Some(PropValue::Map(map)), n) if n > 1 => {
                map.insert(parse_map_key(&tokens[0], line_no, key)?, tokens[1..].join(" "));
            }
            _ => {
                return Err(ParseError::MixedBlockShape {
                    line: line_no,
                    key: key.to_string(),
                });
            }
        }
        cursor.advance();
    }
}

fn parse_map_key(token: &str, line: usize, key: &str) -> Result<i64, ParseError> {
    token.parse().map_err(|_| ParseError::BadMapKey {
        line,
        key: key.to_string(),
        token: token.to_string(),
    })
}

/// Split a block interior line into tokens, keeping quoted substrings as
/// single tokens with their quotes. Backslash-escaped quotes are masked
/// before the split and restored after, so they never toggle quoting.
fn tokenize(line: &str) -> Vec<String> {
    const MASK: char = '\u{0}';
    let masked = line.replace("\\\"", &MASK.to_string());
    let mut tokens = Vec::new();
    for (i, part) in masked.trim().split('"').enumerate() {
        let unmasked = part.replace(MASK, "\\\"");
        if i % 2 == 0 {
            tokens.extend(unmasked.split_whitespace().map(str::to_string));
        } else {
            tokens.push(format!("\"{unmasked}\""));
        }
    }
    tokens
}

/// Trim at most one pair of wrapping quote characters.
fn strip_wrapping_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: &str = "\
# (Rectangle)
object activeRectangleClass
beginObjectProperties
major 4
minor 0
release 0
x 57
y 95
w 167
h 161
lineColor index 14
fillColor index 0
endObjectProperties
";

    #[test]
    fn parses_a_simple_block() {
        let ob = parse_object(RECT).unwrap();
        assert_eq!(ob.kind(), "Rectangle");
        assert_eq!(ob.position().unwrap(), (57, 95));
        assert_eq!(ob.dimensions().unwrap(), (167, 161));
        assert_eq!(ob.string("lineColor").unwrap(), "index 14");
        assert_eq!(ob.string("object").unwrap(), "activeRectangleClass");
    }

    #[test]
    fn bare_keyword_is_a_flag() {
        let text = "\
# (Rectangle)
object activeRectangleClass
beginObjectProperties
x 0
y 0
w 10
h 10
invisible
endObjectProperties
";
        let ob = parse_object(text).unwrap();
        assert_eq!(ob.get("invisible").and_then(PropValue::as_bool), Some(true));
    }

    #[test]
    fn block_shape_is_fixed_by_first_line() {
        let list_text = "\
# (Text)
beginObjectProperties
x 0
y 0
w 10
h 10
value {
  \"line one\"
  \"line two\"
}
endObjectProperties
";
        let ob = parse_object(list_text).unwrap();
        let value = ob.get("value").unwrap().as_list().unwrap();
        assert_eq!(value, ["\"line one\"", "\"line two\""]);

        let map_text = "\
# (Lines)
beginObjectProperties
x 0
y 0
w 10
h 10
xPoints {
  0 10
  1 30
}
endObjectProperties
";
        let ob = parse_object(map_text).unwrap();
        let points = ob.get("xPoints").unwrap().as_map().unwrap();
        assert_eq!(points.get(&0).map(String::as_str), Some("10"));
        assert_eq!(points.get(&1).map(String::as_str), Some("30"));
    }

    #[test]
    fn mixed_block_shape_is_an_error() {
        let text = "\
# (Lines)
beginObjectProperties
x 0
y 0
w 10
h 10
xPoints {
  0 10
  1
}
endObjectProperties
";
        assert!(matches!(
            parse_object(text),
            Err(ParseError::MixedBlockShape { key, .. }) if key == "xPoints"
        ));
    }

    #[test]
    fn escaped_quotes_do_not_toggle_quoting() {
        let text = "\
# (Text)
beginObjectProperties
x 0
y 0
w 10
h 10
value {
  \"say \\\"hi\\\"\"
}
endObjectProperties
";
        let ob = parse_object(text).unwrap();
        let value = ob.get("value").unwrap().as_list().unwrap();
        assert_eq!(value, ["\"say \\\"hi\\\"\""]);
    }

    #[test]
    fn geometry_must_be_integers() {
        let text = "\
# (Rectangle)
beginObjectProperties
x wide
endObjectProperties
";
        assert!(matches!(
            parse_object(text),
            Err(ParseError::BadGeometry { key, .. }) if key == "x"
        ));
    }

    #[test]
    fn missing_header_is_an_error() {
        assert!(matches!(
            parse_object("object activeRectangleClass\n"),
            Err(ParseError::MissingTypeHeader { line: 1, .. })
        ));
    }

    #[test]
    fn unterminated_block_is_an_error() {
        let text = "\
# (Rectangle)
beginObjectProperties
x 0
";
        assert!(matches!(
            parse_object(text),
            Err(ParseError::UnexpectedEof(kind)) if kind == "Rectangle"
        ));
    }

    #[test]
    fn wrapping_quotes_are_trimmed_once() {
        let text = "\
# (Text)
beginObjectProperties
x 0
y 0
w 10
h 10
font \"arial-medium-r-14.0\"
endObjectProperties
";
        let ob = parse_object(text).unwrap();
        assert_eq!(ob.string("font").unwrap(), "arial-medium-r-14.0");
    }

    #[test]
    fn screen_document_with_nested_group() {
        let text = "\
4 0 1
beginScreenProperties
major 4
minor 0
release 1
x 0
y 0
w 500
h 600
font \"arial-medium-r-14.0\"
endScreenProperties

# (Group)
object activeGroupClass
beginObjectProperties
major 4
minor 0
release 0
x 10
y 10
w 100
h 100

beginGroup

# (Rectangle)
object activeRectangleClass
beginObjectProperties
major 4
minor 0
release 0
x 20
y 20
w 50
h 50
endObjectProperties

endGroup

visPv \"LOCA=$(P)\"
endObjectProperties

# (Circle)
object activeCircleClass
beginObjectProperties
major 4
minor 0
release 0
x 200
y 200
w 30
h 30
endObjectProperties
";
        let screen = parse_screen(text).unwrap();
        assert_eq!(screen.kind(), "Screen");
        assert_eq!(screen.dimensions().unwrap(), (500, 600));
        assert_eq!(screen.children().len(), 2);
        let group = &screen.children()[0];
        assert_eq!(group.kind(), "Group");
        assert_eq!(group.children().len(), 1);
        assert_eq!(group.children()[0].kind(), "Rectangle");
        assert_eq!(group.string("visPv").unwrap(), "LOCA=$(P)");
        assert_eq!(screen.children()[1].kind(), "Circle");
    }
}
