//! Writer for the `.edl` text grammar.
//!
//! Output ordering is fixed so generated files diff cleanly: the geometry
//! and version keys come first in a literal order, everything else follows
//! lexically sorted, and `Group` visibility keys are held back until after
//! the nested `beginGroup` block.

use crate::object::EdmObject;
use crate::value::PropValue;

/// Keys always emitted first, in exactly this order.
const FIRST_KEYS: [&str; 7] = ["major", "minor", "release", "x", "y", "w", "h"];

/// Keys a `Group` emits after its nested block, never before.
const LAST_KEYS: [&str; 4] = ["visPv", "visInvert", "visMin", "visMax"];

impl EdmObject {
    /// Render this object (and its children) as `.edl` text.
    pub fn to_edl(&self) -> String {
        let ob = self.corrected();
        let mut lines: Vec<String> = Vec::new();
        if ob.is_screen() {
            lines.push("4 0 1".to_string());
            lines.push("beginScreenProperties".to_string());
            lines.push(first_keys(&ob));
            lines.push(other_keys(&ob, &FIRST_KEYS));
            lines.push("endScreenProperties".to_string());
            lines.push(String::new());
            for child in ob.children() {
                lines.push(child.to_edl());
            }
        } else {
            lines.push(format!("# ({})", ob.kind()));
            lines.push(format!("object {}", class_name(&ob)));
            lines.push("beginObjectProperties".to_string());
            lines.push(first_keys(&ob));
            if ob.kind() == "Group" {
                let skip: Vec<&str> = FIRST_KEYS.iter().chain(LAST_KEYS.iter()).copied().collect();
                lines.push(other_keys(&ob, &skip));
                lines.push(String::new());
                lines.push("beginGroup".to_string());
                lines.push(String::new());
                for child in ob.children() {
                    lines.push(child.to_edl());
                }
                lines.push("endGroup".to_string());
                lines.push(String::new());
                let mut last: Vec<&str> = LAST_KEYS.to_vec();
                last.sort_unstable();
                lines.push(emit_keys(&ob, &last));
            } else {
                lines.push(other_keys(&ob, &FIRST_KEYS));
            }
            lines.push("endObjectProperties".to_string());
            lines.push(String::new());
        }
        lines.join("\n")
    }

    /// A copy with the known-bad Related Display state corrected: a sole
    /// empty quoted `displayFileName` entry means "no target files", so the
    /// file and symbol tables are cleared and `numDsps` zeroed.
    fn corrected(&self) -> EdmObject {
        let mut ob = self.clone();
        if ob.kind() == "Related Display"
            && let Some(files) = ob.get("displayFileName").and_then(PropValue::as_map)
            && files.len() == 1
            && files.values().next().map(String::as_str) == Some("\"\"")
        {
            ob.set("displayFileName", std::collections::BTreeMap::<i64, String>::new());
            ob.set("symbols", std::collections::BTreeMap::<i64, String>::new());
            ob.set("numDsps", 0);
        }
        ob
    }
}

fn class_name(ob: &EdmObject) -> String {
    match ob.get("object").and_then(PropValue::as_str) {
        Some(class) => class.to_string(),
        None => format!("active{}Class", ob.kind().replace(' ', "")),
    }
}

fn first_keys(ob: &EdmObject) -> String {
    emit_keys(ob, &FIRST_KEYS)
}

fn other_keys(ob: &EdmObject, skip: &[&str]) -> String {
    let mut keys: Vec<&str> = ob
        .properties()
        .keys()
        .filter(|k| !skip.contains(k))
        .collect();
    keys.sort_unstable();
    emit_keys(ob, &keys)
}

fn emit_keys(ob: &EdmObject, keys: &[&str]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for &key in keys {
        if key == "object" {
            continue;
        }
        let Some(value) = ob.get(key) else {
            continue;
        };
        match value {
            PropValue::Bool(true) => lines.push(key.to_string()),
            PropValue::Bool(false) => {}
            PropValue::Int(n) => lines.push(format!("{key} {n}")),
            PropValue::Str(s) => lines.push(format!("{key} {s}")),
            PropValue::List(items) => {
                if !items.is_empty() {
                    lines.push(format!("{key} {{"));
                    for item in items {
                        lines.push(format!("  {item}"));
                    }
                    lines.push("}".to_string());
                }
            }
            PropValue::Map(map) => {
                if !map.is_empty() {
                    lines.push(format!("{key} {{"));
                    for (k, v) in map {
                        lines.push(format!("  {k} {v}"));
                    }
                    lines.push("}".to_string());
                }
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_object, parse_screen};
    use std::collections::BTreeMap;

    #[test]
    fn first_keys_come_first_in_literal_order() {
        let mut ob = EdmObject::new("Rectangle");
        ob.set("lineColor", "index 14");
        ob.set("fillColor", "index 0");
        let text = ob.to_edl();
        let keys: Vec<&str> = text
            .lines()
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        let major = keys.iter().position(|&k| k == "major").unwrap();
        assert_eq!(
            &keys[major..major + 7],
            &["major", "minor", "release", "x", "y", "w", "h"]
        );
        // remaining keys are sorted
        let fill = keys.iter().position(|&k| k == "fillColor").unwrap();
        let line = keys.iter().position(|&k| k == "lineColor").unwrap();
        assert!(fill < line);
    }

    #[test]
    fn flags_emit_bare_and_false_is_suppressed() {
        let mut ob = EdmObject::new("Rectangle");
        ob.set("invisible", true);
        ob.set("lineAlarm", false);
        let text = ob.to_edl();
        assert!(text.lines().any(|l| l == "invisible"));
        assert!(!text.contains("lineAlarm"));
    }

    #[test]
    fn zero_still_prints() {
        let ob = EdmObject::new("Rectangle");
        assert!(ob.to_edl().lines().any(|l| l == "x 0"));
    }

    #[test]
    fn empty_blocks_are_suppressed() {
        let mut ob = EdmObject::new("Text");
        ob.set("value", Vec::<String>::new());
        ob.set("xPoints", BTreeMap::<i64, String>::new());
        let text = ob.to_edl();
        assert!(!text.contains("value"));
        assert!(!text.contains("xPoints"));
    }

    #[test]
    fn group_emits_visibility_keys_after_children() {
        let mut group = EdmObject::new("Group");
        group.set("visPv", "\"LOCA=$(P)\"");
        group.add_object(EdmObject::new("Rectangle")).unwrap();
        let text = group.to_edl();
        let end_group = text.find("endGroup").unwrap();
        let vis = text.find("visPv").unwrap();
        let begin_group = text.find("beginGroup").unwrap();
        assert!(begin_group < end_group);
        assert!(end_group < vis);
    }

    #[test]
    fn empty_related_display_is_normalized() {
        let mut ob = EdmObject::new("Related Display");
        let mut files = BTreeMap::new();
        files.insert(0, "\"\"".to_string());
        ob.set("displayFileName", files);
        ob.set("numDsps", 1);
        let text = ob.to_edl();
        assert!(!text.contains("displayFileName"));
        assert!(text.lines().any(|l| l == "numDsps 0"));
        // serialization does not mutate the object itself
        assert!(ob.get("displayFileName").unwrap().as_map().is_some());
        assert_eq!(ob.int("numDsps").unwrap(), 1);
    }

    #[test]
    fn serialized_output_reparses_identically() {
        let mut screen = EdmObject::new("Screen");
        screen.set("font", "\"arial-medium-r-14.0\"".to_string());
        let mut group = EdmObject::new("Group");
        group.set_origin(10, 10);
        let mut lines = EdmObject::new("Lines");
        let mut points = BTreeMap::new();
        points.insert(0, "10".to_string());
        points.insert(1, "30".to_string());
        lines.set("xPoints", points.clone());
        lines.set("yPoints", points);
        group.add_object(lines).unwrap();
        screen.add_object(group).unwrap();

        let text = screen.to_edl();
        let reparsed = parse_screen(&text).unwrap();
        // a second cycle is byte-stable
        assert_eq!(reparsed.to_edl(), parse_screen(&reparsed.to_edl()).unwrap().to_edl());
        assert_eq!(reparsed.children().len(), 1);
        assert_eq!(reparsed.children()[0].children()[0].kind(), "Lines");
    }

    #[test]
    fn block_round_trips_through_parse() {
        let mut ob = EdmObject::new("Text");
        ob.set(
            "value",
            vec!["\"line one\"".to_string(), "\"line two\"".to_string()],
        );
        let text = ob.to_edl();
        let back = parse_object(&text).unwrap();
        assert_eq!(back.get("value"), ob.get("value"));
        assert_eq!(back.to_edl(), text);
    }
}
